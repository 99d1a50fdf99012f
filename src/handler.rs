//! # Handler Contract
//!
//! A [`Handler`] reacts to messages pulled off a [`SignalingQueue`](crate::SignalingQueue)
//! by the dispatch loop. For every message the loop calls, in order:
//!
//! 1. [`Handler::on_before_message`]
//! 2. exactly one of `on_nop`/`on_exit`/`on_task`/`on_dump`, chosen by kind
//! 3. [`Handler::on_after_message`]
//!
//! and then inspects the [`HandlerResult`] returned by step 2.
//!
//! Every method has a default body: the hooks do nothing and the kind-specific
//! methods return [`HandlerResult::Continue`]. Implementors override only the
//! kinds they care about. Note that the default `on_exit` also continues, so a
//! handler that should stop on `Exit` must override it to return `Finish`.
//!
//! ```rust
//! use beehive_mq::{ExitData, Handler, HandlerResult, TaskData};
//!
//! #[derive(Default)]
//! struct Counter {
//!     tasks: usize,
//! }
//!
//! impl Handler for Counter {
//!     fn on_task(&mut self, _task: &TaskData) -> HandlerResult {
//!         self.tasks += 1;
//!         HandlerResult::Continue
//!     }
//!
//!     fn on_exit(&mut self, _exit: &ExitData) -> HandlerResult {
//!         HandlerResult::Finish
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::message::{DumpData, ExitData, NopData, TaskData};

/// Loop-control verdict returned by kind-specific handler methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerResult {
    /// Keep looping
    Continue,
    /// Stop looping, abnormal termination. The handler reports the cause itself.
    Error,
    /// Stop looping, graceful termination
    Finish,
}

impl HandlerResult {
    /// `Error` and `Finish` both stop the loop
    pub fn should_stop(&self) -> bool {
        !matches!(self, Self::Continue)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for HandlerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => write!(f, "continue"),
            Self::Error => write!(f, "error"),
            Self::Finish => write!(f, "finish"),
        }
    }
}

/// Reacts to dispatched messages; see the [module docs](self) for call order.
pub trait Handler {
    /// Runs before every message is decoded. Cannot veto dispatch.
    fn on_before_message(&mut self) {}

    /// Runs after every kind-specific method, whatever it returned.
    fn on_after_message(&mut self) {}

    fn on_nop(&mut self, _nop: &NopData) -> HandlerResult {
        HandlerResult::Continue
    }

    fn on_exit(&mut self, _exit: &ExitData) -> HandlerResult {
        HandlerResult::Continue
    }

    fn on_task(&mut self, _task: &TaskData) -> HandlerResult {
        HandlerResult::Continue
    }

    fn on_dump(&mut self, _dump: &DumpData) -> HandlerResult {
        HandlerResult::Continue
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn on_before_message(&mut self) {
        (**self).on_before_message()
    }

    fn on_after_message(&mut self) {
        (**self).on_after_message()
    }

    fn on_nop(&mut self, nop: &NopData) -> HandlerResult {
        (**self).on_nop(nop)
    }

    fn on_exit(&mut self, exit: &ExitData) -> HandlerResult {
        (**self).on_exit(exit)
    }

    fn on_task(&mut self, task: &TaskData) -> HandlerResult {
        (**self).on_task(task)
    }

    fn on_dump(&mut self, dump: &DumpData) -> HandlerResult {
        (**self).on_dump(dump)
    }
}
