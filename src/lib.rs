#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Beehive MQ
//!
//! Thread-to-thread command channel: a typed message envelope, a thread-safe
//! blocking queue, and a dispatch loop that turns an owned background thread
//! into a message-driven worker.
//!
//! ## Architecture
//!
//! ```text
//! Message ──→ MessageQueue (mutex-guarded FIFO, non-blocking)
//!                  │
//!                  ▼
//!            SignalingQueue (blocking receive + dispatch loop)
//!                  │
//!                  ▼
//!            Handler (on_nop / on_exit / on_task / on_dump → HandlerResult)
//!                  │
//!                  ▼
//!            HandlerThread (owns queue + thread, join / detach)
//! ```
//!
//! Each [`SignalingQueue`] feeds exactly one consuming loop. Any number of
//! producers may send; messages from a single producer arrive in send order.
//! There is no priority ordering, work stealing, or fan-out.
//!
//! ## Module Organization
//!
//! - [`message`] - Message kinds and payloads
//! - [`queue`] - Non-blocking FIFO
//! - [`signaling`] - Blocking queue and dispatch loop
//! - [`handler`] - Handler trait and loop verdicts
//! - [`handler_thread`] - Owned worker thread
//! - [`config`] - Layered configuration
//! - [`logging`] - Structured logging setup
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use beehive_mq::{ExitData, Handler, HandlerResult, HandlerThread, Message};
//!
//! struct Quitter;
//!
//! impl Handler for Quitter {
//!     fn on_exit(&mut self, _exit: &ExitData) -> HandlerResult {
//!         HandlerResult::Finish
//!     }
//! }
//!
//! # fn main() -> beehive_mq::Result<()> {
//! let worker = HandlerThread::spawn(Quitter)?;
//! worker.queue().send(Message::new_nop());
//! worker.queue().send(Message::new_exit());
//! worker.join()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod handler_thread;
pub mod logging;
pub mod message;
pub mod queue;
pub mod signaling;

pub use config::{BeehiveConfig, ConfigManager, HandlerThreadConfig, LoggingConfig};
pub use error::{BeehiveError, Result};
pub use handler::{Handler, HandlerResult};
pub use handler_thread::{HandlerThread, HandlerThreadBuilder, MessageSender, Stopped};
pub use message::{DumpData, ExitData, Message, MessageKind, NopData, TaskData};
pub use queue::MessageQueue;
pub use signaling::{dispatch, SignalingQueue};
