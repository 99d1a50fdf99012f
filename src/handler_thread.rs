//! # Handler Thread
//!
//! An owned background thread running the dispatch loop against a
//! [`Handler`] it owns, fed by its own [`SignalingQueue`].
//!
//! ```text
//! producers ──send──→ SignalingQueue ──receive──→ run_loop(handler)
//!     ▲                                                 │
//!     └──── MessageSender (Arc clone)                   └─→ Stopped { handler, result }
//! ```
//!
//! The queue exists before the thread starts, so messages sent right after
//! [`HandlerThread::spawn`] returns are queued, never lost.
//!
//! [`join`](HandlerThread::join) and [`detach`](HandlerThread::detach) consume
//! the `HandlerThread`, so neither can be called twice. Dropping one without
//! calling either detaches the thread and logs a warning.
//!
//! ```rust
//! use beehive_mq::{ExitData, Handler, HandlerResult, HandlerThread, Message, TaskData};
//!
//! #[derive(Default)]
//! struct Worker {
//!     tasks: usize,
//! }
//!
//! impl Handler for Worker {
//!     fn on_task(&mut self, _task: &TaskData) -> HandlerResult {
//!         self.tasks += 1;
//!         HandlerResult::Continue
//!     }
//!
//!     fn on_exit(&mut self, _exit: &ExitData) -> HandlerResult {
//!         HandlerResult::Finish
//!     }
//! }
//!
//! # fn main() -> beehive_mq::Result<()> {
//! let worker = HandlerThread::spawn(Worker::default())?;
//! worker.queue().send(Message::new_task());
//! worker.queue().send(Message::new_exit());
//!
//! let stopped = worker.join()?;
//! assert_eq!(stopped.handler.tasks, 1);
//! assert_eq!(stopped.result, HandlerResult::Finish);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

use crate::config::HandlerThreadConfig;
use crate::error::{BeehiveError, Result};
use crate::handler::{Handler, HandlerResult};
use crate::message::Message;
use crate::signaling::SignalingQueue;

/// Cloneable producer handle onto a handler thread's queue
#[derive(Debug, Clone)]
pub struct MessageSender {
    queue: Arc<SignalingQueue>,
}

impl MessageSender {
    pub fn send(&self, message: Message) {
        self.queue.send(message);
    }

    pub fn queue(&self) -> &SignalingQueue {
        &self.queue
    }
}

/// What a handler thread hands back once its loop has stopped
#[derive(Debug)]
pub struct Stopped<H> {
    /// The handler, with whatever state it accumulated
    pub handler: H,
    /// The verdict that stopped the loop, `Error` or `Finish`
    pub result: HandlerResult,
}

/// Configures and spawns a [`HandlerThread`]
#[derive(Debug, Clone, Default)]
pub struct HandlerThreadBuilder {
    config: HandlerThreadConfig,
}

impl HandlerThreadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &HandlerThreadConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn stack_size(mut self, size: usize) -> Self {
        self.config.stack_size = Some(size);
        self
    }

    /// Start the thread. It immediately blocks waiting for the first message.
    pub fn spawn<H>(self, handler: H) -> Result<HandlerThread<H>>
    where
        H: Handler + Send + 'static,
    {
        self.config.validate()?;

        let name = self.config.name;
        let queue = Arc::new(SignalingQueue::new());

        let mut builder = thread::Builder::new().name(name.clone());
        if let Some(size) = self.config.stack_size {
            builder = builder.stack_size(size);
        }

        let loop_queue = Arc::clone(&queue);
        let handle = builder
            .spawn(move || {
                let mut handler = handler;
                debug!("Handler thread started");

                let result = loop_queue.run_loop(&mut handler);

                let pending = loop_queue.len();
                info!(result = %result, pending = pending, "Handler thread stopped");
                Stopped { handler, result }
            })
            .map_err(|source| BeehiveError::ThreadSpawn {
                name: name.clone(),
                source,
            })?;

        Ok(HandlerThread {
            name,
            queue,
            thread: Some(handle),
        })
    }
}

/// A [`Handler`] running on its own thread; see the [module docs](self).
#[derive(Debug)]
pub struct HandlerThread<H> {
    name: String,
    queue: Arc<SignalingQueue>,
    thread: Option<JoinHandle<Stopped<H>>>,
}

impl<H> HandlerThread<H>
where
    H: Handler + Send + 'static,
{
    /// Spawn with default settings
    pub fn spawn(handler: H) -> Result<Self> {
        HandlerThreadBuilder::new().spawn(handler)
    }
}

impl HandlerThread<()> {
    /// Entry point for configuring a thread before spawning it.
    ///
    /// The handler type is chosen by [`HandlerThreadBuilder::spawn`].
    pub fn builder() -> HandlerThreadBuilder {
        HandlerThreadBuilder::new()
    }
}

impl<H> HandlerThread<H> {
    /// The queue feeding this thread's loop
    pub fn queue(&self) -> &SignalingQueue {
        &self.queue
    }

    /// A producer handle that can outlive borrows of `self`
    pub fn sender(&self) -> MessageSender {
        MessageSender {
            queue: Arc::clone(&self.queue),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the loop has already stopped
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the loop to stop and take the handler back.
    ///
    /// Blocks until some handler method returns `Error` or `Finish`;
    /// usually preceded by sending an `Exit` message.
    pub fn join(mut self) -> Result<Stopped<H>> {
        let handle = self
            .thread
            .take()
            .ok_or_else(|| BeehiveError::ThreadReleased(self.name.clone()))?;

        handle
            .join()
            .map_err(|payload| BeehiveError::from_panic(&self.name, payload))
    }

    /// Let the thread run on independently; its handler is dropped when the loop stops
    pub fn detach(mut self) {
        if self.thread.take().is_some() {
            debug!(thread = %self.name, "Handler thread detached");
        }
    }
}

impl<H> Drop for HandlerThread<H> {
    fn drop(&mut self) {
        if let Some(handle) = self.thread.take() {
            if !handle.is_finished() {
                warn!(
                    thread = %self.name,
                    "HandlerThread dropped without join or detach; detaching running thread"
                );
            }
        }
    }
}
