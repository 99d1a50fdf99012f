//! # Signaling Queue
//!
//! Blocking receive layered over [`MessageQueue`], plus the dispatch loop that
//! drives a [`Handler`].
//!
//! ## Synchronization
//!
//! Two independent domains:
//!
//! - the [`MessageQueue`]'s own mutex protects queue contents and is held only
//!   across a push or pop;
//! - a wait mutex and condition variable coordinate sleeping consumers and is
//!   never held while touching queue contents from `send`.
//!
//! A consumer checks the queue while holding the wait mutex and releases it
//! atomically when it sleeps. A producer pushes first, then takes the wait
//! mutex before notifying. So a push that lands after the consumer's check
//! cannot notify until the consumer is actually waiting, and no wake-up is
//! lost. Each wake re-checks the queue, which also absorbs spurious wake-ups.

use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

use crate::handler::{Handler, HandlerResult};
use crate::message::Message;
use crate::queue::MessageQueue;

/// A [`MessageQueue`] with blocking receive.
#[derive(Debug, Default)]
pub struct SignalingQueue {
    queue: MessageQueue,
    wait_lock: Mutex<()>,
    wait_cv: Condvar,
}

impl SignalingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue and wake one waiting consumer
    pub fn send(&self, message: Message) {
        self.queue.send(message);
        let _guard = self.wait_lock.lock();
        self.wait_cv.notify_one();
    }

    /// Block until a message is available, then dequeue it.
    ///
    /// Blocks forever if nothing is ever sent.
    pub fn receive(&self) -> Message {
        let mut guard = self.wait_lock.lock();
        loop {
            if let Some(message) = self.queue.receive() {
                return message;
            }
            self.wait_cv.wait(&mut guard);
        }
    }

    /// Like [`receive`](Self::receive) but gives up after `timeout`.
    ///
    /// Returns `None` only if the queue is still empty at the deadline.
    pub fn receive_timeout(&self, timeout: Duration) -> Option<Message> {
        let deadline = Instant::now() + timeout;
        let mut guard = self.wait_lock.lock();
        loop {
            if let Some(message) = self.queue.receive() {
                return Some(message);
            }
            if self.wait_cv.wait_until(&mut guard, deadline).timed_out() {
                return self.queue.receive();
            }
        }
    }

    /// Non-blocking receive
    pub fn try_receive(&self) -> Option<Message> {
        self.queue.receive()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.empty()
    }

    /// Remove every pending message without dispatching it
    pub fn drain(&self) -> Vec<Message> {
        self.queue.drain()
    }

    /// Run the dispatch loop until a handler method returns `Error` or `Finish`.
    ///
    /// Returns the verdict that stopped the loop. The loop never restarts
    /// itself and does no retries.
    pub fn run_loop<H: Handler + ?Sized>(&self, handler: &mut H) -> HandlerResult {
        loop {
            let message = self.receive();
            let result = dispatch(handler, &message);
            if result.should_stop() {
                if result.is_error() {
                    warn!(kind = %message.kind(), "Handler returned error, stopping dispatch loop");
                } else {
                    info!(kind = %message.kind(), "Handler finished, stopping dispatch loop");
                }
                return result;
            }
        }
    }
}

/// One dispatch cycle: before hook, the kind-specific method, after hook.
pub fn dispatch<H: Handler + ?Sized>(handler: &mut H, message: &Message) -> HandlerResult {
    debug!(kind = %message.kind(), "Dispatching message");

    handler.on_before_message();
    let result = match message {
        Message::Nop(data) => handler.on_nop(data),
        Message::Exit(data) => handler.on_exit(data),
        Message::Task(data) => handler.on_task(data),
        Message::Dump(data) => handler.on_dump(data),
    };
    handler.on_after_message();

    trace!(kind = %message.kind(), result = %result, "Message dispatched");
    result
}
