//! Mutex-guarded FIFO of [`Message`]s.
//!
//! Every operation takes the lock only for the duration of the mutation and
//! never blocks waiting for messages. Blocking receive lives in
//! [`SignalingQueue`](crate::SignalingQueue).

use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::trace;

use crate::message::Message;

/// Unbounded, non-blocking message queue.
///
/// Not `Clone`: a queue is owned by exactly one [`SignalingQueue`](crate::SignalingQueue).
#[derive(Debug, Default)]
pub struct MessageQueue {
    queue: Mutex<VecDeque<Message>>,
}

impl MessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the tail. Never blocks on capacity.
    pub fn send(&self, message: Message) {
        self.queue.lock().push_back(message);
    }

    /// Remove and return the head, or `None` if the queue is empty.
    pub fn receive(&self) -> Option<Message> {
        self.queue.lock().pop_front()
    }

    /// Whether the queue is empty right now. Only a hint once the lock is released.
    pub fn empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Snapshot of the pending count, same caveat as [`empty`](Self::empty)
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    /// Remove every pending message, oldest first
    pub fn drain(&self) -> Vec<Message> {
        self.queue.lock().drain(..).collect()
    }
}

impl Drop for MessageQueue {
    fn drop(&mut self) {
        let pending = self.queue.get_mut().len();
        if pending > 0 {
            trace!(pending = pending, "Dropping message queue with pending messages");
        }
    }
}
