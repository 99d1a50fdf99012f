//! # Message Envelope
//!
//! The closed set of commands that travel over a [`SignalingQueue`](crate::SignalingQueue).
//!
//! A [`Message`] is a sum type: each variant carries exactly one payload
//! matching its [`MessageKind`], so the "one tag, one payload" invariant holds
//! by construction. Payloads are decoded through the checked accessors
//! ([`Message::nop`], [`Message::exit`], [`Message::task`], [`Message::dump`]),
//! which return `None` when asked for the wrong kind.
//!
//! Payload structs carry no fields today. Work descriptions for `Task` and
//! diagnostic options for `Dump` are expected to be added as fields here;
//! equality stays structural so nothing else needs to change when they are.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BeehiveError;

/// Discriminant of a [`Message`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// No-op, used as a wake-up or heartbeat
    Nop,
    /// Request loop termination
    Exit,
    /// Unit of work is available
    Task,
    /// Request a diagnostic/state dump
    Dump,
}

impl MessageKind {
    pub const ALL: [MessageKind; 4] = [Self::Nop, Self::Exit, Self::Task, Self::Dump];

    /// Control messages steer the loop and carry no work
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Nop | Self::Exit)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nop => write!(f, "nop"),
            Self::Exit => write!(f, "exit"),
            Self::Task => write!(f, "task"),
            Self::Dump => write!(f, "dump"),
        }
    }
}

impl std::str::FromStr for MessageKind {
    type Err = BeehiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nop" => Ok(Self::Nop),
            "exit" => Ok(Self::Exit),
            "task" => Ok(Self::Task),
            "dump" => Ok(Self::Dump),
            _ => Err(BeehiveError::InvalidMessageKind(s.to_string())),
        }
    }
}

/// Payload of a `Nop` message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NopData;

/// Payload of an `Exit` message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ExitData;

/// Payload of a `Task` message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TaskData;

/// Payload of a `Dump` message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DumpData;

/// A command sent to a dispatch loop.
///
/// Two messages are equal iff they have the same kind and equal payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Message {
    Nop(NopData),
    Exit(ExitData),
    Task(TaskData),
    Dump(DumpData),
}

impl Message {
    pub fn new_nop() -> Self {
        Self::Nop(NopData)
    }

    pub fn new_exit() -> Self {
        Self::Exit(ExitData)
    }

    pub fn new_task() -> Self {
        Self::Task(TaskData)
    }

    pub fn new_dump() -> Self {
        Self::Dump(DumpData)
    }

    /// Build the default message for a kind
    pub fn from_kind(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Nop => Self::new_nop(),
            MessageKind::Exit => Self::new_exit(),
            MessageKind::Task => Self::new_task(),
            MessageKind::Dump => Self::new_dump(),
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Nop(_) => MessageKind::Nop,
            Self::Exit(_) => MessageKind::Exit,
            Self::Task(_) => MessageKind::Task,
            Self::Dump(_) => MessageKind::Dump,
        }
    }

    pub fn nop(&self) -> Option<&NopData> {
        match self {
            Self::Nop(data) => Some(data),
            _ => None,
        }
    }

    pub fn exit(&self) -> Option<&ExitData> {
        match self {
            Self::Exit(data) => Some(data),
            _ => None,
        }
    }

    pub fn task(&self) -> Option<&TaskData> {
        match self {
            Self::Task(data) => Some(data),
            _ => None,
        }
    }

    pub fn dump(&self) -> Option<&DumpData> {
        match self {
            Self::Dump(data) => Some(data),
            _ => None,
        }
    }
}

impl From<NopData> for Message {
    fn from(data: NopData) -> Self {
        Self::Nop(data)
    }
}

impl From<ExitData> for Message {
    fn from(data: ExitData) -> Self {
        Self::Exit(data)
    }
}

impl From<TaskData> for Message {
    fn from(data: TaskData) -> Self {
        Self::Task(data)
    }
}

impl From<DumpData> for Message {
    fn from(data: DumpData) -> Self {
        Self::Dump(data)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
