use beehive_mq::{Message, MessageKind};
use proptest::prelude::*;

/// Strategy for generating message kinds
pub fn message_kind_strategy() -> impl Strategy<Value = MessageKind> {
    prop_oneof![
        Just(MessageKind::Nop),
        Just(MessageKind::Exit),
        Just(MessageKind::Task),
        Just(MessageKind::Dump),
    ]
}

/// Strategy for generating messages
pub fn message_strategy() -> impl Strategy<Value = Message> {
    message_kind_strategy().prop_map(Message::from_kind)
}

/// Strategy for generating messages that never stop a loop
pub fn work_message_strategy() -> impl Strategy<Value = Message> {
    prop_oneof![
        Just(Message::new_nop()),
        Just(Message::new_task()),
        Just(Message::new_dump()),
    ]
}

/// Interleaved queue operations: `true` sends, `false` receives
pub fn queue_ops_strategy() -> impl Strategy<Value = Vec<(bool, Message)>> {
    prop::collection::vec((any::<bool>(), message_strategy()), 0..64)
}
