mod common;

use beehive_mq::{dispatch, Handler, HandlerResult, Message, SignalingQueue};
use common::recording::{Call, ExitOnly, RecordingHandler};
use common::strategies::work_message_strategy;
use proptest::prelude::*;

#[test]
fn test_nop_task_exit_sequence() {
    let queue = SignalingQueue::new();
    queue.send(Message::new_nop());
    queue.send(Message::new_task());
    queue.send(Message::new_exit());

    let mut handler = RecordingHandler::new();
    let verdict = queue.run_loop(&mut handler);

    assert_eq!(verdict, HandlerResult::Finish);
    assert_eq!(handler.kinds(), vec![Call::Nop, Call::Task, Call::Exit]);
    assert_eq!(handler.count(Call::Before), 3);
    assert_eq!(handler.count(Call::After), 3);
    assert!(queue.is_empty());
}

#[test]
fn test_hooks_wrap_every_dispatch() {
    let queue = SignalingQueue::new();
    queue.send(Message::new_dump());
    queue.send(Message::new_exit());

    let mut handler = RecordingHandler::new();
    queue.run_loop(&mut handler);

    assert_eq!(
        handler.calls,
        vec![
            Call::Before,
            Call::Dump,
            Call::After,
            Call::Before,
            Call::Exit,
            Call::After,
        ]
    );
}

#[test]
fn test_error_stops_loop_like_finish() {
    let queue = SignalingQueue::new();
    queue.send(Message::new_task());
    queue.send(Message::new_nop());
    queue.send(Message::new_exit());

    let mut handler = RecordingHandler::new().with_task_result(HandlerResult::Error);
    let verdict = queue.run_loop(&mut handler);

    assert_eq!(verdict, HandlerResult::Error);
    assert_eq!(handler.kinds(), vec![Call::Task]);
    assert_eq!(handler.count(Call::After), 1);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_default_hooks_do_not_alter_results() {
    let mut handler = ExitOnly;
    assert_eq!(
        dispatch(&mut handler, &Message::new_task()),
        HandlerResult::Continue
    );
    assert_eq!(
        dispatch(&mut handler, &Message::new_nop()),
        HandlerResult::Continue
    );
    assert_eq!(
        dispatch(&mut handler, &Message::new_dump()),
        HandlerResult::Continue
    );
    assert_eq!(
        dispatch(&mut handler, &Message::new_exit()),
        HandlerResult::Finish
    );
}

#[test]
fn test_default_exit_keeps_looping() {
    struct Silent;
    impl Handler for Silent {}

    let queue = SignalingQueue::new();
    queue.send(Message::new_exit());
    queue.send(Message::new_exit());

    let mut handler = Silent;
    assert_eq!(
        dispatch(&mut handler, &queue.receive()),
        HandlerResult::Continue
    );
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_loop_runs_against_trait_object() {
    let queue = SignalingQueue::new();
    queue.send(Message::new_exit());

    let mut handler: Box<dyn Handler> = Box::new(ExitOnly);
    assert_eq!(queue.run_loop(handler.as_mut()), HandlerResult::Finish);
}

proptest! {
    /// Property: any run of work messages followed by Exit is dispatched in order,
    /// with one before/after pair per message
    #[test]
    fn loop_dispatches_in_send_order(work in prop::collection::vec(work_message_strategy(), 0..32)) {
        let queue = SignalingQueue::new();
        for message in &work {
            queue.send(message.clone());
        }
        queue.send(Message::new_exit());

        let mut handler = RecordingHandler::new();
        prop_assert_eq!(queue.run_loop(&mut handler), HandlerResult::Finish);

        let expected: Vec<Call> = work
            .iter()
            .map(|m| match m {
                Message::Nop(_) => Call::Nop,
                Message::Task(_) => Call::Task,
                Message::Dump(_) => Call::Dump,
                Message::Exit(_) => Call::Exit,
            })
            .chain(std::iter::once(Call::Exit))
            .collect();

        prop_assert_eq!(handler.kinds(), expected);
        prop_assert_eq!(handler.count(Call::Before), work.len() + 1);
        prop_assert_eq!(handler.count(Call::After), work.len() + 1);
    }
}
