//! Handler that records every call it receives.

use beehive_mq::{DumpData, ExitData, Handler, HandlerResult, NopData, TaskData};
use crossbeam::channel::Sender;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Before,
    After,
    Nop,
    Exit,
    Task,
    Dump,
}

/// Records calls in order. `Exit` finishes the loop unless configured otherwise.
#[derive(Debug)]
pub struct RecordingHandler {
    pub calls: Vec<Call>,
    pub task_result: HandlerResult,
    pub exit_result: HandlerResult,
    observer: Option<Sender<Call>>,
}

impl Default for RecordingHandler {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            task_result: HandlerResult::Continue,
            exit_result: HandlerResult::Finish,
            observer: None,
        }
    }
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task_result(mut self, result: HandlerResult) -> Self {
        self.task_result = result;
        self
    }

    /// Also forward each kind-specific call to `observer` as it happens
    pub fn with_observer(mut self, observer: Sender<Call>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn count(&self, call: Call) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Kind-specific calls only, hooks stripped
    pub fn kinds(&self) -> Vec<Call> {
        self.calls
            .iter()
            .copied()
            .filter(|c| !matches!(c, Call::Before | Call::After))
            .collect()
    }

    fn record(&mut self, call: Call) {
        self.calls.push(call);
        if let Some(observer) = &self.observer {
            let _ = observer.send(call);
        }
    }
}

impl Handler for RecordingHandler {
    fn on_before_message(&mut self) {
        self.calls.push(Call::Before);
    }

    fn on_after_message(&mut self) {
        self.calls.push(Call::After);
    }

    fn on_nop(&mut self, _nop: &NopData) -> HandlerResult {
        self.record(Call::Nop);
        HandlerResult::Continue
    }

    fn on_exit(&mut self, _exit: &ExitData) -> HandlerResult {
        self.record(Call::Exit);
        self.exit_result
    }

    fn on_task(&mut self, _task: &TaskData) -> HandlerResult {
        self.record(Call::Task);
        self.task_result
    }

    fn on_dump(&mut self, _dump: &DumpData) -> HandlerResult {
        self.record(Call::Dump);
        HandlerResult::Continue
    }
}

/// Overrides only `on_exit`; everything else uses the trait defaults
#[derive(Debug, Default)]
pub struct ExitOnly;

impl Handler for ExitOnly {
    fn on_exit(&mut self, _exit: &ExitData) -> HandlerResult {
        HandlerResult::Finish
    }
}
