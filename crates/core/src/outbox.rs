use folio_protocol::DomCommand;

use crate::schedule::{Scheduler, TaskKey};

/// Collects the side effects of one handler invocation: DOM commands in
/// emission order, and delayed tasks relative to the invocation time.
pub struct Outbox<'a> {
    now_ms: f64,
    commands: Vec<DomCommand>,
    scheduler: &'a mut Scheduler,
}

impl<'a> Outbox<'a> {
    pub fn new(now_ms: f64, scheduler: &'a mut Scheduler) -> Self {
        Self {
            now_ms,
            commands: Vec::new(),
            scheduler,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn push(&mut self, cmd: DomCommand) {
        self.commands.push(cmd);
    }

    pub fn extend(&mut self, cmds: impl IntoIterator<Item = DomCommand>) {
        self.commands.extend(cmds);
    }

    /// Schedule `key` to fire `delay_ms` from now, superseding any pending
    /// instance.
    pub fn after(&mut self, delay_ms: f64, key: TaskKey) {
        self.scheduler.schedule(key, self.now_ms + delay_ms);
    }

    pub fn cancel(&mut self, key: TaskKey) -> bool {
        self.scheduler.cancel(key)
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.scheduler.is_pending(key)
    }

    /// Pop every task due at the invocation time.
    pub fn take_due(&mut self) -> Vec<TaskKey> {
        self.scheduler.take_due(self.now_ms)
    }

    pub fn commands(&self) -> &[DomCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DomCommand> {
        self.commands
    }
}
