//! Delayed tasks with one cancellable handle per logical transition.
//!
//! Scheduling a key that is already pending replaces the old deadline, so a
//! newer action always supersedes an older one instead of racing it. The
//! host arms a single browser timer for [`Scheduler::next_deadline`] and
//! calls back into the page when it fires.

/// Identifies one logical delayed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Mobile menu close animation finished.
    MenuSettle,
    /// Re-evaluate the active nav link after a smooth-scroll click.
    Rehighlight,
    /// Drop the temporary body transition after a theme change.
    ThemeTransitionEnd,
    LoadingHide,
    LoadingRemove,
    /// Type the next character of the hero tagline.
    TypeNext,
    RippleExpire(u64),
    SkillFill(usize),
    SkillGlow(usize),
    /// Viewport width settled after a resize burst.
    ResizeSettled,
    FormSent,
    FormReset,
    FormShakeEnd,
    SuccessShow,
    SuccessHide,
    SuccessRemove,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    key: TaskKey,
    due_ms: f64,
    seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
    seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` at `due_ms`. Returns `true` if an earlier pending
    /// instance of the same key was superseded.
    pub fn schedule(&mut self, key: TaskKey, due_ms: f64) -> bool {
        let replaced = self.cancel(key);
        self.seq += 1;
        self.pending.push(Pending {
            key,
            due_ms,
            seq: self.seq,
        });
        replaced
    }

    /// Cancel a pending task. Returns `true` if one was pending.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.key != key);
        self.pending.len() != before
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.pending.iter().any(|p| p.key == key)
    }

    pub fn due_at(&self, key: TaskKey) -> Option<f64> {
        self.pending.iter().find(|p| p.key == key).map(|p| p.due_ms)
    }

    /// Earliest deadline among pending tasks.
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending
            .iter()
            .map(|p| p.due_ms)
            .min_by(f64::total_cmp)
    }

    /// Remove and return every task due at or before `now_ms`, ordered by
    /// deadline and then by scheduling order.
    pub fn take_due(&mut self, now_ms: f64) -> Vec<TaskKey> {
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due_ms <= now_ms {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|p| p.key).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescheduling_supersedes() {
        let mut s = Scheduler::new();
        assert!(!s.schedule(TaskKey::MenuSettle, 300.0));
        assert!(s.schedule(TaskKey::MenuSettle, 450.0));
        assert_eq!(s.len(), 1);
        assert!(s.take_due(300.0).is_empty());
        assert_eq!(s.take_due(450.0), vec![TaskKey::MenuSettle]);
        assert!(s.is_empty());
    }

    #[test]
    fn due_tasks_fire_in_deadline_then_insertion_order() {
        let mut s = Scheduler::new();
        s.schedule(TaskKey::SuccessHide, 200.0);
        s.schedule(TaskKey::RippleExpire(1), 100.0);
        s.schedule(TaskKey::RippleExpire(2), 100.0);
        s.schedule(TaskKey::FormReset, 900.0);
        assert_eq!(s.next_deadline(), Some(100.0));
        assert_eq!(
            s.take_due(250.0),
            vec![
                TaskKey::RippleExpire(1),
                TaskKey::RippleExpire(2),
                TaskKey::SuccessHide
            ]
        );
        assert_eq!(s.next_deadline(), Some(900.0));
    }

    #[test]
    fn cancel_removes_pending() {
        let mut s = Scheduler::new();
        s.schedule(TaskKey::Rehighlight, 100.0);
        assert!(s.cancel(TaskKey::Rehighlight));
        assert!(!s.cancel(TaskKey::Rehighlight));
        assert_eq!(s.next_deadline(), None);
    }
}
