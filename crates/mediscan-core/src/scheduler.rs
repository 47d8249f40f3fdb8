//! Delayed tasks.
//!
//! The simulated "AI" work is a fixed wait followed by a constant result. Each
//! wait is a `DelayedTask` owned by a `Scheduler`: callers schedule an event to
//! fire after a delay, may cancel it by id, and periodically drain whatever is
//! due. Nothing runs on another thread; the owner decides when to look.

use std::time::{Duration, Instant};

use tracing::debug;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// One pending event and the instant it becomes due.
#[derive(Debug, Clone)]
pub struct DelayedTask<E> {
    pub id: TaskId,
    pub due: Instant,
    pub event: E,
}

/// An ordered set of pending delayed tasks.
///
/// Tasks fire in deadline order; tasks sharing a deadline fire in the order
/// they were scheduled.
#[derive(Debug)]
pub struct Scheduler<E> {
    next_id: u64,
    pending: Vec<DelayedTask<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Schedule `event` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = now + delay;

        // Keep `pending` sorted by (due, id). Ids are increasing, so inserting
        // after every task with due <= this one preserves insertion order on ties.
        let at = self.pending.partition_point(|t| t.due <= due);
        self.pending.insert(at, DelayedTask { id, due, event });

        debug!(task = id.0, delay_ms = delay.as_millis() as u64, "task scheduled");
        id
    }

    /// Drop a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.pending.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.pending.remove(idx);
                debug!(task = id.0, "task cancelled");
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// The earliest deadline among pending tasks.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.first().map(|t| t.due)
    }

    /// Remove and return every event due at or before `now`, in firing order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<E> {
        let split = self.pending.partition_point(|t| t.due <= now);
        self.pending.drain(..split).map(|t| t.event).collect()
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

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_fires_before_its_deadline() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(start, ms(2000), "reply");

        assert!(sched.drain_due(start + ms(1999)).is_empty());
        assert_eq!(sched.drain_due(start + ms(2000)), vec!["reply"]);
        assert!(sched.is_empty());
    }

    #[test]
    fn due_tasks_fire_in_deadline_order() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(start, ms(2500), "report");
        sched.schedule(start, ms(2000), "symptom");
        sched.schedule(start, ms(3000), "voice");

        assert_eq!(sched.next_due(), Some(start + ms(2000)));
        assert_eq!(
            sched.drain_due(start + ms(5000)),
            vec!["symptom", "report", "voice"]
        );
    }

    #[test]
    fn equal_deadlines_keep_insertion_order() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        for n in 0..5 {
            sched.schedule(start, ms(2000), n);
        }
        assert_eq!(sched.drain_due(start + ms(2000)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        let keep = sched.schedule(start, ms(100), "keep");
        let gone = sched.schedule(start, ms(100), "drop");

        assert!(sched.cancel(gone));
        assert!(!sched.is_pending(gone));
        assert!(sched.is_pending(keep));
        assert_eq!(sched.drain_due(start + ms(100)), vec!["keep"]);
    }

    #[test]
    fn cancel_after_firing_is_reported() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        let id = sched.schedule(start, ms(10), ());
        sched.drain_due(start + ms(10));

        assert!(!sched.cancel(id));
    }

    #[test]
    fn task_ids_are_unique() {
        let start = Instant::now();
        let mut sched = Scheduler::new();
        let a = sched.schedule(start, ms(1), ());
        let b = sched.schedule(start, ms(1), ());
        assert_ne!(a, b);
        assert!(a.get() < b.get());
    }
}
