//! Delayed single-shot tasks on a virtual clock.
//!
//! Nothing runs on its own: the host moves time forward with
//! [`Timeline::pop_due`] / [`Timeline::advance_to`], and tasks come out in
//! (due time, insertion order).

use std::collections::BTreeMap;
use std::time::Duration;

/// "After `delay`, run `task`."
pub trait Scheduler<T> {
    fn after(&mut self, delay: Duration, task: T);
}

/// Pending tasks ordered by due time.
#[derive(Debug)]
pub struct Timeline<T> {
    now: Duration,
    seq: u64,
    pending: BTreeMap<(Duration, u64), T>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest task due at or before `until`, moving the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let (&(due, _), _) = self.pending.first_key_value()?;
        if due > until {
            return None;
        }
        let (_, task) = self.pending.pop_first()?;
        self.now = self.now.max(due);
        Some(task)
    }

    /// Move the clock to `until` without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<T> Scheduler<T> for Timeline<T> {
    fn after(&mut self, delay: Duration, task: T) {
        let due = self.now + delay;
        self.pending.insert((due, self.seq), task);
        self.seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_then_insertion_order() {
        let mut t = Timeline::new();
        t.after(Duration::from_millis(20), "b");
        t.after(Duration::from_millis(10), "a");
        t.after(Duration::from_millis(20), "c");

        let until = Duration::from_millis(15);
        assert_eq!(t.pop_due(until), Some("a"));
        assert_eq!(t.pop_due(until), None);
        t.advance_to(until);
        assert_eq!(t.now(), until);

        let until = Duration::from_millis(30);
        assert_eq!(t.pop_due(until), Some("b"));
        assert_eq!(t.pop_due(until), Some("c"));
        assert!(t.is_empty());
    }

    #[test]
    fn delay_is_relative_to_current_time() {
        let mut t = Timeline::new();
        t.advance_to(Duration::from_secs(1));
        t.after(Duration::from_millis(500), ());
        assert_eq!(t.next_due(), Some(Duration::from_millis(1500)));
    }
}
