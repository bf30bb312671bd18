//! Cooperative single-threaded scheduler with a virtual clock.
//!
//! Stands in for the page's timer queue: tasks are scheduled with a delay and
//! run in due-time order (FIFO among equal due times) as the owner advances
//! the clock. Nothing runs concurrently and nothing is cancelled implicitly.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Entry<T> {
    due: Duration,
    id: TimerId,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.id == other.id
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.id.0.cmp(&other.id.0))
    }
}

#[derive(Debug)]
pub struct Timeline<T> {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
    cancelled: HashSet<TimerId>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BinaryHeap::new(),
            cancelled: HashSet::new(),
        }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.push(Reverse(Entry {
            due: self.now + delay,
            id,
            task,
        }));
        id
    }

    pub fn cancel(&mut self, id: TimerId) {
        self.cancelled.insert(id);
    }

    /// Pops the next live task due at or before `until`, moving the clock to
    /// its due time. Returns `None` once nothing else is due.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        loop {
            let due = self.queue.peek().map(|Reverse(e)| e.due)?;
            if due > until {
                return None;
            }
            let Reverse(entry) = self.queue.pop()?;
            if self.cancelled.remove(&entry.id) {
                continue;
            }
            self.now = self.now.max(entry.due);
            return Some((entry.id, entry.task));
        }
    }

    /// Moves the clock forward to `until` once the due tasks have been drained.
    pub fn settle_at(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Live (not cancelled) tasks still queued.
    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.queue
            .iter()
            .filter(|Reverse(e)| !self.cancelled.contains(&e.id))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_runs_in_due_order_then_fifo() {
        let mut t = Timeline::new();
        t.schedule(ms(300), "c");
        t.schedule(ms(100), "a");
        t.schedule(ms(100), "b");

        let mut order = Vec::new();
        while let Some((_, task)) = t.pop_due(ms(1000)) {
            order.push(task);
        }
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(t.now(), ms(300));
    }

    #[test]
    fn test_nothing_runs_before_due() {
        let mut t = Timeline::new();
        t.schedule(ms(500), ());
        assert!(t.pop_due(ms(499)).is_none());
        assert_eq!(t.pending(), 1);
        assert!(t.pop_due(ms(500)).is_some());
    }

    #[test]
    fn test_cancelled_task_is_skipped() {
        let mut t = Timeline::new();
        let id = t.schedule(ms(10), 1);
        t.schedule(ms(20), 2);
        t.cancel(id);
        assert_eq!(t.pending(), 1);
        assert_eq!(t.pop_due(ms(100)).map(|(_, v)| v), Some(2));
    }

    #[test]
    fn test_delays_are_relative_to_current_clock() {
        let mut t = Timeline::new();
        t.schedule(ms(100), "first");
        t.pop_due(ms(100));
        t.schedule(ms(100), "second");
        assert!(t.pop_due(ms(150)).is_none());
        assert!(t.pop_due(ms(200)).is_some());
    }
}
