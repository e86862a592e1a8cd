//! Work postponed until after the current handler returns.

use std::{collections::VecDeque, time::Instant};

use crate::page::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Make a freshly appended card fully opaque.
    FadeIn(NodeId),
}

#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    tasks: VecDeque<(Instant, DeferredTask)>,
}

impl DeferredQueue {
    pub fn schedule(&mut self, due_at: Instant, task: DeferredTask) {
        self.tasks.push_back((due_at, task));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Removes and returns every task due at `now`, in scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredTask> {
        let (due, pending): (VecDeque<_>, VecDeque<_>) = self
            .tasks
            .drain(..)
            .partition(|(due_at, _)| *due_at <= now);
        self.tasks = pending;

        due.into_iter().map(|(_, task)| task).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn nothing_runs_before_it_is_due() {
        let start = Instant::now();
        let mut queue = DeferredQueue::default();
        queue.schedule(start + Duration::from_millis(10), DeferredTask::FadeIn(NodeId(1)));

        assert!(queue.take_due(start).is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn due_tasks_run_once_in_scheduling_order() {
        let start = Instant::now();
        let mut queue = DeferredQueue::default();
        queue.schedule(start + Duration::from_millis(5), DeferredTask::FadeIn(NodeId(1)));
        queue.schedule(start + Duration::from_millis(50), DeferredTask::FadeIn(NodeId(2)));
        queue.schedule(start + Duration::from_millis(5), DeferredTask::FadeIn(NodeId(3)));

        let due = queue.take_due(start + Duration::from_millis(10));

        assert_eq!(
            due,
            vec![
                DeferredTask::FadeIn(NodeId(1)),
                DeferredTask::FadeIn(NodeId(3))
            ]
        );
        assert!(queue.take_due(start + Duration::from_millis(10)).is_empty());
        assert_eq!(
            queue.take_due(start + Duration::from_millis(50)),
            vec![DeferredTask::FadeIn(NodeId(2))]
        );
        assert!(queue.is_empty());
    }
}
