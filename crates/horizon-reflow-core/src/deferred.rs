//! Deferred task queue for "after the current redraw" processing.
//!
//! Hosts redraw containers in cycles. Mutating a layout while the host is in
//! the middle of a redraw is unsafe, so work triggered from redraw
//! notifications is posted here and run once the cycle completes.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{CoreError, Result};
use crate::logging::targets;

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

/// A boxed task closure.
pub type DeferredTask = Box<dyn FnOnce() + Send + 'static>;

struct TaskData {
    id: TaskId,
    task: DeferredTask,
}

/// Manages the deferred task queue.
///
/// Tasks run in posting order. A task posted while the queue is being
/// drained by [`take_all`](Self::take_all) lands in the next cycle.
#[derive(Default)]
pub struct DeferredQueue {
    tasks: VecDeque<TaskData>,
}

impl DeferredQueue {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a task to run after the current redraw.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.post_boxed(Box::new(task))
    }

    /// Post an already boxed task.
    pub fn post_boxed(&mut self, task: DeferredTask) -> TaskId {
        let id = next_task_id();
        tracing::trace!(target: targets::DEFERRED, task = id.as_u64(), "task posted");
        self.tasks.push_back(TaskData { id, task });
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Cancel a pending task, reporting tasks that are no longer queued.
    pub fn try_cancel(&mut self, id: TaskId) -> Result<()> {
        if self.cancel(id) {
            Ok(())
        } else {
            Err(CoreError::TaskNotFound(id.as_u64()))
        }
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Remove every pending task without running it.
    ///
    /// Used by owners that keep the queue behind a lock: take the batch,
    /// release the lock, then run the tasks.
    pub fn take_all(&mut self) -> Vec<DeferredTask> {
        self.tasks.drain(..).map(|data| data.task).collect()
    }

    /// Run every task that is pending right now.
    ///
    /// Returns the number of tasks processed.
    pub fn process_all(&mut self) -> usize {
        let batch = self.take_all();
        let count = batch.len();
        for task in batch {
            task();
        }
        if count > 0 {
            tracing::trace!(target: targets::DEFERRED, count, "processed deferred tasks");
        }
        count
    }
}

impl std::fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_tasks_run_in_posting_order() {
        let mut queue = DeferredQueue::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let log = log.clone();
            queue.post(move || log.lock().push(n));
        }

        assert_eq!(queue.pending_count(), 3);
        assert_eq!(queue.process_all(), 3);
        assert_eq!(*log.lock(), vec![0, 1, 2]);
        assert!(!queue.has_pending());
    }

    #[test]
    fn test_cancel() {
        let mut queue = DeferredQueue::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let log_a = log.clone();
        let a = queue.post(move || log_a.lock().push("a"));
        let log_b = log.clone();
        queue.post(move || log_b.lock().push("b"));

        assert!(queue.cancel(a));
        assert!(!queue.cancel(a));
        assert_eq!(queue.try_cancel(a), Err(CoreError::TaskNotFound(a.as_u64())));

        queue.process_all();
        assert_eq!(*log.lock(), vec!["b"]);
    }

    #[test]
    fn test_take_all_empties_queue() {
        let mut queue = DeferredQueue::new();
        queue.post(|| {});
        queue.post(|| {});

        let batch = queue.take_all();
        assert_eq!(batch.len(), 2);
        assert_eq!(queue.pending_count(), 0);
    }
}
