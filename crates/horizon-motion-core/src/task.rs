//! Queue of posted input tasks.
//!
//! User input (a button press, a lifecycle change) reaches the UI thread as a
//! posted task. The event loop drains this queue before each animation frame.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a posted task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// FIFO queue of posted tasks.
#[derive(Default)]
pub(crate) struct TaskQueue {
    tasks: VecDeque<TaskData>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a task. Returns the ID that can be used to cancel it.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = next_task_id();
        self.tasks.push_back(TaskData {
            id,
            task: Box::new(task),
        });
        id
    }

    /// Cancel a pending task. Returns `true` if the task was found.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Detach every pending task so that it can run without the queue borrowed.
    pub fn take_all(&mut self) -> Vec<BoxedTask> {
        self.tasks.drain(..).map(|data| data.task).collect()
    }
}
