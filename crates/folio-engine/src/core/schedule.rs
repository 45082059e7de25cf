//! One-shot delayed tasks with cancellation handles.
//!
//! Replaces fire-and-forget `setTimeout` callbacks: tasks are plain data,
//! handed back to the caller when due, so nothing dangles after teardown.

/// Handle to a scheduled task for later cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub u64);

#[derive(Debug, Clone)]
struct Pending<T> {
    handle: TaskHandle,
    due: f32,
    task: T,
}

/// Single-threaded scheduler driven by the page clock.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: f32,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_id: 1,
            pending: Vec::new(),
        }
    }

    /// Run `task` after `delay` seconds. Returns a handle for cancellation.
    pub fn schedule(&mut self, delay: f32, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due: self.now + delay.max(0.0),
            task,
        });
        handle
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(idx) => {
                self.pending.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Cancel everything (component teardown).
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Advance the clock by `dt` and return due tasks, earliest first.
    /// Tasks due at the same instant come out in scheduling order.
    pub fn advance(&mut self, dt: f32) -> Vec<T> {
        self.now += dt;
        let now = self.now;

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        // Stable sort keeps insertion order for equal due times
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|p| p.task).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
