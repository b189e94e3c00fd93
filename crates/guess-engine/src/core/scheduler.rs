/// Handle for a scheduled repeating task. Doubles as its cancel token.
/// Ids are never reused, so a stale handle can't alias a newer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u32);

/// Cap on fires per task per `advance` (prevents replaying minutes of ticks
/// after the tab was backgrounded).
pub const MAX_CATCH_UP: u32 = 10;

/// Cancellable interval scheduling.
///
/// Owners schedule a repeating task and get a `TaskId` back. Fired tasks are
/// routed back to their owner by the runner (see `Game::on_task`).
pub trait Scheduler {
    /// Schedule a task that fires every `interval_ms` milliseconds.
    fn schedule(&mut self, interval_ms: u32) -> TaskId;

    /// Cancel a task. Unknown or already-cancelled handles are ignored.
    fn cancel(&mut self, task: TaskId);

    /// Whether the task is still scheduled.
    fn is_active(&self, task: TaskId) -> bool;
}

#[derive(Debug, Clone)]
struct IntervalTask {
    id: TaskId,
    interval_ms: f64,
    /// Time accumulated since the last fire.
    accumulator: f64,
}

/// Virtual-clock scheduler driven by frame deltas.
/// Each task keeps its own accumulator, so fires land on whole intervals
/// regardless of frame timing.
#[derive(Debug)]
pub struct IntervalScheduler {
    tasks: Vec<IntervalTask>,
    next_id: u32,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self {
            tasks: Vec::with_capacity(4),
            next_id: 1,
        }
    }

    /// Add frame time to every task. Returns the handles that fired, in
    /// schedule order, one entry per elapsed interval.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<TaskId> {
        let mut fired = Vec::new();
        if elapsed_ms.is_nan() || elapsed_ms <= 0.0 {
            return fired;
        }

        for task in &mut self.tasks {
            task.accumulator += elapsed_ms;
            task.accumulator = task.accumulator.min(task.interval_ms * MAX_CATCH_UP as f64);
            let steps = (task.accumulator / task.interval_ms) as u32;
            task.accumulator -= steps as f64 * task.interval_ms;
            for _ in 0..steps {
                fired.push(task.id);
            }
        }
        fired
    }

    /// Number of live tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&mut self, interval_ms: u32) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(IntervalTask {
            id,
            interval_ms: interval_ms.max(1) as f64,
            accumulator: 0.0,
        });
        id
    }

    fn cancel(&mut self, task: TaskId) {
        self.tasks.retain(|t| t.id != task);
    }

    fn is_active(&self, task: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == task)
    }
}
