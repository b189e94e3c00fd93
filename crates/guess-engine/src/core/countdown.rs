// core/countdown.rs
//
// Countdown timer driven by a cancellable scheduler task.
//
// Usage:
//   let mut timer = CountdownTimer::new(120, 1000);
//   timer.start(&mut ctx.scheduler);
//   // runner delivers fired tasks:
//   timer.on_tick(task, &mut ctx.scheduler);

use super::scheduler::{Scheduler, TaskId};

/// Timer lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    /// Not started, full time.
    #[default]
    Idle,
    /// Ticking.
    Running,
    /// Paused with time retained.
    Stopped,
    /// Reached zero. Terminal until reset.
    Expired,
}

/// Result of delivering a fired task to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale or foreign handle, or the timer isn't running.
    Ignored,
    /// One second elapsed.
    Ticked { time_left: u32 },
    /// This tick took the timer to zero.
    Expired,
}

/// Whole-second countdown. Owns at most one scheduled task, present only
/// while `Running`.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    initial_time: u32,
    time_left: u32,
    interval_ms: u32,
    phase: TimerPhase,
    task: Option<TaskId>,
}

impl CountdownTimer {
    /// Create an idle timer of `initial_time` seconds ticking every `interval_ms`.
    pub fn new(initial_time: u32, interval_ms: u32) -> Self {
        Self {
            initial_time,
            time_left: initial_time,
            interval_ms,
            phase: TimerPhase::Idle,
            task: None,
        }
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn initial_time(&self) -> u32 {
        self.initial_time
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    pub fn is_expired(&self) -> bool {
        self.phase == TimerPhase::Expired
    }

    /// Handle of the live tick task, if any.
    pub fn task(&self) -> Option<TaskId> {
        self.task
    }

    /// `Idle | Stopped -> Running`. No-op when running or expired.
    pub fn start(&mut self, scheduler: &mut impl Scheduler) {
        match self.phase {
            TimerPhase::Idle | TimerPhase::Stopped => {}
            TimerPhase::Running | TimerPhase::Expired => return,
        }
        if self.time_left == 0 {
            self.phase = TimerPhase::Expired;
            return;
        }
        self.task = Some(scheduler.schedule(self.interval_ms));
        self.phase = TimerPhase::Running;
        log::debug!("countdown: started with {}s left", self.time_left);
    }

    /// `Running -> Stopped`. No-op otherwise.
    pub fn stop(&mut self, scheduler: &mut impl Scheduler) {
        if self.phase != TimerPhase::Running {
            return;
        }
        self.cancel_task(scheduler);
        self.phase = TimerPhase::Stopped;
        log::debug!("countdown: stopped with {}s left", self.time_left);
    }

    /// Any phase `-> Idle`, time restored.
    pub fn reset(&mut self, scheduler: &mut impl Scheduler) {
        self.cancel_task(scheduler);
        self.time_left = self.initial_time;
        self.phase = TimerPhase::Idle;
    }

    /// Apply a fired task. Only the current handle decrements, and only while
    /// running with time left.
    pub fn on_tick(&mut self, task: TaskId, scheduler: &mut impl Scheduler) -> TickOutcome {
        if self.task != Some(task) || self.phase != TimerPhase::Running || self.time_left == 0 {
            return TickOutcome::Ignored;
        }

        self.time_left -= 1;
        if self.time_left == 0 {
            self.cancel_task(scheduler);
            self.phase = TimerPhase::Expired;
            log::debug!("countdown: expired");
            return TickOutcome::Expired;
        }
        TickOutcome::Ticked { time_left: self.time_left }
    }

    fn cancel_task(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(task) = self.task.take() {
            scheduler.cancel(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::IntervalScheduler;

    fn run_ticks(timer: &mut CountdownTimer, s: &mut IntervalScheduler, n: u32) {
        for _ in 0..n {
            for task in s.advance(1000.0) {
                timer.on_tick(task, s);
            }
        }
    }

    #[test]
    fn starts_idle_with_full_time() {
        let timer = CountdownTimer::new(120, 1000);
        assert_eq!(timer.phase(), TimerPhase::Idle);
        assert_eq!(timer.time_left(), 120);
        assert!(!timer.is_running());
    }

    #[test]
    fn ticks_down_while_running() {
        let mut s = IntervalScheduler::new();
        let mut timer = CountdownTimer::new(120, 1000);
        timer.start(&mut s);
        run_ticks(&mut timer, &mut s, 5);
        assert_eq!(timer.time_left(), 115);
        assert!(timer.is_running());
    }

    #[test]
    fn expires_at_zero_and_stops_scheduling() {
        let mut s = IntervalScheduler::new();
        let mut timer = CountdownTimer::new(3, 1000);
        timer.start(&mut s);
        run_ticks(&mut timer, &mut s, 10);
        assert_eq!(timer.time_left(), 0);
        assert_eq!(timer.phase(), TimerPhase::Expired);
        assert!(timer.task().is_none());
        assert!(s.is_empty());
    }

    #[test]
    fn full_countdown_of_120_ticks() {
        let mut s = IntervalScheduler::new();
        let mut timer = CountdownTimer::new(120, 1000);
        timer.start(&mut s);
        run_ticks(&mut timer, &mut s, 120);
        assert_eq!(timer.time_left(), 0);
        assert!(timer.is_expired());
        run_ticks(&mut timer, &mut s, 5);
        assert_eq!(timer.time_left(), 0);
    }

    #[test]
    fn stop_pauses_and_keeps_time() {
        let mut s = IntervalScheduler::new();
        let mut timer = CountdownTimer::new(60, 1000);
        timer.start(&mut s);
        run_ticks(&mut timer, &mut s, 2);
        timer.stop(&mut s);
        run_ticks(&mut timer, &mut s, 5);
        assert_eq!(timer.phase(), TimerPhase::Stopped);
        assert_eq!(timer.time_left(), 58);

        timer.start(&mut s);
        run_ticks(&mut timer, &mut s, 1);
        assert_eq!(timer.time_left(), 57);
    }

    #[test]
    fn start_is_noop_when_running_or_expired() {
        let mut s = IntervalScheduler::new();
        let mut timer = CountdownTimer::new(1, 1000);
        timer.start(&mut s);
        let task = timer.task();
        timer.start(&mut s);
        assert_eq!(timer.task(), task);
        assert_eq!(s.len(), 1);

        run_ticks(&mut timer, &mut s, 1);
        assert!(timer.is_expired());
        timer.start(&mut s);
        assert!(timer.is_expired());
        assert!(s.is_empty());
    }

    #[test]
    fn stop_is_noop_unless_running() {
        let mut s = IntervalScheduler::new();
        let mut timer = CountdownTimer::new(10, 1000);
        timer.stop(&mut s);
        assert_eq!(timer.phase(), TimerPhase::Idle);
    }

    #[test]
    fn reset_restores_from_every_phase() {
        let mut s = IntervalScheduler::new();
        for ticks in [0, 2, 5] {
            for stop_first in [false, true] {
                let mut timer = CountdownTimer::new(5, 1000);
                timer.start(&mut s);
                run_ticks(&mut timer, &mut s, ticks);
                if stop_first {
                    timer.stop(&mut s);
                }
                timer.reset(&mut s);
                assert_eq!(timer.time_left(), 5);
                assert!(!timer.is_running());
                assert_eq!(timer.phase(), TimerPhase::Idle);
                assert!(s.is_empty());
            }
        }
    }

    #[test]
    fn stale_handle_after_reset_is_ignored() {
        let mut s = IntervalScheduler::new();
        let mut timer = CountdownTimer::new(30, 1000);
        timer.start(&mut s);
        let Some(stale) = timer.task() else {
            panic!("running timer should own a task");
        };
        timer.reset(&mut s);
        timer.start(&mut s);

        assert_eq!(timer.on_tick(stale, &mut s), TickOutcome::Ignored);
        assert_eq!(timer.time_left(), 30);
    }

    #[test]
    fn zero_initial_time_expires_on_start() {
        let mut s = IntervalScheduler::new();
        let mut timer = CountdownTimer::new(0, 1000);
        timer.start(&mut s);
        assert!(timer.is_expired());
        assert!(s.is_empty());
    }
}
