/// Outcome of advancing a countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// No countdown is running; the tick had no effect.
    Idle,
    /// The countdown is still running with `remaining` seconds left.
    Running { remaining: u32 },
    /// The countdown reached zero on this tick and has stopped itself.
    Expired,
}

/// Per-question countdown.
///
/// At most one run is active at a time: `start` discards any previous run, and
/// once `cancel` or expiry stops a run every later `tick` is `Idle` until the
/// next `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    budget: u32,
    remaining: u32,
    running: bool,
    run: u64,
}

impl Countdown {
    /// Create a stopped countdown with the given budget in seconds (at least 1).
    #[must_use]
    pub fn new(budget_secs: u32) -> Self {
        let budget = budget_secs.max(1);
        Self {
            budget,
            remaining: budget,
            running: false,
            run: 0,
        }
    }

    /// Begin a fresh run at the full budget.
    pub fn start(&mut self) {
        self.remaining = self.budget;
        self.running = true;
        self.run = self.run.wrapping_add(1);
    }

    /// Stop the current run. Returns `true` if a run was active.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub fn tick(&mut self) -> CountdownTick {
        if !self.running {
            return CountdownTick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            CountdownTick::Expired
        } else {
            CountdownTick::Running {
                remaining: self.remaining,
            }
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Identifies the current run; changes on every `start`.
    #[must_use]
    pub fn run_id(&self) -> u64 {
        self.run
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Remaining time as a percentage of the budget.
    #[must_use]
    pub fn percent_remaining(&self) -> f64 {
        f64::from(self.remaining) / f64::from(self.budget) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_started() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), CountdownTick::Idle);
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn counts_down_and_expires_once() {
        let mut countdown = Countdown::new(3);
        countdown.start();
        assert_eq!(countdown.tick(), CountdownTick::Running { remaining: 2 });
        assert_eq!(countdown.tick(), CountdownTick::Running { remaining: 1 });
        assert_eq!(countdown.tick(), CountdownTick::Expired);
        assert!(!countdown.is_running());
        assert_eq!(countdown.tick(), CountdownTick::Idle);
    }

    #[test]
    fn cancelled_run_produces_no_ticks() {
        let mut countdown = Countdown::new(30);
        countdown.start();
        countdown.tick();
        assert!(countdown.cancel());
        assert!(!countdown.cancel());
        for _ in 0..40 {
            assert_eq!(countdown.tick(), CountdownTick::Idle);
        }
        assert_eq!(countdown.remaining(), 29);
    }

    #[test]
    fn restart_resets_to_full_budget() {
        let mut countdown = Countdown::new(30);
        countdown.start();
        for _ in 0..10 {
            countdown.tick();
        }
        countdown.start();
        assert_eq!(countdown.remaining(), 30);
        assert_eq!(countdown.tick(), CountdownTick::Running { remaining: 29 });
    }

    #[test]
    fn every_start_is_a_new_run() {
        let mut countdown = Countdown::new(30);
        let idle = countdown.run_id();
        countdown.start();
        let first = countdown.run_id();
        assert_ne!(first, idle);

        countdown.tick();
        countdown.cancel();
        assert_eq!(countdown.run_id(), first);

        countdown.start();
        assert_ne!(countdown.run_id(), first);
    }

    #[test]
    fn percent_tracks_remaining() {
        let mut countdown = Countdown::new(4);
        countdown.start();
        assert!((countdown.percent_remaining() - 100.0).abs() < f64::EPSILON);
        countdown.tick();
        assert!((countdown.percent_remaining() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_budget_is_clamped() {
        let mut countdown = Countdown::new(0);
        countdown.start();
        assert_eq!(countdown.budget(), 1);
        assert_eq!(countdown.tick(), CountdownTick::Expired);
    }
}
