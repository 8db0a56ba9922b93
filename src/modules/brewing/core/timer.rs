// Brew stopwatch. Pure state: the controller drives `tick` once per second.

use crate::shared::core::primitives::Seconds;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct BrewTimer {
    elapsed: Seconds,
    running: bool,
}

impl BrewTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances by one second when running. Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed = self.elapsed.saturating_add(1);
        }
        self.running
    }

    /// Flips running and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.running = false;
    }

    /// `min(elapsed / target, 1)`, or 0 when there is no target.
    pub fn progress(&self, target: Seconds) -> f64 {
        if target == 0 {
            return 0.0;
        }
        (f64::from(self.elapsed) / f64::from(target)).min(1.0)
    }
}

/// `m:ss`, minutes unbounded.
pub fn format_clock(seconds: Seconds) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod brew_timer_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_advance_only_while_running() {
        let mut timer = BrewTimer::new();
        assert!(!timer.tick());
        assert_eq!(timer.elapsed(), 0);

        assert!(timer.toggle());
        for _ in 0..5 {
            timer.tick();
        }
        assert_eq!(timer.elapsed(), 5);
        assert!(timer.is_running());

        assert!(!timer.toggle());
        timer.tick();
        assert_eq!(timer.elapsed(), 5);
    }

    #[rstest]
    #[case(false, 0)]
    #[case(true, 0)]
    #[case(true, 90)]
    fn it_should_always_reset_to_a_stopped_zero(#[case] running: bool, #[case] elapsed: Seconds) {
        let mut timer = BrewTimer { elapsed, running };
        timer.reset();
        assert_eq!(timer, BrewTimer::new());
    }

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(45, 0, 0.0)]
    #[case(14, 28, 0.5)]
    #[case(40, 28, 1.0)]
    fn it_should_clamp_progress_and_never_divide_by_zero(
        #[case] elapsed: Seconds,
        #[case] target: Seconds,
        #[case] expected: f64,
    ) {
        let timer = BrewTimer {
            elapsed,
            running: false,
        };
        let progress = timer.progress(target);
        assert!(progress.is_finite());
        assert_eq!(progress, expected);
    }

    #[rstest]
    #[case(0, "0:00")]
    #[case(28, "0:28")]
    #[case(180, "3:00")]
    #[case(754, "12:34")]
    fn it_should_format_minutes_and_seconds(#[case] seconds: Seconds, #[case] expected: &str) {
        assert_eq!(format_clock(seconds), expected);
    }
}
