//! Fixed-period tick timer
//!
//! Visibility classification runs on a wall-clock period (100 ms by default)
//! rather than every frame; the ramp keeps running per frame.

/// Accumulates frame time and reports when a fixed period has elapsed
#[derive(Debug, Clone)]
pub struct TickTimer {
    period: f32,
    accumulated: f32,
}

impl TickTimer {
    /// Create a timer with the given period in seconds
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulated: 0.0,
        }
    }

    /// Advance the timer by one frame's elapsed time
    ///
    /// Returns true when at least one period has elapsed. Multiple overdue
    /// periods collapse into a single tick; re-targeting is idempotent so
    /// catching up one period at a time would do the same work several times.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulated += dt.max(0.0);
        if self.accumulated >= self.period {
            self.accumulated %= self.period;
            true
        } else {
            false
        }
    }

    /// Timer period in seconds
    pub fn period(&self) -> f32 {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tick_before_period() {
        let mut timer = TickTimer::new(0.1);
        assert!(!timer.advance(0.03));
        assert!(!timer.advance(0.03));
        assert!(!timer.advance(0.03));
    }

    #[test]
    fn test_tick_fires_at_period() {
        let mut timer = TickTimer::new(0.1);
        assert!(!timer.advance(0.05));
        assert!(timer.advance(0.05));
        // Remainder carries over
        assert!(!timer.advance(0.05));
        assert!(timer.advance(0.05));
    }

    #[test]
    fn test_overdue_periods_collapse() {
        let mut timer = TickTimer::new(0.1);
        // One very long frame counts as a single tick
        assert!(timer.advance(0.55));
        assert!(!timer.advance(0.01));
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut timer = TickTimer::new(0.1);
        assert!(!timer.advance(-1.0));
        assert!(!timer.advance(0.05));
        assert!(timer.advance(0.05));
    }
}
