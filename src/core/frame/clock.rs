//=========================================================================
// Frame Clock
//=========================================================================
//
// Fixed-rate tick pacing.
//
// Architecture:
//   poll(now) ──deadline reached──> Some(1 / fps), deadline += period
//
// Ticks never overlap: a tick that overruns its slot leaves the next
// deadline in the past, so the following poll fires immediately (the
// tick is queued). A backlog longer than `MAX_QUEUED_TICKS` periods is
// dropped and the clock resynchronizes.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use log::warn;

//=== FrameClock ==========================================================

/// Queued ticks tolerated before the clock resynchronizes.
pub const MAX_QUEUED_TICKS: u32 = 5;

/// Slowest supported tick rate (one tick every 1000 seconds).
pub const MIN_FPS: f64 = 1e-3;

/// Fixed-cadence tick scheduler.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    delta_seconds: f64,
    next_deadline: Instant,
}

impl FrameClock {
    /// Creates a clock whose first tick is due at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `fps` is not finite or below [`MIN_FPS`].
    pub fn new(fps: f64, start: Instant) -> Self {
        assert!(
            fps.is_finite() && fps >= MIN_FPS,
            "FPS must be positive and at least {}, got {}",
            MIN_FPS,
            fps
        );
        Self {
            period: Duration::from_secs_f64(1.0 / fps),
            delta_seconds: 1.0 / fps,
            next_deadline: start,
        }
    }

    /// Time between ticks.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick is due.
    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }

    /// Returns the fixed tick delta if a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        if now < self.next_deadline {
            return None;
        }

        let lag = now - self.next_deadline;
        if lag > self.period * MAX_QUEUED_TICKS {
            warn!(
                target: "sketch::frame",
                "Frame loop {:.1}ms behind, dropping queued ticks",
                lag.as_secs_f64() * 1000.0
            );
            self.next_deadline = now + self.period;
        } else {
            self.next_deadline += self.period;
        }

        Some(self.delta_seconds)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_tick_is_due_at_start() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50.0, start);

        assert_eq!(clock.poll(start), Some(1.0 / 50.0));
        assert_eq!(clock.next_deadline(), start + ms(20));
    }

    #[test]
    fn no_tick_before_deadline() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50.0, start);
        clock.poll(start);

        assert_eq!(clock.poll(start + ms(19)), None);
        assert!(clock.poll(start + ms(20)).is_some());
    }

    #[test]
    fn overrun_ticks_queue_instead_of_skipping() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50.0, start);
        clock.poll(start);

        // A 45ms stall leaves two ticks owed.
        let late = start + ms(45);
        assert!(clock.poll(late).is_some());
        assert!(clock.poll(late).is_some());
        assert_eq!(clock.poll(late), None);
        assert_eq!(clock.next_deadline(), start + ms(60));
    }

    #[test]
    fn long_stall_resynchronizes() {
        let start = Instant::now();
        let mut clock = FrameClock::new(50.0, start);
        clock.poll(start);

        let late = start + ms(1000);
        assert!(clock.poll(late).is_some());
        assert_eq!(clock.next_deadline(), late + ms(20));
        assert_eq!(clock.poll(late), None);
    }

    #[test]
    fn delta_is_fixed() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60.0, start);

        assert_eq!(clock.poll(start), Some(1.0 / 60.0));
        assert_eq!(clock.poll(start + ms(40)), Some(1.0 / 60.0));
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn zero_fps_panics() {
        FrameClock::new(0.0, Instant::now());
    }

    #[test]
    #[should_panic(expected = "FPS must be positive and at least")]
    fn tiny_fps_panics_with_message() {
        // 1 / 1e-300 seconds does not fit in a Duration.
        FrameClock::new(1e-300, Instant::now());
    }

    #[test]
    fn slowest_rate_is_accepted() {
        let start = Instant::now();
        let mut clock = FrameClock::new(MIN_FPS, start);

        assert_eq!(clock.period(), Duration::from_secs(1000));
        assert_eq!(clock.poll(start), Some(1000.0));
    }
}
