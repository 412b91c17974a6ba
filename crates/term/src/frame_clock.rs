use std::time::{Duration, Instant};

/// Caps the frame loop at a fixed number of iterations per second.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            last_tick: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current frame at `now`.
    ///
    /// Zero before the first tick and when the frame has already overrun.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self.period.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Record a tick at `now` without sleeping; returns the time since the previous tick.
    pub fn mark(&mut self, now: Instant) -> Duration {
        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_tick = Some(now);
        elapsed
    }

    /// Sleep out the rest of the frame, then start the next one.
    ///
    /// Returns the time since the previous tick, including the sleep.
    pub fn tick(&mut self) -> Duration {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
        self.mark(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_period() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.period(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn first_frame_does_not_wait() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.remaining(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn remaining_shrinks_with_elapsed_time() {
        let mut clock = FrameClock::new(50);
        let t0 = Instant::now();
        clock.mark(t0);
        assert_eq!(clock.remaining(t0), Duration::from_millis(20));
        assert_eq!(
            clock.remaining(t0 + Duration::from_millis(5)),
            Duration::from_millis(15)
        );
        assert_eq!(clock.remaining(t0 + Duration::from_millis(30)), Duration::ZERO);
    }

    #[test]
    fn zero_fps_is_clamped() {
        assert_eq!(FrameClock::new(0).period(), Duration::from_secs(1));
    }
}
