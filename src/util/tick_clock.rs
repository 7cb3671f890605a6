use std::time::Instant;

/// Fixed steps a single frame may owe before the backlog is dropped.
///
/// Caps the catch-up burst after a long stall so one hitch cannot snowball
/// into an ever-growing step debt.
const MAX_FIXED_STEPS_PER_FRAME: u32 = 8;

/// Timing for one frame: the variable-rate delta plus how many fixed
/// steps fell due.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTicks {
    /// Elapsed time since the previous frame, seconds.
    pub dt: f32,
    /// Number of fixed steps due this frame.
    pub fixed_steps: u32,
}

/// Frame clock for a two-cadence simulation loop.
///
/// Each frame yields the variable-rate delta since the previous frame and
/// the number of fixed steps that fell due, carrying the remainder to the
/// next frame. Also keeps an exponentially smoothed FPS for display.
#[derive(Debug, Clone)]
pub struct TickClock {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Fixed-step duration in seconds.
    fixed_dt: f32,
    /// Unspent time owed to the fixed cadence.
    accumulator: f32,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl TickClock {
    /// Create a clock with the given fixed-step duration in seconds.
    ///
    /// A non-positive `fixed_dt` disables the fixed cadence entirely
    /// (every frame reports zero fixed steps).
    #[must_use]
    pub fn new(fixed_dt: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            fixed_dt,
            accumulator: 0.0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance to the next frame using wall-clock time.
    pub fn frame(&mut self) -> FrameTicks {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(dt)
    }

    /// Advance by an explicit delta (the testable core of
    /// [`frame`](Self::frame), also used by scripted hosts).
    ///
    /// Negative deltas count as zero.
    pub fn advance(&mut self, dt: f32) -> FrameTicks {
        let dt = dt.max(0.0);
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps =
                self.smoothed_fps * (1.0 - self.smoothing) + instant_fps * self.smoothing;
        }

        let mut fixed_steps = 0;
        if self.fixed_dt > 0.0 {
            self.accumulator += dt;
            while self.accumulator >= self.fixed_dt && fixed_steps < MAX_FIXED_STEPS_PER_FRAME {
                self.accumulator -= self.fixed_dt;
                fixed_steps += 1;
            }
            if fixed_steps == MAX_FIXED_STEPS_PER_FRAME {
                // Stalled badly; drop the backlog instead of spiraling.
                self.accumulator = 0.0;
            }
        }

        FrameTicks { dt, fixed_steps }
    }

    /// Smoothed frames-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Fixed-step duration, seconds.
    #[must_use]
    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_steps_with_remainder_carry() {
        // Power-of-two values stay exact in f32.
        let mut clock = TickClock::new(0.25);
        let ticks = clock.advance(0.625);
        assert_eq!(ticks.fixed_steps, 2);
        // 0.125 carried over: the next 0.125 completes a step.
        let ticks = clock.advance(0.125);
        assert_eq!(ticks.fixed_steps, 1);
        let ticks = clock.advance(0.125);
        assert_eq!(ticks.fixed_steps, 0);
    }

    #[test]
    fn disabled_fixed_cadence_reports_no_steps() {
        let mut clock = TickClock::new(0.0);
        assert_eq!(clock.advance(1.0).fixed_steps, 0);
    }

    #[test]
    fn negative_delta_counts_as_zero() {
        let mut clock = TickClock::new(0.25);
        let ticks = clock.advance(-1.0);
        assert_eq!(ticks.fixed_steps, 0);
        assert_eq!(ticks.dt, 0.0);
    }

    #[test]
    fn stall_backlog_is_capped() {
        let mut clock = TickClock::new(0.25);
        let ticks = clock.advance(10.0);
        assert_eq!(ticks.fixed_steps, 8);
        // Backlog dropped: a normal frame owes a normal step count.
        let ticks = clock.advance(0.25);
        assert_eq!(ticks.fixed_steps, 1);
    }
}
