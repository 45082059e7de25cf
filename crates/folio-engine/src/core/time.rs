/// Fixed timestep accumulator.
/// Keeps page animation stepping at a consistent rate regardless of frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Repeating interval timer (the `setInterval` of the page).
/// Fires at most once per `tick`, however much time elapsed, so a stalled
/// tab does not replay a burst of recomputations.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: f32,
    elapsed: f32,
    running: bool,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            running: true,
        }
    }

    /// Advance by `dt`. Returns true when the interval fired.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.period {
            return false;
        }
        self.elapsed = if self.elapsed >= self.period * 2.0 {
            0.0
        } else {
            self.elapsed - self.period
        };
        true
    }

    /// Stop firing until `restart` (teardown).
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn restart(&mut self) {
        self.running = true;
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(0.008);
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010);
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0);
        assert_eq!(steps, 10);
    }

    #[test]
    fn interval_fires_once_per_period() {
        let mut timer = IntervalTimer::new(0.15);
        assert!(!timer.tick(0.1));
        assert!(timer.tick(0.1));
        assert!(!timer.tick(0.05));
        assert!(timer.tick(0.1));
    }

    #[test]
    fn interval_does_not_burst_after_stall() {
        let mut timer = IntervalTimer::new(0.15);
        assert!(timer.tick(3.0));
        assert!(!timer.tick(0.01));
    }

    #[test]
    fn stopped_interval_never_fires() {
        let mut timer = IntervalTimer::new(0.15);
        timer.stop();
        assert!(!timer.tick(1.0));
        timer.restart();
        assert!(timer.tick(0.2));
    }
}
