/// Simulation clock.
/// Accumulates host frame deltas into the monotonically increasing elapsed
/// time that drives every orbit and spin.
#[derive(Debug, Clone)]
pub struct SimClock {
    /// Elapsed simulated seconds since start. Kept in f64 so long sessions
    /// neither drift nor stall once f32 spacing exceeds a frame delta.
    elapsed: f64,
    /// Multiplier applied to each host delta.
    time_scale: f32,
    /// Delta applied by the most recent `advance` (after scaling).
    last_dt: f32,
}

impl SimClock {
    pub fn new(time_scale: f32) -> Self {
        let mut clock = Self {
            elapsed: 0.0,
            time_scale: 1.0,
            last_dt: 0.0,
        };
        clock.set_time_scale(time_scale);
        clock
    }

    /// Advance by one host frame delta (seconds). Returns the scaled delta.
    ///
    /// Negative or non-finite deltas are dropped so elapsed time never runs backwards.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        let dt = frame_dt * self.time_scale;
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("ignoring frame delta {frame_dt} (scaled {dt})");
            self.last_dt = 0.0;
            return 0.0;
        }
        self.elapsed += f64::from(dt);
        self.last_dt = dt;
        dt
    }

    /// Elapsed simulated seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Elapsed seconds narrowed for matrix composition.
    pub fn elapsed_f32(&self) -> f32 {
        self.elapsed as f32
    }

    /// Scaled delta of the last frame.
    pub fn last_dt(&self) -> f32 {
        self.last_dt
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Change the time scale. Non-finite or negative scales are clamped to zero (paused).
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = if scale.is_finite() { scale.max(0.0) } else { 0.0 };
    }

}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}
