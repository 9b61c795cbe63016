/// Most firings a single check may catch up on in one tick.
/// Time beyond that is dropped so a stalled tab does not burst on resume.
pub const MAX_CATCH_UP: u32 = 4;

/// Fixed-interval clock driven by accumulated frame time
#[derive(Debug, Clone, PartialEq)]
pub struct Cadence {
    interval: f32,
    accumulated: f32,
}

impl Cadence {
    pub fn new(interval: f32) -> Self {
        Self { interval, accumulated: 0.0 }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Add `dt` seconds and return how many whole intervals elapsed
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 || self.interval.is_nan() || self.interval <= 0.0 {
            return 0;
        }
        self.accumulated += dt;

        let mut fired = 0;
        while self.accumulated >= self.interval && fired < MAX_CATCH_UP {
            self.accumulated -= self.interval;
            fired += 1;
        }
        if self.accumulated >= self.interval {
            self.accumulated %= self.interval;
        }
        fired
    }
}
