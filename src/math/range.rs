use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TerrariumError;

/// Closed interval `[min, max]` along one scene axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp into the range. NaN collapses to `min` so a bad value never escapes.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Uniform sample in `[min, max)`
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.random::<f32>() * self.span()
    }

    pub fn validate(&self, name: &str) -> Result<(), TerrariumError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(TerrariumError::InvertedRange {
                name: name.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_clamp() {
        let r = AxisRange::new(-2.0, 2.5);
        assert_eq!(r.clamp(-3.0), -2.0);
        assert_eq!(r.clamp(3.0), 2.5);
        assert_eq!(r.clamp(1.0), 1.0);
        assert_eq!(r.clamp(f32::NAN), -2.0);
    }

    #[test]
    fn test_sample_stays_inside() {
        let r = AxisRange::new(-2.8, -1.3);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(r.contains(r.sample(&mut rng)));
        }
    }

    #[test]
    fn test_validate_rejects_inverted() {
        assert!(AxisRange::new(1.0, 0.0).validate("x").is_err());
        assert!(AxisRange::new(0.0, f32::NAN).validate("x").is_err());
        assert!(AxisRange::new(0.0, 0.0).validate("x").is_ok());
    }
}
