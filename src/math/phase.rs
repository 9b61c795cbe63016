use std::f32::consts::TAU;

/// Advance-safe wrap into `[0, 2π)`.
///
/// `rem_euclid` can round up to exactly `TAU` for tiny negative inputs, so that
/// case is folded back to zero.
pub fn wrap_phase(phase: f32) -> f32 {
    if !phase.is_finite() {
        return 0.0;
    }
    let wrapped = phase.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Fraction of the remaining gap to close this tick for an exponential approach.
///
/// Capped at 1 so a long frame lands on the target instead of overshooting it.
pub fn approach_factor(dt: f32, rate: f32) -> f32 {
    (dt * rate).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_phase_range() {
        for raw in [-100.0, -TAU, -1e-9, 0.0, 1.0, TAU, TAU + 0.5, 1e6] {
            let p = wrap_phase(raw);
            assert!((0.0..TAU).contains(&p), "{raw} wrapped to {p}");
        }
    }

    #[test]
    fn test_wrap_phase_non_finite() {
        assert_eq!(wrap_phase(f32::NAN), 0.0);
        assert_eq!(wrap_phase(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_approach_factor_capped() {
        assert_eq!(approach_factor(1.0, 1.5), 1.0);
        assert!((approach_factor(0.1, 1.5) - 0.15).abs() < 1e-6);
        assert_eq!(approach_factor(-0.1, 1.5), 0.0);
    }
}
