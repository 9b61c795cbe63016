use std::f32::consts::PI;

/// How far along its current journey an entity is, in [0, 1].
///
/// Driven by distance rather than elapsed time so the arc always lands
/// exactly on arrival, however many frames were dropped along the way.
pub fn hop_progress(remaining: f32, journey: f32) -> f32 {
    if journey.is_nan() || journey <= f32::EPSILON || !remaining.is_finite() {
        return 1.0;
    }
    (1.0 - remaining / journey).clamp(0.0, 1.0)
}

/// Single arc peaking at mid-journey: zero at both ends, `amplitude` at 0.5.
pub fn hop_height(progress: f32, amplitude: f32) -> f32 {
    if progress.is_nan() || progress <= 0.0 || progress >= 1.0 {
        return 0.0;
    }
    (progress * PI).sin() * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 0.0)]
    #[case(-0.5, 0.0)]
    #[case(1.5, 0.0)]
    #[case(0.5, 0.08)]
    fn test_hop_height_endpoints(#[case] progress: f32, #[case] expected: f32) {
        assert!((hop_height(progress, 0.08) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_hop_height_positive_inside() {
        for i in 1..100 {
            let p = i as f32 / 100.0;
            assert!(hop_height(p, 0.08) > 0.0, "height at {p} should be positive");
        }
    }

    #[rstest]
    #[case(2.0, 2.0, 0.0)]
    #[case(1.0, 2.0, 0.5)]
    #[case(0.0, 2.0, 1.0)]
    #[case(3.0, 2.0, 0.0)]
    #[case(0.5, 0.0, 1.0)]
    fn test_hop_progress(#[case] remaining: f32, #[case] journey: f32, #[case] expected: f32) {
        assert!((hop_progress(remaining, journey) - expected).abs() < 1e-6);
    }
}
