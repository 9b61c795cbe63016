use crate::config::FrogConfig;
use crate::math::{approach_factor, wrap_phase, Vec3};
use crate::store::{Frog, FrogPatch, Heading, MotionState};

use super::hop::{hop_height, hop_progress};

/// Residual hop heights below this snap to the floor
const SETTLED_HEIGHT: f32 = 1e-4;

/// Compute the next state of one frog after `dt` seconds
pub fn step_frog(frog: &Frog, config: &FrogConfig, dt: f32) -> FrogPatch {
    let breathe_phase = wrap_phase(frog.breathe_phase + dt * config.breathe_rate);
    let breathe_scale = 1.0 + breathe_phase.sin() * config.breathe_depth;

    // Blink countdown: eyes reopen when the timer runs out
    let (eye_open, blink_timer) = if frog.blink_timer > 0.0 {
        let remaining = frog.blink_timer - dt;
        if remaining <= 0.0 {
            (true, 0.0)
        } else {
            (false, remaining)
        }
    } else {
        (frog.eye_open, 0.0)
    };

    let dx = frog.target.x - frog.position.x;
    let dz = frog.target.z - frog.position.z;
    let distance = (dx * dx + dz * dz).sqrt();

    let (position, heading, state) = if distance > config.arrival_threshold {
        let k = approach_factor(dt, config.speed);
        let x = config.bounds_x.clamp(frog.position.x + dx * k);
        let z = config.bounds_z.clamp(frog.position.z + dz * k);

        let remaining = Vec3::floor(x, z).planar_distance(&frog.target);
        let progress = hop_progress(remaining, frog.journey);
        let y = hop_height(progress, config.hop_amplitude);

        // Facing only follows clear horizontal travel
        let heading = if dx.abs() > config.direction_deadband {
            Heading::from_delta(dx)
        } else {
            frog.heading
        };
        (Vec3::new(x, y, z), heading, MotionState::Moving)
    } else {
        let mut y = frog.position.y * config.settle_decay;
        if y < SETTLED_HEIGHT {
            y = 0.0;
        }
        let x = config.bounds_x.clamp(frog.position.x);
        let z = config.bounds_z.clamp(frog.position.z);
        (Vec3::new(x, y, z), frog.heading, MotionState::Idle)
    };

    FrogPatch {
        position: Some(position),
        heading: Some(heading),
        state: Some(state),
        breathe_phase: Some(breathe_phase),
        breathe_scale: Some(breathe_scale),
        eye_open: Some(eye_open),
        blink_timer: Some(blink_timer),
        ..Default::default()
    }
}
