use std::f32::consts::TAU;

use rand::Rng;

use crate::config::FireflyConfig;
use crate::math::{wrap_phase, Vec3};
use crate::store::{EntityStore, Firefly, FireflyPatch};

/// Scatter the configured number of fireflies through their bounds
pub fn seed_swarm<R: Rng + ?Sized>(store: &mut EntityStore, config: &FireflyConfig, rng: &mut R) {
    for _ in 0..config.count {
        let id = store.allocate_id();
        let position = Vec3::new(
            config.bounds_x.sample(rng),
            config.bounds_y.sample(rng),
            config.bounds_z.sample(rng),
        );
        let phase = wrap_phase(rng.random::<f32>() * TAU);
        let speed = config.speed.sample(rng);
        store.fireflies.append(Firefly {
            id,
            position,
            phase,
            speed,
            glow: firefly_glow(phase, speed, config.glow_rate, 0.0),
        });
    }
}

/// Brightness pulse in [0.2, 1]
pub fn firefly_glow(phase: f32, speed: f32, rate: f32, time: f32) -> f32 {
    0.2 + 0.8 * (phase + time * rate * speed).sin().abs()
}

/// Gentle per-axis sinusoidal drift, each firefly on its own frequencies
pub fn drift_fireflies(store: &mut EntityStore, config: &FireflyConfig, time: f32, dt: f32) {
    let patches: Vec<_> = store
        .fireflies
        .get()
        .iter()
        .map(|f| {
            let offset = f.id as f32;
            let p = f.position;
            let x = p.x + (time * f.speed * 0.3 + offset).sin() * dt * config.drift.x;
            let y = p.y + (time * f.speed * 0.4 + offset * 2.0).sin() * dt * config.drift.y;
            let z = p.z + (time * f.speed * 0.25 + offset * 3.0).cos() * dt * config.drift.z;

            let position = Vec3::new(
                config.bounds_x.clamp(x),
                config.bounds_y.clamp(y),
                config.bounds_z.clamp(z),
            );
            let glow = firefly_glow(f.phase, f.speed, config.glow_rate, time);
            (f.id, FireflyPatch { position: Some(position), glow: Some(glow) })
        })
        .collect();

    for (id, patch) in patches {
        store.fireflies.update(id, patch);
    }
}
