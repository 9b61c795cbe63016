//! Transient particles and the firefly swarm
//!
//! Ripples and water drops follow a spawn → age → cull lifecycle bounded by
//! their collection caps. Removal happens only through each kind's expiry
//! predicate. Fireflies are persistent but drift freely, so they live here
//! rather than with the target-seeking animals.

mod drops;
mod fireflies;
mod ripples;

pub use drops::{age_drops, spawn_drop};
pub use fireflies::{drift_fireflies, firefly_glow, seed_swarm};
pub use ripples::{age_ripples, spawn_ripple};

use crate::config::TerrariumConfig;
use crate::store::EntityStore;

/// Per-tick particle update. Returns how many particles expired.
pub fn update(store: &mut EntityStore, config: &TerrariumConfig, time: f32, dt: f32) -> usize {
    drift_fireflies(store, &config.firefly, time, dt);
    let expired = age_ripples(store, &config.ripple, dt) + age_drops(store, &config.drop, dt);
    if expired > 0 {
        log::debug!("culled {expired} expired particles");
    }
    expired
}
