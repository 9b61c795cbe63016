use rand::Rng;

use crate::config::RippleConfig;
use crate::math::Vec3;
use crate::store::{EntityId, EntityStore, Ripple, RipplePatch};

/// Start a ripple somewhere on the pool unless the live cap is reached
pub fn spawn_ripple<R: Rng + ?Sized>(
    store: &mut EntityStore,
    config: &RippleConfig,
    now: f32,
    rng: &mut R,
) -> Option<EntityId> {
    if store.ripples.is_full() {
        return None;
    }
    let position = Vec3::new(
        config.pool_x.sample(rng),
        config.surface_y,
        config.pool_z.sample(rng),
    );
    let id = store.allocate_id();
    let ripple = Ripple {
        id,
        position,
        size: 0.0,
        opacity: config.initial_opacity,
        born_at: now,
    };
    if store.ripples.append(ripple) {
        log::debug!("ripple {id} at ({:.2}, {:.2})", position.x, position.z);
        Some(id)
    } else {
        None
    }
}

/// Grow and fade every ripple, then drop the ones that have faded out
pub fn age_ripples(store: &mut EntityStore, config: &RippleConfig, dt: f32) -> usize {
    let patches: Vec<_> = store
        .ripples
        .get()
        .iter()
        .map(|r| {
            (r.id, RipplePatch {
                size: Some(r.size + dt * config.growth_rate),
                opacity: Some(r.opacity - dt * config.fade_rate),
            })
        })
        .collect();
    for (id, patch) in patches {
        store.ripples.update(id, patch);
    }
    store.ripples.remove(|r| r.opacity <= 0.0)
}
