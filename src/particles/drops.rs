use rand::Rng;

use crate::config::DropConfig;
use crate::store::{EntityId, EntityStore, WaterDrop, WaterDropPatch};

/// Bead a new condensation drop on the upper glass unless the cap is reached
pub fn spawn_drop<R: Rng + ?Sized>(
    store: &mut EntityStore,
    config: &DropConfig,
    now: f32,
    rng: &mut R,
) -> Option<EntityId> {
    if store.water_drops.is_full() {
        return None;
    }
    let id = store.allocate_id();
    let drop = WaterDrop {
        id,
        x: config.spawn_x.sample(rng),
        y: config.spawn_y.sample(rng),
        size: config.size.sample(rng),
        speed: config.fall_speed.sample(rng),
        born_at: now,
    };
    store.water_drops.append(drop).then_some(id)
}

/// Slide every drop down the pane; drops never fade, they leave the visible band
pub fn age_drops(store: &mut EntityStore, config: &DropConfig, dt: f32) -> usize {
    let patches: Vec<_> = store
        .water_drops
        .get()
        .iter()
        .map(|d| (d.id, WaterDropPatch { y: Some(d.y + dt * d.speed) }))
        .collect();
    for (id, patch) in patches {
        store.water_drops.update(id, patch);
    }
    store.water_drops.remove(|d| d.y >= config.visible_until)
}
