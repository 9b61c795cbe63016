//! Per-tick motion for the persistent animals
//!
//! Each entity closes a fraction of the gap to its target every tick
//! (exponential approach), and its secondary pose signals (breathing, legs,
//! hop arc, head extension) are recomputed from the state at the start of
//! the tick. Results are written back as patches once every entity of a
//! collection has been computed.

mod frog;
mod hop;
mod turtle;

pub use frog::step_frog;
pub use hop::{hop_height, hop_progress};
pub use turtle::step_turtle;

use crate::config::TerrariumConfig;
use crate::store::EntityStore;

/// Advance every frog and turtle by `dt` seconds
pub fn interpolate(store: &mut EntityStore, config: &TerrariumConfig, dt: f32) {
    let frog_patches: Vec<_> = store
        .frogs
        .get()
        .iter()
        .map(|frog| (frog.id, step_frog(frog, &config.frog, dt)))
        .collect();
    for (id, patch) in frog_patches {
        store.frogs.update(id, patch);
    }

    let turtle_patches: Vec<_> = store
        .turtles
        .get()
        .iter()
        .map(|turtle| (turtle.id, step_turtle(turtle, &config.turtle, dt)))
        .collect();
    for (id, patch) in turtle_patches {
        store.turtles.update(id, patch);
    }
}
