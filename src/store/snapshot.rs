//! Read-only per-frame view handed to the presentation layer

use serde::Serialize;

use super::entities::{Firefly, Frog, MotionState, Ripple, Turtle, WaterDrop};
use super::CollectionName;

/// Borrowed view of every collection at the end of a tick
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub time: f32,
    pub frogs: &'a [Frog],
    pub turtles: &'a [Turtle],
    pub fireflies: &'a [Firefly],
    pub ripples: &'a [Ripple],
    pub water_drops: &'a [WaterDrop],
}

/// Floats per entity in [`Snapshot::buffer`] output
pub const fn stride(name: CollectionName) -> usize {
    match name {
        // x, y, z, heading, breathe scale, eye open, moving, kind
        CollectionName::Frogs => 8,
        // x, z, heading, rotation, head out, leg phase, walk bob, moving
        CollectionName::Turtles => 8,
        // x, y, z, glow
        CollectionName::Fireflies => 4,
        // x, y, z, size, opacity
        CollectionName::Ripples => 5,
        // x, y, size
        CollectionName::WaterDrops => 3,
    }
}

impl Snapshot<'_> {
    pub fn len(&self, name: CollectionName) -> usize {
        match name {
            CollectionName::Frogs => self.frogs.len(),
            CollectionName::Turtles => self.turtles.len(),
            CollectionName::Fireflies => self.fireflies.len(),
            CollectionName::Ripples => self.ripples.len(),
            CollectionName::WaterDrops => self.water_drops.len(),
        }
    }

    /// Flat float buffer for GPU upload, `stride(name)` floats per entity
    pub fn buffer(&self, name: CollectionName) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.len(name) * stride(name));

        match name {
            CollectionName::Frogs => {
                for f in self.frogs {
                    data.extend_from_slice(&f.position.to_array());
                    data.push(f.heading.sign());
                    data.push(f.breathe_scale);
                    data.push(flag(f.eye_open));
                    data.push(flag(f.state == MotionState::Moving));
                    data.push(f32::from(f.kind.index()));
                }
            }
            CollectionName::Turtles => {
                for t in self.turtles {
                    data.push(t.position.x);
                    data.push(t.position.z);
                    data.push(t.heading.sign());
                    data.push(t.rotation_y());
                    data.push(t.head_out);
                    data.push(t.leg_phase);
                    data.push(t.walk_bob);
                    data.push(flag(t.state == MotionState::Moving));
                }
            }
            CollectionName::Fireflies => {
                for f in self.fireflies {
                    data.extend_from_slice(&f.position.to_array());
                    data.push(f.glow);
                }
            }
            CollectionName::Ripples => {
                for r in self.ripples {
                    data.extend_from_slice(&r.position.to_array());
                    data.push(r.size);
                    data.push(r.opacity);
                }
            }
            CollectionName::WaterDrops => {
                for d in self.water_drops {
                    data.push(d.x);
                    data.push(d.y);
                    data.push(d.size);
                }
            }
        }

        data
    }
}

fn flag(b: bool) -> f32 {
    if b {
        1.0
    } else {
        0.0
    }
}
