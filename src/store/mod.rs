//! Entity storage
//!
//! The store exclusively owns every entity record. Animals are created once
//! from the population config; ripples and drops come and go through the
//! particle lifecycle, each bounded by its configured cap.

mod collection;
mod entities;
mod snapshot;

pub use collection::Collection;
pub use entities::{
    Entity, EntityId, Firefly, FireflyPatch, Frog, FrogKind, FrogPatch, Heading, MotionState,
    Ripple, RipplePatch, Turtle, TurtlePatch, WaterDrop, WaterDropPatch,
};
pub use snapshot::{stride, Snapshot};

use std::fmt;
use std::str::FromStr;

use crate::config::TerrariumConfig;
use crate::error::TerrariumError;

/// Names the render layer uses to address a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionName {
    Frogs,
    Turtles,
    Fireflies,
    Ripples,
    WaterDrops,
}

impl CollectionName {
    pub const ALL: [CollectionName; 5] = [
        CollectionName::Frogs,
        CollectionName::Turtles,
        CollectionName::Fireflies,
        CollectionName::Ripples,
        CollectionName::WaterDrops,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CollectionName::Frogs => "frogs",
            CollectionName::Turtles => "turtles",
            CollectionName::Fireflies => "fireflies",
            CollectionName::Ripples => "ripples",
            CollectionName::WaterDrops => "waterDrops",
        }
    }
}

impl FromStr for CollectionName {
    type Err = TerrariumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| TerrariumError::UnknownCollection(s.to_string()))
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct EntityStore {
    pub frogs: Collection<Frog>,
    pub turtles: Collection<Turtle>,
    pub fireflies: Collection<Firefly>,
    pub ripples: Collection<Ripple>,
    pub water_drops: Collection<WaterDrop>,
    next_id: EntityId,
}

impl EntityStore {
    /// Empty store with particle caps taken from `config`
    pub fn new(config: &TerrariumConfig) -> Self {
        Self {
            frogs: Collection::new(),
            turtles: Collection::new(),
            fireflies: Collection::new(),
            ripples: Collection::capped(config.ripple.max_live),
            water_drops: Collection::capped(config.drop.max_live),
            next_id: 1,
        }
    }

    /// Store populated with the configured frogs and turtles.
    /// Fireflies are seeded separately since they need randomness.
    pub fn populated(config: &TerrariumConfig) -> Self {
        let mut store = Self::new(config);
        for seed in &config.population.frogs {
            let id = store.allocate_id();
            store.frogs.append(Frog::from_seed(id, seed));
        }
        for seed in &config.population.turtles {
            let id = store.allocate_id();
            store.turtles.append(Turtle::from_seed(id, seed));
        }
        store
    }

    /// Fresh id, unique across every collection for the store's lifetime
    pub fn allocate_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn len(&self, name: CollectionName) -> usize {
        match name {
            CollectionName::Frogs => self.frogs.len(),
            CollectionName::Turtles => self.turtles.len(),
            CollectionName::Fireflies => self.fireflies.len(),
            CollectionName::Ripples => self.ripples.len(),
            CollectionName::WaterDrops => self.water_drops.len(),
        }
    }

    pub fn snapshot(&self, time: f32) -> Snapshot<'_> {
        Snapshot {
            time,
            frogs: self.frogs.get(),
            turtles: self.turtles.get(),
            fireflies: self.fireflies.get(),
            ripples: self.ripples.get(),
            water_drops: self.water_drops.get(),
        }
    }
}
