//! Frame-driven simulation loop
//!
//! One `tick` is one rendered frame: behavior checks that came due run
//! first, then motion interpolation, then the particle lifecycle. The
//! caller owns the `Simulation` and hands snapshots to the renderer.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation;
use crate::behavior::BehaviorScheduler;
use crate::config::TerrariumConfig;
use crate::error::Result;
use crate::particles;
use crate::store::{stride, CollectionName, EntityStore, Snapshot};

#[derive(Debug, Clone)]
pub struct Simulation {
    config: TerrariumConfig,
    store: EntityStore,
    scheduler: BehaviorScheduler,
    rng: StdRng,
    time: f32,
    ticks: u64,
}

impl Simulation {
    /// Validate `config` and build the starting scene. The seed fixes every random choice.
    pub fn new(config: TerrariumConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut store = EntityStore::populated(&config);
        particles::seed_swarm(&mut store, &config.firefly, &mut rng);
        let scheduler = BehaviorScheduler::new(&config.schedule);

        log::info!(
            "Terrarium ready: {} frogs, {} turtles, {} fireflies (seed {seed})",
            store.frogs.len(),
            store.turtles.len(),
            store.fireflies.len()
        );

        Ok(Self {
            config,
            store,
            scheduler,
            rng,
            time: 0.0,
            ticks: 0,
        })
    }

    pub fn from_yaml(yaml: &str, seed: u64) -> Result<Self> {
        Self::new(TerrariumConfig::from_yaml(yaml)?, seed)
    }

    /// Advance by one frame of `dt` seconds.
    ///
    /// Non-finite or non-positive steps are ignored; long steps are clamped
    /// to `max_frame_dt`.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let dt = dt.min(self.config.max_frame_dt);
        self.time += dt;
        self.ticks += 1;

        self.scheduler
            .advance(dt, self.time, &mut self.store, &self.config, &mut self.rng);
        animation::interpolate(&mut self.store, &self.config, dt);
        particles::update(&mut self.store, &self.config, self.time, dt);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.store.snapshot(self.time)
    }

    /// Flat render buffer for the named collection
    pub fn buffer(&self, collection: &str) -> Result<Vec<f32>> {
        let name: CollectionName = collection.parse()?;
        Ok(self.snapshot().buffer(name))
    }

    pub fn count(&self, collection: &str) -> Result<usize> {
        let name: CollectionName = collection.parse()?;
        Ok(self.store.len(name))
    }

    pub fn stride(collection: &str) -> Result<usize> {
        let name: CollectionName = collection.parse()?;
        Ok(stride(name))
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Direct store access for host-driven updates between ticks
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    pub fn config(&self) -> &TerrariumConfig {
        &self.config
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
