//! Coarse-grained randomized behavior
//!
//! A fixed list of (cadence, probability, behavior) checks polled once per
//! tick. Cadences accumulate frame time, so pacing does not depend on the
//! render frame rate, and all randomness comes from the caller's RNG, so a
//! seeded run is fully reproducible.

mod cadence;
mod triggers;

pub use cadence::{Cadence, MAX_CATCH_UP};
pub use triggers::{turtle_step, wander_target};

use std::fmt;

use rand::Rng;

use crate::config::{ScheduleConfig, TerrariumConfig, TriggerConfig};
use crate::particles;
use crate::store::EntityStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Blink,
    Wander,
    TurtleHead,
    TurtleStep,
    RippleSpawn,
    DropSpawn,
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Behavior::Blink => "blink",
            Behavior::Wander => "wander",
            Behavior::TurtleHead => "turtle-head",
            Behavior::TurtleStep => "turtle-step",
            Behavior::RippleSpawn => "ripple-spawn",
            Behavior::DropSpawn => "drop-spawn",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledCheck {
    pub behavior: Behavior,
    pub cadence: Cadence,
    pub probability: f32,
}

impl ScheduledCheck {
    fn new(behavior: Behavior, trigger: TriggerConfig) -> Self {
        Self {
            behavior,
            cadence: Cadence::new(trigger.cadence),
            probability: trigger.probability,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BehaviorScheduler {
    checks: Vec<ScheduledCheck>,
}

impl BehaviorScheduler {
    pub fn new(schedule: &ScheduleConfig) -> Self {
        Self {
            checks: vec![
                ScheduledCheck::new(Behavior::Blink, schedule.blink),
                ScheduledCheck::new(Behavior::Wander, schedule.wander),
                ScheduledCheck::new(Behavior::TurtleHead, schedule.turtle_head),
                ScheduledCheck::new(Behavior::TurtleStep, schedule.turtle_step),
                ScheduledCheck::new(Behavior::RippleSpawn, schedule.ripple),
                ScheduledCheck::new(Behavior::DropSpawn, schedule.drop),
            ],
        }
    }

    pub fn checks(&self) -> &[ScheduledCheck] {
        &self.checks
    }

    /// Advance every cadence by `dt` and run the checks that came due.
    ///
    /// `now` is the simulation clock, stamped onto spawned particles.
    /// Returns how many entity-level actions fired.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        now: f32,
        store: &mut EntityStore,
        config: &TerrariumConfig,
        rng: &mut R,
    ) -> usize {
        let mut fired = 0;
        for check in &mut self.checks {
            for _ in 0..check.cadence.advance(dt) {
                let n = run_check(check.behavior, check.probability, now, store, config, rng);
                if n > 0 {
                    log::trace!("{} fired {n}x at t={now:.2}", check.behavior);
                }
                fired += n;
            }
        }
        fired
    }
}

fn run_check<R: Rng + ?Sized>(
    behavior: Behavior,
    p: f32,
    now: f32,
    store: &mut EntityStore,
    config: &TerrariumConfig,
    rng: &mut R,
) -> usize {
    match behavior {
        Behavior::Blink => triggers::blink(store, &config.frog, p, rng),
        Behavior::Wander => triggers::wander(store, &config.frog, p, rng),
        Behavior::TurtleHead => triggers::toggle_heads(store, p, rng),
        Behavior::TurtleStep => triggers::step_turtles(store, &config.turtle, p, rng),
        Behavior::RippleSpawn => {
            let spawned = triggers::roll(rng, p)
                && particles::spawn_ripple(store, &config.ripple, now, rng).is_some();
            usize::from(spawned)
        }
        Behavior::DropSpawn => {
            let spawned = triggers::roll(rng, p)
                && particles::spawn_drop(store, &config.drop, now, rng).is_some();
            usize::from(spawned)
        }
    }
}
