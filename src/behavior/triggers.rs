//! Randomized behavior triggers. Every roll is independent per entity.

use rand::Rng;

use crate::config::{FrogConfig, TurtleConfig};
use crate::math::Vec3;
use crate::store::{EntityStore, FrogPatch, Heading, Turtle, TurtlePatch};

/// True with probability `p`
pub fn roll<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    rng.random::<f32>() < p
}

/// Offset `from` by a bounded random vector and clamp into the frog's legal area.
///
/// Successive targets form a bounded random walk rather than a teleport.
pub fn wander_target<R: Rng + ?Sized>(from: Vec3, config: &FrogConfig, rng: &mut R) -> Vec3 {
    let ox = (rng.random::<f32>() - 0.5) * config.wander_span_x;
    let oz = (rng.random::<f32>() - 0.5) * config.wander_span_z;
    Vec3::floor(
        config.bounds_x.clamp(from.x + ox),
        config.bounds_z.clamp(from.z + oz),
    )
}

/// Next target and heading for a turtle stepping forward.
///
/// A step that would leave the bounds turns the turtle around and steps the
/// other way instead, so travel always agrees with the returned heading.
pub fn turtle_step(turtle: &Turtle, config: &TurtleConfig, reverse: bool) -> (f32, Heading) {
    let mut heading = if reverse {
        turtle.heading.flipped()
    } else {
        turtle.heading
    };
    let mut candidate = turtle.position.x + heading.sign() * config.step;
    if !config.bounds_x.contains(candidate) {
        heading = heading.flipped();
        candidate = turtle.position.x + heading.sign() * config.step;
    }
    (config.bounds_x.clamp(candidate), heading)
}

/// Close eyes on each frog that rolls under `p`. Returns how many blinked.
pub fn blink<R: Rng + ?Sized>(
    store: &mut EntityStore,
    config: &FrogConfig,
    p: f32,
    rng: &mut R,
) -> usize {
    let mut fired = 0;
    for id in store.frogs.ids() {
        if roll(rng, p) {
            store.frogs.update(id, FrogPatch {
                eye_open: Some(false),
                blink_timer: Some(config.blink_duration),
                ..Default::default()
            });
            fired += 1;
        }
    }
    fired
}

/// Give each frog that rolls under `p` a new nearby target
pub fn wander<R: Rng + ?Sized>(
    store: &mut EntityStore,
    config: &FrogConfig,
    p: f32,
    rng: &mut R,
) -> usize {
    let positions: Vec<_> = store.frogs.get().iter().map(|f| (f.id, f.position)).collect();
    let mut fired = 0;
    for (id, position) in positions {
        if roll(rng, p) {
            let target = wander_target(position, config, rng);
            let journey = position.planar_distance(&target);
            log::debug!("frog {id} wanders to ({:.2}, {:.2})", target.x, target.z);
            store.frogs.update(id, FrogPatch {
                target: Some(target),
                journey: Some(journey),
                ..Default::default()
            });
            fired += 1;
        }
    }
    fired
}

/// Flip the head target of each turtle that rolls under `p`
pub fn toggle_heads<R: Rng + ?Sized>(store: &mut EntityStore, p: f32, rng: &mut R) -> usize {
    let targets: Vec<_> = store.turtles.get().iter().map(|t| (t.id, t.head_target)).collect();
    let mut fired = 0;
    for (id, head_target) in targets {
        if roll(rng, p) {
            let next = if head_target > 0.5 { 0.0 } else { 1.0 };
            store.turtles.update(id, TurtlePatch {
                head_target: Some(next),
                ..Default::default()
            });
            fired += 1;
        }
    }
    fired
}

/// Step each head-out turtle that rolls under `p`. Head-in turtles never step.
pub fn step_turtles<R: Rng + ?Sized>(
    store: &mut EntityStore,
    config: &TurtleConfig,
    p: f32,
    rng: &mut R,
) -> usize {
    let turtles: Vec<Turtle> = store.turtles.get().to_vec();
    let mut fired = 0;
    for turtle in turtles.iter().filter(|t| t.head_is_out()) {
        if roll(rng, p) {
            let reverse = roll(rng, config.reverse_probability);
            let (target_x, heading) = turtle_step(turtle, config, reverse);
            store.turtles.update(turtle.id, TurtlePatch {
                target_x: Some(target_x),
                heading: Some(heading),
                ..Default::default()
            });
            fired += 1;
        }
    }
    fired
}
