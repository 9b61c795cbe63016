use serde::{Deserialize, Serialize};

use crate::store::{FrogKind, Heading};

/// Starting placement for one frog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrogSeed {
    pub kind: FrogKind,
    pub x: f32,
    pub z: f32,
    #[serde(default)]
    pub breathe_phase: f32,
}

/// Starting placement for one turtle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurtleSeed {
    pub x: f32,
    pub z: f32,
    pub heading: Heading,
    #[serde(default)]
    pub leg_phase: f32,
}

/// The fixed set of animals created when a scene starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub frogs: Vec<FrogSeed>,
    pub turtles: Vec<TurtleSeed>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        use std::f32::consts::PI;

        Self {
            frogs: vec![
                FrogSeed { kind: FrogKind::RedEyed, x: -2.8, z: 0.8, breathe_phase: 0.0 },
                FrogSeed { kind: FrogKind::PoisonDart, x: 2.2, z: -0.5, breathe_phase: PI },
                FrogSeed { kind: FrogKind::GreenTree, x: -0.2, z: 2.2, breathe_phase: PI * 0.6 },
            ],
            turtles: vec![
                TurtleSeed { x: -3.2, z: 1.5, heading: Heading::Right, leg_phase: 0.0 },
                TurtleSeed { x: 2.8, z: 2.0, heading: Heading::Left, leg_phase: PI },
            ],
        }
    }
}
