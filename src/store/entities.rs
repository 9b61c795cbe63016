//! Entity records owned by the store, plus their partial-update patches

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::config::{FrogSeed, TurtleSeed};
use crate::math::{wrap_phase, Vec3};

pub type EntityId = u32;

/// Records addressable by id and mergeable with a partial patch
pub trait Entity {
    type Patch: Default;

    fn id(&self) -> EntityId;

    /// Merge every `Some` field of the patch into the record
    fn apply(&mut self, patch: Self::Patch);
}

/// Horizontal facing, the sign of travel along x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    pub fn from_delta(dx: f32) -> Self {
        if dx > 0.0 {
            Heading::Right
        } else {
            Heading::Left
        }
    }

    /// Yaw for a billboard facing this way
    pub fn rotation_y(self) -> f32 {
        match self {
            Heading::Right => 0.0,
            Heading::Left => PI,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionState {
    #[default]
    Idle,
    Moving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrogKind {
    RedEyed,
    PoisonDart,
    GreenTree,
}

impl FrogKind {
    pub fn index(self) -> u8 {
        match self {
            FrogKind::RedEyed => 0,
            FrogKind::PoisonDart => 1,
            FrogKind::GreenTree => 2,
        }
    }
}

/// A frog. `position.y` is the current hop height above the floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frog {
    pub id: EntityId,
    pub kind: FrogKind,
    pub position: Vec3,
    /// Floor-plane destination; `y` is always 0
    pub target: Vec3,
    /// Floor distance to the target when it was last set, used for hop progress
    pub journey: f32,
    pub heading: Heading,
    pub breathe_phase: f32,
    pub breathe_scale: f32,
    pub eye_open: bool,
    /// Seconds until the eyes reopen; 0 when not blinking
    pub blink_timer: f32,
    pub state: MotionState,
}

impl Frog {
    pub fn from_seed(id: EntityId, seed: &FrogSeed) -> Self {
        let position = Vec3::floor(seed.x, seed.z);
        Self {
            id,
            kind: seed.kind,
            position,
            target: position,
            journey: 0.0,
            heading: Heading::Right,
            breathe_phase: wrap_phase(seed.breathe_phase),
            breathe_scale: 1.0,
            eye_open: true,
            blink_timer: 0.0,
            state: MotionState::Idle,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrogPatch {
    pub position: Option<Vec3>,
    pub target: Option<Vec3>,
    pub journey: Option<f32>,
    pub heading: Option<Heading>,
    pub breathe_phase: Option<f32>,
    pub breathe_scale: Option<f32>,
    pub eye_open: Option<bool>,
    pub blink_timer: Option<f32>,
    pub state: Option<MotionState>,
}

impl Entity for Frog {
    type Patch = FrogPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply(&mut self, patch: FrogPatch) {
        if let Some(v) = patch.position {
            self.position = v;
        }
        if let Some(v) = patch.target {
            self.target = v;
        }
        if let Some(v) = patch.journey {
            self.journey = v;
        }
        if let Some(v) = patch.heading {
            self.heading = v;
        }
        if let Some(v) = patch.breathe_phase {
            self.breathe_phase = v;
        }
        if let Some(v) = patch.breathe_scale {
            self.breathe_scale = v;
        }
        if let Some(v) = patch.eye_open {
            self.eye_open = v;
        }
        if let Some(v) = patch.blink_timer {
            self.blink_timer = v;
        }
        if let Some(v) = patch.state {
            self.state = v;
        }
    }
}

/// A turtle walking along x. Movement is only possible with the head out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Turtle {
    pub id: EntityId,
    pub position: Vec3,
    pub target_x: f32,
    pub heading: Heading,
    /// Eased head extension in [0, 1]
    pub head_out: f32,
    /// Where `head_out` is heading: 0 (tucked) or 1 (out)
    pub head_target: f32,
    pub leg_phase: f32,
    pub walk_bob: f32,
    pub state: MotionState,
}

impl Turtle {
    pub fn from_seed(id: EntityId, seed: &TurtleSeed) -> Self {
        Self {
            id,
            position: Vec3::floor(seed.x, seed.z),
            target_x: seed.x,
            heading: seed.heading,
            head_out: 1.0,
            head_target: 1.0,
            leg_phase: wrap_phase(seed.leg_phase),
            walk_bob: 0.0,
            state: MotionState::Idle,
        }
    }

    pub fn head_is_out(&self) -> bool {
        self.head_out > 0.5
    }

    pub fn rotation_y(&self) -> f32 {
        self.heading.rotation_y()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TurtlePatch {
    pub position: Option<Vec3>,
    pub target_x: Option<f32>,
    pub heading: Option<Heading>,
    pub head_out: Option<f32>,
    pub head_target: Option<f32>,
    pub leg_phase: Option<f32>,
    pub walk_bob: Option<f32>,
    pub state: Option<MotionState>,
}

impl Entity for Turtle {
    type Patch = TurtlePatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply(&mut self, patch: TurtlePatch) {
        if let Some(v) = patch.position {
            self.position = v;
        }
        if let Some(v) = patch.target_x {
            self.target_x = v;
        }
        if let Some(v) = patch.heading {
            self.heading = v;
        }
        if let Some(v) = patch.head_out {
            self.head_out = v;
        }
        if let Some(v) = patch.head_target {
            self.head_target = v;
        }
        if let Some(v) = patch.leg_phase {
            self.leg_phase = v;
        }
        if let Some(v) = patch.walk_bob {
            self.walk_bob = v;
        }
        if let Some(v) = patch.state {
            self.state = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Firefly {
    pub id: EntityId,
    pub position: Vec3,
    /// Pulse offset in [0, 2π)
    pub phase: f32,
    pub speed: f32,
    /// Current brightness in [0.2, 1]
    pub glow: f32,
}

#[derive(Debug, Clone, Default)]
pub struct FireflyPatch {
    pub position: Option<Vec3>,
    pub glow: Option<f32>,
}

impl Entity for Firefly {
    type Patch = FireflyPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply(&mut self, patch: FireflyPatch) {
        if let Some(v) = patch.position {
            self.position = v;
        }
        if let Some(v) = patch.glow {
            self.glow = v;
        }
    }
}

/// Expanding ring on the water pool
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ripple {
    pub id: EntityId,
    pub position: Vec3,
    pub size: f32,
    pub opacity: f32,
    pub born_at: f32,
}

#[derive(Debug, Clone, Default)]
pub struct RipplePatch {
    pub size: Option<f32>,
    pub opacity: Option<f32>,
}

impl Entity for Ripple {
    type Patch = RipplePatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply(&mut self, patch: RipplePatch) {
        if let Some(v) = patch.size {
            self.size = v;
        }
        if let Some(v) = patch.opacity {
            self.opacity = v;
        }
    }
}

/// Condensation drop sliding down the glass (pane percent coordinates)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterDrop {
    pub id: EntityId,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub born_at: f32,
}

#[derive(Debug, Clone, Default)]
pub struct WaterDropPatch {
    pub y: Option<f32>,
}

impl Entity for WaterDrop {
    type Patch = WaterDropPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn apply(&mut self, patch: WaterDropPatch) {
        if let Some(v) = patch.y {
            self.y = v;
        }
    }
}
