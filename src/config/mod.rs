//! Static scene configuration
//!
//! Every tunable constant the simulation consumes lives here: speeds,
//! probabilities, cadences, bounds and the starting population. All sections
//! default to the stock terrarium, so a YAML document only needs to name the
//! values it overrides.

mod population;

pub use population::{FrogSeed, PopulationConfig, TurtleSeed};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TerrariumError};
use crate::math::{AxisRange, Vec3};

/// Upper limit for any configured entity count or particle cap
pub const MAX_ENTITIES: usize = 1000;

/// Frog movement, hop and blink tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrogConfig {
    /// Remaining floor distance below which a frog counts as arrived
    pub arrival_threshold: f32,
    /// Fraction of the remaining gap closed per second
    pub speed: f32,
    /// Peak height of the hop arc
    pub hop_amplitude: f32,
    /// Per-tick multiplier applied to the residual height once idle
    pub settle_decay: f32,
    /// Horizontal delta below which facing is left unchanged
    pub direction_deadband: f32,
    /// Breathing phase advance in radians per second
    pub breathe_rate: f32,
    /// Breathing scale wobble around 1.0
    pub breathe_depth: f32,
    /// Seconds the eyes stay shut after a blink
    pub blink_duration: f32,
    /// Full width of the wander offset window on x (offset is ±span/2)
    pub wander_span_x: f32,
    /// Full width of the wander offset window on z
    pub wander_span_z: f32,
    pub bounds_x: AxisRange,
    pub bounds_z: AxisRange,
}

impl Default for FrogConfig {
    fn default() -> Self {
        Self {
            arrival_threshold: 0.08,
            speed: 1.5,
            hop_amplitude: 0.08,
            settle_decay: 0.85,
            direction_deadband: 0.02,
            breathe_rate: 2.0,
            breathe_depth: 0.03,
            blink_duration: 0.15,
            wander_span_x: 1.2,
            wander_span_z: 1.0,
            bounds_x: AxisRange::new(-4.0, 4.0),
            bounds_z: AxisRange::new(-2.0, 2.5),
        }
    }
}

/// Turtle walking and head tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    pub arrival_threshold: f32,
    pub speed: f32,
    /// Leg phase advance in radians per second
    pub leg_rate: f32,
    /// Rate at which `head_out` eases toward its target
    pub head_speed: f32,
    /// Distance added to the target per step trigger
    pub step: f32,
    /// Chance a step trigger turns the turtle around
    pub reverse_probability: f32,
    pub walk_bob_amplitude: f32,
    /// Per-tick multiplier applied to the residual walk bob once idle
    pub settle_decay: f32,
    pub bounds_x: AxisRange,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            arrival_threshold: 0.02,
            speed: 0.5,
            leg_rate: 3.0,
            head_speed: 2.0,
            step: 0.3,
            reverse_probability: 0.1,
            walk_bob_amplitude: 0.015,
            settle_decay: 0.85,
            bounds_x: AxisRange::new(-4.5, 4.5),
        }
    }
}

/// Firefly swarm tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireflyConfig {
    pub count: usize,
    /// Per-axis drift amplitude in scene units per second
    pub drift: Vec3,
    pub speed: AxisRange,
    /// Pulse frequency multiplier for the glow signal
    pub glow_rate: f32,
    pub bounds_x: AxisRange,
    pub bounds_y: AxisRange,
    pub bounds_z: AxisRange,
}

impl Default for FireflyConfig {
    fn default() -> Self {
        Self {
            count: 15,
            drift: Vec3::new(0.15, 0.1, 0.12),
            speed: AxisRange::new(0.5, 1.0),
            glow_rate: 0.4,
            bounds_x: AxisRange::new(-4.5, 4.5),
            bounds_y: AxisRange::new(0.5, 2.5),
            bounds_z: AxisRange::new(-2.0, 2.5),
        }
    }
}

/// Water-pool ripple tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub max_live: usize,
    pub initial_opacity: f32,
    /// Radius growth per second
    pub growth_rate: f32,
    /// Opacity lost per second
    pub fade_rate: f32,
    pub pool_x: AxisRange,
    pub pool_z: AxisRange,
    pub surface_y: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            max_live: 20,
            initial_opacity: 0.6,
            growth_rate: 0.8,
            fade_rate: 0.3,
            pool_x: AxisRange::new(-2.8, -1.3),
            pool_z: AxisRange::new(1.2, 2.0),
            surface_y: 0.0,
        }
    }
}

/// Condensation drops on the glass, in pane percent coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropConfig {
    pub max_live: usize,
    pub spawn_x: AxisRange,
    pub spawn_y: AxisRange,
    /// Drops are culled once they fall to this height
    pub visible_until: f32,
    pub size: AxisRange,
    /// Fall speed in pane units per second
    pub fall_speed: AxisRange,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            max_live: 20,
            spawn_x: AxisRange::new(0.0, 100.0),
            spawn_y: AxisRange::new(0.0, 30.0),
            visible_until: 100.0,
            size: AxisRange::new(0.3, 1.1),
            fall_speed: AxisRange::new(0.4, 1.0),
        }
    }
}

/// Cadence (seconds) and per-entity probability of one behavior check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub cadence: f32,
    pub probability: f32,
}

impl TriggerConfig {
    pub const fn new(cadence: f32, probability: f32) -> Self {
        Self { cadence, probability }
    }

    fn validate(&self, name: &str) -> Result<()> {
        check_positive(&format!("schedule.{name}.cadence"), self.cadence)?;
        check_probability(&format!("schedule.{name}.probability"), self.probability)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub blink: TriggerConfig,
    pub wander: TriggerConfig,
    pub turtle_head: TriggerConfig,
    pub turtle_step: TriggerConfig,
    pub ripple: TriggerConfig,
    pub drop: TriggerConfig,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            blink: TriggerConfig::new(0.5, 0.08),
            wander: TriggerConfig::new(1.0, 0.04),
            turtle_head: TriggerConfig::new(0.2, 0.05),
            turtle_step: TriggerConfig::new(0.2, 0.2),
            ripple: TriggerConfig::new(1.2, 0.25),
            drop: TriggerConfig::new(0.8, 0.3),
        }
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrariumConfig {
    pub frog: FrogConfig,
    pub turtle: TurtleConfig,
    pub firefly: FireflyConfig,
    pub ripple: RippleConfig,
    pub drop: DropConfig,
    pub schedule: ScheduleConfig,
    pub population: PopulationConfig,
    /// Longest frame step the simulation will integrate in one tick
    pub max_frame_dt: f32,
}

impl Default for TerrariumConfig {
    fn default() -> Self {
        Self {
            frog: FrogConfig::default(),
            turtle: TurtleConfig::default(),
            firefly: FireflyConfig::default(),
            ripple: RippleConfig::default(),
            drop: DropConfig::default(),
            schedule: ScheduleConfig::default(),
            population: PopulationConfig::default(),
            max_frame_dt: 0.1,
        }
    }
}

impl TerrariumConfig {
    /// Parse from YAML and validate. Missing sections fall back to defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        log::info!(
            "Loaded terrarium config: {} frogs, {} turtles, {} fireflies",
            config.population.frogs.len(),
            config.population.turtles.len(),
            config.firefly.count
        );
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let frog = &self.frog;
        check_positive("frog.arrival_threshold", frog.arrival_threshold)?;
        check_positive("frog.speed", frog.speed)?;
        check_probability("frog.settle_decay", frog.settle_decay)?;
        check_positive("frog.blink_duration", frog.blink_duration)?;
        check_non_negative("frog.hop_amplitude", frog.hop_amplitude)?;
        check_non_negative("frog.breathe_rate", frog.breathe_rate)?;
        check_non_negative("frog.breathe_depth", frog.breathe_depth)?;
        frog.bounds_x.validate("frog.bounds_x")?;
        frog.bounds_z.validate("frog.bounds_z")?;

        let turtle = &self.turtle;
        check_positive("turtle.arrival_threshold", turtle.arrival_threshold)?;
        check_positive("turtle.speed", turtle.speed)?;
        check_positive("turtle.head_speed", turtle.head_speed)?;
        check_probability("turtle.reverse_probability", turtle.reverse_probability)?;
        check_probability("turtle.settle_decay", turtle.settle_decay)?;
        check_non_negative("turtle.leg_rate", turtle.leg_rate)?;
        check_non_negative("turtle.step", turtle.step)?;
        check_non_negative("turtle.walk_bob_amplitude", turtle.walk_bob_amplitude)?;
        turtle.bounds_x.validate("turtle.bounds_x")?;

        let firefly = &self.firefly;
        check_count("firefly.count", firefly.count)?;
        check_non_negative("firefly.glow_rate", firefly.glow_rate)?;
        firefly.speed.validate("firefly.speed")?;
        firefly.bounds_x.validate("firefly.bounds_x")?;
        firefly.bounds_y.validate("firefly.bounds_y")?;
        firefly.bounds_z.validate("firefly.bounds_z")?;

        let ripple = &self.ripple;
        check_count("ripple.max_live", ripple.max_live)?;
        check_probability("ripple.initial_opacity", ripple.initial_opacity)?;
        check_positive("ripple.growth_rate", ripple.growth_rate)?;
        check_positive("ripple.fade_rate", ripple.fade_rate)?;
        ripple.pool_x.validate("ripple.pool_x")?;
        ripple.pool_z.validate("ripple.pool_z")?;

        let drop = &self.drop;
        check_count("drop.max_live", drop.max_live)?;
        drop.spawn_x.validate("drop.spawn_x")?;
        drop.spawn_y.validate("drop.spawn_y")?;
        drop.size.validate("drop.size")?;
        drop.fall_speed.validate("drop.fall_speed")?;
        check_positive("drop.fall_speed.min", drop.fall_speed.min)?;

        let schedule = &self.schedule;
        schedule.blink.validate("blink")?;
        schedule.wander.validate("wander")?;
        schedule.turtle_head.validate("turtle_head")?;
        schedule.turtle_step.validate("turtle_step")?;
        schedule.ripple.validate("ripple")?;
        schedule.drop.validate("drop")?;

        self.validate_population()?;

        check_positive("max_frame_dt", self.max_frame_dt)
    }

    /// Starting animals must sit inside the area their motion is clamped to
    fn validate_population(&self) -> Result<()> {
        let population = &self.population;
        check_count("population.frogs", population.frogs.len())?;
        check_count("population.turtles", population.turtles.len())?;

        for (i, seed) in population.frogs.iter().enumerate() {
            check_within(&format!("population.frogs[{i}].x"), seed.x, &self.frog.bounds_x)?;
            check_within(&format!("population.frogs[{i}].z"), seed.z, &self.frog.bounds_z)?;
        }
        for (i, seed) in population.turtles.iter().enumerate() {
            check_within(&format!("population.turtles[{i}].x"), seed.x, &self.turtle.bounds_x)?;
            if !seed.z.is_finite() {
                return Err(TerrariumError::NonFinite {
                    name: format!("population.turtles[{i}].z"),
                    value: seed.z,
                });
            }
        }
        Ok(())
    }
}

fn check_within(name: &str, value: f32, range: &AxisRange) -> Result<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(TerrariumError::OutOfBounds {
            name: name.to_string(),
            value,
            min: range.min,
            max: range.max,
        })
    }
}

fn check_count(name: &str, value: usize) -> Result<()> {
    if value <= MAX_ENTITIES {
        Ok(())
    } else {
        Err(TerrariumError::TooLarge { name: name.to_string(), value, max: MAX_ENTITIES })
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TerrariumError::Negative { name: name.to_string(), value })
    }
}

fn check_positive(name: &str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TerrariumError::NonPositive { name: name.to_string(), value })
    }
}

fn check_probability(name: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TerrariumError::InvalidProbability { name: name.to_string(), value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(TerrariumConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
frog:
  speed: 3.0
schedule:
  ripple:
    cadence: 0.5
    probability: 1.0
"#;
        let config = TerrariumConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.frog.speed, 3.0);
        assert_eq!(config.frog.arrival_threshold, 0.08);
        assert_eq!(config.schedule.ripple.probability, 1.0);
        assert_eq!(config.schedule.blink, TriggerConfig::new(0.5, 0.08));
        assert_eq!(config.population.frogs.len(), 3);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = TerrariumConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(TerrariumConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_probability() {
        let yaml = "schedule:\n  blink:\n    cadence: 0.5\n    probability: 1.5\n";
        let err = TerrariumConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, TerrariumError::InvalidProbability { .. }));
    }

    #[test]
    fn test_rejects_zero_cadence() {
        let yaml = "schedule:\n  wander:\n    cadence: 0.0\n    probability: 0.5\n";
        let err = TerrariumConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, TerrariumError::NonPositive { .. }));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let yaml = "frog:\n  bounds_x:\n    min: 4.0\n    max: -4.0\n";
        let err = TerrariumConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("frog.bounds_x"));
    }

    #[test]
    fn test_rejects_frog_seed_outside_bounds() {
        let yaml = r#"
population:
  frogs:
    - kind: redEyed
      x: 10.0
      z: 9.0
"#;
        let err = TerrariumConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, TerrariumError::OutOfBounds { .. }));
        assert!(err.to_string().contains("population.frogs[0].x"));
    }

    #[test]
    fn test_rejects_turtle_seed_outside_bounds() {
        let yaml = r#"
population:
  turtles:
    - x: -6.0
      z: 1.0
      heading: left
"#;
        let err = TerrariumConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("population.turtles[0].x"));
    }

    #[test]
    fn test_rejects_negative_hop_amplitude() {
        let err = TerrariumConfig::from_yaml("frog:\n  hop_amplitude: -0.1\n").unwrap_err();
        assert!(err.to_string().contains("frog.hop_amplitude"));
    }

    #[test]
    fn test_rejects_non_finite_rates() {
        let err = TerrariumConfig::from_yaml("frog:\n  breathe_rate: .inf\n").unwrap_err();
        assert!(err.to_string().contains("frog.breathe_rate"));
        let err = TerrariumConfig::from_yaml("turtle:\n  leg_rate: .nan\n").unwrap_err();
        assert!(err.to_string().contains("turtle.leg_rate"));
    }

    #[test]
    fn test_rejects_huge_firefly_count() {
        let err = TerrariumConfig::from_yaml("firefly:\n  count: 100000000\n").unwrap_err();
        assert!(matches!(err, TerrariumError::TooLarge { .. }));
        assert!(TerrariumConfig::from_yaml("firefly:\n  count: 1000\n").is_ok());
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = TerrariumConfig::from_yaml("frog: [unclosed").unwrap_err();
        assert!(matches!(err, TerrariumError::Yaml(_)));
    }
}
