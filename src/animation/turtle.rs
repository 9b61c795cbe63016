use crate::config::TurtleConfig;
use crate::math::{approach_factor, wrap_phase};
use crate::store::{MotionState, Turtle, TurtlePatch};

/// Compute the next state of one turtle after `dt` seconds.
///
/// Head-in turtles stay put; legs keep cycling regardless.
pub fn step_turtle(turtle: &Turtle, config: &TurtleConfig, dt: f32) -> TurtlePatch {
    let leg_phase = wrap_phase(turtle.leg_phase + dt * config.leg_rate);

    let head_out = turtle.head_out
        + (turtle.head_target - turtle.head_out) * approach_factor(dt, config.head_speed);

    let dx = turtle.target_x - turtle.position.x;
    let mut position = turtle.position;

    let (state, walk_bob) = if dx.abs() > config.arrival_threshold && turtle.head_is_out() {
        let k = approach_factor(dt, config.speed);
        position.x = config.bounds_x.clamp(turtle.position.x + dx * k);
        (MotionState::Moving, leg_phase.sin() * config.walk_bob_amplitude)
    } else {
        (MotionState::Idle, turtle.walk_bob * config.settle_decay)
    };

    TurtlePatch {
        position: Some(position),
        head_out: Some(head_out.clamp(0.0, 1.0)),
        leg_phase: Some(leg_phase),
        walk_bob: Some(walk_bob),
        state: Some(state),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TurtleSeed;
    use crate::store::{Entity, Heading};

    fn turtle_at(x: f32) -> Turtle {
        Turtle::from_seed(1, &TurtleSeed { x, z: 1.0, heading: Heading::Right, leg_phase: 0.0 })
    }

    #[test]
    fn test_walks_toward_target_with_head_out() {
        let config = TurtleConfig::default();
        let mut turtle = turtle_at(0.0);
        turtle.target_x = 0.3;

        turtle.apply(step_turtle(&turtle, &config, 0.1));
        assert!(turtle.position.x > 0.0);
        assert!(turtle.position.x < 0.3);
        assert_eq!(turtle.state, MotionState::Moving);
    }

    #[test]
    fn test_walk_after_wall_step_matches_heading() {
        let config = TurtleConfig::default();
        let mut turtle = turtle_at(4.4);
        let (target_x, heading) = crate::behavior::turtle_step(&turtle, &config, false);
        turtle.target_x = target_x;
        turtle.heading = heading;

        let start = turtle.position.x;
        turtle.apply(step_turtle(&turtle, &config, 0.1));
        assert_eq!(turtle.state, MotionState::Moving);
        assert!((turtle.position.x - start) * turtle.heading.sign() > 0.0);
    }

    #[test]
    fn test_frozen_with_head_in() {
        let config = TurtleConfig::default();
        let mut turtle = turtle_at(0.0);
        turtle.target_x = 0.3;
        turtle.head_out = 0.2;
        turtle.head_target = 0.0;

        let leg_before = turtle.leg_phase;
        turtle.apply(step_turtle(&turtle, &config, 0.1));
        assert_eq!(turtle.position.x, 0.0);
        assert_eq!(turtle.state, MotionState::Idle);
        assert!(turtle.leg_phase > leg_before);
    }

    #[test]
    fn test_head_eases_instead_of_snapping() {
        let config = TurtleConfig::default();
        let mut turtle = turtle_at(0.0);
        turtle.head_target = 0.0;

        turtle.apply(step_turtle(&turtle, &config, 0.05));
        assert!(turtle.head_out < 1.0);
        assert!(turtle.head_out > 0.5);

        for _ in 0..100 {
            turtle.apply(step_turtle(&turtle, &config, 0.05));
        }
        assert!(turtle.head_out < 0.01);
    }

    #[test]
    fn test_stays_inside_bounds() {
        let config = TurtleConfig::default();
        let mut turtle = turtle_at(4.4);
        turtle.target_x = 50.0;

        for _ in 0..500 {
            turtle.apply(step_turtle(&turtle, &config, 0.1));
            assert!(config.bounds_x.contains(turtle.position.x));
        }
    }
}
