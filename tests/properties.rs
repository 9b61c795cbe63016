use std::f32::consts::TAU;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use terrarium_sim::animation::{hop_height, hop_progress, step_frog};
use terrarium_sim::behavior::wander_target;
use terrarium_sim::config::{FrogConfig, FrogSeed, TriggerConfig};
use terrarium_sim::math::Vec3;
use terrarium_sim::particles::{age_ripples, spawn_ripple};
use terrarium_sim::store::{Entity, EntityStore, Frog, FrogKind, FrogPatch};
use terrarium_sim::{Simulation, TerrariumConfig};

fn busy_config() -> TerrariumConfig {
    let mut config = TerrariumConfig::default();
    config.schedule.wander = TriggerConfig::new(0.3, 0.6);
    config.schedule.turtle_head = TriggerConfig::new(0.2, 0.3);
    config.schedule.turtle_step = TriggerConfig::new(0.2, 0.9);
    config.schedule.ripple = TriggerConfig::new(0.1, 1.0);
    config
}

proptest! {
    #[test]
    fn positions_and_phases_stay_legal(
        seed in any::<u64>(),
        dts in prop::collection::vec(0.0f32..0.25, 1..400),
    ) {
        let mut sim = Simulation::new(busy_config(), seed).unwrap();
        for dt in dts {
            sim.tick(dt);
            let cfg = sim.config();
            let snap = sim.snapshot();
            for f in snap.frogs {
                prop_assert!(cfg.frog.bounds_x.contains(f.position.x));
                prop_assert!(cfg.frog.bounds_z.contains(f.position.z));
                prop_assert!(f.position.y >= 0.0 && f.position.y <= cfg.frog.hop_amplitude);
                prop_assert!(f.breathe_phase >= 0.0 && f.breathe_phase < TAU);
            }
            for t in snap.turtles {
                prop_assert!(cfg.turtle.bounds_x.contains(t.position.x));
                prop_assert!(t.leg_phase >= 0.0 && t.leg_phase < TAU);
            }
            for f in snap.fireflies {
                prop_assert!(cfg.firefly.bounds_y.contains(f.position.y));
            }
            prop_assert!(snap.ripples.len() <= cfg.ripple.max_live);
        }
    }

    #[test]
    fn hop_arc_zero_at_ends_positive_midway(journey in 0.01f32..20.0, amplitude in 0.001f32..1.0) {
        prop_assert_eq!(hop_height(hop_progress(journey, journey), amplitude), 0.0);
        prop_assert_eq!(hop_height(hop_progress(0.0, journey), amplitude), 0.0);
        prop_assert!(hop_height(hop_progress(journey * 0.5, journey), amplitude) > 0.0);
    }

    #[test]
    fn wander_targets_respect_bounds(
        seed in any::<u64>(),
        x in -4.0f32..4.0,
        z in -2.0f32..2.5,
    ) {
        let config = FrogConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let t = wander_target(Vec3::floor(x, z), &config, &mut rng);
        prop_assert!((-4.0..=4.0).contains(&t.x));
        prop_assert!((-2.0..=2.5).contains(&t.z));
        prop_assert_eq!(t.y, 0.0);
    }

    #[test]
    fn frog_approach_never_overshoots(target in 0.5f32..3.5, dt in 0.001f32..1.0) {
        let config = FrogConfig::default();
        let seed = FrogSeed { kind: FrogKind::GreenTree, x: -0.5, z: 0.0, breathe_phase: 0.0 };
        let mut frog = Frog::from_seed(1, &seed);
        let goal = Vec3::floor(target, 0.0);
        frog.apply(FrogPatch {
            target: Some(goal),
            journey: Some(frog.position.planar_distance(&goal)),
            ..Default::default()
        });

        let mut last = frog.position.x;
        for _ in 0..100 {
            frog.apply(step_frog(&frog, &config, dt));
            prop_assert!(frog.position.x >= last);
            prop_assert!(frog.position.x <= target + 1e-4);
            last = frog.position.x;
        }
    }

    #[test]
    fn ripples_grow_and_fade_until_removed(
        seed in any::<u64>(),
        dts in prop::collection::vec(0.001f32..0.1, 1..200),
    ) {
        let config = TerrariumConfig::default();
        let mut store = EntityStore::new(&config);
        let mut rng = StdRng::seed_from_u64(seed);
        let id = spawn_ripple(&mut store, &config.ripple, 0.0, &mut rng).unwrap();

        let mut prev = store.ripples.find(id).cloned().unwrap();
        for dt in dts {
            let expected_opacity = prev.opacity - dt * config.ripple.fade_rate;
            age_ripples(&mut store, &config.ripple, dt);
            match store.ripples.find(id) {
                Some(r) => {
                    prop_assert!(r.size > prev.size);
                    prop_assert!(r.opacity < prev.opacity);
                    prop_assert!(r.opacity > 0.0);
                    prev = r.clone();
                }
                None => {
                    prop_assert!(expected_opacity <= 0.0);
                    break;
                }
            }
        }
    }

    #[test]
    fn update_of_absent_id_changes_nothing(seed in any::<u64>(), missing in 1000u32..u32::MAX) {
        let config = TerrariumConfig::default();
        let mut store = EntityStore::populated(&config);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..5 {
            spawn_ripple(&mut store, &config.ripple, 0.0, &mut rng);
        }
        let frogs = store.frogs.get().to_vec();
        let ripples = store.ripples.get().to_vec();

        let touched = store.frogs.update(missing, FrogPatch {
            eye_open: Some(false),
            position: Some(Vec3::new(9.0, 9.0, 9.0)),
            ..Default::default()
        });

        prop_assert!(!touched);
        prop_assert_eq!(store.frogs.get(), &frogs[..]);
        prop_assert_eq!(store.ripples.get(), &ripples[..]);
    }
}

#[test]
fn ripple_cap_holds_under_constant_spawning() {
    let mut config = TerrariumConfig::default();
    config.schedule.ripple = TriggerConfig::new(0.01, 1.0);
    config.ripple.fade_rate = 0.01;
    let mut sim = Simulation::new(config, 3).unwrap();

    for _ in 0..2000 {
        sim.tick(0.05);
        assert!(sim.snapshot().ripples.len() <= 20);
    }
    assert_eq!(sim.count("ripples").unwrap(), 20);
}
