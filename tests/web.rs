//! Browser tests for the JavaScript facade. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use terrarium_sim::Terrarium;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_frame_advances_clock() {
    let mut terrarium = Terrarium::new(7).unwrap();
    terrarium.frame(1000.0);
    assert_eq!(terrarium.time(), 0.0);

    terrarium.frame(1016.0);
    assert!((terrarium.time() - 0.016).abs() < 1e-4);
}

#[wasm_bindgen_test]
fn test_frame_now_uses_performance_clock() {
    let mut terrarium = Terrarium::new(7).unwrap();
    assert!(terrarium.frame_now().is_ok());
    assert!(terrarium.frame_now().is_ok());
    assert!(terrarium.time() >= 0.0);
}

#[wasm_bindgen_test]
fn test_buffers_match_strides() {
    let mut terrarium = Terrarium::new(7).unwrap();
    for _ in 0..120 {
        terrarium.tick(1.0 / 60.0);
    }
    for name in ["frogs", "turtles", "fireflies", "ripples", "waterDrops"] {
        let data = terrarium.buffer(name).unwrap();
        let stride = Terrarium::stride(name).unwrap();
        assert_eq!(data.len(), terrarium.count(name).unwrap() * stride);
    }
}

#[wasm_bindgen_test]
fn test_unknown_collection_is_an_error() {
    let terrarium = Terrarium::new(7).unwrap();
    assert!(terrarium.buffer("plants").is_err());
}

#[wasm_bindgen_test]
fn test_with_config_rejects_bad_yaml() {
    assert!(Terrarium::with_config("frog: [", 1).is_err());
    let terrarium = Terrarium::with_config("firefly:\n  count: 4\n", 1).unwrap();
    assert_eq!(terrarium.count("fireflies").unwrap(), 4);
}
