use wasm_bindgen::prelude::*;

pub mod animation;
pub mod behavior;
pub mod config;
pub mod error;
pub mod math;
pub mod particles;
pub mod simulation;
pub mod store;

pub use config::TerrariumConfig;
pub use error::TerrariumError;
pub use simulation::Simulation;
pub use store::{CollectionName, EntityStore, Snapshot};

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // Fails only if a logger is already installed
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Terrarium engine exposed to JavaScript.
///
/// The page drives it once per animation frame and pulls flat float
/// buffers per collection for drawing.
#[wasm_bindgen]
pub struct Terrarium {
    sim: Simulation,
    /// Timestamp of the previous `frame` call, in milliseconds
    last_frame_ms: Option<f64>,
}

#[wasm_bindgen]
impl Terrarium {
    /// Create the stock scene
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<Terrarium, JsValue> {
        let sim = Simulation::new(TerrariumConfig::default(), u64::from(seed)).map_err(to_js)?;
        Ok(Self { sim, last_frame_ms: None })
    }

    /// Create a scene from a YAML config (missing keys use the stock values)
    #[wasm_bindgen]
    pub fn with_config(yaml: &str, seed: u32) -> Result<Terrarium, JsValue> {
        let sim = Simulation::from_yaml(yaml, u64::from(seed)).map_err(to_js)?;
        Ok(Self { sim, last_frame_ms: None })
    }

    /// Advance by an explicit step in seconds
    #[wasm_bindgen]
    pub fn tick(&mut self, dt: f32) {
        self.sim.tick(dt);
    }

    /// Advance to a `requestAnimationFrame` timestamp. The first call only
    /// records the timestamp.
    #[wasm_bindgen]
    pub fn frame(&mut self, now_ms: f64) {
        if let Some(last) = self.last_frame_ms {
            let dt = ((now_ms - last) / 1000.0) as f32;
            self.sim.tick(dt);
        }
        self.last_frame_ms = Some(now_ms);
    }

    /// Advance to the current `performance.now()`
    #[wasm_bindgen]
    pub fn frame_now(&mut self) -> Result<(), JsValue> {
        let now = web_sys::window()
            .ok_or("No window available")?
            .performance()
            .ok_or("Performance API unavailable")?
            .now();
        self.frame(now);
        Ok(())
    }

    /// Simulation clock in seconds
    #[wasm_bindgen]
    pub fn time(&self) -> f32 {
        self.sim.time()
    }

    /// Live entities in a collection (`frogs`, `turtles`, `fireflies`, `ripples`, `waterDrops`)
    #[wasm_bindgen]
    pub fn count(&self, collection: &str) -> Result<usize, JsValue> {
        self.sim.count(collection).map_err(to_js)
    }

    /// Flat float data for a collection, `stride(collection)` floats per entity
    #[wasm_bindgen]
    pub fn buffer(&self, collection: &str) -> Result<Vec<f32>, JsValue> {
        self.sim.buffer(collection).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn stride(collection: &str) -> Result<usize, JsValue> {
        Simulation::stride(collection).map_err(to_js)
    }

    /// Whole scene as JSON, for debugging overlays
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.sim.snapshot_json().map_err(to_js)
    }
}

impl Terrarium {
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}

fn to_js(e: TerrariumError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
