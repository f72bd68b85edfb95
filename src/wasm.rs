//! WASM bindings for Pulse Network.
//!
//! This module provides JavaScript-friendly bindings for running networks
//! in web browsers.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmPulseSim } from 'pulse_network';
//!
//! await init();
//!
//! const networkDsl = `
//!   broadcaster -> a, b, c
//!   %a -> b
//!   %b -> c
//!   %c -> inv
//!   &inv -> a
//! `;
//!
//! const sim = new WasmPulseSim(networkDsl);
//! sim.press_many(1000);
//! console.log(sim.total_low(), sim.total_high());
//! ```

use wasm_bindgen::prelude::*;

use crate::dsl;
use crate::engine::{self, EngineConfig, PulseEngine};
use crate::network::{validate_network, Network};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible pulse network simulator.
///
/// Wraps the native `PulseEngine` and keeps an unpressed copy of the network so that
/// first-low analysis always starts from the unpressed state.
#[wasm_bindgen]
pub struct WasmPulseSim {
    engine: PulseEngine,
    initial: Network,
}

#[wasm_bindgen]
impl WasmPulseSim {
    /// Create a new simulator from a network DSL string.
    ///
    /// # Arguments
    /// * `network_dsl` - The network description in pulse DSL format
    ///
    /// # Returns
    /// A new `WasmPulseSim` instance or an error if the network is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(network_dsl: &str) -> Result<WasmPulseSim, JsValue> {
        let ast = dsl::parse(network_dsl).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let network = Network::from_ast(ast).map_err(|e| JsValue::from_str(&e.to_string()))?;

        validate_network(&network).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WasmPulseSim {
            engine: PulseEngine::new(network.clone()),
            initial: network,
        })
    }

    /// Press the button once, returning `[low, high]` for that press.
    #[wasm_bindgen]
    pub fn press(&mut self) -> Vec<u64> {
        let counts = self.engine.press();
        vec![counts.low(), counts.high()]
    }

    /// Press the button `count` times.
    #[wasm_bindgen]
    pub fn press_many(&mut self, count: u64) {
        self.engine.press_many(count);
    }

    /// Total low pulses delivered so far.
    #[wasm_bindgen]
    pub fn total_low(&self) -> u64 {
        self.engine.total_low()
    }

    /// Total high pulses delivered so far.
    #[wasm_bindgen]
    pub fn total_high(&self) -> u64 {
        self.engine.total_high()
    }

    /// Number of presses so far.
    #[wasm_bindgen(getter)]
    pub fn presses(&self) -> u64 {
        self.engine.presses()
    }

    /// Presses until `module` first receives a low pulse, counted from the
    /// unpressed network.
    ///
    /// # Arguments
    /// * `module` - Name of the watched module
    /// * `max_presses` - Search limit
    #[wasm_bindgen]
    pub fn presses_until_low(&self, module: &str, max_presses: u64) -> Result<u64, JsValue> {
        let config = EngineConfig::new().with_max_presses(max_presses);
        engine::presses_until_low(&self.initial, module, &config)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
