//! JavaScript-facing controls.
//!
//! The host page builds a [`BoxApp`] for its canvas, wires its buttons to
//! `add_box` / `delete_selected` / `toggle_listeners`, and reads
//! `error_msg` / `listener_status` to display them. Call `stop` on teardown.

use std::sync::Once;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::Config;
use crate::engine::{Engine, log_actions};

static LOGGING: Once = Once::new();

/// Install the console logger and panic hook once per page.
pub fn init_logging() {
    LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        if let Err(err) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("logger already installed: {err}").into());
        }
    });
}

/// One running box canvas session.
#[wasm_bindgen]
pub struct BoxApp {
    engine: Engine,
}

#[wasm_bindgen]
impl BoxApp {
    /// Bind to `canvas` and start listening and rendering.
    ///
    /// `config_json` is an optional, possibly partial, JSON config object.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an invalid config, a canvas without a 2D context,
    /// or a page without a `document`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: Option<String>) -> Result<BoxApp, JsValue> {
        init_logging();

        let config = match config_json {
            Some(json) => Config::from_json(&json).map_err(|err| JsValue::from_str(&err.to_string()))?,
            None => Config::default(),
        };

        let mut engine = Engine::new(canvas, config, random_seed())?;
        engine.start()?;
        log::info!("box canvas started");
        Ok(Self { engine })
    }

    /// Add a box at the top-left corner.
    #[wasm_bindgen(js_name = addBox)]
    pub fn add_box(&self) {
        log_actions(&self.engine.add_box());
    }

    /// Delete the selected box, or set the status message if none is selected.
    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&self) {
        log_actions(&self.engine.delete_selected());
    }

    /// Flip input listeners on/off. Returns the new `"ON"`/`"OFF"` label.
    #[wasm_bindgen(js_name = toggleListeners)]
    pub fn toggle_listeners(&mut self) -> String {
        self.engine.toggle_listeners().label().to_owned()
    }

    #[wasm_bindgen(getter, js_name = errorMsg)]
    pub fn error_msg(&self) -> String {
        self.engine.error_msg()
    }

    #[wasm_bindgen(getter, js_name = listenerStatus)]
    pub fn listener_status(&self) -> String {
        self.engine.listener_status().label().to_owned()
    }

    #[wasm_bindgen(getter, js_name = boxCount)]
    pub fn box_count(&self) -> usize {
        self.engine.box_count()
    }

    /// Stop rendering and detach all listeners.
    pub fn stop(&mut self) {
        self.engine.stop();
        log::info!("box canvas stopped");
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn random_seed() -> u64 {
    (js_sys::Math::random() * (u64::MAX as f64)) as u64 ^ (js_sys::Date::now() as u64)
}
