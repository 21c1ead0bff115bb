use log::{error, info};
use wasm_bindgen::JsValue;
use web_sys::{window, HtmlCanvasElement};

use super::context::WebGl;
use crate::config::SceneConfig;
use crate::error::InitError;

/// Acquire the canvas' context and draw the square once. Any failure is
/// alerted to the user and handed back to the caller.
pub fn start(canvas: HtmlCanvasElement, config: &SceneConfig) -> Result<(), JsValue> {
    match WebGl::from_canvas(canvas).and_then(|gl| crate::run(&gl, config).map(|_| ())) {
        Ok(()) => {
            info!("square drawn");
            Ok(())
        }
        Err(err) => {
            alert(&err);
            Err(err.into())
        }
    }
}

pub(super) fn alert(err: &InitError) {
    error!("{err}");
    if let Some(window) = window() {
        // nothing left to report to if the alert itself fails
        let _ = window.alert_with_message(&err.to_string());
    }
}
