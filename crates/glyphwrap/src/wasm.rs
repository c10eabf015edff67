//! WebAssembly bindings for Glyphwrap
//!
//! Browser-facing wrappers around the line wrapper and the font metrics.

use wasm_bindgen::prelude::*;

use crate::core::{FixedMetrics, LabelBase, LabelType, LineWrapper};

/// Initialize WASM module
///
/// Sets up the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Wrap text to lines of at most `max_chars` characters
///
/// # Returns
/// * A JSON array of lines
/// * Throws a JavaScript error if the width is below 2
#[wasm_bindgen]
pub fn wrap_text(text: &str, max_chars: usize) -> Result<String, JsValue> {
    let wrapper = LineWrapper::new(max_chars).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let lines = wrapper.wrap(text);
    serde_json::to_string(&lines).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Baseline-to-baseline distance for a font with known ascent and descent
#[wasm_bindgen]
pub fn line_height(ascent: i32, descent: i32, line_spacing: f32) -> Result<i32, JsValue> {
    let mut label = LabelBase::new(FixedMetrics::new(ascent, descent), LabelType::Label);
    label
        .set_line_spacing(line_spacing)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(label.line_height())
}
