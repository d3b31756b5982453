//! WASM bindings for visionfmt
//!
//! This module exposes the formatter to the browser chat page. Documents are
//! handed to JavaScript as plain objects.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::chat::{Message, VisionResponse};
#[cfg(feature = "wasm")]
use crate::FormatOptions;

/// Result wrapper returned to JavaScript
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct FormatResult<T> {
    /// The formatted value, absent on failure
    pub output: Option<T>,
    /// Whether formatting succeeded
    pub success: bool,
    /// Error message if something failed
    pub error: Option<String>,
    /// Degraded constructs, as human-readable strings
    pub warnings: Vec<String>,
}

/// Safely serialize a value to JsValue, returning an error object on failure.
#[cfg(feature = "wasm")]
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj: FormatResult<()> = FormatResult {
            output: None,
            success: false,
            error: Some(format!("Serialization error: {}", e)),
            warnings: vec![],
        };
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Translate a LaTeX math fragment to Unicode text
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "translateMath")]
pub fn translate_math_wasm(input: &str) -> String {
    crate::translate_math(input)
}

/// Format a model answer into a document object
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatResponse")]
pub fn format_response_wasm(input: &str) -> JsValue {
    to_js_value(&crate::format_response(input))
}

/// Format with options; returns a `FormatResult` carrying loss warnings.
///
/// Unknown or missing option fields fall back to their defaults.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatResponseWithOptions")]
pub fn format_response_with_options_wasm(input: &str, options: JsValue) -> JsValue {
    let opts: FormatOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let formatted = crate::format_response_with_report(input, &opts);
    let warnings = formatted
        .report
        .losses
        .iter()
        .map(|loss| match &loss.name {
            Some(name) => format!("{:?}: \\{}", loss.kind, name),
            None => format!("{:?}", loss.kind),
        })
        .collect();
    to_js_value(&FormatResult {
        output: Some(formatted.document),
        success: true,
        error: None,
        warnings,
    })
}

/// Turn a raw vision API body into the chat message to display
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parseVisionResponse")]
pub fn parse_vision_response_wasm(body: &str) -> JsValue {
    let answer = VisionResponse::from_json(body).and_then(VisionResponse::into_answer);
    let message = Message::from_vision_result(answer, &FormatOptions::default());
    to_js_value(&message)
}
