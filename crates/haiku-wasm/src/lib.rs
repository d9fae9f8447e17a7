// WASM bindings for haiku validation.
//
// Exposes the haiku validator to JavaScript hosts (editor plugins, save
// hooks). Verdicts are serialized to plain JS objects using
// serde-wasm-bindgen. The bindings only classify; acting on a failed
// verdict (blocking a save, showing a notice) and escaping the embedded
// line text for display are the host's responsibility.
//
// Usage from JavaScript:
//
//   validate("An old silent pond\n...");  // => { valid: true }
//   validate("Hello\nWorld\nFoo");
//   // => { valid: false, errorCode: "syllable_count", lineIndex: 0,
//   //      expected: 5, actual: 2, line: "Hello", message: "Line 1 ..." }
//   syllables("An old silent pond");      // => 5
//   plainText("<p>An old silent pond</p>"); // => "An old silent pond"

use serde::Serialize;
use wasm_bindgen::prelude::*;

use haiku_core::verdict::{HaikuError, Verdict};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a validation verdict.
///
/// `valid: true` comes with no other fields; a failure carries the reason
/// tag plus whatever payload the reason has.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsVerdict {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn verdict_to_js(verdict: Verdict) -> JsVerdict {
    match verdict {
        Ok(()) => JsVerdict {
            valid: true,
            error_code: None,
            line_index: None,
            expected: None,
            actual: None,
            line: None,
            message: None,
        },
        Err(err) => {
            let message = err.to_string();
            let code = err.code();
            match err {
                HaikuError::LineCount => JsVerdict {
                    valid: false,
                    error_code: Some(code),
                    line_index: None,
                    expected: None,
                    actual: None,
                    line: None,
                    message: Some(message),
                },
                HaikuError::SyllableCount {
                    line_index,
                    expected,
                    actual,
                    line,
                } => JsVerdict {
                    valid: false,
                    error_code: Some(code),
                    line_index: Some(line_index),
                    expected: Some(expected),
                    actual: Some(actual),
                    line: Some(line),
                    message: Some(message),
                },
            }
        }
    }
}

// ============================================================================
// Exported functions
// ============================================================================

/// Validate the 5-7-5 haiku structure of a plain-text block.
///
/// Returns a JS object: `{ valid: true }`, or `{ valid: false, errorCode,
/// ... }` with the payload fields of the failure reason and a ready-made
/// `message` string.
#[wasm_bindgen]
pub fn validate(text: &str) -> Result<JsValue, JsError> {
    let verdict = verdict_to_js(haiku_en::validator::validate_haiku(text));
    serde_wasm_bindgen::to_value(&verdict).map_err(|e| JsError::new(&e.to_string()))
}

/// Estimate the syllable count of a single line. Always at least 1.
#[wasm_bindgen]
pub fn syllables(line: &str) -> u32 {
    haiku_en::syllable::estimate_syllables(line) as u32
}

/// Flatten block markup to the plain text the validator consumes.
#[wasm_bindgen(js_name = "plainText")]
pub fn plain_text(markup: &str) -> String {
    haiku_en::markup::plain_text(markup)
}
