// Error type shared by the simulation core and the browser glue.
// Converted to JsValue only at the wasm-bindgen boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("canvas has no 2d rendering context")]
    NoContext,
    #[error("invalid field configuration: {0}")]
    InvalidConfig(String),
    #[error("frame driver is already running")]
    AlreadyRunning,
    #[error("frame driver was stopped and cannot be restarted")]
    Stopped,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        FieldError::Js(message)
    }
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for FieldError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        FieldError::InvalidConfig(err.to_string())
    }
}
