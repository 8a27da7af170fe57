//! Error types for WebAssembly bridge implementations

use thiserror::Error;
use wasm_bindgen::JsCast;

/// Result type for WebAssembly bridge operations
pub type WasmResult<T> = Result<T, WasmError>;

/// Errors that can occur in WebAssembly bridge implementations
#[derive(Error, Debug)]
pub enum WasmError {
    /// JavaScript error from web-sys
    #[error("JavaScript error: {0}")]
    JavaScript(String),

    /// No element matched a selector
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// An element exists but has the wrong type
    #[error("Element {selector} is not a {expected}")]
    UnexpectedElement {
        /// Selector used for the lookup
        selector: String,
        /// Expected DOM interface
        expected: &'static str,
    },

    /// A browser global is missing (`window`, `document`)
    #[error("Browser API not available: {0}")]
    NotAvailable(String),
}

impl From<WasmError> for bridge_traits::error::BridgeError {
    fn from(err: WasmError) -> Self {
        use bridge_traits::error::BridgeError;

        match err {
            WasmError::ElementNotFound(selector) => BridgeError::ElementNotFound(selector),
            WasmError::NotAvailable(api) => BridgeError::NotAvailable(api),
            other => BridgeError::OperationFailed(other.to_string()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for WasmError {
    fn from(js_value: wasm_bindgen::JsValue) -> Self {
        let msg = if js_value.is_string() {
            js_value
                .as_string()
                .unwrap_or_else(|| "Unknown error".to_string())
        } else if let Some(error) = js_value.dyn_ref::<js_sys::Error>() {
            error.message().into()
        } else {
            format!("{:?}", js_value)
        };
        WasmError::JavaScript(msg)
    }
}
