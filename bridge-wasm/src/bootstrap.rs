//! Convenience helpers for wiring the browser bridges together.
//!
//! Host shells call [`build_wasm_bridges`] once at startup and hand the
//! presenter and logger sink to `core-service`.

use std::sync::Arc;

use bridge_traits::logging::{LogLevel, LoggerSink};

use crate::console::ConsoleLoggerSink;
use crate::dom::DomPresenter;
use crate::error::WasmResult;

/// Media query matched when the user prefers a dark color scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Configuration for [`build_wasm_bridges`].
#[derive(Debug, Clone)]
pub struct WasmBridgeConfig {
    /// Lowest level forwarded to the browser console.
    pub min_log_level: LogLevel,
    /// Route Rust panics to `console.error`.
    pub install_panic_hook: bool,
}

impl WasmBridgeConfig {
    /// Override the console log level.
    pub fn with_min_log_level(mut self, level: LogLevel) -> Self {
        self.min_log_level = level;
        self
    }
}

impl Default for WasmBridgeConfig {
    fn default() -> Self {
        Self {
            min_log_level: LogLevel::Info,
            install_panic_hook: true,
        }
    }
}

/// Browser bridge objects ready for injection into the core.
pub struct WasmBridgeSet {
    /// Presenter rendering into `window.document`.
    pub presenter: DomPresenter,
    /// Console sink for `tracing` output.
    pub logger: Arc<dyn LoggerSink>,
    /// Whether the system color scheme is dark at startup.
    pub prefers_dark: bool,
}

/// Build the default browser bridge stack.
pub fn build_wasm_bridges(config: WasmBridgeConfig) -> WasmResult<WasmBridgeSet> {
    if config.install_panic_hook {
        console_error_panic_hook::set_once();
    }

    Ok(WasmBridgeSet {
        presenter: DomPresenter::new()?,
        logger: Arc::new(ConsoleLoggerSink::new(config.min_log_level)),
        prefers_dark: prefers_dark(),
    })
}

/// Whether the browser reports a dark color-scheme preference.
///
/// Returns `false` when `matchMedia` is unavailable.
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
