//! WebAssembly Bridge Implementations
//!
//! Browser implementations of the traits defined in `bridge-traits`, built on
//! `web-sys` and `wasm-bindgen`.
//!
//! # Platform Support
//!
//! This crate is designed exclusively for the `wasm32-unknown-unknown` target.
//! It compiles to an empty crate elsewhere.
//!
//! # Implementations
//!
//! - `DomPresenter`: renders previews, dialogs, dropdowns and the theme
//!   through `data-*` attributes of the page
//! - `ConsoleLoggerSink`: mirrors `tracing` output to the browser console
//! - `prefers_dark`: system color-scheme detection
//!
//! # Examples
//!
//! ```ignore
//! use bridge_wasm::{build_wasm_bridges, WasmBridgeConfig};
//!
//! let bridges = build_wasm_bridges(WasmBridgeConfig::default())?;
//! let theme = bridge_traits::theme::Theme::from_preference(bridges.prefers_dark);
//! ```

#![cfg(target_arch = "wasm32")]
#![warn(missing_docs)]

pub mod bootstrap;
pub mod console;
pub mod dom;
pub mod error;

// Re-export commonly used types
pub use bootstrap::{build_wasm_bridges, prefers_dark, WasmBridgeConfig, WasmBridgeSet};
pub use console::ConsoleLoggerSink;
pub use dom::{preview_id_for, DomPresenter};
pub use error::{WasmError, WasmResult};
