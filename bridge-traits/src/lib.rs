//! # Host Bridge Traits
//!
//! Contracts between the catalog core and the host that displays it.
//!
//! ## Overview
//!
//! The core owns the filtering and pagination decisions. Everything that
//! touches a concrete UI (DOM elements, overlays, CSS variables) or a concrete
//! log destination is behind a trait defined here, so the core can be driven
//! and tested without a browser.
//!
//! ## Traits
//!
//! - [`CatalogPresenter`](presentation::CatalogPresenter) - Renders preview
//!   slices, the "show more" control, dropdowns, overlays and the theme
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Web      | `bridge-wasm`       | ✅ |
//! | Desktop  | in-process test presenters | ✅ |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Host
//! implementations should convert platform errors (missing elements, rejected
//! JS calls) into `BridgeError` with the element or operation named.
//!
//! ## Thread Safety
//!
//! On native targets bridge traits require `Send + Sync` through
//! [`PlatformSendSync`](platform::PlatformSendSync); on `wasm32` the bound
//! disappears because browser handles are single-threaded.

pub mod error;
pub mod logging;
pub mod platform;
pub mod presentation;
pub mod theme;

pub use error::BridgeError;

// Re-export commonly used types
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use presentation::{
    BookDetail, CatalogPresenter, LoadMoreState, OverlayKind, PreviewItem, SelectKind,
    SelectOption, ANY_OPTION_VALUE,
};
pub use theme::{Theme, ThemePalette};
