//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the catalog browser:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - Event bus system
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the catalog and the service
//! facade depend on. It fixes the logging conventions, the configuration
//! defaults (page size, theme preference) and the event channel used to
//! observe a browsing session.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use error::{Error, Result};
