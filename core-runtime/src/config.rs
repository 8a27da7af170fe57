//! # Core Configuration Module
//!
//! Provides configuration management for the catalog browser.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! holding the settings every catalog session needs. Validation is fail-fast:
//! an invalid page size is rejected before any record is rendered.
//!
//! ## Usage
//!
//! ### Defaults
//!
//! ```
//! use core_runtime::config::{CoreConfig, DEFAULT_PAGE_SIZE};
//!
//! let config = CoreConfig::builder().build().expect("defaults are valid");
//! assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
//! assert!(config.preferred_theme.is_none());
//! ```
//!
//! ### Customized
//!
//! ```
//! use bridge_traits::theme::Theme;
//! use core_runtime::config::CoreConfig;
//! use core_runtime::logging::{LogFormat, LoggingConfig};
//!
//! let config = CoreConfig::builder()
//!     .page_size(24)
//!     .preferred_theme(Theme::Night)
//!     .logging(LoggingConfig::default().with_format(LogFormat::Compact))
//!     .enable_events(true)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.page_size, 24);
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::CoreConfig;
//!
//! // A zero page size could never reveal a record
//! let config = CoreConfig::builder()
//!     .page_size(0)
//!     .build()
//!     .expect("Should fail - page size must be positive");
//! ```

use crate::error::{Error, Result};
use crate::events::DEFAULT_EVENT_BUFFER_SIZE;
use crate::logging::LoggingConfig;
use bridge_traits::theme::Theme;

/// Number of previews revealed per "show more" step.
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Upper bound accepted for [`CoreConfig::page_size`].
pub const MAX_PAGE_SIZE: usize = 1000;

/// Core configuration for a catalog session.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Records revealed per page depth step
    pub page_size: usize,

    /// Theme forced by the host; `None` follows the system color scheme
    pub preferred_theme: Option<Theme>,

    /// Logging setup applied by the service bootstrap
    pub logging: LoggingConfig,

    /// Buffer size of the session event bus
    pub event_buffer_size: usize,

    /// Features flags
    pub features: FeatureFlags,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("page_size", &self.page_size)
            .field("preferred_theme", &self.preferred_theme)
            .field("log_format", &self.logging.format)
            .field("log_level", &self.logging.level)
            .field(
                "logger_sink",
                &self.logging.logger_sink.as_ref().map(|_| "LoggerSink { ... }"),
            )
            .field("event_buffer_size", &self.event_buffer_size)
            .field("features", &self.features)
            .finish()
    }
}

/// Feature flags control optional functionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Publish `CoreEvent`s for searches, paging and overlays
    pub enable_events: bool,

    /// Allow opening the book detail overlay
    pub enable_detail_overlay: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_events: false,
            enable_detail_overlay: true,
        }
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Page size is in `1..=MAX_PAGE_SIZE`
    /// - Event buffer is non-empty when events are enabled
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config(
                "Page size must be greater than 0".to_string(),
            ));
        }

        if self.page_size > MAX_PAGE_SIZE {
            return Err(Error::Config(format!(
                "Page size {} exceeds maximum of {}",
                self.page_size, MAX_PAGE_SIZE
            )));
        }

        if self.features.enable_events && self.event_buffer_size == 0 {
            return Err(Error::Config(
                "Events enabled but event buffer size is 0. \
                 Set a positive buffer size or disable events."
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Theme to apply at startup given the host's color-scheme preference.
    pub fn initial_theme(&self, prefers_dark: bool) -> Theme {
        self.preferred_theme
            .unwrap_or_else(|| Theme::from_preference(prefers_dark))
    }
}

/// Builder for constructing [`CoreConfig`] instances.
#[derive(Default)]
pub struct CoreConfigBuilder {
    page_size: Option<usize>,
    preferred_theme: Option<Theme>,
    logging: Option<LoggingConfig>,
    event_buffer_size: Option<usize>,
    features: FeatureFlags,
}

impl CoreConfigBuilder {
    /// Sets the number of records revealed per page.
    ///
    /// Default: [`DEFAULT_PAGE_SIZE`]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Forces a theme instead of following the system preference.
    pub fn preferred_theme(mut self, theme: Theme) -> Self {
        self.preferred_theme = Some(theme);
        self
    }

    /// Sets the logging configuration.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Sets the event bus buffer size.
    ///
    /// Default: [`DEFAULT_EVENT_BUFFER_SIZE`]
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    /// Enables or disables event publication.
    ///
    /// Default: false
    pub fn enable_events(mut self, enabled: bool) -> Self {
        self.features.enable_events = enabled;
        self
    }

    /// Enables or disables the book detail overlay.
    ///
    /// Default: true
    pub fn enable_detail_overlay(mut self, enabled: bool) -> Self {
        self.features.enable_detail_overlay = enabled;
        self
    }

    /// Sets all feature flags at once.
    pub fn features(mut self, features: FeatureFlags) -> Self {
        self.features = features;
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when validation fails.
    pub fn build(self) -> Result<CoreConfig> {
        let config = CoreConfig {
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            preferred_theme: self.preferred_theme,
            logging: self.logging.unwrap_or_default(),
            event_buffer_size: self.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE),
            features: self.features,
        };

        config.validate()?;

        Ok(config)
    }
}
