//! Core service façade and bootstrap helpers.
//!
//! This crate wires a host presenter and logger sink into the catalog core.
//! Native hosts and tests construct [`CoreDependencies`] by hand, whereas
//! WebAssembly builds enable the `wasm` feature and rely on the adapters from
//! `bridge-wasm` through the `CatalogApp` JavaScript class.

pub mod error;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm;

pub use error::{CoreError, Result};

use std::sync::Arc;

use bridge_traits::logging::LoggerSink;
use bridge_traits::presentation::CatalogPresenter;
use core_catalog::{CatalogBrowser, RecordStore};
use core_runtime::config::CoreConfig;
use core_runtime::logging::init_logging;
use core_runtime::Error as RuntimeError;
use tracing::{debug, info};

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use bridge_wasm::WasmBridgeConfig;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
use bridge_wasm::{DomPresenter, WasmBridgeSet};

/// Aggregated handle to the host bridges the core requires.
pub struct CoreDependencies<P: CatalogPresenter> {
    pub presenter: P,
    pub logger_sink: Option<Arc<dyn LoggerSink>>,
    /// Host color-scheme preference, used when no theme is configured
    pub prefers_dark: bool,
}

impl<P: CatalogPresenter> CoreDependencies<P> {
    /// Construct a dependency bundle around a presenter.
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            logger_sink: None,
            prefers_dark: false,
        }
    }

    pub fn with_logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    pub fn with_dark_preference(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }
}

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
impl From<WasmBridgeSet> for CoreDependencies<DomPresenter> {
    fn from(set: WasmBridgeSet) -> Self {
        Self {
            presenter: set.presenter,
            logger_sink: Some(set.logger),
            prefers_dark: set.prefers_dark,
        }
    }
}

/// Primary façade exposed to host applications.
pub struct CoreService<P: CatalogPresenter> {
    config: CoreConfig,
    browser: CatalogBrowser<P>,
}

impl<P: CatalogPresenter> CoreService<P> {
    /// Create a service over an already loaded store and render the first
    /// page.
    ///
    /// Logging is left untouched; see [`CoreService::bootstrap`].
    pub fn new(config: CoreConfig, store: Arc<RecordStore>, deps: CoreDependencies<P>) -> Result<Self> {
        config.validate()?;

        let theme = config.initial_theme(deps.prefers_dark);
        let mut browser = CatalogBrowser::from_config(store, deps.presenter, &config)?;
        browser.initialize(theme)?;

        Ok(Self { config, browser })
    }

    /// Validate `config`, install logging, parse `dataset_json` and render the
    /// first page.
    ///
    /// ```
    /// # use bridge_traits::error::Result as BridgeResult;
    /// # use bridge_traits::presentation::*;
    /// # use bridge_traits::theme::{Theme, ThemePalette};
    /// # struct Headless;
    /// # impl CatalogPresenter for Headless {
    /// #     fn replace_items(&self, _: &[PreviewItem]) -> BridgeResult<()> { Ok(()) }
    /// #     fn append_items(&self, _: &[PreviewItem]) -> BridgeResult<()> { Ok(()) }
    /// #     fn update_load_more(&self, _: LoadMoreState) -> BridgeResult<()> { Ok(()) }
    /// #     fn set_empty_message_visible(&self, _: bool) -> BridgeResult<()> { Ok(()) }
    /// #     fn populate_select(&self, _: SelectKind, _: &[SelectOption]) -> BridgeResult<()> { Ok(()) }
    /// #     fn show_book_detail(&self, _: &BookDetail) -> BridgeResult<()> { Ok(()) }
    /// #     fn set_overlay_open(&self, _: OverlayKind, _: bool) -> BridgeResult<()> { Ok(()) }
    /// #     fn apply_theme(&self, _: Theme, _: &ThemePalette) -> BridgeResult<()> { Ok(()) }
    /// # }
    /// # fn main() -> core_service::Result<()> {
    /// use core_runtime::config::CoreConfig;
    /// use core_service::{CoreDependencies, CoreService};
    ///
    /// let config = CoreConfig::builder().page_size(12).build()?;
    /// let service = CoreService::bootstrap(
    ///     config,
    ///     r#"{"books": [], "authors": {}, "genres": {}}"#,
    ///     CoreDependencies::new(Headless),
    /// )?;
    /// assert_eq!(service.browser().result_len(), 0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn bootstrap(
        config: CoreConfig,
        dataset_json: &str,
        deps: CoreDependencies<P>,
    ) -> Result<Self> {
        config.validate()?;
        install_logging(&config, deps.logger_sink.clone())?;

        let store = RecordStore::from_json(dataset_json)?;
        info!(
            books = store.len(),
            authors = store.authors().len(),
            genres = store.genres().len(),
            "Dataset loaded"
        );

        Self::new(config, Arc::new(store), deps)
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn browser(&self) -> &CatalogBrowser<P> {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut CatalogBrowser<P> {
        &mut self.browser
    }

    pub fn into_browser(self) -> CatalogBrowser<P> {
        self.browser
    }
}

/// Installs the global `tracing` subscriber unless one is already set.
///
/// A sink configured in `config.logging` wins over `host_sink`. Returns
/// whether a subscriber was installed by this call.
pub fn install_logging(config: &CoreConfig, host_sink: Option<Arc<dyn LoggerSink>>) -> Result<bool> {
    let mut logging = config.logging.clone();
    if logging.logger_sink.is_none() {
        if let Some(sink) = host_sink {
            logging = logging.with_logger_sink(sink);
        }
    }

    match init_logging(logging) {
        Ok(()) => Ok(true),
        Err(RuntimeError::LoggingInstalled(reason)) => {
            debug!(%reason, "Keeping existing global subscriber");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

/// Convenience bootstrapper for WebAssembly hosts.
///
/// Builds the browser bridges, then runs [`CoreService::bootstrap`] against
/// the page's DOM.
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub fn bootstrap_wasm(
    bridge_config: WasmBridgeConfig,
    config: CoreConfig,
    dataset_json: &str,
) -> Result<CoreService<DomPresenter>> {
    let bridges = bridge_wasm::build_wasm_bridges(bridge_config)
        .map_err(bridge_traits::BridgeError::from)?;
    CoreService::bootstrap(config, dataset_json, CoreDependencies::from(bridges))
}
