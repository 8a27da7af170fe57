//! WebAssembly bindings for the catalog service
//!
//! The page script constructs one `CatalogApp` and forwards its UI events
//! (form submits, clicks) to it.

use crate::{bootstrap_wasm, CoreError, CoreService, WasmBridgeConfig};
use bridge_traits::presentation::OverlayKind;
use bridge_traits::theme::Theme;
use bridge_wasm::DomPresenter;
use core_catalog::FilterSpec;
use core_runtime::config::CoreConfig;
use wasm_bindgen::prelude::*;

fn js_error(err: CoreError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JavaScript-accessible catalog session bound to the page DOM
#[wasm_bindgen]
pub struct CatalogApp {
    service: CoreService<DomPresenter>,
}

#[wasm_bindgen]
impl CatalogApp {
    /// Load `datasetJson` and render the first page.
    ///
    /// `pageSize` defaults to 36 when omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(dataset_json: &str, page_size: Option<usize>) -> Result<CatalogApp, JsValue> {
        let mut builder = CoreConfig::builder();
        if let Some(page_size) = page_size {
            builder = builder.page_size(page_size);
        }
        let config = builder.build().map_err(|e| js_error(e.into()))?;

        let service = bootstrap_wasm(WasmBridgeConfig::default(), config, dataset_json)
            .map_err(js_error)?;
        Ok(CatalogApp { service })
    }

    /// Apply the search form; returns the number of matches.
    #[wasm_bindgen(js_name = submitSearch)]
    pub fn submit_search(&mut self, title: &str, author: &str, genre: &str) -> Result<usize, JsValue> {
        let filter = FilterSpec::from_form([("title", title), ("author", author), ("genre", genre)]);
        self.service
            .browser_mut()
            .submit_search(filter)
            .map_err(|e| js_error(e.into()))
    }

    /// Reveal the next page; `false` once everything is shown.
    #[wasm_bindgen(js_name = loadMore)]
    pub fn load_more(&mut self) -> Result<bool, JsValue> {
        self.service
            .browser_mut()
            .load_more()
            .map_err(|e| js_error(e.into()))
    }

    /// Show the detail dialog; returns the rendered detail or `null` when the
    /// dialog is disabled.
    #[wasm_bindgen(js_name = openBook)]
    pub fn open_book(&mut self, id: &str) -> Result<JsValue, JsValue> {
        let detail = self
            .service
            .browser_mut()
            .open_book(id)
            .map_err(|e| js_error(e.into()))?;

        match detail {
            Some(detail) => serde_wasm_bindgen::to_value(&detail).map_err(JsValue::from),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(js_name = closeBook)]
    pub fn close_book(&mut self) -> Result<(), JsValue> {
        self.service
            .browser_mut()
            .close_book()
            .map_err(|e| js_error(e.into()))
    }

    /// Apply the settings form value; unknown values fall back to day.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, value: &str) -> Result<(), JsValue> {
        self.service
            .browser_mut()
            .apply_theme(Theme::from_form_value(value))
            .map_err(|e| js_error(e.into()))
    }

    #[wasm_bindgen(js_name = openSearch)]
    pub fn open_search(&self) -> Result<(), JsValue> {
        self.set_overlay(OverlayKind::Search, true)
    }

    #[wasm_bindgen(js_name = closeSearch)]
    pub fn close_search(&self) -> Result<(), JsValue> {
        self.set_overlay(OverlayKind::Search, false)
    }

    #[wasm_bindgen(js_name = openSettings)]
    pub fn open_settings(&self) -> Result<(), JsValue> {
        self.set_overlay(OverlayKind::Settings, true)
    }

    #[wasm_bindgen(js_name = closeSettings)]
    pub fn close_settings(&self) -> Result<(), JsValue> {
        self.set_overlay(OverlayKind::Settings, false)
    }

    #[wasm_bindgen(js_name = remainingCount)]
    pub fn remaining_count(&self) -> usize {
        self.service.browser().remaining_count()
    }

    #[wasm_bindgen(js_name = hasMore)]
    pub fn has_more(&self) -> bool {
        self.service.browser().has_more()
    }

    /// Book id of the preview containing a clicked element.
    #[wasm_bindgen(js_name = previewIdFor)]
    pub fn preview_id_for(target: &web_sys::Element) -> Option<String> {
        bridge_wasm::preview_id_for(target)
    }

    fn set_overlay(&self, overlay: OverlayKind, open: bool) -> Result<(), JsValue> {
        self.service
            .browser()
            .set_overlay_open(overlay, open)
            .map_err(|e| js_error(e.into()))
    }
}
