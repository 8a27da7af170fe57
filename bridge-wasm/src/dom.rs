//! DOM-backed [`CatalogPresenter`].
//!
//! Elements are located through `data-*` attributes so the page markup can
//! change freely as long as the attributes stay in place. Text is always set
//! through `textContent`; record data never reaches `innerHTML`.

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::presentation::{
    BookDetail, CatalogPresenter, LoadMoreState, OverlayKind, PreviewItem, SelectKind,
    SelectOption,
};
use bridge_traits::theme::{Theme, ThemePalette};
use tracing::trace;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, DocumentFragment, Element, HtmlButtonElement, HtmlDialogElement, HtmlElement,
    HtmlImageElement, HtmlOptionElement, HtmlSelectElement,
};

use crate::error::{WasmError, WasmResult};

/// Attribute selectors the presenter relies on.
pub mod selectors {
    /// Container of preview buttons
    pub const LIST_ITEMS: &str = "[data-list-items]";
    /// "Show more" button
    pub const LIST_BUTTON: &str = "[data-list-button]";
    /// "No results" message
    pub const LIST_MESSAGE: &str = "[data-list-message]";
    /// Detail dialog
    pub const LIST_ACTIVE: &str = "[data-list-active]";
    /// Blurred detail backdrop image
    pub const LIST_BLUR: &str = "[data-list-blur]";
    /// Detail cover image
    pub const LIST_IMAGE: &str = "[data-list-image]";
    /// Detail title
    pub const LIST_TITLE: &str = "[data-list-title]";
    /// Detail subtitle
    pub const LIST_SUBTITLE: &str = "[data-list-subtitle]";
    /// Detail description
    pub const LIST_DESCRIPTION: &str = "[data-list-description]";
    /// Author dropdown
    pub const SEARCH_AUTHORS: &str = "[data-search-authors]";
    /// Genre dropdown
    pub const SEARCH_GENRES: &str = "[data-search-genres]";
    /// Search dialog
    pub const SEARCH_OVERLAY: &str = "[data-search-overlay]";
    /// Settings dialog
    pub const SETTINGS_OVERLAY: &str = "[data-settings-overlay]";
    /// Theme dropdown of the settings form
    pub const SETTINGS_THEME: &str = "[data-settings-theme]";
}

/// Attribute carrying the book id on each preview button.
pub const PREVIEW_ID_ATTRIBUTE: &str = "data-preview";

/// Class toggled on the "no results" message.
pub const MESSAGE_SHOW_CLASS: &str = "list__message_show";

/// Renders the catalog into the current document.
#[derive(Debug, Clone)]
pub struct DomPresenter {
    document: Document,
}

impl DomPresenter {
    /// Presenter bound to `window.document`.
    pub fn new() -> WasmResult<Self> {
        let document = web_sys::window()
            .ok_or_else(|| WasmError::NotAvailable("window".into()))?
            .document()
            .ok_or_else(|| WasmError::NotAvailable("document".into()))?;
        Ok(Self::from_document(document))
    }

    /// Presenter bound to an explicit document.
    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    fn query(&self, selector: &str) -> WasmResult<Element> {
        self.document
            .query_selector(selector)?
            .ok_or_else(|| WasmError::ElementNotFound(selector.to_string()))
    }

    fn query_as<T: JsCast>(&self, selector: &str, expected: &'static str) -> WasmResult<T> {
        self.query(selector)?
            .dyn_into::<T>()
            .map_err(|_| WasmError::UnexpectedElement {
                selector: selector.to_string(),
                expected,
            })
    }

    fn create(&self, tag: &str, class: &str) -> WasmResult<Element> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }

    fn preview_button(&self, item: &PreviewItem) -> WasmResult<Element> {
        let button = self.create("button", "preview")?;
        button.set_attribute(PREVIEW_ID_ATTRIBUTE, &item.id)?;

        let image = self
            .create("img", "preview__image")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| WasmError::JavaScript("img is not an HtmlImageElement".into()))?;
        image.set_src(&item.image);

        let info = self.create("div", "preview__info")?;
        let title = self.create("h3", "preview__title")?;
        title.set_text_content(Some(&item.title));
        let author = self.create("div", "preview__author")?;
        author.set_text_content(Some(&item.author_name));

        info.append_child(&title)?;
        info.append_child(&author)?;
        button.append_child(&image)?;
        button.append_child(&info)?;
        Ok(button)
    }

    fn preview_fragment(&self, items: &[PreviewItem]) -> WasmResult<DocumentFragment> {
        let fragment = self.document.create_document_fragment();
        for item in items {
            fragment.append_child(&self.preview_button(item)?)?;
        }
        Ok(fragment)
    }

    fn set_text(&self, selector: &str, text: &str) -> WasmResult<()> {
        self.query(selector)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_image(&self, selector: &str, src: &str) -> WasmResult<()> {
        self.query_as::<HtmlImageElement>(selector, "HtmlImageElement")?
            .set_src(src);
        Ok(())
    }
}

fn overlay_selector(overlay: OverlayKind) -> &'static str {
    match overlay {
        OverlayKind::Search => selectors::SEARCH_OVERLAY,
        OverlayKind::Settings => selectors::SETTINGS_OVERLAY,
        OverlayKind::BookDetail => selectors::LIST_ACTIVE,
    }
}

fn select_selector(kind: SelectKind) -> &'static str {
    match kind {
        SelectKind::Authors => selectors::SEARCH_AUTHORS,
        SelectKind::Genres => selectors::SEARCH_GENRES,
    }
}

/// Book id of the preview containing `target`, if any.
///
/// Used by click handlers delegated on the list container.
pub fn preview_id_for(target: &Element) -> Option<String> {
    target
        .closest(&format!("[{}]", PREVIEW_ID_ATTRIBUTE))
        .ok()
        .flatten()
        .and_then(|preview| preview.get_attribute(PREVIEW_ID_ATTRIBUTE))
}

impl CatalogPresenter for DomPresenter {
    fn replace_items(&self, items: &[PreviewItem]) -> BridgeResult<()> {
        let list = self.query(selectors::LIST_ITEMS)?;
        list.set_inner_html("");
        list.append_child(&self.preview_fragment(items)?)
            .map_err(WasmError::from)?;

        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        trace!(count = items.len(), "Preview list replaced");
        Ok(())
    }

    fn append_items(&self, items: &[PreviewItem]) -> BridgeResult<()> {
        let list = self.query(selectors::LIST_ITEMS)?;
        list.append_child(&self.preview_fragment(items)?)
            .map_err(WasmError::from)?;
        trace!(count = items.len(), "Previews appended");
        Ok(())
    }

    fn update_load_more(&self, state: LoadMoreState) -> BridgeResult<()> {
        let button = self.query_as::<HtmlButtonElement>(selectors::LIST_BUTTON, "HtmlButtonElement")?;
        button.set_disabled(!state.enabled);
        button.set_inner_html(&format!(
            "<span>Show more</span><span class=\"list__remaining\">{}</span>",
            state.remaining_label()
        ));
        Ok(())
    }

    fn set_empty_message_visible(&self, visible: bool) -> BridgeResult<()> {
        self.query(selectors::LIST_MESSAGE)?
            .class_list()
            .toggle_with_force(MESSAGE_SHOW_CLASS, visible)
            .map_err(WasmError::from)?;
        Ok(())
    }

    fn populate_select(&self, kind: SelectKind, options: &[SelectOption]) -> BridgeResult<()> {
        let select = self.query(select_selector(kind))?;
        let fragment = self.document.create_document_fragment();

        for option in options {
            let element = self
                .document
                .create_element("option")
                .map_err(WasmError::from)?
                .dyn_into::<HtmlOptionElement>()
                .map_err(|_| WasmError::JavaScript("option is not an HtmlOptionElement".into()))?;
            element.set_value(&option.value);
            element.set_text(&option.label);
            fragment.append_child(&element).map_err(WasmError::from)?;
        }

        select.set_inner_html("");
        select.append_child(&fragment).map_err(WasmError::from)?;
        Ok(())
    }

    fn show_book_detail(&self, detail: &BookDetail) -> BridgeResult<()> {
        self.set_image(selectors::LIST_BLUR, &detail.image)?;
        self.set_image(selectors::LIST_IMAGE, &detail.image)?;
        self.set_text(selectors::LIST_TITLE, &detail.title)?;
        self.set_text(selectors::LIST_SUBTITLE, &detail.subtitle)?;
        self.set_text(selectors::LIST_DESCRIPTION, &detail.description)?;
        Ok(())
    }

    fn set_overlay_open(&self, overlay: OverlayKind, open: bool) -> BridgeResult<()> {
        self.query_as::<HtmlDialogElement>(overlay_selector(overlay), "HtmlDialogElement")?
            .set_open(open);
        Ok(())
    }

    fn apply_theme(&self, theme: Theme, palette: &ThemePalette) -> BridgeResult<()> {
        // The settings dropdown is optional markup
        if let Ok(select) =
            self.query_as::<HtmlSelectElement>(selectors::SETTINGS_THEME, "HtmlSelectElement")
        {
            select.set_value(theme.as_str());
        }

        let root = self
            .document
            .document_element()
            .ok_or_else(|| WasmError::ElementNotFound("documentElement".into()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WasmError::UnexpectedElement {
                selector: "documentElement".into(),
                expected: "HtmlElement",
            })?;

        let style = root.style();
        for (name, value) in palette.css_variables() {
            style.set_property(name, value).map_err(WasmError::from)?;
        }
        Ok(())
    }
}
