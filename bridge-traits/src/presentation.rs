//! Presentation Adapter contract
//!
//! The catalog core decides *what* is shown; a host presenter decides *how*.
//! Presenters receive display-ready view models and own every UI element they
//! create. The core never reads presentation state back: all decisions (which
//! slice to render, whether "show more" is enabled, what the remaining count
//! is) flow one way, from core to presenter.
//!
//! # Example
//!
//! ```
//! use bridge_traits::error::Result;
//! use bridge_traits::presentation::{
//!     BookDetail, CatalogPresenter, LoadMoreState, OverlayKind, PreviewItem, SelectKind,
//!     SelectOption,
//! };
//! use bridge_traits::theme::{Theme, ThemePalette};
//!
//! struct NullPresenter;
//!
//! impl CatalogPresenter for NullPresenter {
//!     fn replace_items(&self, _items: &[PreviewItem]) -> Result<()> { Ok(()) }
//!     fn append_items(&self, _items: &[PreviewItem]) -> Result<()> { Ok(()) }
//!     fn update_load_more(&self, _state: LoadMoreState) -> Result<()> { Ok(()) }
//!     fn set_empty_message_visible(&self, _visible: bool) -> Result<()> { Ok(()) }
//!     fn populate_select(&self, _kind: SelectKind, _options: &[SelectOption]) -> Result<()> { Ok(()) }
//!     fn show_book_detail(&self, _detail: &BookDetail) -> Result<()> { Ok(()) }
//!     fn set_overlay_open(&self, _overlay: OverlayKind, _open: bool) -> Result<()> { Ok(()) }
//!     fn apply_theme(&self, _theme: Theme, _palette: &ThemePalette) -> Result<()> { Ok(()) }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::PlatformSendSync;
use crate::theme::{Theme, ThemePalette};

/// Value carried by the "no constraint" option of every dropdown.
pub const ANY_OPTION_VALUE: &str = "any";

/// One book tile in the preview grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewItem {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub image: String,
}

/// Contents of the book detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub id: String,
    pub title: String,
    /// `"<author> (<year>)"`
    pub subtitle: String,
    pub description: String,
    /// Used for both the cover and the blurred backdrop.
    pub image: String,
}

/// State of the "show more" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadMoreState {
    /// Records not yet revealed; shown verbatim in the label.
    pub remaining: usize,
    pub enabled: bool,
}

impl LoadMoreState {
    pub fn new(remaining: usize) -> Self {
        Self {
            remaining,
            enabled: remaining > 0,
        }
    }

    /// Text for the remaining-count badge, e.g. `" (12)"`.
    pub fn remaining_label(&self) -> String {
        format!(" ({})", self.remaining)
    }
}

/// Dropdowns in the search overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectKind {
    Authors,
    Genres,
}

impl SelectKind {
    /// Label of the leading [`ANY_OPTION_VALUE`] option.
    pub fn any_label(&self) -> &'static str {
        match self {
            SelectKind::Authors => "All Authors",
            SelectKind::Genres => "All Genres",
        }
    }
}

/// A single `<option>` of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The leading "no constraint" option for `kind`.
    pub fn any(kind: SelectKind) -> Self {
        Self::new(ANY_OPTION_VALUE, kind.any_label())
    }
}

/// Overlays whose visibility the core requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayKind {
    Search,
    Settings,
    BookDetail,
}

/// Host-side renderer for the catalog grid and its controls.
///
/// Every method is called synchronously from within a single UI event
/// handler. Implementations must not call back into the core.
pub trait CatalogPresenter: PlatformSendSync {
    /// Replace the whole visible list (initial load, new search).
    fn replace_items(&self, items: &[PreviewItem]) -> Result<()>;

    /// Append to the visible list (after "show more").
    fn append_items(&self, items: &[PreviewItem]) -> Result<()>;

    /// Enable/disable "show more" and relabel it with the remaining count.
    fn update_load_more(&self, state: LoadMoreState) -> Result<()>;

    /// Toggle the "no results" message.
    fn set_empty_message_visible(&self, visible: bool) -> Result<()>;

    /// Fill a dropdown; `options[0]` is always the "any" option.
    fn populate_select(&self, kind: SelectKind, options: &[SelectOption]) -> Result<()>;

    /// Fill the detail overlay.
    fn show_book_detail(&self, detail: &BookDetail) -> Result<()>;

    /// Open or close an overlay.
    fn set_overlay_open(&self, overlay: OverlayKind, open: bool) -> Result<()>;

    /// Write the palette to the document and sync the settings control.
    fn apply_theme(&self, theme: Theme, palette: &ThemePalette) -> Result<()>;
}
