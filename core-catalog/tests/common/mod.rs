//! Shared fixtures for catalog integration tests.

#![allow(dead_code)]

use bridge_traits::error::Result;
use bridge_traits::presentation::{
    BookDetail, CatalogPresenter, LoadMoreState, OverlayKind, PreviewItem, SelectKind,
    SelectOption,
};
use bridge_traits::theme::{Theme, ThemePalette};
use core_catalog::RecordStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const THREE_BOOKS: &str = r#"{
    "books": [
        {"id": "1", "title": "Dune", "author": "a1", "genres": ["g1"],
         "image": "dune.jpg", "description": "Arrakis.", "published": "1965-08-01T00:00:00.000Z"},
        {"id": "2", "title": "Dune Messiah", "author": "a1", "genres": ["g1"],
         "image": "messiah.jpg", "description": "Twelve years later.", "published": "1969-01-01T00:00:00.000Z"},
        {"id": "3", "title": "Foundation", "author": "a2", "genres": ["g2"],
         "image": "foundation.jpg", "description": "Psychohistory.", "published": "1951-06-01T00:00:00.000Z"}
    ],
    "authors": {"a1": "Frank Herbert", "a2": "Isaac Asimov"},
    "genres": {"g1": "Science Fiction", "g2": "Classics"}
}"#;

pub fn three_books() -> Arc<RecordStore> {
    Arc::new(RecordStore::from_json(THREE_BOOKS).unwrap())
}

/// Store of `count` books titled `Book 0..count`, alternating two authors and
/// two genres.
pub fn generated_store(count: usize) -> Arc<RecordStore> {
    let books: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{"id": "b{i}", "title": "Book {i}", "author": "a{}", "genres": ["g{}"], "image": "", "published": "2000-01-01T00:00:00Z"}}"#,
                i % 2,
                i % 3 % 2
            )
        })
        .collect();
    let json = format!(
        r#"{{"books": [{}], "authors": {{"a0": "Even", "a1": "Odd"}}, "genres": {{"g0": "Zero", "g1": "One"}}}}"#,
        books.join(",")
    );
    Arc::new(RecordStore::from_json(&json).unwrap())
}

/// Presenter keeping the rendered state the way a page would.
#[derive(Default)]
pub struct RecordingPresenter {
    pub items: Mutex<Vec<PreviewItem>>,
    pub appended: Mutex<Vec<Vec<PreviewItem>>>,
    pub load_more: Mutex<Option<LoadMoreState>>,
    pub empty_visible: Mutex<bool>,
    pub selects: Mutex<HashMap<SelectKind, Vec<SelectOption>>>,
    pub detail: Mutex<Option<BookDetail>>,
    pub overlays: Mutex<HashMap<OverlayKind, bool>>,
    pub theme: Mutex<Option<(Theme, ThemePalette)>>,
}

impl RecordingPresenter {
    pub fn titles(&self) -> Vec<String> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .map(|item| item.title.clone())
            .collect()
    }

    pub fn load_more(&self) -> LoadMoreState {
        self.load_more.lock().unwrap().expect("load more rendered")
    }

    pub fn overlay_open(&self, overlay: OverlayKind) -> Option<bool> {
        self.overlays.lock().unwrap().get(&overlay).copied()
    }
}

impl CatalogPresenter for RecordingPresenter {
    fn replace_items(&self, items: &[PreviewItem]) -> Result<()> {
        *self.items.lock().unwrap() = items.to_vec();
        self.appended.lock().unwrap().clear();
        Ok(())
    }

    fn append_items(&self, items: &[PreviewItem]) -> Result<()> {
        self.items.lock().unwrap().extend_from_slice(items);
        self.appended.lock().unwrap().push(items.to_vec());
        Ok(())
    }

    fn update_load_more(&self, state: LoadMoreState) -> Result<()> {
        *self.load_more.lock().unwrap() = Some(state);
        Ok(())
    }

    fn set_empty_message_visible(&self, visible: bool) -> Result<()> {
        *self.empty_visible.lock().unwrap() = visible;
        Ok(())
    }

    fn populate_select(&self, kind: SelectKind, options: &[SelectOption]) -> Result<()> {
        self.selects.lock().unwrap().insert(kind, options.to_vec());
        Ok(())
    }

    fn show_book_detail(&self, detail: &BookDetail) -> Result<()> {
        *self.detail.lock().unwrap() = Some(detail.clone());
        Ok(())
    }

    fn set_overlay_open(&self, overlay: OverlayKind, open: bool) -> Result<()> {
        self.overlays.lock().unwrap().insert(overlay, open);
        Ok(())
    }

    fn apply_theme(&self, theme: Theme, palette: &ThemePalette) -> Result<()> {
        *self.theme.lock().unwrap() = Some((theme, *palette));
        Ok(())
    }
}
