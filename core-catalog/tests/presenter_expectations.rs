//! Call-level expectations on the presenter contract.

mod common;

use bridge_traits::error::{BridgeError, Result};
use bridge_traits::presentation::{
    BookDetail, CatalogPresenter, LoadMoreState, OverlayKind, PreviewItem, SelectKind,
    SelectOption,
};
use bridge_traits::theme::{Theme, ThemePalette};
use common::three_books;
use core_catalog::{CatalogBrowser, CatalogError, FilterSpec};
use mockall::predicate::eq;
use mockall::{mock, Sequence};

mock! {
    pub Presenter {}

    impl CatalogPresenter for Presenter {
        fn replace_items(&self, items: &[PreviewItem]) -> Result<()>;
        fn append_items(&self, items: &[PreviewItem]) -> Result<()>;
        fn update_load_more(&self, state: LoadMoreState) -> Result<()>;
        fn set_empty_message_visible(&self, visible: bool) -> Result<()>;
        fn populate_select(&self, kind: SelectKind, options: &[SelectOption]) -> Result<()>;
        fn show_book_detail(&self, detail: &BookDetail) -> Result<()>;
        fn set_overlay_open(&self, overlay: OverlayKind, open: bool) -> Result<()>;
        fn apply_theme(&self, theme: Theme, palette: &ThemePalette) -> Result<()>;
    }
}

#[test]
fn search_renders_before_closing_overlay() {
    let mut presenter = MockPresenter::new();
    let mut seq = Sequence::new();

    presenter
        .expect_replace_items()
        .withf(|items| items.len() == 1 && items[0].title == "Foundation")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    presenter
        .expect_update_load_more()
        .with(eq(LoadMoreState::new(0)))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    presenter
        .expect_set_empty_message_visible()
        .with(eq(false))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    presenter
        .expect_set_overlay_open()
        .with(eq(OverlayKind::Search), eq(false))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));

    let mut browser = CatalogBrowser::new(three_books(), presenter, 2).unwrap();
    let matches = browser
        .submit_search(FilterSpec::any().with_author("a2"))
        .unwrap();

    assert_eq!(matches, 1);
}

#[test]
fn load_more_appends_only_new_records() {
    let mut presenter = MockPresenter::new();

    presenter
        .expect_append_items()
        .withf(|items| items.len() == 1 && items[0].id == "3")
        .times(1)
        .returning(|_| Ok(()));
    presenter
        .expect_update_load_more()
        .with(eq(LoadMoreState {
            remaining: 0,
            enabled: false,
        }))
        .times(1)
        .returning(|_| Ok(()));
    presenter.expect_replace_items().never();

    let mut browser = CatalogBrowser::new(three_books(), presenter, 2).unwrap();

    assert!(browser.load_more().unwrap());
    assert!(!browser.load_more().unwrap());
}

#[test]
fn initialize_populates_dropdowns_and_theme() {
    let mut presenter = MockPresenter::new();

    presenter
        .expect_populate_select()
        .withf(|kind, options| {
            *kind == SelectKind::Authors
                && options.len() == 3
                && options[0] == SelectOption::any(SelectKind::Authors)
        })
        .times(1)
        .returning(|_, _| Ok(()));
    presenter
        .expect_populate_select()
        .withf(|kind, options| *kind == SelectKind::Genres && options.len() == 3)
        .times(1)
        .returning(|_, _| Ok(()));
    presenter
        .expect_apply_theme()
        .withf(|theme, palette| *theme == Theme::Day && palette.color_dark == "10, 10, 20")
        .times(1)
        .returning(|_, _| Ok(()));
    presenter
        .expect_replace_items()
        .withf(|items| items.len() == 2)
        .times(1)
        .returning(|_| Ok(()));
    presenter
        .expect_update_load_more()
        .returning(|_| Ok(()));
    presenter
        .expect_set_empty_message_visible()
        .with(eq(false))
        .returning(|_| Ok(()));

    let mut browser = CatalogBrowser::new(three_books(), presenter, 2).unwrap();
    browser.initialize(Theme::Day).unwrap();
}

#[test]
fn detail_failure_is_reported_as_bridge_error() {
    let mut presenter = MockPresenter::new();

    presenter
        .expect_show_book_detail()
        .withf(|detail| detail.subtitle == "Frank Herbert (1965)")
        .times(1)
        .returning(|_| Err(BridgeError::ElementNotFound("[data-list-active]".to_string())));
    presenter.expect_set_overlay_open().never();

    let mut browser = CatalogBrowser::new(three_books(), presenter, 2).unwrap();

    let result = browser.open_book("1");
    assert!(matches!(
        result,
        Err(CatalogError::Bridge(BridgeError::ElementNotFound(_)))
    ));
}
