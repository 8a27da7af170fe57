//! # Catalog Browser Session
//!
//! [`CatalogBrowser`] ties the record store, the predicate filter and the
//! pagination controller to a host [`CatalogPresenter`]. The host forwards UI
//! events (search submitted, "show more" clicked, preview clicked, theme
//! chosen) and the browser decides what to render.
//!
//! ## Example
//!
//! ```
//! use bridge_traits::error::Result;
//! use bridge_traits::presentation::*;
//! use bridge_traits::theme::{Theme, ThemePalette};
//! use core_catalog::{CatalogBrowser, FilterSpec, RecordStore};
//! use std::sync::Arc;
//!
//! struct Headless;
//!
//! impl CatalogPresenter for Headless {
//!     fn replace_items(&self, _: &[PreviewItem]) -> Result<()> { Ok(()) }
//!     fn append_items(&self, _: &[PreviewItem]) -> Result<()> { Ok(()) }
//!     fn update_load_more(&self, _: LoadMoreState) -> Result<()> { Ok(()) }
//!     fn set_empty_message_visible(&self, _: bool) -> Result<()> { Ok(()) }
//!     fn populate_select(&self, _: SelectKind, _: &[SelectOption]) -> Result<()> { Ok(()) }
//!     fn show_book_detail(&self, _: &BookDetail) -> Result<()> { Ok(()) }
//!     fn set_overlay_open(&self, _: OverlayKind, _: bool) -> Result<()> { Ok(()) }
//!     fn apply_theme(&self, _: Theme, _: &ThemePalette) -> Result<()> { Ok(()) }
//! }
//!
//! # fn main() -> core_catalog::Result<()> {
//! let store = RecordStore::from_json(r#"{"books": [
//!     {"id": "1", "title": "Dune", "author": "a1", "image": "", "published": "1965-08-01T00:00:00Z"}
//! ]}"#)?;
//!
//! let mut browser = CatalogBrowser::new(Arc::new(store), Headless, 36)?;
//! browser.initialize(Theme::Day)?;
//!
//! let matches = browser.submit_search(FilterSpec::any().with_title("dune"))?;
//! assert_eq!(matches, 1);
//! assert!(!browser.has_more());
//! # Ok(())
//! # }
//! ```

use crate::error::{CatalogError, Result};
use crate::filter::FilterSpec;
use crate::models::Book;
use crate::pagination::PaginationController;
use crate::result_set::{build_result_set, ResultSet};
use crate::store::RecordStore;
use crate::view::{book_detail, preview_items, select_options};
use bridge_traits::presentation::{BookDetail, CatalogPresenter, OverlayKind, SelectKind};
use bridge_traits::theme::Theme;
use core_runtime::config::CoreConfig;
use core_runtime::events::{
    CoreEvent, DetailEvent, EventBus, EventStream, PaginationEvent, SearchEvent, SettingsEvent,
};
use core_runtime::logging::clip_for_log;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const LOGGED_TITLE_CHARS: usize = 64;

/// A browsing session over one record store.
pub struct CatalogBrowser<P: CatalogPresenter> {
    store: Arc<RecordStore>,
    pagination: PaginationController,
    presenter: P,
    event_bus: Option<EventBus>,
    detail_overlay_enabled: bool,
    theme: Theme,
}

impl<P: CatalogPresenter> CatalogBrowser<P> {
    /// Creates a session showing the whole store.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidInput`] when `page_size` is zero.
    pub fn new(store: Arc<RecordStore>, presenter: P, page_size: usize) -> Result<Self> {
        let pagination = PaginationController::new(page_size, ResultSet::all(&store))?;

        Ok(Self {
            store,
            pagination,
            presenter,
            event_bus: None,
            detail_overlay_enabled: true,
            theme: Theme::default(),
        })
    }

    /// Creates a session from a [`CoreConfig`].
    ///
    /// An event bus is attached when `features.enable_events` is set.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Config`] when `config` fails validation.
    pub fn from_config(store: Arc<RecordStore>, presenter: P, config: &CoreConfig) -> Result<Self> {
        config.validate()?;

        let mut browser = Self::new(store, presenter, config.page_size)?
            .with_detail_overlay(config.features.enable_detail_overlay);

        if config.features.enable_events {
            browser = browser.with_event_bus(EventBus::new(config.event_buffer_size));
        }

        Ok(browser)
    }

    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    pub fn with_detail_overlay(mut self, enabled: bool) -> Self {
        self.detail_overlay_enabled = enabled;
        self
    }

    /// First render: dropdowns, theme and the first page of the whole store.
    #[instrument(skip(self), fields(books = self.store.len()))]
    pub fn initialize(&mut self, theme: Theme) -> Result<()> {
        self.presenter.populate_select(
            SelectKind::Authors,
            &select_options(SelectKind::Authors, self.store.authors()),
        )?;
        self.presenter.populate_select(
            SelectKind::Genres,
            &select_options(SelectKind::Genres, self.store.genres()),
        )?;

        self.render_theme(theme)?;
        self.render_first_page()?;

        info!(
            page_size = self.pagination.page_size(),
            theme = theme.as_str(),
            "Catalog initialized"
        );
        Ok(())
    }

    /// Runs a search and shows the first page of its results.
    ///
    /// Returns the number of matching records.
    #[instrument(skip(self, filter), fields(title = %clip_for_log(&filter.title, LOGGED_TITLE_CHARS)))]
    pub fn submit_search(&mut self, filter: FilterSpec) -> Result<usize> {
        let result_set = build_result_set(&self.store, &filter);
        let matches = result_set.len();

        self.pagination.replace(result_set);
        self.render_first_page()?;
        self.presenter.set_overlay_open(OverlayKind::Search, false)?;

        info!(matches, "Search applied");
        self.emit(CoreEvent::Search(SearchEvent::Completed {
            title: filter.title.trim().to_string(),
            author: filter.author.as_option().map(ToString::to_string),
            genre: filter.genre.as_option().map(ToString::to_string),
            matches,
        }));

        Ok(matches)
    }

    /// Decodes raw form pairs and runs the search.
    pub fn submit_search_form<I, K, V>(&mut self, fields: I) -> Result<usize>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.submit_search(FilterSpec::from_form(fields))
    }

    /// Appends the next page. Returns `false` without rendering anything when
    /// every record is already visible.
    pub fn load_more(&mut self) -> Result<bool> {
        if !self.pagination.advance() {
            debug!(
                page_depth = self.pagination.page_depth(),
                "Load more ignored, result set exhausted"
            );
            self.emit(CoreEvent::Pagination(PaginationEvent::Exhausted {
                page_depth: self.pagination.page_depth(),
            }));
            return Ok(false);
        }

        let revealed = self.pagination.newly_revealed_slice();
        let items = preview_items(revealed, &self.store);
        self.presenter.append_items(&items)?;

        let state = self.pagination.load_more_state();
        self.presenter.update_load_more(state)?;

        debug!(
            page_depth = self.pagination.page_depth(),
            revealed = items.len(),
            remaining = state.remaining,
            "Page revealed"
        );
        self.emit(CoreEvent::Pagination(PaginationEvent::PageRevealed {
            page_depth: self.pagination.page_depth(),
            revealed: items.len(),
            remaining: state.remaining,
        }));

        Ok(true)
    }

    /// Shows the detail overlay for any book of the store.
    ///
    /// Returns `None` when the detail overlay is disabled.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] when no book has `id`.
    pub fn open_book(&mut self, id: &str) -> Result<Option<BookDetail>> {
        if !self.detail_overlay_enabled {
            debug!(book_id = id, "Detail overlay disabled");
            return Ok(None);
        }

        let Some(book) = self.store.find_by_id(id) else {
            warn!(book_id = id, "Preview references unknown book");
            self.emit(CoreEvent::Detail(DetailEvent::NotFound {
                book_id: id.to_string(),
            }));
            return Err(CatalogError::NotFound {
                entity_type: "Book".to_string(),
                id: id.to_string(),
            });
        };

        let detail = book_detail(book, &self.store);
        self.presenter.show_book_detail(&detail)?;
        self.presenter.set_overlay_open(OverlayKind::BookDetail, true)?;

        self.emit(CoreEvent::Detail(DetailEvent::Opened {
            book_id: detail.id.clone(),
        }));
        Ok(Some(detail))
    }

    pub fn close_book(&mut self) -> Result<()> {
        self.presenter
            .set_overlay_open(OverlayKind::BookDetail, false)?;
        self.emit(CoreEvent::Detail(DetailEvent::Closed));
        Ok(())
    }

    /// Applies `theme` and closes the settings overlay.
    pub fn apply_theme(&mut self, theme: Theme) -> Result<()> {
        self.render_theme(theme)?;
        self.presenter.set_overlay_open(OverlayKind::Settings, false)?;

        info!(theme = theme.as_str(), "Theme applied");
        self.emit(CoreEvent::Settings(SettingsEvent::ThemeChanged {
            theme: theme.as_str().to_string(),
        }));
        Ok(())
    }

    /// Opens or closes an overlay on behalf of the host's header buttons.
    pub fn set_overlay_open(&self, overlay: OverlayKind, open: bool) -> Result<()> {
        self.presenter.set_overlay_open(overlay, open)?;
        Ok(())
    }

    pub fn remaining_count(&self) -> usize {
        self.pagination.remaining_count()
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }

    pub fn visible_books(&self) -> &[Arc<Book>] {
        self.pagination.visible_slice()
    }

    pub fn result_len(&self) -> usize {
        self.pagination.result_set().len()
    }

    pub fn page_depth(&self) -> usize {
        self.pagination.page_depth()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Subscribes to session events; `None` unless an event bus is attached.
    pub fn subscribe_events(&self) -> Option<EventStream> {
        self.event_bus
            .as_ref()
            .map(|bus| EventStream::new(bus.subscribe()))
    }

    fn render_first_page(&self) -> Result<()> {
        let items = preview_items(self.pagination.visible_slice(), &self.store);
        self.presenter.replace_items(&items)?;
        self.presenter
            .update_load_more(self.pagination.load_more_state())?;
        self.presenter
            .set_empty_message_visible(self.pagination.result_set().is_empty())?;
        Ok(())
    }

    fn render_theme(&mut self, theme: Theme) -> Result<()> {
        self.presenter.apply_theme(theme, &theme.palette())?;
        self.theme = theme;
        Ok(())
    }

    fn emit(&self, event: CoreEvent) {
        if let Some(bus) = &self.event_bus {
            // No subscribers is not an error
            bus.emit(event).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::{BridgeError, Result as BridgeResult};
    use bridge_traits::presentation::{LoadMoreState, PreviewItem, SelectOption};
    use bridge_traits::theme::ThemePalette;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
        fail_append: bool,
    }

    impl Recorder {
        fn push(&self, call: String) -> BridgeResult<()> {
            self.calls.lock().unwrap().push(call);
            Ok(())
        }

        fn take(&self) -> Vec<String> {
            std::mem::take(&mut *self.calls.lock().unwrap())
        }
    }

    impl CatalogPresenter for Recorder {
        fn replace_items(&self, items: &[PreviewItem]) -> BridgeResult<()> {
            self.push(format!("replace:{}", items.len()))
        }

        fn append_items(&self, items: &[PreviewItem]) -> BridgeResult<()> {
            if self.fail_append {
                return Err(BridgeError::ElementNotFound("[data-list-items]".to_string()));
            }
            self.push(format!("append:{}", items.len()))
        }

        fn update_load_more(&self, state: LoadMoreState) -> BridgeResult<()> {
            self.push(format!("load_more:{}:{}", state.remaining, state.enabled))
        }

        fn set_empty_message_visible(&self, visible: bool) -> BridgeResult<()> {
            self.push(format!("empty:{}", visible))
        }

        fn populate_select(&self, kind: SelectKind, options: &[SelectOption]) -> BridgeResult<()> {
            self.push(format!("select:{:?}:{}", kind, options.len()))
        }

        fn show_book_detail(&self, detail: &BookDetail) -> BridgeResult<()> {
            self.push(format!("detail:{}", detail.id))
        }

        fn set_overlay_open(&self, overlay: OverlayKind, open: bool) -> BridgeResult<()> {
            self.push(format!("overlay:{:?}:{}", overlay, open))
        }

        fn apply_theme(&self, theme: Theme, _palette: &ThemePalette) -> BridgeResult<()> {
            self.push(format!("theme:{}", theme))
        }
    }

    fn store() -> Arc<RecordStore> {
        Arc::new(
            RecordStore::from_json(
                r#"{
                    "books": [
                        {"id": "1", "title": "Dune", "author": "a1", "genres": ["g1"], "image": "", "published": "1965-08-01T00:00:00Z"},
                        {"id": "2", "title": "Dune Messiah", "author": "a1", "genres": ["g1"], "image": "", "published": "1969-01-01T00:00:00Z"},
                        {"id": "3", "title": "Foundation", "author": "a2", "genres": ["g2"], "image": "", "published": "1951-06-01T00:00:00Z"}
                    ],
                    "authors": {"a1": "Frank Herbert", "a2": "Isaac Asimov"},
                    "genres": {"g1": "Science Fiction", "g2": "Classics"}
                }"#,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_initialize_render_order() {
        let mut browser = CatalogBrowser::new(store(), Recorder::default(), 2).unwrap();
        browser.initialize(Theme::Night).unwrap();

        assert_eq!(
            browser.presenter().take(),
            vec![
                "select:Authors:3",
                "select:Genres:3",
                "theme:night",
                "replace:2",
                "load_more:1:true",
                "empty:false",
            ]
        );
        assert_eq!(browser.theme(), Theme::Night);
    }

    #[test]
    fn test_submit_search_closes_overlay() {
        let mut browser = CatalogBrowser::new(store(), Recorder::default(), 2).unwrap();

        let matches = browser
            .submit_search(FilterSpec::any().with_title("zzz"))
            .unwrap();

        assert_eq!(matches, 0);
        assert_eq!(
            browser.presenter().take(),
            vec![
                "replace:0",
                "load_more:0:false",
                "empty:true",
                "overlay:Search:false",
            ]
        );
    }

    #[test]
    fn test_load_more_exhausted_renders_nothing() {
        let mut browser = CatalogBrowser::new(store(), Recorder::default(), 3).unwrap();

        assert!(!browser.load_more().unwrap());
        assert!(browser.presenter().take().is_empty());
    }

    #[test]
    fn test_presenter_failure_propagates() {
        let presenter = Recorder {
            fail_append: true,
            ..Recorder::default()
        };
        let mut browser = CatalogBrowser::new(store(), presenter, 2).unwrap();

        let result = browser.load_more();
        assert!(matches!(
            result,
            Err(CatalogError::Bridge(BridgeError::ElementNotFound(_)))
        ));
    }

    #[test]
    fn test_open_book_outside_result_set() {
        let mut browser = CatalogBrowser::new(store(), Recorder::default(), 2).unwrap();
        browser
            .submit_search(FilterSpec::any().with_author("a2"))
            .unwrap();
        browser.presenter().take();

        let detail = browser.open_book("1").unwrap().unwrap();
        assert_eq!(detail.subtitle, "Frank Herbert (1965)");
        assert_eq!(
            browser.presenter().take(),
            vec!["detail:1", "overlay:BookDetail:true"]
        );

        browser.close_book().unwrap();
        assert_eq!(browser.presenter().take(), vec!["overlay:BookDetail:false"]);
    }

    #[test]
    fn test_open_unknown_book() {
        let mut browser = CatalogBrowser::new(store(), Recorder::default(), 2).unwrap();

        let result = browser.open_book("404");
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
        assert!(browser.presenter().take().is_empty());
    }

    #[test]
    fn test_detail_overlay_disabled() {
        let mut browser = CatalogBrowser::new(store(), Recorder::default(), 2)
            .unwrap()
            .with_detail_overlay(false);

        assert_eq!(browser.open_book("1").unwrap(), None);
        assert!(browser.presenter().take().is_empty());
    }

    #[test]
    fn test_apply_theme_closes_settings() {
        let mut browser = CatalogBrowser::new(store(), Recorder::default(), 2).unwrap();
        browser.apply_theme(Theme::Night).unwrap();

        assert_eq!(
            browser.presenter().take(),
            vec!["theme:night", "overlay:Settings:false"]
        );
        assert_eq!(browser.theme(), Theme::Night);
    }

    #[test]
    fn test_events_published() {
        let config = CoreConfig::builder()
            .page_size(2)
            .enable_events(true)
            .build()
            .unwrap();
        let mut browser =
            CatalogBrowser::from_config(store(), Recorder::default(), &config).unwrap();
        let mut stream = browser.subscribe_events().unwrap();

        browser
            .submit_search_form([("title", " Dune "), ("genre", "g1")])
            .unwrap();
        browser.load_more().unwrap();
        let _ = browser.open_book("missing");

        let events = stream.drain();
        assert_eq!(
            events,
            vec![
                CoreEvent::Search(SearchEvent::Completed {
                    title: "Dune".to_string(),
                    author: None,
                    genre: Some("g1".to_string()),
                    matches: 2,
                }),
                CoreEvent::Pagination(PaginationEvent::Exhausted { page_depth: 1 }),
                CoreEvent::Detail(DetailEvent::NotFound {
                    book_id: "missing".to_string(),
                }),
            ]
        );
    }

    #[test]
    fn test_from_config_rejects_edited_config() {
        let mut config = CoreConfig::builder().enable_events(true).build().unwrap();
        config.event_buffer_size = 0;

        let result = CatalogBrowser::from_config(store(), Recorder::default(), &config);
        assert!(matches!(
            result,
            Err(CatalogError::Config(core_runtime::Error::Config(_)))
        ));

        let mut config = CoreConfig::builder().build().unwrap();
        config.page_size = 0;
        assert!(matches!(
            CatalogBrowser::from_config(store(), Recorder::default(), &config),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn test_events_disabled_by_default() {
        let config = CoreConfig::builder().build().unwrap();
        let browser = CatalogBrowser::from_config(store(), Recorder::default(), &config).unwrap();
        assert!(browser.subscribe_events().is_none());
    }
}
