//! Terminal walkthrough of a catalog session.
//!
//! Run with: `cargo run -p core-service --example terminal_catalog`

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::logging::{ConsoleLogger, LogLevel};
use bridge_traits::presentation::{
    BookDetail, CatalogPresenter, LoadMoreState, OverlayKind, PreviewItem, SelectKind,
    SelectOption,
};
use bridge_traits::theme::{Theme, ThemePalette};
use core_catalog::FilterSpec;
use core_runtime::config::CoreConfig;
use core_runtime::logging::{LogFormat, LoggingConfig};
use core_service::{CoreDependencies, CoreService};
use std::sync::Arc;

const DATASET: &str = r#"{
    "books": [
        {"id": "1", "title": "Dune", "author": "a1", "genres": ["g1"], "image": "dune.jpg",
         "description": "A desert planet and its spice.", "published": "1965-08-01T00:00:00.000Z"},
        {"id": "2", "title": "Dune Messiah", "author": "a1", "genres": ["g1"], "image": "messiah.jpg",
         "description": "Twelve years after Arrakeen.", "published": "1969-01-01T00:00:00.000Z"},
        {"id": "3", "title": "Foundation", "author": "a2", "genres": ["g2"], "image": "foundation.jpg",
         "description": "The fall of a galactic empire.", "published": "1951-06-01T00:00:00.000Z"}
    ],
    "authors": {"a1": "Frank Herbert", "a2": "Isaac Asimov"},
    "genres": {"g1": "Science Fiction", "g2": "Classics"}
}"#;

struct TerminalPresenter;

impl TerminalPresenter {
    fn print_items(prefix: &str, items: &[PreviewItem]) {
        for item in items {
            println!("{} {} by {}", prefix, item.title, item.author_name);
        }
    }
}

impl CatalogPresenter for TerminalPresenter {
    fn replace_items(&self, items: &[PreviewItem]) -> BridgeResult<()> {
        println!("--- list ---");
        Self::print_items("*", items);
        Ok(())
    }

    fn append_items(&self, items: &[PreviewItem]) -> BridgeResult<()> {
        Self::print_items("+", items);
        Ok(())
    }

    fn update_load_more(&self, state: LoadMoreState) -> BridgeResult<()> {
        let marker = if state.enabled { "" } else { " [disabled]" };
        println!("[Show more{}]{}", state.remaining_label(), marker);
        Ok(())
    }

    fn set_empty_message_visible(&self, visible: bool) -> BridgeResult<()> {
        if visible {
            println!("No results found. Your filters might be too narrow.");
        }
        Ok(())
    }

    fn populate_select(&self, kind: SelectKind, options: &[SelectOption]) -> BridgeResult<()> {
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        println!("{:?}: {}", kind, labels.join(" | "));
        Ok(())
    }

    fn show_book_detail(&self, detail: &BookDetail) -> BridgeResult<()> {
        println!("=== {} ===\n{}\n{}", detail.title, detail.subtitle, detail.description);
        Ok(())
    }

    fn set_overlay_open(&self, overlay: OverlayKind, open: bool) -> BridgeResult<()> {
        println!("({:?} overlay {})", overlay, if open { "opened" } else { "closed" });
        Ok(())
    }

    fn apply_theme(&self, theme: Theme, palette: &ThemePalette) -> BridgeResult<()> {
        println!("theme {} -> {:?}", theme, palette.css_variables());
        Ok(())
    }
}

fn main() -> core_service::Result<()> {
    let config = CoreConfig::builder()
        .page_size(2)
        .logging(
            LoggingConfig::default()
                .with_format(LogFormat::Compact)
                .with_level(LogLevel::Debug),
        )
        .build()?;

    let deps = CoreDependencies::new(TerminalPresenter)
        .with_logger_sink(Arc::new(ConsoleLogger {
            min_level: LogLevel::Warn,
        }));
    let mut service = CoreService::bootstrap(config, DATASET, deps)?;
    let browser = service.browser_mut();

    browser.load_more()?;
    browser.load_more()?;

    browser.submit_search(FilterSpec::any().with_title("dune"))?;
    browser.open_book("3")?;
    browser.close_book()?;
    browser.apply_theme(Theme::Night)?;

    println!("remaining: {}", browser.remaining_count());
    Ok(())
}
