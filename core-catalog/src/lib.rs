//! # Catalog Core
//!
//! Filtering and incremental pagination over a fixed book catalog.
//!
//! ## Overview
//!
//! This crate manages:
//! - The read-only [`RecordStore`] of books, authors and genres
//! - The [`FilterSpec`] predicate (title substring, author, genre)
//! - [`ResultSet`] construction in store order
//! - The [`PaginationController`] behind the "show more" control
//! - The [`CatalogBrowser`] session that renders through a
//!   [`CatalogPresenter`](bridge_traits::presentation::CatalogPresenter)

pub mod browser;
pub mod error;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod result_set;
pub mod store;
pub mod view;

pub use browser::CatalogBrowser;
pub use error::{CatalogError, Result};
pub use filter::{matches, FilterSpec, Selection};
pub use models::{AuthorId, Book, GenreId, NameTable};
pub use pagination::{Page, PageRequest, PaginationController};
pub use result_set::{build_result_set, ResultSet};
pub use store::RecordStore;
