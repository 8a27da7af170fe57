//! Mapping from catalog records to presenter view models.

use crate::models::{Book, NameTable};
use crate::store::RecordStore;
use bridge_traits::presentation::{BookDetail, PreviewItem, SelectKind, SelectOption};
use std::fmt::Display;
use std::sync::Arc;

/// Shown in place of an author id that has no table entry.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

pub fn preview_item(book: &Book, store: &RecordStore) -> PreviewItem {
    PreviewItem {
        id: book.id.clone(),
        title: book.title.clone(),
        author_name: author_display_name(book, store).to_string(),
        image: book.image.clone(),
    }
}

pub fn preview_items(books: &[Arc<Book>], store: &RecordStore) -> Vec<PreviewItem> {
    books.iter().map(|book| preview_item(book, store)).collect()
}

/// Detail overlay contents; the subtitle reads `"<author> (<year>)"`.
pub fn book_detail(book: &Book, store: &RecordStore) -> BookDetail {
    BookDetail {
        id: book.id.clone(),
        title: book.title.clone(),
        subtitle: format!(
            "{} ({})",
            author_display_name(book, store),
            book.published_year()
        ),
        description: book.description.clone(),
        image: book.image.clone(),
    }
}

/// Dropdown options: the "any" entry followed by `table` in id order.
pub fn select_options<K>(kind: SelectKind, table: &NameTable<K>) -> Vec<SelectOption>
where
    K: Ord + Display,
{
    std::iter::once(SelectOption::any(kind))
        .chain(
            table
                .iter()
                .map(|(id, name)| SelectOption::new(id.to_string(), name)),
        )
        .collect()
}

fn author_display_name<'a>(book: &Book, store: &'a RecordStore) -> &'a str {
    store.author_name(&book.author).unwrap_or(UNKNOWN_AUTHOR)
}
