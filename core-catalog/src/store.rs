//! Read-only record store loaded once per session.

use crate::error::{CatalogError, Result};
use crate::models::{AuthorId, AuthorTable, Book, GenreTable};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// On-disk shape of a dataset document.
#[derive(Debug, Deserialize)]
struct Dataset {
    books: Vec<Book>,
    #[serde(default)]
    authors: AuthorTable,
    #[serde(default)]
    genres: GenreTable,
}

/// The fixed collection of books plus their author and genre tables.
///
/// Book order is the order of the source document and is never changed.
#[derive(Debug, Clone)]
pub struct RecordStore {
    books: Vec<Arc<Book>>,
    index: HashMap<String, usize>,
    authors: AuthorTable,
    genres: GenreTable,
}

impl RecordStore {
    /// Builds a store from already parsed parts.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidInput`] for a duplicate book id. Blank
    /// ids or titles and dangling author or genre references are accepted and
    /// logged.
    pub fn new(books: Vec<Book>, authors: AuthorTable, genres: GenreTable) -> Result<Self> {
        let mut index = HashMap::with_capacity(books.len());
        let mut shared = Vec::with_capacity(books.len());

        for book in books {
            if let Err(message) = book.validate() {
                warn!(book_id = %book.id, %message, "Book loaded with incomplete data");
            }

            if index.contains_key(&book.id) {
                return Err(CatalogError::invalid(
                    "id",
                    format!("duplicate book id {}", book.id),
                ));
            }

            if !authors.contains(&book.author) {
                warn!(book_id = %book.id, author = %book.author, "Book references unknown author");
            }
            for genre in book.genres.iter().filter(|g| !genres.contains(g)) {
                warn!(book_id = %book.id, genre = %genre, "Book references unknown genre");
            }

            index.insert(book.id.clone(), shared.len());
            shared.push(Arc::new(book));
        }

        debug!(
            books = shared.len(),
            authors = authors.len(),
            genres = genres.len(),
            "Record store loaded"
        );

        Ok(Self {
            books: shared,
            index,
            authors,
            genres,
        })
    }

    /// Parses a JSON dataset document.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Dataset`] when the document is malformed, otherwise the
    /// errors of [`RecordStore::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::new(dataset.books, dataset.authors, dataset.genres)
    }

    pub fn books(&self) -> &[Arc<Book>] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Arc<Book>> {
        self.index.get(id).and_then(|&pos| self.books.get(pos))
    }

    pub fn authors(&self) -> &AuthorTable {
        &self.authors
    }

    pub fn genres(&self) -> &GenreTable {
        &self.genres
    }

    pub fn author_name(&self, id: &AuthorId) -> Option<&str> {
        self.authors.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenreId;

    const DATASET: &str = r#"{
        "books": [
            {"id": "b1", "title": "Dune", "author": "a1", "genres": ["g1"],
             "image": "dune.jpg", "description": "Spice.", "published": "1965-08-01T00:00:00.000Z"},
            {"id": "b2", "title": "Foundation", "author": "a2", "genres": ["g2"],
             "image": "f.jpg", "description": "Empire.", "published": "1951-06-01T00:00:00.000Z"}
        ],
        "authors": {"a1": "Frank Herbert", "a2": "Isaac Asimov"},
        "genres": {"g1": "Science Fiction", "g2": "Classics"}
    }"#;

    #[test]
    fn test_from_json_preserves_order() {
        let store = RecordStore::from_json(DATASET).unwrap();

        assert_eq!(store.len(), 2);
        let ids: Vec<&str> = store.books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
        assert_eq!(store.author_name(&AuthorId::from("a2")), Some("Isaac Asimov"));
        assert_eq!(store.genres().get(&GenreId::from("g1")), Some("Science Fiction"));
    }

    #[test]
    fn test_find_by_id() {
        let store = RecordStore::from_json(DATASET).unwrap();

        assert_eq!(store.find_by_id("b2").unwrap().title, "Foundation");
        assert!(store.find_by_id("missing").is_none());
    }

    #[test]
    fn test_malformed_json() {
        let result = RecordStore::from_json("{\"books\": [");
        assert!(matches!(result, Err(CatalogError::Dataset(_))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"{"books": [
            {"id": "b1", "title": "A", "author": "a1", "image": "", "published": "2000-01-01T00:00:00Z"},
            {"id": "b1", "title": "B", "author": "a1", "image": "", "published": "2000-01-01T00:00:00Z"}
        ]}"#;

        match RecordStore::from_json(json) {
            Err(CatalogError::InvalidInput { field, message }) => {
                assert_eq!(field, "id");
                assert!(message.contains("b1"));
            }
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_references_accepted() {
        let json = r#"{"books": [
            {"id": "b1", "title": "Orphan", "author": "nobody", "genres": ["nowhere"],
             "image": "", "published": "2000-01-01T00:00:00Z"}
        ]}"#;

        let store = RecordStore::from_json(json).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.author_name(&AuthorId::from("nobody")).is_none());
        assert!(store.authors().is_empty());
    }

    #[test]
    fn test_blank_title_accepted() {
        let json = r#"{"books": [
            {"id": "b1", "title": "Dune", "author": "a1", "image": "", "published": "1965-08-01T00:00:00Z"},
            {"id": "b2", "title": "", "author": "a1", "image": "", "published": "2000-01-01T00:00:00Z"}
        ]}"#;

        let store = RecordStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id("b2").unwrap().title, "");

        let all = crate::result_set::build_result_set(&store, &crate::filter::FilterSpec::any());
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new(Vec::new(), AuthorTable::new(), GenreTable::new()).unwrap();
        assert!(store.is_empty());
    }
}
