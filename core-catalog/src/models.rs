//! Domain models for the book catalog
//!
//! Records are immutable once loaded; every other component shares them
//! through the [`RecordStore`](crate::store::RecordStore).

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// ID Types
// =============================================================================

/// Unique identifier for an author
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub String);

impl AuthorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AuthorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for AuthorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a genre
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(pub String);

impl GenreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GenreId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GenreId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for GenreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Book
// =============================================================================

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier across the store
    pub id: String,
    /// Display title
    pub title: String,
    /// Author reference
    pub author: AuthorId,
    /// Genre references, possibly empty
    #[serde(default)]
    pub genres: Vec<GenreId>,
    /// Cover art URI
    pub image: String,
    /// Free-text blurb
    #[serde(default)]
    pub description: String,
    /// Publication date
    pub published: DateTime<Utc>,
}

impl Book {
    /// Validate book data
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Book id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err(format!("Book {} has an empty title", self.id));
        }

        Ok(())
    }

    pub fn has_genre(&self, genre: &GenreId) -> bool {
        self.genres.contains(genre)
    }

    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

// =============================================================================
// Name tables
// =============================================================================

/// Id to display-name lookup, iterated in id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameTable<K: Ord> {
    entries: BTreeMap<K, String>,
}

pub type AuthorTable = NameTable<AuthorId>;
pub type GenreTable = NameTable<GenreId>;

impl<K: Ord> NameTable<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, id: &K) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.entries.iter().map(|(id, name)| (id, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Ord> Default for NameTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, N> FromIterator<(K, N)> for NameTable<K>
where
    K: Ord,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, name)| (id, name.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn book() -> Book {
        Book {
            id: "b1".to_string(),
            title: "Dune".to_string(),
            author: AuthorId::from("a1"),
            genres: vec![GenreId::from("g1")],
            image: "dune.jpg".to_string(),
            description: "Spice.".to_string(),
            published: Utc.with_ymd_and_hms(1965, 8, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_book_validation() {
        assert!(book().validate().is_ok());

        let mut blank_id = book();
        blank_id.id = "  ".to_string();
        assert!(blank_id.validate().is_err());

        let mut blank_title = book();
        blank_title.title = String::new();
        assert!(blank_title.validate().unwrap_err().contains("b1"));
    }

    #[test]
    fn test_book_genre_membership() {
        let book = book();
        assert!(book.has_genre(&GenreId::from("g1")));
        assert!(!book.has_genre(&GenreId::from("g2")));
        assert_eq!(book.published_year(), 1965);
    }

    #[test]
    fn test_book_deserializes_dataset_shape() {
        let json = r#"{
            "id": "b7",
            "title": "Foundation",
            "author": "a2",
            "genres": ["g2"],
            "image": "f.jpg",
            "description": "Psychohistory.",
            "published": "1951-06-01T00:00:00.000Z"
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.author, AuthorId::from("a2"));
        assert_eq!(book.genres, vec![GenreId::from("g2")]);
        assert_eq!(book.published_year(), 1951);
    }

    #[test]
    fn test_missing_genres_default_to_empty() {
        let json = r#"{
            "id": "b8", "title": "Untagged", "author": "a1",
            "image": "u.jpg", "published": "2001-01-01T00:00:00Z"
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert!(book.genres.is_empty());
        assert!(book.description.is_empty());
    }

    #[test]
    fn test_name_table_orders_by_id() {
        let table: GenreTable = vec![
            (GenreId::from("g3"), "Horror"),
            (GenreId::from("g1"), "Science Fiction"),
            (GenreId::from("g2"), "Fantasy"),
        ]
        .into_iter()
        .collect();

        let ids: Vec<&str> = table.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["g1", "g2", "g3"]);
        assert_eq!(table.get(&GenreId::from("g2")), Some("Fantasy"));
        assert!(!table.contains(&GenreId::from("g9")));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(AuthorId::new("a1").to_string(), "a1");
        assert_eq!(GenreId::new("g1").as_str(), "g1");
    }
}
