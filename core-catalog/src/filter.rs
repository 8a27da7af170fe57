//! Predicate filter applied to every record of the store.
//!
//! A [`FilterSpec`] is the conjunction of three sub-predicates: a
//! case-insensitive title substring, an exact author and a genre membership
//! test. Each sub-predicate has a neutral value that accepts every record.

use crate::models::{AuthorId, Book, GenreId};
use bridge_traits::presentation::ANY_OPTION_VALUE;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A dropdown selection: either the "any" sentinel or a concrete id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    Any,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Any
    }
}

impl<T> Selection<T> {
    /// Decodes a submitted option value. Blank and `"any"` mean no constraint.
    pub fn from_form_value(value: &str) -> Self
    where
        T: From<String>,
    {
        let value = value.trim();
        if value.is_empty() || value == ANY_OPTION_VALUE {
            Selection::Any
        } else {
            Selection::Only(T::from(value.to_string()))
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::Any => None,
            Selection::Only(value) => Some(value),
        }
    }
}

/// Criteria of a single search submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Title substring; empty or whitespace-only matches everything
    pub title: String,
    pub author: Selection<AuthorId>,
    pub genre: Selection<GenreId>,
}

impl FilterSpec {
    /// The filter that accepts every record.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<AuthorId>) -> Self {
        self.author = Selection::Only(author.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<GenreId>) -> Self {
        self.genre = Selection::Only(genre.into());
        self
    }

    /// Builds a filter from submitted `(name, value)` form pairs.
    ///
    /// Recognized names are `title`, `author` and `genre`; others are
    /// ignored. Missing fields leave the sub-predicate unconstrained.
    ///
    /// ```
    /// use core_catalog::filter::{FilterSpec, Selection};
    ///
    /// let filter = FilterSpec::from_form([("title", "  dune "), ("author", "any"), ("genre", "g1")]);
    /// assert_eq!(filter.title, "dune");
    /// assert_eq!(filter.author, Selection::Any);
    /// assert_eq!(filter.genre, Selection::Only("g1".into()));
    /// ```
    pub fn from_form<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();

        for (name, value) in fields {
            let value = value.as_ref();
            match name.as_ref() {
                "title" => filter.title = value.trim().to_string(),
                "author" => filter.author = Selection::from_form_value(value),
                "genre" => filter.genre = Selection::from_form_value(value),
                other => debug!(field = other, "Ignoring unknown search field"),
            }
        }

        filter
    }

    /// True when no sub-predicate constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.author.is_any() && self.genre.is_any()
    }

    /// Case-folds the title once for matching many records.
    pub fn prepare(&self) -> PreparedFilter<'_> {
        let needle = self.title.trim();
        PreparedFilter {
            spec: self,
            needle: (!needle.is_empty()).then(|| needle.to_lowercase()),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.prepare().matches(book)
    }
}

/// A [`FilterSpec`] with its title already case-folded.
#[derive(Debug, Clone)]
pub struct PreparedFilter<'a> {
    spec: &'a FilterSpec,
    needle: Option<String>,
}

impl PreparedFilter<'_> {
    pub fn title_matches(&self, book: &Book) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => book.title.to_lowercase().contains(needle.as_str()),
        }
    }

    pub fn author_matches(&self, book: &Book) -> bool {
        match &self.spec.author {
            Selection::Any => true,
            Selection::Only(author) => &book.author == author,
        }
    }

    pub fn genre_matches(&self, book: &Book) -> bool {
        match &self.spec.genre {
            Selection::Any => true,
            Selection::Only(genre) => book.has_genre(genre),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.title_matches(book) && self.author_matches(book) && self.genre_matches(book)
    }
}

/// Whether `book` satisfies every sub-predicate of `filter`.
pub fn matches(book: &Book, filter: &FilterSpec) -> bool {
    filter.matches(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn book(title: &str, author: &str, genres: &[&str]) -> Book {
        Book {
            id: title.to_lowercase(),
            title: title.to_string(),
            author: AuthorId::from(author),
            genres: genres.iter().map(|g| GenreId::from(*g)).collect(),
            image: String::new(),
            description: String::new(),
            published: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_title_is_case_insensitive_substring() {
        let dune = book("Dune Messiah", "a1", &["g1"]);

        assert!(matches(&dune, &FilterSpec::any().with_title("dune")));
        assert!(matches(&dune, &FilterSpec::any().with_title("MESSIAH")));
        assert!(matches(&dune, &FilterSpec::any().with_title("  une m  ")));
        assert!(!matches(&dune, &FilterSpec::any().with_title("foundation")));
    }

    #[test]
    fn test_blank_title_is_neutral() {
        let dune = book("Dune", "a1", &[]);
        assert!(matches(&dune, &FilterSpec::any().with_title("   ")));
        assert!(matches(&dune, &FilterSpec::any().with_title("")));
    }

    #[test]
    fn test_author_is_exact() {
        let dune = book("Dune", "a1", &["g1"]);

        assert!(matches(&dune, &FilterSpec::any().with_author("a1")));
        assert!(!matches(&dune, &FilterSpec::any().with_author("a10")));
        assert!(!matches(&dune, &FilterSpec::any().with_author("A1")));
    }

    #[test]
    fn test_genre_is_membership() {
        let dune = book("Dune", "a1", &["g1", "g3"]);

        assert!(matches(&dune, &FilterSpec::any().with_genre("g3")));
        assert!(!matches(&dune, &FilterSpec::any().with_genre("g2")));
    }

    #[test]
    fn test_empty_genres_only_match_any() {
        let untagged = book("Untagged", "a1", &[]);

        assert!(matches(&untagged, &FilterSpec::any()));
        assert!(!matches(&untagged, &FilterSpec::any().with_genre("g1")));
    }

    #[test]
    fn test_conjunction_flips_with_each_sub_predicate() {
        let dune = book("Dune", "a1", &["g1"]);
        let full = FilterSpec::any()
            .with_title("dune")
            .with_author("a1")
            .with_genre("g1");
        assert!(matches(&dune, &full));

        let prepared = full.prepare();
        assert!(prepared.title_matches(&dune));
        assert!(prepared.author_matches(&dune));
        assert!(prepared.genre_matches(&dune));

        assert!(!matches(&dune, &full.clone().with_title("zzz")));
        assert!(!matches(&dune, &full.clone().with_author("a2")));
        assert!(!matches(&dune, &full.clone().with_genre("g2")));
    }

    #[test]
    fn test_from_form_sentinels() {
        let filter = FilterSpec::from_form([("title", ""), ("author", "any"), ("genre", "  ")]);
        assert!(filter.is_unconstrained());
        assert_eq!(filter, FilterSpec::any());

        let absent = FilterSpec::from_form(Vec::<(String, String)>::new());
        assert!(absent.is_unconstrained());
    }

    #[test]
    fn test_from_form_ignores_unknown_fields() {
        let filter = FilterSpec::from_form([
            ("author", " a1 ".to_string()),
            ("theme", "night".to_string()),
        ]);

        assert_eq!(filter.author, Selection::Only(AuthorId::from("a1")));
        assert!(filter.genre.is_any());
        assert_eq!(filter.author.as_option().map(AuthorId::as_str), Some("a1"));
    }

    #[test]
    fn test_selection_serde() {
        let json = serde_json::to_string(&Selection::Only(GenreId::from("g1"))).unwrap();
        assert_eq!(json, r#"{"only":"g1"}"#);

        let any: Selection<GenreId> = serde_json::from_str(r#""any""#).unwrap();
        assert!(any.is_any());
    }
}
