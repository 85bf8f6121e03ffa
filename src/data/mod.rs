//! Catalog of items described by combined text features.
//!
//! A [`Catalog`] is an ordered list of [`CatalogItem`]s plus a derived
//! lookup from normalized title to row. Row order is significant: the
//! similarity matrix built over a catalog uses the same ordering.
//!
//! # Examples
//!
//! ```
//! use cinematch::data::{Catalog, CatalogItem};
//!
//! let catalog: Catalog = vec![
//!     CatalogItem::new("Avatar", "action adventure james_cameron"),
//!     CatalogItem::new("Titanic", "drama romance james_cameron"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.position("  TITANIC "), Some(1));
//! ```

mod csv_loader;

pub use csv_loader::{CatalogOptions, DEFAULT_FEATURES_COLUMN, DEFAULT_TITLE_COLUMN};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalize a title for lookup: trim surrounding whitespace and lowercase.
///
/// # Examples
///
/// ```
/// use cinematch::data::normalize_title;
///
/// assert_eq!(normalize_title("  The Dark Knight "), "the dark knight");
/// ```
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// One catalog row: a title and the combined feature text used for similarity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display title, unique up to case
    pub title: String,
    /// Free text concatenating the metadata used for similarity
    pub combined_features: String,
}

impl CatalogItem {
    /// Create a catalog item.
    #[must_use]
    pub fn new(title: impl Into<String>, combined_features: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            combined_features: combined_features.into(),
        }
    }
}

/// Ordered, immutable sequence of catalog items with O(1) title lookup.
///
/// When several rows share a normalized title, the first row in catalog
/// order owns the lookup key; later duplicates stay in the catalog (and
/// can be recommended) but are never resolved by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    title_index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a catalog from items, building the title lookup.
    #[must_use]
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut title_index = HashMap::with_capacity(items.len());
        for (row, item) in items.iter().enumerate() {
            title_index.entry(normalize_title(&item.title)).or_insert(row);
        }
        Self { items, title_index }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `row`, if in range.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&CatalogItem> {
        self.items.get(row)
    }

    /// All items in row order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Iterate over items in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    /// Row of the first item whose normalized title equals the normalized `title`.
    #[must_use]
    pub fn position(&self, title: &str) -> Option<usize> {
        self.title_index.get(&normalize_title(title)).copied()
    }

    /// Combined-feature strings in row order.
    #[must_use]
    pub fn features(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|item| item.combined_features.as_str())
            .collect()
    }

    /// Number of rows shadowed by an earlier row with the same normalized title.
    #[must_use]
    pub fn duplicate_titles(&self) -> usize {
        self.items.len() - self.title_index.len()
    }
}

impl FromIterator<CatalogItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
