//! The candidate store: the authoritative, ordered list of selectable items.
//!
//! The store validates item ids when it is built and optionally sorts items
//! once by display name. After construction its order never changes.

use super::types::{item_display_name, Item};
use std::cmp::Ordering;
use std::collections::HashSet;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Errors raised while building a [`CandidateStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An item has an empty id.
    #[error("item at position {position} has an empty id")]
    EmptyId {
        /// Position of the offending item in the input.
        position: usize,
    },

    /// Two items share an id.
    #[error("duplicate item id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },
}

/// Result type for combo-box construction.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Ordered, immutable collection of [`Item`]s.
///
/// # Examples
///
/// ```
/// use bubbletea_combobox::combobox::{CandidateStore, Item};
///
/// let store = CandidateStore::new(vec![
///     Item::new("1", "banana"),
///     Item::new("2", "Apple"),
/// ])
/// .unwrap()
/// .sorted("");
///
/// let names: Vec<_> = store.items().iter().map(|i| i.name.clone().unwrap()).collect();
/// assert_eq!(names, ["Apple", "banana"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidateStore {
    items: Vec<Item>,
}

impl CandidateStore {
    /// Builds a store, rejecting empty or repeated ids.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        validate_ids(&items)?;
        Ok(Self { items })
    }

    /// Sorts items by display name, case-insensitively and ignoring accents.
    ///
    /// Ties keep their original relative order.
    pub fn sorted(mut self, fallback: &str) -> Self {
        self.items.sort_by_cached_key(|item| {
            let name = item_display_name(item, fallback).to_string();
            SortKey {
                folded: collation_key(&name),
                raw: name,
            }
        });
        self
    }

    /// Items in store order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether an item with this id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(PartialEq, Eq)]
struct SortKey {
    folded: String,
    raw: String,
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded
            .cmp(&other.folded)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn validate_ids(items: &[Item]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(StoreError::EmptyId { position });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(StoreError::DuplicateId {
                id: item.id.clone(),
            });
        }
    }
    Ok(())
}

fn collation_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
