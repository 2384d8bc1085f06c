//! Case-insensitive multi-field substring search over entity collections.
//!
//! Matching is plain substring containment over a fixed per-entity field set.
//! No tokenization or fuzzy matching; an empty or whitespace-only term is a
//! no-op filter.

use crate::inventory::client::Client;
use crate::inventory::vehicle::Vehicle;

/// Entities that expose a fixed set of searchable text fields.
pub trait Searchable {
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for Vehicle {
    fn matches(&self, needle: &str) -> bool {
        self.brand.to_lowercase().contains(needle)
            || self.model.to_lowercase().contains(needle)
            || self.year.to_string().contains(needle)
    }
}

impl Searchable for Client {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.phone.to_lowercase().contains(needle)
    }
}

/// Returns the records matching `term`, preserving the original order.
pub fn search<'a, T: Searchable>(records: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|record| record.matches(&needle)).collect()
}
