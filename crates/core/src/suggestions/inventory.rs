//! Pantry inventory normalization

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::pantry::PantryItem;

/// Lower-cased, deduplicated set of ingredient names usable on a given date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PantryInventory {
    names: HashSet<String>,
    expired: usize,
}

impl PantryInventory {
    /// Build the inventory from raw pantry records, dropping anything that expired before `as_of`.
    pub fn from_items<'a, I>(items: I, as_of: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a PantryItem>,
    {
        let mut names = HashSet::new();
        let mut expired = 0;

        for item in items {
            if item.is_available_on(as_of) {
                names.insert(item.name.to_lowercase());
            } else {
                expired += 1;
            }
        }

        Self { names, expired }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, ingredient: &str) -> bool {
        self.names.contains(&ingredient.to_lowercase())
    }

    /// Number of distinct available names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Pantry records skipped because they expired before the evaluation date
    pub fn expired_count(&self) -> usize {
        self.expired
    }
}
