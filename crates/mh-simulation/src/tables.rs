//! Weighted outcome tables.
//!
//! Every weighted choice in the game (which slot a gear drop fills, which
//! name parts it gets) is a [`WeightedTable`] consumed by [`WeightedTable::pick`].
//! Tuning lives in table data, not in control flow.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// A list of outcomes with relative integer weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTable<T> {
    entries: Vec<(T, u32)>,
}

impl<T> WeightedTable<T> {
    /// Create a table from `(outcome, weight)` pairs.
    pub fn new(entries: Vec<(T, u32)>) -> Self {
        Self { entries }
    }

    /// Create a table where every outcome has weight 1.
    pub fn uniform(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            entries: items.into_iter().map(|item| (item, 1)).collect(),
        }
    }

    /// Pick one outcome with probability proportional to its weight.
    /// Returns `None` if the table is empty or all weights are zero.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.entries
            .choose_weighted(rng, |entry| entry.1)
            .ok()
            .map(|entry| &entry.0)
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|(_, w)| u64::from(*w)).sum()
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no outcomes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(outcome, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u32)> {
        self.entries.iter().map(|(item, w)| (item, *w))
    }
}

/// Name prefixes shared by all gear.
pub const GEAR_PREFIXES: &[&str] = &["Shining", "Sturdy", "Flame", "Frost", "Gale", "Starlight"];

/// Base names for weapons.
pub const WEAPON_NAMES: &[&str] = &["Sword", "Spear", "Bow", "Demon Blade", "Greatsword"];

/// Base names for armor.
pub const ARMOR_NAMES: &[&str] = &["Cloak", "Plate Armor", "Boots", "Gloves"];

/// Build a uniform table of owned strings from a word list.
pub fn word_table(words: &[&str]) -> WeightedTable<String> {
    WeightedTable::uniform(words.iter().map(|w| (*w).to_string()))
}
