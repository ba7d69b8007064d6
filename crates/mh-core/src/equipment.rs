//! Equipment items and the player slots they attach to.
//!
//! Every item carries an explicit [`Slot`] tag. Where an item goes when
//! equipped is decided by that tag, never by inspecting its display name.

use serde::{Deserialize, Serialize};

/// An equipment attachment point on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Held weapon. Mostly contributes attack.
    Weapon,
    /// Worn armor (cloaks, plate, boots, gloves). Mostly contributes defense.
    Armor,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
        }
    }
}

/// A piece of gear. Immutable once created; ownership moves between the
/// inventory, a player slot, and a pending drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Display name, e.g. "Flame Sword".
    pub name: String,
    /// Which slot this item occupies when equipped.
    pub slot: Slot,
    /// Attack bonus granted while equipped.
    pub attack: u32,
    /// Defense bonus granted while equipped.
    pub defense: u32,
}

impl Equipment {
    /// Create an equipment item.
    pub fn new(name: impl Into<String>, slot: Slot, attack: u32, defense: u32) -> Self {
        Self {
            name: name.into(),
            slot,
            attack,
            defense,
        }
    }

    /// Create a weapon.
    pub fn weapon(name: impl Into<String>, attack: u32, defense: u32) -> Self {
        Self::new(name, Slot::Weapon, attack, defense)
    }

    /// Create an armor piece.
    pub fn armor(name: impl Into<String>, attack: u32, defense: u32) -> Self {
        Self::new(name, Slot::Armor, attack, defense)
    }

    /// Sum of both bonuses, used to compare items of the same slot.
    pub fn power(&self) -> u32 {
        self.attack + self.defense
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (attack +{}, defense +{})",
            self.name, self.attack, self.defense
        )
    }
}
