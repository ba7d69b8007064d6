use serde::{Deserialize, Serialize};

use crate::equipment::Equipment;
use crate::position::Position;

/// What a drop gives when picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropKind {
    /// Experience orb.
    Exp,
    /// Gold pouch.
    Gold,
    /// Life gem: gold plus a small heal.
    Gem,
    /// A piece of equipment.
    Gear,
}

impl std::fmt::Display for DropKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exp => write!(f, "exp"),
            Self::Gold => write!(f, "gold"),
            Self::Gem => write!(f, "gem"),
            Self::Gear => write!(f, "gear"),
        }
    }
}

/// A collectible lying on the ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDrop {
    /// Where the drop lies.
    pub pos: Position,
    /// What the drop gives.
    pub kind: DropKind,
    /// Exp, gold, or gem value. Zero for gear.
    pub amount: u32,
    /// The item carried by a gear drop.
    pub equipment: Option<Equipment>,
}

impl ItemDrop {
    /// A non-gear drop carrying a numeric amount.
    pub fn valued(pos: Position, kind: DropKind, amount: u32) -> Self {
        Self {
            pos,
            kind,
            amount,
            equipment: None,
        }
    }

    /// A gear drop carrying an equipment item.
    pub fn gear(pos: Position, equipment: Equipment) -> Self {
        Self {
            pos,
            kind: DropKind::Gear,
            amount: 0,
            equipment: Some(equipment),
        }
    }
}
