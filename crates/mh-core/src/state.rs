use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::drops::ItemDrop;
use crate::equipment::{Equipment, Slot};
use crate::error::{CoreError, CoreResult};
use crate::input::Key;
use crate::monster::{Monster, MonsterId};
use crate::player::Player;

/// The result of moving an inventory item into a player slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipOutcome {
    /// The slot that was filled.
    pub slot: Slot,
    /// Name of the newly equipped item.
    pub equipped: String,
    /// Name of the item that went back to the inventory, if any.
    pub replaced: Option<String>,
}

/// Everything that changes during a play session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The hero.
    pub player: Player,
    /// Live monsters.
    pub monsters: Vec<Monster>,
    /// Drops waiting to be picked up.
    pub drops: Vec<ItemDrop>,
    /// Unequipped gear, in pickup order.
    pub inventory: Vec<Equipment>,
    /// Keys currently held down.
    pub keys: BTreeSet<Key>,
    /// Ticks left on the "combo" feedback banner. Cosmetic only.
    pub combo_timer: u32,
    next_monster_id: u64,
}

impl GameState {
    /// Create a state around an existing player with an empty arena.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            ..Self::default()
        }
    }

    /// Allocate the next session-unique monster id.
    pub fn allocate_monster_id(&mut self) -> MonsterId {
        self.next_monster_id += 1;
        MonsterId(self.next_monster_id)
    }

    /// Find a live monster by id.
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    /// Horizontal input direction from held keys: -1, 0, or 1. Opposite
    /// directions cancel.
    pub fn horizontal_input(&self) -> f64 {
        let left = self.keys.iter().any(|k| k.moves_left());
        let right = self.keys.iter().any(|k| k.moves_right());
        match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    /// Move the inventory item at `index` into the slot its tag names.
    /// The previously equipped item, if any, is appended to the inventory.
    pub fn equip(&mut self, index: usize) -> CoreResult<EquipOutcome> {
        let item = self.take_inventory(index)?;
        let slot = item.slot;
        let equipped = item.name.clone();
        let replaced = self.player.equip(item).map(|old| {
            let name = old.name.clone();
            self.inventory.push(old);
            name
        });
        Ok(EquipOutcome {
            slot,
            equipped,
            replaced,
        })
    }

    /// Remove the inventory item at `index` permanently.
    pub fn discard(&mut self, index: usize) -> CoreResult<Equipment> {
        self.take_inventory(index)
    }

    fn take_inventory(&mut self, index: usize) -> CoreResult<Equipment> {
        if index >= self.inventory.len() {
            return Err(CoreError::InventoryIndex {
                index,
                len: self.inventory.len(),
            });
        }
        Ok(self.inventory.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_gear() -> GameState {
        let mut state = GameState::default();
        state.inventory.push(Equipment::weapon("Gale Bow", 4, 0));
        state.inventory.push(Equipment::weapon("Flame Sword", 6, 1));
        state.inventory.push(Equipment::armor("Frost Cloak", 1, 5));
        state
    }

    #[test]
    fn equip_into_empty_slot_shrinks_inventory() {
        let mut state = state_with_gear();
        let outcome = state.equip(0).unwrap();
        assert_eq!(outcome.slot, Slot::Weapon);
        assert_eq!(outcome.equipped, "Gale Bow");
        assert!(outcome.replaced.is_none());
        assert_eq!(state.inventory.len(), 2);
        assert_eq!(state.player.weapon.as_ref().unwrap().name, "Gale Bow");
    }

    #[test]
    fn equip_second_weapon_swaps() {
        let mut state = state_with_gear();
        state.equip(0).unwrap();
        let before = state.inventory.len();
        // "Flame Sword" is now at index 0.
        let outcome = state.equip(0).unwrap();
        assert_eq!(outcome.replaced.as_deref(), Some("Gale Bow"));
        assert_eq!(state.inventory.len(), before);
        assert_eq!(state.player.weapon.as_ref().unwrap().name, "Flame Sword");
        assert!(state.inventory.iter().any(|e| e.name == "Gale Bow"));
    }

    #[test]
    fn equip_armor_uses_armor_slot() {
        let mut state = state_with_gear();
        let outcome = state.equip(2).unwrap();
        assert_eq!(outcome.slot, Slot::Armor);
        assert!(state.player.weapon.is_none());
        assert_eq!(state.player.armor.as_ref().unwrap().name, "Frost Cloak");
    }

    #[test]
    fn discard_removes_permanently() {
        let mut state = state_with_gear();
        let item = state.discard(1).unwrap();
        assert_eq!(item.name, "Flame Sword");
        assert_eq!(state.inventory.len(), 2);
        assert!(state.inventory.iter().all(|e| e.name != "Flame Sword"));
    }

    #[test]
    fn out_of_range_index_leaves_state_untouched() {
        let mut state = state_with_gear();
        let snapshot = state.clone();
        assert_eq!(
            state.equip(3),
            Err(CoreError::InventoryIndex { index: 3, len: 3 })
        );
        assert!(state.discard(7).is_err());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn horizontal_input_cancels() {
        let mut state = GameState::default();
        assert!((state.horizontal_input() - 0.0).abs() < f64::EPSILON);
        state.keys.insert(Key::A);
        assert!((state.horizontal_input() + 1.0).abs() < f64::EPSILON);
        state.keys.insert(Key::Right);
        assert!((state.horizontal_input() - 0.0).abs() < f64::EPSILON);
        state.keys.remove(&Key::A);
        assert!((state.horizontal_input() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn monster_ids_are_unique() {
        let mut state = GameState::default();
        let a = state.allocate_monster_id();
        let b = state.allocate_monster_id();
        assert_ne!(a, b);
    }

    #[test]
    fn state_serializes_to_json() {
        let state = state_with_gear();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
