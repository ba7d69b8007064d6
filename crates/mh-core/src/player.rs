//! The player character.
//!
//! Holds the physics fields the movement step integrates, the combat stats,
//! and the leveling curve. Hit points and gold are clamped at every mutation
//! so `0 <= hp <= max_hp` holds after any call.

use serde::{Deserialize, Serialize};

use crate::equipment::{Equipment, Slot};
use crate::position::Position;

/// Where a fresh player stands: mid-arena, feet on the ground.
pub const START_POSITION: Position = Position { x: 400.0, y: 388.0 };

/// Max hp gained per level.
const LEVEL_MAX_HP: u32 = 15;
/// Hp restored on each level-up.
const LEVEL_HEAL: u32 = 20;
/// Base attack gained per level.
const LEVEL_ATTACK: u32 = 2;
/// Base defense gained per level.
const LEVEL_DEFENSE: u32 = 1;

/// The hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Current position.
    pub pos: Position,
    /// Vertical velocity; negative is upward.
    pub vy: f64,
    /// Whether the player is standing on the ground.
    pub on_ground: bool,
    /// Horizontal distance per tick while a move key is held.
    pub speed: f64,
    /// Initial upward velocity of a jump.
    pub jump_strength: f64,
    /// Current hit points.
    pub hp: u32,
    /// Maximum hit points.
    pub max_hp: u32,
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience toward the next level.
    pub exp: u32,
    /// Experience required for the next level.
    pub exp_to_next: u32,
    /// Gold carried.
    pub gold: u32,
    /// Attack before equipment bonuses.
    pub base_attack: u32,
    /// Defense before equipment bonuses.
    pub base_defense: u32,
    /// Equipped weapon, if any.
    pub weapon: Option<Equipment>,
    /// Equipped armor, if any.
    pub armor: Option<Equipment>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: START_POSITION,
            vy: 0.0,
            on_ground: true,
            speed: 4.0,
            jump_strength: 12.0,
            hp: 120,
            max_hp: 120,
            level: 1,
            exp: 0,
            exp_to_next: 30,
            gold: 0,
            base_attack: 8,
            base_defense: 2,
            weapon: None,
            armor: None,
        }
    }
}

impl Player {
    /// Create a default player standing at `pos`.
    pub fn at(pos: Position) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }

    fn equipped(&self) -> impl Iterator<Item = &Equipment> {
        self.weapon.iter().chain(self.armor.iter())
    }

    /// Base attack plus the attack bonus of every equipped item.
    pub fn attack_power(&self) -> u32 {
        self.base_attack + self.equipped().map(|e| e.attack).sum::<u32>()
    }

    /// Base defense plus the defense bonus of every equipped item.
    pub fn defense_power(&self) -> u32 {
        self.base_defense + self.equipped().map(|e| e.defense).sum::<u32>()
    }

    /// The item in the given slot.
    pub fn slot(&self, slot: Slot) -> Option<&Equipment> {
        match slot {
            Slot::Weapon => self.weapon.as_ref(),
            Slot::Armor => self.armor.as_ref(),
        }
    }

    /// Put `item` into its slot, returning whatever was there before.
    pub fn equip(&mut self, item: Equipment) -> Option<Equipment> {
        match item.slot {
            Slot::Weapon => self.weapon.replace(item),
            Slot::Armor => self.armor.replace(item),
        }
    }

    /// Restore hit points, capped at `max_hp`.
    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
    }

    /// Remove hit points, floored at zero. Returns `true` if the player is
    /// now down.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }

    /// Add gold, optionally clamped to a cap.
    pub fn add_gold(&mut self, amount: u32, cap: Option<u32>) {
        let gold = self.gold.saturating_add(amount);
        self.gold = cap.map_or(gold, |cap| gold.min(cap));
    }

    /// Remove gold, floored at zero.
    pub fn lose_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_sub(amount);
    }

    /// Accumulate experience, leveling up as many times as the total allows.
    ///
    /// Each level-up subtracts the current threshold, grows the threshold to
    /// `floor(threshold * 1.35 + 5)`, raises max hp by 15 and heals 20, and
    /// adds 2 attack and 1 defense. Returns whether at least one level-up
    /// occurred.
    pub fn gain_exp(&mut self, amount: u32) -> bool {
        self.exp = self.exp.saturating_add(amount);
        let mut leveled = false;
        while self.exp >= self.exp_to_next {
            self.exp -= self.exp_to_next;
            self.level += 1;
            self.exp_to_next = next_threshold(self.exp_to_next);
            self.max_hp += LEVEL_MAX_HP;
            self.heal(LEVEL_HEAL);
            self.base_attack += LEVEL_ATTACK;
            self.base_defense += LEVEL_DEFENSE;
            leveled = true;
        }
        leveled
    }

    /// Hit points as a fraction of maximum (0.0 to 1.0).
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }
}

fn next_threshold(current: u32) -> u32 {
    (f64::from(current) * 1.35 + 5.0).floor() as u32
}
