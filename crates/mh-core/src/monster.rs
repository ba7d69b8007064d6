use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Unique identifier for a monster within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u64);

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A hostile creature that chases the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Session-unique identifier.
    pub id: MonsterId,
    /// Current position.
    pub pos: Position,
    /// Current hit points.
    pub hp: u32,
    /// Hit points at spawn.
    pub max_hp: u32,
    /// Spawn level the stats were derived from.
    pub level: u32,
    /// Contact damage before the player's defense is applied.
    pub attack: u32,
    /// Experience granted when slain.
    pub exp_reward: u32,
    /// Gold granted when slain.
    pub gold_reward: u32,
    /// Distance covered per tick while chasing.
    pub speed: f64,
}

impl Monster {
    /// Build a monster of the given level using the standard stat curve.
    pub fn from_level(id: MonsterId, level: u32, pos: Position, speed: f64) -> Self {
        let hp = 20 + level * 8;
        Self {
            id,
            pos,
            hp,
            max_hp: hp,
            level,
            attack: 4 + level * 2,
            exp_reward: 8 + level * 4,
            gold_reward: 6 + level * 3,
            speed,
        }
    }

    /// Apply damage, flooring hit points at zero. Returns `true` if the
    /// monster is now dead.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.is_dead()
    }

    /// Returns true once hit points reach zero.
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Remaining health as a fraction of maximum (0.0 to 1.0).
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }
}
