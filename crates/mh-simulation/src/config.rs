//! Configuration for a play session.
//!
//! Every field has a default matching the classic tuning, and every struct
//! is `#[serde(default)]`, so a JSON file only needs the fields it changes.

use mh_core::{DropKind, Position, Slot};
use serde::{Deserialize, Serialize};

use crate::error::{HuntError, HuntResult};
use crate::tables::{ARMOR_NAMES, GEAR_PREFIXES, WEAPON_NAMES, WeightedTable, word_table};

/// Arena bounds and physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Leftmost x the player may stand at.
    pub min_x: f64,
    /// Rightmost x the player may stand at.
    pub max_x: f64,
    /// Y coordinate of the ground surface.
    pub ground_y: f64,
    /// Distance from the player's anchor to their feet.
    pub player_ground_offset: f64,
    /// Smallest y the player may reach (the ceiling).
    pub ceiling_y: f64,
    /// Added to vertical velocity every tick.
    pub gravity: f64,
    /// X coordinate the player starts and respawns at.
    pub spawn_x: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            min_x: 20.0,
            max_x: 700.0,
            ground_y: 440.0,
            player_ground_offset: 52.0,
            ceiling_y: 40.0,
            gravity: 0.6,
            spawn_x: 400.0,
        }
    }
}

impl ArenaConfig {
    /// The y the player rests at when standing on the ground.
    pub fn ground_limit(&self) -> f64 {
        self.ground_y - self.player_ground_offset
    }

    /// Where the player starts and respawns.
    pub fn spawn_point(&self) -> Position {
        Position::new(self.spawn_x, self.ground_limit())
    }
}

/// Monster spawning and chasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterConfig {
    /// Monsters spawned when the session starts.
    pub initial_count: usize,
    /// The population is refilled to this count after every monster update.
    pub population_floor: usize,
    /// Highest spawn level at player level 1. Grows by one every two
    /// player levels.
    pub base_max_level: u32,
    /// Leftmost spawn x.
    pub spawn_min_x: f64,
    /// Rightmost spawn x.
    pub spawn_max_x: f64,
    /// How far above the ground monsters spawn.
    pub spawn_height: f64,
    /// Slowest chase speed.
    pub min_speed: f64,
    /// Fastest chase speed.
    pub max_speed: f64,
    /// Distance under which a monster deals contact damage.
    pub contact_radius: f64,
    /// Floor applied to the monster-to-player distance before normalizing.
    pub min_distance: f64,
}

impl Default for MonsterConfig {
    fn default() -> Self {
        Self {
            initial_count: 4,
            population_floor: 6,
            base_max_level: 3,
            spawn_min_x: 80.0,
            spawn_max_x: 640.0,
            spawn_height: 20.0,
            min_speed: 1.2,
            max_speed: 2.0,
            contact_radius: 26.0,
            min_distance: 1.0,
        }
    }
}

/// Melee combat and defeat penalties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Distance under which a swing connects.
    pub melee_radius: f64,
    /// Largest random bonus added to each hit.
    pub max_bonus_damage: u32,
    /// Ticks the combo banner stays up after the player is hit.
    pub combo_ticks: u32,
    /// Gold lost when the player is defeated.
    pub defeat_gold_penalty: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            melee_radius: 60.0,
            max_bonus_damage: 4,
            combo_ticks: 15,
            defeat_gold_penalty: 20,
        }
    }
}

/// One independent roll made when a monster dies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropRule {
    /// What the drop gives.
    pub kind: DropKind,
    /// Probability in `[0, 1]` that this drop appears.
    pub chance: f64,
    /// Exp, gold, or gem value. Ignored for gear.
    pub amount: u32,
    /// Fixed horizontal offset from the death spot.
    pub dx: f64,
    /// Fixed vertical offset from the death spot.
    pub dy: f64,
    /// Uniform horizontal jitter in `[-jitter_x, jitter_x]`.
    pub jitter_x: f64,
    /// Uniform vertical jitter in `[-jitter_y, jitter_y]`.
    pub jitter_y: f64,
}

impl DropRule {
    fn at(kind: DropKind, chance: f64, amount: u32, dx: f64, dy: f64) -> Self {
        Self {
            kind,
            chance,
            amount,
            dx,
            dy,
            jitter_x: 0.0,
            jitter_y: 0.0,
        }
    }
}

/// Random gear generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearConfig {
    /// Which slot a generated item fills.
    pub slots: WeightedTable<Slot>,
    /// First word of every item name.
    pub prefixes: WeightedTable<String>,
    /// Second word for weapons.
    pub weapon_names: WeightedTable<String>,
    /// Second word for armor.
    pub armor_names: WeightedTable<String>,
    /// Lowest roll for the slot's main stat (attack for weapons).
    pub primary_min: u32,
    /// Highest roll for the slot's main stat.
    pub primary_max: u32,
    /// Highest roll for the off stat. The lowest is always zero.
    pub secondary_max: u32,
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            slots: WeightedTable::new(vec![(Slot::Weapon, 1), (Slot::Armor, 1)]),
            prefixes: word_table(GEAR_PREFIXES),
            weapon_names: word_table(WEAPON_NAMES),
            armor_names: word_table(ARMOR_NAMES),
            primary_min: 3,
            primary_max: 7,
            secondary_max: 2,
        }
    }
}

/// Drops and pickups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LootConfig {
    /// Distance under which the player picks a drop up.
    pub pickup_radius: f64,
    /// Hp restored by a gem.
    pub gem_heal: u32,
    /// Rolls made on every kill, in order.
    pub rules: Vec<DropRule>,
    /// Gear generation tables.
    pub gear: GearConfig,
}

impl Default for LootConfig {
    fn default() -> Self {
        Self {
            pickup_radius: 25.0,
            gem_heal: 6,
            rules: vec![
                DropRule {
                    jitter_x: 12.0,
                    ..DropRule::at(DropKind::Exp, 0.75, 6, 0.0, 0.0)
                },
                DropRule {
                    jitter_y: 12.0,
                    ..DropRule::at(DropKind::Gold, 0.7, 8, 0.0, 0.0)
                },
                DropRule::at(DropKind::Gem, 0.45, 12, -8.0, -4.0),
                DropRule::at(DropKind::Gear, 0.35, 0, 6.0, 6.0),
            ],
            gear: GearConfig::default(),
        }
    }
}

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for deterministic sessions.
    pub seed: u64,
    /// Real-time length of one tick in milliseconds.
    pub tick_ms: u64,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
    /// Upper bound on carried gold. `None` leaves gold uncapped.
    pub gold_cap: Option<u32>,
    /// Arena bounds and physics.
    pub arena: ArenaConfig,
    /// Monster spawning and chasing.
    pub monsters: MonsterConfig,
    /// Melee combat.
    pub combat: CombatConfig,
    /// Drops and pickups.
    pub loot: LootConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_ms: 40,
            max_events: 0,
            gold_cap: None,
            arena: ArenaConfig::default(),
            monsters: MonsterConfig::default(),
            combat: CombatConfig::default(),
            loot: LootConfig::default(),
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the tick length in milliseconds.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Cap carried gold.
    pub fn with_gold_cap(mut self, cap: u32) -> Self {
        self.gold_cap = Some(cap);
        self
    }

    /// Check that every range is non-empty and every probability is valid.
    pub fn validate(&self) -> HuntResult<()> {
        let invalid = |msg: String| -> HuntResult<()> { Err(HuntError::InvalidConfig(msg)) };

        if self.tick_ms == 0 {
            return invalid("tick_ms must be positive".into());
        }

        let arena = &self.arena;
        if arena.min_x > arena.max_x {
            return invalid(format!(
                "arena.min_x ({}) exceeds arena.max_x ({})",
                arena.min_x, arena.max_x
            ));
        }
        if arena.ceiling_y > arena.ground_limit() {
            return invalid(format!(
                "arena.ceiling_y ({}) is below the ground limit ({})",
                arena.ceiling_y,
                arena.ground_limit()
            ));
        }

        let monsters = &self.monsters;
        if monsters.spawn_min_x > monsters.spawn_max_x {
            return invalid("monsters.spawn_min_x exceeds monsters.spawn_max_x".into());
        }
        if monsters.min_speed > monsters.max_speed {
            return invalid("monsters.min_speed exceeds monsters.max_speed".into());
        }
        if monsters.base_max_level == 0 {
            return invalid("monsters.base_max_level must be at least 1".into());
        }
        if monsters.min_distance <= 0.0 {
            return invalid("monsters.min_distance must be positive".into());
        }

        for (name, radius) in [
            ("monsters.contact_radius", monsters.contact_radius),
            ("combat.melee_radius", self.combat.melee_radius),
            ("loot.pickup_radius", self.loot.pickup_radius),
        ] {
            if radius < 0.0 {
                return invalid(format!("{name} must not be negative"));
            }
        }

        for rule in &self.loot.rules {
            if !(0.0..=1.0).contains(&rule.chance) {
                return invalid(format!(
                    "drop chance for {} must be within [0, 1], got {}",
                    rule.kind, rule.chance
                ));
            }
            if rule.jitter_x < 0.0 || rule.jitter_y < 0.0 {
                return invalid(format!("drop jitter for {} must not be negative", rule.kind));
            }
        }

        let gear = &self.loot.gear;
        if gear.primary_min > gear.primary_max {
            return invalid("loot.gear.primary_min exceeds loot.gear.primary_max".into());
        }
        for (name, weight) in [
            ("slots", gear.slots.total_weight()),
            ("prefixes", gear.prefixes.total_weight()),
            ("weapon_names", gear.weapon_names.total_weight()),
            ("armor_names", gear.armor_names.total_weight()),
        ] {
            if weight == 0 {
                return invalid(format!("loot.gear.{name} needs at least one weighted entry"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.tick_ms, 40);
        assert_eq!(config.max_events, 0);
        assert!(config.gold_cap.is_none());
        assert_eq!(config.monsters.population_floor, 6);
        assert!((config.loot.pickup_radius - 25.0).abs() < f64::EPSILON);
        assert_eq!(config.loot.rules.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_tick_ms(16)
            .with_max_events(500)
            .with_gold_cap(300);
        assert_eq!(config.seed, 123);
        assert_eq!(config.tick_ms, 16);
        assert_eq!(config.max_events, 500);
        assert_eq!(config.gold_cap, Some(300));
    }

    #[test]
    fn arena_ground_limit_and_spawn() {
        let arena = ArenaConfig::default();
        assert!((arena.ground_limit() - 388.0).abs() < f64::EPSILON);
        assert_eq!(arena.spawn_point(), Position::new(400.0, 388.0));
    }

    #[test]
    fn default_drop_rules_match_classic_tuning() {
        let rules = LootConfig::default().rules;
        let kinds: Vec<_> = rules.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![DropKind::Exp, DropKind::Gold, DropKind::Gem, DropKind::Gear]
        );
        assert!((rules[0].chance - 0.75).abs() < f64::EPSILON);
        assert!((rules[0].jitter_x - 12.0).abs() < f64::EPSILON);
        assert!((rules[1].jitter_y - 12.0).abs() < f64::EPSILON);
        assert_eq!(rules[2].amount, 12);
        assert!((rules[3].dx - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_rejects_bad_probability() {
        let mut config = GameConfig::default();
        config.loot.rules[0].chance = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("drop chance for exp"));
    }

    #[test]
    fn validate_rejects_inverted_ranges() {
        let mut config = GameConfig::default();
        config.monsters.min_speed = 3.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.arena.min_x = 800.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.loot.gear.primary_min = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_tables_and_zero_tick() {
        let mut config = GameConfig::default();
        config.loot.gear.prefixes = WeightedTable::new(Vec::new());
        assert!(config.validate().is_err());

        let config = GameConfig::default().with_tick_ms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "seed": 7, "monsters": { "population_floor": 9 } }"#)
                .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.monsters.population_floor, 9);
        assert_eq!(config.monsters.initial_count, 4);
        assert_eq!(config.combat, CombatConfig::default());
    }
}
