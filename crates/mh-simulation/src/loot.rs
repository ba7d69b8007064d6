//! Drop generation on kills and pickup on contact.

use mh_core::{DropKind, Equipment, ItemDrop, Position, Slot};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::{DropRule, GearConfig};
use crate::context::TickContext;
use crate::event::HuntEventKind;
use crate::system::System;

/// Roll every drop rule independently and place the resulting drops around
/// `origin`. Returns how many drops appeared.
pub fn spawn_drops(ctx: &mut TickContext<'_>, origin: Position) -> usize {
    let loot = &ctx.config.loot;
    let mut spawned = 0;
    for rule in &loot.rules {
        if !ctx.rng.random_bool(rule.chance) {
            continue;
        }
        let pos = drop_position(ctx.rng, origin, rule);
        let drop = match rule.kind {
            DropKind::Gear => ItemDrop::gear(pos, random_equipment(ctx.rng, &loot.gear)),
            kind => ItemDrop::valued(pos, kind, rule.amount),
        };
        ctx.state.drops.push(drop);
        spawned += 1;
    }
    spawned
}

fn drop_position(rng: &mut StdRng, origin: Position, rule: &DropRule) -> Position {
    let jitter = |rng: &mut StdRng, spread: f64| {
        if spread > 0.0 {
            rng.random_range(-spread..=spread)
        } else {
            0.0
        }
    };
    let jx = jitter(rng, rule.jitter_x);
    let jy = jitter(rng, rule.jitter_y);
    origin.offset(rule.dx + jx, rule.dy + jy)
}

/// Generate a random weapon or armor piece from the gear tables.
///
/// The slot's main stat rolls in `primary_min..=primary_max` and the off stat
/// in `0..=secondary_max`.
pub fn random_equipment(rng: &mut StdRng, gear: &GearConfig) -> Equipment {
    let slot = gear.slots.pick(rng).copied().unwrap_or(Slot::Weapon);
    let prefix = gear.prefixes.pick(rng).map_or("Plain", String::as_str);
    let names = match slot {
        Slot::Weapon => &gear.weapon_names,
        Slot::Armor => &gear.armor_names,
    };
    let base = names.pick(rng).map_or("Relic", String::as_str);
    let primary = rng.random_range(gear.primary_min..=gear.primary_max);
    let secondary = rng.random_range(0..=gear.secondary_max);

    let name = format!("{prefix} {base}");
    match slot {
        Slot::Weapon => Equipment::weapon(name, primary, secondary),
        Slot::Armor => Equipment::armor(name, secondary, primary),
    }
}

/// Apply and remove every drop within pickup range of the player. Returns
/// how many drops were collected.
pub fn collect_drops(ctx: &mut TickContext<'_>) -> usize {
    let origin = ctx.state.player.pos;
    let radius = ctx.config.loot.pickup_radius;
    let (picked, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut ctx.state.drops)
        .into_iter()
        .partition(|d| d.pos.distance_to(origin) < radius);
    ctx.state.drops = remaining;

    let count = picked.len();
    for drop in picked {
        apply_drop(ctx, drop);
    }
    count
}

fn apply_drop(ctx: &mut TickContext<'_>, drop: ItemDrop) {
    let cap = ctx.config.gold_cap;
    let player = &mut ctx.state.player;
    match drop.kind {
        DropKind::Exp => {
            let leveled = player.gain_exp(drop.amount);
            let level = player.level;
            ctx.emit(
                HuntEventKind::Pickup {
                    kind: DropKind::Exp,
                    amount: drop.amount,
                },
                format!("EXP orb +{}", drop.amount),
            );
            if leveled {
                announce_level_up(ctx, level);
            }
        }
        DropKind::Gold => {
            player.add_gold(drop.amount, cap);
            ctx.emit(
                HuntEventKind::Pickup {
                    kind: DropKind::Gold,
                    amount: drop.amount,
                },
                format!("Gold pouch +{}", drop.amount),
            );
        }
        DropKind::Gem => {
            player.add_gold(drop.amount, cap);
            player.heal(ctx.config.loot.gem_heal);
            ctx.emit(
                HuntEventKind::Pickup {
                    kind: DropKind::Gem,
                    amount: drop.amount,
                },
                "Life crystal! HP restored",
            );
        }
        DropKind::Gear => {
            // A gear drop without a payload is simply consumed.
            if let Some(item) = drop.equipment {
                ctx.emit(
                    HuntEventKind::GearLooted {
                        name: item.name.clone(),
                    },
                    format!("Gear acquired: {}", item.name),
                );
                ctx.state.inventory.push(item);
            }
        }
    }
}

/// Log a level-up line for the level just reached.
pub(crate) fn announce_level_up(ctx: &mut TickContext<'_>, level: u32) {
    tracing::debug!(level, "level up");
    ctx.emit(
        HuntEventKind::LevelUp { level },
        format!("Level up! Reached Lv.{level}"),
    );
}

/// Runs [`collect_drops`] every tick.
#[derive(Debug, Default)]
pub struct PickupSystem;

impl System for PickupSystem {
    fn name(&self) -> &str {
        "pickup"
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) {
        collect_drops(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::context::Harness;
    use crate::tables::{ARMOR_NAMES, GEAR_PREFIXES, WEAPON_NAMES};

    fn always_drop_config() -> GameConfig {
        let mut config = GameConfig::default();
        for rule in &mut config.loot.rules {
            rule.chance = 1.0;
        }
        config
    }

    #[test]
    fn certain_rules_spawn_all_four_kinds() {
        let mut h = Harness::new(always_drop_config());
        let origin = Position::new(300.0, 420.0);
        assert_eq!(spawn_drops(&mut h.ctx(), origin), 4);

        let drops = &h.state.drops;
        assert_eq!(drops[0].kind, DropKind::Exp);
        assert_eq!(drops[0].amount, 6);
        assert!((drops[0].pos.x - 300.0).abs() <= 12.0);
        assert!((drops[0].pos.y - 420.0).abs() < f64::EPSILON);

        assert_eq!(drops[1].kind, DropKind::Gold);
        assert!((drops[1].pos.x - 300.0).abs() < f64::EPSILON);
        assert!((drops[1].pos.y - 420.0).abs() <= 12.0);

        assert_eq!(drops[2].kind, DropKind::Gem);
        assert_eq!(drops[2].pos, Position::new(292.0, 416.0));

        assert_eq!(drops[3].kind, DropKind::Gear);
        assert_eq!(drops[3].pos, Position::new(306.0, 426.0));
        assert!(drops[3].equipment.is_some());
    }

    #[test]
    fn impossible_rules_spawn_nothing() {
        let mut config = GameConfig::default();
        for rule in &mut config.loot.rules {
            rule.chance = 0.0;
        }
        let mut h = Harness::new(config);
        assert_eq!(spawn_drops(&mut h.ctx(), Position::default()), 0);
        assert!(h.state.drops.is_empty());
    }

    #[test]
    fn random_equipment_stats_follow_slot() {
        let mut h = Harness::new(GameConfig::default());
        let gear = GearConfig::default();
        let (mut weapons, mut armors) = (0, 0);
        for _ in 0..300 {
            let item = random_equipment(&mut h.rng, &gear);
            let (prefix, base) = item.name.split_once(' ').unwrap();
            assert!(GEAR_PREFIXES.contains(&prefix));
            match item.slot {
                Slot::Weapon => {
                    weapons += 1;
                    assert!(WEAPON_NAMES.contains(&base));
                    assert!((3..=7).contains(&item.attack));
                    assert!(item.defense <= 2);
                }
                Slot::Armor => {
                    armors += 1;
                    assert!(ARMOR_NAMES.contains(&base));
                    assert!(item.attack <= 2);
                    assert!((3..=7).contains(&item.defense));
                }
            }
        }
        assert!(weapons > 0 && armors > 0);
    }

    #[test]
    fn collect_removes_only_drops_in_range() {
        let mut h = Harness::new(GameConfig::default());
        let p = h.state.player.pos;
        h.state
            .drops
            .push(ItemDrop::valued(p.offset(24.9, 0.0), DropKind::Gold, 8));
        h.state
            .drops
            .push(ItemDrop::valued(p.offset(25.0, 0.0), DropKind::Gold, 8));
        h.state
            .drops
            .push(ItemDrop::valued(p.offset(0.0, -40.0), DropKind::Exp, 6));

        assert_eq!(collect_drops(&mut h.ctx()), 1);
        assert_eq!(h.state.player.gold, 8);
        assert_eq!(h.state.drops.len(), 2);
        assert_eq!(h.log_lines(), vec!["Gold pouch +8"]);
    }

    #[test]
    fn gem_adds_gold_and_heals_capped() {
        let mut h = Harness::new(GameConfig::default());
        let p = h.state.player.pos;
        h.state.player.hp = 117;
        h.state
            .drops
            .push(ItemDrop::valued(p, DropKind::Gem, 12));
        collect_drops(&mut h.ctx());
        assert_eq!(h.state.player.gold, 12);
        assert_eq!(h.state.player.hp, 120);

        h.state.player.hp = 100;
        h.state
            .drops
            .push(ItemDrop::valued(p, DropKind::Gem, 12));
        collect_drops(&mut h.ctx());
        assert_eq!(h.state.player.hp, 106);
        assert_eq!(h.state.player.gold, 24);
    }

    #[test]
    fn exp_drop_levels_up_and_logs() {
        let mut h = Harness::new(GameConfig::default());
        let p = h.state.player.pos;
        h.state.player.exp = 27;
        h.state
            .drops
            .push(ItemDrop::valued(p, DropKind::Exp, 6));
        collect_drops(&mut h.ctx());
        assert_eq!(h.state.player.level, 2);
        assert_eq!(h.state.player.exp, 3);
        assert_eq!(h.log_lines(), vec!["EXP orb +6", "Level up! Reached Lv.2"]);
    }

    #[test]
    fn gear_goes_to_inventory() {
        let mut h = Harness::new(GameConfig::default());
        let p = h.state.player.pos;
        h.state
            .drops
            .push(ItemDrop::gear(p, Equipment::armor("Frost Gloves", 1, 4)));
        collect_drops(&mut h.ctx());
        assert_eq!(h.state.inventory.len(), 1);
        assert_eq!(h.state.inventory[0].name, "Frost Gloves");
        assert!(h.state.player.armor.is_none());
        assert_eq!(h.log_lines(), vec!["Gear acquired: Frost Gloves"]);
    }

    #[test]
    fn gold_cap_applies_to_pickups() {
        let mut h = Harness::new(GameConfig::default().with_gold_cap(100));
        let p = h.state.player.pos;
        h.state.player.gold = 95;
        h.state
            .drops
            .push(ItemDrop::valued(p, DropKind::Gold, 8));
        collect_drops(&mut h.ctx());
        assert_eq!(h.state.player.gold, 100);
    }
}
