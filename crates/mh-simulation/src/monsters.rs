//! Monster spawning, chasing, and contact damage.

use mh_core::{GameState, Monster, Position};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::context::TickContext;
use crate::event::HuntEventKind;
use crate::system::System;

/// Roll a new monster scaled to the player's level.
///
/// Spawn level is uniform in `1..=base_max_level + player_level / 2`; stats
/// follow [`Monster::from_level`].
pub fn create_monster(state: &mut GameState, config: &GameConfig, rng: &mut StdRng) -> Monster {
    let mc = &config.monsters;
    let max_level = mc.base_max_level + state.player.level / 2;
    let level = rng.random_range(1..=max_level);
    let speed = rng.random_range(mc.min_speed..=mc.max_speed);
    let x = rng.random_range(mc.spawn_min_x..=mc.spawn_max_x);
    let y = config.arena.ground_y - mc.spawn_height;

    let id = state.allocate_monster_id();
    tracing::debug!(%id, level, x, speed, "monster spawned");
    Monster::from_level(id, level, Position::new(x, y), speed)
}

/// Spawn the opening wave of monsters.
pub fn spawn_initial_monsters(ctx: &mut TickContext<'_>) {
    for _ in 0..ctx.config.monsters.initial_count {
        let monster = create_monster(ctx.state, ctx.config, ctx.rng);
        ctx.state.monsters.push(monster);
    }
}

/// Spawn monsters until the population reaches the configured floor.
pub fn refill_population(ctx: &mut TickContext<'_>) {
    while ctx.state.monsters.len() < ctx.config.monsters.population_floor {
        let monster = create_monster(ctx.state, ctx.config, ctx.rng);
        ctx.state.monsters.push(monster);
    }
}

/// Move every monster one step toward the player and resolve contact
/// damage, then refill the population.
///
/// Damage is the monster's attack minus the player's defense, never less
/// than 1. If the player goes down, they respawn and the remaining monsters
/// skip this tick.
pub fn update_monsters(ctx: &mut TickContext<'_>) {
    let config = ctx.config;
    let mc = &config.monsters;

    for i in 0..ctx.state.monsters.len() {
        let target = ctx.state.player.pos;
        let monster = &mut ctx.state.monsters[i];

        let dx = target.x - monster.pos.x;
        let dy = target.y - monster.pos.y;
        let dist = dx.hypot(dy).max(mc.min_distance);
        monster.pos.x += monster.speed * dx / dist;
        monster.pos.y += monster.speed * dy / dist;

        if dist >= mc.contact_radius {
            continue;
        }

        let attack = monster.attack;
        let player = &mut ctx.state.player;
        let damage = attack.saturating_sub(player.defense_power()).max(1);
        let downed = player.take_damage(damage);
        ctx.state.combo_timer = config.combat.combo_ticks;

        if downed {
            defeat_player(ctx);
            break;
        }
    }

    refill_population(ctx);
}

/// Respawn a downed player: full heal, gold penalty, back to the spawn
/// point, and every pending drop is lost.
fn defeat_player(ctx: &mut TickContext<'_>) {
    let spawn = ctx.config.arena.spawn_point();
    let penalty = ctx.config.combat.defeat_gold_penalty;
    let player = &mut ctx.state.player;

    let gold_lost = penalty.min(player.gold);
    player.hp = player.max_hp;
    player.lose_gold(penalty);
    player.pos = spawn;
    player.vy = 0.0;
    player.on_ground = true;
    ctx.state.drops.clear();

    tracing::info!(tick = ctx.tick(), gold_lost, "player defeated");
    ctx.emit(
        HuntEventKind::PlayerDefeated { gold_lost },
        "The hero has fallen! Rest up and try again.",
    );
}

/// Spawns the opening wave on init and runs [`update_monsters`] every tick.
#[derive(Debug, Default)]
pub struct MonsterSystem;

impl System for MonsterSystem {
    fn name(&self) -> &str {
        "monsters"
    }

    fn init(&mut self, ctx: &mut TickContext<'_>) {
        spawn_initial_monsters(ctx);
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) {
        update_monsters(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Harness;
    use mh_core::{DropKind, Equipment, ItemDrop, MonsterId};

    fn monster_at(harness: &mut Harness, pos: Position, level: u32) -> MonsterId {
        let id = harness.state.allocate_monster_id();
        harness
            .state
            .monsters
            .push(Monster::from_level(id, level, pos, 1.5));
        id
    }

    #[test]
    fn create_monster_respects_config_ranges() {
        let mut h = Harness::new(GameConfig::default());
        for _ in 0..200 {
            let m = create_monster(&mut h.state, &h.config, &mut h.rng);
            assert!((1..=3).contains(&m.level));
            assert!((1.2..=2.0).contains(&m.speed));
            assert!((80.0..=640.0).contains(&m.pos.x));
            assert!((m.pos.y - 420.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn spawn_level_scales_with_player() {
        let mut h = Harness::new(GameConfig::default());
        h.state.player.level = 8;
        let max = (0..500)
            .map(|_| create_monster(&mut h.state, &h.config, &mut h.rng).level)
            .max()
            .unwrap();
        assert!(max > 3 && max <= 7);
    }

    #[test]
    fn monsters_step_toward_player() {
        let mut h = Harness::new(GameConfig::default());
        let id = monster_at(&mut h, Position::new(200.0, 388.0), 1);
        update_monsters(&mut h.ctx());
        let m = h.state.monster(id).unwrap();
        assert!((m.pos.x - 201.5).abs() < 1e-9);
        assert!((m.pos.y - 388.0).abs() < 1e-9);
    }

    #[test]
    fn monster_on_top_of_player_does_not_divide_by_zero() {
        let mut h = Harness::new(GameConfig::default());
        let pos = h.state.player.pos;
        let id = monster_at(&mut h, pos, 1);
        update_monsters(&mut h.ctx());
        let m = h.state.monster(id).unwrap();
        assert!(m.pos.x.is_finite() && m.pos.y.is_finite());
        // Contact at distance 0 still hurts.
        assert!(h.state.player.hp < h.state.player.max_hp);
    }

    #[test]
    fn contact_damage_subtracts_defense() {
        let mut h = Harness::new(GameConfig::default());
        // Level 3: attack 10. Player defense 2.
        monster_at(&mut h, Position::new(410.0, 388.0), 3);
        update_monsters(&mut h.ctx());
        assert_eq!(h.state.player.hp, 112);
        assert_eq!(h.state.combo_timer, 15);
    }

    #[test]
    fn contact_damage_is_at_least_one() {
        let mut h = Harness::new(GameConfig::default());
        h.state
            .player
            .equip(Equipment::armor("Starlight Plate Armor", 0, 50));
        monster_at(&mut h, Position::new(410.0, 388.0), 1);
        update_monsters(&mut h.ctx());
        assert_eq!(h.state.player.hp, 119);
    }

    #[test]
    fn distant_monster_deals_no_damage() {
        let mut h = Harness::new(GameConfig::default());
        monster_at(&mut h, Position::new(100.0, 388.0), 3);
        update_monsters(&mut h.ctx());
        assert_eq!(h.state.player.hp, 120);
        assert_eq!(h.state.combo_timer, 0);
    }

    #[test]
    fn defeat_respawns_and_skips_remaining_monsters() {
        let mut h = Harness::new(GameConfig::default());
        h.state.player.hp = 3;
        h.state.player.gold = 50;
        h.state.player.pos = Position::new(300.0, 388.0);
        h.state
            .drops
            .push(ItemDrop::valued(Position::new(100.0, 400.0), DropKind::Gold, 8));
        monster_at(&mut h, Position::new(305.0, 388.0), 3);
        let second = monster_at(&mut h, Position::new(500.0, 388.0), 1);

        update_monsters(&mut h.ctx());

        let p = &h.state.player;
        assert_eq!(p.hp, p.max_hp);
        assert_eq!(p.gold, 30);
        assert_eq!(p.pos, Position::new(400.0, 388.0));
        assert!(p.on_ground);
        assert!(h.state.drops.is_empty());
        // The second monster never moved this tick.
        assert_eq!(h.state.monster(second).unwrap().pos, Position::new(500.0, 388.0));
        assert!(
            h.events
                .events()
                .iter()
                .any(|e| e.kind == HuntEventKind::PlayerDefeated { gold_lost: 20 })
        );
    }

    #[test]
    fn defeat_gold_penalty_floors_at_zero() {
        let mut h = Harness::new(GameConfig::default());
        h.state.player.hp = 1;
        h.state.player.gold = 5;
        monster_at(&mut h, Position::new(405.0, 388.0), 2);
        update_monsters(&mut h.ctx());
        assert_eq!(h.state.player.gold, 0);
        assert_eq!(
            h.events.events()[0].kind,
            HuntEventKind::PlayerDefeated { gold_lost: 5 }
        );
    }

    #[test]
    fn population_is_refilled_to_floor() {
        let mut h = Harness::new(GameConfig::default());
        assert!(h.state.monsters.is_empty());
        update_monsters(&mut h.ctx());
        assert_eq!(h.state.monsters.len(), 6);

        h.state.monsters.truncate(1);
        update_monsters(&mut h.ctx());
        assert_eq!(h.state.monsters.len(), 6);
    }

    #[test]
    fn population_above_floor_is_kept() {
        let mut h = Harness::new(GameConfig::default());
        for i in 0..8 {
            monster_at(&mut h, Position::new(80.0 + f64::from(i), 420.0), 1);
        }
        update_monsters(&mut h.ctx());
        assert_eq!(h.state.monsters.len(), 8);
    }

    #[test]
    fn init_spawns_opening_wave() {
        let mut h = Harness::new(GameConfig::default());
        MonsterSystem.init(&mut h.ctx());
        assert_eq!(h.state.monsters.len(), 4);
    }
}
