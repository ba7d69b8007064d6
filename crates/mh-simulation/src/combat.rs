//! Melee attacks and kill rewards.

use mh_core::{Monster, MonsterId};
use rand::Rng;

use crate::context::TickContext;
use crate::event::HuntEventKind;
use crate::loot::{announce_level_up, spawn_drops};

/// What a single swing accomplished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwingOutcome {
    /// Monsters hit.
    pub hits: usize,
    /// Monsters slain.
    pub kills: usize,
}

/// Swing at every monster within melee range.
///
/// Monsters are struck in list order. Each hit deals the player's current
/// attack power plus a random bonus in `0..=max_bonus_damage`, and a slain
/// monster is removed and pays out its rewards and drops before the next one
/// is struck. The swing itself is logged last.
pub fn attack_monsters(ctx: &mut TickContext<'_>) -> SwingOutcome {
    let origin = ctx.state.player.pos;
    let config = ctx.config;
    let combat = &config.combat;
    let targets: Vec<MonsterId> = ctx
        .state
        .monsters
        .iter()
        .filter(|m| m.pos.distance_to(origin) < combat.melee_radius)
        .map(|m| m.id)
        .collect();

    let mut outcome = SwingOutcome::default();
    for id in targets {
        let Some(index) = ctx.state.monsters.iter().position(|m| m.id == id) else {
            continue;
        };
        // A kill may have leveled the player.
        let attack = ctx.state.player.attack_power();
        let bonus = ctx.rng.random_range(0..=combat.max_bonus_damage);
        outcome.hits += 1;
        if ctx.state.monsters[index].take_damage(attack + bonus) {
            outcome.kills += 1;
            let monster = ctx.state.monsters.remove(index);
            resolve_kill(ctx, monster);
        }
    }

    if outcome.hits > 0 {
        ctx.emit(
            HuntEventKind::Swing { hits: outcome.hits },
            "You swing your sword!",
        );
    }
    outcome
}

/// Grant a slain monster's exp and gold, then roll its drops.
fn resolve_kill(ctx: &mut TickContext<'_>, monster: Monster) {
    let cap = ctx.config.gold_cap;
    let player = &mut ctx.state.player;
    let leveled = player.gain_exp(monster.exp_reward);
    player.add_gold(monster.gold_reward, cap);
    let level = player.level;

    tracing::debug!(id = %monster.id, exp = monster.exp_reward, gold = monster.gold_reward, "monster slain");
    ctx.emit(
        HuntEventKind::MonsterSlain {
            monster: monster.id,
            exp: monster.exp_reward,
            gold: monster.gold_reward,
        },
        format!(
            "Monster slain! EXP +{}, Gold +{}",
            monster.exp_reward, monster.gold_reward
        ),
    );
    if leveled {
        announce_level_up(ctx, level);
    }
    spawn_drops(ctx, monster.pos);
}
