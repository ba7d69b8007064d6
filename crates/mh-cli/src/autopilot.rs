//! Scripted input for headless runs.
//!
//! Each tick the autopilot equips upgrades, walks toward the nearest
//! reachable drop or monster, jumps on a fixed cadence, and swings whenever
//! a monster is in melee range.

use mh_core::{Equipment, GameState, Key, Position};
use mh_simulation::{HuntResult, Simulation};

/// Ticks between scripted jumps.
const JUMP_EVERY: u64 = 90;

/// Drops further than this are ignored in favor of monsters.
const DROP_DETOUR: f64 = 120.0;

/// Counters for what the autopilot did.
#[derive(Debug, Clone, Default)]
pub struct AutopilotStats {
    pub swings: usize,
    pub hits: usize,
    pub kills: usize,
    pub jumps: usize,
    pub equipped: usize,
    pub discarded: usize,
}

#[derive(Debug, Default)]
pub struct Autopilot {
    stats: AutopilotStats,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &AutopilotStats {
        &self.stats
    }

    /// Feed one tick of input, then advance the simulation.
    pub fn step(&mut self, sim: &mut Simulation) -> HuntResult<()> {
        self.manage_gear(sim)?;
        steer(sim);

        if sim.current_tick() % JUMP_EVERY == JUMP_EVERY / 2 && sim.jump() {
            self.stats.jumps += 1;
        }
        if monster_in_reach(sim) {
            let outcome = sim.attack();
            self.stats.swings += 1;
            self.stats.hits += outcome.hits;
            self.stats.kills += outcome.kills;
        }

        sim.tick();
        Ok(())
    }

    /// Run `ticks` steps.
    pub fn drive(&mut self, sim: &mut Simulation, ticks: u64) -> HuntResult<()> {
        for _ in 0..ticks {
            self.step(sim)?;
        }
        Ok(())
    }

    /// Equip every upgrade, then throw away whatever can no longer improve
    /// a slot.
    fn manage_gear(&mut self, sim: &mut Simulation) -> HuntResult<()> {
        while let Some(index) = best_upgrade(sim.state()) {
            sim.equip(index)?;
            self.stats.equipped += 1;
        }
        while let Some(index) = first_obsolete(sim.state()) {
            sim.discard(index)?;
            self.stats.discarded += 1;
        }
        Ok(())
    }
}

fn slot_power(state: &GameState, item: &Equipment) -> u32 {
    state.player.slot(item.slot).map_or(0, Equipment::power)
}

fn best_upgrade(state: &GameState) -> Option<usize> {
    state
        .inventory
        .iter()
        .enumerate()
        .filter(|(_, item)| item.power() > slot_power(state, item))
        .max_by_key(|(_, item)| item.power())
        .map(|(index, _)| index)
}

fn first_obsolete(state: &GameState) -> Option<usize> {
    state
        .inventory
        .iter()
        .position(|item| item.power() <= slot_power(state, item))
}

fn nearest(points: impl Iterator<Item = Position>, from: Position) -> Option<Position> {
    points.min_by(|a, b| a.distance_to(from).total_cmp(&b.distance_to(from)))
}

fn steer(sim: &mut Simulation) {
    let state = sim.state();
    let me = state.player.pos;
    let ground = sim.config().arena.ground_limit();
    let reach = sim.config().loot.pickup_radius;

    let drop = nearest(
        state
            .drops
            .iter()
            .map(|d| d.pos)
            .filter(|p| (p.y - ground).abs() < reach),
        me,
    )
    .filter(|p| p.distance_to(me) < DROP_DETOUR);
    let target = drop.or_else(|| nearest(state.monsters.iter().map(|m| m.pos), me));

    let speed = state.player.speed;
    let wanted = target.and_then(|t| {
        let dx = t.x - me.x;
        if dx > speed {
            Some(Key::Right)
        } else if dx < -speed {
            Some(Key::Left)
        } else {
            None
        }
    });

    for key in [Key::Left, Key::Right] {
        if wanted == Some(key) {
            sim.press_key(key);
        } else {
            sim.release_key(key);
        }
    }
}

fn monster_in_reach(sim: &Simulation) -> bool {
    let me = sim.state().player.pos;
    let radius = sim.config().combat.melee_radius;
    sim.state()
        .monsters
        .iter()
        .any(|m| m.pos.distance_to(me) < radius)
}
