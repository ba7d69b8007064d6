use mh_core::{EquipOutcome, Equipment, GameState, Key, Player, Slot};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::clock::TickClock;
use crate::combat::{SwingOutcome, attack_monsters};
use crate::config::GameConfig;
use crate::context::TickContext;
use crate::error::HuntResult;
use crate::event::{EventLog, HuntEventKind};
use crate::feedback::FeedbackSystem;
use crate::loot::PickupSystem;
use crate::monsters::MonsterSystem;
use crate::movement::{self, MovementSystem};
use crate::system::System;

/// The top-level simulation orchestrator.
///
/// Owns the game state, config, clock, RNG, event log, and registered
/// systems. A presentation layer forwards key presses, calls [`tick`] on a
/// fixed cadence, and renders [`state`] and [`events`].
///
/// [`tick`]: Simulation::tick
/// [`state`]: Simulation::state
/// [`events`]: Simulation::events
pub struct Simulation {
    state: GameState,
    config: GameConfig,
    clock: TickClock,
    rng: StdRng,
    events: EventLog,
    systems: Vec<Box<dyn System>>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.clock.tick())
            .field("systems", &self.systems.len())
            .field("monsters", &self.state.monsters.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl Simulation {
    /// Start a session with the standard systems: movement, monsters,
    /// pickup, and feedback, ticked in that order.
    pub fn new(config: GameConfig) -> HuntResult<Self> {
        let mut sim = Self::without_systems(config)?;
        sim.events.push(
            0,
            HuntEventKind::Welcome,
            "Welcome to the Maple Forest! Defeat the monsters.",
        );
        sim.add_system(MovementSystem);
        sim.add_system(MonsterSystem);
        sim.add_system(PickupSystem);
        sim.add_system(FeedbackSystem);
        Ok(sim)
    }

    /// Start a session with no systems registered. The player stands at the
    /// arena's spawn point and the arena is empty.
    pub fn without_systems(config: GameConfig) -> HuntResult<Self> {
        config.validate()?;
        let player = Player::at(config.arena.spawn_point());
        Ok(Self {
            state: GameState::new(player),
            clock: TickClock::new(config.tick_ms),
            rng: StdRng::seed_from_u64(config.seed),
            events: EventLog::new(config.max_events),
            systems: Vec::new(),
            config,
        })
    }

    /// Register a system and run its init hook. Systems are ticked in
    /// registration order.
    pub fn add_system<S: System + 'static>(&mut self, mut system: S) {
        system.init(&mut self.context());
        self.systems.push(Box::new(system));
    }

    fn context(&mut self) -> TickContext<'_> {
        TickContext {
            state: &mut self.state,
            config: &self.config,
            clock: &self.clock,
            events: &mut self.events,
            rng: &mut self.rng,
        }
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        self.clock.advance();
        for system in &mut self.systems {
            let mut ctx = TickContext {
                state: &mut self.state,
                config: &self.config,
                clock: &self.clock,
                events: &mut self.events,
                rng: &mut self.rng,
            };
            system.tick(&mut ctx);
        }
    }

    /// Advance the simulation by `n` ticks.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Record a key as held and fire its press action: space jumps, `j` and
    /// `z` swing immediately.
    pub fn press_key(&mut self, key: Key) {
        self.state.keys.insert(key);
        if key.is_jump() {
            self.jump();
        }
        if key.is_attack() {
            self.attack();
        }
    }

    /// Stop holding a key.
    pub fn release_key(&mut self, key: Key) {
        self.state.keys.remove(&key);
    }

    /// Press a key by its identifier (`"left"`, `"space"`, ...). Unknown
    /// identifiers are ignored and return `false`.
    pub fn press_named(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.press_key(key);
                true
            }
            None => false,
        }
    }

    /// Release a key by its identifier. Unknown identifiers return `false`.
    pub fn release_named(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.release_key(key);
                true
            }
            None => false,
        }
    }

    /// Jump if the player is on the ground.
    pub fn jump(&mut self) -> bool {
        movement::jump(&mut self.state)
    }

    /// Swing at everything in melee range.
    pub fn attack(&mut self) -> SwingOutcome {
        attack_monsters(&mut self.context())
    }

    /// Equip the inventory item at `index`, returning any displaced item to
    /// the inventory.
    pub fn equip(&mut self, index: usize) -> HuntResult<EquipOutcome> {
        let outcome = self.state.equip(index)?;
        let label = match outcome.slot {
            Slot::Weapon => "Weapon",
            Slot::Armor => "Armor",
        };
        let description = format!("{label} equipped: {}", outcome.equipped);
        self.context().emit(
            HuntEventKind::Equipped {
                slot: outcome.slot,
                name: outcome.equipped.clone(),
            },
            description,
        );
        Ok(outcome)
    }

    /// Throw away the inventory item at `index`.
    pub fn discard(&mut self, index: usize) -> HuntResult<Equipment> {
        let item = self.state.discard(index)?;
        let description = format!("Gear discarded: {}", item.name);
        self.context().emit(
            HuntEventKind::Discarded {
                name: item.name.clone(),
            },
            description,
        );
        Ok(item)
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the game state.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The simulation clock.
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    /// The event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Names of the registered systems, in tick order.
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// The current tick number.
    pub fn current_tick(&self) -> u64 {
        self.clock.tick()
    }

    /// Extract the state, consuming the simulation.
    pub fn into_state(self) -> GameState {
        self.state
    }
}
