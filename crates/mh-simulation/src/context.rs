use mh_core::GameState;
use rand::rngs::StdRng;

use crate::clock::TickClock;
use crate::config::GameConfig;
use crate::event::{EventLog, HuntEventKind};

/// Mutable context passed to each system during a tick.
pub struct TickContext<'a> {
    /// The session state being advanced.
    pub state: &'a mut GameState,
    /// Session tuning.
    pub config: &'a GameConfig,
    /// The simulation clock.
    pub clock: &'a TickClock,
    /// Player-facing log lines.
    pub events: &'a mut EventLog,
    /// The session's seeded RNG.
    pub rng: &'a mut StdRng,
}

impl TickContext<'_> {
    /// Emit a game event at the current tick.
    pub fn emit(&mut self, kind: HuntEventKind, description: impl Into<String>) {
        self.events.push(self.clock.tick(), kind, description);
    }

    /// The current tick number.
    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }
}

/// Owned backing storage for a [`TickContext`] in unit tests.
#[cfg(test)]
pub(crate) struct Harness {
    pub state: GameState,
    pub config: GameConfig,
    pub clock: TickClock,
    pub events: EventLog,
    pub rng: StdRng,
}

#[cfg(test)]
impl Harness {
    /// A harness with the player at the spawn point and no monsters.
    pub fn new(config: GameConfig) -> Self {
        use rand::SeedableRng;

        let player = mh_core::Player::at(config.arena.spawn_point());
        Self {
            state: GameState::new(player),
            clock: TickClock::new(config.tick_ms),
            events: EventLog::new(0),
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    pub fn ctx(&mut self) -> TickContext<'_> {
        TickContext {
            state: &mut self.state,
            config: &self.config,
            clock: &self.clock,
            events: &mut self.events,
            rng: &mut self.rng,
        }
    }

    /// Descriptions of every logged event, oldest first.
    pub fn log_lines(&self) -> Vec<&str> {
        self.events
            .events()
            .iter()
            .map(|e| e.description.as_str())
            .collect()
    }
}
