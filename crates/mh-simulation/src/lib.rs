//! Tick-based hunting simulation for Maple Hunt.
//!
//! Drives a [`mh_core::GameState`] forward one fixed tick at a time through a
//! list of systems: player movement, monster pursuit and contact, drop pickup,
//! and the combo banner. All randomness flows through one seeded RNG, so a
//! session replays identically for the same seed and inputs.

/// Tick counter and fixed tick duration.
pub mod clock;
/// Melee attacks and kill rewards.
pub mod combat;
/// Tunable constants for a session, loadable from JSON.
pub mod config;
/// Mutable context passed to systems each tick.
pub mod context;
/// Error types for the simulation crate.
pub mod error;
/// Hunt event types and the bounded event log.
pub mod event;
/// Combo banner countdown.
pub mod feedback;
/// Drop generation and pickup.
pub mod loot;
/// Monster spawning, pursuit, and contact damage.
pub mod monsters;
/// Player movement and jump physics.
pub mod movement;
/// Top-level simulation orchestrator.
pub mod simulation;
/// The trait that all simulation systems implement.
pub mod system;
/// Weighted random tables for gear generation.
pub mod tables;

/// Re-export of [`clock::TickClock`].
pub use clock::TickClock;
/// Re-export of [`combat::SwingOutcome`].
pub use combat::SwingOutcome;
/// Re-exports of the config sections.
pub use config::{ArenaConfig, CombatConfig, DropRule, GameConfig, GearConfig, LootConfig, MonsterConfig};
/// Re-export of [`context::TickContext`].
pub use context::TickContext;
/// Re-exports of [`error::HuntError`] and [`error::HuntResult`].
pub use error::{HuntError, HuntResult};
/// Re-exports of [`event::EventLog`], [`event::HuntEvent`], and [`event::HuntEventKind`].
pub use event::{EventLog, HuntEvent, HuntEventKind};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-export of [`system::System`].
pub use system::System;
/// Re-export of [`tables::WeightedTable`].
pub use tables::WeightedTable;
