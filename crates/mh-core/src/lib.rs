//! Core types for Maple Hunt: the hero, gear, monsters, drops, and game state.
//!
//! This crate holds the data model and the rules that act on a single value
//! (leveling, stat totals, inventory moves). Anything that needs randomness,
//! a clock, or an event log lives in `mh-simulation`.

/// Equipment items and the slots they occupy.
pub mod equipment;
/// Error types used throughout the crate.
pub mod error;
/// Input keys recognized by the game.
pub mod input;
/// Monster entities and their identifiers.
pub mod monster;
/// Collectible drops left behind by slain monsters.
pub mod drops;
/// The player character: physics fields, stats, and leveling.
pub mod player;
/// 2D positions and distance helpers.
pub mod position;
/// The single mutable root of a play session.
pub mod state;

/// Re-export drop types.
pub use drops::{DropKind, ItemDrop};
/// Re-export equipment types.
pub use equipment::{Equipment, Slot};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export input types.
pub use input::Key;
/// Re-export monster types.
pub use monster::{Monster, MonsterId};
/// Re-export the player type.
pub use player::Player;
/// Re-export the position type.
pub use position::Position;
/// Re-export game state types.
pub use state::{EquipOutcome, GameState};
