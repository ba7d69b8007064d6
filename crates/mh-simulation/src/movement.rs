//! Player movement and jump physics.
//!
//! The player is either on the ground or airborne. Gravity is integrated
//! every tick; touching the ground limit snaps the player back onto the
//! ground and zeroes vertical velocity.

use mh_core::GameState;

use crate::config::ArenaConfig;
use crate::context::TickContext;
use crate::system::System;

/// Apply one tick of horizontal input and vertical physics.
pub fn advance_movement(state: &mut GameState, arena: &ArenaConfig) {
    let dx = state.horizontal_input() * state.player.speed;
    let player = &mut state.player;

    player.pos.x = (player.pos.x + dx).clamp(arena.min_x, arena.max_x);

    player.vy += arena.gravity;
    player.pos.y += player.vy;

    let ground = arena.ground_limit();
    if player.pos.y >= ground {
        player.pos.y = ground;
        player.vy = 0.0;
        player.on_ground = true;
    }

    player.pos.y = player.pos.y.max(arena.ceiling_y);
}

/// Launch the player upward if they are standing on the ground. Returns
/// whether a jump started.
pub fn jump(state: &mut GameState) -> bool {
    let player = &mut state.player;
    if !player.on_ground {
        return false;
    }
    player.vy = -player.jump_strength;
    player.on_ground = false;
    true
}

/// Runs [`advance_movement`] every tick.
#[derive(Debug, Default)]
pub struct MovementSystem;

impl System for MovementSystem {
    fn name(&self) -> &str {
        "movement"
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) {
        advance_movement(ctx.state, &ctx.config.arena);
    }
}
