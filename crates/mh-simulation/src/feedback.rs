use crate::context::TickContext;
use crate::system::System;

/// Counts down the cosmetic combo banner once per tick.
#[derive(Debug, Default)]
pub struct FeedbackSystem;

impl System for FeedbackSystem {
    fn name(&self) -> &str {
        "feedback"
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) {
        ctx.state.combo_timer = ctx.state.combo_timer.saturating_sub(1);
    }
}
