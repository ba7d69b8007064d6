use crate::context::TickContext;

/// A simulation step that runs each tick.
///
/// Systems are executed in registration order. Each system receives
/// a mutable context providing access to the state, config, clock, RNG,
/// and event log.
pub trait System: std::fmt::Debug {
    /// Human-readable name for this system.
    fn name(&self) -> &str;

    /// Called once per tick.
    fn tick(&mut self, ctx: &mut TickContext<'_>);

    /// Called once when the system is registered. Optional setup hook.
    fn init(&mut self, _ctx: &mut TickContext<'_>) {}
}
