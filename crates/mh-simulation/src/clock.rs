/// Tracks simulation time: a monotonic tick counter and the real-time
/// cadence it stands for.
#[derive(Debug, Clone)]
pub struct TickClock {
    tick: u64,
    tick_ms: u64,
}

impl TickClock {
    /// Create a new clock at tick 0 with the given tick length.
    pub fn new(tick_ms: u64) -> Self {
        Self { tick: 0, tick_ms }
    }

    /// Advance the clock by one tick. Returns the new tick number.
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Return the current tick number.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Milliseconds of play represented by the ticks so far.
    pub fn elapsed_ms(&self) -> u64 {
        self.tick.saturating_mul(self.tick_ms)
    }

    /// Return the configured tick length in milliseconds.
    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }
}
