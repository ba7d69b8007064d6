use mh_core::{DropKind, MonsterId, Slot};

/// What kind of game event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuntEventKind {
    /// The session started.
    Welcome,

    // Combat
    /// A swing connected with at least one monster.
    Swing {
        /// How many monsters were hit.
        hits: usize,
    },
    /// A monster was slain and its reward granted.
    MonsterSlain {
        /// The slain monster.
        monster: MonsterId,
        /// Experience granted.
        exp: u32,
        /// Gold granted.
        gold: u32,
    },
    /// The player gained one or more levels.
    LevelUp {
        /// The level reached.
        level: u32,
    },
    /// The player's hp hit zero and they respawned.
    PlayerDefeated {
        /// Gold actually lost to the penalty.
        gold_lost: u32,
    },

    // Loot
    /// An exp, gold, or gem drop was collected.
    Pickup {
        /// What was collected.
        kind: DropKind,
        /// Its value.
        amount: u32,
    },
    /// A gear drop was collected into the inventory.
    GearLooted {
        /// The item's name.
        name: String,
    },

    // Inventory
    /// An inventory item was equipped.
    Equipped {
        /// The slot it went into.
        slot: Slot,
        /// The item's name.
        name: String,
    },
    /// An inventory item was thrown away.
    Discarded {
        /// The item's name.
        name: String,
    },
}

impl HuntEventKind {
    /// Whether a headless summary should surface this event.
    pub fn is_notable(&self) -> bool {
        matches!(
            self,
            Self::LevelUp { .. } | Self::PlayerDefeated { .. } | Self::GearLooted { .. }
        )
    }
}

/// A record of something that happened during play.
#[derive(Debug, Clone)]
pub struct HuntEvent {
    /// Position in the log's total history, starting at 0.
    pub seq: u64,
    /// The tick when this event occurred.
    pub tick: u64,
    /// The specific kind of event that occurred.
    pub kind: HuntEventKind,
    /// A human-readable log line.
    pub description: String,
}

/// Accumulates events during a session.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<HuntEvent>,
    max_events: usize,
    next_seq: u64,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
            next_seq: 0,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, tick: u64, kind: HuntEventKind, description: impl Into<String>) {
        self.events.push(HuntEvent {
            seq: self.next_seq,
            tick,
            kind,
            description: description.into(),
        });
        self.next_seq += 1;
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all retained events.
    pub fn events(&self) -> &[HuntEvent] {
        &self.events
    }

    /// Return all retained events that occurred at the given tick.
    pub fn events_at_tick(&self, tick: u64) -> Vec<&HuntEvent> {
        self.events.iter().filter(|e| e.tick == tick).collect()
    }

    /// Return retained events with `seq >= from`. A presentation layer keeps
    /// the last [`EventLog::next_seq`] it saw and asks for everything newer.
    pub fn since(&self, from: u64) -> impl Iterator<Item = &HuntEvent> {
        self.events.iter().filter(move |e| e.seq >= from)
    }

    /// The sequence number the next pushed event will get.
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    /// Return the number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events are retained.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all retained events. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
