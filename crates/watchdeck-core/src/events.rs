use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::watch::{WatchKind, WatchState};

/// Every state change in a widget produces an Event.
/// Displays subscribe to them; the CLI prints them as tagged JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    WatchStarted {
        kind: WatchKind,
        seconds: u64,
        at: DateTime<Utc>,
    },
    WatchStopped {
        kind: WatchKind,
        seconds: u64,
        at: DateTime<Utc>,
    },
    WatchReset {
        kind: WatchKind,
        seconds: u64,
        at: DateTime<Utc>,
    },
    /// Manual +/- adjustment. `delta_secs` is the requested change;
    /// `seconds` is the value after clamping at zero.
    TimeAdjusted {
        kind: WatchKind,
        delta_secs: i64,
        seconds: u64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero; its periodic tick is cancelled and
    /// the display halts at `00:00`.
    CountdownFinished {
        at: DateTime<Utc>,
    },
    /// Full widget snapshot. Emitted once per tick while running, so
    /// subscribers can re-display without querying.
    StateSnapshot {
        kind: WatchKind,
        state: WatchState,
        seconds: u64,
        display: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Seconds value carried by the event, if any.
    pub fn seconds(&self) -> Option<u64> {
        match self {
            Event::WatchStarted { seconds, .. }
            | Event::WatchStopped { seconds, .. }
            | Event::WatchReset { seconds, .. }
            | Event::TimeAdjusted { seconds, .. }
            | Event::StateSnapshot { seconds, .. } => Some(*seconds),
            Event::CountdownFinished { .. } => None,
        }
    }
}
