use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Watch, WatchKind, WatchState};
use crate::events::Event;

/// Default starting value: 25 minutes.
pub const DEFAULT_INITIAL_SECS: u64 = 25 * 60;
/// Default +/- adjustment step: one minute.
pub const DEFAULT_ADJUST_STEP_SECS: u64 = 60;

/// Count-down watch (the "digital watch"). Runs from a fixed starting
/// value toward zero and stops itself there; the value never goes
/// below zero, from ticks or from manual adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Countdown {
    state: WatchState,
    remaining_secs: u64,
    initial_secs: u64,
    adjust_step_secs: u64,
}

impl Countdown {
    pub fn new() -> Self {
        Self::with_initial(DEFAULT_INITIAL_SECS, DEFAULT_ADJUST_STEP_SECS)
    }

    pub fn with_initial(initial_secs: u64, adjust_step_secs: u64) -> Self {
        Self {
            state: WatchState::Stopped,
            remaining_secs: initial_secs,
            initial_secs,
            adjust_step_secs,
        }
    }

    /// The value `reset()` restores.
    pub fn initial_secs(&self) -> u64 {
        self.initial_secs
    }

    /// Add one adjustment step. Permitted in any state.
    pub fn increment(&mut self) -> Option<Event> {
        self.remaining_secs = self.remaining_secs.saturating_add(self.adjust_step_secs);
        Some(self.adjusted(self.adjust_step_secs as i64))
    }

    /// Remove one adjustment step, clamped at zero. Permitted in any
    /// state; a caller that can reach zero this way must follow up
    /// with [`Countdown::finish_if_exhausted`].
    pub fn decrement(&mut self) -> Option<Event> {
        self.remaining_secs = self.remaining_secs.saturating_sub(self.adjust_step_secs);
        Some(self.adjusted(-(self.adjust_step_secs as i64)))
    }

    /// The zero check shared by every mutation path: a running watch
    /// with nothing left ends its run here, whether the last second
    /// went to a tick or to a manual adjustment.
    pub fn finish_if_exhausted(&mut self) -> Option<Event> {
        if self.state == WatchState::Running && self.remaining_secs == 0 {
            self.state = WatchState::Stopped;
            return Some(Event::CountdownFinished { at: Utc::now() });
        }
        None
    }

    fn adjusted(&self, delta_secs: i64) -> Event {
        Event::TimeAdjusted {
            kind: WatchKind::Countdown,
            delta_secs,
            seconds: self.remaining_secs,
            at: Utc::now(),
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Watch for Countdown {
    fn kind(&self) -> WatchKind {
        WatchKind::Countdown
    }

    fn state(&self) -> WatchState {
        self.state
    }

    fn seconds(&self) -> u64 {
        self.remaining_secs
    }

    fn start(&mut self) -> Option<Event> {
        if self.remaining_secs == 0 {
            return None; // Nothing left to run.
        }
        match self.state {
            WatchState::Stopped => {
                self.state = WatchState::Running;
                Some(Event::WatchStarted {
                    kind: self.kind(),
                    seconds: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            WatchState::Running => None, // Already running.
        }
    }

    fn stop(&mut self) -> Option<Event> {
        match self.state {
            WatchState::Running => {
                self.state = WatchState::Stopped;
                Some(Event::WatchStopped {
                    kind: self.kind(),
                    seconds: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            WatchState::Stopped => None,
        }
    }

    fn reset(&mut self) -> Option<Event> {
        match self.state {
            WatchState::Stopped => {
                self.remaining_secs = self.initial_secs;
                Some(Event::WatchReset {
                    kind: self.kind(),
                    seconds: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            WatchState::Running => None, // Stop first.
        }
    }

    fn tick(&mut self) -> Option<Event> {
        if self.state != WatchState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.finish_if_exhausted()
    }
}
