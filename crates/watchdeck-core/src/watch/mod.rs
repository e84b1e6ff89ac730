//! Watch state machine implementations.
//!
//! Both widgets are caller-ticked state machines. They do not own
//! threads or timers - the driver is responsible for calling `tick()`
//! once per period.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped -> Running   via start()
//! Running -> Stopped   via stop(), or (countdown only) on reaching zero
//! ```
//!
//! Every command returns the transition it performed as an [`Event`],
//! or `None` when the current state does not permit it. Guards live
//! here, not in a display layer: a caller that never renders a button
//! still cannot double-start a watch or reset one mid-run.

mod countdown;
mod stopwatch;

pub use countdown::Countdown;
pub use stopwatch::Stopwatch;

use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchKind {
    Stopwatch,
    Countdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchState {
    Stopped,
    Running,
}

impl Default for WatchState {
    fn default() -> Self {
        WatchState::Stopped
    }
}

/// Common face of the two widgets; the tick driver needs no more than
/// this.
pub trait Watch: Send + 'static {
    fn kind(&self) -> WatchKind;
    fn state(&self) -> WatchState;

    /// Current displayed time in whole seconds.
    fn seconds(&self) -> u64;

    fn start(&mut self) -> Option<Event>;
    fn stop(&mut self) -> Option<Event>;
    fn reset(&mut self) -> Option<Event>;

    /// One firing of the periodic callback. Returns the terminal event
    /// when the firing ends the run (countdown reaching zero).
    fn tick(&mut self) -> Option<Event>;

    fn is_running(&self) -> bool {
        self.state() == WatchState::Running
    }

    /// `MM:SS` rendering of the current value.
    fn display(&self) -> String {
        format::mmss(self.seconds())
    }

    /// Build a full state snapshot event.
    fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            kind: self.kind(),
            state: self.state(),
            seconds: self.seconds(),
            display: self.display(),
            at: chrono::Utc::now(),
        }
    }
}
