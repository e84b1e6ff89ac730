use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{Watch, WatchKind, WatchState};
use crate::events::Event;

/// Count-up watch. Starts at zero; minutes grow without bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stopwatch {
    state: WatchState,
    elapsed_secs: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            state: WatchState::Stopped,
            elapsed_secs: 0,
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Watch for Stopwatch {
    fn kind(&self) -> WatchKind {
        WatchKind::Stopwatch
    }

    fn state(&self) -> WatchState {
        self.state
    }

    fn seconds(&self) -> u64 {
        self.elapsed_secs
    }

    fn start(&mut self) -> Option<Event> {
        match self.state {
            WatchState::Stopped => {
                self.state = WatchState::Running;
                Some(Event::WatchStarted {
                    kind: self.kind(),
                    seconds: self.elapsed_secs,
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
                    seconds: self.elapsed_secs,
                    at: Utc::now(),
                })
            }
            WatchState::Stopped => None,
        }
    }

    fn reset(&mut self) -> Option<Event> {
        match self.state {
            WatchState::Stopped => {
                self.elapsed_secs = 0;
                Some(Event::WatchReset {
                    kind: self.kind(),
                    seconds: 0,
                    at: Utc::now(),
                })
            }
            WatchState::Running => None, // Stop first.
        }
    }

    fn tick(&mut self) -> Option<Event> {
        if self.state == WatchState::Running {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_stop_toggles_state() {
        let mut watch = Stopwatch::new();
        assert_eq!(watch.state(), WatchState::Stopped);

        assert!(watch.start().is_some());
        assert_eq!(watch.state(), WatchState::Running);

        assert!(watch.stop().is_some());
        assert_eq!(watch.state(), WatchState::Stopped);
    }

    #[test]
    fn ticks_count_seconds() {
        let mut watch = Stopwatch::new();
        watch.start();
        for _ in 0..90 {
            assert!(watch.tick().is_none());
        }
        assert_eq!(watch.seconds(), 90);
        assert_eq!(watch.display(), "01:30");
    }

    #[test]
    fn start_while_running_is_guarded() {
        let mut watch = Stopwatch::new();
        assert!(watch.start().is_some());
        assert!(watch.start().is_none());
    }

    #[test]
    fn reset_while_running_is_guarded() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.tick();
        assert!(watch.reset().is_none());
        assert_eq!(watch.seconds(), 1);
    }

    #[test]
    fn stop_when_stopped_changes_nothing() {
        let mut watch = Stopwatch::new();
        watch.start();
        watch.tick();
        watch.stop();

        assert!(watch.stop().is_none());
        assert_eq!(watch.seconds(), 1);
    }

    #[test]
    fn reset_zeroes_the_counter() {
        let mut watch = Stopwatch::new();
        watch.start();
        for _ in 0..42 {
            watch.tick();
        }
        watch.stop();

        assert!(watch.reset().is_some());
        assert_eq!(watch.seconds(), 0);
        assert_eq!(watch.display(), "00:00");
    }

    #[test]
    fn tick_while_stopped_is_inert() {
        let mut watch = Stopwatch::new();
        assert!(watch.tick().is_none());
        assert_eq!(watch.seconds(), 0);
    }
}
