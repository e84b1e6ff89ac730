//! Side-by-side composition of the two watch widgets.

use crate::config::Config;
use crate::controller::WatchController;
use crate::events::Event;
use crate::watch::{Countdown, Stopwatch};

/// The top-level container: one stopwatch and one digital watch,
/// rendered side by side, sharing nothing.
pub struct Panel {
    stopwatch: WatchController<Stopwatch>,
    countdown: WatchController<Countdown>,
}

impl Panel {
    pub fn new(config: &Config) -> Self {
        Self {
            stopwatch: WatchController::new(Stopwatch::new()),
            countdown: WatchController::new(Countdown::with_initial(
                config.countdown.initial_secs(),
                config.countdown.adjust_step_secs(),
            )),
        }
    }

    pub fn stopwatch(&self) -> &WatchController<Stopwatch> {
        &self.stopwatch
    }

    pub fn countdown(&self) -> &WatchController<Countdown> {
        &self.countdown
    }

    /// One status line covering both widgets.
    pub async fn render(&self) -> String {
        format!(
            "Stopwatch {} [{}]   Digital Watch {} [{}]",
            self.stopwatch.display().await,
            state_label(self.stopwatch.is_running().await),
            self.countdown.display().await,
            state_label(self.countdown.is_running().await),
        )
    }

    /// Snapshot of both widgets, stopwatch first.
    pub async fn snapshots(&self) -> Vec<Event> {
        vec![
            self.stopwatch.snapshot().await,
            self.countdown.snapshot().await,
        ]
    }
}


fn state_label(running: bool) -> &'static str {
    if running {
        "running"
    } else {
        "stopped"
    }
}
