//! Tick driver: the periodic callback as an instance-owned resource.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time;

use crate::events::Event;
use crate::watch::{Countdown, Watch};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Drives one watch widget: applies commands under a single lock,
/// schedules the once-per-second tick while running, and fans events
/// out to any number of subscribed displays.
///
/// Invariant: a live ticker task exists iff the watch is `Running`
/// immediately after any command returns. The task ends itself when
/// the machine leaves `Running` on its own (countdown reaching zero)
/// and is aborted on `stop`, `reset`, and drop, so no callback can
/// outlive its widget.
pub struct WatchController<W: Watch> {
    watch: Arc<Mutex<W>>,
    ticker: Arc<Mutex<Option<JoinHandle<()>>>>,
    tick_interval: Duration,
    events: broadcast::Sender<Event>,
}

impl<W: Watch> WatchController<W> {
    pub fn new(watch: W) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            watch: Arc::new(Mutex::new(watch)),
            ticker: Arc::new(Mutex::new(None)),
            tick_interval: Duration::from_secs(1),
            events,
        }
    }

    /// Override the tick period. The widgets run at one second; tests
    /// run at a few milliseconds.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// A receiver of every event this widget produces. A lagging or
    /// absent subscriber never blocks the tick.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> Event {
        self.watch.lock().await.snapshot()
    }

    pub async fn display(&self) -> String {
        self.watch.lock().await.display()
    }

    pub async fn seconds(&self) -> u64 {
        self.watch.lock().await.seconds()
    }

    pub async fn is_running(&self) -> bool {
        self.watch.lock().await.is_running()
    }

    /// Whether a periodic callback is currently scheduled.
    pub async fn is_ticking(&self) -> bool {
        self.ticker
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Start the watch. Spawns the ticker only when the machine
    /// actually transitioned, so a second `start()` cannot schedule a
    /// second callback.
    pub async fn start(&self) -> Option<Event> {
        let event = self.watch.lock().await.start()?;
        self.spawn_ticker().await;
        self.broadcast(event.clone());
        Some(event)
    }

    pub async fn stop(&self) -> Option<Event> {
        let event = self.watch.lock().await.stop()?;
        self.cancel_ticker().await;
        self.broadcast(event.clone());
        Some(event)
    }

    pub async fn reset(&self) -> Option<Event> {
        let event = self.watch.lock().await.reset()?;
        // The guard means no ticker can be live here; clear the slot
        // anyway so every exit route shares one cancellation path.
        self.cancel_ticker().await;
        self.broadcast(event.clone());
        Some(event)
    }

    async fn spawn_ticker(&self) {
        let mut slot = self.ticker.lock().await;
        if let Some(handle) = slot.take() {
            handle.abort();
        }

        let watch = Arc::clone(&self.watch);
        let events = self.events.clone();
        let tick_interval = self.tick_interval;

        tracing::debug!(interval_ms = tick_interval.as_millis() as u64, "ticker scheduled");

        let handle = tokio::spawn(async move {
            let mut interval = time::interval(tick_interval);
            // An interval's first tick completes immediately; the first
            // displayed update must come one full period after start.
            interval.tick().await;
            loop {
                interval.tick().await;
                let (terminal, snapshot) = {
                    let mut watch = watch.lock().await;
                    if !watch.is_running() {
                        break;
                    }
                    (watch.tick(), watch.snapshot())
                };
                let _ = events.send(snapshot);
                if let Some(event) = terminal {
                    tracing::info!("watch reached terminal state; ticker stopped");
                    let _ = events.send(event);
                    break;
                }
            }
        });
        *slot = Some(handle);
    }

    async fn cancel_ticker(&self) {
        if let Some(handle) = self.ticker.lock().await.take() {
            handle.abort();
            tracing::debug!("ticker cancelled");
        }
    }

    fn broadcast(&self, event: Event) {
        // Send fails only when no display is subscribed.
        let _ = self.events.send(event);
    }
}

impl WatchController<Countdown> {
    /// Add one adjustment step; broadcast immediately so the display
    /// updates without waiting for a tick.
    pub async fn increment(&self) -> Option<Event> {
        let event = self.watch.lock().await.increment()?;
        self.broadcast(event.clone());
        Some(event)
    }

    /// Remove one adjustment step, clamped at zero. Reaching zero this
    /// way ends a running countdown exactly as a final tick would.
    pub async fn decrement(&self) -> Option<Event> {
        let (event, finished) = {
            let mut watch = self.watch.lock().await;
            let event = watch.decrement()?;
            (event, watch.finish_if_exhausted())
        };
        self.broadcast(event.clone());
        if let Some(finished) = finished {
            self.cancel_ticker().await;
            self.broadcast(finished);
        }
        Some(event)
    }
}

impl<W: Watch> Drop for WatchController<W> {
    fn drop(&mut self) {
        // The slot is uncontended once the owner is going away; abort
        // any live ticker so it cannot fire against disposed state.
        if let Ok(mut slot) = self.ticker.try_lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}
