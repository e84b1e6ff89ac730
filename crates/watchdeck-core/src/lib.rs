//! # Watchdeck Core Library
//!
//! This library provides the core state management for the Watchdeck
//! widget pair: a stopwatch counting up from zero and a digital watch
//! counting down from a configured start value, each re-displaying an
//! `MM:SS` label once per second while running.
//!
//! The library is surface-agnostic: all operations are available through
//! the standalone CLI binary, and any richer display is a thin layer
//! subscribing to the same event stream.
//!
//! ## Architecture
//!
//! - **Watch machines**: caller-ticked state machines that hold no task
//!   or thread of their own; the driver invokes `tick()` once per period
//!   and every command reports the transition performed, or `None` for a
//!   guarded no-op
//! - **Controller**: owns one machine, the scheduled periodic callback,
//!   and the broadcast channel displays subscribe to
//! - **Panel**: the side-by-side composition of the two widgets
//! - **Config**: TOML-based configuration management
//!
//! ## Key Components
//!
//! - [`Stopwatch`] / [`Countdown`]: the two widget state machines
//! - [`WatchController`]: tick scheduling and event fan-out
//! - [`Panel`]: the two-widget container
//! - [`Config`]: application configuration management

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod format;
pub mod panel;
pub mod watch;

pub use config::Config;
pub use controller::WatchController;
pub use error::{ConfigError, CoreError, Result};
pub use events::Event;
pub use panel::Panel;
pub use watch::{Countdown, Stopwatch, Watch, WatchKind, WatchState};
