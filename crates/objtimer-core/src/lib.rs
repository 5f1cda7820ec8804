//! # Objtimer Core Library
//!
//! Core business logic for objtimer, a match-clock that announces timed
//! objectives. The CLI binary is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Timer Controller**: a tick-driven state machine that requires the
//!   caller to invoke `tick()` once per second while a session is running
//! - **Scheduler**: pure evaluation of the objective schedule against the
//!   current elapsed second and the set of already-delivered instants
//! - **Notifier**: best-effort delivery capability (speech command, stdout)
//! - **Storage**: SQLite key-value store for the objective list and
//!   cross-invocation controller state, TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TimerController`]: command surface and per-tick evaluation
//! - [`ObjectiveSchedule`]: the objective definitions for a run
//! - [`Notifier`]: trait for notification delivery
//! - [`Database`] / [`Config`]: persistence and preferences

pub mod error;
pub mod events;
pub mod notify;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use notify::{CommandNotifier, Notifier, NullNotifier, StdoutNotifier};
pub use storage::{Config, Database};
pub use timer::{
    Clock, ClockState, NotificationTracker, Objective, ObjectiveSchedule, TimerController,
};
