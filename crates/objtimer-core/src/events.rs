use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::ClockState;

/// Every state change in the engine produces an Event.
/// The CLI prints them; a front end would subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// Entered edit mode; the buffer holds the captured counter.
    EditStarted {
        minutes: u64,
        seconds: u64,
        at: DateTime<Utc>,
    },
    /// Edit buffer zeroed while staying in edit mode.
    EditReset {
        at: DateTime<Utc>,
    },
    /// Edit buffer committed; counter relocated and running again.
    EditCommitted {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    /// An objective notification was delivered this tick.
    ObjectiveFired {
        label: String,
        message: String,
        /// The elapsed second recorded for at-most-once delivery.
        instant: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: ClockState,
        elapsed_secs: u64,
        objectives: Vec<ObjectiveStatus>,
        at: DateTime<Utc>,
    },
}

/// Display-facing view of one objective within a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveStatus {
    pub label: String,
    pub trigger_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_secs: Option<u64>,
    /// Whether the objective's own trigger instant has been delivered at
    /// least once this run (derived from tracker membership).
    pub fired: bool,
}
