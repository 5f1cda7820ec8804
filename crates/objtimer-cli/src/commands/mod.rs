pub mod config;
pub mod objectives;
pub mod run;
pub mod timer;

use objtimer_core::{Database, ObjectiveSchedule};

/// The schedule for the next run: the user's stored list when present,
/// otherwise the built-in defaults.
pub fn effective_schedule(db: &Database) -> Result<ObjectiveSchedule, Box<dyn std::error::Error>> {
    Ok(db.load_objectives()?.unwrap_or_default())
}
