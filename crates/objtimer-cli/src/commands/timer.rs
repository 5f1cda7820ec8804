use clap::Subcommand;
use objtimer_core::{Database, Event, TimerController, ValidationError};

use super::effective_schedule;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the clock (commits a pending edit)
    Start,
    /// Pause the clock
    Pause,
    /// Reset the clock to 0:00 and re-arm all objectives
    Reset,
    /// Freeze the clock and capture it into the edit buffer
    BeginEdit,
    /// Commit minutes/seconds as the new elapsed time (begins an edit first
    /// if none is pending)
    Edit {
        /// Minutes part of the new elapsed time
        #[arg(long, default_value = "0")]
        minutes: u64,
        /// Seconds part of the new elapsed time (below 60)
        #[arg(long, default_value = "0")]
        seconds: u64,
    },
    /// Zero the pending edit buffer without committing
    EditReset,
    /// Print current timer state as JSON
    Status,
}

/// Apply one action to the controller. `Ok(None)` means nothing changed
/// (the caller prints a snapshot instead).
fn apply(
    controller: &mut TimerController,
    action: &TimerAction,
) -> Result<Option<Event>, Box<dyn std::error::Error>> {
    match action {
        TimerAction::Start => Ok(controller.start()),
        TimerAction::Pause => Ok(controller.pause()),
        TimerAction::Reset => Ok(controller.reset()),
        TimerAction::BeginEdit => Ok(controller.begin_edit()),
        TimerAction::Edit { minutes, seconds } => {
            if *seconds >= 60 {
                return Err(ValidationError::SecondsOutOfRange { seconds: *seconds }.into());
            }
            controller.begin_edit();
            let event = controller
                .commit_edit(*minutes, *seconds)
                .ok_or("edit rejected")?;
            Ok(Some(event))
        }
        TimerAction::EditReset => controller
            .edit_reset()
            .map(Some)
            .ok_or_else(|| "no edit in progress".into()),
        TimerAction::Status => Ok(None),
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut controller = db.load_controller(effective_schedule(&db)?);

    match apply(&mut controller, &action)? {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{}", serde_json::to_string_pretty(&controller.snapshot())?),
    }

    db.save_controller(&controller)?;
    Ok(())
}
