use clap::Subcommand;
use objtimer_core::{Database, Objective, ValidationError};

use super::effective_schedule;
use crate::common::{format_mmss, parse_time};

#[derive(Subcommand)]
pub enum ObjectivesAction {
    /// List the objectives for the next run
    List {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a custom objective
    Add {
        /// Display name
        label: String,
        /// Trigger time (seconds or M:SS)
        #[arg(long)]
        at: String,
        /// Text spoken/printed when the objective fires
        #[arg(long)]
        message: String,
        /// Repeat every this many seconds after the trigger
        #[arg(long)]
        repeat: Option<u64>,
    },
    /// Remove a custom objective by label (built-ins cannot be removed)
    Remove { label: String },
    /// Discard the stored list and return to the built-in defaults
    Reset,
}

pub fn run(action: ObjectivesAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;

    match action {
        ObjectivesAction::List { json } => {
            let schedule = effective_schedule(&db)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
                return Ok(());
            }
            let controller = db.load_controller(schedule.clone());
            for obj in schedule.iter() {
                let fired = if controller.tracker().has(obj.trigger_secs) {
                    " [fired]"
                } else {
                    ""
                };
                let repeat = obj
                    .repeat_secs
                    .map(|r| format!(", repeats every {}", format_mmss(r)))
                    .unwrap_or_default();
                let custom = if obj.custom { " (custom)" } else { "" };
                println!(
                    "{} at {}{} -- {}{}{}",
                    obj.label,
                    format_mmss(obj.trigger_secs),
                    repeat,
                    obj.message,
                    custom,
                    fired
                );
            }
        }
        ObjectivesAction::Add {
            label,
            at,
            message,
            repeat,
        } => {
            let mut schedule = effective_schedule(&db)?;
            let mut obj = Objective::new(&label, parse_time(&at)?, &message);
            obj.repeat_secs = repeat;
            obj.custom = true;
            obj.validate()?;
            schedule.objectives.push(obj);
            db.save_objectives(&schedule)?;
            println!("added '{label}'");
        }
        ObjectivesAction::Remove { label } => {
            let mut schedule = effective_schedule(&db)?;
            let index = schedule
                .objectives
                .iter()
                .position(|o| o.label == label)
                .ok_or(ValidationError::UnknownObjective {
                    label: label.clone(),
                })?;
            if !schedule.objectives[index].custom {
                return Err(ValidationError::BuiltinObjective { label }.into());
            }
            schedule.objectives.remove(index);
            db.save_objectives(&schedule)?;
            println!("removed '{label}'");
        }
        ObjectivesAction::Reset => {
            db.reset_objectives()?;
            println!("objective list reset to defaults");
        }
    }

    Ok(())
}
