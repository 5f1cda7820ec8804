//! Live session loop.
//!
//! The engine has no internal thread: this loop is its external tick
//! source, delivering one pulse per real-time second and printing/speaking
//! whatever fires. The controller is persisted after every tick, so ending
//! the session with Ctrl-C loses at most the in-flight second.

use std::thread;
use std::time::Duration;

use clap::Args;
use objtimer_core::{Config, Database, Event, Notifier, TimerController};

use super::effective_schedule;
use crate::common::{format_mmss, parse_time};

#[derive(Args)]
pub struct RunArgs {
    /// Start from an elapsed time instead of 0:00 (seconds or M:SS)
    #[arg(long)]
    from: Option<String>,
    /// Stop after this many seconds of elapsed time (without this the
    /// session runs until Ctrl-C; state is saved every second)
    #[arg(long)]
    until: Option<String>,
    /// Print a timestamped line every second, not only on firings
    #[arg(long)]
    verbose: bool,
}

/// One pulse: tick, then persist the controller.
fn step(
    db: &Database,
    controller: &mut TimerController,
    notifier: &dyn Notifier,
) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
    let events = controller.tick(notifier);
    db.save_controller(controller)?;
    Ok(events)
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load()?;
    let notifier = config.notifier();

    let schedule = effective_schedule(&db)?;
    schedule.validate()?;
    let mut controller = TimerController::new(schedule);

    controller.start();
    if let Some(from) = &args.from {
        let from_secs = parse_time(from)?;
        controller.begin_edit();
        controller.commit_edit(from_secs / 60, from_secs % 60);
    }
    let until_secs = args.until.as_deref().map(parse_time).transpose()?;
    db.save_controller(&controller)?;

    println!("objectives:");
    for obj in controller.schedule().iter() {
        let repeat = obj
            .repeat_secs
            .map(|r| format!(" (every {})", format_mmss(r)))
            .unwrap_or_default();
        println!("  {} at {}{}", obj.label, format_mmss(obj.trigger_secs), repeat);
    }
    println!("running from {} -- Ctrl-C to stop", format_mmss(controller.elapsed_secs()));

    loop {
        thread::sleep(Duration::from_secs(1));
        for event in step(&db, &mut controller, &*notifier)? {
            if let Event::ObjectiveFired { label, instant, .. } = event {
                println!("[{}] {label}", format_mmss(instant));
            }
        }
        let elapsed = controller.elapsed_secs();
        if args.verbose {
            println!("{}", format_mmss(elapsed));
        }
        if let Some(until) = until_secs {
            if elapsed >= until {
                controller.pause();
                db.save_controller(&controller)?;
                println!("stopped at {}", format_mmss(elapsed));
                break;
            }
        }
    }

    Ok(())
}
