//! Timer controller.
//!
//! Wires user intents to the clock and the notification tracker, and runs
//! exactly one scheduler pass per tick. The controller owns all mutable
//! state (clock + tracker + schedule); the notifier is borrowed per tick so
//! the whole controller stays serializable for cross-invocation persistence.
//!
//! ## Usage
//!
//! ```ignore
//! let mut controller = TimerController::new(ObjectiveSchedule::default());
//! controller.start();
//! // Once per real-time second:
//! let fired = controller.tick(&notifier); // zero or more ObjectiveFired events
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::clock::{Clock, ClockState};
use super::objective::ObjectiveSchedule;
use super::scheduler;
use super::tracker::NotificationTracker;
use crate::events::{Event, ObjectiveStatus};
use crate::notify::Notifier;

/// Single-owner state machine driving a run.
///
/// No internal thread: the caller delivers the 1-second pulses via `tick()`.
/// Ticks are suspended (not queued) while `Idle` or `Editing`, so resuming
/// is a warm restart at the frozen counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerController {
    clock: Clock,
    tracker: NotificationTracker,
    schedule: ObjectiveSchedule,
}

impl TimerController {
    pub fn new(schedule: ObjectiveSchedule) -> Self {
        Self {
            clock: Clock::new(),
            tracker: NotificationTracker::new(),
            schedule,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> ClockState {
        self.clock.state()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    pub fn schedule(&self) -> &ObjectiveSchedule {
        &self.schedule
    }

    pub fn tracker(&self) -> &NotificationTracker {
        &self.tracker
    }

    /// Build a full state snapshot event. The per-objective `fired` flag is
    /// tracker membership at the objective's own trigger instant.
    pub fn snapshot(&self) -> Event {
        let objectives = self
            .schedule
            .iter()
            .map(|o| ObjectiveStatus {
                label: o.label.clone(),
                trigger_secs: o.trigger_secs,
                repeat_secs: o.repeat_secs,
                fired: self.tracker.has(o.trigger_secs),
            })
            .collect();
        Event::StateSnapshot {
            state: self.clock.state(),
            elapsed_secs: self.clock.elapsed_secs(),
            objectives,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start or resume. From `Editing` this commits the edit buffer and
    /// re-arms every objective. `None` when already running.
    pub fn start(&mut self) -> Option<Event> {
        match self.clock.state() {
            ClockState::Idle => {
                self.clock.start();
                Some(Event::TimerStarted {
                    elapsed_secs: self.clock.elapsed_secs(),
                    at: Utc::now(),
                })
            }
            ClockState::Editing => {
                let elapsed = self.clock.commit_edit()?;
                self.tracker.clear();
                Some(Event::EditCommitted {
                    elapsed_secs: elapsed,
                    at: Utc::now(),
                })
            }
            ClockState::Running => None,
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        if self.clock.pause() {
            Some(Event::TimerPaused {
                elapsed_secs: self.clock.elapsed_secs(),
                at: Utc::now(),
            })
        } else {
            None
        }
    }

    /// From `Idle`/`Running`: zero the counter and re-arm every objective.
    /// From `Editing`: zero only the edit buffer.
    pub fn reset(&mut self) -> Option<Event> {
        if self.clock.state() == ClockState::Editing {
            self.clock.reset();
            return Some(Event::EditReset { at: Utc::now() });
        }
        self.clock.reset();
        self.tracker.clear();
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Freeze the clock and capture the counter into the edit buffer.
    pub fn begin_edit(&mut self) -> Option<Event> {
        if !self.clock.begin_edit() {
            return None;
        }
        let (minutes, seconds) = self.clock.edit_buffer();
        Some(Event::EditStarted {
            minutes,
            seconds,
            at: Utc::now(),
        })
    }

    /// Zero the edit buffer, staying in edit mode.
    pub fn edit_reset(&mut self) -> Option<Event> {
        if self.clock.state() != ClockState::Editing {
            return None;
        }
        self.clock.reset();
        Some(Event::EditReset { at: Utc::now() })
    }

    /// Commit `minutes * 60 + seconds` as the new counter, re-arm every
    /// objective, and resume. `None` when not editing.
    pub fn commit_edit(&mut self, minutes: u64, seconds: u64) -> Option<Event> {
        if !self.clock.set_edit_buffer(minutes, seconds) {
            return None;
        }
        let elapsed = self.clock.commit_edit()?;
        self.tracker.clear();
        Some(Event::EditCommitted {
            elapsed_secs: elapsed,
            at: Utc::now(),
        })
    }

    /// Deliver one external pulse.
    ///
    /// While `Running`: advances the counter by one second, evaluates the
    /// schedule once, delivers each firing through `notifier`, records its
    /// instant, and returns the `ObjectiveFired` events. Evaluation runs
    /// against the tracker state at tick entry, then all firing instants
    /// are marked; delivery is fire-and-forget. In any other state the
    /// pulse is dropped entirely.
    pub fn tick(&mut self, notifier: &dyn Notifier) -> Vec<Event> {
        let Some(elapsed) = self.clock.tick() else {
            return Vec::new();
        };
        let firings = scheduler::due(elapsed, &self.schedule, &self.tracker);
        let mut events = Vec::with_capacity(firings.len());
        for firing in firings {
            notifier.notify(&firing.message);
            self.tracker.mark(firing.instant);
            events.push(Event::ObjectiveFired {
                label: firing.label,
                message: firing.message,
                instant: firing.instant,
                at: Utc::now(),
            });
        }
        events
    }

    /// Replace the schedule between runs. Full reset: counter to zero,
    /// `Idle`, every objective re-armed.
    pub fn set_schedule(&mut self, schedule: ObjectiveSchedule) {
        self.schedule = schedule;
        self.clock = Clock::new();
        self.tracker.clear();
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new(ObjectiveSchedule::default())
    }
}
