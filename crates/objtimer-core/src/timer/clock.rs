//! Clock state machine.
//!
//! The clock counts whole elapsed seconds and has no internal thread - the
//! caller is responsible for invoking `tick()` once per real-time second
//! while the clock is running.
//!
//! ## State Transitions
//!
//! ```text
//! Idle <-> Running -> Editing -> Running
//! ```
//!
//! `Editing` freezes the counter and exposes a (minutes, seconds) edit
//! buffer; committing the buffer relocates the counter and resumes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    Idle,
    Running,
    Editing,
}

/// Elapsed-seconds counter with run/pause/edit state.
///
/// `elapsed_secs` only moves while `Running`, and only through `tick()`
/// or an edit commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clock {
    state: ClockState,
    elapsed_secs: u64,
    /// Edit buffer, only meaningful while `Editing`.
    #[serde(default)]
    edit_minutes: u64,
    #[serde(default)]
    edit_seconds: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            state: ClockState::Idle,
            elapsed_secs: 0,
            edit_minutes: 0,
            edit_seconds: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Current edit buffer as (minutes, seconds).
    pub fn edit_buffer(&self) -> (u64, u64) {
        (self.edit_minutes, self.edit_seconds)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// From `Idle`, resume ticking at the current counter. From `Editing`,
    /// commit the edit buffer first. Returns `false` when already running.
    pub fn start(&mut self) -> bool {
        match self.state {
            ClockState::Idle => {
                self.state = ClockState::Running;
                true
            }
            ClockState::Editing => {
                self.commit_edit();
                true
            }
            ClockState::Running => false,
        }
    }

    /// Freeze the counter. Valid only while `Running`.
    pub fn pause(&mut self) -> bool {
        if self.state == ClockState::Running {
            self.state = ClockState::Idle;
            true
        } else {
            false
        }
    }

    /// Advance by exactly one second. Returns the post-increment counter
    /// while `Running`; no effect in any other state.
    pub fn tick(&mut self) -> Option<u64> {
        if self.state != ClockState::Running {
            return None;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        Some(self.elapsed_secs)
    }

    /// From `Idle`/`Running`: zero the counter and go `Idle`. From
    /// `Editing`: zero only the edit buffer, state unchanged.
    pub fn reset(&mut self) {
        match self.state {
            ClockState::Editing => {
                self.edit_minutes = 0;
                self.edit_seconds = 0;
            }
            _ => {
                self.state = ClockState::Idle;
                self.elapsed_secs = 0;
            }
        }
    }

    /// Capture the current counter into the edit buffer and freeze.
    /// Returns `false` when already editing.
    pub fn begin_edit(&mut self) -> bool {
        if self.state == ClockState::Editing {
            return false;
        }
        self.edit_minutes = self.elapsed_secs / 60;
        self.edit_seconds = self.elapsed_secs % 60;
        self.state = ClockState::Editing;
        true
    }

    /// Overwrite the edit buffer. Valid only while `Editing`.
    pub fn set_edit_buffer(&mut self, minutes: u64, seconds: u64) -> bool {
        if self.state != ClockState::Editing {
            return false;
        }
        self.edit_minutes = minutes;
        self.edit_seconds = seconds;
        true
    }

    /// Commit the edit buffer as the new counter and resume running.
    /// Returns the new counter, or `None` when not editing.
    pub fn commit_edit(&mut self) -> Option<u64> {
        if self.state != ClockState::Editing {
            return None;
        }
        self.elapsed_secs = self
            .edit_minutes
            .saturating_mul(60)
            .saturating_add(self.edit_seconds);
        self.state = ClockState::Running;
        Some(self.elapsed_secs)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
