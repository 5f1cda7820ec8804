//! SQLite-backed key-value storage.
//!
//! Persists two things between CLI invocations:
//! - the user's objective list (replaces the built-in defaults wholesale
//!   when present)
//! - the serialized timer controller, so `timer start` / `timer status`
//!   operate on the same session

use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::error::Result;
use crate::timer::{ObjectiveSchedule, TimerController};

const OBJECTIVES_KEY: &str = "objectives_v1";
const CONTROLLER_KEY: &str = "timer_controller";

/// SQLite database at `~/.config/objtimer/objtimer.db`.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database, creating file and schema if they don't exist.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("objtimer.db");
        Self::open_at(&path)
    }

    /// Open at an explicit path (used by tests).
    pub fn open_at(path: &std::path::Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    // ── Key-value primitives ─────────────────────────────────────────

    pub fn kv_get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn kv_delete(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ── Typed accessors ──────────────────────────────────────────────

    /// The stored objective list, or `None` when the user has never saved
    /// one (callers fall back to the built-in defaults).
    pub fn load_objectives(&self) -> Result<Option<ObjectiveSchedule>> {
        match self.kv_get(OBJECTIVES_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn save_objectives(&self, schedule: &ObjectiveSchedule) -> Result<()> {
        self.kv_set(OBJECTIVES_KEY, &serde_json::to_string(schedule)?)
    }

    pub fn reset_objectives(&self) -> Result<()> {
        self.kv_delete(OBJECTIVES_KEY)
    }

    /// The persisted controller, or a fresh one over `schedule` when
    /// nothing is stored (or the stored blob fails to parse).
    pub fn load_controller(&self, schedule: ObjectiveSchedule) -> TimerController {
        if let Ok(Some(json)) = self.kv_get(CONTROLLER_KEY) {
            if let Ok(controller) = serde_json::from_str::<TimerController>(&json) {
                return controller;
            }
        }
        TimerController::new(schedule)
    }

    pub fn save_controller(&self, controller: &TimerController) -> Result<()> {
        self.kv_set(CONTROLLER_KEY, &serde_json::to_string(controller)?)
    }

    pub fn clear_controller(&self) -> Result<()> {
        self.kv_delete(CONTROLLER_KEY)
    }
}
