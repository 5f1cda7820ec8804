//! Notification delivery.
//!
//! The engine treats delivery as a best-effort capability: `notify()` takes
//! no return value, and implementations must absorb their own failures. A
//! dead speech device never reaches the tick path.

use std::process::{Command, Stdio};
use std::sync::Mutex;

/// Best-effort delivery of one notification message.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Discards every message.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}

/// Prints each message to stdout.
#[derive(Debug, Default)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, message: &str) {
        println!(">> {message}");
    }
}

/// Spawns an external command (e.g. `espeak`, `say`) with the message as
/// the final argument. Fire-and-forget: the child is not awaited and spawn
/// failures are reported to stderr and swallowed.
#[derive(Debug, Clone)]
pub struct CommandNotifier {
    program: String,
    args: Vec<String>,
}

impl CommandNotifier {
    pub fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a space-separated command line, e.g. `"espeak -s 140"`.
    /// Returns `None` for an empty command line.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts.map(String::from).collect()))
    }
}

impl Notifier for CommandNotifier {
    fn notify(&self, message: &str) {
        let result = Command::new(&self.program)
            .args(&self.args)
            .arg(message)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if let Err(e) = result {
            eprintln!("notify: failed to spawn '{}': {e}", self.program);
        }
    }
}

/// Collects messages in memory. Used by tests to assert delivery.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
