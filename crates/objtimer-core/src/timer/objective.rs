use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One timed event: fires at `trigger_secs` of elapsed time, and again every
/// `repeat_secs` after that when a repeat interval is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub label: String,
    /// Elapsed time in seconds at which the objective first fires.
    pub trigger_secs: u64,
    /// Text delivered to the notifier.
    pub message: String,
    /// Repeat cadence in seconds; `None` means one-shot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_secs: Option<u64>,
    /// User-added objectives may be removed; built-ins may not.
    #[serde(default)]
    pub custom: bool,
}

impl Objective {
    pub fn new(label: &str, trigger_secs: u64, message: &str) -> Self {
        Self {
            label: label.into(),
            trigger_secs,
            message: message.into(),
            repeat_secs: None,
            custom: false,
        }
    }

    pub fn with_repeat(mut self, repeat_secs: u64) -> Self {
        self.repeat_secs = Some(repeat_secs);
        self
    }

    /// Boundary validation. The scheduler assumes a validated schedule and
    /// does not re-check per tick.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        if self.repeat_secs == Some(0) {
            return Err(ValidationError::ZeroRepeat {
                label: self.label.clone(),
            });
        }
        Ok(())
    }
}

/// The ordered objective definitions for a run.
///
/// Read-only to the scheduler during a tick; replaced wholesale between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveSchedule {
    pub objectives: Vec<Objective>,
}

impl ObjectiveSchedule {
    pub fn new(objectives: Vec<Objective>) -> Self {
        Self { objectives }
    }

    /// The built-in match objectives.
    pub fn default_builtin() -> Self {
        Self {
            objectives: vec![
                Objective::new("Buff", 285, "15 seconds until the Buff appears").with_repeat(300),
                Objective::new("Vault", 465, "15 seconds until the Vault appears"),
                Objective::new("Urn", 570, "30 seconds until the Urn appears").with_repeat(300),
                Objective::new("Guardian", 875, "Destroy the Guardians"),
                Objective::new("Walker", 1115, "Destroy the Walkers"),
                Objective::new("Mid-Boss", 1380, "Destroy the Mid-Boss"),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for obj in &self.objectives {
            obj.validate()?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Objective> {
        self.objectives.iter()
    }

    /// Number of leading built-in objectives (customs are appended after).
    pub fn builtin_count(&self) -> usize {
        self.objectives
            .iter()
            .position(|o| o.custom)
            .unwrap_or(self.objectives.len())
    }
}

impl Default for ObjectiveSchedule {
    fn default() -> Self {
        Self::default_builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_has_6_objectives() {
        let s = ObjectiveSchedule::default();
        assert_eq!(s.len(), 6);
    }

    #[test]
    fn default_schedule_repeats() {
        let s = ObjectiveSchedule::default();
        let repeats: Vec<_> = s
            .iter()
            .filter(|o| o.repeat_secs.is_some())
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(repeats, vec!["Buff", "Urn"]);
    }

    #[test]
    fn default_schedule_is_valid() {
        assert!(ObjectiveSchedule::default().validate().is_ok());
    }

    #[test]
    fn empty_label_rejected() {
        let obj = Objective::new("  ", 10, "msg");
        assert!(matches!(obj.validate(), Err(ValidationError::EmptyLabel)));
    }

    #[test]
    fn zero_repeat_rejected() {
        let obj = Objective::new("x", 10, "msg").with_repeat(0);
        assert!(matches!(
            obj.validate(),
            Err(ValidationError::ZeroRepeat { .. })
        ));
    }

    #[test]
    fn builtin_count_excludes_customs() {
        let mut s = ObjectiveSchedule::default();
        let mut custom = Objective::new("Custom", 60, "custom");
        custom.custom = true;
        s.objectives.push(custom);
        assert_eq!(s.builtin_count(), 6);
        assert_eq!(s.len(), 7);
    }
}
