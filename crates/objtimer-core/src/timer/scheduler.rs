//! Per-tick objective evaluation.
//!
//! `due()` is a pure function over the current elapsed second, the schedule,
//! and the tracker. It never mutates: the caller delivers the firings and
//! then marks their instants, so every objective in one tick is evaluated
//! against the tracker state at tick entry. That is what lets two
//! objectives landing on the same second both fire in that tick even
//! though only the single instant gets recorded.

use super::objective::ObjectiveSchedule;
use super::tracker::NotificationTracker;

/// One notification decided for the current tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Firing {
    pub label: String,
    pub message: String,
    /// The elapsed second being recorded in the tracker for this firing.
    pub instant: u64,
}

/// Decide which objectives fire at `elapsed`.
///
/// An objective fires on exact match (`elapsed == trigger_secs`, instant not
/// yet delivered) or on a repeat landing (`elapsed > trigger_secs`, the
/// offset divides the repeat interval, `elapsed` not yet delivered). The two
/// branches are disjoint, so an objective qualifies at most once per tick.
///
/// A missed instant is never revisited: evaluation happens only at the
/// elapsed second the clock is actually at, so pausing through a trigger
/// skips it permanently.
pub fn due(
    elapsed: u64,
    schedule: &ObjectiveSchedule,
    tracker: &NotificationTracker,
) -> Vec<Firing> {
    let mut firings = Vec::new();
    for obj in schedule.iter() {
        if elapsed == obj.trigger_secs && !tracker.has(obj.trigger_secs) {
            firings.push(Firing {
                label: obj.label.clone(),
                message: obj.message.clone(),
                instant: obj.trigger_secs,
            });
        }
        if let Some(repeat) = obj.repeat_secs {
            if elapsed > obj.trigger_secs
                && (elapsed - obj.trigger_secs) % repeat == 0
                && !tracker.has(elapsed)
            {
                firings.push(Firing {
                    label: obj.label.clone(),
                    message: obj.message.clone(),
                    instant: elapsed,
                });
            }
        }
    }
    firings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::objective::Objective;

    fn schedule(objectives: Vec<Objective>) -> ObjectiveSchedule {
        ObjectiveSchedule::new(objectives)
    }

    #[test]
    fn exact_match_fires_once() {
        let s = schedule(vec![Objective::new("Vault", 465, "vault up")]);
        let mut tracker = NotificationTracker::new();

        let firings = due(465, &s, &tracker);
        assert_eq!(firings.len(), 1);
        assert_eq!(firings[0].instant, 465);

        tracker.mark(465);
        assert!(due(465, &s, &tracker).is_empty());
    }

    #[test]
    fn no_fire_off_the_exact_second() {
        let s = schedule(vec![Objective::new("Vault", 465, "vault up")]);
        let tracker = NotificationTracker::new();
        assert!(due(464, &s, &tracker).is_empty());
        assert!(due(466, &s, &tracker).is_empty());
    }

    #[test]
    fn repeat_lands_on_trigger_plus_multiples() {
        let s = schedule(vec![
            Objective::new("Buff", 285, "buff soon").with_repeat(300)
        ]);
        let tracker = NotificationTracker::new();

        assert_eq!(due(285, &s, &tracker).len(), 1);
        assert_eq!(due(585, &s, &tracker).len(), 1);
        assert_eq!(due(885, &s, &tracker).len(), 1);
        assert!(due(584, &s, &tracker).is_empty());
        assert!(due(586, &s, &tracker).is_empty());
    }

    #[test]
    fn repeat_instant_is_the_current_second() {
        let s = schedule(vec![
            Objective::new("Buff", 285, "buff soon").with_repeat(300)
        ]);
        let tracker = NotificationTracker::new();
        let firings = due(585, &s, &tracker);
        assert_eq!(firings[0].instant, 585);
    }

    #[test]
    fn shared_instant_fires_both_against_entry_state() {
        // A one-shot at 100 and a repeat (40 + k*20) landing on 100.
        let s = schedule(vec![
            Objective::new("A", 100, "a"),
            Objective::new("B", 40, "b").with_repeat(20),
        ]);
        let tracker = NotificationTracker::new();
        let firings = due(100, &s, &tracker);
        assert_eq!(firings.len(), 2);
        assert!(firings.iter().all(|f| f.instant == 100));
    }

    #[test]
    fn recorded_instant_suppresses_later_exact_match() {
        // The tracker is instant-keyed: once 100 is recorded, a different
        // objective triggering at 100 reads as already delivered.
        let s = schedule(vec![Objective::new("C", 100, "c")]);
        let mut tracker = NotificationTracker::new();
        tracker.mark(100);
        assert!(due(100, &s, &tracker).is_empty());
    }

    #[test]
    fn zero_trigger_never_exact_matches_after_start() {
        // Ticks evaluate post-increment counters only, so elapsed 0 is never
        // seen here; a repeat on a zero trigger still lands at r, 2r, ...
        let s = schedule(vec![Objective::new("Z", 0, "z").with_repeat(30)]);
        let tracker = NotificationTracker::new();
        assert_eq!(due(30, &s, &tracker).len(), 1);
        assert_eq!(due(60, &s, &tracker).len(), 1);
        assert!(due(31, &s, &tracker).is_empty());
    }
}
