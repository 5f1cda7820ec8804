//! End-to-end engine tests.
//!
//! Drives the controller the way the CLI's run loop does: one `tick()` per
//! simulated second, with a recording notifier standing in for speech.

use objtimer_core::notify::RecordingNotifier;
use objtimer_core::timer::{ClockState, Objective, ObjectiveSchedule, TimerController};
use objtimer_core::Event;
use proptest::prelude::*;

fn drive(controller: &mut TimerController, notifier: &RecordingNotifier, ticks: u64) -> Vec<u64> {
    let mut fired_at = Vec::new();
    for _ in 0..ticks {
        for event in controller.tick(notifier) {
            if let Event::ObjectiveFired { instant, .. } = event {
                fired_at.push(instant);
            }
        }
    }
    fired_at
}

#[test]
fn buff_fires_at_285_and_585_over_600_ticks() {
    let schedule = ObjectiveSchedule::new(vec![Objective::new(
        "Buff",
        285,
        "15 seconds until the Buff appears",
    )
    .with_repeat(300)]);
    let mut controller = TimerController::new(schedule);
    let notifier = RecordingNotifier::new();

    controller.start();
    let fired_at = drive(&mut controller, &notifier, 600);

    assert_eq!(fired_at, vec![285, 585]);
    assert_eq!(notifier.messages().len(), 2);
}

#[test]
fn full_default_schedule_session() {
    let mut controller = TimerController::new(ObjectiveSchedule::default_builtin());
    let notifier = RecordingNotifier::new();

    controller.start();
    let fired_at = drive(&mut controller, &notifier, 1500);

    // Buff 285 + repeats, Vault 465, Urn 570 + repeats, Guardian 875,
    // Walker 1115, Mid-Boss 1380.
    assert_eq!(
        fired_at,
        vec![285, 465, 570, 585, 870, 875, 885, 1115, 1170, 1185, 1380, 1470, 1485]
    );
}

#[test]
fn reset_rearms_a_completed_run() {
    let schedule = ObjectiveSchedule::new(vec![Objective::new("Vault", 10, "vault")]);
    let mut controller = TimerController::new(schedule);
    let notifier = RecordingNotifier::new();

    controller.start();
    drive(&mut controller, &notifier, 20);
    controller.reset();
    assert_eq!(controller.state(), ClockState::Idle);
    assert_eq!(controller.elapsed_secs(), 0);

    controller.start();
    drive(&mut controller, &notifier, 20);
    assert_eq!(notifier.messages(), vec!["vault", "vault"]);
}

#[test]
fn edit_commit_rearms_without_retroactive_firing() {
    let schedule = ObjectiveSchedule::new(vec![
        Objective::new("Past", 120, "past"),
        Objective::new("Ahead", 310, "ahead"),
    ]);
    let mut controller = TimerController::new(schedule);
    let notifier = RecordingNotifier::new();

    controller.start();
    drive(&mut controller, &notifier, 130);
    assert_eq!(notifier.messages(), vec!["past"]);

    controller.begin_edit();
    controller.commit_edit(5, 0);
    assert_eq!(controller.elapsed_secs(), 300);

    // "Past" (trigger 120) must not fire retroactively; "Ahead" does.
    let fired_at = drive(&mut controller, &notifier, 60);
    assert_eq!(fired_at, vec![310]);
    assert_eq!(notifier.messages(), vec!["past", "ahead"]);
}

#[test]
fn edit_commit_before_a_passed_trigger_replays_it() {
    let schedule = ObjectiveSchedule::new(vec![Objective::new("Early", 30, "early")]);
    let mut controller = TimerController::new(schedule);
    let notifier = RecordingNotifier::new();

    controller.start();
    drive(&mut controller, &notifier, 60);
    assert_eq!(notifier.messages(), vec!["early"]);

    // Wind back before the trigger: the cleared tracker re-arms it.
    controller.begin_edit();
    controller.commit_edit(0, 0);
    drive(&mut controller, &notifier, 60);
    assert_eq!(notifier.messages(), vec!["early", "early"]);
}

#[test]
fn no_notifications_while_idle_or_editing() {
    let schedule = ObjectiveSchedule::new(vec![Objective::new("X", 1, "x").with_repeat(1)]);
    let mut controller = TimerController::new(schedule);
    let notifier = RecordingNotifier::new();

    // Idle: pulses dropped.
    drive(&mut controller, &notifier, 50);
    assert!(notifier.messages().is_empty());
    assert_eq!(controller.elapsed_secs(), 0);

    // Editing: pulses dropped, counter frozen.
    controller.start();
    drive(&mut controller, &notifier, 3);
    controller.begin_edit();
    drive(&mut controller, &notifier, 50);
    assert_eq!(controller.elapsed_secs(), 3);
    assert_eq!(notifier.messages().len(), 3);
}

#[test]
fn shared_instant_fires_both_but_records_once() {
    // A one-shot at 100 and a repeat from 40 every 20 both land on 100.
    let schedule = ObjectiveSchedule::new(vec![
        Objective::new("A", 100, "a at 100"),
        Objective::new("B", 40, "b repeats").with_repeat(20),
    ]);
    let mut controller = TimerController::new(schedule);
    let notifier = RecordingNotifier::new();

    controller.start();
    let fired_at = drive(&mut controller, &notifier, 100);

    // B fires at 40, 60, 80, 100; A also fires at 100.
    let at_100 = fired_at.iter().filter(|&&i| i == 100).count();
    assert_eq!(at_100, 2);
    // The instant is recorded once; a trigger-100 objective added later
    // would read as already fired.
    assert!(controller.tracker().has(100));
    assert_eq!(fired_at, vec![40, 60, 80, 100, 100]);
}

proptest! {
    /// For trigger T and repeat R, the firing instants over an N-tick run
    /// are exactly {t in 1..=N : t == T or (t > T and (t - T) % R == 0)}.
    #[test]
    fn repeat_arithmetic_matches_closed_form(t in 0u64..400, r in 1u64..350) {
        let n = 1200u64;
        let schedule = ObjectiveSchedule::new(vec![
            Objective::new("P", t, "p").with_repeat(r),
        ]);
        let mut controller = TimerController::new(schedule);
        let notifier = RecordingNotifier::new();
        controller.start();
        let fired_at = drive(&mut controller, &notifier, n);

        let expected: Vec<u64> = (1..=n)
            .filter(|&s| s == t || (s > t && (s - t) % r == 0))
            .collect();
        prop_assert_eq!(fired_at, expected);
    }
}
