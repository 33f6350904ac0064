use super::*;

fn running_at(start_ms: u64) -> Stopwatch {
    let mut watch = Stopwatch::default();
    watch.start(start_ms).expect("idle watch starts");
    watch
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn new_stopwatch_is_idle_at_zero() {
    let watch = Stopwatch::default();
    assert_eq!(watch.status(), StopwatchStatus::Idle);
    assert_eq!(watch.elapsed_ms(), 0);
    assert_eq!(watch.display(), "00:00:00");
}

#[test]
fn tick_measures_from_start() {
    let mut watch = running_at(10_000);
    assert!(watch.tick(13_500));
    assert_eq!(watch.elapsed_ms(), 3_500);
    assert_eq!(watch.display(), "00:00:03");
}

#[test]
fn tick_is_ignored_unless_running() {
    let mut watch = Stopwatch::default();
    assert!(!watch.tick(5_000));
    assert_eq!(watch.elapsed_ms(), 0);

    let mut watch = running_at(0);
    watch.tick(2_000);
    watch.pause().expect("running watch pauses");
    assert!(!watch.tick(60_000));
    assert_eq!(watch.elapsed_ms(), 2_000);
}

#[test]
fn elapsed_never_decreases_when_clock_steps_back() {
    let mut watch = running_at(10_000);
    watch.tick(15_000);
    assert!(!watch.tick(12_000));
    assert_eq!(watch.elapsed_ms(), 5_000);
}

#[test]
fn pause_freezes_last_ticked_value() {
    let mut watch = running_at(0);
    watch.tick(4_000);
    watch.pause().expect("running watch pauses");
    assert_eq!(watch.status(), StopwatchStatus::Paused);
    assert_eq!(watch.elapsed_ms(), 4_000);
}

#[test]
fn resume_continues_from_paused_elapsed() {
    let mut watch = running_at(1_000);
    watch.tick(61_000);
    watch.pause().expect("pause");
    // Ten minutes pass while paused.
    watch.start(661_000).expect("resume");
    watch.tick(691_000);
    assert_eq!(watch.elapsed_ms(), 90_000);
    assert_eq!(watch.display(), "00:01:30");
}

#[test]
fn repeated_pause_resume_accumulates_running_time_only() {
    let mut watch = Stopwatch::default();
    let mut now = 0_u64;
    let mut expected = 0_u64;
    for (run, idle) in [(3_000_u64, 7_000_u64), (12_000, 1_000), (500, 90_000), (45_000, 0)] {
        watch.start(now).expect("start or resume");
        now += run;
        watch.tick(now);
        expected += run;
        assert_eq!(watch.elapsed_ms(), expected);
        watch.pause().expect("pause");
        now += idle;
        assert_eq!(watch.elapsed_ms(), expected);
    }
}

#[test]
fn start_while_running_is_rejected() {
    let mut watch = running_at(0);
    assert_eq!(
        watch.start(1_000),
        Err(ClientError::InvalidTransition { action: "start", from: StopwatchStatus::Running })
    );
}

#[test]
fn pause_while_idle_is_rejected() {
    let mut watch = Stopwatch::default();
    assert_eq!(
        watch.pause(),
        Err(ClientError::InvalidTransition { action: "pause", from: StopwatchStatus::Idle })
    );
}

// =============================================================
// Finish
// =============================================================

#[test]
fn finish_declined_leaves_state_unchanged() {
    let mut watch = running_at(0);
    watch.tick(300_000);
    let before = watch.clone();
    assert_eq!(watch.finish(false), Err(ClientError::UserDeclined));
    assert_eq!(watch, before);
    assert_eq!(watch.status(), StopwatchStatus::Running);
}

#[test]
fn finish_confirmed_returns_displayed_duration() {
    let mut watch = running_at(0);
    watch.tick(300_400);
    assert_eq!(watch.finish(true), Ok("00:05:00".to_owned()));
    assert_eq!(watch.status(), StopwatchStatus::Finished);
}

#[test]
fn finish_from_paused_is_allowed() {
    let mut watch = running_at(0);
    watch.tick(61_000);
    watch.pause().expect("pause");
    assert_eq!(watch.finish(true), Ok("00:01:01".to_owned()));
}

#[test]
fn finished_stopwatch_is_immutable() {
    let mut watch = running_at(0);
    watch.tick(5_000);
    watch.finish(true).expect("finish");
    assert!(!watch.tick(50_000));
    assert!(watch.start(60_000).is_err());
    assert!(watch.pause().is_err());
    assert!(watch.finish(true).is_err());
    assert_eq!(watch.elapsed_ms(), 5_000);
}

#[test]
fn finish_while_idle_is_rejected() {
    let mut watch = Stopwatch::default();
    assert_eq!(
        watch.finish(true),
        Err(ClientError::InvalidTransition { action: "finish", from: StopwatchStatus::Idle })
    );
}

// =============================================================
// Navigation guard and labels
// =============================================================

#[test]
fn unsaved_work_is_armed_only_while_running() {
    let mut watch = Stopwatch::default();
    assert!(!watch.unsaved_work());
    watch.start(0).expect("start");
    assert!(watch.unsaved_work());
    watch.pause().expect("pause");
    assert!(!watch.unsaved_work());
    watch.start(1_000).expect("resume");
    assert!(watch.unsaved_work());
    watch.finish(true).expect("finish");
    assert!(!watch.unsaved_work());
}

#[test]
fn start_label_switches_to_resume_after_pause() {
    let mut watch = Stopwatch::default();
    assert_eq!(watch.start_label("Start", "Resume"), "Start");
    watch.start(0).expect("start");
    watch.pause().expect("pause");
    assert_eq!(watch.start_label("Start", "Resume"), "Resume");
}
