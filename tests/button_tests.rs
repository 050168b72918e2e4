//! Integration tests for ButtonClassifier

mod common;
use common::*;

use person_picker::{ButtonClassifier, ButtonEvent, MillisDuration, MillisInstant};

fn classifier() -> ButtonClassifier<TestInstant> {
    ButtonClassifier::new(TestDuration(50), TestDuration(1000))
}

/// Feeds `(time, level)` samples and collects every non-empty event
fn run(button: &mut ButtonClassifier<TestInstant>, samples: &[(u64, bool)]) -> Vec<ButtonEvent> {
    samples
        .iter()
        .map(|&(time, level)| button.update(TestInstant(time), level))
        .filter(|event| *event != ButtonEvent::None)
        .collect()
}

/// Holds `level` from `start` to `end` inclusive, sampling every `step` ms
fn hold(start: u64, end: u64, step: u64, level: bool) -> Vec<(u64, bool)> {
    (start..=end).step_by(step as usize).map(|t| (t, level)).collect()
}

#[test]
fn short_press_emits_one_short_press_on_release() {
    let mut button = classifier();

    let mut samples = hold(0, 290, 10, true);
    samples.extend(hold(300, 600, 10, false));

    assert_eq!(run(&mut button, &samples), vec![ButtonEvent::ShortPress]);
}

#[test]
fn short_press_is_reported_once_the_release_settles() {
    let mut button = classifier();

    assert_eq!(button.update(TestInstant(0), true), ButtonEvent::None);
    assert_eq!(button.update(TestInstant(400), true), ButtonEvent::None);
    assert_eq!(button.update(TestInstant(500), false), ButtonEvent::None);
    assert_eq!(button.update(TestInstant(549), false), ButtonEvent::None);
    assert_eq!(
        button.update(TestInstant(550), false),
        ButtonEvent::ShortPress
    );
}

#[test]
fn press_just_under_threshold_is_still_short() {
    let mut button = classifier();

    // Held from 0 until the release begins at 999
    let events = run(&mut button, &[(0, true), (50, true), (999, false), (1049, false)]);
    assert_eq!(events, vec![ButtonEvent::ShortPress]);
}

#[test]
fn long_press_fires_while_held_exactly_once() {
    let mut button = classifier();

    for t in (0..1000).step_by(10) {
        assert_eq!(button.update(TestInstant(t), true), ButtonEvent::None);
    }
    assert_eq!(button.update(TestInstant(1000), true), ButtonEvent::LongPress);

    // Keep holding well past the threshold, then release
    let mut samples = hold(1010, 5000, 10, true);
    samples.extend(hold(5010, 5500, 10, false));
    assert!(run(&mut button, &samples).is_empty());
}

#[test]
fn late_tick_after_long_hold_still_reports_long_press_once() {
    let mut button = classifier();

    // Scheduler stalls: no sample between the settled press and the release
    let events = run(
        &mut button,
        &[(0, true), (60, true), (2500, false), (2600, false)],
    );
    assert_eq!(events, vec![ButtonEvent::LongPress]);
}

#[test]
fn bounce_faster_than_debounce_is_ignored() {
    let mut button = classifier();

    assert_eq!(button.update(TestInstant(0), true), ButtonEvent::None);
    assert_eq!(button.update(TestInstant(50), true), ButtonEvent::None);
    assert!(button.is_pressed());

    // Release flickers for 10 ms and bounces back
    assert_eq!(button.update(TestInstant(60), false), ButtonEvent::None);
    assert_eq!(button.update(TestInstant(70), true), ButtonEvent::None);
    assert_eq!(button.update(TestInstant(200), true), ButtonEvent::None);
    assert!(button.is_pressed());
}

#[test]
fn isolated_spike_shorter_than_debounce_is_ignored() {
    let mut button = classifier();

    let mut samples = hold(0, 4990, 10, false);
    samples.push((5000, true));
    samples.extend(hold(5010, 6000, 10, false));

    assert!(run(&mut button, &samples).is_empty());
    assert!(!button.is_pressed());
}

#[test]
fn spike_after_a_press_does_not_start_another() {
    let mut button = classifier();

    let mut samples = hold(0, 200, 10, true);
    samples.extend(hold(210, 1000, 10, false));
    samples.push((1010, true));
    samples.push((1015, true));
    samples.extend(hold(1020, 2000, 10, false));

    assert_eq!(run(&mut button, &samples), vec![ButtonEvent::ShortPress]);
}

#[test]
fn flips_within_debounce_produce_at_most_one_event() {
    let mut button = classifier();

    let samples = [
        (0, true),
        (5, false),
        (10, true),
        (15, false),
        (20, true),
        (25, false),
        (30, false),
        (40, false),
        (60, false),
        (200, false),
    ];
    assert!(run(&mut button, &samples).len() <= 1);
}

#[test]
fn bouncy_press_and_release_is_one_short_press() {
    let mut button = classifier();

    let samples = [
        // Press with contact bounce
        (0, true),
        (3, false),
        (6, true),
        (9, false),
        (12, true),
        (100, true),
        // Release with contact bounce
        (300, false),
        (303, true),
        (306, false),
        (309, true),
        (312, false),
        (500, false),
    ];
    assert_eq!(run(&mut button, &samples), vec![ButtonEvent::ShortPress]);
}

#[test]
fn consecutive_presses_are_each_reported() {
    let mut button = classifier();

    let samples = [
        (0, true),
        (50, true),
        (100, false),
        (150, false),
        (200, true),
        (250, true),
        (300, false),
        (350, false),
        (400, true),
        (450, true),
        (500, false),
        (550, false),
    ];
    assert_eq!(
        run(&mut button, &samples),
        vec![
            ButtonEvent::ShortPress,
            ButtonEvent::ShortPress,
            ButtonEvent::ShortPress
        ]
    );
}

#[test]
fn new_press_after_long_press_is_armed_again() {
    let mut button = classifier();

    let mut samples = hold(0, 1500, 10, true);
    samples.extend(hold(1510, 1700, 10, false));
    samples.extend(hold(1710, 1900, 10, true));
    samples.push((2000, false));
    samples.push((2050, false));

    assert_eq!(
        run(&mut button, &samples),
        vec![ButtonEvent::LongPress, ButtonEvent::ShortPress]
    );
}

#[test]
fn release_at_threshold_tick_is_not_reported_twice() {
    let mut button = classifier();

    let events = run(
        &mut button,
        &[(0, true), (990, true), (1000, false), (1010, false), (1100, false)],
    );
    assert_eq!(events, vec![ButtonEvent::LongPress]);
}

#[test]
fn classifier_handles_millisecond_counter_wrap() {
    let mut button: ButtonClassifier<MillisInstant> =
        ButtonClassifier::new(MillisDuration(50), MillisDuration(1000));

    let start = u32::MAX - 100;
    let at = |offset: u32| MillisInstant(start.wrapping_add(offset));

    assert_eq!(button.update(at(0), true), ButtonEvent::None);
    assert_eq!(button.update(at(60), true), ButtonEvent::None);
    assert_eq!(button.update(at(300), false), ButtonEvent::None);
    assert_eq!(button.update(at(360), false), ButtonEvent::ShortPress);
}
