//! Debounced single-button classifier.
//!
//! Turns raw level samples into [`ButtonEvent`]s. A level change becomes an
//! edge only after the new level has held for `debounce` and at least
//! `debounce` has passed since the previous accepted edge, so contact bounce
//! and single-sample glitches never reach the state machine.

use crate::time::{TimeDuration, TimeInstant};
use crate::types::ButtonEvent;

/// Trait for reading the raw button level.
///
/// Implement this for your GPIO pin. Return `true` while the button is
/// physically pressed, whatever the electrical polarity.
pub trait ButtonInput {
    /// Samples the button.
    fn is_pressed(&mut self) -> bool;
}

/// Classifies presses as short or long.
///
/// Call [`update`](Self::update) once per scheduler tick. A long press is
/// reported as soon as the threshold is crossed, without waiting for release,
/// and is reported only once however long the button stays down.
///
/// Press durations are measured between the first samples of the pressed and
/// released levels, so the settling delay does not skew classification.
#[derive(Debug, Clone, Copy)]
pub struct ButtonClassifier<I: TimeInstant> {
    debounce: I::Duration,
    long_press: I::Duration,
    stable_pressed: bool,
    changed_at: Option<I>,
    last_edge: Option<I>,
    press_start: Option<I>,
    long_press_armed: bool,
}

impl<I: TimeInstant> ButtonClassifier<I> {
    /// Creates a classifier with the button assumed released.
    pub fn new(debounce: I::Duration, long_press: I::Duration) -> Self {
        Self {
            debounce,
            long_press,
            stable_pressed: false,
            changed_at: None,
            last_edge: None,
            press_start: None,
            long_press_armed: false,
        }
    }

    /// Feeds one raw sample and returns the event it completes, if any.
    pub fn update(&mut self, now: I, raw_pressed: bool) -> ButtonEvent {
        if raw_pressed == self.stable_pressed {
            self.changed_at = None;
        } else {
            let changed_at = *self.changed_at.get_or_insert(now);
            if self.settled(changed_at, now) {
                self.changed_at = None;
                self.stable_pressed = raw_pressed;
                self.last_edge = Some(now);

                if raw_pressed {
                    self.press_start = Some(changed_at);
                    self.long_press_armed = true;
                } else {
                    return self.on_release(changed_at);
                }
            }
        }

        if raw_pressed && self.stable_pressed && self.long_press_armed && self.held_long(now) {
            self.long_press_armed = false;
            return ButtonEvent::LongPress;
        }

        ButtonEvent::None
    }

    /// Returns true while the debounced level is pressed.
    pub fn is_pressed(&self) -> bool {
        self.stable_pressed
    }

    fn settled(&self, changed_at: I, now: I) -> bool {
        if !now.duration_since(changed_at).has_reached(self.debounce) {
            return false;
        }
        match self.last_edge {
            Some(last) => now.duration_since(last).has_reached(self.debounce),
            None => true,
        }
    }

    fn held_long(&self, at: I) -> bool {
        self.press_start
            .is_some_and(|start| at.duration_since(start).has_reached(self.long_press))
    }

    fn on_release(&mut self, released_at: I) -> ButtonEvent {
        if !self.long_press_armed {
            // Long press already reported while held.
            return ButtonEvent::None;
        }
        self.long_press_armed = false;

        if self.held_long(released_at) {
            ButtonEvent::LongPress
        } else {
            ButtonEvent::ShortPress
        }
    }
}
