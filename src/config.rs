//! Timing and selection settings.

use crate::time::TimeDuration;
use crate::types::ConfigError;

const DEFAULT_DEBOUNCE_MS: u64 = 50;
const DEFAULT_LONG_PRESS_MS: u64 = 1_000;
const DEFAULT_COUNT_WINDOW_MS: u64 = 2_000;
const DEFAULT_IDLE_STEP_MS: u64 = 20;
const DEFAULT_ANIM_STEP_MS: u64 = 50;
const DEFAULT_ANIM_DURATION_MS: u64 = 3_000;
const DEFAULT_HOLD_MS: u64 = 10_000;
const DEFAULT_RAINBOW_SPACING: u8 = 16;

/// Picker settings, fixed at startup.
///
/// Defaults suit a hand-held tactile button and a strip of a few dozen
/// pixels. Use the `with_*` setters to override individual values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<D: TimeDuration> {
    /// Minimum time between two accepted button edges.
    pub debounce: D,
    /// Hold time after which a press counts as long.
    pub long_press: D,
    /// Silence after the last short press that closes the counting window.
    pub count_window: D,
    /// Interval between idle rainbow frames.
    pub idle_step: D,
    /// Interval between storm frames while animating.
    pub anim_step: D,
    /// Total length of the storm animation.
    pub anim_duration: D,
    /// How long the selection stays lit.
    pub hold: D,
    /// Hue distance between neighbouring slots on the idle rainbow.
    pub rainbow_spacing: u8,
    /// Upper bound on how many people one round may select.
    ///
    /// `None` means the whole population.
    pub max_selectable: Option<usize>,
}

impl<D: TimeDuration> Default for Config<D> {
    fn default() -> Self {
        Self {
            debounce: D::from_millis(DEFAULT_DEBOUNCE_MS),
            long_press: D::from_millis(DEFAULT_LONG_PRESS_MS),
            count_window: D::from_millis(DEFAULT_COUNT_WINDOW_MS),
            idle_step: D::from_millis(DEFAULT_IDLE_STEP_MS),
            anim_step: D::from_millis(DEFAULT_ANIM_STEP_MS),
            anim_duration: D::from_millis(DEFAULT_ANIM_DURATION_MS),
            hold: D::from_millis(DEFAULT_HOLD_MS),
            rainbow_spacing: DEFAULT_RAINBOW_SPACING,
            max_selectable: None,
        }
    }
}

impl<D: TimeDuration> Config<D> {
    /// Sets the debounce time.
    pub fn with_debounce(mut self, debounce: D) -> Self {
        self.debounce = debounce;
        self
    }

    /// Sets the long-press threshold.
    pub fn with_long_press(mut self, long_press: D) -> Self {
        self.long_press = long_press;
        self
    }

    /// Sets the counting window.
    pub fn with_count_window(mut self, count_window: D) -> Self {
        self.count_window = count_window;
        self
    }

    /// Sets the idle frame interval.
    pub fn with_idle_step(mut self, idle_step: D) -> Self {
        self.idle_step = idle_step;
        self
    }

    /// Sets the storm frame interval.
    pub fn with_anim_step(mut self, anim_step: D) -> Self {
        self.anim_step = anim_step;
        self
    }

    /// Sets the storm animation length.
    pub fn with_anim_duration(mut self, anim_duration: D) -> Self {
        self.anim_duration = anim_duration;
        self
    }

    /// Sets the reveal hold time.
    pub fn with_hold(mut self, hold: D) -> Self {
        self.hold = hold;
        self
    }

    /// Sets the hue spacing between neighbouring slots.
    pub fn with_rainbow_spacing(mut self, spacing: u8) -> Self {
        self.rainbow_spacing = spacing;
        self
    }

    /// Caps the number of people selected per round.
    pub fn with_max_selectable(mut self, max: usize) -> Self {
        self.max_selectable = Some(max);
        self
    }

    /// Checks the timing table for values the state machine cannot work with.
    ///
    /// # Errors
    /// * `ZeroDuration` - a window, step, or hold time is zero
    /// * `LongPressNotAboveDebounce` - a long press could never be told apart
    ///   from a bounce
    /// * `NothingSelectable` - the selection cap is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("long_press", self.long_press),
            ("count_window", self.count_window),
            ("idle_step", self.idle_step),
            ("anim_step", self.anim_step),
            ("anim_duration", self.anim_duration),
            ("hold", self.hold),
        ];
        for (field, value) in required {
            if value == D::ZERO {
                return Err(ConfigError::ZeroDuration { field });
            }
        }

        if self.long_press.as_millis() <= self.debounce.as_millis() {
            return Err(ConfigError::LongPressNotAboveDebounce);
        }

        if self.max_selectable == Some(0) {
            return Err(ConfigError::NothingSelectable);
        }

        Ok(())
    }
}
