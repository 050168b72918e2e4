//! Shared test infrastructure for person-picker integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use person_picker::{
    ButtonInput, Color, Config, LedStrip, OFF, PersonPicker, TimeDuration, TimeInstant,
    TimeSource,
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Button whose level is set directly by the test
#[derive(Default)]
pub struct MockButton {
    pub pressed: bool,
}

impl ButtonInput for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

// ============================================================================
// Mock LED Strip
// ============================================================================

/// Mock strip that keeps the staged frame and the last flushed frame
pub struct MockStrip {
    staged: Vec<Color>,
    shown: Vec<Color>,
    flushes: usize,
}

impl MockStrip {
    pub fn new(len: usize) -> Self {
        Self {
            staged: vec![OFF; len],
            shown: vec![OFF; len],
            flushes: 0,
        }
    }

    /// Colors on the LEDs as of the last flush
    pub fn shown(&self) -> &[Color] {
        &self.shown
    }

    pub fn pixel(&self, position: usize) -> Color {
        self.shown[position]
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Positions currently lit with any color
    pub fn lit_positions(&self) -> Vec<usize> {
        self.shown
            .iter()
            .enumerate()
            .filter(|(_, color)| **color != OFF)
            .map(|(position, _)| position)
            .collect()
    }
}

impl LedStrip for MockStrip {
    fn len(&self) -> usize {
        self.staged.len()
    }

    fn set_pixel(&mut self, position: usize, color: Color) {
        if let Some(pixel) = self.staged.get_mut(position) {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        self.shown.copy_from_slice(&self.staged);
        self.flushes += 1;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestPicker = PersonPicker<TestInstant, MockStrip, ChaCha8Rng, 8>;

/// Round-number timing so tests can reason about exact tick boundaries
pub fn test_config() -> Config<TestDuration> {
    Config::default()
        .with_debounce(TestDuration(50))
        .with_long_press(TestDuration(1000))
        .with_count_window(TestDuration(2000))
        .with_idle_step(TestDuration(20))
        .with_anim_step(TestDuration(50))
        .with_anim_duration(TestDuration(3000))
        .with_hold(TestDuration(5000))
        .with_rainbow_spacing(16)
}

pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x5EED)
}

/// Picker with people on every other pixel of a 12-pixel strip
pub fn picker_with(config: Config<TestDuration>) -> TestPicker {
    PersonPicker::new(config, &[0, 2, 4, 6, 8, 10], MockStrip::new(12), rng()).unwrap()
}

pub fn picker() -> TestPicker {
    picker_with(test_config())
}
