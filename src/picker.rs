//! The mode controller tying input, selection and rendering together.
//!
//! Provides [`PersonPicker`], a cooperative state machine driven by a polling
//! loop. It never blocks: every wait is a comparison between the instant
//! passed to the current tick and a timestamp recorded earlier, so late or
//! irregular ticks are handled with the correct elapsed time.

use crate::button::{ButtonClassifier, ButtonInput};
use crate::config::Config;
use crate::population::Population;
use crate::renderer::{LedStrip, Renderer};
use crate::selector::{Selection, select};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ButtonEvent, ConfigError, Mode};
use rand_core::RngCore;

/// Single-button random person picker.
///
/// A short press in `Idle` opens a counting window; every further short
/// press adds one person. When the window closes the strip storms with random
/// colors, then the chosen people are lit white for the hold time. A long
/// press returns to `Idle` from anywhere.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `S` - LED strip implementation type
/// * `R` - Random number generator
/// * `N` - Maximum number of people
pub struct PersonPicker<I: TimeInstant, S: LedStrip, R: RngCore, const N: usize> {
    config: Config<I::Duration>,
    population: Population<N>,
    strip: S,
    rng: R,
    classifier: ButtonClassifier<I>,
    renderer: Renderer,
    mode: Mode,
    mode_entered: Option<I>,
    last_render: Option<I>,
    window_start: Option<I>,
    requested_count: usize,
    selection: Selection<N>,
}

impl<I: TimeInstant, S: LedStrip, R: RngCore, const N: usize> PersonPicker<I, S, R, N> {
    /// Validates the configuration and creates an idle picker with the strip
    /// turned off.
    ///
    /// `positions[i]` is the strip pixel of person `i`.
    ///
    /// # Errors
    /// Any [`ConfigError`]. No picker is created and the strip is left
    /// untouched, so a misconfigured device stays dark.
    pub fn new(
        config: Config<I::Duration>,
        positions: &[usize],
        mut strip: S,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let population = Population::new(positions, strip.len())?;

        let renderer = Renderer::new(config.rainbow_spacing);
        renderer.clear(&mut strip);

        Ok(Self {
            classifier: ButtonClassifier::new(config.debounce, config.long_press),
            config,
            population,
            strip,
            rng,
            renderer,
            mode: Mode::Idle,
            mode_entered: None,
            last_render: None,
            window_start: None,
            requested_count: 0,
            selection: Selection::new(),
        })
    }

    /// Runs one polling-loop iteration against the hardware capabilities.
    pub fn service<T, B>(&mut self, time_source: &T, button: &mut B) -> Mode
    where
        T: TimeSource<I>,
        B: ButtonInput,
    {
        let now = time_source.now();
        let pressed = button.is_pressed();
        self.tick(now, pressed)
    }

    /// Classifies a raw button sample and advances the state machine.
    pub fn tick(&mut self, now: I, raw_pressed: bool) -> Mode {
        let event = self.classifier.update(now, raw_pressed);
        self.process(now, event)
    }

    /// Advances the state machine with an already classified event.
    ///
    /// Order within a tick: apply the event, check the active mode's timer,
    /// then render if the mode's frame interval has elapsed.
    pub fn process(&mut self, now: I, event: ButtonEvent) -> Mode {
        let mode_before = self.mode;

        if event != ButtonEvent::None {
            #[cfg(feature = "defmt")]
            defmt::trace!("button {} in {}", event, self.mode);
            self.apply_event(now, event);
        }
        self.check_timer(now);

        // Idle's first frame waits for the next tick.
        let just_went_idle = self.mode == Mode::Idle && mode_before != Mode::Idle;
        if !just_went_idle {
            self.render_if_due(now);
        }

        self.mode
    }

    fn apply_event(&mut self, now: I, event: ButtonEvent) {
        match (self.mode, event) {
            (_, ButtonEvent::None) => {}
            (Mode::Idle, ButtonEvent::ShortPress) => {
                self.requested_count = 1;
                self.enter(Mode::Counting, now);
            }
            (Mode::Idle, ButtonEvent::LongPress) => {
                self.renderer.clear(&mut self.strip);
                self.last_render = Some(now);
            }
            (Mode::Counting, ButtonEvent::ShortPress) => {
                self.requested_count = (self.requested_count + 1).min(self.population.len());
                self.window_start = Some(now);
            }
            (Mode::Animating | Mode::Show, ButtonEvent::ShortPress) => {}
            (_, ButtonEvent::LongPress) => self.enter(Mode::Idle, now),
        }
    }

    fn check_timer(&mut self, now: I) {
        match self.mode {
            Mode::Idle => {}
            Mode::Counting => {
                if Self::elapsed(self.window_start, now, self.config.count_window) {
                    self.requested_count = self.requested_count.clamp(1, self.population.len());
                    self.enter(Mode::Animating, now);
                }
            }
            Mode::Animating => {
                if Self::elapsed(self.mode_entered, now, self.config.anim_duration) {
                    self.draw_selection();
                    self.enter(Mode::Show, now);
                }
            }
            Mode::Show => {
                if Self::elapsed(self.mode_entered, now, self.config.hold) {
                    self.enter(Mode::Idle, now);
                }
            }
        }
    }

    fn render_if_due(&mut self, now: I) {
        let step = match self.mode {
            Mode::Idle | Mode::Counting => self.config.idle_step,
            Mode::Animating => self.config.anim_step,
            Mode::Show => return,
        };
        if self.last_render.is_some() && !Self::elapsed(self.last_render, now, step) {
            return;
        }
        self.last_render = Some(now);

        match self.mode {
            Mode::Idle | Mode::Counting => {
                self.renderer.render_idle(&mut self.strip, &self.population);
            }
            Mode::Animating => {
                self.renderer
                    .render_storm(&mut self.strip, &self.population, &mut self.rng);
            }
            Mode::Show => {}
        }
    }

    fn enter(&mut self, mode: Mode, now: I) {
        #[cfg(feature = "defmt")]
        defmt::debug!("mode {} -> {}", self.mode, mode);

        self.mode = mode;
        self.mode_entered = Some(now);
        self.last_render = None;

        match mode {
            Mode::Idle => {
                self.requested_count = 0;
                self.window_start = None;
                self.selection.clear();
            }
            Mode::Counting => {
                self.window_start = Some(now);
            }
            Mode::Animating => {
                self.window_start = None;
            }
            Mode::Show => {
                self.renderer
                    .render_show(&mut self.strip, &self.population, &self.selection);
                self.last_render = Some(now);
            }
        }
    }

    fn draw_selection(&mut self) {
        let cap = self.config.max_selectable.unwrap_or(N);
        let count = self.requested_count.min(self.population.len()).min(cap);
        self.selection = select(&mut self.rng, count, self.population.len());
    }

    fn elapsed(since: Option<I>, now: I, threshold: I::Duration) -> bool {
        since.is_some_and(|start| now.duration_since(start).has_reached(threshold))
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// People requested so far; zero outside a round.
    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    /// The people being revealed, only while in `Show`.
    pub fn selection(&self) -> Option<&Selection<N>> {
        (self.mode == Mode::Show).then_some(&self.selection)
    }

    /// Returns the validated population.
    pub fn population(&self) -> &Population<N> {
        &self.population
    }

    /// Returns the renderer, for inspecting animation phase.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Returns a reference to the LED strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }
}
