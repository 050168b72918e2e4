//! Frame generation for each picker mode.
//!
//! The renderer owns no timing. Callers decide when a frame is due; each
//! `render_*` call paints the strip and flushes it exactly once.

use crate::colors::{Color, OFF, WHITE, wheel};
use crate::population::Population;
use crate::selector::Selection;
use palette::Srgb;
use rand_core::RngCore;

/// Trait for abstracting addressable LED strip hardware.
///
/// Implement this for your strip driver (WS2812 over SPI, RMT, PIO, etc.).
/// `set_pixel` only stages a color; nothing reaches the LEDs until `flush`.
pub trait LedStrip {
    /// Number of addressable pixels.
    fn len(&self) -> usize;

    /// Returns true if the strip has no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stages a color for one pixel. Out-of-range positions must be ignored.
    fn set_pixel(&mut self, position: usize, color: Color);

    /// Pushes the staged frame to the hardware.
    fn flush(&mut self);
}

/// Paints idle, storm and reveal frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    hue_offset: u8,
    spacing: u8,
}

impl Renderer {
    /// Creates a renderer starting at hue offset zero.
    pub const fn new(spacing: u8) -> Self {
        Self {
            hue_offset: 0,
            spacing,
        }
    }

    /// Base hue the next idle frame starts from.
    pub fn hue_offset(&self) -> u8 {
        self.hue_offset
    }

    /// Wheel position slot `slot` gets on the next idle frame.
    pub fn slot_hue(&self, slot: usize) -> u8 {
        // Truncating to u8 keeps the product modulo 256.
        self.hue_offset
            .wrapping_add((slot as u8).wrapping_mul(self.spacing))
    }

    /// Paints one rainbow frame, then advances the hue offset by one.
    pub fn render_idle<S: LedStrip, const N: usize>(
        &mut self,
        strip: &mut S,
        population: &Population<N>,
    ) {
        for (slot, position) in population.positions().iter().copied().enumerate() {
            strip.set_pixel(position, wheel(self.slot_hue(slot)));
        }
        strip.flush();
        self.hue_offset = self.hue_offset.wrapping_add(1);
    }

    /// Paints every person an independent random color.
    pub fn render_storm<S: LedStrip, R: RngCore, const N: usize>(
        &self,
        strip: &mut S,
        population: &Population<N>,
        rng: &mut R,
    ) {
        for position in population.positions().iter().copied() {
            let [red, green, blue, _] = rng.next_u32().to_le_bytes();
            strip.set_pixel(position, Srgb::new(red, green, blue));
        }
        strip.flush();
    }

    /// Blanks the strip and lights the selected people white.
    ///
    /// Indices with no person-slot are skipped.
    pub fn render_show<S: LedStrip, const N: usize, const M: usize>(
        &self,
        strip: &mut S,
        population: &Population<N>,
        selection: &Selection<M>,
    ) {
        Self::fill(strip, OFF);
        for position in selection.iter().filter_map(|slot| population.position(slot)) {
            strip.set_pixel(position, WHITE);
        }
        strip.flush();
    }

    /// Turns every pixel off.
    pub fn clear<S: LedStrip>(&self, strip: &mut S) {
        Self::fill(strip, OFF);
        strip.flush();
    }

    fn fill<S: LedStrip>(strip: &mut S, color: Color) {
        for position in 0..strip.len() {
            strip.set_pixel(position, color);
        }
    }
}
