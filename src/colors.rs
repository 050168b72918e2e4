//! Color helpers for LED frames.
//!
//! Frames are 8-bit `Srgb<u8>` values since that is what addressable strips
//! take on the wire. The hue wheel is integer-only so it stays cheap on
//! microcontrollers without an FPU.

use palette::Srgb;

/// An 8-bit RGB pixel color.
pub type Color = Srgb<u8>;

/// All channels off.
pub const OFF: Color = Srgb::new(0, 0, 0);

/// All channels at full brightness.
pub const WHITE: Color = Srgb::new(255, 255, 255);

/// Maps a wheel position to a fully saturated color.
///
/// The wheel is split into three 85-wide segments forming a closed loop:
/// `0..=84` fades red to blue, `85..=169` blue to green and `170..=255`
/// green back to red.
pub fn wheel(position: u8) -> Color {
    match position {
        0..=84 => {
            let p = position * 3;
            Srgb::new(255 - p, 0, p)
        }
        85..=169 => {
            let p = (position - 85) * 3;
            Srgb::new(0, p, 255 - p)
        }
        _ => {
            let p = (position - 170) * 3;
            Srgb::new(p, 255 - p, 0)
        }
    }
}
