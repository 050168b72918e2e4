#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PersonPicker`**: The mode controller; call `service` or `tick` from your main loop
//! - **`Mode`**: `Idle`, `Counting`, `Animating` or `Show`
//! - **`ButtonClassifier`**: Debounces the raw button and reports short and long presses
//! - **`select`**: Draws distinct people at random
//! - **`Renderer`**: Paints the idle rainbow, the storm and the reveal
//! - **`Population`**: Person-slot to strip pixel mapping, validated at startup
//! - **`Config`**: Timing constants and selection cap
//! - **`LedStrip`**: Trait to implement for your LED strip driver
//! - **`ButtonInput`**: Trait to implement for your button pin
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Frames use 8-bit `Srgb<u8>` colors, matching what addressable strips take
//! on the wire.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod button;
pub mod colors;
pub mod config;
pub mod picker;
pub mod population;
pub mod renderer;
pub mod selector;
pub mod time;
pub mod types;

pub use button::{ButtonClassifier, ButtonInput};
pub use colors::{Color, OFF, WHITE, wheel};
pub use config::Config;
pub use picker::PersonPicker;
pub use population::Population;
pub use renderer::{LedStrip, Renderer};
pub use selector::{Selection, seeded_rng, select};
pub use time::{MillisDuration, MillisInstant, TimeDuration, TimeInstant, TimeSource};
#[cfg(feature = "embassy-time")]
pub use time::{EmbassyDuration, EmbassyInstant, EmbassyTimeSource};
pub use types::{ButtonEvent, ConfigError, Mode};
