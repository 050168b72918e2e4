//! Core types shared across the picker.

/// A classified button event, produced at most once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Nothing happened this tick.
    #[default]
    None,

    /// Button was pressed and released before the long-press threshold.
    ShortPress,

    /// Button was held for at least the long-press threshold.
    LongPress,
}

/// Operating mode of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Rainbow idle animation, waiting for a first press.
    Idle,

    /// Counting presses inside a sliding window.
    Counting,

    /// Random color storm before the reveal.
    Animating,

    /// Selected people are lit white until the hold time elapses.
    Show,
}

/// Configuration validation errors.
///
/// All of these are fatal: the picker refuses to start rather than run with
/// a broken mapping or timing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The position mapping table is empty.
    EmptyPopulation,

    /// More people than the population capacity.
    TooManyPeople {
        /// Maximum number of people this build supports.
        capacity: usize,
    },

    /// A mapped position is not addressable on the strip.
    PositionOutOfRange {
        /// Person-slot index.
        slot: usize,
        /// Offending physical position.
        position: usize,
        /// Number of addressable pixels on the strip.
        strip_len: usize,
    },

    /// Two person-slots share the same physical position.
    DuplicatePosition {
        /// Person-slot index of the second occurrence.
        slot: usize,
        /// Shared physical position.
        position: usize,
    },

    /// A timing constant that must be non-zero is zero.
    ZeroDuration {
        /// Name of the offending setting.
        field: &'static str,
    },

    /// Long-press threshold does not exceed the debounce time.
    LongPressNotAboveDebounce,

    /// Selection cap of zero would never light anybody.
    NothingSelectable,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::EmptyPopulation => {
                write!(f, "population must contain at least one person")
            }
            ConfigError::TooManyPeople { capacity } => {
                write!(f, "population exceeds capacity of {}", capacity)
            }
            ConfigError::PositionOutOfRange {
                slot,
                position,
                strip_len,
            } => {
                write!(
                    f,
                    "slot {} maps to position {}, but the strip only has {} pixels",
                    slot, position, strip_len
                )
            }
            ConfigError::DuplicatePosition { slot, position } => {
                write!(
                    f,
                    "slot {} maps to position {}, which is already taken",
                    slot, position
                )
            }
            ConfigError::ZeroDuration { field } => {
                write!(f, "{} must be greater than zero", field)
            }
            ConfigError::LongPressNotAboveDebounce => {
                write!(f, "long-press threshold must exceed the debounce time")
            }
            ConfigError::NothingSelectable => {
                write!(f, "at least one person must be selectable")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
