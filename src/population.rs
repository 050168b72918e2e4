//! Person-slot to strip position mapping.

use crate::types::ConfigError;
use heapless::Vec;

/// The people taking part, each bound to one physical pixel.
///
/// The mapping is validated once at construction: it is non-empty, fits the
/// capacity, only names addressable pixels, and never maps two people to the
/// same pixel.
///
/// # Type Parameters
/// * `N` - Maximum number of people
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population<const N: usize> {
    positions: Vec<usize, N>,
}

impl<const N: usize> Population<N> {
    /// Builds a population from a slot-to-position table.
    ///
    /// # Errors
    /// * `EmptyPopulation` - `positions` is empty
    /// * `TooManyPeople` - more than `N` entries
    /// * `PositionOutOfRange` - an entry is `>= strip_len`
    /// * `DuplicatePosition` - two entries share a pixel
    pub fn new(positions: &[usize], strip_len: usize) -> Result<Self, ConfigError> {
        if positions.is_empty() {
            return Err(ConfigError::EmptyPopulation);
        }

        let mut mapped: Vec<usize, N> = Vec::new();
        for (slot, &position) in positions.iter().enumerate() {
            if position >= strip_len {
                return Err(ConfigError::PositionOutOfRange {
                    slot,
                    position,
                    strip_len,
                });
            }
            if mapped.contains(&position) {
                return Err(ConfigError::DuplicatePosition { slot, position });
            }
            mapped
                .push(position)
                .map_err(|_| ConfigError::TooManyPeople { capacity: N })?;
        }

        Ok(Self { positions: mapped })
    }

    /// Number of people, always at least one.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Physical position of a slot, if it exists.
    pub fn position(&self, slot: usize) -> Option<usize> {
        self.positions.get(slot).copied()
    }

    /// Physical positions in slot order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}
