//! Unique random selection by rejection sampling.

use heapless::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_core::RngCore;

/// Draws allowed per population slot before falling back to a
/// deterministic fill.
const MAX_DRAWS_PER_SLOT: usize = 8;

/// A set of distinct person-slot indices.
///
/// Order carries no meaning; two selections with the same members are equal.
///
/// # Type Parameters
/// * `N` - Maximum number of selected people
#[derive(Debug, Clone, Default)]
pub struct Selection<const N: usize> {
    indices: Vec<usize, N>,
}

impl<const N: usize> Selection<N> {
    /// Creates an empty selection.
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Builds a selection from explicit indices, dropping duplicates.
    ///
    /// Indices past the capacity are ignored.
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut selection = Self::new();
        for &index in indices {
            selection.insert(index);
        }
        selection
    }

    /// Adds an index. Returns false if it was already present or the
    /// selection is full.
    fn insert(&mut self, index: usize) -> bool {
        if self.contains(index) {
            return false;
        }
        self.indices.push(index).is_ok()
    }

    /// Returns true if `index` is selected.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Number of selected people.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nobody is selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices, in draw order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Removes everyone.
    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

impl<const N: usize> PartialEq for Selection<N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|index| other.contains(index))
    }
}

impl<const N: usize> Eq for Selection<N> {}

/// Draws `count` distinct indices from `0..population`.
///
/// `count` is clamped to both `population` and the selection capacity `N`.
/// Candidates are drawn uniformly and rejected when already taken. After
/// `population * 8` draws any remaining places are filled with the lowest
/// unused indices, so the call always terminates.
pub fn select<R: RngCore, const N: usize>(
    rng: &mut R,
    count: usize,
    population: usize,
) -> Selection<N> {
    let target = count.min(population).min(N);
    let mut selection = Selection::new();
    if target == 0 {
        return selection;
    }

    let max_draws = population.saturating_mul(MAX_DRAWS_PER_SLOT);
    let mut draws = 0;
    while selection.len() < target && draws < max_draws {
        selection.insert(rng.gen_range(0..population));
        draws += 1;
    }

    for index in 0..population {
        if selection.len() >= target {
            break;
        }
        selection.insert(index);
    }

    selection
}

/// Creates a small, fast RNG from a hardware entropy sample.
///
/// Feed it something that differs between power-ups, such as a floating ADC
/// reading or a hardware RNG word.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
