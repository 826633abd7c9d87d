//! This module holds the source of randomness used by the quiz, as well as the shuffle that every
//! random ordering in the game goes through.
//!
//! The game never reaches for a thread local generator. Instead, a [`RandomSource`] is handed to
//! the engine, which lets the terminal game use a `fastrand` generator (seeded or not) and lets the
//! tests replay a fixed sequence of draws.

use fastrand::Rng;

/// This trait abstracts over anything able to produce uniformly distributed indices. It is the only
/// source of nondeterminism in the quiz.
pub trait RandomSource {
    /// Returns an index drawn uniformly from `0..bound`.
    ///
    /// Callers never pass a `bound` of zero; implementations may return anything in that case, as
    /// the result will not be used to index into a collection.
    fn below(&mut self, bound: usize) -> usize;
}

impl RandomSource for Rng {
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }

        self.usize(..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// This function shuffles a slice in place with a single backwards pass of swaps (Fisher-Yates),
/// which yields every permutation with the same probability.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for idx in (1..items.len()).rev() {
        let pick = rng.below(idx + 1);
        items.swap(idx, pick);
    }
}
