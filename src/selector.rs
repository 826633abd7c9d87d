//! This module picks the animal for the next round.
//!
//! The pick is biased against repeating the animal of the previous round, but only through a
//! bounded number of redraws: with a handful of animals a repeat is possible, just improbable.

use crate::data::{Animal, AnimalId};
use crate::quiz::QuizError;
use crate::random::RandomSource;

/// The number of random candidates drawn before giving up on avoiding a repeat.
pub const MAX_DRAWS: usize = 6;

/// This function draws up to [`MAX_DRAWS`] random candidates and returns the first one whose id
/// differs from `last`. If every draw hits `last`, which is certain with a single animal, the first
/// candidate drawn is returned anyway.
///
/// # Errors
///
/// Fails with [`QuizError::NoAnimalsAvailable`] if `animals` is empty.
pub fn pick_animal<'data, R: RandomSource + ?Sized>(
    animals: &'data [Animal],
    last: Option<AnimalId>,
    rng: &mut R,
) -> Result<&'data Animal, QuizError> {
    let mut first = None;

    for draw in 0..MAX_DRAWS {
        let candidate = animals
            .get(rng.below(animals.len()))
            .ok_or(QuizError::NoAnimalsAvailable)?;

        if last != Some(candidate.id) {
            tracing::debug!(animal = %candidate.id, draw, "picked animal");
            return Ok(candidate);
        }

        let _ = first.get_or_insert(candidate);
    }

    tracing::debug!(?last, "every draw repeated the last animal");
    first.ok_or(QuizError::NoAnimalsAvailable)
}
