//! This module holds the state of one continuous play sequence: the round count, the score, the
//! last animal shown and the round currently on screen.
//!
//! Callers own the [`Session`] and hand it to every engine operation, but can only read it. Every
//! mutation goes through the engine in [`crate::quiz`].

use serde::Serialize;

use crate::data::{Animal, AnimalId};
use crate::diet::FoodName;

/// The phase a session is in, derived from its current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RoundPhase {
    /// No round has been built since the session was created or reset.
    Idle,
    /// The current round is waiting for an answer.
    RoundActive,
    /// The current round has been answered and its result is available.
    RoundAnswered,
}

/// A single round: the animal, the right answer, and the foods on offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundState {
    /// The animal being asked about.
    pub animal: Animal,
    /// Whether an answer has already been submitted.
    pub answered: bool,
    /// The food that counts as the right answer.
    pub correct: FoodName,
    /// The foods offered, in display order, without repeats.
    pub options: Vec<FoodName>,
}

/// The accumulated state of one play sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// The round on screen, if any.
    current: Option<RoundState>,
    /// The animal of the latest round, avoided when picking the next one.
    last_animal: Option<AnimalId>,
    /// The number of rounds started.
    round: u32,
    /// The number of rounds answered correctly.
    score: u32,
}

impl Session {
    /// Returns the round currently on screen, if one has been started.
    #[must_use]
    pub const fn current_round(&self) -> Option<&RoundState> {
        self.current.as_ref()
    }

    /// Returns the id of the animal shown in the latest round.
    #[must_use]
    pub const fn last_animal(&self) -> Option<AnimalId> {
        self.last_animal
    }

    /// Creates a session at round zero with nothing on screen.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
            last_animal: None,
            round: 0,
            score: 0,
        }
    }

    /// Returns the phase of the session.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        match self.current {
            None => RoundPhase::Idle,
            Some(RoundState { answered: false, .. }) => RoundPhase::RoundActive,
            Some(RoundState { answered: true, .. }) => RoundPhase::RoundAnswered,
        }
    }

    /// Returns the number of rounds started.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the number of rounds answered correctly.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns a snapshot of the round count and score.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        SessionStats {
            round: self.round,
            score: self.score,
        }
    }

    /// Replaces the current round with a freshly built one.
    pub(crate) fn begin_round(&mut self, round: RoundState) {
        self.round += 1;
        self.last_animal = Some(round.animal.id);
        self.current = Some(round);
    }

    /// Brings the session back to round zero with no score and nothing on screen.
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    /// Marks the current round as answered and scores it. Returns the answered round, or `None` if
    /// there was no round waiting for an answer, in which case nothing changes.
    pub(crate) fn record_answer(&mut self, correct: bool) -> Option<&RoundState> {
        let round = self.current.as_mut().filter(|round| !round.answered)?;
        round.answered = true;

        if correct {
            self.score += 1;
        }

        self.current.as_ref()
    }
}

/// The round count and score at some point of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// The number of rounds started.
    pub round: u32,
    /// The number of rounds answered correctly.
    pub score: u32,
}
