//! This module contains the round engine, the piece that turns a dataset and a source of randomness
//! into rounds and scores the answers given to them.
//!
//! The engine keeps no session state of its own. A [`Session`] is created by the caller and passed
//! into every operation, so several independent sessions can be played with the same engine.
//!
//! Rounds follow a small state machine:
//!
//! - `Idle` to `RoundActive` through [`RoundEngine::start_round`];
//! - `RoundActive` to `RoundAnswered` through [`RoundEngine::submit_answer`];
//! - `RoundAnswered` to `RoundActive` through [`RoundEngine::start_round`];
//! - any phase to `RoundActive` through [`RoundEngine::reset`].
//!
//! A failed operation never touches the session.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::food_universe;
use crate::data::Animal;
use crate::diet::{self, FoodName};
use crate::options;
use crate::random::RandomSource;
use crate::selector::pick_animal;
use crate::tracker::{RoundPhase, RoundState, Session};

/// The result of answering a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerResult {
    /// The name of the animal the round was about.
    pub animal_name: String,
    /// The food that was the right answer.
    pub correct: FoodName,
    /// Whether the submitted food was the right answer.
    pub is_correct: bool,
}

/// The ways an engine operation can fail. None of them changes the session.
#[derive(thiserror::Error, Debug)]
pub enum QuizError {
    /// The operation isn't allowed in the phase the session is in.
    #[error("cannot {operation} while the session is {phase:?}")]
    InvalidState {
        /// The operation that was attempted.
        operation: &'static str,
        /// The phase the session was in.
        phase: RoundPhase,
    },
    /// The dataset has no animals to pick from.
    #[error("there are no animals to quiz on")]
    NoAnimalsAvailable,
    /// The picked animal has nothing usable in its diet.
    #[error("{animal} has no known diet")]
    NoValidFoodsForAnimal {
        /// The name of the animal with the empty diet.
        animal: String,
    },
}

/// The engine that builds rounds and scores answers.
#[derive(Debug)]
pub struct RoundEngine<R> {
    /// The animals to quiz on.
    animals: Vec<Animal>,
    /// The source of every random decision.
    rng: R,
    /// Every food eaten by some animal in `animals`.
    universe: BTreeSet<FoodName>,
}

impl<R: RandomSource> RoundEngine<R> {
    /// Returns the animals the engine quizzes on.
    #[must_use]
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Returns every food known to the engine's dataset.
    #[must_use]
    pub const fn food_universe(&self) -> &BTreeSet<FoodName> {
        &self.universe
    }

    /// Creates an engine over a dataset, deriving its food universe up front.
    #[must_use]
    pub fn new(animals: Vec<Animal>, rng: R) -> Self {
        let universe = food_universe(&animals);

        Self {
            animals,
            rng,
            universe,
        }
    }

    /// Swaps the dataset for another one and derives its food universe again. Sessions played on the
    /// old dataset carry on; their next round is picked from the new one.
    pub fn replace_animals(&mut self, animals: Vec<Animal>) {
        self.universe = food_universe(&animals);
        self.animals = animals;
    }

    /// Clears the session back to round zero with no score and no remembered animal, then starts a
    /// new round straight away.
    ///
    /// # Errors
    ///
    /// Fails like [`RoundEngine::start_round`], in which case the session stays cleared and idle.
    pub fn reset(&mut self, session: &mut Session) -> Result<RoundSnapshot, QuizError> {
        session.clear();
        tracing::info!("session reset");

        self.start_round(session)
    }

    /// Builds the next round: picks an animal other than the last one when possible, draws the
    /// correct food out of its diet and the distractors out of the rest of the food universe.
    ///
    /// # Errors
    ///
    /// - [`QuizError::InvalidState`] if the current round hasn't been answered yet.
    /// - [`QuizError::NoAnimalsAvailable`] if the dataset is empty.
    /// - [`QuizError::NoValidFoodsForAnimal`] if the picked animal has an empty diet.
    pub fn start_round(&mut self, session: &mut Session) -> Result<RoundSnapshot, QuizError> {
        let phase = session.phase();
        if phase == RoundPhase::RoundActive {
            return Err(QuizError::InvalidState {
                operation: "start a round",
                phase,
            });
        }

        let animal = pick_animal(&self.animals, session.last_animal(), &mut self.rng)?;
        let valid = diet::parse(Some(&animal.diet));
        let choices = options::build(&animal.name, &valid, &self.universe, &mut self.rng)?;

        let snapshot = RoundSnapshot {
            animal_image: animal.image.clone(),
            animal_name: animal.name.clone(),
            options: choices.options.clone(),
        };

        session.begin_round(RoundState {
            animal: animal.clone(),
            answered: false,
            correct: choices.correct,
            options: choices.options,
        });
        tracing::info!(round = session.round(), animal = %animal.name, "round started");

        Ok(snapshot)
    }

    /// Scores the food picked by the player against the current round and marks the round as
    /// answered.
    ///
    /// # Errors
    ///
    /// Fails with [`QuizError::InvalidState`] unless a round is waiting for an answer; in
    /// particular, a round can only be answered once.
    pub fn submit_answer(
        &self,
        session: &mut Session,
        chosen: &FoodName,
    ) -> Result<AnswerResult, QuizError> {
        let phase = session.phase();
        let is_correct = session
            .current_round()
            .is_some_and(|round| round.correct == *chosen);

        let Some(round) = session.record_answer(is_correct) else {
            return Err(QuizError::InvalidState {
                operation: "submit an answer",
                phase,
            });
        };

        let result = AnswerResult {
            animal_name: round.animal.name.clone(),
            correct: round.correct.clone(),
            is_correct,
        };
        tracing::info!(
            round = session.round(),
            score = session.score(),
            %chosen,
            is_correct,
            "answer submitted"
        );

        Ok(result)
    }
}

/// What the player gets to see of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    /// The reference to the picture of the animal.
    pub animal_image: String,
    /// The name of the animal.
    pub animal_name: String,
    /// The foods to pick from, in display order.
    pub options: Vec<FoodName>,
}
