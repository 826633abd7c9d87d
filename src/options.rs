//! This module builds the set of foods offered to the player in a round: the correct answer and up
//! to three distractors, all in a random order.

use std::collections::BTreeSet;

use crate::diet::FoodName;
use crate::quiz::QuizError;
use crate::random::{shuffle, RandomSource};

/// The largest number of wrong foods offered next to the correct one.
pub const MAX_DISTRACTORS: usize = 3;

/// The outcome of building the options of a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceSet {
    /// The food that counts as the right answer. It appears exactly once in `options`.
    pub correct: FoodName,
    /// The foods to show, in display order.
    pub options: Vec<FoodName>,
}

/// This function picks the correct answer out of the foods the animal eats and surrounds it with
/// distractors.
///
/// Distractors are drawn from `universe` minus every food in `valid`, not only minus the chosen
/// answer, so none of them is something the animal eats. When fewer than [`MAX_DISTRACTORS`] are
/// left the set is simply smaller.
///
/// # Errors
///
/// Fails with [`QuizError::NoValidFoodsForAnimal`] if `valid` is empty; `animal` only names the
/// culprit in that error.
pub fn build<R: RandomSource + ?Sized>(
    animal: &str,
    valid: &[FoodName],
    universe: &BTreeSet<FoodName>,
    rng: &mut R,
) -> Result<ChoiceSet, QuizError> {
    let correct = valid
        .get(rng.below(valid.len()))
        .cloned()
        .ok_or_else(|| QuizError::NoValidFoodsForAnimal {
            animal: animal.to_owned(),
        })?;

    let mut options: Vec<FoodName> = universe
        .iter()
        .filter(|food| !valid.contains(food))
        .cloned()
        .collect();
    shuffle(&mut options, rng);
    options.truncate(MAX_DISTRACTORS);

    options.push(correct.clone());
    shuffle(&mut options, rng);

    tracing::debug!(%correct, ?options, "built options");
    Ok(ChoiceSet { correct, options })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use fastrand::Rng;

    use super::{build, MAX_DISTRACTORS};
    use crate::diet::{self, FoodName};
    use crate::quiz::QuizError;
    use crate::random::tests::Scripted;

    fn universe(foods: &str) -> BTreeSet<FoodName> {
        diet::parse(Some(foods)).into_iter().collect()
    }

    #[test]
    fn single_food_universe_offers_only_the_answer() {
        let valid = diet::parse(Some("Meat"));
        let mut rng = Scripted::new(&[]);

        let set = build("Lion", &valid, &universe("Meat"), &mut rng).expect("should build");
        assert_eq!(set.correct.as_str(), "Meat", "the only food must be the answer");
        assert_eq!(set.options, vec![set.correct.clone()], "nothing to distract with");
    }

    #[test]
    fn no_valid_foods_fails() {
        let mut rng = Scripted::new(&[]);
        let err = build("Rock", &[], &universe("Meat, Hay"), &mut rng).expect_err("rocks don't eat");

        assert!(
            matches!(err, QuizError::NoValidFoodsForAnimal { ref animal } if animal == "Rock"),
            "wrong error: {err}"
        );
    }

    #[test]
    fn distractors_exclude_the_whole_diet() {
        let valid = diet::parse(Some("fish, krill, squid"));
        let all = universe("fish, krill, squid, hay, grass, bamboo, meat, honey");
        let mut rng = Rng::with_seed(11);

        for _ in 0..200 {
            let set = build("Penguin", &valid, &all, &mut rng).expect("should build");

            assert_eq!(set.options.len(), MAX_DISTRACTORS + 1, "a full set has four options");
            assert!(valid.contains(&set.correct), "answer must come from the diet");
            assert_eq!(
                set.options.iter().filter(|food| **food == set.correct).count(),
                1,
                "the answer must appear exactly once"
            );
            assert!(
                set.options
                    .iter()
                    .filter(|food| **food != set.correct)
                    .all(|food| !valid.contains(food)),
                "a distractor is something the animal eats: {:?}",
                set.options
            );

            let distinct: BTreeSet<&FoodName> = set.options.iter().collect();
            assert_eq!(distinct.len(), set.options.len(), "options must not repeat");
        }
    }

    #[test]
    fn small_pools_are_not_padded() {
        let valid = diet::parse(Some("grass, hay"));
        let mut rng = Rng::with_seed(5);

        let set = build("Cow", &valid, &universe("grass, hay, meat"), &mut rng).expect("should build");
        assert_eq!(set.options.len(), 2, "one distractor plus the answer");
        assert!(
            set.options.iter().any(|food| food.as_str() == "Meat"),
            "the only wrong food should be offered"
        );
    }

    #[test]
    fn answer_is_drawn_from_the_diet() {
        let valid = diet::parse(Some("nuts, seeds, acorns"));
        // first draw picks the answer, the rest feed the shuffles
        let mut rng = Scripted::new(&[2]);

        let set = build("Squirrel", &valid, &universe("nuts, seeds, acorns"), &mut rng)
            .expect("should build");
        assert_eq!(set.correct.as_str(), "Acorns", "third food should have been drawn");
    }
}
