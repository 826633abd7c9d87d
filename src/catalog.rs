//! This module derives the food universe, the set of every food any animal in a dataset eats.

use std::collections::BTreeSet;

use crate::data::Animal;
use crate::diet::{self, FoodName};

/// This function collects every distinct food named in the diets of the given animals. It is a pure
/// function of the dataset, so it has to be called again whenever the dataset changes.
#[must_use]
pub fn food_universe(animals: &[Animal]) -> BTreeSet<FoodName> {
    animals
        .iter()
        .flat_map(|animal| diet::parse(Some(&animal.diet)))
        .collect()
}
