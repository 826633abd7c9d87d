//! # whateats
//!
//! This crate is a game about guessing what an animal eats. Each round shows an animal and a
//! handful of foods, only one of which the animal actually eats. Pick it to score a point.
//!
//! The animals and the pictures of their foods come bundled with the game, but either can be
//! swapped for a JSON file of your own. See `whateats --help`.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use whateats::init;

fn main() -> Result<()> {
    init()
}
