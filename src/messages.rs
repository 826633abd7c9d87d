//! This module builds the styled lines the terminal game prints. None of them touch the terminal;
//! they only produce text for the game loop to write.

use console::style;

use crate::artwork::FoodArtwork;
use crate::diet::FoodName;
use crate::quiz::{AnswerResult, RoundSnapshot};
use crate::tracker::SessionStats;

/// The greeting shown once, when the game starts.
const WELCOME: &str = "Welcome to whateats! Guess what each animal eats.";

/// This function returns the warning shown when an animal has to be skipped because its record
/// doesn't say what it eats.
pub(crate) fn data_warning(animal: &str) -> String {
    format!(
        "{} {}",
        style("Skipping").yellow().bold(),
        style(format!("{animal}, the dataset doesn't say what it eats")).dim()
    )
}

/// This function returns the label of one option in the food prompt, with its picture next to it.
pub(crate) fn option_label(food: &FoodName, artwork: &FoodArtwork) -> String {
    format!("{food} {}", style(format!("[{}]", artwork.image_for(food))).dim())
}

/// This function returns the header of a round: the round number and the animal, along with the
/// reference to its picture.
pub(crate) fn round_header(snapshot: &RoundSnapshot, stats: SessionStats) -> String {
    format!(
        "{}\n{} {}",
        style(format!("Round {}", stats.round)).bold().on_cyan(),
        style(format!("What does the {} eat?", snapshot.animal_name)).bold(),
        style(format!("[{}]", snapshot.animal_image)).dim()
    )
}

/// This function returns the running score line.
pub(crate) fn stats_line(stats: SessionStats) -> String {
    format!(
        "{}",
        style(format!("Score {} / {}", stats.score, stats.round)).bold()
    )
}

/// This function returns the verdict for an answer, revealing the correct food when the player got
/// it wrong.
pub(crate) fn verdict(result: &AnswerResult) -> String {
    if result.is_correct {
        format!(
            "{} {}",
            style("Correct!").green().bold(),
            style(format!("The {} eats {}.", result.animal_name, result.correct)).bold()
        )
    } else {
        format!(
            "{} {}",
            style("Not quite.").red().bold(),
            style(format!("The {} eats {}.", result.animal_name, result.correct)).bold()
        )
    }
}

/// This function returns the greeting shown when the game starts.
pub(crate) fn welcome() -> String {
    format!("{}", style(WELCOME).bold())
}
