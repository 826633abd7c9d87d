//! This module contains all functions related to taking input from the player. They all use the
//! `dialoguer` crate to render a selection prompt, so the player can only ever pick something that
//! was offered.

use anyhow::{anyhow, Result};
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::artwork::FoodArtwork;
use crate::diet::FoodName;
use crate::messages::option_label;

/// This enum holds what the player wants to do once a round has been answered.
#[expect(
    clippy::arbitrary_source_item_ordering,
    reason = "The variants are in the same order they are displayed in the prompt."
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Play another round on the same session.
    Next,
    /// Start over from round one with no score.
    Reset,
    /// Leave the game.
    Quit,
}

impl Step {
    /// This function returns all the variants in display order.
    const fn list() -> [Self; 3] {
        [Self::Next, Self::Reset, Self::Quit]
    }

    /// This function returns the label shown for the variant in the prompt.
    const fn repr(self) -> &'static str {
        match self {
            Self::Next => "Next round",
            Self::Reset => "Start over",
            Self::Quit => "Quit",
        }
    }
}

/// This function is in charge of asking the player which of the offered foods the animal eats. The
/// options are shown in the order given, each with its picture.
pub(crate) fn choose_food(
    term: &Term,
    options: &[FoodName],
    artwork: &FoodArtwork,
) -> Result<FoodName> {
    let labels: Vec<String> = options
        .iter()
        .map(|food| option_label(food, artwork))
        .collect();

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Pick a food").bold()))
        .items(&labels)
        .default(0)
        .interact_on(term)?;

    options
        .get(picked)
        .cloned()
        .ok_or_else(|| anyhow!("option {picked} is out of range"))
}

/// This function is in charge of asking the player whether to keep playing, start over or leave.
pub(crate) fn next_step(term: &Term) -> Result<Step> {
    let steps = Step::list();
    let labels = steps.map(Step::repr);

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("What now?").bold()))
        .items(&labels)
        .default(0)
        .interact_on(term)?;

    steps
        .get(picked)
        .copied()
        .ok_or_else(|| anyhow!("option {picked} is out of range"))
}

#[cfg(test)]
mod tests {
    use super::Step;

    #[test]
    fn steps_are_listed_in_display_order() {
        let labels = Step::list().map(Step::repr);
        assert_eq!(labels, ["Next round", "Start over", "Quit"], "unexpected prompt labels");
    }
}
