//! This module contains the animal records the quiz is played with, along with the functions to
//! load them, either from the dataset bundled with the game or from a JSON file on disk.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// The dataset shipped with the game.
const BUILTIN_ANIMALS: &str = include_str!("../data/animals.json");

/// A single animal record. The quiz only ever reads these.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Animal {
    /// The raw, comma-delimited description of what the animal eats. It may be missing from the
    /// record, in which case it is empty.
    #[serde(default)]
    pub diet: String,
    /// The identifier of the animal, unique within a dataset.
    pub id: AnimalId,
    /// The reference to the picture of the animal, handed as-is to whoever renders it.
    pub image: String,
    /// The name of the animal as shown to the player.
    pub name: String,
}

/// The opaque identifier of an animal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct AnimalId(pub u32);

impl fmt::Display for AnimalId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// The ways loading a dataset can go wrong.
#[derive(thiserror::Error, Debug)]
pub enum DataError {
    /// Two records share an identifier, which would break the anti-repeat policy.
    #[error("animal id {0} appears more than once in the dataset")]
    DuplicateId(AnimalId),
    /// The dataset is not a JSON array of animal records.
    #[error("malformed animal dataset")]
    Parse(#[from] serde_json::Error),
    /// The dataset file could not be read.
    #[error("could not read {}", path.display())]
    Read {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// This function returns the animals bundled with the game.
///
/// # Errors
///
/// Only fails with [`DataError::Parse`] or [`DataError::DuplicateId`] if the bundled dataset was
/// broken at build time.
pub fn builtin_animals() -> Result<Vec<Animal>, DataError> {
    parse_animals(BUILTIN_ANIMALS)
}

/// This function reads a JSON dataset from disk.
///
/// An empty array is a valid dataset as far as loading goes; the engine reports it when a round is
/// started.
///
/// # Errors
///
/// Fails with [`DataError::Read`] if the file can't be read, and otherwise like
/// [`parse_animals`].
pub fn load_animals(path: &Path) -> Result<Vec<Animal>, DataError> {
    let raw = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_owned(),
        source,
    })?;

    parse_animals(&raw)
}

/// This function parses a JSON array of animal records and checks that no id is repeated.
///
/// # Errors
///
/// Fails with [`DataError::Parse`] on malformed input and with [`DataError::DuplicateId`] when two
/// records share an id.
pub fn parse_animals(raw: &str) -> Result<Vec<Animal>, DataError> {
    let animals: Vec<Animal> = serde_json::from_str(raw)?;
    let mut seen = BTreeSet::new();

    if let Some(dup) = animals.iter().find(|animal| !seen.insert(animal.id)) {
        return Err(DataError::DuplicateId(dup.id));
    }

    tracing::debug!(count = animals.len(), "loaded animal dataset");
    Ok(animals)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{builtin_animals, load_animals, parse_animals, Animal, AnimalId, DataError};
    use crate::diet;

    /// Builds a record for tests, with an image named after the animal.
    pub(crate) fn animal(id: u32, name: &str, diet: &str) -> Animal {
        Animal {
            diet: diet.to_owned(),
            id: AnimalId(id),
            image: format!("images/{}.png", name.to_lowercase()),
            name: name.to_owned(),
        }
    }

    #[test]
    fn parses_records_and_missing_diets() {
        let animals = parse_animals(
            r#"[
                {"id": 1, "name": "Lion", "image": "lion.png", "diet": "Meat"},
                {"id": 2, "name": "Rock", "image": "rock.png"}
            ]"#,
        )
        .expect("dataset should parse");

        assert_eq!(animals.len(), 2, "both records should load");
        assert_eq!(animals.first().map(|lion| lion.diet.as_str()), Some("Meat"), "diet lost");
        assert_eq!(
            animals.get(1).map(|rock| rock.diet.as_str()),
            Some(""),
            "a missing diet should default to empty"
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = parse_animals(
            r#"[
                {"id": 4, "name": "Cow", "image": "cow.png", "diet": "Grass"},
                {"id": 4, "name": "Goat", "image": "goat.png", "diet": "Grass"}
            ]"#,
        )
        .expect_err("duplicate ids should be rejected");

        assert!(matches!(err, DataError::DuplicateId(AnimalId(4))), "wrong error: {err}");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_animals(r#"{"id": 1}"#).expect_err("an object is not a dataset");
        assert!(matches!(err, DataError::Parse(_)), "wrong error: {err}");
    }

    #[test]
    fn empty_array_loads() {
        let animals = parse_animals("[]").expect("an empty dataset is still a dataset");
        assert!(animals.is_empty(), "nothing should have loaded");
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = load_animals(std::path::Path::new("/nonexistent/whateats/animals.json"))
            .expect_err("the file does not exist");

        assert!(matches!(err, DataError::Read { .. }), "wrong error: {err}");
        assert!(err.to_string().contains("animals.json"), "path missing from: {err}");
    }

    #[test]
    fn builtin_dataset_is_playable() {
        let animals = builtin_animals().expect("bundled dataset should load");

        assert!(animals.len() > 1, "the bundled dataset needs several animals");
        assert!(
            animals.iter().all(|beast| !diet::parse(Some(&beast.diet)).is_empty()),
            "every bundled animal should eat something"
        );
    }
}
