//! This module maps food names to the pictures that go with them. It is only consulted when
//! rendering; a food without a picture falls back to a default one.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::data::DataError;
use crate::diet::FoodName;

/// The table shipped with the game.
const BUILTIN_ARTWORK: &str = include_str!("../data/artwork.json");

/// The lookup from food names to picture references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoodArtwork {
    /// The picture used for foods missing from `foods`.
    fallback: String,
    /// The picture of every known food, keyed by normalized name.
    foods: BTreeMap<FoodName, String>,
}

impl FoodArtwork {
    /// Returns the table bundled with the game.
    ///
    /// # Errors
    ///
    /// Only fails with [`DataError::Parse`] if the bundled table was broken at build time.
    pub fn builtin() -> Result<Self, DataError> {
        Self::parse(BUILTIN_ARTWORK)
    }

    /// Returns the picture for a food, or the default picture if the food has none.
    #[must_use]
    pub fn image_for(&self, food: &FoodName) -> &str {
        self.foods.get(food).unwrap_or(&self.fallback)
    }

    /// Reads a table from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Fails with [`DataError::Read`] if the file can't be read and with [`DataError::Parse`] if it
    /// isn't a valid table.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let raw = fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_owned(),
            source,
        })?;

        Self::parse(&raw)
    }

    /// Parses a table of the form `{ "default": "...", "foods": { "name": "..." } }`. Names are
    /// normalized like diets are, and blank names are dropped.
    ///
    /// # Errors
    ///
    /// Fails with [`DataError::Parse`] on malformed input.
    pub fn parse(raw: &str) -> Result<Self, DataError> {
        /// The table as written on disk.
        #[derive(Deserialize)]
        struct RawArtwork {
            /// The fallback picture.
            default: String,
            /// The picture of every food, keyed by raw name.
            #[serde(default)]
            foods: BTreeMap<String, String>,
        }

        let table: RawArtwork = serde_json::from_str(raw)?;

        Ok(Self {
            fallback: table.default,
            foods: table
                .foods
                .into_iter()
                .filter_map(|(name, image)| Some((FoodName::new(&name)?, image)))
                .collect(),
        })
    }
}
