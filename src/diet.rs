//! This module turns the free-form diet descriptions found in the animal records into lists of
//! normalized food names.

use std::fmt;

use serde::Serialize;

/// A normalized food name: trimmed, non-empty, and with its first letter capitalized.
///
/// The only way to get one is through [`FoodName::new`], so two foods written differently in the
/// dataset ("hay" and " Hay") compare equal once normalized.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FoodName(String);

impl FoodName {
    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Normalizes a raw fragment into a food name, or returns `None` if nothing but whitespace is
    /// left after trimming.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let mut chars = raw.trim().chars();
        let first = chars.next()?;
        let mut name: String = first.to_uppercase().collect();
        name.push_str(chars.as_str());

        Some(Self(name))
    }
}

impl AsRef<str> for FoodName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// This function parses a comma-delimited diet description into the foods it names, in the order
/// they were written. Repeated foods are kept as given. An empty or absent description yields an
/// empty list.
#[must_use]
pub fn parse(raw: Option<&str>) -> Vec<FoodName> {
    raw.map_or_else(Vec::new, |diet| diet.split(',').filter_map(FoodName::new).collect())
}

#[cfg(test)]
mod tests {
    use super::{parse, FoodName};

    fn names(foods: &[FoodName]) -> Vec<&str> {
        foods.iter().map(FoodName::as_str).collect()
    }

    #[test]
    fn splits_and_capitalizes() {
        let foods = parse(Some("grass, hay"));
        assert_eq!(names(&foods), vec!["Grass", "Hay"], "diet was not normalized");
    }

    #[test]
    fn empty_and_absent_diets_are_empty() {
        assert!(parse(Some("")).is_empty(), "empty diet should parse to nothing");
        assert!(parse(None).is_empty(), "absent diet should parse to nothing");
        assert!(parse(Some(" , ,,  ")).is_empty(), "blank fragments should be dropped");
    }

    #[test]
    fn keeps_order_and_duplicates() {
        let foods = parse(Some("fish,  krill ,fish"));
        assert_eq!(names(&foods), vec!["Fish", "Krill", "Fish"], "order or duplicates changed");
    }

    #[test]
    fn only_the_first_letter_changes() {
        let foods = parse(Some("bamboo shoots, eucalyptus LEAVES"));
        assert_eq!(
            names(&foods),
            vec!["Bamboo shoots", "Eucalyptus LEAVES"],
            "the rest of the name should be left alone"
        );
    }

    #[test]
    fn food_name_rejects_blank_input() {
        assert_eq!(FoodName::new("   "), None, "whitespace is not a food");
        assert_eq!(
            FoodName::new(" hay "),
            FoodName::new("Hay"),
            "normalized names should compare equal"
        );
    }
}
