//! Types for the Suggestion Engine

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::recipe::Recipe;

/// Request for recipe suggestions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    /// Minimum absolute number of matching ingredients. Non-positive values admit every recipe.
    pub min_matching_ingredients: i64,
    /// Date against which pantry expiry is evaluated
    pub as_of: NaiveDate,
    /// Optional cap applied after ranking
    pub max_results: Option<usize>,
}

impl SuggestionRequest {
    /// Create a request evaluated against today's UTC date with the default threshold
    pub fn new() -> Self {
        Self {
            min_matching_ingredients: super::DEFAULT_MIN_MATCHING_INGREDIENTS,
            as_of: Utc::now().date_naive(),
            max_results: None,
        }
    }

    /// Set the minimum matching ingredient count
    pub fn with_min_matching_ingredients(mut self, min: i64) -> Self {
        self.min_matching_ingredients = min;
        self
    }

    /// Evaluate expiry against a fixed date instead of today
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = date;
        self
    }

    /// Limit the number of ranked suggestions returned
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }
}

impl Default for SuggestionRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// A cookable recipe with its ingredient coverage against the pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub recipe: Recipe,
    /// Ingredients found in the pantry, in recipe order and recipe casing
    pub matching_ingredients: Vec<String>,
    /// Ingredients not found in the pantry, in recipe order and recipe casing
    pub missing_ingredients: Vec<String>,
    /// Share of ingredients on hand, 0-100 with at most two decimals
    #[serde(with = "rust_decimal::serde::float")]
    pub match_percentage: Decimal,
}

impl Suggestion {
    pub fn matching_count(&self) -> usize {
        self.matching_ingredients.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_ingredients.len()
    }

    /// True when every declared ingredient is on hand.
    pub fn is_cookable(&self) -> bool {
        self.missing_ingredients.is_empty() && !self.matching_ingredients.is_empty()
    }

    pub fn tier(&self) -> MatchTier {
        MatchTier::from_percentage(self.match_percentage)
    }
}

/// Coarse grouping of a suggestion by coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Every ingredient on hand
    Complete,
    /// At least half the ingredients on hand
    Most,
    /// Less than half the ingredients on hand
    Partial,
}

impl MatchTier {
    /// Get tier from a match percentage
    pub fn from_percentage(percentage: Decimal) -> Self {
        if percentage >= Decimal::ONE_HUNDRED {
            MatchTier::Complete
        } else if percentage >= Decimal::from(50) {
            MatchTier::Most
        } else {
            MatchTier::Partial
        }
    }

    /// Get display text for a percentage in this tier
    pub fn display_percentage(&self, percentage: Decimal) -> String {
        let label = match self {
            MatchTier::Complete => "ready to cook",
            MatchTier::Most => "mostly stocked",
            MatchTier::Partial => "partially stocked",
        };
        format!("{}% match ({label})", percentage.normalize())
    }
}
