//! Suggestion Engine implementation

use tracing::debug;

use super::inventory::PantryInventory;
use super::matcher::match_ingredients;
use super::scoring::ScoreCalculator;
use super::types::{Suggestion, SuggestionRequest};
use crate::domain::pantry::PantryItem;
use crate::domain::recipe::Recipe;

/// Matches a pantry snapshot against a recipe catalog.
///
/// Stateless: every call works only on the snapshots it is given, so one engine can be
/// shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    calculator: ScoreCalculator,
}

impl SuggestionEngine {
    pub fn new() -> Self {
        Self { calculator: ScoreCalculator::new() }
    }

    /// Rank the recipes that can be made with what the pantry currently holds
    pub fn suggest(
        &self,
        recipes: &[Recipe],
        pantry: &[PantryItem],
        request: &SuggestionRequest,
    ) -> Vec<Suggestion> {
        let inventory = PantryInventory::from_items(pantry, request.as_of);

        let scored: Vec<Suggestion> =
            recipes.iter().map(|recipe| self.score_recipe(recipe, &inventory)).collect();
        let scored_count = scored.len();

        let ranked = self.calculator.filter_and_rank(
            scored,
            request.min_matching_ingredients,
            request.max_results,
        );

        debug!(
            event_name = "suggestions.engine.completed",
            recipes = scored_count,
            pantry_items = pantry.len(),
            available_ingredients = inventory.len(),
            expired_items = inventory.expired_count(),
            min_matching_ingredients = request.min_matching_ingredients,
            admitted = ranked.len(),
            "recipe suggestions computed"
        );

        ranked
    }

    /// Score a single recipe against a prepared inventory
    pub fn score_recipe(&self, recipe: &Recipe, inventory: &PantryInventory) -> Suggestion {
        let split = match_ingredients(&recipe.ingredients, inventory);
        let match_percentage =
            self.calculator.match_percentage(split.matching.len(), split.total());

        Suggestion {
            recipe: recipe.clone(),
            matching_ingredients: split.matching,
            missing_ingredients: split.missing,
            match_percentage,
        }
    }
}
