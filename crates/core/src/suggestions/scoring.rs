//! Scoring, admission and ranking for recipe suggestions

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::Suggestion;

/// Score calculator for recipe suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCalculator {
    decimal_places: u32,
}

impl ScoreCalculator {
    /// Create a calculator rounding to two decimal places
    pub fn new() -> Self {
        Self { decimal_places: super::PERCENTAGE_DECIMAL_PLACES }
    }

    /// Percentage of ingredients on hand, rounded half away from zero.
    ///
    /// A recipe without ingredients scores zero.
    pub fn match_percentage(&self, matching: usize, total: usize) -> Decimal {
        if total == 0 {
            return Decimal::ZERO;
        }

        let ratio =
            Decimal::from(matching as u64) * Decimal::ONE_HUNDRED / Decimal::from(total as u64);
        ratio
            .round_dp_with_strategy(self.decimal_places, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
    }

    /// Absolute-count admission test. Any non-positive minimum admits everything.
    pub fn admits(&self, matching_count: usize, min_matching_ingredients: i64) -> bool {
        if min_matching_ingredients <= 0 {
            return true;
        }

        usize::try_from(min_matching_ingredients)
            .map(|min| matching_count >= min)
            .unwrap_or(false)
    }

    /// Drop suggestions below the threshold, rank the rest, and apply the optional cap
    pub fn filter_and_rank(
        &self,
        mut suggestions: Vec<Suggestion>,
        min_matching_ingredients: i64,
        max_results: Option<usize>,
    ) -> Vec<Suggestion> {
        suggestions.retain(|s| self.admits(s.matching_count(), min_matching_ingredients));

        // Stable sort: equal ids keep catalog order.
        suggestions.sort_by(rank_order);

        if let Some(max) = max_results {
            suggestions.truncate(max);
        }
        suggestions
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Higher percentage first, then lower recipe id.
pub fn rank_order(a: &Suggestion, b: &Suggestion) -> Ordering {
    b.match_percentage.cmp(&a.match_percentage).then_with(|| a.recipe.id.cmp(&b.recipe.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::Recipe;

    fn suggestion(id: i64, matching: usize, total: usize) -> Suggestion {
        let calculator = ScoreCalculator::new();
        let ingredients: Vec<String> = (0..total).map(|i| format!("ingredient-{i}")).collect();
        let (matching_ingredients, missing_ingredients) = ingredients.split_at(matching);

        Suggestion {
            recipe: Recipe::new(id, format!("Recipe {id}"), ingredients.clone()),
            matching_ingredients: matching_ingredients.to_vec(),
            missing_ingredients: missing_ingredients.to_vec(),
            match_percentage: calculator.match_percentage(matching, total),
        }
    }

    #[test]
    fn test_percentage_rounds_to_two_places() {
        let calculator = ScoreCalculator::new();

        assert_eq!(calculator.match_percentage(2, 3), Decimal::new(6667, 2));
        assert_eq!(calculator.match_percentage(1, 3), Decimal::new(3333, 2));
        assert_eq!(calculator.match_percentage(3, 3), Decimal::ONE_HUNDRED);
        assert_eq!(calculator.match_percentage(2, 4), Decimal::from(50));
        assert_eq!(calculator.match_percentage(1, 4), Decimal::from(25));
    }

    #[test]
    fn test_percentage_midpoint_rounds_away_from_zero() {
        let calculator = ScoreCalculator::new();

        // 1/32 = 3.125%, 1/16 = 6.25%, 5/8 = 62.5%
        assert_eq!(calculator.match_percentage(1, 32), Decimal::new(313, 2));
        assert_eq!(calculator.match_percentage(1, 16), Decimal::new(625, 2));
        assert_eq!(calculator.match_percentage(5, 8), Decimal::new(625, 1));
        // 1/7 = 14.2857..%
        assert_eq!(calculator.match_percentage(1, 7), Decimal::new(1429, 2));
    }

    #[test]
    fn test_empty_recipe_scores_zero() {
        let calculator = ScoreCalculator::new();
        assert_eq!(calculator.match_percentage(0, 0), Decimal::ZERO);
    }

    #[test]
    fn test_whole_percentages_render_without_decimals() {
        let calculator = ScoreCalculator::new();
        assert_eq!(calculator.match_percentage(3, 3).to_string(), "100");
        assert_eq!(calculator.match_percentage(1, 4).to_string(), "25");
        assert_eq!(calculator.match_percentage(2, 3).to_string(), "66.67");
    }

    #[test]
    fn test_threshold_is_absolute_count() {
        let calculator = ScoreCalculator::new();

        assert!(calculator.admits(2, 2));
        assert!(!calculator.admits(1, 2));
        assert!(calculator.admits(0, 0));
        assert!(calculator.admits(0, -5));
    }

    #[test]
    fn test_small_recipe_with_full_coverage_is_still_filtered() {
        let calculator = ScoreCalculator::new();
        let ranked =
            calculator.filter_and_rank(vec![suggestion(1, 1, 1), suggestion(2, 2, 5)], 2, None);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].recipe.id.0, 2);
    }

    #[test]
    fn test_ranking_descends_by_percentage() {
        let calculator = ScoreCalculator::new();
        let ranked = calculator.filter_and_rank(
            vec![suggestion(1, 1, 4), suggestion(2, 3, 3), suggestion(3, 2, 3)],
            1,
            None,
        );

        let percentages: Vec<String> =
            ranked.iter().map(|s| s.match_percentage.to_string()).collect();
        assert_eq!(percentages, vec!["100", "66.67", "25"]);
        for pair in ranked.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn test_ties_break_by_recipe_id() {
        let calculator = ScoreCalculator::new();
        let ranked = calculator.filter_and_rank(
            vec![suggestion(9, 1, 2), suggestion(4, 2, 4), suggestion(7, 3, 6)],
            1,
            None,
        );

        let ids: Vec<i64> = ranked.iter().map(|s| s.recipe.id.0).collect();
        assert_eq!(ids, vec![4, 7, 9]);
    }

    #[test]
    fn test_max_results_truncates_after_ranking() {
        let calculator = ScoreCalculator::new();
        let ranked = calculator.filter_and_rank(
            vec![suggestion(1, 1, 4), suggestion(2, 3, 3), suggestion(3, 2, 3)],
            1,
            Some(2),
        );

        let ids: Vec<i64> = ranked.iter().map(|s| s.recipe.id.0).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
