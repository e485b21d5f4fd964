//! Per-recipe ingredient matching

use super::inventory::PantryInventory;

/// Split of a recipe's ingredient list against the pantry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientMatch {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
}

impl IngredientMatch {
    /// Number of classified ingredients
    pub fn total(&self) -> usize {
        self.matching.len() + self.missing.len()
    }
}

/// Classify each ingredient as matching or missing, keeping declared order and casing.
///
/// Repeated ingredients are classified once per occurrence.
pub fn match_ingredients(ingredients: &[String], inventory: &PantryInventory) -> IngredientMatch {
    let mut result = IngredientMatch::default();

    for ingredient in ingredients {
        if inventory.contains(ingredient) {
            result.matching.push(ingredient.clone());
        } else {
            result.missing.push(ingredient.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::pantry::PantryItem;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
    }

    fn inventory(names: &[&str]) -> PantryInventory {
        let fresh = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
        let items: Vec<PantryItem> =
            names.iter().map(|name| PantryItem::new(*name, fresh)).collect();
        PantryInventory::from_items(&items, today())
    }

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    /// Rebuild the declared list by walking it and popping from whichever side holds the
    /// next element; succeeds only when both sides preserve relative order.
    fn interleave_back(ingredients: &[String], split: &IngredientMatch) -> bool {
        let mut matching = split.matching.iter();
        let mut missing = split.missing.iter();
        let mut next_matching = matching.next();
        let mut next_missing = missing.next();

        for ingredient in ingredients {
            if next_matching == Some(ingredient) {
                next_matching = matching.next();
            } else if next_missing == Some(ingredient) {
                next_missing = missing.next();
            } else {
                return false;
            }
        }

        next_matching.is_none() && next_missing.is_none()
    }

    #[test]
    fn partitions_in_declared_order() {
        let ingredients = owned(&["flour", "eggs", "milk", "sugar"]);
        let split = match_ingredients(&ingredients, &inventory(&["flour", "eggs"]));

        assert_eq!(split.matching, owned(&["flour", "eggs"]));
        assert_eq!(split.missing, owned(&["milk", "sugar"]));
        assert_eq!(split.total(), ingredients.len());
        assert!(interleave_back(&ingredients, &split));
    }

    #[test]
    fn keeps_recipe_casing_not_pantry_casing() {
        let ingredients = owned(&["Flour", "eggs", "Vanilla"]);
        let split = match_ingredients(&ingredients, &inventory(&["FLOUR", "Eggs"]));

        assert_eq!(split.matching, owned(&["Flour", "eggs"]));
        assert_eq!(split.missing, owned(&["Vanilla"]));
    }

    #[test]
    fn repeated_ingredients_are_classified_per_occurrence() {
        let ingredients = owned(&["butter", "sugar", "Butter"]);
        let split = match_ingredients(&ingredients, &inventory(&["butter"]));

        assert_eq!(split.matching, owned(&["butter", "Butter"]));
        assert_eq!(split.missing, owned(&["sugar"]));
        assert!(interleave_back(&ingredients, &split));
    }

    #[test]
    fn adding_pantry_items_only_moves_ingredients_to_matching() {
        let ingredients = owned(&["rice", "beans", "salsa", "cheese"]);
        let before = match_ingredients(&ingredients, &inventory(&["rice"]));
        let after = match_ingredients(&ingredients, &inventory(&["rice", "CHEESE"]));

        for ingredient in &before.matching {
            assert!(after.matching.contains(ingredient));
        }
        assert_eq!(after.matching, owned(&["rice", "cheese"]));
        assert!(after.missing.len() < before.missing.len());
    }

    #[test]
    fn empty_ingredient_list_produces_empty_split() {
        let split = match_ingredients(&[], &inventory(&["salt"]));
        assert_eq!(split, IngredientMatch::default());
        assert_eq!(split.total(), 0);
    }
}
