//! Recipe Suggestion Engine
//!
//! Matches the pantry's unexpired inventory against the recipe catalog, scores each
//! recipe by ingredient coverage, keeps those meeting a minimum matching-ingredient
//! count, and ranks the survivors.

mod engine;
mod inventory;
mod matcher;
mod scoring;
mod types;

pub use engine::SuggestionEngine;
pub use inventory::PantryInventory;
pub use matcher::{match_ingredients, IngredientMatch};
pub use scoring::{rank_order, ScoreCalculator};
pub use types::*;

/// Minimum matching ingredients when the caller does not specify one
pub const DEFAULT_MIN_MATCHING_INGREDIENTS: i64 = 2;

/// Decimal places kept in a match percentage
pub const PERCENTAGE_DECIMAL_PLACES: u32 = 2;
