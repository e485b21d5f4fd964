pub mod config;
pub mod domain;
pub mod errors;
pub mod suggestions;

pub use domain::pantry::{PantryItem, PantryItemId};
pub use domain::recipe::{Recipe, RecipeId};
pub use errors::{ApplicationError, InterfaceError};
pub use suggestions::{
    MatchTier, PantryInventory, Suggestion, SuggestionEngine, SuggestionRequest,
    DEFAULT_MIN_MATCHING_INGREDIENTS,
};
