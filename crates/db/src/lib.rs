pub mod repositories;
pub mod service;

pub use repositories::{
    InMemoryPantryRepository, InMemoryRecipeRepository, JsonSnapshotRepository,
    PantryRepository, RecipeRepository, RepositoryError,
};
pub use service::SuggestionService;
