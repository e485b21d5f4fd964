use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use larder_core::domain::pantry::PantryItem;
use larder_core::domain::recipe::Recipe;
use larder_core::errors::ApplicationError;

pub mod memory;
pub mod snapshot;

pub use memory::{InMemoryPantryRepository, InMemoryRecipeRepository};
pub use snapshot::JsonSnapshotRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("could not read `{path}`: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("could not decode `{path}`: {source}")]
    Decode { path: PathBuf, source: serde_json::Error },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for ApplicationError {
    fn from(value: RepositoryError) -> Self {
        ApplicationError::UpstreamFetch(value.to_string())
    }
}

/// Bulk read of the full recipe catalog
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RepositoryError>;
}

/// Bulk read of the full pantry snapshot, expired entries included
#[async_trait]
pub trait PantryRepository: Send + Sync {
    async fn list_items(&self) -> Result<Vec<PantryItem>, RepositoryError>;
}
