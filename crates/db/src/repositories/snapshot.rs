use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use larder_core::domain::pantry::PantryItem;
use larder_core::domain::recipe::Recipe;

use super::{PantryRepository, RecipeRepository, RepositoryError};

/// Read-only repository over two JSON array files exported by the surrounding application.
///
/// Files are re-read on every call so each request sees the current snapshot.
#[derive(Clone, Debug)]
pub struct JsonSnapshotRepository {
    recipes_path: PathBuf,
    pantry_path: PathBuf,
}

impl JsonSnapshotRepository {
    pub fn new(recipes_path: impl Into<PathBuf>, pantry_path: impl Into<PathBuf>) -> Self {
        Self { recipes_path: recipes_path.into(), pantry_path: pantry_path.into() }
    }

    pub fn recipes_path(&self) -> &Path {
        &self.recipes_path
    }

    pub fn pantry_path(&self) -> &Path {
        &self.pantry_path
    }
}

async fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, RepositoryError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RepositoryError::Io { path: path.to_path_buf(), source })?;

    serde_json::from_str(&raw)
        .map_err(|source| RepositoryError::Decode { path: path.to_path_buf(), source })
}

#[async_trait::async_trait]
impl RecipeRepository for JsonSnapshotRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RepositoryError> {
        read_json_array(&self.recipes_path).await
    }
}

#[async_trait::async_trait]
impl PantryRepository for JsonSnapshotRepository {
    async fn list_items(&self) -> Result<Vec<PantryItem>, RepositoryError> {
        read_json_array(&self.pantry_path).await
    }
}
