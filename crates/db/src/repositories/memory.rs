use tokio::sync::RwLock;

use larder_core::domain::pantry::PantryItem;
use larder_core::domain::recipe::Recipe;

use super::{PantryRepository, RecipeRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<Vec<Recipe>>,
}

impl InMemoryRecipeRepository {
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes: RwLock::new(recipes) }
    }

    /// Insert a recipe, replacing any existing one with the same id in place.
    pub async fn save(&self, recipe: Recipe) {
        let mut recipes = self.recipes.write().await;
        match recipes.iter_mut().find(|existing| existing.id == recipe.id) {
            Some(existing) => *existing = recipe,
            None => recipes.push(recipe),
        }
    }
}

#[async_trait::async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RepositoryError> {
        let recipes = self.recipes.read().await;
        Ok(recipes.clone())
    }
}

#[derive(Default)]
pub struct InMemoryPantryRepository {
    items: RwLock<Vec<PantryItem>>,
}

impl InMemoryPantryRepository {
    pub fn with_items(items: Vec<PantryItem>) -> Self {
        Self { items: RwLock::new(items) }
    }

    pub async fn add(&self, item: PantryItem) {
        self.items.write().await.push(item);
    }
}

#[async_trait::async_trait]
impl PantryRepository for InMemoryPantryRepository {
    async fn list_items(&self) -> Result<Vec<PantryItem>, RepositoryError> {
        let items = self.items.read().await;
        Ok(items.clone())
    }
}
