//! Request-level orchestration: two bulk reads, then one pure engine pass.

use tracing::{info, warn};

use larder_core::suggestions::{Suggestion, SuggestionEngine, SuggestionRequest};

use crate::repositories::{PantryRepository, RecipeRepository, RepositoryError};

pub struct SuggestionService<R, P> {
    recipes: R,
    pantry: P,
    engine: SuggestionEngine,
}

impl<R, P> SuggestionService<R, P>
where
    R: RecipeRepository,
    P: PantryRepository,
{
    pub fn new(recipes: R, pantry: P) -> Self {
        Self { recipes, pantry, engine: SuggestionEngine::new() }
    }

    /// Fetch the catalog and pantry concurrently and rank suggestions.
    ///
    /// A failed read is returned as-is; no retry and no partial result.
    pub async fn suggest(
        &self,
        request: &SuggestionRequest,
        correlation_id: &str,
    ) -> Result<Vec<Suggestion>, RepositoryError> {
        let fetched = tokio::try_join!(self.recipes.list_recipes(), self.pantry.list_items());
        let (recipes, pantry) = match fetched {
            Ok(snapshots) => snapshots,
            Err(error) => {
                warn!(
                    event_name = "suggestions.service.fetch_failed",
                    correlation_id,
                    error = %error,
                    "collaborator read failed"
                );
                return Err(error);
            }
        };

        let suggestions = self.engine.suggest(&recipes, &pantry, request);

        info!(
            event_name = "suggestions.service.completed",
            correlation_id,
            recipes = recipes.len(),
            pantry_items = pantry.len(),
            suggestions = suggestions.len(),
            as_of = %request.as_of,
            "recipe suggestions served"
        );

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use rust_decimal::Decimal;

    use larder_core::domain::pantry::PantryItem;
    use larder_core::domain::recipe::Recipe;
    use larder_core::suggestions::SuggestionRequest;

    use super::SuggestionService;
    use crate::repositories::{
        InMemoryPantryRepository, InMemoryRecipeRepository, PantryRepository, RepositoryError,
    };

    struct UnavailablePantry;

    #[async_trait::async_trait]
    impl PantryRepository for UnavailablePantry {
        async fn list_items(&self) -> Result<Vec<PantryItem>, RepositoryError> {
            Err(RepositoryError::Unavailable("pantry store offline".to_string()))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date")
    }

    fn catalog() -> InMemoryRecipeRepository {
        InMemoryRecipeRepository::with_recipes(vec![
            Recipe::new(1, "Pancakes", vec!["flour".into(), "eggs".into(), "milk".into()]),
            Recipe::new(
                2,
                "Cake",
                vec!["flour".into(), "eggs".into(), "milk".into(), "sugar".into()],
            ),
            Recipe::new(3, "Simple Bread", vec!["flour".into()]),
        ])
    }

    #[tokio::test]
    async fn serves_ranked_suggestions_from_repositories() {
        let pantry = InMemoryPantryRepository::with_items(vec![
            PantryItem::new("Flour", today() + Duration::days(30)),
            PantryItem::new("EGGS", today()),
            PantryItem::new("milk", today() - Duration::days(2)),
        ]);
        let service = SuggestionService::new(catalog(), pantry);
        let request = SuggestionRequest::new().as_of(today());

        let suggestions = service.suggest(&request, "req-1").await.expect("suggestions served");

        let ids: Vec<i64> = suggestions.iter().map(|s| s.recipe.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(suggestions[0].match_percentage, Decimal::new(6667, 2));
        assert_eq!(suggestions[0].missing_ingredients, vec!["milk".to_string()]);
        assert_eq!(suggestions[1].match_percentage, Decimal::from(50));
    }

    #[tokio::test]
    async fn fetch_failure_is_propagated_unchanged() {
        let service = SuggestionService::new(catalog(), UnavailablePantry);
        let request = SuggestionRequest::new().as_of(today());

        let error = service.suggest(&request, "req-2").await.expect_err("fetch should fail");

        assert!(matches!(
            error,
            RepositoryError::Unavailable(ref message) if message == "pantry store offline"
        ));
    }

    #[tokio::test]
    async fn empty_repositories_produce_empty_result() {
        let service = SuggestionService::new(
            InMemoryRecipeRepository::default(),
            InMemoryPantryRepository::default(),
        );

        let suggestions = service
            .suggest(&SuggestionRequest::new(), "req-3")
            .await
            .expect("empty snapshots are not an error");

        assert!(suggestions.is_empty());
    }
}
