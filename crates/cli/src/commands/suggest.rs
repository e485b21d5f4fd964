use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Args;
use serde::Serialize;
use serde_json::json;

use crate::commands::CommandResult;
use larder_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use larder_core::errors::ApplicationError;
use larder_core::suggestions::{MatchTier, Suggestion, SuggestionRequest};
use larder_db::{JsonSnapshotRepository, SuggestionService};

#[derive(Debug, Clone, Default, Args)]
pub struct SuggestArgs {
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Minimum number of matching ingredients (non-positive admits every recipe)"
    )]
    pub min_matching: Option<i64>,
    #[arg(long, help = "Evaluate expiry as of this date (YYYY-MM-DD, defaults to today UTC)")]
    pub as_of: Option<NaiveDate>,
    #[arg(long, help = "Return at most this many suggestions")]
    pub limit: Option<usize>,
    #[arg(long, help = "Path to the recipe catalog JSON snapshot")]
    pub recipes: Option<PathBuf>,
    #[arg(long, help = "Path to the pantry JSON snapshot")]
    pub pantry: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SuggestionView<'a> {
    #[serde(flatten)]
    suggestion: &'a Suggestion,
    tier: MatchTier,
    summary: String,
}

pub fn run(args: SuggestArgs) -> CommandResult {
    let correlation_id = format!("cli-{}", Utc::now().timestamp_millis());

    let config = match AppConfig::load(LoadOptions {
        overrides: ConfigOverrides {
            min_matching_ingredients: args.min_matching,
            max_results: args.limit,
            recipes_path: args.recipes,
            pantry_path: args.pantry,
            ..ConfigOverrides::default()
        },
        ..LoadOptions::default()
    }) {
        Ok(config) => config,
        Err(error) => {
            let error = ApplicationError::Configuration(error.to_string());
            return CommandResult::failure(
                "suggest",
                error.error_class(),
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    let mut request = SuggestionRequest::new()
        .with_min_matching_ingredients(config.suggestions.default_min_matching_ingredients);
    if let Some(as_of) = args.as_of {
        request = request.as_of(as_of);
    }
    if let Some(max_results) = config.suggestions.max_results {
        request = request.with_max_results(max_results);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "suggest",
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    let snapshots =
        JsonSnapshotRepository::new(&config.data.recipes_path, &config.data.pantry_path);
    let service = SuggestionService::new(snapshots.clone(), snapshots);
    let result = runtime.block_on(service.suggest(&request, &correlation_id));

    match result {
        Ok(suggestions) => {
            let views: Vec<SuggestionView<'_>> = suggestions
                .iter()
                .map(|suggestion| {
                    let tier = suggestion.tier();
                    SuggestionView {
                        suggestion,
                        tier,
                        summary: tier.display_percentage(suggestion.match_percentage),
                    }
                })
                .collect();

            let suggestions_value = match serde_json::to_value(&views) {
                Ok(value) => value,
                Err(error) => {
                    return CommandResult::failure(
                        "suggest",
                        "serialization",
                        format!("failed to serialize suggestions: {error}"),
                        5,
                    );
                }
            };

            let data = json!({
                "correlation_id": correlation_id,
                "as_of": request.as_of.to_string(),
                "min_matching_ingredients": request.min_matching_ingredients,
                "suggestions": suggestions_value,
            });
            CommandResult::success(
                "suggest",
                format!("{} recipe suggestion(s) as of {}", suggestions.len(), request.as_of),
                Some(data),
            )
        }
        Err(error) => {
            let error = ApplicationError::from(error);
            let error_class = error.error_class();
            let detail = error.to_string();
            let interface = error.into_interface(correlation_id);
            CommandResult::failure(
                "suggest",
                error_class,
                format!(
                    "{} (correlation_id={}: {detail})",
                    interface.user_message(),
                    interface.correlation_id()
                ),
                4,
            )
        }
    }
}
