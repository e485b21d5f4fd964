use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use larder_core::config::{AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "suggestions.default_min_matching_ingredients",
        &config.suggestions.default_min_matching_ingredients.to_string(),
        source(
            "suggestions.default_min_matching_ingredients",
            &["LARDER_SUGGESTIONS_MIN_MATCHING"],
        ),
    ));
    lines.push(render_line(
        "suggestions.max_results",
        &config
            .suggestions
            .max_results
            .map(|max| max.to_string())
            .unwrap_or_else(|| "<unlimited>".to_string()),
        source("suggestions.max_results", &["LARDER_SUGGESTIONS_MAX_RESULTS"]),
    ));

    lines.push(render_line(
        "data.recipes_path",
        &config.data.recipes_path.display().to_string(),
        source("data.recipes_path", &["LARDER_DATA_RECIPES_PATH"]),
    ));
    lines.push(render_line(
        "data.pantry_path",
        &config.data.pantry_path.display().to_string(),
        source("data.pantry_path", &["LARDER_DATA_PANTRY_PATH"]),
    ));

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        source("logging.level", &["LARDER_LOGGING_LEVEL", "LARDER_LOG_LEVEL"]),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        source("logging.format", &["LARDER_LOGGING_FORMAT", "LARDER_LOG_FORMAT"]),
    ));

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    [PathBuf::from("larder.toml"), PathBuf::from("config/larder.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
