use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::suggestions::DEFAULT_MIN_MATCHING_INGREDIENTS;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub suggestions: SuggestionConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionConfig {
    /// Non-positive values admit every recipe.
    pub default_min_matching_ingredients: i64,
    pub max_results: Option<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataConfig {
    pub recipes_path: PathBuf,
    pub pantry_path: PathBuf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub min_matching_ingredients: Option<i64>,
    pub max_results: Option<usize>,
    pub recipes_path: Option<PathBuf>,
    pub pantry_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            suggestions: SuggestionConfig {
                default_min_matching_ingredients: DEFAULT_MIN_MATCHING_INGREDIENTS,
                max_results: None,
            },
            data: DataConfig {
                recipes_path: PathBuf::from("data/recipes.json"),
                pantry_path: PathBuf::from("data/pantry.json"),
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("larder.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(suggestions) = patch.suggestions {
            if let Some(min) = suggestions.default_min_matching_ingredients {
                self.suggestions.default_min_matching_ingredients = min;
            }
            if let Some(max_results) = suggestions.max_results {
                self.suggestions.max_results = Some(max_results);
            }
        }

        if let Some(data) = patch.data {
            if let Some(recipes_path) = data.recipes_path {
                self.data.recipes_path = recipes_path;
            }
            if let Some(pantry_path) = data.pantry_path {
                self.data.pantry_path = pantry_path;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("LARDER_SUGGESTIONS_MIN_MATCHING") {
            self.suggestions.default_min_matching_ingredients =
                parse_i64("LARDER_SUGGESTIONS_MIN_MATCHING", &value)?;
        }
        if let Some(value) = read_env("LARDER_SUGGESTIONS_MAX_RESULTS") {
            self.suggestions.max_results =
                Some(parse_usize("LARDER_SUGGESTIONS_MAX_RESULTS", &value)?);
        }

        if let Some(value) = read_env("LARDER_DATA_RECIPES_PATH") {
            self.data.recipes_path = PathBuf::from(value);
        }
        if let Some(value) = read_env("LARDER_DATA_PANTRY_PATH") {
            self.data.pantry_path = PathBuf::from(value);
        }

        let log_level = read_env("LARDER_LOGGING_LEVEL").or_else(|| read_env("LARDER_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("LARDER_LOGGING_FORMAT").or_else(|| read_env("LARDER_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(min) = overrides.min_matching_ingredients {
            self.suggestions.default_min_matching_ingredients = min;
        }
        if let Some(max_results) = overrides.max_results {
            self.suggestions.max_results = Some(max_results);
        }
        if let Some(recipes_path) = overrides.recipes_path {
            self.data.recipes_path = recipes_path;
        }
        if let Some(pantry_path) = overrides.pantry_path {
            self.data.pantry_path = pantry_path;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_suggestions(&self.suggestions)?;
        validate_data(&self.data)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("larder.toml"), PathBuf::from("config/larder.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_suggestions(suggestions: &SuggestionConfig) -> Result<(), ConfigError> {
    if suggestions.max_results == Some(0) {
        return Err(ConfigError::Validation(
            "suggestions.max_results must be greater than zero when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_data(data: &DataConfig) -> Result<(), ConfigError> {
    if data.recipes_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation("data.recipes_path must not be empty".to_string()));
    }
    if data.pantry_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation("data.pantry_path must not be empty".to_string()));
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_i64(key: &str, value: &str) -> Result<i64, ConfigError> {
    value.trim().parse::<i64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse::<usize>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    suggestions: Option<SuggestionsPatch>,
    data: Option<DataPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct SuggestionsPatch {
    default_min_matching_ingredients: Option<i64>,
    max_results: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct DataPatch {
    recipes_path: Option<PathBuf>,
    pantry_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
