use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::scoring::WeightConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub weights: WeightConfig,
    pub dataset: DatasetConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
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
    pub dataset_path: Option<PathBuf>,
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
            weights: WeightConfig::default(),
            dataset: DatasetConfig { path: PathBuf::from("candidates.json") },
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
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("hirerank.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        if !config.weights.is_balanced() {
            warn!(
                event_name = "config.weights.unbalanced",
                total = config.weights.total(),
                "scoring weights do not add up to 100"
            );
        }

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(weights) = patch.weights {
            if let Some(value) = weights.work_availability {
                self.weights.work_availability = value;
            }
            if let Some(value) = weights.relevant_experience {
                self.weights.relevant_experience = value;
            }
            if let Some(value) = weights.experience_breadth {
                self.weights.experience_breadth = value;
            }
            if let Some(value) = weights.education {
                self.weights.education = value;
            }
            if let Some(value) = weights.skills {
                self.weights.skills = value;
            }
            if let Some(value) = weights.leadership {
                self.weights.leadership = value;
            }
        }

        if let Some(dataset) = patch.dataset {
            if let Some(path) = dataset.path {
                self.dataset.path = path;
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
        if let Some(value) = read_env("HIRERANK_WEIGHT_WORK_AVAILABILITY") {
            self.weights.work_availability =
                parse_f64("HIRERANK_WEIGHT_WORK_AVAILABILITY", &value)?;
        }
        if let Some(value) = read_env("HIRERANK_WEIGHT_RELEVANT_EXPERIENCE") {
            self.weights.relevant_experience =
                parse_f64("HIRERANK_WEIGHT_RELEVANT_EXPERIENCE", &value)?;
        }
        if let Some(value) = read_env("HIRERANK_WEIGHT_EXPERIENCE_BREADTH") {
            self.weights.experience_breadth =
                parse_f64("HIRERANK_WEIGHT_EXPERIENCE_BREADTH", &value)?;
        }
        if let Some(value) = read_env("HIRERANK_WEIGHT_EDUCATION") {
            self.weights.education = parse_f64("HIRERANK_WEIGHT_EDUCATION", &value)?;
        }
        if let Some(value) = read_env("HIRERANK_WEIGHT_SKILLS") {
            self.weights.skills = parse_f64("HIRERANK_WEIGHT_SKILLS", &value)?;
        }
        if let Some(value) = read_env("HIRERANK_WEIGHT_LEADERSHIP") {
            self.weights.leadership = parse_f64("HIRERANK_WEIGHT_LEADERSHIP", &value)?;
        }

        if let Some(value) = read_env("HIRERANK_DATASET_PATH") {
            self.dataset.path = PathBuf::from(value);
        }

        let log_level =
            read_env("HIRERANK_LOGGING_LEVEL").or_else(|| read_env("HIRERANK_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("HIRERANK_LOGGING_FORMAT").or_else(|| read_env("HIRERANK_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(dataset_path) = overrides.dataset_path {
            self.dataset.path = dataset_path;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_weights(&self.weights)?;
        validate_dataset(&self.dataset)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("hirerank.toml"), PathBuf::from("config/hirerank.toml")]
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

fn validate_weights(weights: &WeightConfig) -> Result<(), ConfigError> {
    weights.validate().map_err(|error| ConfigError::Validation(format!("weights: {error}")))
}

fn validate_dataset(dataset: &DatasetConfig) -> Result<(), ConfigError> {
    if dataset.path.as_os_str().is_empty() {
        return Err(ConfigError::Validation("dataset.path must not be empty".to_string()));
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

fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value.trim().parse::<f64>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    weights: Option<WeightsPatch>,
    dataset: Option<DatasetPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct WeightsPatch {
    work_availability: Option<f64>,
    relevant_experience: Option<f64>,
    experience_breadth: Option<f64>,
    education: Option<f64>,
    skills: Option<f64>,
    leadership: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct DatasetPatch {
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
