use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for fetching pages and saving reports
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent when fetching pages
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Directory saved reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; RecipeReport/1.0)".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Settings {
    /// Load settings from `recipe-report.toml` and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load settings from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables with RECIPE_REPORT__ prefix, e.g. RECIPE_REPORT__TIMEOUT=10
/// 2. recipe-report.toml in the current directory
/// 3. Default values
pub fn load_config() -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        .add_source(File::with_name("recipe-report").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_REPORT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.timeout, 30);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert!(settings.user_agent.contains("RecipeReport"));
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_partial_source_uses_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str("timeout = 5", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.timeout, 5);
        assert_eq!(settings.user_agent, default_user_agent());
        assert_eq!(settings.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_config_without_file() {
        // No recipe-report.toml in the test working directory
        let result = load_config();
        assert!(result.is_ok());
    }
}
