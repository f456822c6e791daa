use config::{Config, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

const CONFIG_PATH_VAR: &str = "CONTAS_CONFIG";
const ENV_PREFIX: &str = "CONTAS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Length of the date range pre-filled in the filter bar. 0 leaves it empty.
    #[serde(default = "default_range_days")]
    pub default_range_days: u32,
}

fn default_api_url() -> String {
    contas_api::DEFAULT_BASE_URL.to_string()
}

fn default_range_days() -> u32 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            default_range_days: default_range_days(),
        }
    }
}

impl Settings {
    /// Read `config.toml` (or the file named by `CONTAS_CONFIG`), then
    /// `CONTAS__*` environment variables on top.
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load and validate in one step
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Self::new()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_url is required".to_string()));
        }
        if !self.api_url.starts_with("http") {
            return Err(ConfigError::Invalid(
                "api_url must be a valid HTTP(S) URL".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_url, "http://localhost:5000");
        assert_eq!(settings.default_range_days, 30);
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = Settings::from_toml(
            r#"
            api_url = "https://contas.example.com"
            default_range_days = 0
            "#,
        )
        .unwrap();
        assert_eq!(settings.api_url, "https://contas.example.com");
        assert_eq!(settings.default_range_days, 0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_url() {
        let settings = Settings {
            api_url: "localhost:5000".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::Invalid(_))));

        let settings = Settings {
            api_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_value_is_a_load_error() {
        let result = Settings::from_toml(r#"default_range_days = "soon""#);
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
