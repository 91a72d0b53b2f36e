use std::env;
use std::fs;
use crate::config::constants::{API_KEY_ENV, MODEL_ENV, PORT_ENV, RESPONSE_FORMAT_ENV};
use crate::enums::response_shape::ResponseShape;
use crate::errors::{ErrlyzerError, ErrlyzerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {
    /// Loads `~/errlyzer/config.toml` when present, then applies environment
    /// overrides. Environment is read once here, at process start.
    pub fn load() -> ErrlyzerResult<Config> {
        let config_path = dirs::home_dir().map(|d| d.join("errlyzer/config.toml")).unwrap_or_default();

        let mut config = if config_path.exists() {
            log::info!("📋 Loading config from: {}", config_path.display());
            let content = fs::read_to_string(&config_path).map_err(|e| ErrlyzerError::ConfigurationFileError {
                path: config_path.display().to_string(),
                reason: e.to_string(),
            })?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    fn apply_env_overrides(config: &mut Config) {
        if let Ok(model) = env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                config.ai.model = model;
            }
        }
        if let Ok(port) = env::var(PORT_ENV) {
            if let Ok(port) = port.trim().parse() {
                config.server.port = port;
            }
        }
        if let Ok(format) = env::var(RESPONSE_FORMAT_ENV) {
            if !format.trim().is_empty() {
                config.server.response_format = format;
            }
        }
    }

    /// The key itself is never stored in the config file; only the name of
    /// the environment variable that carries it.
    pub fn resolve_api_key(config: &Config) -> ErrlyzerResult<String> {
        let var_name = config.ai.api_key_env.as_deref().unwrap_or(API_KEY_ENV);

        match env::var(var_name) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ErrlyzerError::config_error(
                &format!("API key environment variable '{}' is not set", var_name),
                Some("api_key_env"),
                Some("Export the upstream provider key before starting the server"),
            )),
        }
    }

    pub fn create_sample_config() -> ErrlyzerResult<()> {
        let sample_config = r#"# Errlyzer Configuration

[server]
# Bind address and port for the analysis API
host = "0.0.0.0"
port = 5000

# Response variant: "text" (fixed-section plain text) or "json"
response_format = "text"

[ai]
# Upstream Gemini model identifier
model = "gemini-2.5-flash"

# Generation parameters forwarded to the provider
max_tokens = 3000
temperature = 0.0

# Name of the environment variable holding the API key
api_key_env = "API_KEY"

# Upstream call timeout; expiry is treated as a transport failure
request_timeout_secs = 60
"#;
        let config_dir_path = dirs::home_dir().map(|d| d.join("errlyzer")).unwrap_or_default();
        let config_file_path = config_dir_path.join("config.toml");

        fs::create_dir_all(&config_dir_path)?;
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if ResponseShape::parse(&config.server.response_format).is_none() {
            errors.push(format!(
                "Unknown response_format '{}': expected 'text' or 'json'",
                config.server.response_format
            ));
        }

        if config.server.host.trim().is_empty() {
            errors.push("Server host must not be empty".to_string());
        }

        if config.ai.model.trim().is_empty() {
            errors.push("Model identifier must not be empty".to_string());
        }

        if config.ai.max_tokens == 0 {
            errors.push("max_tokens must be greater than zero".to_string());
        }

        if !(0.0..=2.0).contains(&config.ai.temperature) {
            errors.push(format!(
                "Temperature {} is out of the supported range 0.0..=2.0",
                config.ai.temperature
            ));
        }

        if config.ai.request_timeout_secs == 0 {
            errors.push("request_timeout_secs must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
