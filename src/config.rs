use std::env;
use std::time::Duration;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: Environment,
    /// Prefix every base route is mounted under, e.g. `/api`. Empty means root.
    pub base_path: String,
    pub envelope_mode: EnvelopeMode,
    pub taken_nicknames: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

/// How fixture bodies are shaped on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopeMode {
    /// Every route answers in the shape its client was written against.
    #[default]
    Original,
    /// Every route answers with `{status, message, data}`.
    Normalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

pub const DEFAULT_TAKEN_NICKNAMES: &[&str] = &["닉네임"];

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let environment = match lookup("ENV").unwrap_or_else(|| "local".to_string()).as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Local,
        };

        let base_path = normalize_base_path(&lookup("BASE_PATH").unwrap_or_default())?;

        let envelope_mode = match lookup("ENVELOPE_MODE")
            .unwrap_or_else(|| "original".to_string())
            .to_lowercase()
            .as_str()
        {
            "original" => EnvelopeMode::Original,
            "normalized" => EnvelopeMode::Normalized,
            other => anyhow::bail!("ENVELOPE_MODE must be 'original' or 'normalized', got '{}'", other),
        };

        let taken_nicknames = match lookup("TAKEN_NICKNAMES") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|nick| !nick.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_TAKEN_NICKNAMES.iter().map(|nick| nick.to_string()).collect(),
        };

        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECS must be a valid number of seconds")?;

        let log_format = match lookup("LOG_FORMAT")
            .unwrap_or_else(|| "json".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            other => anyhow::bail!("LOG_FORMAT must be 'json' or 'pretty', got '{}'", other),
        };

        let config = Config {
            port,
            environment,
            base_path,
            envelope_mode,
            taken_nicknames,
            request_timeout: Duration::from_secs(timeout_secs),
            log_format,
        };

        // Validate configuration values
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            environment: Environment::Local,
            base_path: String::new(),
            envelope_mode: EnvelopeMode::Original,
            taken_nicknames: DEFAULT_TAKEN_NICKNAMES.iter().map(|nick| nick.to_string()).collect(),
            request_timeout: Duration::from_secs(30),
            log_format: LogFormat::Json,
        }
    }
}

fn normalize_base_path(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        anyhow::bail!("BASE_PATH must start with '/', got '{}'", raw);
    }
    Ok(trimmed.to_string())
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Local)
    }
}
