// src/config.rs

use std::env;
use std::fmt;
use std::time::Duration;

use dotenvy::dotenv;
use url::Url;

use crate::session::SessionSettings;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_FUNCTION_URL: &str = "http://127.0.0.1:3000/functions/v1/generate-quiz";

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres store holding authors and authored questions.
    pub database_url: Option<String>,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: Url,
    /// Where clients reach the generation function.
    pub generate_function_url: Url,
    /// Countdown budget per question, in ticks.
    pub question_time_budget: u32,
    pub rust_log: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, reason } => write!(f, "{} is invalid: {}", key, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|v| !v.is_empty());

        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let gemini_model =
            lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let gemini_base_url = parse_url(
            "GEMINI_BASE_URL",
            lookup("GEMINI_BASE_URL").as_deref().unwrap_or(DEFAULT_GEMINI_BASE_URL),
        )?;

        let generate_function_url = parse_url(
            "GENERATE_FUNCTION_URL",
            lookup("GENERATE_FUNCTION_URL").as_deref().unwrap_or(DEFAULT_FUNCTION_URL),
        )?;

        let question_time_budget = match lookup("QUESTION_TIME_BUDGET") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: "QUESTION_TIME_BUDGET",
                    reason: format!("expected a positive integer, got '{}'", raw),
                })?,
            None => crate::session::DEFAULT_TIME_BUDGET,
        };

        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => 3000,
        };

        Ok(Self {
            database_url,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            generate_function_url,
            question_time_budget,
            rust_log,
            port,
        })
    }

    /// Settings handed to every quiz session; one tick is one second.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            time_budget: self.question_time_budget,
            tick: Duration::from_secs(1),
        }
    }
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("GEMINI_API_KEY", "secret")])).unwrap();

        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.question_time_budget, 10);
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "info");
        assert!(config.database_url.is_none());
        assert_eq!(config.session_settings().time_budget, 10);
    }

    #[test]
    fn missing_api_key_is_reported() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("GEMINI_API_KEY"));
    }

    #[test]
    fn rejects_malformed_values() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_BASE_URL", "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "GEMINI_BASE_URL", .. }));

        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "secret"),
            ("QUESTION_TIME_BUDGET", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "QUESTION_TIME_BUDGET", .. }));
    }
}
