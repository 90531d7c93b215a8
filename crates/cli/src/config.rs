//! Demo configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CONTEXT_DEMOS_DEFAULT_DEMO` - Demo shown when none is chosen: `shopping` (default) or `blog`
//! - `CONTEXT_DEMOS_CURRENCY` - ISO 4217 currency for cart prices (default: USD)
//! - `RUST_LOG` - Log filter (default: `context_demos_cli=info,context_demos_state=warn`)

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use context_demos_core::CurrencyCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_DEMO_VAR: &str = "CONTEXT_DEMOS_DEFAULT_DEMO";
const CURRENCY_VAR: &str = "CONTEXT_DEMOS_CURRENCY";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which demo to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Demo {
    /// Shopping cart shared by the header, product list, and cart detail.
    #[default]
    Shopping,
    /// Blog catalogue shared by the side navigation, post list, and category manager.
    Blog,
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shopping => f.write_str("shopping"),
            Self::Blog => f.write_str("blog"),
        }
    }
}

impl FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shopping" | "cart" => Ok(Self::Shopping),
            "blog" => Ok(Self::Blog),
            other => Err(format!("unknown demo '{other}', expected 'shopping' or 'blog'")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoConfig {
    /// Demo used when the command line does not pick one
    pub default_demo: Demo,
    /// Currency the cart prices are denominated in
    pub currency: CurrencyCode,
}

impl DemoConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unrecognised value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_demo = match lookup(DEFAULT_DEMO_VAR) {
            Some(value) => value
                .parse::<Demo>()
                .map_err(|e| ConfigError::InvalidEnvVar(DEFAULT_DEMO_VAR.to_string(), e))?,
            None => Demo::default(),
        };
        let currency = match lookup(CURRENCY_VAR) {
            Some(value) => value.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar(CURRENCY_VAR.to_string(), e.to_string())
            })?,
            None => CurrencyCode::default(),
        };

        Ok(Self {
            default_demo,
            currency,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.default_demo, Demo::Shopping);
        assert_eq!(config.currency, CurrencyCode::USD);
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::from_lookup(lookup(&[
            (DEFAULT_DEMO_VAR, "Blog"),
            (CURRENCY_VAR, "eur"),
        ]))
        .unwrap();
        assert_eq!(config.default_demo, Demo::Blog);
        assert_eq!(config.currency, CurrencyCode::EUR);
    }

    #[test]
    fn test_invalid_demo() {
        let err = DemoConfig::from_lookup(lookup(&[(DEFAULT_DEMO_VAR, "forum")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref var, _) if var == DEFAULT_DEMO_VAR));
    }

    #[test]
    fn test_invalid_currency() {
        let err = DemoConfig::from_lookup(lookup(&[(CURRENCY_VAR, "BTC")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref var, _) if var == CURRENCY_VAR));
    }
}
