use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::prediction::predictor::{PredictionStrategy, DEFAULT_TOP_K};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub artifact_dir: PathBuf,
    pub prediction_strategy: PredictionStrategy,
    pub artifact_cache: bool,
    pub top_k: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            artifact_dir: PathBuf::from(
                std::env::var("ARTIFACT_DIR").unwrap_or_else(|_| "./artifacts".to_string()),
            ),
            prediction_strategy: std::env::var("PREDICTION_STRATEGY")
                .unwrap_or_else(|_| "model".to_string())
                .parse::<PredictionStrategy>()
                .map_err(|e| anyhow!(e))
                .context("PREDICTION_STRATEGY must be 'model' or 'mock'")?,
            artifact_cache: parse_bool(
                &std::env::var("ARTIFACT_CACHE").unwrap_or_else(|_| "true".to_string()),
            )
            .context("ARTIFACT_CACHE must be true or false")?,
            top_k: parse_top_k(
                &std::env::var("TOP_K").unwrap_or_else(|_| DEFAULT_TOP_K.to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(anyhow!("invalid boolean '{other}'")),
    }
}

fn parse_top_k(value: &str) -> Result<usize> {
    let top_k = value
        .trim()
        .parse::<usize>()
        .context("TOP_K must be a positive integer")?;
    if top_k == 0 {
        return Err(anyhow!("TOP_K must be at least 1"));
    }
    Ok(top_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" 1 ").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(parse_bool("sometimes").is_err());
    }

    #[test]
    fn test_parse_top_k() {
        assert_eq!(parse_top_k("5").unwrap(), 5);
        assert!(parse_top_k("0").is_err());
        assert!(parse_top_k("-3").is_err());
        assert!(parse_top_k("five").is_err());
    }
}
