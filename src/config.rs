use std::path::PathBuf;

use reqwest::Url;

use crate::error::{ApiError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TOP_N: usize = 8;

const API_URL_VAR: &str = "ACTORCHARTS_API_URL";
const RETRIES_VAR: &str = "ACTORCHARTS_RETRIES";
const TOP_N_VAR: &str = "ACTORCHARTS_TOP_N";
const EXPORT_DIR_VAR: &str = "ACTORCHARTS_EXPORT_DIR";

/// Runtime settings for the client, read from `ACTORCHARTS_*` variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    /// Extra attempts for transport failures. Zero keeps every request single-shot.
    pub retries: usize,
    /// Bars shown in the box office ranking
    pub top_n: usize,
    /// When set, chart series of each selected actor are exported as csv here
    pub export_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim())
            .map_err(|e| ApiError::Config(format!("{} is not a valid url: {}", API_URL_VAR, e)))?;
        if api_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "{} must be an http(s) base url, got {}",
                API_URL_VAR, raw_url
            )));
        }

        let mut config = Config {
            api_url,
            retries: 0,
            top_n: DEFAULT_TOP_N,
            export_dir: None,
        };

        if let Some(raw_retries) = lookup(RETRIES_VAR) {
            config.retries = parse_number(RETRIES_VAR, &raw_retries)?;
        }

        if let Some(raw_top_n) = lookup(TOP_N_VAR) {
            let top_n = parse_number(TOP_N_VAR, &raw_top_n)?;
            if top_n == 0 {
                return Err(ApiError::Config(format!("{} must be at least 1", TOP_N_VAR)));
            }
            config.top_n = top_n;
        }

        config.export_dir = lookup(EXPORT_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_number(var: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|e| ApiError::Config(format!("{} must be a non-negative integer: {}", var, e)))
}
