//! Configuration loaded from environment variables.
//!
//! Four independent configs, each with its own prefix, all optional with
//! production defaults: `AppConfig` (no prefix), `IndiaraceConfig`
//! (`INDIARACE_`), `ScraperConfig` (`SCRAPER_`) and `JobConfig` (`JOB_`).

use crate::error::ConfigError;
use chrono::{Datelike, Local};
use serde_derive::Deserialize;
use std::str::FromStr;
use std::time::Duration;

fn default_log_level() -> String {
    "info".to_string()
}

/// Process-wide settings.
#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Returns the log level as a tracing Level enum.
    /// Defaults to INFO if the configured level is invalid.
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(ConfigError::env_parse("AppConfig", err)),
    }
}

fn default_base_url() -> String {
    "https://www.indiarace.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Where and how to reach the indiarace site.
#[derive(Deserialize, Debug, Clone)]
pub struct IndiaraceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent verbatim; the site serves browser user agents only.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl IndiaraceConfig {
    /// The base origin parsed as a URL, used to resolve relative profile
    /// links found in race pages.
    pub fn base(&self) -> Result<reqwest::Url, ConfigError> {
        reqwest::Url::parse(&self.base_url).map_err(|err| ConfigError::invalid("base_url", err))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

pub fn load_indiarace_config() -> Result<IndiaraceConfig, ConfigError> {
    match envy::prefixed("INDIARACE_").from_env::<IndiaraceConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(ConfigError::env_parse("IndiaraceConfig", err)),
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    1000
}

fn default_rate_limit_ms() -> u64 {
    300
}

/// Retry and pacing knobs for the fetch loop.
#[derive(Deserialize, Debug, Clone)]
pub struct ScraperConfig {
    /// Total attempts per request, first try included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles per further attempt.
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
    /// Pause after every venue-day request, success or not.
    #[serde(default = "default_rate_limit_ms")]
    pub rate_limit_ms: u64,
}

impl ScraperConfig {
    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }

    pub fn rate_limit(&self) -> Duration {
        Duration::from_millis(self.rate_limit_ms)
    }
}

pub fn load_scraper_config() -> Result<ScraperConfig, ConfigError> {
    match envy::prefixed("SCRAPER_").from_env::<ScraperConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(ConfigError::env_parse("ScraperConfig", err)),
    }
}

fn default_output_dir() -> String {
    "indiarace_monthly".to_string()
}

/// What to scrape and where to put the artifacts.
#[derive(Deserialize, Debug)]
pub struct JobConfig {
    pub year: Option<i32>,
    pub month: Option<u32>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl JobConfig {
    /// The month to scrape: the configured one, falling back to the current
    /// local month for whichever part is unset.
    pub fn target_month(&self) -> (i32, u32) {
        let now = Local::now();
        (
            self.year.unwrap_or_else(|| now.year()),
            self.month.unwrap_or_else(|| now.month()),
        )
    }
}

pub fn load_job_config() -> Result<JobConfig, ConfigError> {
    match envy::prefixed("JOB_").from_env::<JobConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(ConfigError::env_parse("JobConfig", err)),
    }
}
