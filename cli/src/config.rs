//! Application configuration
//!
//! Defaults, then an optional TOML file, then `TYPERANK_*` environment
//! variables, then command line flags.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use typerank_chart::ScoreWeights;
use typerank_market::{DEFAULT_BASE_URL, Hero, PacingPolicy, Rarity, RetryPolicy};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingSettings,
    pub scoring: ScoreWeights,
    pub market: MarketSettings,
    pub request: RequestSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// trace, debug, info, warn or error
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketSettings {
    pub base_url: String,
    /// Session cookie copied from a browser, sent verbatim
    pub cookie: Option<String>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub page_size: u32,
    pub hero: String,
    pub rarity: String,
    /// Listings to print
    pub top: usize,
    pub max_pages: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestSettings {
    pub min_delay_ms: u64,
    pub jitter_ms: u64,
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    pub backoff_multiplier: f64,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for MarketSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie: None,
            referer: Some("https://app.elemon.io/market".to_string()),
            user_agent: Some(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/97.0.4692.71 Safari/537.36"
                    .to_string(),
            ),
            page_size: 50,
            hero: "legolas".to_string(),
            rarity: "S".to_string(),
            top: 20,
            max_pages: None,
        }
    }
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: 100,
            jitter_ms: 500,
            max_attempts: 3,
            initial_backoff_ms: 1000,
            max_backoff_ms: 30_000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RequestSettings {
    pub fn pacing(&self) -> PacingPolicy {
        PacingPolicy {
            min_delay: Duration::from_millis(self.min_delay_ms),
            jitter: Duration::from_millis(self.jitter_ms),
        }
    }

    pub fn retry(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            initial_delay: Duration::from_millis(self.initial_backoff_ms),
            max_delay: Duration::from_millis(self.max_backoff_ms),
            backoff_multiplier: self.backoff_multiplier,
        }
    }
}

impl MarketSettings {
    pub fn hero(&self) -> Result<Hero> {
        Hero::from_name(&self.hero).ok_or_else(|| anyhow!("Unknown hero: {}", self.hero))
    }

    pub fn rarity(&self) -> Result<Rarity> {
        Rarity::from_name(&self.rarity).ok_or_else(|| anyhow!("Unknown rarity: {}", self.rarity))
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `TYPERANK_*` overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("TYPERANK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(cookie) = lookup("TYPERANK_MARKET_COOKIE") {
            self.market.cookie = Some(cookie);
        }
        if let Some(base_url) = lookup("TYPERANK_MARKET_BASE_URL") {
            self.market.base_url = base_url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.market.page_size == 0 {
            bail!("market.page_size must be greater than 0");
        }
        if self.request.max_attempts == 0 {
            bail!("request.max_attempts must be at least 1");
        }
        let multiplier = self.request.backoff_multiplier;
        if !multiplier.is_finite() || multiplier < 1.0 {
            bail!(
                "request.backoff_multiplier must be a finite number of at least 1.0, got {}",
                multiplier
            );
        }
        self.market.hero()?;
        self.market.rarity()?;
        Ok(())
    }
}
