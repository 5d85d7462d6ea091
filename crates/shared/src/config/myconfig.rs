use anyhow::{Context, Result, anyhow};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub nearpay: NearpayConfig,
    pub profile_store: ProfileStoreConfig,
    pub stats: StatsConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port_str = std::env::var("PORT").context("Missing env: PORT")?;
        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        Ok(Self {
            port,
            nearpay: NearpayConfig::from_env()?,
            profile_store: ProfileStoreConfig::from_env()?,
            stats: StatsConfig::from_env()?,
        })
    }
}

/// Nearpay payment-terminal API endpoint.
#[derive(Debug, Clone)]
pub struct NearpayConfig {
    pub base_url: String,
    pub api_key: String,
}

impl NearpayConfig {
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("NEARPAY_BASE_URL").context("Missing env: NEARPAY_BASE_URL")?;
        let api_key = std::env::var("NEARPAY_API_KEY").context("Missing env: NEARPAY_API_KEY")?;

        Ok(Self { base_url, api_key })
    }
}

/// Profile store holding merchant and driver documents.
#[derive(Debug, Clone)]
pub struct ProfileStoreConfig {
    pub base_url: String,
}

impl ProfileStoreConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("PROFILE_STORE_BASE_URL")
            .context("Missing env: PROFILE_STORE_BASE_URL")?;

        Ok(Self { base_url })
    }
}

/// Tuning knobs for the aggregation pipeline. All optional with defaults.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub page_size: u32,
    pub max_pages: u32,
    pub fetch_timeout: Duration,
    pub stats_timeout: Duration,
}

impl StatsConfig {
    pub fn from_env() -> Result<Self> {
        let page_size = env_or("PAGE_SIZE", 100)?;
        let max_pages = env_or("MAX_PAGES", 1000)?;
        let fetch_timeout_secs: u64 = env_or("FETCH_TIMEOUT_SECS", 10)?;
        let stats_timeout_secs: u64 = env_or("STATS_TIMEOUT_SECS", 60)?;

        if page_size == 0 {
            return Err(anyhow!("PAGE_SIZE must be greater than zero"));
        }
        if max_pages == 0 {
            return Err(anyhow!("MAX_PAGES must be greater than zero"));
        }

        Ok(Self {
            page_size,
            max_pages,
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            stats_timeout: Duration::from_secs(stats_timeout_secs),
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| anyhow!("{key} must be a valid integer, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
