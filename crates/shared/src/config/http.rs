use anyhow::{Context, Result};
use std::time::Duration;

/// Builds the shared `reqwest` client the repositories run on.
///
/// One client per process: connection pooling lives in reqwest, and the
/// per-request timeout is fixed here so a hung upstream call cannot stall a
/// stats refresh indefinitely. Retries are deliberately absent; a failed
/// fetch surfaces to the caller, who re-triggers manually.
pub struct HttpClientConfig;

impl HttpClientConfig {
    pub fn new_client(timeout: Duration) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("texipay-dashboard")
            .build()
            .context("Failed to build HTTP client")
    }
}
