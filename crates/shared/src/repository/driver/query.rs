use crate::{
    abstract_trait::driver::repository::query::DriverQueryRepositoryTrait,
    config::ProfileStoreConfig, errors::RepositoryError, model::driver::DriverModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

/// Client for the drivers collection of the profile store.
pub struct DriverProfileRepository {
    client: reqwest::Client,
    config: ProfileStoreConfig,
}

impl DriverProfileRepository {
    pub fn new(client: reqwest::Client, config: ProfileStoreConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl DriverQueryRepositoryTrait for DriverProfileRepository {
    async fn find_all(&self) -> Result<Vec<DriverModel>, RepositoryError> {
        let endpoint = format!("{}/drivers", self.config.base_url.trim_end_matches('/'));

        let response = self.client.get(&endpoint).send().await.map_err(|e| {
            error!("❌ Driver listing request failed: {e}");
            if e.is_timeout() {
                RepositoryError::Timeout
            } else {
                RepositoryError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ Driver listing returned {status}");
            return Err(RepositoryError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        response.json::<Vec<DriverModel>>().await.map_err(|e| {
            error!("❌ Failed to decode driver listing: {e}");
            RepositoryError::Decode(e.to_string())
        })
    }
}
