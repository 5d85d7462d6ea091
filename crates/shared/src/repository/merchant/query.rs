use crate::{
    abstract_trait::merchant::repository::query::MerchantQueryRepositoryTrait,
    config::ProfileStoreConfig, errors::RepositoryError, model::merchant::MerchantModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

/// Client for the merchants collection of the profile store.
pub struct MerchantProfileRepository {
    client: reqwest::Client,
    config: ProfileStoreConfig,
}

impl MerchantProfileRepository {
    pub fn new(client: reqwest::Client, config: ProfileStoreConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl MerchantQueryRepositoryTrait for MerchantProfileRepository {
    async fn find_all(&self) -> Result<Vec<MerchantModel>, RepositoryError> {
        let endpoint = format!("{}/merchants", self.config.base_url.trim_end_matches('/'));

        let response = self.client.get(&endpoint).send().await.map_err(|e| {
            error!("❌ Merchant listing request failed: {e}");
            if e.is_timeout() {
                RepositoryError::Timeout
            } else {
                RepositoryError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ Merchant listing returned {status}");
            return Err(RepositoryError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        response.json::<Vec<MerchantModel>>().await.map_err(|e| {
            error!("❌ Failed to decode merchant listing: {e}");
            RepositoryError::Decode(e.to_string())
        })
    }
}
