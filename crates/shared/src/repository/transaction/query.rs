use crate::{
    abstract_trait::transaction::repository::query::TransactionQueryRepositoryTrait,
    config::NearpayConfig,
    domain::requests::FindTransactionsPage,
    errors::RepositoryError,
    model::transaction::TransactionPageModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

/// Client for the Nearpay transactions listing.
pub struct NearpayTransactionRepository {
    client: reqwest::Client,
    config: NearpayConfig,
}

impl NearpayTransactionRepository {
    pub fn new(client: reqwest::Client, config: NearpayConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/transactions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for NearpayTransactionRepository {
    async fn find_page(
        &self,
        request: FindTransactionsPage,
    ) -> Result<TransactionPageModel, RepositoryError> {
        let endpoint = self.endpoint();

        let response = self
            .client
            .get(&endpoint)
            .header("api-key", &self.config.api_key)
            .query(&[("page", request.page), ("limit", request.limit)])
            .send()
            .await
            .map_err(|e| {
                error!("❌ Nearpay request failed for page {}: {e}", request.page);
                if e.is_timeout() {
                    RepositoryError::Timeout
                } else {
                    RepositoryError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("❌ Nearpay returned {status} for page {}", request.page);
            return Err(RepositoryError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        response.json::<TransactionPageModel>().await.map_err(|e| {
            error!("❌ Failed to decode Nearpay page {}: {e}", request.page);
            RepositoryError::Decode(e.to_string())
        })
    }
}
