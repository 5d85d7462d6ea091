use crate::{
    domain::requests::FindTransactionsPage, errors::RepositoryError, model::transaction::TransactionPageModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    async fn find_page(
        &self,
        request: FindTransactionsPage,
    ) -> Result<TransactionPageModel, RepositoryError>;
}
