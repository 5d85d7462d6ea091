use crate::{errors::ServiceError, model::transaction::TransactionModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryService = Arc<dyn TransactionQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryServiceTrait {
    /// Drains every page of the upstream transactions listing into one list,
    /// in page order.
    async fn find_all(&self) -> Result<Vec<TransactionModel>, ServiceError>;
}
