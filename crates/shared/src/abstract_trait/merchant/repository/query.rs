use crate::{errors::RepositoryError, model::merchant::MerchantModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMerchantQueryRepository = Arc<dyn MerchantQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MerchantQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<MerchantModel>, RepositoryError>;
}
