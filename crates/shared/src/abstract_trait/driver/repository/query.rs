use crate::{errors::RepositoryError, model::driver::DriverModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDriverQueryRepository = Arc<dyn DriverQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait DriverQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<DriverModel>, RepositoryError>;
}
