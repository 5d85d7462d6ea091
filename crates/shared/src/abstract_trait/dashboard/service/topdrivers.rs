use crate::{
    domain::{
        requests::FindTopDrivers,
        responses::{ApiResponse, DriverActivityRank},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTopDriversService = Arc<dyn TopDriversServiceTrait + Send + Sync>;

#[async_trait]
pub trait TopDriversServiceTrait {
    async fn get_top_drivers(
        &self,
        request: FindTopDrivers,
    ) -> Result<ApiResponse<Vec<DriverActivityRank>>, ServiceError>;
}
