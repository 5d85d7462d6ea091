use crate::{
    domain::responses::{ApiResponse, DashboardStatsResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynDashboardStatsService = Arc<dyn DashboardStatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait DashboardStatsServiceTrait {
    async fn get_stats(&self) -> Result<ApiResponse<DashboardStatsResponse>, ServiceError>;
}
