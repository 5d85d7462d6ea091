use crate::{
    abstract_trait::{
        dashboard::service::topdrivers::TopDriversServiceTrait,
        driver::repository::query::DynDriverQueryRepository,
    },
    domain::{
        requests::FindTopDrivers,
        responses::{ApiResponse, DriverActivityRank},
    },
    errors::ServiceError,
    model::driver::DriverModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Leaderboard of drivers by transaction count.
///
/// Sorted descending with a stable sort, so drivers tied on count keep the
/// relative order the profile store returned them in. Each entry is scored
/// against the busiest driver in the sample; when nobody has any
/// transactions every score is zero.
pub fn rank_by_activity(drivers: &[DriverModel], limit: usize) -> Vec<DriverActivityRank> {
    let max_count = drivers
        .iter()
        .map(|driver| driver.transactions_count)
        .max()
        .unwrap_or(0);

    let mut ranked: Vec<&DriverModel> = drivers.iter().collect();
    ranked.sort_by(|a, b| b.transactions_count.cmp(&a.transactions_count));

    ranked
        .into_iter()
        .take(limit)
        .map(|driver| {
            let percentage_activity = if max_count <= 0 {
                0
            } else {
                let ratio = 100.0 * driver.transactions_count as f64 / max_count as f64;
                ratio.round().clamp(0.0, 100.0) as u8
            };

            DriverActivityRank {
                driver_id: driver.id.clone(),
                name: driver.name.clone(),
                transactions_count: driver.transactions_count,
                percentage_activity,
            }
        })
        .collect()
}

pub struct TopDriversService {
    driver_repository: DynDriverQueryRepository,
}

impl TopDriversService {
    pub fn new(driver_repository: DynDriverQueryRepository) -> Self {
        Self { driver_repository }
    }
}

#[async_trait]
impl TopDriversServiceTrait for TopDriversService {
    async fn get_top_drivers(
        &self,
        request: FindTopDrivers,
    ) -> Result<ApiResponse<Vec<DriverActivityRank>>, ServiceError> {
        let drivers = self.driver_repository.find_all().await?;
        let ranking = rank_by_activity(&drivers, request.limit);

        info!(
            "✅ Ranked {} driver(s), returning top {}",
            drivers.len(),
            ranking.len()
        );

        Ok(ApiResponse::success("Top drivers computed", ranking))
    }
}
