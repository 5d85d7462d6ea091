use anyhow::{Context, Result};
use shared::{
    abstract_trait::{
        dashboard::service::{
            stats::DynDashboardStatsService, topdrivers::DynTopDriversService,
        },
        driver::repository::query::DynDriverQueryRepository,
        merchant::repository::query::DynMerchantQueryRepository,
        transaction::{
            repository::query::DynTransactionQueryRepository,
            service::query::DynTransactionQueryService,
        },
    },
    config::{Config, HttpClientConfig},
    repository::{
        driver::query::DriverProfileRepository, merchant::query::MerchantProfileRepository,
        transaction::query::NearpayTransactionRepository,
    },
    service::{
        dashboard::{stats::DashboardStatsService, topdrivers::TopDriversService},
        transaction::query::TransactionQueryService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub dashboard_stats: DynDashboardStatsService,
    pub top_drivers: DynTopDriversService,
}

impl DependenciesInject {
    pub fn new(config: &Config) -> Result<Self> {
        let client = HttpClientConfig::new_client(config.stats.fetch_timeout)
            .context("Failed to build upstream HTTP client")?;

        let transaction_repo = Arc::new(NearpayTransactionRepository::new(
            client.clone(),
            config.nearpay.clone(),
        )) as DynTransactionQueryRepository;
        let transaction_query = Arc::new(TransactionQueryService::new(
            transaction_repo,
            &config.stats,
        )) as DynTransactionQueryService;

        let merchant_repo = Arc::new(MerchantProfileRepository::new(
            client.clone(),
            config.profile_store.clone(),
        )) as DynMerchantQueryRepository;
        let driver_repo = Arc::new(DriverProfileRepository::new(
            client,
            config.profile_store.clone(),
        )) as DynDriverQueryRepository;

        let dashboard_stats = Arc::new(DashboardStatsService::new(
            transaction_query,
            merchant_repo,
            driver_repo.clone(),
            config.stats.stats_timeout,
        )) as DynDashboardStatsService;

        let top_drivers =
            Arc::new(TopDriversService::new(driver_repo)) as DynTopDriversService;

        Ok(Self {
            dashboard_stats,
            top_drivers,
        })
    }
}
