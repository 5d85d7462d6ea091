use crate::{
    abstract_trait::{
        dashboard::service::stats::DashboardStatsServiceTrait,
        driver::repository::query::DynDriverQueryRepository,
        merchant::repository::query::DynMerchantQueryRepository,
        transaction::service::query::DynTransactionQueryService,
    },
    domain::responses::{ApiResponse, DashboardStatsResponse},
    errors::ServiceError,
    model::{status::TransactionStatus, transaction::TransactionModel},
    utils::{
        compute_change, created_before, current_month_window, filter_by_window,
        previous_month_window,
    },
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::timeout;
use tracing::{error, info};

/// Sums captured amounts over any iterable of transactions.
///
/// Only `Approved`/`Accepted` statuses contribute; everything else, and any
/// record missing an amount, contributes zero. Raw transaction counts are
/// taken elsewhere and include every status.
pub fn sum_accepted<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a TransactionModel>,
{
    records
        .into_iter()
        .filter(|record| TransactionStatus::from_raw(&record.status).is_accepted())
        .map(|record| record.amount.unwrap_or(0.0))
        .sum()
}

/// One dashboard refresh: drain all transaction pages, list both profile
/// collections, bucket by calendar month, and derive the four KPIs with
/// their month-over-month deltas.
///
/// Stateless across calls; every refresh is a fresh computation over freshly
/// fetched data. Any upstream failure aborts the whole refresh — there is no
/// partial-result mode.
pub struct DashboardStatsService {
    transaction_query: DynTransactionQueryService,
    merchant_repository: DynMerchantQueryRepository,
    driver_repository: DynDriverQueryRepository,
    stats_timeout: Duration,
}

impl DashboardStatsService {
    pub fn new(
        transaction_query: DynTransactionQueryService,
        merchant_repository: DynMerchantQueryRepository,
        driver_repository: DynDriverQueryRepository,
        stats_timeout: Duration,
    ) -> Self {
        Self {
            transaction_query,
            merchant_repository,
            driver_repository,
            stats_timeout,
        }
    }

    /// The aggregation itself, against a caller-supplied `now`.
    ///
    /// `now` is captured exactly once per refresh so both windows and both
    /// cumulative cutoffs agree on what "this month" means; no function
    /// further down reads the clock.
    pub async fn compute_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<DashboardStatsResponse, ServiceError> {
        let transactions = self.transaction_query.find_all().await?;
        let merchants = self.merchant_repository.find_all().await?;
        let drivers = self.driver_repository.find_all().await?;

        let current = current_month_window(now);
        let previous = previous_month_window(now);

        let tx_current = filter_by_window(&transactions, &current);
        let tx_previous = filter_by_window(&transactions, &previous);

        let transactions_change =
            compute_change(tx_current.len() as f64, tx_previous.len() as f64);
        let total_amount_change = compute_change(
            sum_accepted(tx_current.iter().copied()),
            sum_accepted(tx_previous.iter().copied()),
        );

        // Profiles compare this month's registrations against the cumulative
        // base that existed when the month began, not against a previous-month
        // bucket. Transactions above use true monthly buckets.
        let drivers_change = compute_change(
            filter_by_window(&drivers, &current).len() as f64,
            created_before(&drivers, current.start) as f64,
        );
        let merchants_change = compute_change(
            filter_by_window(&merchants, &current).len() as f64,
            created_before(&merchants, current.start) as f64,
        );

        info!(
            "✅ Dashboard stats computed: {} transaction(s), {} merchant(s), {} driver(s)",
            transactions.len(),
            merchants.len(),
            drivers.len()
        );

        Ok(DashboardStatsResponse {
            total_drivers: drivers.len() as i64,
            total_transactions: transactions.len() as i64,
            total_transaction_amount: sum_accepted(&transactions),
            total_merchants: merchants.len() as i64,
            drivers_change,
            transactions_change,
            total_amount_change,
            merchants_change,
        })
    }
}

#[async_trait]
impl DashboardStatsServiceTrait for DashboardStatsService {
    async fn get_stats(&self) -> Result<ApiResponse<DashboardStatsResponse>, ServiceError> {
        let now = Utc::now();

        let stats = match timeout(self.stats_timeout, self.compute_at(now)).await {
            Ok(result) => result?,
            Err(_) => {
                error!(
                    "❌ Dashboard stats computation exceeded {}s deadline",
                    self.stats_timeout.as_secs()
                );
                return Err(ServiceError::Timeout);
            }
        };

        Ok(ApiResponse::success("Dashboard stats computed", stats))
    }
}
