use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Direction tag attached to every KPI delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Increase,
    Decrease,
}

/// Month-over-month percentage change, pre-formatted for display.
///
/// `magnitude` is either a percentage with one decimal place ("50.0%"),
/// `"0%"` for a zero-to-zero comparison, or the sentinel `"---"` when the
/// previous period was zero and no finite percentage exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChangeDelta {
    pub magnitude: String,
    pub direction: ChangeDirection,
}

/// The aggregate the dashboard renders: four KPI totals with their deltas.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsResponse {
    pub total_drivers: i64,
    pub total_transactions: i64,
    pub total_transaction_amount: f64,
    pub total_merchants: i64,
    pub drivers_change: ChangeDelta,
    pub transactions_change: ChangeDelta,
    pub total_amount_change: ChangeDelta,
    pub merchants_change: ChangeDelta,
}

/// One leaderboard row, scored against the busiest driver in the sample.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DriverActivityRank {
    pub driver_id: String,
    pub name: String,
    pub transactions_count: i64,
    pub percentage_activity: u8,
}
