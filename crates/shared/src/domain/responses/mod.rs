mod api;
mod dashboard;

pub use self::api::ApiResponse;
pub use self::dashboard::{
    ChangeDelta, ChangeDirection, DashboardStatsResponse, DriverActivityRank,
};
