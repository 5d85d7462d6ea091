use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use shared::{
    abstract_trait::dashboard::service::{
        stats::DynDashboardStatsService, topdrivers::DynTopDriversService,
    },
    domain::{
        requests::FindTopDrivers,
        responses::{ApiResponse, DashboardStatsResponse, DriverActivityRank},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Aggregated KPIs with month-over-month deltas", body = ApiResponse<DashboardStatsResponse>),
        (status = 502, description = "An upstream fetch failed"),
        (status = 504, description = "The computation exceeded its deadline")
    )
)]
pub async fn get_dashboard_stats(
    Extension(service): Extension<DynDashboardStatsService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_stats().await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/top-drivers",
    tag = "Dashboard",
    params(FindTopDrivers),
    responses(
        (status = 200, description = "Drivers ranked by transaction activity", body = ApiResponse<Vec<DriverActivityRank>>),
        (status = 502, description = "The profile store fetch failed")
    )
)]
pub async fn get_top_drivers(
    Extension(service): Extension<DynTopDriversService>,
    Query(params): Query<FindTopDrivers>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_top_drivers(params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/healthchecker",
    tag = "Dashboard",
    responses((status = 200, description = "Service is up"))
)]
pub async fn healthchecker() -> impl IntoResponse {
    Json(json!({
        "status": "success",
        "message": "Texipay dashboard service is running",
    }))
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/dashboard/stats", get(get_dashboard_stats))
        .route("/api/dashboard/top-drivers", get(get_top_drivers))
        .route("/api/healthchecker", get(healthchecker))
        .layer(Extension(app_state.di_container.dashboard_stats.clone()))
        .layer(Extension(app_state.di_container.top_drivers.clone()))
}
