// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError, config::AppState, models::dashboard::DashboardStats,
    services::dashboard_service,
};

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Estatísticas agregadas do inventário", body = DashboardStats)
    )
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    // Mesma política fail-open da listagem: dashboard vazio em vez de 500.
    let products = app_state.catalog_service.list_products().await;
    let settings = app_state.settings.read().await.clone();

    let stats = dashboard_service::compute_stats(&products, &settings);

    Ok((StatusCode::OK, Json(stats)))
}
