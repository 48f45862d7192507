// src/handlers/settings.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::settings::{AppSettings, UpdateSettingsRequest},
    services::pricing,
};

// GET /api/settings
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Configurações",
    responses(
        (status = 200, description = "Configurações em vigor", body = AppSettings)
    )
)]
pub async fn get_settings(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let settings = app_state.settings.read().await.clone();

    Ok((StatusCode::OK, Json(settings)))
}

// PUT /api/settings
// Singleton em memória: muda aqui, vale até o próximo restart.
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = "Configurações",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Configurações atualizadas", body = AppSettings)
    )
)]
pub async fn update_settings(
    State(app_state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated: AppSettings = {
        let mut settings = app_state.settings.write().await;
        payload.apply_to(&mut settings);
        settings.clone()
    };

    Ok((StatusCode::OK, Json(updated)))
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PricingPreviewParams {
    pub cost_price: Decimal,
}

// GET /api/pricing/preview
// A prévia que o formulário mostra enquanto o usuário digita o custo:
// preço derivado, lucro unitário e margem realizada, já arredondados
// para exibição.
#[utoipa::path(
    get,
    path = "/api/pricing/preview",
    tag = "Configurações",
    params(PricingPreviewParams),
    responses(
        (status = 200, description = "Derivação de preço com a margem vigente")
    )
)]
pub async fn pricing_preview(
    State(app_state): State<AppState>,
    Query(params): Query<PricingPreviewParams>,
) -> Result<impl IntoResponse, AppError> {
    let profit_margin = app_state.settings.read().await.profit_margin;

    let sell_price = pricing::sell_price(params.cost_price, profit_margin);
    let profit = pricing::profit(params.cost_price, sell_price);
    let realized = pricing::realized_margin(params.cost_price, sell_price);

    Ok((
        StatusCode::OK,
        Json(json!({
            "costPrice": pricing::display_round(params.cost_price),
            "sellPrice": pricing::display_round(sell_price),
            "profit": pricing::display_round(profit),
            "profitMargin": pricing::display_round(realized),
        })),
    ))
}
