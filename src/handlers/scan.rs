// src/handlers/scan.rs
//
// A rota de entrada manual de código de barras: o código digitado atravessa a
// mesma capacidade de captura que uma leitura por câmera atravessaria, e o
// resultado é resolvido para o produto correspondente.

use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    common::error::AppError,
    config::AppState,
    models::product::Product,
    scanner::{ManualEntry, ScanSource},
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanPayload {
    #[schema(example = "7501234567890")]
    pub code: String,
}

// POST /api/scan
#[utoipa::path(
    post,
    path = "/api/scan",
    tag = "Scanner",
    request_body = ScanPayload,
    responses(
        (status = 200, description = "Produto com o código lido", body = Product),
        (status = 400, description = "Leitura falhou"),
        (status = 404, description = "Nenhum produto com esse código")
    )
)]
pub async fn scan_barcode(
    State(app_state): State<AppState>,
    Json(payload): Json<ScanPayload>,
) -> Result<impl IntoResponse, AppError> {
    let detected: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let failed: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

    let source = ManualEntry::new(payload.code);
    let on_detected = {
        let detected = detected.clone();
        Box::new(move |code: &str| *detected.lock().unwrap() = Some(code.to_string()))
    };
    let on_error = {
        let failed = failed.clone();
        Box::new(move |reason: &str| *failed.lock().unwrap() = Some(reason.to_string()))
    };

    source.start_scan(on_detected, on_error);

    if let Some(reason) = failed.lock().unwrap().take() {
        return Err(AppError::ScanFailed(reason));
    }

    let code = detected
        .lock()
        .unwrap()
        .take()
        .ok_or_else(|| AppError::ScanFailed("Nenhuma leitura produzida.".to_string()))?;

    let product = app_state
        .catalog_service
        .find_by_barcode(&code)
        .await?
        .ok_or(AppError::ProductNotFound)?;

    Ok((StatusCode::OK, Json(product)))
}
