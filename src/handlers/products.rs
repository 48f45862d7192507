// src/handlers/products.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    models::product::{Product, ProductUpdate},
    services::filter::ProductFilter,
};

// ---
// Validação Customizada
// ---
fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

fn default_min_stock() -> i64 {
    5
}

// ---
// Payload: CreateProduct
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[serde(default)]
    pub barcode: String,

    #[serde(default)]
    pub category: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub cost_price: Decimal,

    // Opcional: quando ausente, o servidor deriva da margem vigente.
    #[validate(custom(function = "validate_not_negative"))]
    pub sell_price: Option<Decimal>,

    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    #[serde(default)]
    pub stock: i64,

    #[validate(range(min = 0, message = "O estoque mínimo não pode ser negativo."))]
    #[serde(default = "default_min_stock")]
    pub min_stock: i64,
}

// ---
// Handler: list_products
// ---
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Produtos",
    params(ProductFilter),
    responses(
        (status = 200, description = "Produtos do inventário, já filtrados", body = [Product])
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<impl IntoResponse, AppError> {
    // Fail-open: falha remota vira lista vazia (o service loga o aviso).
    let products = app_state.catalog_service.list_products().await;

    let filtered: Vec<Product> = products
        .into_iter()
        .filter(|product| filter.matches(product))
        .collect();

    Ok((StatusCode::OK, Json(filtered)))
}

// ---
// Handler: create_product
// ---
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Produtos",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 400, description = "Payload inválido"),
        (status = 500, description = "Falha ao gravar na planilha")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Margem lida uma vez e passada explicitamente: o preço derivado depende
    // só dos argumentos da chamada.
    let profit_margin = app_state.settings.read().await.profit_margin;

    let product = app_state
        .catalog_service
        .create_product(
            &payload.name,
            &payload.barcode,
            &payload.category,
            payload.cost_price,
            payload.sell_price,
            payload.stock,
            payload.min_stock,
            profit_margin,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

// ---
// Payload: UpdateProduct (todos os campos opcionais)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,

    pub barcode: Option<String>,
    pub category: Option<String>,

    #[validate(custom(function = "validate_not_negative"))]
    pub cost_price: Option<Decimal>,

    #[validate(custom(function = "validate_not_negative"))]
    pub sell_price: Option<Decimal>,

    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    pub stock: Option<i64>,

    #[validate(range(min = 0, message = "O estoque mínimo não pode ser negativo."))]
    pub min_stock: Option<i64>,
}

impl From<UpdateProductPayload> for ProductUpdate {
    fn from(payload: UpdateProductPayload) -> Self {
        ProductUpdate {
            name: payload.name,
            barcode: payload.barcode,
            category: payload.category,
            cost_price: payload.cost_price,
            sell_price: payload.sell_price,
            stock: payload.stock,
            min_stock: payload.min_stock,
        }
    }
}

// ---
// Handler: update_product
// ---
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Produtos",
    params(("id" = String, Path, description = "ID do produto")),
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Atualizado"),
        (status = 404, description = "Produto não encontrado"),
        (status = 500, description = "Falha ao gravar na planilha")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let profit_margin = app_state.settings.read().await.profit_margin;

    app_state
        .catalog_service
        .update_product(&id, payload.into(), profit_margin)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}

// ---
// Handler: delete_product
// ---
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Produtos",
    params(("id" = String, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Removido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.delete_product(&id).await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}

// ---
// Handler: init_sheet: grava a linha de cabeçalho na planilha nova
// ---
#[utoipa::path(
    post,
    path = "/api/sheet/init",
    tag = "Planilha",
    responses(
        (status = 200, description = "Cabeçalho gravado"),
        (status = 500, description = "Falha ao gravar na planilha")
    )
)]
pub async fn init_sheet(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    app_state.catalog_service.init_sheet().await?;

    tracing::info!("✅ Planilha inicializada com a linha de cabeçalho");
    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}
