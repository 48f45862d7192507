// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Produtos ---
        handlers::products::list_products,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::products::init_sheet,

        // --- Dashboard ---
        handlers::dashboard::get_dashboard,

        // --- Configurações ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,
        handlers::settings::pricing_preview,

        // --- Scanner ---
        handlers::scan::scan_barcode,
    ),
    components(
        schemas(
            // --- Produtos ---
            models::product::Product,
            handlers::products::CreateProductPayload,
            handlers::products::UpdateProductPayload,

            // --- Dashboard ---
            models::dashboard::DashboardStats,
            models::dashboard::CategoryCount,

            // --- Configurações ---
            models::settings::AppSettings,
            models::settings::UpdateSettingsRequest,

            // --- Scanner ---
            handlers::scan::ScanPayload,
        )
    ),
    tags(
        (name = "Produtos", description = "Inventário persistido na planilha"),
        (name = "Dashboard", description = "Estatísticas agregadas"),
        (name = "Configurações", description = "Margem, moeda e alertas (em memória)"),
        (name = "Scanner", description = "Entrada manual de código de barras"),
        (name = "Planilha", description = "Manutenção da planilha remota")
    ),
    info(
        title = "LibreStock API",
        description = "Gestão de inventário de livraria sobre uma planilha remota.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
