// src/config.rs

use std::{env, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    models::settings::AppSettings,
    services::CatalogService,
    sheets::{GoogleSheetsClient, ProductRepository},
};

// O estado compartilhado, acessível em toda a aplicação.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,

    // Singleton em memória: nasce com os padrões, muda pelo PUT /api/settings
    // e se perde no restart. Não há camada de persistência para configurações.
    pub settings: Arc<RwLock<AppSettings>>,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let spreadsheet_id =
            env::var("GOOGLE_SHEETS_ID").expect("GOOGLE_SHEETS_ID deve ser definida");
        // O credenciamento em si é preocupação externa: recebemos o token pronto.
        let access_token = env::var("GOOGLE_SHEETS_ACCESS_TOKEN")
            .expect("GOOGLE_SHEETS_ACCESS_TOKEN deve ser definido");

        let client = GoogleSheetsClient::new(spreadsheet_id, access_token);
        tracing::info!("✅ Cliente do Google Sheets configurado!");

        // --- Monta o gráfico de dependências ---
        let repo = ProductRepository::new(Arc::new(client));
        let catalog_service = CatalogService::new(repo);

        Ok(Self {
            catalog_service,
            settings: Arc::new(RwLock::new(AppSettings::default())),
        })
    }

    // Estado montado sobre um RowStore arbitrário, para os testes de rota.
    #[cfg(test)]
    pub fn with_store(store: Arc<dyn crate::sheets::RowStore>) -> Self {
        Self {
            catalog_service: CatalogService::new(ProductRepository::new(store)),
            settings: Arc::new(RwLock::new(AppSettings::default())),
        }
    }
}
