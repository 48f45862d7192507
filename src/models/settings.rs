// src/models/settings.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Configuração da aplicação. Vive apenas na memória do processo: nasce com os
// padrões no boot, muda só pelo PUT /api/settings e se perde no restart.
// Não há camada de persistência para isso: a planilha guarda só produtos.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    // Percentual aplicado sobre o custo para derivar o preço de venda.
    #[schema(example = 30)]
    pub profit_margin: Decimal,

    // Símbolo exibido junto aos valores monetários.
    #[schema(example = "$")]
    pub currency: String,

    // Liga/desliga o alerta de estoque baixo no dashboard.
    pub low_stock_alert: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            profit_margin: Decimal::from(30),
            currency: "$".to_string(),
            low_stock_alert: true,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[schema(example = 25)]
    pub profit_margin: Option<Decimal>,

    #[schema(example = "€")]
    pub currency: Option<String>,

    pub low_stock_alert: Option<bool>,
}

impl UpdateSettingsRequest {
    pub fn apply_to(&self, settings: &mut AppSettings) {
        if let Some(margin) = self.profit_margin {
            settings.profit_margin = margin;
        }
        if let Some(currency) = &self.currency {
            settings.currency = currency.clone();
        }
        if let Some(alert) = self.low_stock_alert {
            settings.low_stock_alert = alert;
        }
    }
}
