// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::product::Product;

// As estatísticas agregadas que alimentam os cards do dashboard.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,

    // Capital parado em estoque: soma de custo x quantidade.
    pub total_value: Decimal,

    // Receita esperada se tudo for vendido ao preço atual.
    pub expected_revenue: Decimal,

    pub potential_profit: Decimal,

    // Média de estoque por produto; 0 quando a coleção está vazia.
    pub average_stock: f64,

    // Subconjunto com estoque no mínimo ou abaixo (inclui os zerados).
    pub low_stock_products: Vec<Product>,

    pub out_of_stock_products: Vec<Product>,

    // Histograma completo de categorias, na ordem em que aparecem na planilha.
    pub categories: Vec<CategoryCount>,

    // As 3 maiores por contagem; empates mantêm a ordem de chegada.
    pub top_categories: Vec<CategoryCount>,

    // Carregados das configurações para o frontend não depender de estado ambiente.
    pub currency: String,
    pub low_stock_alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}
