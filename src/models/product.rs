// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// O produto é a única entidade persistida. Uma linha da planilha <-> um Product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub barcode: String,
    pub category: String,
    pub cost_price: Decimal,

    // Derivado de cost_price + margem vigente no momento do salvamento.
    // Não é recalculado retroativamente quando a margem global muda.
    pub sell_price: Decimal,

    pub stock: i64,
    pub min_stock: i64,

    // Definido uma única vez na criação, imutável depois.
    pub date_added: DateTime<Utc>,

    // Renovado a cada mutação.
    pub last_updated: DateTime<Utc>,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock, self.min_stock)
    }
}

// --- Classificador de Estoque ---
// Três estados, avaliados nesta ordem de precedência: zerado vence sempre,
// e estoque exatamente no mínimo conta como baixo (inclusivo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    Available,
}

impl StockStatus {
    pub fn classify(stock: i64, min_stock: i64) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::Available
        }
    }
}

// Dados de um produto ainda sem identidade: o repositório atribui id e datas.
// O sell_price chega aqui já derivado; o repositório não calcula preço.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub barcode: String,
    pub category: String,
    pub cost_price: Decimal,
    pub sell_price: Decimal,
    pub stock: i64,
    pub min_stock: i64,
}

// Atualização parcial: só os campos presentes sobrescrevem o registro atual.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub barcode: Option<String>,
    pub category: Option<String>,
    pub cost_price: Option<Decimal>,
    pub sell_price: Option<Decimal>,
    pub stock: Option<i64>,
    pub min_stock: Option<i64>,
}

impl ProductUpdate {
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(barcode) = &self.barcode {
            product.barcode = barcode.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(cost_price) = self.cost_price {
            product.cost_price = cost_price;
        }
        if let Some(sell_price) = self.sell_price {
            product.sell_price = sell_price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(min_stock) = self.min_stock {
            product.min_stock = min_stock;
        }
    }
}
