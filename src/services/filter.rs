// src/services/filter.rs
//
// O predicado de inclusão da listagem: busca livre, filtro de categoria e
// filtro de estado de estoque combinados por E lógico. Chega pronto da query
// string de GET /api/products.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::product::Product;

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductFilter {
    // Termo livre; vazio casa com tudo.
    pub search: String,

    // "all" ou igualdade exata com a categoria do produto.
    pub category: String,

    pub stock: StockFilter,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
            stock: StockFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StockFilter {
    #[default]
    All,
    Low,
    Out,
    Available,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_category(product) && self.matches_stock(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        // Nome e categoria sem distinção de caixa; código de barras é numérico,
        // então a busca testa substring sem normalizar.
        product.name.to_lowercase().contains(&needle)
            || product.category.to_lowercase().contains(&needle)
            || product.barcode.contains(&self.search)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category == "all" || product.category == self.category
    }

    fn matches_stock(&self, product: &Product) -> bool {
        match self.stock {
            StockFilter::All => true,
            StockFilter::Low => product.stock <= product.min_stock,
            StockFilter::Out => product.stock == 0,
            StockFilter::Available => product.stock > product.min_stock,
        }
    }
}
