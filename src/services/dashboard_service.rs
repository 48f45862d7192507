// src/services/dashboard_service.rs
//
// Dobra a coleção de produtos nas estatísticas do dashboard. Função pura:
// recebe os produtos e as configurações como argumentos e não lê estado
// ambiente nenhum.

use rust_decimal::Decimal;

use crate::models::{
    dashboard::{CategoryCount, DashboardStats},
    product::{Product, StockStatus},
    settings::AppSettings,
};

pub fn compute_stats(products: &[Product], settings: &AppSettings) -> DashboardStats {
    let mut total_value = Decimal::ZERO;
    let mut expected_revenue = Decimal::ZERO;
    let mut stock_sum: i64 = 0;
    let mut categories: Vec<CategoryCount> = Vec::new();
    let mut low_stock_products = Vec::new();
    let mut out_of_stock_products = Vec::new();

    for product in products {
        let quantity = Decimal::from(product.stock);
        total_value += product.cost_price * quantity;
        expected_revenue += product.sell_price * quantity;
        stock_sum += product.stock;

        // Histograma na ordem de chegada; busca linear basta para o volume.
        match categories
            .iter_mut()
            .find(|c| c.category == product.category)
        {
            Some(entry) => entry.count += 1,
            None => categories.push(CategoryCount {
                category: product.category.clone(),
                count: 1,
            }),
        }

        match product.stock_status() {
            StockStatus::OutOfStock => {
                // Zerado também conta como "precisa de reposição".
                low_stock_products.push(product.clone());
                out_of_stock_products.push(product.clone());
            }
            StockStatus::LowStock => low_stock_products.push(product.clone()),
            StockStatus::Available => {}
        }
    }

    // sort estável: empates preservam a ordem de chegada.
    let mut top_categories = categories.clone();
    top_categories.sort_by(|a, b| b.count.cmp(&a.count));
    top_categories.truncate(3);

    let average_stock = if products.is_empty() {
        0.0
    } else {
        stock_sum as f64 / products.len() as f64
    };

    DashboardStats {
        total_products: products.len(),
        total_value,
        expected_revenue,
        potential_profit: expected_revenue - total_value,
        average_stock,
        low_stock_products,
        out_of_stock_products,
        categories,
        top_categories,
        currency: settings.currency.clone(),
        low_stock_alert: settings.low_stock_alert,
    }
}
