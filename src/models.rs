pub mod product;
pub use product::{NewProduct, Product, ProductUpdate, StockStatus};
pub mod settings;
pub use settings::AppSettings;
pub mod dashboard;
pub use dashboard::{CategoryCount, DashboardStats};
