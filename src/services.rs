pub mod catalog_service;
pub use catalog_service::CatalogService;
pub mod dashboard_service;
pub mod filter;
pub mod pricing;
