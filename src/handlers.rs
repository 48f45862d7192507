pub mod dashboard;
pub mod products;
pub mod scan;
pub mod settings;
