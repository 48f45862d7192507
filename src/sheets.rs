pub mod client;
pub use client::{GoogleSheetsClient, RowStore};
pub mod codec;
pub mod product_repo;
pub use product_repo::ProductRepository;
