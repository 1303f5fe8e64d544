//! 商品目录：只读的商品数据、筛选与排序

pub mod model;
pub mod service;

pub use model::{FilterOptions, Product, ProductId, Rating, SortOption};
pub use service::CatalogService;
