//! # LuxeMarket 店铺核心
//!
//! 浏览器商城演示的内存状态部分，包括：
//! - 商品目录：按分类、价格筛选并排序
//! - 购物车：每个商品一行，总价实时计算
//! - 模拟登录/注册
//! - 多步骤结账模拟
//!
//! 所有状态只存在于一个 [`Session`] 中，没有持久化，也没有网络请求。

pub mod app;
pub mod core;
pub mod infrastructure;
pub mod utils;

pub use app::auth::{AuthService, LoginRequest, RegisterRequest, User};
pub use app::cart::{CartLine, CartStore};
pub use app::catalog::{CatalogService, FilterOptions, Product, ProductId, Rating, SortOption};
pub use app::checkout::{CheckoutFlow, CheckoutStep, Order, OrderSummary, PaymentInfo, ShippingInfo};
pub use app::Session;
pub use crate::core::{ProductLookup, Result, StoreError};
pub use infrastructure::{ConfigError, Logger, StoreConfig};
