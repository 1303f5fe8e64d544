//! 核心层：错误类型与对外依赖的抽象接口

pub mod error;
pub mod service;

pub use error::{Result, StoreError};
pub use service::ProductLookup;
