//! 基础设施层：配置与日志

pub mod config;
pub mod logger;

pub use config::{ConfigError, StoreConfig};
pub use logger::Logger;
