//! 日志基础设施

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志，`RUST_LOG` 优先于配置文件中的级别
    pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("luxe_market={}", config.level)));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish()
            .try_init()
    }
}
