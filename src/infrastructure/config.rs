//! 店铺配置

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// LuxeMarket 配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 店铺信息
    pub store: StoreSettings,
    /// 价格配置
    pub pricing: PricingConfig,
    /// 模拟网络延迟
    pub mock: MockConfig,
    /// 结账配置
    pub checkout: CheckoutConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// 店铺信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// 店铺名称
    pub name: String,
    /// 货币符号
    pub currency_symbol: String,
}

/// 价格配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// 固定运费
    pub shipping_fee: f64,
    /// 税率 (0.08 即 8%)
    pub tax_rate: f64,
}

/// 模拟延迟配置（毫秒）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// 登录/注册延迟
    pub auth_delay_ms: u64,
    /// 支付处理延迟
    pub checkout_delay_ms: u64,
}

/// 结账配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// 支持配送的国家
    pub countries: Vec<String>,
    /// 默认国家
    pub default_country: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            name: "LuxeMarket".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_fee: 4.99,
            tax_rate: 0.08,
        }
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            auth_delay_ms: 500,
            checkout_delay_ms: 1500,
        }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            countries: vec![
                "United States".to_string(),
                "Canada".to_string(),
                "United Kingdom".to_string(),
                "Australia".to_string(),
            ],
            default_country: "United States".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl MockConfig {
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    /// 无延迟，测试用
    pub fn instant() -> Self {
        Self {
            auth_delay_ms: 0,
            checkout_delay_ms: 0,
        }
    }
}

impl StoreConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: StoreConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.name.is_empty() {
            return Err(ConfigError::Validation("店铺名称不能为空".to_string()));
        }

        if !(self.pricing.shipping_fee >= 0.0 && self.pricing.shipping_fee.is_finite()) {
            return Err(ConfigError::Validation("运费必须是非负数".to_string()));
        }
        if !(0.0..=1.0).contains(&self.pricing.tax_rate) {
            return Err(ConfigError::Validation(format!(
                "税率必须在 0 到 1 之间: {}",
                self.pricing.tax_rate
            )));
        }

        if self.checkout.countries.is_empty() {
            return Err(ConfigError::Validation("至少需要一个配送国家".to_string()));
        }
        if !self.checkout.countries.contains(&self.checkout.default_country) {
            return Err(ConfigError::Validation(format!(
                "默认国家不在配送列表中: {}",
                self.checkout.default_country
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置
pub fn load_config() -> Result<StoreConfig, ConfigError> {
    let config_paths = ["luxe-market.toml", "./config/luxe-market.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            info!("从配置文件加载: {}", path);
            let config = StoreConfig::load_from_file(path)?;
            config.validate()?;
            return Ok(config);
        }
    }

    info!("未找到配置文件，使用默认配置");
    Ok(StoreConfig::default())
}
