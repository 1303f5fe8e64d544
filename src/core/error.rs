//! 核心错误处理模块

use crate::app::catalog::model::ProductId;
use crate::app::checkout::model::CheckoutStep;
use crate::infrastructure::config::ConfigError;

/// 核心错误类型
///
/// 购物车操作本身不会失败，这里只覆盖认证、结账、目录加载和配置。
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("输入校验失败: {0}")]
    Validation(String),
    #[error("请先登录再结账")]
    NotAuthenticated,
    #[error("购物车为空，无法结账")]
    EmptyCart,
    #[error("结账尚未开始")]
    CheckoutNotStarted,
    #[error("结账步骤错误: 期望 {expected:?}，当前 {actual:?}")]
    InvalidStep {
        expected: CheckoutStep,
        actual: CheckoutStep,
    },
    #[error("订单正在处理中")]
    AlreadyProcessing,
    #[error("商品不存在: {0}")]
    ProductNotFound(ProductId),
    #[error("商品数据无效: {0}")]
    Catalog(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("日志初始化失败: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl From<validator::ValidationErrors> for StoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} 无效", field))
                })
            })
            .collect();
        // field_errors 是 HashMap，排序后消息才稳定
        messages.sort();
        StoreError::Validation(messages.join(", "))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Catalog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 1, message = "姓名不能为空"))]
        name: String,
    }

    #[test]
    fn test_validation_errors_keep_message() {
        let form = Form { name: String::new() };
        let err: StoreError = form.validate().unwrap_err().into();
        match err {
            StoreError::Validation(msg) => assert_eq!(msg, "姓名不能为空"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(StoreError::ProductNotFound(42).to_string(), "商品不存在: 42");
        assert_eq!(StoreError::EmptyCart.to_string(), "购物车为空，无法结账");
    }
}
