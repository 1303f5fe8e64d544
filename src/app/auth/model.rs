//! 认证数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    /// 模拟登录始终返回的演示用户
    pub fn demo() -> Self {
        Self {
            id: "1".to_string(),
            email: "user@example.com".to_string(),
            name: "John Doe".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// 注册请求
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, message = "姓名不能为空"))]
    pub name: String,
}
