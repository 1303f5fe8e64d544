//! 模拟认证服务
//!
//! 没有后端，登录和注册只是等待一段固定延迟后设置当前用户。
//! 每次调用都是一个普通的 future，只完成一次，不重试也不能取消。

use std::time::Duration;

use rand::Rng;
use tracing::{info, warn};
use validator::Validate;

use super::model::{LoginRequest, RegisterRequest, User};
use crate::core::error::Result;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

#[derive(Debug, Clone)]
pub struct AuthService {
    user: Option<User>,
    delay: Duration,
}

impl AuthService {
    pub fn new(delay: Duration) -> Self {
        Self { user: None, delay }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// 不校验凭据，延迟后以演示用户登录
    pub async fn login(&mut self, request: LoginRequest) -> &User {
        tokio::time::sleep(self.delay).await;
        info!(email = %request.email, "用户登录");
        &*self.user.insert(User::demo())
    }

    pub async fn register(&mut self, request: RegisterRequest) -> Result<&User> {
        if let Err(e) = request.validate() {
            warn!(email = %request.email, "注册被拒绝");
            return Err(e.into());
        }

        tokio::time::sleep(self.delay).await;
        let user = User {
            id: random_user_id(),
            email: request.email,
            name: request.name,
        };
        info!(user_id = %user.id, "新用户注册");
        Ok(&*self.user.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "用户退出");
        }
    }
}

fn random_user_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
