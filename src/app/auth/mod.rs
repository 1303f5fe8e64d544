//! 模拟登录、注册

pub mod model;
pub mod service;

pub use model::{LoginRequest, RegisterRequest, User};
pub use service::AuthService;
