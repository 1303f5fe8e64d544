//! 应用层

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;

pub use session::Session;
