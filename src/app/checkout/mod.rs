//! 多步骤结账模拟

pub mod model;
pub mod service;

pub use model::{CheckoutStep, Order, OrderSummary, PaymentInfo, ShippingInfo};
pub use service::CheckoutFlow;
