//! 结账流程
//!
//! 步骤只能按 配送 -> 支付 -> 完成 推进，支付步骤可以返回配送步骤。
//! 支付是模拟的：等待固定延迟后生成随机订单号并清空购物车。
//! 购物车由调用方以 `&mut` 传入，流程本身不持有它。

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use super::model::{CheckoutStep, Order, OrderSummary, PaymentInfo, ShippingInfo};
use crate::app::auth::model::User;
use crate::app::auth::service::AuthService;
use crate::app::cart::service::CartStore;
use crate::core::error::{Result, StoreError};
use crate::infrastructure::config::{CheckoutConfig, PricingConfig};

#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    customer: Option<User>,
    shipping: Option<ShippingInfo>,
    processing: bool,
    order: Option<Order>,
    pricing: PricingConfig,
    checkout: CheckoutConfig,
    delay: Duration,
}

impl CheckoutFlow {
    pub fn new(pricing: PricingConfig, checkout: CheckoutConfig, delay: Duration) -> Self {
        Self {
            step: CheckoutStep::Shipping,
            customer: None,
            shipping: None,
            processing: false,
            order: None,
            pricing,
            checkout,
            delay,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn shipping(&self) -> Option<&ShippingInfo> {
        self.shipping.as_ref()
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn countries(&self) -> &[String] {
        &self.checkout.countries
    }

    /// 预填默认国家的空配送表单
    pub fn blank_shipping(&self) -> ShippingInfo {
        ShippingInfo::with_country(self.checkout.default_country.clone())
    }

    /// 小计、运费、税费与合计
    pub fn summary(&self, cart: &CartStore) -> OrderSummary {
        OrderSummary::compute(cart.total(), self.pricing.shipping_fee, self.pricing.tax_rate)
    }

    /// 打开结账：需要已登录且购物车非空
    pub fn begin(&mut self, auth: &AuthService, cart: &CartStore) -> Result<()> {
        let Some(user) = auth.user() else {
            warn!("未登录用户尝试结账");
            return Err(StoreError::NotAuthenticated);
        };
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        if self.step == CheckoutStep::Complete {
            self.reset();
        }
        // 上一次支付的 future 被丢弃时会留下 processing 标记
        self.processing = false;
        self.customer = Some(user.clone());
        info!(user_id = %user.id, step = self.step.number(), "开始结账");
        Ok(())
    }

    pub fn submit_shipping(&mut self, info: ShippingInfo) -> Result<()> {
        self.expect_started()?;
        self.expect_step(CheckoutStep::Shipping)?;

        let info = info.trimmed();
        info.validate()?;
        if !self.checkout.countries.contains(&info.country) {
            return Err(StoreError::Validation(format!("不支持配送到: {}", info.country)));
        }

        self.shipping = Some(info);
        self.step = CheckoutStep::Payment;
        info!("配送信息已提交");
        Ok(())
    }

    /// 从支付返回配送，已填写的配送信息保留
    pub fn back(&mut self) -> Result<()> {
        self.expect_started()?;
        self.expect_step(CheckoutStep::Payment)?;
        if self.processing {
            return Err(StoreError::AlreadyProcessing);
        }
        self.step = CheckoutStep::Shipping;
        Ok(())
    }

    /// 模拟支付，成功后清空购物车；下单时必须仍处于登录状态
    pub async fn submit_payment(
        &mut self,
        info: PaymentInfo,
        auth: &AuthService,
        cart: &mut CartStore,
    ) -> Result<&Order> {
        if self.processing {
            return Err(StoreError::AlreadyProcessing);
        }
        self.expect_started()?;
        self.expect_step(CheckoutStep::Payment)?;
        let Some(customer) = auth.user().cloned() else {
            warn!("结账过程中用户已退出");
            return Err(StoreError::NotAuthenticated);
        };

        let info = info.trimmed();
        info.validate()?;
        if !info.has_valid_expiry() {
            return Err(StoreError::Validation("有效期格式应为 MM/YY".to_string()));
        }
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        let Some(shipping) = self.shipping.clone() else {
            return Err(StoreError::InvalidStep {
                expected: CheckoutStep::Shipping,
                actual: self.step,
            });
        };

        self.processing = true;
        info!(total = cart.total(), "正在处理支付");
        tokio::time::sleep(self.delay).await;

        let order = Order {
            id: Uuid::new_v4(),
            order_number: random_order_number(),
            customer,
            lines: cart.lines().to_vec(),
            summary: self.summary(cart),
            shipping,
            placed_at: Utc::now(),
        };
        cart.clear_cart();

        self.processing = false;
        self.step = CheckoutStep::Complete;
        info!(order_number = %order.order_number, "订单已完成");
        Ok(&*self.order.insert(order))
    }

    /// 完成后关闭会回到第一步；未完成时保持当前进度
    pub fn close(&mut self) {
        if self.step == CheckoutStep::Complete {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.step = CheckoutStep::Shipping;
        self.customer = None;
        self.shipping = None;
        self.processing = false;
        self.order = None;
    }

    fn expect_started(&self) -> Result<()> {
        if self.customer.is_none() {
            return Err(StoreError::CheckoutNotStarted);
        }
        Ok(())
    }

    fn expect_step(&self, expected: CheckoutStep) -> Result<()> {
        if self.step != expected {
            return Err(StoreError::InvalidStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}

fn random_order_number() -> String {
    let n: u32 = rand::rng().random_range(0..1_000_000);
    format!("{:06}", n)
}
