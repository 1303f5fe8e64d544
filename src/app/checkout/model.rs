//! 结账数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::app::auth::model::User;
use crate::app::cart::model::CartLine;

/// 结账步骤：配送信息 -> 支付 -> 完成
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CheckoutStep {
    Shipping = 1,
    Payment = 2,
    Complete = 3,
}

impl CheckoutStep {
    pub fn number(self) -> u8 {
        self as u8
    }
}

// 配送信息，所有字段必填
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    #[validate(length(min = 1, message = "请填写收件人姓名"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "请填写街道地址"))]
    pub address: String,
    #[validate(length(min = 1, message = "请填写城市"))]
    pub city: String,
    #[validate(length(min = 1, message = "请填写州/省"))]
    pub state: String,
    #[validate(length(min = 1, message = "请填写邮政编码"))]
    pub zip_code: String,
    #[validate(length(min = 1, message = "请选择国家"))]
    pub country: String,
    #[validate(length(min = 1, message = "请填写电话号码"))]
    pub phone: String,
}

impl ShippingInfo {
    /// 空表单，国家为默认值
    pub fn with_country(country: impl Into<String>) -> Self {
        Self {
            full_name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: country.into(),
            phone: String::new(),
        }
    }

    pub(crate) fn trimmed(mut self) -> Self {
        for field in [
            &mut self.full_name,
            &mut self.address,
            &mut self.city,
            &mut self.state,
            &mut self.zip_code,
            &mut self.country,
            &mut self.phone,
        ] {
            *field = field.trim().to_string();
        }
        self
    }
}

// 支付信息，只做格式检查，不会真正扣款
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    #[validate(length(min = 1, message = "请填写卡号"))]
    pub card_number: String,
    #[validate(length(min = 1, message = "请填写持卡人姓名"))]
    pub card_name: String,
    /// MM/YY
    #[validate(length(min = 1, message = "请填写有效期"))]
    pub expiry_date: String,
    #[validate(length(min = 1, message = "请填写 CVV"))]
    pub cvv: String,
}

impl PaymentInfo {
    pub(crate) fn trimmed(mut self) -> Self {
        for field in [
            &mut self.card_number,
            &mut self.card_name,
            &mut self.expiry_date,
            &mut self.cvv,
        ] {
            *field = field.trim().to_string();
        }
        self
    }

    /// 有效期必须是 MM/YY，月份 01-12
    pub(crate) fn has_valid_expiry(&self) -> bool {
        let Some((month, year)) = self.expiry_date.split_once('/') else {
            return false;
        };
        let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
        if !digits(month, 2) || !digits(year, 2) {
            return false;
        }
        matches!(month.parse::<u8>(), Ok(1..=12))
    }
}

/// 订单金额明细
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderSummary {
    pub fn compute(subtotal: f64, shipping: f64, tax_rate: f64) -> Self {
        let tax = subtotal * tax_rate;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    /// 六位数字，左侧补零
    pub order_number: String,
    pub customer: User,
    pub lines: Vec<CartLine>,
    pub summary: OrderSummary,
    pub shipping: ShippingInfo,
    pub placed_at: DateTime<Utc>,
}
