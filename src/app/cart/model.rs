//! 购物车数据模型

use serde::{Deserialize, Serialize};

use crate::app::catalog::model::{Product, ProductId};

/// 购物车中的一行：加入时复制的商品展示字段加数量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    /// 始终 >= 1
    pub quantity: u32,
}

impl CartLine {
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
