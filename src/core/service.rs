//! 核心服务层模块

use crate::app::catalog::model::{Product, ProductId};

/// 只读的商品查询能力
///
/// 购物车一侧只依赖这个 trait，不关心商品数据从哪里来。
pub trait ProductLookup {
    fn lookup_product(&self, id: ProductId) -> Option<&Product>;
}
