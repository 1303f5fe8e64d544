//! 购物车状态
//!
//! 每个商品 ID 最多一行，行按首次加入的顺序排列。总价从当前行实时计算，
//! 不单独存储，因此任何时刻都与行数据一致。所有操作都不会失败：
//! 不存在的 ID 直接忽略，数量 <= 0 等同于删除。

use tracing::debug;

use super::model::CartLine;
use crate::app::catalog::model::{Product, ProductId};

#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已有该商品则数量加一，否则在末尾追加数量为 1 的新行
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.line_mut(product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                debug!(product_id = product.id, quantity = line.quantity, "cart line incremented");
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                debug!(product_id = product.id, "cart line added");
            }
        }
    }

    /// 等同于连续加入 `quantity` 次，商品详情页的数量选择器使用
    pub fn add_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.line_mut(product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                debug!(product_id = product.id, quantity = line.quantity, "cart line incremented");
            }
            None => {
                let mut line = CartLine::from_product(product);
                line.quantity = quantity;
                self.lines.push(line);
                debug!(product_id = product.id, quantity, "cart line added");
            }
        }
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        if self.lines.len() != before {
            debug!(product_id, "cart line removed");
        }
    }

    /// 直接设置数量（不是增量）；`new_quantity <= 0` 时删除该行
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
            debug!(product_id, quantity, "cart quantity updated");
        }
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
        debug!("cart cleared");
    }

    /// 按价格 × 数量求和，不做舍入
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// 所有行数量之和（头部角标显示的数字）
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::model::Rating;

    fn product(id: ProductId, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price,
            description: String::new(),
            category: "test".to_string(),
            image: format!("https://example.com/{}.jpg", id),
            rating: Rating { rate: 4.0, count: 10 },
        }
    }

    fn expected_total(cart: &CartStore) -> f64 {
        cart.lines()
            .iter()
            .map(|l| l.price * f64::from(l.quantity))
            .sum()
    }

    #[test]
    fn test_add_same_product_twice() {
        let mut cart = CartStore::new();
        let p = product(1, 10.0);
        cart.add_to_cart(&p);
        assert_eq!(cart.lines().len(), 1);
        cart.add_to_cart(&p);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_two_products_total() {
        let mut cart = CartStore::new();
        let a = product(1, 10.00);
        let b = product(2, 5.00);
        cart.add_to_cart(&a);
        cart.add_to_cart(&b);
        cart.add_to_cart(&b);

        assert_eq!(cart.total(), 20.00);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.line(1).unwrap().quantity, 1);
        assert_eq!(cart.line(2).unwrap().quantity, 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut cart = CartStore::new();
        for id in [3, 1, 2] {
            cart.add_to_cart(&product(id, 1.0));
        }
        cart.add_to_cart(&product(1, 1.0));
        let order: Vec<_> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_line_copies_fields_at_insertion() {
        let mut cart = CartStore::new();
        let mut p = product(1, 10.0);
        cart.add_to_cart(&p);
        p.price = 99.0;
        p.name = "Renamed".to_string();
        cart.add_to_cart(&p);

        let line = cart.line(1).unwrap();
        assert_eq!(line.price, 10.0);
        assert_eq!(line.name, "Product 1");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        let mut cart = CartStore::new();
        cart.add_to_cart(&product(1, 1.0));
        cart.add_to_cart(&product(2, 1.0));

        cart.update_quantity(1, 0);
        assert!(cart.line(1).is_none());

        cart.update_quantity(2, -1);
        assert!(cart.line(2).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut cart = CartStore::new();
        let p = product(1, 2.5);
        cart.add_quantity(&p, 3);
        cart.update_quantity(1, 7);
        assert_eq!(cart.line(1).unwrap().quantity, 7);
        assert_eq!(cart.total(), 17.5);

        // 不存在的行不做任何事
        cart.update_quantity(42, 5);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut cart = CartStore::new();
        let a = product(1, 10.0);
        cart.add_to_cart(&a);
        cart.remove_from_cart(a.id);
        cart.remove_from_cart(a.id);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = CartStore::new();
        cart.add_quantity(&product(1, 19.99), 2);
        cart.add_to_cart(&product(2, 0.01));
        cart.clear_cart();
        assert!(cart.lines().is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_quantity_matches_repeated_adds() {
        let p = product(1, 1.5);
        let mut bulk = CartStore::new();
        let mut single = CartStore::new();
        bulk.add_quantity(&p, 3);
        bulk.add_quantity(&p, 4);
        for _ in 0..7 {
            single.add_to_cart(&p);
        }
        assert_eq!(bulk.lines(), single.lines());
        assert_eq!(bulk.total(), single.total());
    }

    #[test]
    fn test_add_quantity_large_is_constant_time() {
        let mut cart = CartStore::new();
        let p = product(1, 0.5);
        cart.add_quantity(&p, u32::MAX);
        assert_eq!(cart.line(1).unwrap().quantity, u32::MAX);
        cart.add_quantity(&p, u32::MAX);
        assert_eq!(cart.line(1).unwrap().quantity, u32::MAX);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_add_quantity_zero() {
        let mut cart = CartStore::new();
        cart.add_quantity(&product(1, 1.0), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_invariants_over_operation_sequence() {
        let products: Vec<Product> = (1..=5)
            .map(|id| product(id, f64::from(id) * 3.33))
            .collect();
        let mut cart = CartStore::new();

        // 确定性的伪随机操作序列
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let p = &products[(seed % 5) as usize];
            match (seed >> 8) % 5 {
                0 | 1 => cart.add_to_cart(p),
                2 => cart.remove_from_cart(p.id),
                3 => cart.update_quantity(p.id, ((seed >> 16) % 7) as i64 - 2),
                _ => {
                    if (seed >> 24) % 10 == 0 {
                        cart.clear_cart();
                    }
                }
            }

            let mut ids: Vec<_> = cart.lines().iter().map(|l| l.product_id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), cart.lines().len());
            assert!(cart.lines().iter().all(|l| l.quantity >= 1));
            assert_eq!(cart.total(), expected_total(&cart));
        }
    }
}
