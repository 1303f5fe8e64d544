//! 商品目录服务

use std::collections::HashSet;

use tracing::{debug, info};

use super::model::{FilterOptions, Product, ProductId, SortOption, ALL_CATEGORIES};
use crate::core::error::{Result, StoreError};
use crate::core::service::ProductLookup;

/// 内置的演示商品数据
const DEFAULT_PRODUCTS: &str = include_str!("../../../data/products.json");

/// 相关商品、推荐商品的默认数量
pub const SHOWCASE_LIMIT: usize = 4;

#[derive(Debug, Clone)]
pub struct CatalogService {
    products: Vec<Product>,
}

impl CatalogService {
    /// 加载内置商品数据
    pub fn new() -> Result<Self> {
        Self::from_json(DEFAULT_PRODUCTS)
    }

    /// 从 JSON 数组加载商品
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(StoreError::Catalog(format!("商品 ID 重复: {}", product.id)));
            }
            if !(product.price >= 0.0 && product.price.is_finite()) {
                return Err(StoreError::Catalog(format!(
                    "商品 {} 价格无效: {}",
                    product.id, product.price
                )));
            }
            if !(0.0..=5.0).contains(&product.rating.rate) {
                return Err(StoreError::Catalog(format!(
                    "商品 {} 评分超出范围: {}",
                    product.id, product.rating.rate
                )));
            }
        }

        info!("✅ 已加载 {} 个商品", products.len());
        Ok(Self { products })
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        if category == ALL_CATEGORIES {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// `all` 在前，其余分类按首次出现的顺序
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.iter().any(|c| c == &product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// 先筛选再排序，排序是稳定的
    pub fn browse(&self, filters: &FilterOptions, sort: SortOption) -> Vec<&Product> {
        let mut result: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filters.matches(p))
            .collect();

        match sort {
            SortOption::PriceLowHigh => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOption::PriceHighLow => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOption::Rating => result.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
            // 商品没有上架时间字段，ID 按上架顺序分配
            SortOption::Newest => result.sort_by(|a, b| b.id.cmp(&a.id)),
        }

        debug!(?filters, ?sort, count = result.len(), "browse");
        result
    }

    /// 同分类的其它商品
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    pub fn featured(&self, category: Option<&str>, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .take(limit)
            .collect()
    }
}

impl ProductLookup for CatalogService {
    fn lookup_product(&self, id: ProductId) -> Option<&Product> {
        self.get_product(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_catalog() {
        let catalog = CatalogService::new().unwrap();
        assert_eq!(catalog.all().len(), 8);
        assert_eq!(catalog.get_product(2).unwrap().name, "Wireless Noise-Cancelling Headphones");
        assert!(catalog.get_product(99).is_none());
        assert!(catalog.lookup_product(7).is_some());
    }

    #[test]
    fn test_categories() {
        let catalog = CatalogService::new().unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["all", "clothing", "electronics", "accessories", "beauty", "home"]
        );
        assert_eq!(catalog.by_category("all").len(), 8);
        assert_eq!(ids(&catalog.by_category("accessories")), vec![3, 5, 8]);
        assert!(catalog.by_category("toys").is_empty());
    }

    #[test]
    fn test_browse_sorting() {
        let catalog = CatalogService::new().unwrap();
        let filters = FilterOptions::default();

        let low_high = catalog.browse(&filters, SortOption::PriceLowHigh);
        assert_eq!(ids(&low_high), vec![1, 8, 6, 3, 7, 5, 4, 2]);

        let high_low = catalog.browse(&filters, SortOption::PriceHighLow);
        assert_eq!(ids(&high_low), vec![2, 4, 5, 7, 3, 6, 8, 1]);

        let rating = catalog.browse(&filters, SortOption::Rating);
        assert_eq!(rating[0].id, 7);
        assert!(rating.windows(2).all(|w| w[0].rating.rate >= w[1].rating.rate));

        let newest = catalog.browse(&filters, SortOption::Newest);
        assert_eq!(ids(&newest), vec![8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(ids(&newest), ids(&catalog.browse(&filters, SortOption::Newest)));
    }

    #[test]
    fn test_browse_filters_are_inclusive() {
        let catalog = CatalogService::new().unwrap();
        let filters = FilterOptions::default()
            .with_category("accessories")
            .with_price_range(Some(49.99), Some(89.99));
        let result = catalog.browse(&filters, SortOption::PriceLowHigh);
        assert_eq!(ids(&result), vec![8, 3]);

        let all = FilterOptions::default().with_category("all");
        assert_eq!(all.category, None);
        assert_eq!(catalog.browse(&all, SortOption::default()).len(), 8);
    }

    #[test]
    fn test_related_and_featured() {
        let catalog = CatalogService::new().unwrap();
        let watch = catalog.get_product(4).unwrap();
        assert_eq!(ids(&catalog.related(watch, SHOWCASE_LIMIT)), vec![2]);

        assert_eq!(ids(&catalog.featured(None, SHOWCASE_LIMIT)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&catalog.featured(Some("accessories"), 2)), vec![3, 5]);
    }

    #[test]
    fn test_rejects_invalid_data() {
        let duplicate = r#"[
            {"id":1,"name":"a","price":1.0,"description":"","category":"x","image":"","rating":{"rate":1.0,"count":0}},
            {"id":1,"name":"b","price":2.0,"description":"","category":"x","image":"","rating":{"rate":1.0,"count":0}}
        ]"#;
        assert!(matches!(
            CatalogService::from_json(duplicate),
            Err(StoreError::Catalog(_))
        ));

        let bad_rating = r#"[
            {"id":1,"name":"a","price":1.0,"description":"","category":"x","image":"","rating":{"rate":6.0,"count":0}}
        ]"#;
        assert!(CatalogService::from_json(bad_rating).is_err());

        assert!(CatalogService::from_json("not json").is_err());
    }

    #[test]
    fn test_sort_option_labels() {
        assert_eq!("newest".parse::<SortOption>().unwrap(), SortOption::Newest);
        assert!("random".parse::<SortOption>().is_err());
        assert_eq!(SortOption::default(), SortOption::PriceLowHigh);
        assert_eq!(SortOption::ALL.len(), 4);
        assert_eq!(SortOption::Rating.label(), "Best Rating");
    }
}
