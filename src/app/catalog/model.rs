//! 商品目录数据模型

use serde::{Deserialize, Serialize};

pub type ProductId = u32;

/// 平均评分与评价数量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// 排序方式，序列化为前端使用的标签
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    PriceLowHigh,
    PriceHighLow,
    Rating,
    Newest,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::PriceLowHigh,
        SortOption::PriceHighLow,
        SortOption::Rating,
        SortOption::Newest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::PriceLowHigh => "Price: Low to High",
            SortOption::PriceHighLow => "Price: High to Low",
            SortOption::Rating => "Best Rating",
            SortOption::Newest => "Newest",
        }
    }
}

impl std::str::FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low-high" => Ok(SortOption::PriceLowHigh),
            "price-high-low" => Ok(SortOption::PriceHighLow),
            "rating" => Ok(SortOption::Rating),
            "newest" => Ok(SortOption::Newest),
            other => Err(format!("未知的排序方式: {}", other)),
        }
    }
}

/// 筛选条件，`None` 表示不限
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl FilterOptions {
    /// 选择分类，`all` 等同于清除分类
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = if category == ALL_CATEGORIES {
            None
        } else {
            Some(category.to_string())
        };
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// 代表“全部分类”的标签
pub const ALL_CATEGORIES: &str = "all";
