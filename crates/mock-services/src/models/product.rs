//! 商品模型

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::store::StoreCategory;
use crate::store::Keyed;

/// 商品
///
/// `store_name` 是创建时从所属商店复制的快照，商店改名不会回写
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: StoreCategory,
    pub store_id: String,
    pub store_name: String,
    pub sales: u32,
}

impl Keyed for Product {
    fn key(&self) -> &str {
        &self.id
    }
}

/// 创建商品的输入
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    pub category: StoreCategory,
    #[validate(length(min = 1))]
    pub store_id: String,
}

impl NewProduct {
    /// 转换为商品记录，销量从零开始
    pub fn into_product(self, id: String, store_name: &str) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            store_id: self.store_id,
            store_name: store_name.to_string(),
            sales: 0,
        }
    }
}

/// 商品排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    /// 按销量从高到低
    Sales,
    PriceAsc,
    PriceDesc,
}

/// 商品查询条件，所有字段可选
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    pub limit: Option<usize>,
    pub sort_by: Option<ProductSort>,
    pub category: Option<StoreCategory>,
    pub store_id: Option<String>,
}

impl ProductQuery {
    /// 先按商店、再按类目过滤，然后排序并截断
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .into_iter()
            .filter(|p| self.store_id.as_deref().is_none_or(|id| p.store_id == id))
            .filter(|p| self.category.is_none_or(|c| p.category == c))
            .collect();

        match self.sort_by {
            Some(ProductSort::Sales) => result.sort_by(|a, b| b.sales.cmp(&a.sales)),
            Some(ProductSort::PriceAsc) => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Some(ProductSort::PriceDesc) => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
            None => {}
        }

        if let Some(limit) = self.limit {
            result.truncate(limit);
        }

        result
    }
}
