//! 商店模型
//!
//! 商店是商品与每日套餐的归属方，类目为封闭枚举。

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::offer::DailyOffer;
use super::product::Product;
use crate::store::Keyed;

/// 商店类目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreCategory {
    Groceries,
    Restaurants,
    CoffeeShops,
    Bakery,
    Electronics,
    Fashion,
    Books,
    Pharmacy,
    HomeGoods,
    Flowers,
    PetSupplies,
}

/// 可以创建每日套餐的类目
pub const DAILY_OFFER_ELIGIBLE_CATEGORIES: [StoreCategory; 3] = [
    StoreCategory::Groceries,
    StoreCategory::Restaurants,
    StoreCategory::CoffeeShops,
];

impl StoreCategory {
    /// 全部类目
    pub const ALL: [StoreCategory; 11] = [
        Self::Groceries,
        Self::Restaurants,
        Self::CoffeeShops,
        Self::Bakery,
        Self::Electronics,
        Self::Fashion,
        Self::Books,
        Self::Pharmacy,
        Self::HomeGoods,
        Self::Flowers,
        Self::PetSupplies,
    ];

    /// 获取类目展示名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Restaurants => "Restaurants",
            Self::CoffeeShops => "Coffee Shops",
            Self::Bakery => "Bakery",
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
            Self::Books => "Books",
            Self::Pharmacy => "Pharmacy",
            Self::HomeGoods => "Home Goods",
            Self::Flowers => "Flowers",
            Self::PetSupplies => "Pet Supplies",
        }
    }

    /// 是否允许创建每日套餐
    pub fn is_daily_offer_eligible(&self) -> bool {
        DAILY_OFFER_ELIGIBLE_CATEGORIES.contains(self)
    }
}

/// 商店
///
/// `products` 与 `daily_offers` 是全局集合中属于本店记录的副本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: StoreCategory,
    pub image_url: String,
    pub rating: f64,
    pub owner_id: String,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub daily_offers: Vec<DailyOffer>,
}

impl Keyed for Store {
    fn key(&self) -> &str {
        &self.id
    }
}

/// 创建商店的输入
///
/// 不含 id 与商品/套餐列表，由服务端分配
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewStore {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: String,
    pub category: StoreCategory,
    #[serde(default)]
    pub image_url: String,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    pub rating: f64,
}

impl NewStore {
    /// 转换为商店记录
    pub fn into_store(self, id: String, owner_id: &str) -> Store {
        Store {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            image_url: self.image_url,
            rating: self.rating,
            owner_id: owner_id.to_string(),
            products: Vec::new(),
            daily_offers: Vec::new(),
        }
    }
}
