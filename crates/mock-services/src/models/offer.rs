//! 每日套餐模型
//!
//! 每日套餐是商店按周期配送的商品组合，用户通过订阅购买。

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::Keyed;

/// 配送周期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferFrequency {
    Daily,
    Weekly,
}

impl OfferFrequency {
    /// 两次配送之间的间隔
    pub fn interval(&self) -> Duration {
        match self {
            Self::Daily => Duration::days(1),
            Self::Weekly => Duration::days(7),
        }
    }

    /// 从给定时间起算的下次配送时间
    pub fn next_delivery_from(&self, from: DateTime<Utc>) -> DateTime<Utc> {
        from + self.interval()
    }
}

/// 套餐中的单个商品及数量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OfferItem {
    #[validate(length(min = 1))]
    pub product_id: String,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

/// 每日套餐
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOffer {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<OfferItem>,
    pub price: f64,
    pub frequency: OfferFrequency,
    pub is_active: bool,
}

impl Keyed for DailyOffer {
    fn key(&self) -> &str {
        &self.id
    }
}

/// 创建套餐的输入
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewDailyOffer {
    #[validate(length(min = 1))]
    pub store_id: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1), nested)]
    pub items: Vec<OfferItem>,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    pub frequency: OfferFrequency,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewDailyOffer {
    pub fn into_offer(self, id: String) -> DailyOffer {
        DailyOffer {
            id,
            store_id: self.store_id,
            name: self.name,
            description: self.description,
            items: self.items,
            price: self.price,
            frequency: self.frequency,
            is_active: self.is_active,
        }
    }
}
