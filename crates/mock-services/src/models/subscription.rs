//! 订阅模型
//!
//! 用户对某个每日套餐的周期性承诺。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Keyed;

/// 订阅状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// 订阅
///
/// `next_delivery_date` 仅在状态为 Active 时存在
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub offer_id: String,
    pub store_id: String,
    pub store_name: String,
    pub offer_name: String,
    pub start_date: DateTime<Utc>,
    pub status: SubscriptionStatus,
    pub next_delivery_date: Option<DateTime<Utc>>,
}

impl Keyed for Subscription {
    fn key(&self) -> &str {
        &self.id
    }
}
