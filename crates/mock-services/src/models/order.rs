//! 订单模型
//!
//! 模拟层不持久化订单，每次查询都会重新构造一份演示订单列表。

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// 订单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub store_id: String,
    pub store_name: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub delivery_address: String,
}

/// 订单项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    fn new(product_id: &str, product_name: &str, quantity: u32, unit_price: f64) -> Self {
        Self {
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
            quantity,
            unit_price,
        }
    }

    /// 小计金额
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// 订单状态
///
/// 正向流转：Pending → Processing → Shipped → Delivered，
/// 发货前可以取消
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// 正向流转的下一个状态，终态返回 None
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Processing),
            Self::Processing => Some(Self::Shipped),
            Self::Shipped => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// 是否允许流转到目标状态
    pub fn can_transition_to(&self, target: Self) -> bool {
        match target {
            Self::Cancelled => matches!(self, Self::Pending | Self::Processing),
            _ => self.next() == Some(target),
        }
    }
}

impl Order {
    fn build(
        id: &str,
        user_id: &str,
        store: (&str, &str),
        items: Vec<OrderItem>,
        order_date: DateTime<Utc>,
        status: OrderStatus,
        delivery_address: &str,
    ) -> Self {
        let total_amount = items.iter().map(OrderItem::subtotal).sum::<f64>();
        Self {
            id: id.to_string(),
            user_id: user_id.to_string(),
            store_id: store.0.to_string(),
            store_name: store.1.to_string(),
            items,
            total_amount: (total_amount * 100.0).round() / 100.0,
            order_date,
            status,
            delivery_address: delivery_address.to_string(),
        }
    }

    /// 构造演示订单列表
    ///
    /// 内容固定，与 `user_id` 无关；商店 ID 与名称对应生成器中的手写商店
    pub fn demo_orders(user_id: &str, now: DateTime<Utc>) -> Vec<Self> {
        let address = UserProfile::demo()
            .default_address()
            .map(|a| a.one_line())
            .unwrap_or_default();

        vec![
            Self::build(
                "order-1001",
                user_id,
                ("store-1", "Fresh Market"),
                vec![
                    OrderItem::new("store-1-prod-0", "Organic Apples", 2, 3.49),
                    OrderItem::new("store-1-prod-1", "Whole Milk", 1, 2.99),
                ],
                now - Duration::days(14),
                OrderStatus::Delivered,
                &address,
            ),
            Self::build(
                "order-1002",
                user_id,
                ("store-2", "Bella Cucina"),
                vec![OrderItem::new("store-2-prod-0", "Margherita Pizza", 1, 14.5)],
                now - Duration::days(3),
                OrderStatus::Shipped,
                &address,
            ),
            Self::build(
                "order-1003",
                user_id,
                ("store-3", "Daily Grind"),
                vec![
                    OrderItem::new("store-3-prod-0", "Oat Latte", 2, 4.75),
                    OrderItem::new("store-3-prod-1", "Blueberry Muffin", 1, 3.25),
                ],
                now - Duration::hours(2),
                OrderStatus::Processing,
                &address,
            ),
            Self::build(
                "order-1004",
                user_id,
                ("store-5", "Circuit City Hub"),
                vec![OrderItem::new("store-5-prod-0", "Wireless Earbuds", 1, 59.99)],
                now - Duration::days(30),
                OrderStatus::Cancelled,
                &address,
            ),
        ]
    }
}
