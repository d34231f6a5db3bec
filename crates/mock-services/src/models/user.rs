//! 用户资料模型
//!
//! 模拟层只有一个演示账号，资料在每次查询时临时构造，页面上的修改不会回写。

use serde::{Deserialize, Serialize};

/// 演示账号 ID
pub const DEMO_USER_ID: &str = "user123";

/// 收货地址
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub id: String,
    pub label: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub is_default: bool,
}

impl DeliveryAddress {
    /// 单行展示格式
    pub fn one_line(&self) -> String {
        format!("{}, {} {}", self.street, self.city, self.postal_code)
    }
}

/// 用户资料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub loyalty_points: u32,
    pub addresses: Vec<DeliveryAddress>,
    pub friend_ids: Vec<String>,
    pub followed_store_ids: Vec<String>,
}

impl UserProfile {
    /// 演示账号的固定资料
    pub fn demo() -> Self {
        let addresses = vec![
            DeliveryAddress {
                id: "addr-1".to_string(),
                label: "Home".to_string(),
                street: "123 Market Street".to_string(),
                city: "Springfield".to_string(),
                postal_code: "12345".to_string(),
                is_default: true,
            },
            DeliveryAddress {
                id: "addr-2".to_string(),
                label: "Work".to_string(),
                street: "456 Commerce Avenue".to_string(),
                city: "Springfield".to_string(),
                postal_code: "12346".to_string(),
                is_default: false,
            },
        ];

        Self {
            id: DEMO_USER_ID.to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            address: addresses[0].one_line(),
            phone: "+1 555-0123".to_string(),
            loyalty_points: 1250,
            addresses,
            friend_ids: vec!["user456".to_string(), "user789".to_string()],
            followed_store_ids: vec!["store-1".to_string(), "store-3".to_string()],
        }
    }

    /// 默认收货地址
    pub fn default_address(&self) -> Option<&DeliveryAddress> {
        self.addresses.iter().find(|a| a.is_default)
    }
}
