//! 生成器模块
//!
//! 提供目录种子数据的批量生成功能。

pub mod catalog;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::models::{DailyOffer, Product, Store, Subscription};

pub use catalog::{
    generate_all_products, generate_daily_offers, generate_store_products, generate_stores,
    generate_subscriptions,
};

/// 一次完整生成的目录数据
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub stores: Vec<Store>,
    pub products: Vec<Product>,
    pub daily_offers: Vec<DailyOffer>,
    pub subscriptions: Vec<Subscription>,
}

/// 按依赖顺序生成目录：商店 → 商品 → 套餐 → 订阅
///
/// 返回的商店已挂载各自的商品与套餐
pub fn generate_catalog<R: Rng + ?Sized>(
    rng: &mut R,
    seed_users: &[String],
    now: DateTime<Utc>,
) -> Catalog {
    let mut stores = generate_stores();
    let products = generate_all_products(rng, &stores);
    let daily_offers = generate_daily_offers(rng, &stores, &products);
    let subscriptions = seed_users
        .iter()
        .flat_map(|user_id| generate_subscriptions(rng, user_id, &daily_offers, &stores, now))
        .collect();

    for store in &mut stores {
        store.products = products
            .iter()
            .filter(|p| p.store_id == store.id)
            .cloned()
            .collect();
        store.daily_offers = daily_offers
            .iter()
            .filter(|o| o.store_id == store.id)
            .cloned()
            .collect();
    }

    Catalog {
        stores,
        products,
        daily_offers,
        subscriptions,
    }
}
