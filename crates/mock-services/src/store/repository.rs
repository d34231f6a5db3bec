//! 市场数据仓库
//!
//! 持有商店、商品、套餐、订阅四个内存集合，首次访问时按依赖顺序生成种子数据。
//! 仓库是显式构造的对象，测试可以各自创建实例或调用 `reset` 隔离状态。

use chrono::Utc;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use market_shared::config::MockConfig;

use super::memory_store::MemoryStore;
use crate::generators::generate_catalog;
use crate::models::{DailyOffer, Product, Store, Subscription};

/// 仓库数据统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RepositoryStats {
    pub stores_count: usize,
    pub products_count: usize,
    pub daily_offers_count: usize,
    pub subscriptions_count: usize,
}

/// 市场数据仓库
pub struct MarketplaceRepository {
    stores: MemoryStore<Store>,
    products: MemoryStore<Product>,
    daily_offers: MemoryStore<DailyOffer>,
    subscriptions: MemoryStore<Subscription>,
    rng: Mutex<StdRng>,
    seed_users: Vec<String>,
    initialized: Mutex<bool>,
}

impl MarketplaceRepository {
    /// 创建仓库，数据在首次访问时才生成
    ///
    /// 配置了种子时生成结果可复现
    pub fn new(config: &MockConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            stores: MemoryStore::new(),
            products: MemoryStore::new(),
            daily_offers: MemoryStore::new(),
            subscriptions: MemoryStore::new(),
            rng: Mutex::new(rng),
            seed_users: config.seed_users.clone(),
            initialized: Mutex::new(false),
        }
    }

    /// 使用固定种子创建仓库
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&MockConfig {
            seed: Some(seed),
            ..Default::default()
        })
    }

    /// 幂等初始化
    ///
    /// 只有第一次调用会生成数据，返回本次是否执行了生成
    pub fn initialize(&self) -> bool {
        let mut initialized = self.initialized.lock();
        if *initialized {
            return false;
        }

        let catalog = {
            let mut rng = self.rng.lock();
            generate_catalog(&mut *rng, &self.seed_users, Utc::now())
        };

        self.stores.insert_many(catalog.stores);
        self.products.insert_many(catalog.products);
        self.daily_offers.insert_many(catalog.daily_offers);
        self.subscriptions.insert_many(catalog.subscriptions);
        *initialized = true;

        let stats = self.collect_stats();
        info!(
            stores = stats.stores_count,
            products = stats.products_count,
            daily_offers = stats.daily_offers_count,
            subscriptions = stats.subscriptions_count,
            "模拟数据初始化完成"
        );
        true
    }

    /// 是否已完成初始化
    pub fn is_initialized(&self) -> bool {
        *self.initialized.lock()
    }

    /// 清空所有数据，下一次访问会重新生成
    ///
    /// 随机源不会重置，重新生成的数据与首次不同
    pub fn reset(&self) {
        let mut initialized = self.initialized.lock();
        self.stores.clear();
        self.products.clear();
        self.daily_offers.clear();
        self.subscriptions.clear();
        *initialized = false;
        debug!("模拟数据已重置");
    }

    pub fn stores(&self) -> &MemoryStore<Store> {
        self.initialize();
        &self.stores
    }

    pub fn products(&self) -> &MemoryStore<Product> {
        self.initialize();
        &self.products
    }

    pub fn daily_offers(&self) -> &MemoryStore<DailyOffer> {
        self.initialize();
        &self.daily_offers
    }

    pub fn subscriptions(&self) -> &MemoryStore<Subscription> {
        self.initialize();
        &self.subscriptions
    }

    /// 从仓库中收集统计信息
    pub fn stats(&self) -> RepositoryStats {
        self.initialize();
        self.collect_stats()
    }

    fn collect_stats(&self) -> RepositoryStats {
        RepositoryStats {
            stores_count: self.stores.count(),
            products_count: self.products.count(),
            daily_offers_count: self.daily_offers.count(),
            subscriptions_count: self.subscriptions.count(),
        }
    }
}

impl Default for MarketplaceRepository {
    fn default() -> Self {
        Self::new(&MockConfig::default())
    }
}
