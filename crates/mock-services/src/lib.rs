//! Mock Marketplace Services
//!
//! 模拟多角色市场后端的 crate，页面把它当作真实 API 使用。
//!
//! # 主要模块
//!
//! - `models`: 商店、商品、每日套餐、订阅、订单、用户资料
//! - `generators`: 目录种子数据生成器（可注入随机源）
//! - `store`: 有序内存集合与市场数据仓库
//! - `services`: 异步访问器/修改器与 REST 接口
//!
//! # 使用示例
//!
//! ```rust
//! use std::sync::Arc;
//! use market_mock::services::{LatencySimulator, MarketplaceService};
//! use market_mock::store::MarketplaceRepository;
//!
//! # tokio_test::block_on(async {
//! let repo = Arc::new(MarketplaceRepository::with_seed(42));
//! let service = MarketplaceService::new(repo, LatencySimulator::disabled());
//!
//! let stores = service.get_stores().await.unwrap();
//! assert_eq!(stores.len(), 11);
//! # });
//! ```

pub mod cli;
pub mod generators;
pub mod models;
pub mod services;
pub mod store;
