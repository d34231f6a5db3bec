//! 存储模块
//!
//! 内存集合与市场数据仓库。

pub mod memory_store;
pub mod repository;

pub use memory_store::{Keyed, MemoryStore};
pub use repository::{MarketplaceRepository, RepositoryStats};
