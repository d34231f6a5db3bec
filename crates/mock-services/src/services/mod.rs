//! Mock 服务模块
//!
//! 市场服务的访问器/修改器，以及对应的 REST 接口。

pub mod latency;
pub mod marketplace_service;
pub mod routes;

pub use latency::LatencySimulator;
pub use marketplace_service::MarketplaceService;
pub use routes::marketplace_routes;
