//! 市场模拟服务端到端测试
//!
//! 测试覆盖完整的业务流程，包括：
//! - 目录数据属性（引用一致性、套餐资格、可复现性）
//! - 商店与商品的创建
//! - 订阅生命周期
//! - 通过 HTTP 接口访问

pub mod helpers;
pub mod suites;
