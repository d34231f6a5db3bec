//! 测试套件模块
//!
//! 按业务功能组织的测试用例集合。

pub mod catalog_properties;
pub mod http_flow;
pub mod subscription_lifecycle;
