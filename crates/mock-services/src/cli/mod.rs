//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `server` - 启动 Mock HTTP 服务
//! - `populate` - 生成目录数据并输出统计或 JSON 文件
//!
//! # 使用示例
//!
//! ```bash
//! # 启动服务器（固定种子，关闭人工延迟）
//! market-mock server --port 8090 --seed 42 --no-latency
//!
//! # 生成目录数据
//! market-mock populate --seed 42 -o catalog.json
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;
