//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use clap::{Parser, Subcommand};

/// Mock 市场服务命令行工具
#[derive(Parser, Debug)]
#[command(name = "market-mock")]
#[command(version, about = "多角色市场模拟数据服务")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖配置文件
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 启动 Mock 服务（HTTP REST API）
    ///
    /// 数据在首次请求时生成，未指定的参数取自配置文件
    Server {
        /// 服务端口
        #[arg(short, long)]
        port: Option<u16>,

        /// 随机种子，指定后生成的数据可复现
        #[arg(long)]
        seed: Option<u64>,

        /// 关闭人工延迟
        #[arg(long)]
        no_latency: bool,
    },

    /// 生成目录数据
    ///
    /// 打印统计信息，可选输出完整数据到 JSON 文件
    Populate {
        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// 输出到文件（JSON 格式）
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// 单元测试
// ============================================================================
