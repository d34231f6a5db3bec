//! Mock Marketplace CLI
//!
//! 模拟市场服务的命令行入口点。

use clap::Parser;
use market_mock::cli::{Cli, CommandRunner, Commands};
use market_shared::config::AppConfig;
use market_shared::observability;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 日志尚未初始化，加载失败直接输出到 stderr
    let config = AppConfig::load("market-mock").unwrap_or_else(|e| {
        eprintln!("加载配置失败，使用默认配置: {}", e);
        AppConfig::default().with_service_name("market-mock")
    });

    // 命令行日志级别优先于配置文件，RUST_LOG 优先于两者
    let mut obs_config = config
        .observability
        .clone()
        .with_service_name("market-mock");
    if let Some(ref level) = cli.log_level {
        obs_config = obs_config.with_log_level(level);
    }
    let _guard = observability::init(&obs_config).await?;

    let runner = CommandRunner::new(config);

    match cli.command {
        Commands::Server {
            port,
            seed,
            no_latency,
        } => {
            runner.run_server(port, seed, no_latency).await?;
        }
        Commands::Populate { seed, output } => {
            runner.run_populate(seed, output)?;
        }
    }

    Ok(())
}
