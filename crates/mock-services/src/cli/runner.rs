//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。

use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Json, Router, routing::get};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use market_shared::config::{AppConfig, LatencyConfig, MockConfig};

use crate::generators::generate_catalog;
use crate::services::{MarketplaceService, marketplace_routes};

/// 命令执行器
///
/// 持有加载好的应用配置，命令行参数在此基础上覆盖
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 合并命令行参数后的模拟配置
    fn mock_config(&self, seed: Option<u64>, no_latency: bool) -> MockConfig {
        let mut mock = self.config.mock.clone();
        if seed.is_some() {
            mock.seed = seed;
        }
        if no_latency {
            mock.latency = LatencyConfig::disabled();
        }
        mock
    }

    /// 监听地址，命令行端口覆盖配置文件
    fn listen_addr(&self, port: Option<u16>) -> Result<SocketAddr> {
        let mut config = self.config.clone();
        if let Some(port) = port {
            config.server.port = port;
        }
        let addr = config.server_addr();
        addr.parse().with_context(|| format!("无效的监听地址: {}", addr))
    }

    /// 执行 server 命令
    ///
    /// 启动 HTTP REST API 服务器，数据在首次请求时生成
    pub async fn run_server(
        &self,
        port: Option<u16>,
        seed: Option<u64>,
        no_latency: bool,
    ) -> Result<()> {
        let mock = self.mock_config(seed, no_latency);
        let addr = self.listen_addr(port)?;

        info!(
            port = addr.port(),
            seed = ?mock.seed,
            latency_enabled = mock.latency.enabled,
            "启动 Mock 市场服务"
        );

        let service = Arc::new(MarketplaceService::from_config(&mock));
        let app = build_app(service);

        let listener = TcpListener::bind(addr).await.context("绑定端口失败")?;

        info!("Mock 市场服务已启动: http://{}", addr);
        info!("按 Ctrl+C 停止服务");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("服务器运行失败")?;

        info!("Mock 市场服务已停止");
        Ok(())
    }

    /// 执行 populate 命令
    ///
    /// 生成一份完整目录，打印统计，可选写入 JSON 文件
    pub fn run_populate(&self, seed: Option<u64>, output: Option<String>) -> Result<()> {
        let mock = self.mock_config(seed, true);
        info!(seed = ?mock.seed, "生成目录数据");

        let mut rng = match mock.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let catalog = generate_catalog(&mut rng, &mock.seed_users, Utc::now());

        if let Some(ref path) = output {
            let json = serde_json::to_string_pretty(&catalog).context("序列化数据失败")?;
            fs::write(path, json).with_context(|| format!("写入文件失败: {}", path))?;
            info!(path, "数据已输出到文件");
        }

        info!(
            stores = catalog.stores.len(),
            products = catalog.products.len(),
            daily_offers = catalog.daily_offers.len(),
            subscriptions = catalog.subscriptions.len(),
            "数据生成完成"
        );

        Ok(())
    }
}

/// 组装完整应用：健康检查 + 市场路由
pub fn build_app(service: Arc<MarketplaceService>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(marketplace_routes().with_state(service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
}

/// 等待 Ctrl+C 信号
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "安装 CTRL+C 信号处理器失败");
        return;
    }
    info!("收到关闭信号，正在停止服务...");
}

/// 健康检查响应
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// 健康检查端点
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
