//! 测试辅助函数

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use market_mock::cli::runner::build_app;
use market_mock::services::{LatencySimulator, MarketplaceService};
use market_mock::store::MarketplaceRepository;

/// 固定种子、关闭延迟的服务
pub fn test_service(seed: u64) -> Arc<MarketplaceService> {
    Arc::new(MarketplaceService::new(
        Arc::new(MarketplaceRepository::with_seed(seed)),
        LatencySimulator::disabled(),
    ))
}

/// 完整应用（含健康检查与中间件）
pub fn test_app(service: &Arc<MarketplaceService>) -> Router {
    build_app(service.clone())
}

/// 读取响应体为 JSON
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("读取响应体失败");
    serde_json::from_slice(&body).expect("响应体不是合法 JSON")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("构造请求失败")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("构造请求失败")
}
