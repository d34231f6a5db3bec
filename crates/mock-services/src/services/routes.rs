//! Mock 市场 REST 接口
//!
//! 把市场服务暴露为 HTTP 接口，供其他进程像调用真实后端一样使用。

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use market_shared::error::MarketError;

use super::marketplace_service::MarketplaceService;
use crate::models::{
    DailyOffer, NewDailyOffer, NewProduct, NewStore, Order, Product, ProductQuery, Store,
    Subscription, SubscriptionStatus, UserProfile,
};

type ApiResult<T> = Result<T, MarketError>;

// ============================================================================
// 请求/响应 DTO
// ============================================================================

/// 创建商店请求
#[derive(Debug, Deserialize)]
pub struct CreateStoreRequest {
    pub owner_id: String,
    #[serde(flatten)]
    pub store: NewStore,
}

/// 订阅请求
#[derive(Debug, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub user_id: String,
    pub offer_id: String,
}

/// 更新订阅状态请求
#[derive(Debug, Deserialize)]
pub struct UpdateSubscriptionStatusRequest {
    pub status: SubscriptionStatus,
}

/// 套餐上下架请求
#[derive(Debug, Deserialize)]
pub struct SetOfferActiveRequest {
    pub active: bool,
}

/// 列表响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

// ============================================================================
// 路由定义
// ============================================================================

/// 构建市场服务路由
pub fn marketplace_routes() -> Router<Arc<MarketplaceService>> {
    Router::new()
        .route("/stores", get(list_stores).post(create_store))
        .route("/stores/{store_id}", get(get_store))
        .route("/stores/{store_id}/daily-offers", get(list_store_daily_offers))
        .route("/products", get(list_products).post(create_product))
        .route("/products/{product_id}", get(get_product))
        .route("/daily-offers", post(create_daily_offer))
        .route("/daily-offers/{offer_id}/active", post(set_daily_offer_active))
        .route("/subscriptions", post(create_subscription))
        .route(
            "/subscriptions/{subscription_id}/status",
            post(update_subscription_status),
        )
        .route("/users/{user_id}/subscriptions", get(list_user_subscriptions))
        .route("/users/{user_id}/orders", get(list_user_orders))
        .route("/users/{user_id}/profile", get(get_user_profile))
}

// ============================================================================
// 路由处理器
// ============================================================================

/// GET /stores
async fn list_stores(
    State(service): State<Arc<MarketplaceService>>,
) -> ApiResult<Json<ListResponse<Store>>> {
    Ok(Json(service.get_stores().await?.into()))
}

/// GET /stores/:store_id
async fn get_store(
    State(service): State<Arc<MarketplaceService>>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<Store>> {
    Ok(Json(service.get_store_by_id(&store_id).await?))
}

/// POST /stores
async fn create_store(
    State(service): State<Arc<MarketplaceService>>,
    Json(req): Json<CreateStoreRequest>,
) -> ApiResult<(StatusCode, Json<Store>)> {
    let store = service.create_store(req.store, &req.owner_id).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

/// GET /stores/:store_id/daily-offers
async fn list_store_daily_offers(
    State(service): State<Arc<MarketplaceService>>,
    Path(store_id): Path<String>,
) -> ApiResult<Json<ListResponse<DailyOffer>>> {
    Ok(Json(service.get_store_daily_offers(&store_id).await?.into()))
}

/// GET /products?limit=10&sort_by=price_asc&category=groceries&store_id=store-1
async fn list_products(
    State(service): State<Arc<MarketplaceService>>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Json<ListResponse<Product>>> {
    Ok(Json(service.get_products(&query).await?.into()))
}

/// GET /products/:product_id
async fn get_product(
    State(service): State<Arc<MarketplaceService>>,
    Path(product_id): Path<String>,
) -> ApiResult<Json<Product>> {
    Ok(Json(service.get_product_by_id(&product_id).await?))
}

/// POST /products
async fn create_product(
    State(service): State<Arc<MarketplaceService>>,
    Json(req): Json<NewProduct>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = service.create_product(req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// POST /daily-offers
async fn create_daily_offer(
    State(service): State<Arc<MarketplaceService>>,
    Json(req): Json<NewDailyOffer>,
) -> ApiResult<(StatusCode, Json<DailyOffer>)> {
    let offer = service.create_daily_offer(req).await?;
    Ok((StatusCode::CREATED, Json(offer)))
}

/// POST /daily-offers/:offer_id/active
async fn set_daily_offer_active(
    State(service): State<Arc<MarketplaceService>>,
    Path(offer_id): Path<String>,
    Json(req): Json<SetOfferActiveRequest>,
) -> ApiResult<Json<DailyOffer>> {
    Ok(Json(service.set_daily_offer_active(&offer_id, req.active).await?))
}

/// POST /subscriptions
async fn create_subscription(
    State(service): State<Arc<MarketplaceService>>,
    Json(req): Json<CreateSubscriptionRequest>,
) -> ApiResult<(StatusCode, Json<Subscription>)> {
    info!(user_id = %req.user_id, offer_id = %req.offer_id, "收到订阅请求");
    let subscription = service
        .create_subscription(&req.user_id, &req.offer_id)
        .await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}

/// POST /subscriptions/:subscription_id/status
async fn update_subscription_status(
    State(service): State<Arc<MarketplaceService>>,
    Path(subscription_id): Path<String>,
    Json(req): Json<UpdateSubscriptionStatusRequest>,
) -> ApiResult<Json<Subscription>> {
    Ok(Json(
        service
            .update_subscription_status(&subscription_id, req.status)
            .await?,
    ))
}

/// GET /users/:user_id/subscriptions
async fn list_user_subscriptions(
    State(service): State<Arc<MarketplaceService>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ListResponse<Subscription>>> {
    Ok(Json(service.get_user_subscriptions(&user_id).await?.into()))
}

/// GET /users/:user_id/orders
async fn list_user_orders(
    State(service): State<Arc<MarketplaceService>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ListResponse<Order>>> {
    Ok(Json(service.get_user_orders(&user_id).await?.into()))
}

/// GET /users/:user_id/profile
async fn get_user_profile(
    State(service): State<Arc<MarketplaceService>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    Ok(Json(service.get_user_profile(&user_id).await?))
}

// ============================================================================
// 单元测试
// ============================================================================
