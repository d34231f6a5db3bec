//! Mock 市场服务
//!
//! 页面把这一层当作后端 API 使用：所有操作都是异步的，先确保仓库已初始化，
//! 再经过一段人工延迟，最后读取或修改内存集合。

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use market_shared::config::MockConfig;
use market_shared::error::{MarketError, Result};
use market_shared::observability::metrics::record_operation;

use super::latency::LatencySimulator;
use crate::models::{
    DEMO_USER_ID, DailyOffer, NewDailyOffer, NewProduct, NewStore, Order, Product, ProductQuery,
    Store, Subscription, SubscriptionStatus, UserProfile,
};
use crate::store::MarketplaceRepository;

/// 市场服务
///
/// 克隆开销很小，克隆实例共享同一个仓库
#[derive(Clone)]
pub struct MarketplaceService {
    repo: Arc<MarketplaceRepository>,
    latency: LatencySimulator,
}

impl MarketplaceService {
    pub fn new(repo: Arc<MarketplaceRepository>, latency: LatencySimulator) -> Self {
        Self { repo, latency }
    }

    /// 根据模拟配置创建服务与仓库
    pub fn from_config(config: &MockConfig) -> Self {
        Self::new(
            Arc::new(MarketplaceRepository::new(config)),
            LatencySimulator::new(config.latency.clone()),
        )
    }

    /// 获取底层仓库
    pub fn repository(&self) -> &Arc<MarketplaceRepository> {
        &self.repo
    }

    /// 初始化仓库并注入人工延迟
    async fn enter(&self) -> Duration {
        self.repo.initialize();
        self.latency.pause().await
    }

    fn finish<T>(
        &self,
        operation: &'static str,
        latency: Duration,
        result: Result<T>,
    ) -> Result<T> {
        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) if e.is_not_found() => "not_found",
            Err(_) => "error",
        };
        record_operation(operation, outcome, latency.as_secs_f64());
        result
    }

    // ========================================================================
    // 商店
    // ========================================================================

    /// 获取全部商店
    pub async fn get_stores(&self) -> Result<Vec<Store>> {
        let latency = self.enter().await;
        let stores = self.repo.stores().list();
        debug!(count = stores.len(), "获取商店列表");
        self.finish("get_stores", latency, Ok(stores))
    }

    /// 获取商店详情
    ///
    /// 商品与套餐从全局集合重新过滤后挂载
    pub async fn get_store_by_id(&self, store_id: &str) -> Result<Store> {
        let latency = self.enter().await;

        let result = self
            .repo
            .stores()
            .get(store_id)
            .map(|mut store| {
                store.products = self.repo.products().list_by(|p| p.store_id == store_id);
                store.daily_offers = self.repo.daily_offers().list_by(|o| o.store_id == store_id);
                store
            })
            .ok_or_else(|| {
                warn!(store_id = %store_id, "商店不存在");
                MarketError::not_found("Store", store_id)
            });

        self.finish("get_store_by_id", latency, result)
    }

    /// 创建商店
    pub async fn create_store(&self, data: NewStore, owner_id: &str) -> Result<Store> {
        let latency = self.enter().await;
        let result = self.insert_store(data, owner_id);
        self.finish("create_store", latency, result)
    }

    fn insert_store(&self, data: NewStore, owner_id: &str) -> Result<Store> {
        data.validate()?;

        let store = data.into_store(format!("store-{}", Uuid::new_v4()), owner_id);
        self.repo.stores().insert(store.clone());

        info!(store_id = %store.id, owner_id = %owner_id, name = %store.name, "创建商店");
        Ok(store)
    }

    // ========================================================================
    // 商品
    // ========================================================================

    /// 按条件查询商品
    pub async fn get_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let latency = self.enter().await;
        let products = query.apply(self.repo.products().list());
        debug!(?query, returned = products.len(), "查询商品");
        self.finish("get_products", latency, Ok(products))
    }

    /// 获取单个商品
    pub async fn get_product_by_id(&self, product_id: &str) -> Result<Product> {
        let latency = self.enter().await;
        let result = self
            .repo
            .products()
            .get(product_id)
            .ok_or_else(|| MarketError::not_found("Product", product_id));
        self.finish("get_product_by_id", latency, result)
    }

    /// 创建商品
    ///
    /// 追加到全局集合，同时追加到所属商店的商品列表
    pub async fn create_product(&self, data: NewProduct) -> Result<Product> {
        let latency = self.enter().await;
        let result = self.insert_product(data);
        self.finish("create_product", latency, result)
    }

    fn insert_product(&self, data: NewProduct) -> Result<Product> {
        data.validate()?;

        let store = self.repo.stores().get(&data.store_id).ok_or_else(|| {
            warn!(store_id = %data.store_id, "商店不存在，无法创建商品");
            MarketError::not_found("Store", data.store_id.clone())
        })?;

        let product = data.into_product(format!("prod-{}", Uuid::new_v4()), &store.name);
        self.repo.products().insert(product.clone());
        self.repo
            .stores()
            .update(&store.id, |s| s.products.push(product.clone()));

        info!(
            product_id = %product.id,
            store_id = %product.store_id,
            price = product.price,
            "创建商品"
        );
        Ok(product)
    }

    // ========================================================================
    // 每日套餐
    // ========================================================================

    /// 获取商店当前可订阅的套餐
    pub async fn get_store_daily_offers(&self, store_id: &str) -> Result<Vec<DailyOffer>> {
        let latency = self.enter().await;
        let offers = self
            .repo
            .daily_offers()
            .list_by(|o| o.store_id == store_id && o.is_active);
        debug!(store_id = %store_id, count = offers.len(), "获取商店套餐");
        self.finish("get_store_daily_offers", latency, Ok(offers))
    }

    /// 创建每日套餐
    pub async fn create_daily_offer(&self, data: NewDailyOffer) -> Result<DailyOffer> {
        let latency = self.enter().await;
        let result = self.insert_daily_offer(data);
        self.finish("create_daily_offer", latency, result)
    }

    fn insert_daily_offer(&self, data: NewDailyOffer) -> Result<DailyOffer> {
        data.validate()?;

        let store = self
            .repo
            .stores()
            .get(&data.store_id)
            .ok_or_else(|| MarketError::not_found("Store", data.store_id.clone()))?;

        // 套餐只能捆绑本店商品
        let products = self.repo.products();
        if let Some(item) = data.items.iter().find(|item| {
            products
                .get(&item.product_id)
                .is_none_or(|p| p.store_id != store.id)
        }) {
            return Err(MarketError::Validation(format!(
                "商品 {} 不属于商店 {}",
                item.product_id, store.id
            )));
        }

        let offer = data.into_offer(format!("offer-{}", Uuid::new_v4()));
        self.repo.daily_offers().insert(offer.clone());
        self.repo
            .stores()
            .update(&store.id, |s| s.daily_offers.push(offer.clone()));

        info!(
            offer_id = %offer.id,
            store_id = %offer.store_id,
            frequency = ?offer.frequency,
            "创建每日套餐"
        );
        Ok(offer)
    }

    /// 上架或下架套餐
    ///
    /// 同步更新商店内的套餐副本
    pub async fn set_daily_offer_active(&self, offer_id: &str, active: bool) -> Result<DailyOffer> {
        let latency = self.enter().await;

        let result = self
            .repo
            .daily_offers()
            .update(offer_id, |o| o.is_active = active)
            .ok_or_else(|| MarketError::not_found("DailyOffer", offer_id))
            .inspect(|offer| {
                self.repo.stores().update(&offer.store_id, |s| {
                    if let Some(copy) = s.daily_offers.iter_mut().find(|o| o.id == offer.id) {
                        copy.is_active = active;
                    }
                });
                info!(offer_id = %offer.id, active, "切换套餐状态");
            });

        self.finish("set_daily_offer_active", latency, result)
    }

    // ========================================================================
    // 订阅
    // ========================================================================

    /// 订阅套餐
    ///
    /// 套餐必须存在、处于上架状态且所属商店存在；
    /// 下次配送时间按套餐周期从当前时间推算
    pub async fn create_subscription(&self, user_id: &str, offer_id: &str) -> Result<Subscription> {
        let latency = self.enter().await;
        let result = self.insert_subscription(user_id, offer_id);
        self.finish("create_subscription", latency, result)
    }

    fn insert_subscription(&self, user_id: &str, offer_id: &str) -> Result<Subscription> {
        let (offer, store) = self
            .repo
            .daily_offers()
            .get(offer_id)
            .filter(|o| o.is_active)
            .and_then(|o| self.repo.stores().get(&o.store_id).map(|s| (o, s)))
            .ok_or_else(|| {
                warn!(user_id = %user_id, offer_id = %offer_id, "套餐不可订阅");
                MarketError::OfferNotAvailable {
                    offer_id: offer_id.to_string(),
                }
            })?;

        let now = Utc::now();
        let subscription = Subscription {
            id: format!("sub-{}", Uuid::new_v4()),
            user_id: user_id.to_string(),
            offer_id: offer.id.clone(),
            store_id: store.id.clone(),
            store_name: store.name.clone(),
            offer_name: offer.name.clone(),
            start_date: now,
            status: SubscriptionStatus::Active,
            next_delivery_date: Some(offer.frequency.next_delivery_from(now)),
        };
        self.repo.subscriptions().insert(subscription.clone());

        info!(
            subscription_id = %subscription.id,
            user_id = %user_id,
            offer_id = %offer_id,
            "创建订阅"
        );
        Ok(subscription)
    }

    /// 获取用户的订阅
    pub async fn get_user_subscriptions(&self, user_id: &str) -> Result<Vec<Subscription>> {
        let latency = self.enter().await;
        let subscriptions = self.repo.subscriptions().list_by(|s| s.user_id == user_id);
        debug!(user_id = %user_id, count = subscriptions.len(), "获取用户订阅");
        self.finish("get_user_subscriptions", latency, Ok(subscriptions))
    }

    /// 更新订阅状态
    ///
    /// 非 Active 状态清空下次配送时间；恢复为 Active 时按套餐周期重新推算，
    /// 套餐已不存在时保持为空
    pub async fn update_subscription_status(
        &self,
        subscription_id: &str,
        status: SubscriptionStatus,
    ) -> Result<Subscription> {
        let latency = self.enter().await;
        let result = self.apply_subscription_status(subscription_id, status);
        self.finish("update_subscription_status", latency, result)
    }

    fn apply_subscription_status(
        &self,
        subscription_id: &str,
        status: SubscriptionStatus,
    ) -> Result<Subscription> {
        let subscriptions = self.repo.subscriptions();
        let not_found = || {
            warn!(subscription_id = %subscription_id, "订阅不存在");
            MarketError::not_found("Subscription", subscription_id)
        };

        let current = subscriptions.get(subscription_id).ok_or_else(not_found)?;

        let next_delivery_date = if status.is_active() {
            self.repo
                .daily_offers()
                .get(&current.offer_id)
                .map(|offer| offer.frequency.next_delivery_from(Utc::now()))
        } else {
            None
        };

        let updated = subscriptions
            .update(subscription_id, |s| {
                s.status = status;
                s.next_delivery_date = next_delivery_date;
            })
            .ok_or_else(not_found)?;

        info!(
            subscription_id = %subscription_id,
            old_status = ?current.status,
            new_status = ?status,
            "更新订阅状态"
        );
        Ok(updated)
    }

    // ========================================================================
    // 用户
    // ========================================================================

    /// 获取用户订单
    ///
    /// 每次调用重新构造，不做真实查询
    pub async fn get_user_orders(&self, user_id: &str) -> Result<Vec<Order>> {
        let latency = self.enter().await;
        let orders = Order::demo_orders(user_id, Utc::now());
        debug!(user_id = %user_id, count = orders.len(), "获取用户订单");
        self.finish("get_user_orders", latency, Ok(orders))
    }

    /// 获取用户资料
    ///
    /// 只有演示账号有资料
    pub async fn get_user_profile(&self, user_id: &str) -> Result<UserProfile> {
        let latency = self.enter().await;
        let result = if user_id == DEMO_USER_ID {
            Ok(UserProfile::demo())
        } else {
            warn!(user_id = %user_id, "用户不存在");
            Err(MarketError::not_found("UserProfile", user_id))
        };
        self.finish("get_user_profile", latency, result)
    }
}

impl Default for MarketplaceService {
    fn default() -> Self {
        Self::from_config(&MockConfig::default())
    }
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OfferFrequency, OfferItem, ProductSort, StoreCategory};
    use chrono::Duration as ChronoDuration;
    use market_shared::error::OFFER_NOT_AVAILABLE_MESSAGE;

    /// 创建测试用的服务实例：固定种子，关闭延迟
    fn create_test_service() -> MarketplaceService {
        MarketplaceService::new(
            Arc::new(MarketplaceRepository::with_seed(2024)),
            LatencySimulator::disabled(),
        )
    }

    async fn active_offer(service: &MarketplaceService, frequency: OfferFrequency) -> DailyOffer {
        let store = service.repository().stores().get("store-1").unwrap();
        let product = service
            .repository()
            .products()
            .list_by(|p| p.store_id == store.id)
            .remove(0);

        service
            .create_daily_offer(NewDailyOffer {
                store_id: store.id.clone(),
                name: "Test Box".to_string(),
                description: String::new(),
                items: vec![OfferItem {
                    product_id: product.id,
                    quantity: 1,
                }],
                price: 9.99,
                frequency,
                is_active: true,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_stores_is_stable() {
        let service = create_test_service();
        let first = service.get_stores().await.unwrap();
        let second = service.get_stores().await.unwrap();
        assert_eq!(first.len(), 11);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_store_by_id_attaches_children() {
        let service = create_test_service();
        let store = service.get_store_by_id("store-1").await.unwrap();

        assert!(!store.products.is_empty());
        assert!(store.products.iter().all(|p| p.store_id == "store-1"));
        assert!(store.daily_offers.iter().all(|o| o.store_id == "store-1"));
    }

    #[tokio::test]
    async fn test_get_store_by_id_not_found() {
        let service = create_test_service();
        let err = service.get_store_by_id("store-missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_every_product_belongs_to_an_existing_store() {
        let service = create_test_service();
        let products = service.get_products(&ProductQuery::default()).await.unwrap();

        for product in products.iter().take(50) {
            let store = service.get_store_by_id(&product.store_id).await.unwrap();
            assert!(store.products.iter().any(|p| p.id == product.id));
        }
    }

    #[tokio::test]
    async fn test_generated_offers_are_eligible() {
        let service = create_test_service();
        for offer in service.repository().daily_offers().list() {
            let store = service.get_store_by_id(&offer.store_id).await.unwrap();
            assert!(store.category.is_daily_offer_eligible());
        }
    }

    #[tokio::test]
    async fn test_get_products_filters_and_sorts() {
        let service = create_test_service();

        let query = ProductQuery {
            limit: Some(10),
            sort_by: Some(ProductSort::PriceAsc),
            category: Some(StoreCategory::Groceries),
            store_id: None,
        };
        let products = service.get_products(&query).await.unwrap();
        assert!(products.len() <= 10);
        assert!(products.iter().all(|p| p.category == StoreCategory::Groceries));
        assert!(products.windows(2).all(|w| w[0].price <= w[1].price));

        let by_sales = service
            .get_products(&ProductQuery {
                sort_by: Some(ProductSort::Sales),
                store_id: Some("store-2".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(by_sales.iter().all(|p| p.store_id == "store-2"));
        assert!(by_sales.windows(2).all(|w| w[0].sales >= w[1].sales));
    }

    #[tokio::test]
    async fn test_create_store() {
        let service = create_test_service();
        let store = service
            .create_store(
                NewStore {
                    name: "Night Owl Books".to_string(),
                    description: "Late-night reads".to_string(),
                    category: StoreCategory::Books,
                    image_url: String::new(),
                    rating: 0.0,
                },
                "owner-42",
            )
            .await
            .unwrap();

        assert!(store.id.starts_with("store-"));
        assert_eq!(store.owner_id, "owner-42");
        assert!(store.products.is_empty());

        let stores = service.get_stores().await.unwrap();
        assert_eq!(stores.len(), 12);
        assert_eq!(stores.last().unwrap().id, store.id);
    }

    #[tokio::test]
    async fn test_create_store_validation() {
        let service = create_test_service();
        let err = service
            .create_store(
                NewStore {
                    name: String::new(),
                    description: String::new(),
                    category: StoreCategory::Books,
                    image_url: String::new(),
                    rating: 0.0,
                },
                "owner-42",
            )
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_product_appends_to_store() {
        let service = create_test_service();
        let product = service
            .create_product(NewProduct {
                name: "Sparkling Water".to_string(),
                description: String::new(),
                price: 1.25,
                category: StoreCategory::Groceries,
                store_id: "store-1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.sales, 0);
        assert_eq!(product.store_name, "Fresh Market");

        let store = service.repository().stores().get("store-1").unwrap();
        assert!(store.products.iter().any(|p| p.id == product.id));
        assert!(service.get_product_by_id(&product.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_product_unknown_store() {
        let service = create_test_service();
        let err = service
            .create_product(NewProduct {
                name: "Ghost".to_string(),
                description: String::new(),
                price: 1.0,
                category: StoreCategory::Groceries,
                store_id: "store-missing".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_daily_offer_unknown_store() {
        let service = create_test_service();
        let err = service
            .create_daily_offer(NewDailyOffer {
                store_id: "store-missing".to_string(),
                name: "Phantom Box".to_string(),
                description: String::new(),
                items: vec![OfferItem {
                    product_id: "store-1-prod-0".to_string(),
                    quantity: 1,
                }],
                price: 5.0,
                frequency: OfferFrequency::Weekly,
                is_active: true,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(
            service
                .repository()
                .daily_offers()
                .list()
                .iter()
                .all(|o| o.store_id != "store-missing")
        );
    }

    #[tokio::test]
    async fn test_create_daily_offer_rejects_foreign_products() {
        let service = create_test_service();
        let foreign = service
            .repository()
            .products()
            .list_by(|p| p.store_id == "store-2")
            .remove(0);

        let err = service
            .create_daily_offer(NewDailyOffer {
                store_id: "store-1".to_string(),
                name: "Mixed Box".to_string(),
                description: String::new(),
                items: vec![OfferItem {
                    product_id: foreign.id,
                    quantity: 1,
                }],
                price: 5.0,
                frequency: OfferFrequency::Daily,
                is_active: true,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_store_daily_offers_only_active() {
        let service = create_test_service();
        let offer = active_offer(&service, OfferFrequency::Daily).await;

        let offers = service.get_store_daily_offers("store-1").await.unwrap();
        assert!(offers.iter().any(|o| o.id == offer.id));
        assert!(offers.iter().all(|o| o.is_active));

        service.set_daily_offer_active(&offer.id, false).await.unwrap();
        let offers = service.get_store_daily_offers("store-1").await.unwrap();
        assert!(offers.iter().all(|o| o.id != offer.id));

        let store = service.repository().stores().get("store-1").unwrap();
        let copy = store.daily_offers.iter().find(|o| o.id == offer.id).unwrap();
        assert!(!copy.is_active);
    }

    #[tokio::test]
    async fn test_create_subscription_daily() {
        let service = create_test_service();
        let offer = active_offer(&service, OfferFrequency::Daily).await;

        let before = Utc::now();
        let sub = service.create_subscription("user123", &offer.id).await.unwrap();

        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert_eq!(sub.store_name, "Fresh Market");
        assert_eq!(sub.offer_name, "Test Box");
        let expected = before + ChronoDuration::days(1);
        let next = sub.next_delivery_date.unwrap();
        assert!((next - expected).num_milliseconds().abs() < 1000);
    }

    #[tokio::test]
    async fn test_create_subscription_weekly() {
        let service = create_test_service();
        let offer = active_offer(&service, OfferFrequency::Weekly).await;

        let before = Utc::now();
        let sub = service.create_subscription("user123", &offer.id).await.unwrap();
        let expected = before + ChronoDuration::days(7);
        let next = sub.next_delivery_date.unwrap();
        assert!((next - expected).num_milliseconds().abs() < 1000);
    }

    #[tokio::test]
    async fn test_create_subscription_missing_offer() {
        let service = create_test_service();
        let err = service
            .create_subscription("user123", "nonexistent-offer")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), OFFER_NOT_AVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn test_create_subscription_inactive_offer() {
        let service = create_test_service();
        let offer = active_offer(&service, OfferFrequency::Daily).await;
        service.set_daily_offer_active(&offer.id, false).await.unwrap();

        let err = service.create_subscription("user123", &offer.id).await.unwrap_err();
        assert!(matches!(err, MarketError::OfferNotAvailable { .. }));
    }

    #[tokio::test]
    async fn test_subscription_status_transitions() {
        let service = create_test_service();
        let offer = active_offer(&service, OfferFrequency::Weekly).await;
        let sub = service.create_subscription("user-77", &offer.id).await.unwrap();

        let paused = service
            .update_subscription_status(&sub.id, SubscriptionStatus::Paused)
            .await
            .unwrap();
        assert_eq!(paused.status, SubscriptionStatus::Paused);
        assert!(paused.next_delivery_date.is_none());

        let before = Utc::now();
        let resumed = service
            .update_subscription_status(&sub.id, SubscriptionStatus::Active)
            .await
            .unwrap();
        let next = resumed.next_delivery_date.unwrap();
        let expected = before + ChronoDuration::days(7);
        assert!((next - expected).num_milliseconds().abs() < 1000);

        let subs = service.get_user_subscriptions("user-77").await.unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0], resumed);
    }

    #[tokio::test]
    async fn test_update_subscription_status_not_found() {
        let service = create_test_service();
        let err = service
            .update_subscription_status("sub-missing", SubscriptionStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_user_orders_and_profile() {
        let service = create_test_service();

        let orders = service.get_user_orders("anyone").await.unwrap();
        assert!(!orders.is_empty());
        assert!(orders.iter().all(|o| o.user_id == "anyone"));

        // 订单上的商店名称与商店一致
        for order in &orders {
            let store = service.get_store_by_id(&order.store_id).await.unwrap();
            assert_eq!(store.name, order.store_name);
        }

        let profile = service.get_user_profile("user123").await.unwrap();
        assert_eq!(profile.id, "user123");
        assert!(service.get_user_profile("user999").await.unwrap_err().is_not_found());
    }
}
