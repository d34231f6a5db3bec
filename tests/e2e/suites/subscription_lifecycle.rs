//! 订阅生命周期测试
//!
//! 创建套餐 → 订阅 → 暂停 → 恢复 → 取消，校验配送时间的推算。

#[cfg(test)]
mod subscription_lifecycle_tests {
    use chrono::{Duration, Utc};
    use market_mock::models::{
        NewDailyOffer, NewProduct, OfferFrequency, OfferItem, StoreCategory, SubscriptionStatus,
    };
    use market_shared::error::OFFER_NOT_AVAILABLE_MESSAGE;

    use crate::helpers::test_service;

    #[tokio::test]
    async fn test_full_lifecycle() {
        let service = test_service(99);

        let product = service
            .create_product(NewProduct {
                name: "Cold Brew Growler".to_string(),
                description: "One litre".to_string(),
                price: 12.0,
                category: StoreCategory::CoffeeShops,
                store_id: "store-3".to_string(),
            })
            .await
            .unwrap();

        let offer = service
            .create_daily_offer(NewDailyOffer {
                store_id: "store-3".to_string(),
                name: "Weekly Growler".to_string(),
                description: String::new(),
                items: vec![OfferItem {
                    product_id: product.id.clone(),
                    quantity: 1,
                }],
                price: 10.5,
                frequency: OfferFrequency::Weekly,
                is_active: true,
            })
            .await
            .unwrap();

        let store = service.get_store_by_id("store-3").await.unwrap();
        assert!(store.products.iter().any(|p| p.id == product.id));
        assert!(store.daily_offers.iter().any(|o| o.id == offer.id));

        let before = Utc::now();
        let sub = service.create_subscription("user123", &offer.id).await.unwrap();
        let expected = before + Duration::days(7);
        assert!((sub.next_delivery_date.unwrap() - expected).num_milliseconds().abs() < 1000);

        let paused = service
            .update_subscription_status(&sub.id, SubscriptionStatus::Paused)
            .await
            .unwrap();
        assert!(paused.next_delivery_date.is_none());

        let resumed = service
            .update_subscription_status(&sub.id, SubscriptionStatus::Active)
            .await
            .unwrap();
        assert!(resumed.next_delivery_date.unwrap() > Utc::now() + Duration::days(6));

        let cancelled = service
            .update_subscription_status(&sub.id, SubscriptionStatus::Cancelled)
            .await
            .unwrap();
        assert!(cancelled.next_delivery_date.is_none());

        let subs = service.get_user_subscriptions("user123").await.unwrap();
        assert!(subs.iter().any(|s| s.id == sub.id && s.status == SubscriptionStatus::Cancelled));
    }

    #[tokio::test]
    async fn test_subscribe_to_missing_offer_fails() {
        let service = test_service(1);
        let err = service
            .create_subscription("user123", "nonexistent-offer")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), OFFER_NOT_AVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn test_deactivated_offer_cannot_be_subscribed() {
        let service = test_service(5);
        let offer = service
            .repository()
            .daily_offers()
            .list()
            .into_iter()
            .find(|o| o.is_active)
            .expect("种子数据中应存在上架套餐");

        service.set_daily_offer_active(&offer.id, false).await.unwrap();
        assert!(service.create_subscription("user123", &offer.id).await.is_err());

        service.set_daily_offer_active(&offer.id, true).await.unwrap();
        assert!(service.create_subscription("user123", &offer.id).await.is_ok());
    }
}
