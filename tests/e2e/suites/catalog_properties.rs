//! 目录数据属性测试
//!
//! 对多个种子验证生成数据的不变量。

#[cfg(test)]
mod catalog_property_tests {
    use crate::helpers::test_service;
    use market_mock::models::{ProductQuery, ProductSort, StoreCategory};

    const SEEDS: [u64; 4] = [1, 7, 42, 2024];

    #[tokio::test]
    async fn test_initialization_is_idempotent() {
        let service = test_service(1);
        let first = service.get_products(&ProductQuery::default()).await.unwrap();
        let stats = service.repository().stats();
        let second = service.get_products(&ProductQuery::default()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(service.repository().stats(), stats);
    }

    #[tokio::test]
    async fn test_referential_consistency() {
        for seed in SEEDS {
            let service = test_service(seed);
            let stores = service.get_stores().await.unwrap();
            let products = service.get_products(&ProductQuery::default()).await.unwrap();

            for product in &products {
                let store = stores
                    .iter()
                    .find(|s| s.id == product.store_id)
                    .unwrap_or_else(|| panic!("商品 {} 的商店不存在", product.id));
                assert_eq!(store.name, product.store_name);
            }

            for store in &stores {
                let detail = service.get_store_by_id(&store.id).await.unwrap();
                let expected = products.iter().filter(|p| p.store_id == store.id).count();
                assert_eq!(detail.products.len(), expected);
            }
        }
    }

    #[tokio::test]
    async fn test_offer_eligibility() {
        for seed in SEEDS {
            let service = test_service(seed);
            let stores = service.get_stores().await.unwrap();
            for offer in service.repository().daily_offers().list() {
                let store = stores.iter().find(|s| s.id == offer.store_id).unwrap();
                assert!(matches!(
                    store.category,
                    StoreCategory::Groceries
                        | StoreCategory::Restaurants
                        | StoreCategory::CoffeeShops
                ));
            }
        }
    }

    #[tokio::test]
    async fn test_sort_filter_limit() {
        let service = test_service(42);
        for category in StoreCategory::ALL {
            for limit in [1, 5, 100] {
                let query = ProductQuery {
                    limit: Some(limit),
                    sort_by: Some(ProductSort::PriceAsc),
                    category: Some(category),
                    store_id: None,
                };
                let products = service.get_products(&query).await.unwrap();
                assert!(products.len() <= limit);
                assert!(products.iter().all(|p| p.category == category));
                assert!(products.windows(2).all(|w| w[0].price <= w[1].price));
            }
        }
    }

    #[tokio::test]
    async fn test_same_seed_is_reproducible() {
        let first = test_service(7);
        let second = test_service(7);
        assert_eq!(
            first.get_products(&ProductQuery::default()).await.unwrap(),
            second.get_products(&ProductQuery::default()).await.unwrap()
        );
    }
}
