//! HTTP 接口测试
//!
//! 通过完整应用（含中间件）调用各端点。

#[cfg(test)]
mod http_flow_tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::helpers::{body_json, get, post_json, test_app, test_service};

    #[tokio::test]
    async fn test_health() {
        let service = test_service(1);
        let response = test_app(&service).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_store_owner_flow() {
        let service = test_service(3);

        let response = test_app(&service)
            .oneshot(post_json(
                "/stores",
                json!({
                    "owner_id": "owner-e2e",
                    "name": "Sunrise Groceries",
                    "description": "Neighbourhood grocer",
                    "category": "groceries",
                    "rating": 4.2
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let store = body_json(response).await;
        let store_id = store["id"].as_str().unwrap().to_string();

        let response = test_app(&service)
            .oneshot(post_json(
                "/products",
                json!({
                    "name": "Sourdough Loaf",
                    "price": 5.5,
                    "category": "groceries",
                    "store_id": store_id
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let product = body_json(response).await;
        assert_eq!(product["store_name"], "Sunrise Groceries");
        assert_eq!(product["sales"], 0);

        let response = test_app(&service)
            .oneshot(get(&format!("/products?store_id={store_id}")))
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed["total"], 1);

        let response = test_app(&service)
            .oneshot(get(&format!("/stores/{store_id}")))
            .await
            .unwrap();
        let detail = body_json(response).await;
        assert_eq!(detail["products"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_daily_offer_toggle_via_http() {
        let service = test_service(8);
        let offer = service
            .repository()
            .daily_offers()
            .list()
            .into_iter()
            .find(|o| o.is_active)
            .expect("种子数据中应存在上架套餐");

        let response = test_app(&service)
            .oneshot(post_json(
                &format!("/daily-offers/{}/active", offer.id),
                json!({ "active": false }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = test_app(&service)
            .oneshot(get(&format!("/stores/{}/daily-offers", offer.store_id)))
            .await
            .unwrap();
        let offers = body_json(response).await;
        assert!(
            offers["items"]
                .as_array()
                .unwrap()
                .iter()
                .all(|o| o["id"] != offer.id.as_str())
        );
    }
}
