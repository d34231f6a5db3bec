//! 市场数据模型
//!
//! 商店、商品、每日套餐、订阅、订单与用户资料。

pub mod offer;
pub mod order;
pub mod product;
pub mod store;
pub mod subscription;
pub mod user;

pub use offer::{DailyOffer, NewDailyOffer, OfferFrequency, OfferItem};
pub use order::{Order, OrderItem, OrderStatus};
pub use product::{NewProduct, Product, ProductQuery, ProductSort};
pub use store::{DAILY_OFFER_ELIGIBLE_CATEGORIES, NewStore, Store, StoreCategory};
pub use subscription::{Subscription, SubscriptionStatus};
pub use user::{DEMO_USER_ID, DeliveryAddress, UserProfile};
