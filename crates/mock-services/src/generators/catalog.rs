//! 目录数据生成器
//!
//! 由手写模板（名称片段、价格区间）结合随机数生成商店、商品、每日套餐和订阅。
//! 所有函数都接收外部注入的随机源，相同种子得到相同结果。

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::RangeInclusive;

use crate::models::{
    DailyOffer, OfferFrequency, OfferItem, Product, Store, StoreCategory, Subscription,
    SubscriptionStatus,
};

/// 单个类目的商品模板
struct CategoryTemplate {
    nouns: &'static [&'static str],
    adjectives: &'static [&'static str],
    price_range: (f64, f64),
}

fn template_for(category: StoreCategory) -> CategoryTemplate {
    match category {
        StoreCategory::Groceries => CategoryTemplate {
            nouns: &[
                "Apples", "Bananas", "Milk", "Eggs", "Bread", "Cheese", "Tomatoes", "Rice",
                "Pasta", "Yogurt", "Spinach", "Carrots", "Chicken Breast", "Olive Oil",
            ],
            adjectives: &["Organic", "Fresh", "Local", "Free-Range", "Whole", "Farm"],
            price_range: (0.99, 15.99),
        },
        StoreCategory::Restaurants => CategoryTemplate {
            nouns: &[
                "Pizza", "Lasagna", "Risotto", "Burger", "Salad", "Soup", "Tacos", "Curry",
                "Ramen", "Steak",
            ],
            adjectives: &["Classic", "Spicy", "House", "Grilled", "Chef's", "Vegan"],
            price_range: (8.5, 32.0),
        },
        StoreCategory::CoffeeShops => CategoryTemplate {
            nouns: &[
                "Latte", "Cappuccino", "Espresso", "Cold Brew", "Muffin", "Croissant", "Mocha",
                "Chai",
            ],
            adjectives: &["Iced", "Oat", "Double", "Vanilla", "Caramel", "Hazelnut"],
            price_range: (2.5, 7.5),
        },
        StoreCategory::Bakery => CategoryTemplate {
            nouns: &["Sourdough", "Baguette", "Cinnamon Roll", "Tart", "Cake", "Bagel"],
            adjectives: &["Rustic", "Sweet", "Glazed", "Seeded", "Buttery"],
            price_range: (1.5, 24.0),
        },
        StoreCategory::Electronics => CategoryTemplate {
            nouns: &["Earbuds", "Charger", "Speaker", "Keyboard", "Mouse", "Smartwatch"],
            adjectives: &["Wireless", "Portable", "Smart", "Ultra", "Compact"],
            price_range: (9.99, 299.99),
        },
        StoreCategory::Fashion => CategoryTemplate {
            nouns: &["T-Shirt", "Jeans", "Jacket", "Sneakers", "Scarf", "Dress"],
            adjectives: &["Vintage", "Slim", "Cotton", "Denim", "Casual", "Linen"],
            price_range: (12.0, 149.0),
        },
        StoreCategory::Books => CategoryTemplate {
            nouns: &["Novel", "Cookbook", "Biography", "Atlas", "Poetry Collection", "Journal"],
            adjectives: &["Illustrated", "Hardcover", "Paperback", "Signed", "Classic"],
            price_range: (6.99, 45.0),
        },
        StoreCategory::Pharmacy => CategoryTemplate {
            nouns: &["Vitamins", "Sunscreen", "Hand Cream", "Bandages", "Allergy Relief"],
            adjectives: &["Daily", "Sensitive", "Extra Strength", "Natural"],
            price_range: (3.49, 39.99),
        },
        StoreCategory::HomeGoods => CategoryTemplate {
            nouns: &["Candle", "Throw Pillow", "Vase", "Mug Set", "Blanket", "Lamp"],
            adjectives: &["Scented", "Ceramic", "Woven", "Minimalist", "Cozy"],
            price_range: (7.99, 129.0),
        },
        StoreCategory::Flowers => CategoryTemplate {
            nouns: &["Roses", "Tulips", "Sunflowers", "Orchid", "Bouquet", "Succulent"],
            adjectives: &["Seasonal", "Wild", "Dozen", "Potted", "Mixed"],
            price_range: (9.0, 79.0),
        },
        StoreCategory::PetSupplies => CategoryTemplate {
            nouns: &["Dog Food", "Cat Litter", "Chew Toy", "Leash", "Pet Bed", "Treats"],
            adjectives: &["Grain-Free", "Durable", "Premium", "Natural", "Plush"],
            price_range: (4.99, 89.99),
        },
    }
}

/// 每个商店生成的商品数量区间
fn product_count_range(category: StoreCategory) -> RangeInclusive<usize> {
    match category {
        StoreCategory::Groceries => 30..=70,
        StoreCategory::Restaurants => 15..=35,
        StoreCategory::CoffeeShops => 10..=20,
        _ => 10..=24,
    }
}

/// 每日套餐名称模板
fn offer_names(category: StoreCategory) -> &'static [&'static str] {
    match category {
        StoreCategory::Groceries => &[
            "Fresh Produce Box",
            "Breakfast Essentials",
            "Family Pantry Pack",
        ],
        StoreCategory::Restaurants => &["Lunch Special", "Dinner for Two", "Chef's Daily Plate"],
        StoreCategory::CoffeeShops => &[
            "Morning Coffee Run",
            "Coffee & Pastry Duo",
            "Office Brew Pack",
        ],
        _ => &["Daily Bundle"],
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &'a [&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// 生成手写的固定商店列表，覆盖全部类目
pub fn generate_stores() -> Vec<Store> {
    let seeds: [(&str, &str, StoreCategory, f64); 11] = [
        (
            "Fresh Market",
            "Farm-fresh produce and pantry staples delivered daily.",
            StoreCategory::Groceries,
            4.6,
        ),
        (
            "Bella Cucina",
            "Family-run Italian kitchen with handmade pasta.",
            StoreCategory::Restaurants,
            4.8,
        ),
        ("Daily Grind", "Small-batch roasts and fresh pastries.", StoreCategory::CoffeeShops, 4.5),
        (
            "Golden Crust Bakery",
            "Sourdough and sweets baked every morning.",
            StoreCategory::Bakery,
            4.7,
        ),
        (
            "Circuit City Hub",
            "Gadgets, accessories and smart home gear.",
            StoreCategory::Electronics,
            4.2,
        ),
        (
            "Urban Threads",
            "Everyday fashion with a sustainable twist.",
            StoreCategory::Fashion,
            4.3,
        ),
        (
            "Page Turner Books",
            "Independent bookstore with curated picks.",
            StoreCategory::Books,
            4.9,
        ),
        (
            "WellCare Pharmacy",
            "Health essentials and wellness products.",
            StoreCategory::Pharmacy,
            4.4,
        ),
        ("Nest & Nook", "Home decor for cozy living.", StoreCategory::HomeGoods, 4.1),
        ("Petal & Stem", "Seasonal bouquets and potted plants.", StoreCategory::Flowers, 4.6),
        ("Happy Paws", "Everything your pets need.", StoreCategory::PetSupplies, 4.5),
    ];

    seeds
        .iter()
        .enumerate()
        .map(|(i, (name, description, category, rating))| {
            let n = i + 1;
            Store {
                id: format!("store-{n}"),
                name: name.to_string(),
                description: description.to_string(),
                category: *category,
                image_url: format!("/images/stores/store-{n}.jpg"),
                rating: *rating,
                owner_id: format!("owner-{n}"),
                products: Vec::new(),
                daily_offers: Vec::new(),
            }
        })
        .collect()
}

/// 为单个商店生成 `count` 个商品
///
/// 名称由类目形容词与名词组合，价格在类目区间内随机；
/// `store_name` 与 `sales` 留给调用方填充
pub fn generate_store_products<R: Rng + ?Sized>(
    rng: &mut R,
    store_id: &str,
    category: StoreCategory,
    count: usize,
) -> Vec<Product> {
    let template = template_for(category);
    let (min_price, max_price) = template.price_range;

    (0..count)
        .map(|i| {
            let adjective = pick(rng, template.adjectives);
            let noun = pick(rng, template.nouns);
            Product {
                id: format!("{store_id}-prod-{i}"),
                name: format!("{adjective} {noun}"),
                description: format!(
                    "{adjective} {} from our {} selection.",
                    noun.to_lowercase(),
                    category.name()
                ),
                price: round_cents(rng.gen_range(min_price..=max_price)),
                category,
                store_id: store_id.to_string(),
                store_name: String::new(),
                sales: 0,
            }
        })
        .collect()
}

/// 为所有商店生成商品，并填充商店名称与随机销量
pub fn generate_all_products<R: Rng + ?Sized>(rng: &mut R, stores: &[Store]) -> Vec<Product> {
    let mut products = Vec::new();

    for store in stores {
        let count = rng.gen_range(product_count_range(store.category));
        let mut store_products = generate_store_products(rng, &store.id, store.category, count);
        for product in &mut store_products {
            product.store_name = store.name.clone();
            product.sales = rng.gen_range(0..=500);
        }
        products.extend(store_products);
    }

    products
}

/// 为可售套餐的商店生成每日套餐
///
/// 每店 1-2 个套餐，每个套餐捆绑 1-3 个本店商品，价格为原价合计的 80%-95%
pub fn generate_daily_offers<R: Rng + ?Sized>(
    rng: &mut R,
    stores: &[Store],
    products: &[Product],
) -> Vec<DailyOffer> {
    let mut offers = Vec::new();

    for store in stores.iter().filter(|s| s.category.is_daily_offer_eligible()) {
        let store_products: Vec<&Product> =
            products.iter().filter(|p| p.store_id == store.id).collect();
        if store_products.is_empty() {
            continue;
        }

        let offer_count = rng.gen_range(1..=2);
        for i in 0..offer_count {
            let bundle_size = rng.gen_range(1..=3).min(store_products.len());
            let chosen: Vec<&Product> = store_products
                .choose_multiple(rng, bundle_size)
                .copied()
                .collect();

            let items: Vec<OfferItem> = chosen
                .iter()
                .map(|p| OfferItem {
                    product_id: p.id.clone(),
                    quantity: rng.gen_range(1..=2),
                })
                .collect();

            let full_price: f64 = items
                .iter()
                .zip(&chosen)
                .map(|(item, product)| product.price * item.quantity as f64)
                .sum();
            let discount = rng.gen_range(0.80..=0.95);

            let frequency = if rng.gen_bool(0.5) {
                OfferFrequency::Daily
            } else {
                OfferFrequency::Weekly
            };

            let names = chosen.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ");

            offers.push(DailyOffer {
                id: format!("{}-offer-{i}", store.id),
                store_id: store.id.clone(),
                name: pick(rng, offer_names(store.category)).to_string(),
                description: format!("Includes {names}."),
                items,
                price: round_cents(full_price * discount),
                frequency,
                is_active: rng.gen_bool(0.85),
            });
        }
    }

    offers
}

/// 为指定用户生成 0-2 个随机订阅
///
/// 只有处于 Active 状态的订阅带有下次配送时间；
/// 已下架套餐上的订阅只会是 Paused 或 Cancelled
pub fn generate_subscriptions<R: Rng + ?Sized>(
    rng: &mut R,
    user_id: &str,
    offers: &[DailyOffer],
    stores: &[Store],
    now: DateTime<Utc>,
) -> Vec<Subscription> {
    if offers.is_empty() {
        return Vec::new();
    }

    let count = rng.gen_range(0..=2).min(offers.len());
    let chosen: Vec<&DailyOffer> = offers.choose_multiple(rng, count).collect();

    chosen
        .into_iter()
        .enumerate()
        .filter_map(|(i, offer)| {
            let store = stores.iter().find(|s| s.id == offer.store_id)?;
            let status = match rng.gen_range(0..3) {
                0 if offer.is_active => SubscriptionStatus::Active,
                0 | 1 => SubscriptionStatus::Paused,
                _ => SubscriptionStatus::Cancelled,
            };
            let start_date = now - chrono::Duration::days(rng.gen_range(1..=60));

            Some(Subscription {
                id: format!("{user_id}-sub-{i}"),
                user_id: user_id.to_string(),
                offer_id: offer.id.clone(),
                store_id: store.id.clone(),
                store_name: store.name.clone(),
                offer_name: offer.name.clone(),
                start_date,
                status,
                next_delivery_date: status
                    .is_active()
                    .then(|| offer.frequency.next_delivery_from(now)),
            })
        })
        .collect()
}
