use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::shop::Shop;

/// JSON payload carried in the `shopStr` multipart part.
#[derive(Deserialize)]
pub struct ShopInfo {
    pub shop_name: Option<String>,
    pub shop_desc: Option<String>,
    pub shop_addr: Option<String>,
    pub phone: Option<String>,
    pub priority: Option<i64>,
}

impl ShopInfo {
    pub fn into_shop(self) -> Shop {
        Shop {
            shop_name: self.shop_name,
            shop_desc: self.shop_desc,
            shop_addr: self.shop_addr,
            phone: self.phone,
            priority: self.priority,
            ..Shop::default()
        }
    }
}

#[derive(Serialize)]
pub struct ShopResponse {
    pub shop_id: i64,
    pub shop_name: Option<String>,
    pub shop_desc: Option<String>,
    pub shop_addr: Option<String>,
    pub phone: Option<String>,
    pub shop_img: Option<String>,
    pub priority: Option<i64>,
    pub enable_status: Option<i64>,
    pub advice: Option<String>,
    pub create_time: Option<DateTime<Utc>>,
    pub last_edit_time: Option<DateTime<Utc>>,
}

impl From<Shop> for ShopResponse {
    fn from(shop: Shop) -> Self {
        ShopResponse {
            shop_id: shop.shop_id.unwrap_or_default(),
            shop_name: shop.shop_name,
            shop_desc: shop.shop_desc,
            shop_addr: shop.shop_addr,
            phone: shop.phone,
            shop_img: shop.shop_img,
            priority: shop.priority,
            enable_status: shop.enable_status,
            advice: shop.advice,
            create_time: shop.create_time,
            last_edit_time: shop.last_edit_time,
        }
    }
}

#[derive(Serialize)]
pub struct ShopPageResponse {
    pub shops: Vec<ShopResponse>,
    pub count: i64,
}

/// Listing query parameters; `page_index` is 1-based.
#[derive(Deserialize)]
pub struct ShopListQuery {
    pub page_index: Option<i64>,
    pub page_size: Option<i64>,
    pub shop_name: Option<String>,
    pub enable_status: Option<i64>,
}
