use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Shop row. All columns are nullable because the modify operation carries a
/// partial record; absent fields keep their persisted values.
#[derive(Debug, Clone, Default, FromRow, Serialize, Deserialize)]
pub struct Shop {
    pub shop_id: Option<i64>,
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

/// Listing filter; every field is optional and AND-combined.
#[derive(Debug, Clone, Default)]
pub struct ShopFilter {
    pub shop_name: Option<String>,
    pub enable_status: Option<i64>,
}

/// Review/visibility status codes stored in `enable_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopStatus {
    Disabled,
    /// Newly registered, pending administrative review.
    Check,
    Enabled,
}

impl ShopStatus {
    pub fn code(self) -> i64 {
        match self {
            ShopStatus::Disabled => -1,
            ShopStatus::Check => 0,
            ShopStatus::Enabled => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(ShopStatus::Disabled.code(), -1);
        assert_eq!(ShopStatus::Check.code(), 0);
        assert_eq!(ShopStatus::Enabled.code(), 1);
    }
}
