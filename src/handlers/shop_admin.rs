//! Shop administration pages: fixed paths, fixed view identifiers, no logic.
//! The view identifiers are consumed by the templating layer.

pub const SHOP_OPERATION_VIEW: &str = "shop/shopoperation";
pub const SHOP_LIST_VIEW: &str = "shop/shoplist";
pub const SHOP_MANAGEMENT_VIEW: &str = "shop/shopmanagement";
pub const PRODUCT_CATEGORY_MANAGEMENT_VIEW: &str = "shop/productcategorymanagement";

pub async fn shop_operation() -> &'static str {
    SHOP_OPERATION_VIEW
}

pub async fn shop_list() -> &'static str {
    SHOP_LIST_VIEW
}

pub async fn shop_management() -> &'static str {
    SHOP_MANAGEMENT_VIEW
}

pub async fn product_category_management() -> &'static str {
    PRODUCT_CATEGORY_MANAGEMENT_VIEW
}
