use axum::{routing::get, Router};
use crate::state::AppState;
use crate::handlers::shop_admin::{
    product_category_management, shop_list, shop_management, shop_operation,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shopadmin/shopoperation", get(shop_operation))
        .route("/shopadmin/shoplist", get(shop_list))
        .route("/shopadmin/shopmanagement", get(shop_management))
        .route(
            "/shopadmin/productcategorymanagement",
            get(product_category_management),
        )
}
