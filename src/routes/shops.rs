use axum::{
    routing::get,
    Router,
};
use crate::state::AppState;
use crate::handlers::shop::{get_shop, list_shops, modify_shop, register_shop};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shops", get(list_shops).post(register_shop))
        .route("/shops/{id}", get(get_shop).put(modify_shop))
}
