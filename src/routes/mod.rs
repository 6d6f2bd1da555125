pub mod shop_admin;
pub mod shops;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(shops::routes())
        .merge(shop_admin::routes())
}
