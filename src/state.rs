// src/state.rs
use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::images::LocalImageStore;
use crate::service::shop::ShopService;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub shop_service: Arc<ShopService<LocalImageStore>>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, image_base: PathBuf) -> Self {
        let shop_service = Arc::new(ShopService::new(
            db_pool.clone(),
            LocalImageStore::default(),
            image_base,
        ));
        Self { db_pool, shop_service }
    }
}
