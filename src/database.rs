// src/database.rs
use std::str::FromStr;

use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};

pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    sqlx::query("PRAGMA journal_mode=WAL;").execute(&pool).await.ok();
    sqlx::query("PRAGMA synchronous=NORMAL;").execute(&pool).await.ok();
    sqlx::query("PRAGMA foreign_keys=ON;").execute(&pool).await.ok();
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let ddl = r#"
    CREATE TABLE IF NOT EXISTS tb_shop (
        shop_id INTEGER PRIMARY KEY AUTOINCREMENT,
        shop_name TEXT,
        shop_desc TEXT,
        shop_addr TEXT,
        phone TEXT,
        shop_img TEXT,
        priority INTEGER,
        enable_status INTEGER DEFAULT 0,
        advice TEXT,
        create_time TEXT,
        last_edit_time TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_shop_enable_status ON tb_shop(enable_status);
    CREATE INDEX IF NOT EXISTS idx_shop_priority ON tb_shop(priority DESC);
    "#;
    sqlx::raw_sql(ddl).execute(pool).await?;
    Ok(())
}
