use sqlx::{QueryBuilder, Sqlite, SqliteExecutor};

use crate::models::shop::{Shop, ShopFilter};

const SHOP_COLUMNS: &str = "shop_id, shop_name, shop_desc, shop_addr, phone, shop_img, \
     priority, enable_status, advice, create_time, last_edit_time";

/// Outcome of an insert: affected-row count plus the generated key.
pub struct ShopInsert {
    pub rows_affected: u64,
    pub shop_id: i64,
}

pub async fn insert_shop<'e>(ex: impl SqliteExecutor<'e>, shop: &Shop) -> sqlx::Result<ShopInsert> {
    let res = sqlx::query(
        "INSERT INTO tb_shop \
         (shop_name, shop_desc, shop_addr, phone, shop_img, priority, enable_status, advice, create_time, last_edit_time) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&shop.shop_name)
    .bind(&shop.shop_desc)
    .bind(&shop.shop_addr)
    .bind(&shop.phone)
    .bind(&shop.shop_img)
    .bind(shop.priority)
    .bind(shop.enable_status)
    .bind(&shop.advice)
    .bind(shop.create_time)
    .bind(shop.last_edit_time)
    .execute(ex)
    .await?;

    Ok(ShopInsert {
        rows_affected: res.rows_affected(),
        shop_id: res.last_insert_rowid(),
    })
}

/// Partial update by id: absent fields keep their persisted values.
pub async fn update_shop<'e>(ex: impl SqliteExecutor<'e>, shop: &Shop) -> sqlx::Result<u64> {
    let Some(shop_id) = shop.shop_id else {
        return Ok(0);
    };

    let res = sqlx::query(
        "UPDATE tb_shop SET \
            shop_name = COALESCE(?, shop_name), \
            shop_desc = COALESCE(?, shop_desc), \
            shop_addr = COALESCE(?, shop_addr), \
            phone = COALESCE(?, phone), \
            shop_img = COALESCE(?, shop_img), \
            priority = COALESCE(?, priority), \
            enable_status = COALESCE(?, enable_status), \
            advice = COALESCE(?, advice), \
            last_edit_time = COALESCE(?, last_edit_time) \
         WHERE shop_id = ?",
    )
    .bind(&shop.shop_name)
    .bind(&shop.shop_desc)
    .bind(&shop.shop_addr)
    .bind(&shop.phone)
    .bind(&shop.shop_img)
    .bind(shop.priority)
    .bind(shop.enable_status)
    .bind(&shop.advice)
    .bind(shop.last_edit_time)
    .bind(shop_id)
    .execute(ex)
    .await?;

    Ok(res.rows_affected())
}

pub async fn query_by_shop_id<'e>(
    ex: impl SqliteExecutor<'e>,
    shop_id: i64,
) -> sqlx::Result<Option<Shop>> {
    let sql = format!("SELECT {SHOP_COLUMNS} FROM tb_shop WHERE shop_id = ?");
    sqlx::query_as::<_, Shop>(&sql)
        .bind(shop_id)
        .fetch_optional(ex)
        .await
}

/// One page of shops matching the filter, ordered by priority then recency.
pub async fn query_shop_list<'e>(
    ex: impl SqliteExecutor<'e>,
    filter: &ShopFilter,
    row_offset: i64,
    page_size: i64,
) -> sqlx::Result<Vec<Shop>> {
    let mut qb = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {SHOP_COLUMNS} FROM tb_shop WHERE 1=1"
    ));
    push_filter(&mut qb, filter);
    qb.push(" ORDER BY priority DESC, shop_id DESC LIMIT ");
    qb.push_bind(page_size);
    qb.push(" OFFSET ");
    qb.push_bind(row_offset);

    qb.build_query_as::<Shop>().fetch_all(ex).await
}

/// Total matching count, unbounded by pagination.
pub async fn query_shop_count<'e>(
    ex: impl SqliteExecutor<'e>,
    filter: &ShopFilter,
) -> sqlx::Result<i64> {
    let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM tb_shop WHERE 1=1");
    push_filter(&mut qb, filter);

    qb.build_query_scalar::<i64>().fetch_one(ex).await
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &ShopFilter) {
    if let Some(name) = &filter.shop_name {
        qb.push(" AND shop_name LIKE ");
        qb.push_bind(format!("%{name}%"));
    }
    if let Some(status) = filter.enable_status {
        qb.push(" AND enable_status = ");
        qb.push_bind(status);
    }
}
