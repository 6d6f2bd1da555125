//! Shop business rules: paginated listing, registration with mandatory image,
//! lookup, and modification with optional image replacement.
//!
//! Persistence calls for registration and modification run inside a single
//! sqlx transaction; any early return drops the `Transaction`, which rolls it
//! back. Image files are written and deleted outside that boundary, so a
//! failed update can leave an orphaned file on disk.

use std::path::PathBuf;

use chrono::Utc;
use sqlx::SqlitePool;

use crate::dao;
use crate::error::AppError;
use crate::images::{ImageStore, ImageUpload};
use crate::models::shop::{Shop, ShopFilter, ShopStatus};
use crate::util::{page, path};

/// Outcome of a shop operation. One variant per status, each carrying only
/// the payload meaningful for that status.
#[derive(Debug)]
pub enum ShopExecution {
    /// Input record absent or missing its identifier.
    NullShopInfo,
    /// Registration succeeded; the shop awaits administrative review.
    PendingCheck(Shop),
    /// Modification succeeded; carries the re-fetched record.
    Success(Shop),
    /// One listing page plus the unbounded matching count.
    ShopPage { shops: Vec<Shop>, count: i64 },
    /// A collaborator fault the caller can only report.
    InnerError,
}

impl ShopExecution {
    pub fn state(&self) -> i64 {
        match self {
            ShopExecution::NullShopInfo => -1002,
            ShopExecution::InnerError => -1001,
            ShopExecution::PendingCheck(_) => 0,
            ShopExecution::Success(_) | ShopExecution::ShopPage { .. } => 1,
        }
    }
}

pub struct ShopService<I: ImageStore> {
    pool: SqlitePool,
    images: I,
    image_base: PathBuf,
}

impl<I: ImageStore> ShopService<I> {
    pub fn new(pool: SqlitePool, images: I, image_base: PathBuf) -> Self {
        Self { pool, images, image_base }
    }

    /// One page of shops matching `filter`, plus the total matching count.
    /// A data-access fault is an expected outcome here, reported as
    /// `InnerError` rather than propagated.
    pub async fn get_shop_list(
        &self,
        filter: &ShopFilter,
        page_index: i64,
        page_size: i64,
    ) -> Result<ShopExecution, AppError> {
        let row_offset = page::calculate_row_index(page_index, page_size);

        let shops = match dao::shop::query_shop_list(&self.pool, filter, row_offset, page_size).await {
            Ok(shops) => shops,
            Err(e) => {
                tracing::error!(error=%e, "Shop list query failed");
                return Ok(ShopExecution::InnerError);
            }
        };
        let count = match dao::shop::query_shop_count(&self.pool, filter).await {
            Ok(count) => count,
            Err(e) => {
                tracing::error!(error=%e, "Shop count query failed");
                return Ok(ShopExecution::InnerError);
            }
        };

        Ok(ShopExecution::ShopPage { shops, count })
    }

    /// Register a new shop. The image is mandatory: the inserted row and its
    /// image-path update commit together or not at all.
    pub async fn add_shop(
        &self,
        shop: Option<Shop>,
        image: Option<ImageUpload>,
    ) -> Result<ShopExecution, AppError> {
        let Some(mut shop) = shop else {
            return Ok(ShopExecution::NullShopInfo);
        };

        let now = Utc::now();
        shop.create_time = Some(now);
        shop.last_edit_time = Some(now);
        shop.enable_status = Some(ShopStatus::Check.code());

        // Dropping `tx` on any early return rolls the whole operation back.
        let mut tx = self.pool.begin().await?;

        let inserted = dao::shop::insert_shop(&mut *tx, &shop).await?;
        if inserted.rows_affected == 0 {
            return Err(AppError::shop_op("Failed to insert shop"));
        }
        shop.shop_id = Some(inserted.shop_id);

        let image = image.ok_or_else(|| AppError::shop_op("Shop image is required"))?;
        let dest = path::shop_image_path(&self.image_base, inserted.shop_id);
        let img_addr = self.images.generate_thumbnail(&image, &dest)?;
        shop.shop_img = Some(img_addr);

        let affected = dao::shop::update_shop(&mut *tx, &shop).await?;
        if affected == 0 {
            return Err(AppError::shop_op("Failed to store shop image path"));
        }

        tx.commit().await?;
        Ok(ShopExecution::PendingCheck(shop))
    }

    pub async fn get_by_shop_id(&self, shop_id: i64) -> Result<Option<Shop>, AppError> {
        Ok(dao::shop::query_by_shop_id(&self.pool, shop_id).await?)
    }

    /// Update an existing shop, optionally replacing its image. The old image
    /// file is deleted before the new one is written; file operations are not
    /// rolled back with the database transaction.
    pub async fn modify_shop(
        &self,
        shop: Option<Shop>,
        image: Option<ImageUpload>,
    ) -> Result<ShopExecution, AppError> {
        let Some(mut shop) = shop else {
            return Ok(ShopExecution::NullShopInfo);
        };
        let Some(shop_id) = shop.shop_id else {
            return Ok(ShopExecution::NullShopInfo);
        };

        if let Some(image) = image {
            let current = dao::shop::query_by_shop_id(&self.pool, shop_id).await?;
            if let Some(old_img) = current.and_then(|s| s.shop_img) {
                self.images.delete_file_or_path(&old_img);
            }
            let dest = path::shop_image_path(&self.image_base, shop_id);
            shop.shop_img = Some(self.images.generate_thumbnail(&image, &dest)?);
        }

        shop.last_edit_time = Some(Utc::now());

        let mut tx = self.pool.begin().await?;
        let affected = dao::shop::update_shop(&mut *tx, &shop).await?;
        if affected == 0 {
            return Ok(ShopExecution::InnerError);
        }
        let updated = dao::shop::query_by_shop_id(&mut *tx, shop_id)
            .await?
            .ok_or_else(|| AppError::shop_op("Updated shop not found on re-fetch"))?;
        tx.commit().await?;

        Ok(ShopExecution::Success(updated))
    }
}
