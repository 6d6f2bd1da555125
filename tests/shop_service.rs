use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sqlx::SqlitePool;
use uuid::Uuid;

use o2o_backend::database;
use o2o_backend::error::AppError;
use o2o_backend::images::{ImageStore, ImageUpload};
use o2o_backend::models::shop::{Shop, ShopFilter, ShopStatus};
use o2o_backend::service::shop::{ShopExecution, ShopService};

/// Image collaborator that records its calls instead of touching the
/// filesystem. Paths look like the real ones (scoped by the dest dir).
#[derive(Clone, Default)]
struct RecordingImageStore {
    ops: Arc<Mutex<Vec<String>>>,
}

impl RecordingImageStore {
    fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}

impl ImageStore for RecordingImageStore {
    fn generate_thumbnail(&self, img: &ImageUpload, dest_dir: &Path) -> Result<String, AppError> {
        let path = dest_dir
            .join(format!("{}-{}.jpg", img.file_name, Uuid::new_v4()))
            .to_string_lossy()
            .into_owned();
        self.ops.lock().unwrap().push(format!("write:{}", path));
        Ok(path)
    }

    fn delete_file_or_path(&self, path: &str) {
        self.ops.lock().unwrap().push(format!("delete:{}", path));
    }
}

async fn test_service() -> (ShopService<RecordingImageStore>, RecordingImageStore, SqlitePool) {
    let db_path = std::env::temp_dir().join(format!("o2o_test_{}.db", Uuid::new_v4()));
    let url = format!("sqlite:{}", db_path.display());
    let pool = database::create_pool(&url).await.unwrap();
    database::init_schema(&pool).await.unwrap();

    let images = RecordingImageStore::default();
    let image_base: PathBuf = std::env::temp_dir().join("o2o_test_images");
    let service = ShopService::new(pool.clone(), images.clone(), image_base);
    (service, images, pool)
}

fn sample_shop(name: &str) -> Shop {
    Shop {
        shop_name: Some(name.to_string()),
        shop_desc: Some("a small local shop".to_string()),
        shop_addr: Some("1 Main St".to_string()),
        phone: Some("555-0100".to_string()),
        priority: Some(1),
        ..Shop::default()
    }
}

fn sample_image(name: &str) -> ImageUpload {
    ImageUpload {
        file_name: name.to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF],
    }
}

async fn shop_row_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM tb_shop")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn add_shop_with_no_record_returns_null_shop_info() {
    let (service, images, pool) = test_service().await;

    let result = service.add_shop(None, Some(sample_image("a.png"))).await.unwrap();

    assert!(matches!(result, ShopExecution::NullShopInfo));
    assert_eq!(result.state(), -1002);
    assert_eq!(shop_row_count(&pool).await, 0);
    assert!(images.ops().is_empty());
}

#[tokio::test]
async fn add_shop_without_image_rolls_back_the_insert() {
    let (service, _images, pool) = test_service().await;

    let err = service.add_shop(Some(sample_shop("Corner Store")), None).await;

    assert!(matches!(err, Err(AppError::ShopOperation(_))));
    // the inserted row must not survive
    assert_eq!(shop_row_count(&pool).await, 0);
}

#[tokio::test]
async fn add_shop_success_returns_pending_check_with_scoped_image_path() {
    let (service, _images, pool) = test_service().await;

    let result = service
        .add_shop(Some(sample_shop("Corner Store")), Some(sample_image("front.png")))
        .await
        .unwrap();

    let shop = match result {
        ShopExecution::PendingCheck(shop) => shop,
        other => panic!("expected PendingCheck, got {:?}", other),
    };
    let shop_id = shop.shop_id.expect("assigned id");
    assert_eq!(shop.enable_status, Some(ShopStatus::Check.code()));
    assert!(shop.create_time.is_some());

    let img = shop.shop_img.expect("image path set");
    assert!(
        img.contains(&format!("shop/{}", shop_id)),
        "image path {} not scoped to shop {}",
        img,
        shop_id
    );

    // the committed row carries the image path
    let persisted = service.get_by_shop_id(shop_id).await.unwrap().unwrap();
    assert_eq!(persisted.shop_img.as_deref(), Some(img.as_str()));
    assert_eq!(shop_row_count(&pool).await, 1);
}

#[tokio::test]
async fn get_by_shop_id_returns_none_for_unknown_id() {
    let (service, _images, _pool) = test_service().await;
    assert!(service.get_by_shop_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn shop_list_pages_and_counts_independently() {
    let (service, _images, _pool) = test_service().await;

    for name in ["Shop A", "Shop B", "Shop C"] {
        service
            .add_shop(Some(sample_shop(name)), Some(sample_image("s.png")))
            .await
            .unwrap();
    }

    let page1 = service
        .get_shop_list(&ShopFilter::default(), 1, 2)
        .await
        .unwrap();
    let (shops, count) = match page1 {
        ShopExecution::ShopPage { shops, count } => (shops, count),
        other => panic!("expected ShopPage, got {:?}", other),
    };
    assert_eq!(shops.len(), 2);
    assert_eq!(count, 3);
    // equal priority: newest shop first
    assert_eq!(shops[0].shop_name.as_deref(), Some("Shop C"));

    let page2 = service
        .get_shop_list(&ShopFilter::default(), 2, 2)
        .await
        .unwrap();
    match page2 {
        ShopExecution::ShopPage { shops, count } => {
            assert_eq!(shops.len(), 1);
            assert_eq!(count, 3);
            assert_eq!(shops[0].shop_name.as_deref(), Some("Shop A"));
        }
        other => panic!("expected ShopPage, got {:?}", other),
    }
}

#[tokio::test]
async fn shop_list_reports_inner_error_on_data_access_fault() {
    let (service, _images, pool) = test_service().await;

    // make every shop query fail from here on
    sqlx::query("DROP TABLE tb_shop")
        .execute(&pool)
        .await
        .unwrap();

    let result = service
        .get_shop_list(&ShopFilter::default(), 1, 10)
        .await
        .unwrap();

    assert!(matches!(result, ShopExecution::InnerError));
    assert_eq!(result.state(), -1001);
}

#[tokio::test]
async fn shop_list_filters_by_name_fragment() {
    let (service, _images, _pool) = test_service().await;

    for name in ["Pearl Tea", "Pearl Noodles", "Book Nook"] {
        service
            .add_shop(Some(sample_shop(name)), Some(sample_image("s.png")))
            .await
            .unwrap();
    }

    let filter = ShopFilter {
        shop_name: Some("Pearl".to_string()),
        ..ShopFilter::default()
    };
    match service.get_shop_list(&filter, 1, 10).await.unwrap() {
        ShopExecution::ShopPage { shops, count } => {
            assert_eq!(count, 2);
            assert_eq!(shops.len(), 2);
        }
        other => panic!("expected ShopPage, got {:?}", other),
    }
}

#[tokio::test]
async fn modify_shop_without_id_returns_null_shop_info_and_has_no_side_effects() {
    let (service, images, pool) = test_service().await;

    let no_record = service.modify_shop(None, None).await.unwrap();
    assert!(matches!(no_record, ShopExecution::NullShopInfo));

    let no_id = service
        .modify_shop(Some(sample_shop("No Id")), Some(sample_image("x.png")))
        .await
        .unwrap();
    assert!(matches!(no_id, ShopExecution::NullShopInfo));

    assert_eq!(shop_row_count(&pool).await, 0);
    assert!(images.ops().is_empty());
}

#[tokio::test]
async fn modify_unknown_shop_returns_inner_error() {
    let (service, _images, _pool) = test_service().await;

    let mut shop = sample_shop("Ghost");
    shop.shop_id = Some(424242);

    let result = service.modify_shop(Some(shop), None).await.unwrap();
    assert!(matches!(result, ShopExecution::InnerError));
    assert_eq!(result.state(), -1001);
}

#[tokio::test]
async fn modify_with_replacement_image_deletes_old_file_first() {
    let (service, images, _pool) = test_service().await;

    let created = service
        .add_shop(Some(sample_shop("Photo Shop")), Some(sample_image("old.png")))
        .await
        .unwrap();
    let shop = match created {
        ShopExecution::PendingCheck(shop) => shop,
        other => panic!("expected PendingCheck, got {:?}", other),
    };
    let old_img = shop.shop_img.clone().unwrap();
    images.clear();

    let mut update = Shop {
        shop_id: shop.shop_id,
        ..Shop::default()
    };
    update.shop_desc = Some("new look".to_string());

    let result = service
        .modify_shop(Some(update), Some(sample_image("new.png")))
        .await
        .unwrap();

    let updated = match result {
        ShopExecution::Success(shop) => shop,
        other => panic!("expected Success, got {:?}", other),
    };

    let ops = images.ops();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0], format!("delete:{}", old_img));
    assert!(ops[1].starts_with("write:"));
    assert_ne!(updated.shop_img.as_deref(), Some(old_img.as_str()));
}

#[tokio::test]
async fn modify_success_refetches_and_bumps_last_edit_time() {
    let (service, _images, _pool) = test_service().await;

    let created = service
        .add_shop(Some(sample_shop("Slow Shop")), Some(sample_image("a.png")))
        .await
        .unwrap();
    let shop = match created {
        ShopExecution::PendingCheck(shop) => shop,
        other => panic!("expected PendingCheck, got {:?}", other),
    };
    let shop_id = shop.shop_id.unwrap();
    let created_edit_time = shop.last_edit_time.unwrap();

    let update = Shop {
        shop_id: Some(shop_id),
        shop_name: Some("Fast Shop".to_string()),
        ..Shop::default()
    };
    let result = service.modify_shop(Some(update), None).await.unwrap();
    assert_eq!(result.state(), 1);

    let updated = match result {
        ShopExecution::Success(shop) => shop,
        other => panic!("expected Success, got {:?}", other),
    };
    assert_eq!(updated.shop_name.as_deref(), Some("Fast Shop"));
    // untouched fields keep their persisted values
    assert_eq!(updated.shop_addr.as_deref(), Some("1 Main St"));
    assert!(updated.shop_img.is_some());
    assert!(updated.last_edit_time.unwrap() >= created_edit_time);
}
