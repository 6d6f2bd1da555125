use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dtos::shop::{ShopInfo, ShopListQuery, ShopPageResponse, ShopResponse};
use crate::error::AppError;
use crate::images::{ImageUpload, MAX_IMAGE_SIZE};
use crate::models::shop::{Shop, ShopFilter};
use crate::service::shop::ShopExecution;
use crate::state::AppState;

pub async fn register_shop(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ShopResponse>), AppError> {
    let (shop, image) = read_shop_form(&mut multipart).await?;

    match state.shop_service.add_shop(shop, image).await? {
        ShopExecution::PendingCheck(shop) => Ok((StatusCode::CREATED, Json(shop.into()))),
        ShopExecution::NullShopInfo => Err(AppError::validation("Shop info is required")),
        _ => Err(AppError::shop_op("Unexpected shop registration outcome")),
    }
}

pub async fn modify_shop(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<ShopResponse>, AppError> {
    let (shop, image) = read_shop_form(&mut multipart).await?;
    // Path wins over whatever id the payload carries
    let shop = shop.map(|mut s| {
        s.shop_id = Some(id);
        s
    });

    match state.shop_service.modify_shop(shop, image).await? {
        ShopExecution::Success(shop) => Ok(Json(shop.into())),
        ShopExecution::NullShopInfo => Err(AppError::validation("Shop info is required")),
        _ => Err(AppError::shop_op("Failed to modify shop")),
    }
}

pub async fn get_shop(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ShopResponse>, AppError> {
    let shop = state
        .shop_service
        .get_by_shop_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Shop not found"))?;

    Ok(Json(shop.into()))
}

pub async fn list_shops(
    State(state): State<AppState>,
    Query(query): Query<ShopListQuery>,
) -> Result<Json<ShopPageResponse>, AppError> {
    let page_index = query.page_index.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(10);
    if page_size <= 0 {
        return Err(AppError::validation("page_size must be positive"));
    }

    let filter = ShopFilter {
        shop_name: query.shop_name,
        enable_status: query.enable_status,
    };

    match state.shop_service.get_shop_list(&filter, page_index, page_size).await? {
        ShopExecution::ShopPage { shops, count } => Ok(Json(ShopPageResponse {
            shops: shops.into_iter().map(ShopResponse::from).collect(),
            count,
        })),
        _ => Err(AppError::shop_op("Failed to query shop list")),
    }
}

/// Pull the `shopStr` JSON part and the optional `shopImg` file part out of a
/// multipart form. Either part may be absent; the service decides what that
/// means.
async fn read_shop_form(
    multipart: &mut Multipart,
) -> Result<(Option<Shop>, Option<ImageUpload>), AppError> {
    let mut shop = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("shopStr") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid shop payload: {}", e)))?;
                let info: ShopInfo = serde_json::from_str(&text)
                    .map_err(|e| AppError::validation(format!("Invalid shop payload: {}", e)))?;
                shop = Some(info.into_shop());
            }
            Some("shopImg") => {
                let file_name = field.file_name().unwrap_or("shop.jpg").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid image upload: {}", e)))?;
                if bytes.len() > MAX_IMAGE_SIZE {
                    return Err(AppError::validation(format!(
                        "Image too large. Maximum size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }
                image = Some(ImageUpload { file_name, bytes: bytes.to_vec() });
            }
            _ => {}
        }
    }

    Ok((shop, image))
}
