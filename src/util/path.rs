use std::path::{Path, PathBuf};

/// Upload directory for a shop's images, scoped by its identifier.
pub fn shop_image_path(base: &Path, shop_id: i64) -> PathBuf {
    base.join("upload")
        .join("images")
        .join("item")
        .join("shop")
        .join(shop_id.to_string())
}
