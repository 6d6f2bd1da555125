pub mod shop;
pub mod shop_admin;
