pub mod page;
pub mod path;
