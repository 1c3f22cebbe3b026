pub mod asset;
pub mod price;
pub mod summary;
pub mod transaction;
