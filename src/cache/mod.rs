// Cache module
// Key scheme, snapshot models, and the cache protocol adapter

pub mod keys;
pub mod models;
pub mod operations;

pub use models::item::CachedItem;
pub use models::list::CachedList;
pub use operations::{Cache, RedisCache};
