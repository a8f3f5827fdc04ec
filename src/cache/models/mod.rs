/// Cache snapshot models
///
/// What gets serialized into the cache is a snapshot type, not the entity
/// itself, so the cache format can evolve independently of the store schema.

pub mod item;
pub mod list;

pub use item::CachedItem;
pub use list::CachedList;
