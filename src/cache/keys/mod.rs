/// Cache key scheme
///
/// Keys are hierarchical and owner-prefixed so one pattern delete clears an
/// owner's whole scope. Correctness of invalidation depends only on prefix
/// containment, never on tracking which keys were populated.

pub mod item_keys;
pub mod list_keys;

pub use item_keys::list_items_key;
pub use list_keys::{owner_list_key, owner_lists_key, owner_scope_pattern};
