// Repository operations. Every list/item query is scoped through the
// relation tables, so tenant isolation is a property of the query shape.

pub mod item;
pub mod list;
pub mod user;

pub use item::ItemOperation;
pub use list::ListOperation;
pub use user::UserOperation;
