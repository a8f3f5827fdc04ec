// Entity definitions and the partial-update input types

pub mod item;
pub mod list;
pub mod user;

pub use item::{NewItem, TodoItem, UpdateItemInput};
pub use list::{NewList, TodoList, UpdateListInput};
pub use user::{NewUser, UserEntity};
