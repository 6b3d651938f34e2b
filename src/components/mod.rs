//! UI Components
//!
//! Presentational Leptos components composed by `App`.

mod add_todo;
mod todo_item;
mod todo_list;

pub use add_todo::AddTodo;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
