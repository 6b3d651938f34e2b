//! Todo List Operations
//!
//! Pure list mutations used by the store. Kept free of reactive types so
//! they can be tested natively.

use crate::models::Todo;

/// Append a new entry at the end, keeping prior order
pub fn append(todos: &mut Vec<Todo>, id: u32, text: String) {
    todos.push(Todo::new(id, text));
}

/// Remove every entry whose text equals `text`.
/// Returns the number of removed entries; 0 leaves the list untouched.
pub fn remove_matching(todos: &mut Vec<Todo>, text: &str) -> usize {
    let before = todos.len();
    todos.retain(|todo| todo.text != text);
    before - todos.len()
}

/// Displayed text sequence, in order
#[cfg(test)]
pub fn texts(todos: &[Todo]) -> Vec<String> {
    todos.iter().map(|todo| todo.text.clone()).collect()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
#[path = "todos_proptests.rs"]
mod proptests;
