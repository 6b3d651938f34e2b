//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Todo;
use crate::todos;

/// Root state: the ordered collection plus the id counter
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Entries in insertion order
    pub todos: Vec<Todo>,
    /// Next synthetic id to hand out
    pub next_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Current entries (tracked when read inside a reactive scope)
pub fn store_todo_list(store: &AppStore) -> Vec<Todo> {
    store.todos().get()
}

/// Append an entry and return its id
pub fn store_add_todo(store: &AppStore, text: String) -> u32 {
    let id = store.next_id().get_untracked();
    store.next_id().set(id.wrapping_add(1));
    log::info!("add #{} {:?}", id, text);
    todos::append(&mut store.todos().write(), id, text);
    log_snapshot(store);
    id
}

/// Remove every entry with the given text
pub fn store_remove_todo(store: &AppStore, text: &str) {
    let removed = todos::remove_matching(&mut store.todos().write(), text);
    log::info!("remove {:?}: {} removed", text, removed);
    log_snapshot(store);
}

fn log_snapshot(store: &AppStore) {
    if log::log_enabled!(log::Level::Debug) {
        let todos = store.todos().get_untracked();
        match serde_json::to_string(&todos) {
            Ok(json) => log::debug!("todos = {}", json),
            Err(e) => log::warn!("failed to serialize todos: {}", e),
        }
    }
}
