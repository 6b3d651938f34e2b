//! Frontend Models
//!
//! Data structures shared by the store and the components.

use serde::Serialize;

/// A single to-do entry.
///
/// `id` is assigned by the store when the entry is added and is only used
/// for keyed rendering. Equality of entries as far as the user is concerned
/// is by `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
}

impl Todo {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}
