//! Todo Item Component
//!
//! One row of the list: the text and a removal button.

use leptos::prelude::*;

use crate::config::use_widget_config;
use crate::models::Todo;

#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let config = use_widget_config();
    let text = todo.text.clone();

    view! {
        <li class="todo-item">
            <span class="todo-text">{todo.text}</span>
            <button class="remove-btn" on:click=move |_| on_remove.run(text.clone())>
                {config.remove_label}
            </button>
        </li>
    }
}
