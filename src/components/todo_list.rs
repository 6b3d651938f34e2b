//! Todo List Component
//!
//! Renders entries in order, keyed by their id so equal texts never share a row.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::Todo;

#[component]
pub fn TodoList(
    #[prop(into)] todos: Signal<Vec<Todo>>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="todo-list">
            <For
                each=move || todos.get()
                key=|todo| todo.id
                children=move |todo| view! { <TodoItem todo=todo on_remove=on_remove /> }
            />
        </ul>
    }
}
