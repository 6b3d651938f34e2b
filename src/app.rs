//! Todo Widget App
//!
//! Root component: owns the list and wires the input and list together.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddTodo, TodoList};
use crate::config::WidgetConfig;
use crate::store::{store_add_todo, store_remove_todo, store_todo_list, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());

    provide_context(WidgetConfig::default());

    let add_todo = Callback::new(move |text: String| {
        store_add_todo(&store, text);
    });
    let remove_todo = Callback::new(move |text: String| {
        store_remove_todo(&store, &text);
    });
    let todos = Signal::derive(move || store_todo_list(&store));

    view! {
        <div class="App">
            <div class="container">
                <AddTodo on_add=add_todo />
                <TodoList todos=todos on_remove=remove_todo />
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::dom_test::*;
    use leptos::mount::mount_to;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, HtmlInputElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_app() -> (HtmlElement, HtmlInputElement) {
        let root = container();
        mount_to(root.clone(), App).forget();
        let input = find(&root, "input");
        (root, input)
    }

    async fn add(input: &HtmlInputElement, text: &str) {
        type_text(input, text);
        settle().await;
        press_key(input, "Enter");
        settle().await;
    }

    fn item_texts(root: &HtmlElement) -> Vec<String> {
        find_all(root, ".todo-text")
            .iter()
            .filter_map(|el| el.text_content())
            .collect()
    }

    #[wasm_bindgen_test]
    async fn test_add_and_remove_items() {
        let (root, input) = mount_app();
        add(&input, "Action 1").await;
        add(&input, "Action 2").await;

        assert_eq!(item_texts(&root), vec!["Action 1", "Action 2"]);
        assert_eq!(input.value(), "");
        let buttons = find_all(&root, "button");
        assert_eq!(buttons.len(), 2);
        assert!(buttons.iter().all(|b| b.text_content().as_deref() == Some("X")));

        buttons[0].click();
        settle().await;
        assert_eq!(item_texts(&root), vec!["Action 2"]);

        buttons[1].click();
        settle().await;
        assert!(item_texts(&root).is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_other_key_adds_nothing() {
        let (root, input) = mount_app();
        type_text(&input, "test");
        settle().await;
        press_key(&input, "Alt");
        settle().await;

        assert!(item_texts(&root).is_empty());
        assert_eq!(input.value(), "test");
    }

    #[wasm_bindgen_test]
    async fn test_duplicate_texts_render_separately_and_remove_together() {
        let (root, input) = mount_app();
        add(&input, "dup").await;
        add(&input, "dup").await;
        assert_eq!(item_texts(&root), vec!["dup", "dup"]);

        find_all(&root, "button")[0].click();
        settle().await;
        assert!(item_texts(&root).is_empty());
    }
}
