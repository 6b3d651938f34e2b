//! Add Todo Input
//!
//! Text field that submits its value on Enter and clears itself.

use leptos::prelude::*;

use crate::config::use_widget_config;
use crate::draft::Draft;

/// Input for adding new entries
///
/// # Arguments
/// * `on_add` - Called with the field value each time Enter is pressed
#[component]
pub fn AddTodo(#[prop(into)] on_add: Callback<String>) -> impl IntoView {
    let config = use_widget_config();
    let (draft, set_draft) = signal(Draft::default());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        // Read from the event, not the draft: the draft is reset on submit
        if let Some(text) = submit_on_key(set_draft, &ev.key(), event_target_value(&ev)) {
            on_add.run(text);
        }
    };

    view! {
        <input
            type="text"
            class="add-todo"
            placeholder=config.placeholder
            prop:value=move || draft.with(|d| d.text().to_string())
            on:input=move |ev| set_draft.update(|d| d.change(event_target_value(&ev)))
            on:keydown=on_keydown
        />
    }
}

/// Apply a key-down to the draft. Only a submit notifies the signal.
fn submit_on_key(set_draft: WriteSignal<Draft>, key: &str, field_value: String) -> Option<String> {
    let mut submitted = None;
    set_draft.maybe_update(|d| {
        submitted = d.key_down(key, field_value);
        submitted.is_some()
    });
    submitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Draft signal plus a memo that counts how often it saw a change
    fn tracked_draft() -> (ReadSignal<Draft>, WriteSignal<Draft>, Memo<String>, Arc<AtomicUsize>) {
        let owner = Owner::new();
        owner.set();
        // Keep the owner alive for the whole test; dropping it disposes the reactive values
        std::mem::forget(owner);
        let (draft, set_draft) = signal(Draft::default());
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let text = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            draft.with(|d| d.text().to_string())
        });
        (draft, set_draft, text, runs)
    }

    #[test]
    fn test_other_key_does_not_notify() {
        let (_, set_draft, text, runs) = tracked_draft();
        set_draft.update(|d| d.change("test".into()));
        assert_eq!(text.get_untracked(), "test");
        let before = runs.load(Ordering::SeqCst);

        assert_eq!(submit_on_key(set_draft, "Alt", "test".into()), None);
        assert_eq!(text.get_untracked(), "test");
        assert_eq!(runs.load(Ordering::SeqCst), before);
    }

    #[test]
    fn test_enter_notifies_and_clears() {
        let (draft, set_draft, text, runs) = tracked_draft();
        set_draft.update(|d| d.change("test".into()));
        assert_eq!(text.get_untracked(), "test");
        let before = runs.load(Ordering::SeqCst);

        assert_eq!(submit_on_key(set_draft, "Enter", "test".into()), Some("test".to_string()));
        assert_eq!(text.get_untracked(), "");
        assert_eq!(runs.load(Ordering::SeqCst), before + 1);
        assert_eq!(draft.get_untracked(), Draft::default());
    }
}
