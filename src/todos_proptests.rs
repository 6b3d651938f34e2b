use super::*;
use proptest::prelude::*;

/// Short texts drawn from a small alphabet so duplicates show up often
fn text_strategy() -> impl Strategy<Value = String> {
    "[ab ]{0,3}"
}

fn build(texts: &[String]) -> Vec<Todo> {
    let mut todos = Vec::new();
    for (i, text) in texts.iter().enumerate() {
        append(&mut todos, i as u32 + 1, text.clone());
    }
    todos
}

proptest! {
    /// Adding v1..vn displays exactly [v1..vn]
    #[test]
    fn prop_adds_display_in_order(values in prop::collection::vec(text_strategy(), 0..20)) {
        let todos = build(&values);
        prop_assert_eq!(texts(&todos), values);
    }

    /// Reading the same list twice gives the same view
    #[test]
    fn prop_view_is_idempotent(values in prop::collection::vec(text_strategy(), 0..20)) {
        let todos = build(&values);
        prop_assert_eq!(texts(&todos), texts(&todos));
    }

    /// Removal keeps exactly the non-matching entries in relative order
    #[test]
    fn prop_remove_is_pure_filter(
        values in prop::collection::vec(text_strategy(), 0..20),
        target in text_strategy(),
    ) {
        let mut todos = build(&values);
        let expected: Vec<String> = values.iter().filter(|v| **v != target).cloned().collect();
        let removed = remove_matching(&mut todos, &target);
        prop_assert_eq!(removed, values.len() - expected.len());
        prop_assert_eq!(texts(&todos), expected);
    }

    /// remove(add(C, x), x) == C when x was not already in C
    #[test]
    fn prop_add_then_remove_restores(
        values in prop::collection::vec(text_strategy(), 0..20),
        extra in text_strategy(),
    ) {
        let values: Vec<String> = values.into_iter().filter(|v| *v != extra).collect();
        let mut todos = build(&values);
        append(&mut todos, values.len() as u32 + 1, extra.clone());
        remove_matching(&mut todos, &extra);
        prop_assert_eq!(texts(&todos), values);
    }
}
