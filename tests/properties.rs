// Property-based tests for the combo-box state machine.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bubbletea_combobox::combobox::{matching_positions, ComboBoxOptions, Item, Model};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Names drawn from a small alphabet so needles actually hit.
fn arb_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => "[abAB ]{0,6}".prop_map(Some),
        1 => Just(None),
    ]
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(arb_name(), 0..8).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Item {
                id: format!("id{i}"),
                name,
            })
            .collect()
    })
}

fn arb_needle() -> impl Strategy<Value = String> {
    "[abAB]{0,3}"
}

#[derive(Debug, Clone)]
enum Op {
    Filter(String),
    Down,
    Up,
    Confirm,
    ClickAway,
    Clear,
    Click(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_needle().prop_map(Op::Filter),
        2 => Just(Op::Down),
        2 => Just(Op::Up),
        1 => Just(Op::Confirm),
        1 => Just(Op::ClickAway),
        1 => Just(Op::Clear),
        1 => (0usize..10).prop_map(Op::Click),
    ]
}

fn counted(items: Vec<Item>, sort: bool) -> (Model, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&count);
    let combo = Model::new(
        items,
        ComboBoxOptions::default()
            .with_sort_names(sort)
            .with_default_name_text("none"),
    )
    .unwrap()
    .with_on_select(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });
    (combo, count)
}

fn apply(combo: &mut Model, op: &Op) {
    match op {
        Op::Filter(n) => combo.filter(n),
        Op::Down => combo.move_down(),
        Op::Up => combo.move_up(),
        Op::Confirm => combo.confirm(),
        Op::ClickAway => combo.click_away(),
        Op::Clear => combo.clear(),
        Op::Click(i) => combo.select_shown(*i),
    }
}

fn expected_shown<'a>(combo: &'a Model, needle: &str) -> Vec<&'a Item> {
    let needle = needle.to_lowercase();
    combo
        .store()
        .items()
        .iter()
        .filter(|item| combo.display_name(item).to_lowercase().contains(&needle))
        .collect()
}

/// Whether the typed text equals some non-blank display name, ignoring case.
fn names_candidate(combo: &Model) -> bool {
    let typed = combo.typed_text().to_lowercase();
    combo.store().items().iter().any(|item| {
        let name = combo.display_name(item);
        !name.trim().is_empty() && name.to_lowercase() == typed
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn filter_is_ordered_substring_subset(
        items in arb_items(),
        sort in any::<bool>(),
        ops in prop::collection::vec(arb_op(), 0..12),
        needle in arb_needle(),
    ) {
        let (mut combo, _) = counted(items, sort);
        for op in &ops {
            apply(&mut combo, op);
        }
        combo.filter(&needle);

        let expected = expected_shown(&combo, &needle);
        prop_assert_eq!(combo.shown_items(), expected);
        prop_assert_eq!(combo.typed_text(), needle.as_str());
        prop_assert_eq!(combo.highlight_index(), None);
        if combo.store().is_empty() {
            prop_assert!(!combo.menu_visible());
        } else if !needle.is_empty() {
            prop_assert!(combo.menu_visible());
        }
    }

    #[test]
    fn empty_filter_shows_whole_store(
        items in arb_items(),
        sort in any::<bool>(),
        ops in prop::collection::vec(arb_op(), 0..12),
    ) {
        let (mut combo, _) = counted(items, sort);
        for op in &ops {
            apply(&mut combo, op);
        }
        combo.filter("");

        let all: Vec<&Item> = combo.store().items().iter().collect();
        prop_assert_eq!(combo.shown_items(), all);
        prop_assert_eq!(combo.typed_text(), "");
        prop_assert_eq!(combo.highlight_index(), None);
    }

    #[test]
    fn highlight_always_in_bounds(
        items in arb_items(),
        ops in prop::collection::vec(arb_op(), 0..30),
    ) {
        let (mut combo, _) = counted(items, false);
        for op in &ops {
            apply(&mut combo, op);
            if let Some(h) = combo.state().highlight {
                prop_assert!(h < combo.shown_len());
            }
        }
    }

    #[test]
    fn navigation_stops_at_both_ends(
        items in arb_items(),
        needle in arb_needle(),
    ) {
        let (mut combo, _) = counted(items, false);
        combo.filter(&needle);

        combo.move_up();
        prop_assert_eq!(combo.highlight_index(), None);

        for _ in 0..combo.shown_len() + 3 {
            combo.move_down();
        }
        let last = combo.shown_len().checked_sub(1);
        prop_assert_eq!(combo.highlight_index(), last);
    }

    #[test]
    fn only_commits_notify(
        items in arb_items(),
        ops in prop::collection::vec(arb_op(), 0..30),
    ) {
        let (mut combo, count) = counted(items, false);
        for op in &ops {
            let before = count.load(Ordering::SeqCst);
            let selected_before = combo.selected_item().cloned();
            let highlighted = combo.highlighted_item().is_some();
            let typed_matches = names_candidate(&combo);
            let shown = combo.shown_len();
            apply(&mut combo, op);
            let fired = count.load(Ordering::SeqCst) - before;

            match op {
                Op::Filter(_) | Op::Down | Op::Up | Op::ClickAway => {
                    prop_assert_eq!(fired, 0);
                    prop_assert_eq!(combo.selected_item().cloned(), selected_before);
                }
                Op::Clear => prop_assert_eq!(fired, 1),
                Op::Confirm if highlighted || typed_matches => prop_assert_eq!(fired, 1),
                Op::Confirm => {
                    prop_assert_eq!(fired, 0);
                    prop_assert_eq!(combo.selected_item().cloned(), selected_before);
                }
                Op::Click(i) if *i < shown => prop_assert_eq!(fired, 1),
                Op::Click(_) => prop_assert_eq!(fired, 0),
            }
        }
    }

    #[test]
    fn backup_text_tracks_selection(
        items in arb_items(),
        ops in prop::collection::vec(arb_op(), 0..30),
    ) {
        let (mut combo, _) = counted(items, false);
        for op in &ops {
            apply(&mut combo, op);
            let expected = combo
                .selected_item()
                .map(|item| combo.display_name(item).to_string())
                .unwrap_or_default();
            prop_assert_eq!(combo.backup_text(), expected.as_str());
        }
    }

    #[test]
    fn click_away_restores_last_commit(
        items in arb_items(),
        ops in prop::collection::vec(arb_op(), 0..20),
        needle in arb_needle(),
    ) {
        let (mut combo, _) = counted(items, false);
        for op in &ops {
            apply(&mut combo, op);
        }
        let selected = combo.selected_item().cloned();
        let backup = combo.backup_text().to_string();

        combo.filter(&format!("{needle}zz"));
        combo.click_away();

        prop_assert_eq!(combo.typed_text(), backup.as_str());
        prop_assert_eq!(combo.selected_item().cloned(), selected);
        prop_assert!(!combo.menu_visible());
    }

    #[test]
    fn matching_positions_agrees_with_filter(
        items in arb_items(),
        needle in arb_needle(),
    ) {
        let (mut combo, _) = counted(items, false);
        combo.filter(&needle);
        let positions = matching_positions(combo.store(), &needle, "none");
        prop_assert_eq!(&combo.state().shown, &positions);
    }
}
