//! Property-based tests for the selection store using proptest.
//!
//! Every operation goes through `handle_event` and every check reads the
//! computed view model, so these cover the store together with every surface
//! derived from it.

use proptest::prelude::*;

use dataset_explorer::app::state::{ADDED_LABEL, ADD_LABEL};
use dataset_explorer::domain::{DatasetId, DatasetSummary};
use dataset_explorer::{handle_event, AppState, Event};

#[derive(Debug, Clone)]
enum Op {
    Add(u64),
    Remove(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![(0u64..12).prop_map(Op::Add), (0u64..12).prop_map(Op::Remove)]
}

fn dataset(id: u64) -> DatasetSummary {
    serde_json::from_value(serde_json::json!({ "id": id, "title": format!("Dataset {id}") })).unwrap()
}

fn apply(state: &mut AppState, op: &Op) {
    let event = match *op {
        Op::Add(id) => Event::AddToSelection {
            id: DatasetId(id),
            title: format!("Dataset {id}"),
        },
        Op::Remove(id) => Event::RemoveFromSelection { id: DatasetId(id) },
    };
    handle_event(state, &event).unwrap();
}

// --- Count, hidden field and badges agree ---

proptest! {
    #[test]
    fn surfaces_agree_after_every_operation(ops in prop::collection::vec(op(), 0..60)) {
        let mut state = AppState::new(String::new());

        for op in &ops {
            apply(&mut state, op);
            let selection = state.compute_viewmodel().selection;

            let hidden: Vec<&str> = if selection.hidden_ids.is_empty() {
                vec![]
            } else {
                selection.hidden_ids.split(',').collect()
            };
            prop_assert_eq!(hidden.len(), state.selection.len());
            prop_assert_eq!(selection.count_badge, state.selection.len());
            prop_assert_eq!(selection.sidebar_badge, state.selection.len());
            prop_assert_eq!(selection.rows.len(), state.selection.len());

            let mut unique = hidden.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(unique.len(), hidden.len());

            prop_assert_eq!(selection.empty_message.is_some(), state.selection.is_empty());
            prop_assert_eq!(selection.create_enabled, !state.selection.is_empty());
            prop_assert_eq!(selection.download_enabled, !state.selection.is_empty());
        }
    }

    #[test]
    fn insertion_order_is_kept(ids in prop::collection::vec(0u64..50, 0..30)) {
        let mut state = AppState::new(String::new());
        let mut expected: Vec<u64> = vec![];
        for id in &ids {
            apply(&mut state, &Op::Add(*id));
            if !expected.contains(id) {
                expected.push(*id);
            }
        }

        let snapshot: Vec<u64> = state.selection.snapshot().into_iter().map(|id| id.0).collect();
        prop_assert_eq!(snapshot, expected);
    }
}

// --- Idempotent add ---

proptest! {
    #[test]
    fn second_add_changes_nothing(
        prefix in prop::collection::vec(op(), 0..20),
        id in 0u64..12,
    ) {
        let mut state = AppState::new(String::new());
        for op in &prefix {
            apply(&mut state, op);
        }

        apply(&mut state, &Op::Add(id));
        let after_first = state.selection.clone();
        let hidden_after_first = state.compute_viewmodel().selection.hidden_ids;

        apply(&mut state, &Op::Add(id));
        prop_assert_eq!(&state.selection, &after_first);
        prop_assert_eq!(state.compute_viewmodel().selection.hidden_ids, hidden_after_first);
        prop_assert!(state.pulsing.contains(&DatasetId(id)));
    }
}

// --- Add control is a pure function of membership ---

proptest! {
    #[test]
    fn add_control_tracks_membership(ops in prop::collection::vec(op(), 0..40)) {
        let mut state = AppState::new(String::new());
        state.apply_search_results((0..12).map(dataset).collect());

        for op in &ops {
            apply(&mut state, op);
            for card in state.compute_viewmodel().results.cards {
                let selected = state.selection.contains(card.id);
                prop_assert_eq!(card.add_button.disabled, selected);
                prop_assert_eq!(card.add_button.label, if selected { ADDED_LABEL } else { ADD_LABEL });
            }
        }
    }

    #[test]
    fn remove_then_add_round_trips_the_control(id in 0u64..12) {
        let mut state = AppState::new(String::new());
        state.apply_search_results((0..12).map(dataset).collect());
        let card_button = |state: &AppState| {
            state
                .compute_viewmodel()
                .results
                .cards
                .into_iter()
                .find(|card| card.id == DatasetId(id))
                .map(|card| card.add_button.disabled)
        };

        apply(&mut state, &Op::Add(id));
        prop_assert_eq!(card_button(&state), Some(true));
        apply(&mut state, &Op::Remove(id));
        prop_assert_eq!(card_button(&state), Some(false));
        apply(&mut state, &Op::Add(id));
        prop_assert_eq!(card_button(&state), Some(true));
    }
}
