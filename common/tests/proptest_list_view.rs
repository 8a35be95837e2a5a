use common::list_view::{filter_by_name, paginate, ListViewAction, ListViewState};
use common::Named;
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Row(String);

impl Named for Row {
    fn name(&self) -> &str {
        &self.0
    }
}

fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec("[a-zA-Z -]{0,12}".prop_map(Row), 0..40)
}

fn arb_action() -> impl Strategy<Value = ListViewAction> {
    prop_oneof![
        "[a-z]{0,3}".prop_map(ListViewAction::SetFilter),
        (0usize..20).prop_map(ListViewAction::SetPage),
        (1usize..10).prop_map(ListViewAction::SetPerPage),
        Just(ListViewAction::PreviousPage),
        Just(ListViewAction::NextPage),
    ]
}

proptest! {
    /// Property: filtering yields an order-preserving subsequence of matches
    #[test]
    fn prop_filter_is_matching_subsequence(rows in arb_rows(), filter in "[a-zA-Z]{1,3}") {
        let filtered = filter_by_name(&rows, &filter);
        let needle = filter.to_lowercase();

        let mut source = rows.iter();
        for row in &filtered {
            prop_assert!(row.0.to_lowercase().contains(&needle));
            // every kept row must appear later in the source than the previous one
            prop_assert!(source.any(|candidate| std::ptr::eq(candidate, *row)));
        }
        let expected = rows.iter().filter(|row| row.0.to_lowercase().contains(&needle)).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    /// Property: a blank filter is the identity
    #[test]
    fn prop_blank_filter_is_identity(rows in arb_rows(), blank in "[ \t]{0,4}") {
        let filtered: Vec<Row> = filter_by_name(&rows, &blank).into_iter().cloned().collect();
        prop_assert_eq!(filtered, rows);
    }

    /// Property: |paginate(R, p, s)| == min(s, max(0, |R| - (p-1)*s))
    #[test]
    fn prop_page_length(len in 0usize..60, page in 1usize..12, per_page in 1usize..15) {
        let rows: Vec<usize> = (0..len).collect();
        let expected = per_page.min(len.saturating_sub((page - 1) * per_page));
        let window = paginate(&rows, page, per_page);
        prop_assert_eq!(window.len(), expected);
        if let Some(first) = window.first() {
            prop_assert_eq!(*first, (page - 1) * per_page);
        }
    }

    /// Property: filter and page size changes always land on page 1
    #[test]
    fn prop_resets_to_first_page(
        actions in prop::collection::vec(arb_action(), 0..20),
        last in prop_oneof![
            "[a-z]{0,3}".prop_map(ListViewAction::SetFilter),
            (1usize..10).prop_map(ListViewAction::SetPerPage),
        ],
        item_count in 0usize..100,
    ) {
        let mut state = ListViewState::default();
        for action in actions {
            state.apply(action, item_count);
        }
        state.apply(last, item_count);
        prop_assert_eq!(state.page, 1);
    }

    /// Property: page controls never leave 1..=last_page
    #[test]
    fn prop_stepping_stays_in_bounds(
        steps in prop::collection::vec(
            prop_oneof![
                (0usize..20).prop_map(ListViewAction::SetPage),
                Just(ListViewAction::PreviousPage),
                Just(ListViewAction::NextPage),
            ],
            0..30,
        ),
        item_count in 0usize..100,
        per_page in 1usize..15,
    ) {
        let mut state = ListViewState::default();
        state.apply(ListViewAction::SetPerPage(per_page), item_count);
        for step in steps {
            state.apply(step, item_count);
            prop_assert!(state.page >= 1 && state.page <= state.last_page(item_count));
        }
    }
}
