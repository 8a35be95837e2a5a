use common::list_view::{ListViewAction, ListViewState, PER_PAGE_OPTIONS};
use leptos::logging::log;
use leptos::prelude::*;

/// Runs one list view transition against the current filtered count.
pub fn dispatch(state: RwSignal<ListViewState>, item_count: Signal<usize>, action: ListViewAction) {
    // read before locking `state`, the count is derived from it
    let item_count = item_count.get_untracked();
    log!("list view {action:?} ({item_count} items)");
    state.update(|state| state.apply(action, item_count));
}

#[component]
pub fn CompactPagination(
    #[prop(into)] widget_id: String,
    state: RwSignal<ListViewState>,
    #[prop(into)] item_count: Signal<usize>,
) -> impl IntoView {
    let per_page_id = format!("{widget_id}-per-page");
    let page_id = format!("{widget_id}-page");
    let last_page = move || {
        let item_count = item_count.get();
        state.read().last_page(item_count)
    };
    let range = move || {
        let item_count = item_count.get();
        state.read().range(item_count).to_string()
    };
    let has_next = move || {
        let item_count = item_count.get();
        state.read().has_next(item_count)
    };

    view! {
        <div id=widget_id class="pagination pagination-compact">
            <span class="pagination-range">{range}</span>
            <select
                id=per_page_id
                class="form-select"
                aria-label="Items per page"
                prop:value=move || state.read().per_page.to_string()
                on:change:target=move |e| {
                    if let Ok(per_page) = e.target().value().parse::<usize>() {
                        dispatch(state, item_count, ListViewAction::SetPerPage(per_page));
                    }
                }
            >
                {PER_PAGE_OPTIONS
                    .iter()
                    .map(|per_page| {
                        view! {
                            <option value=per_page.to_string()>{format!("{per_page} per page")}</option>
                        }
                    })
                    .collect_view()}
            </select>
            <button
                class="btn btn-plain"
                aria-label="Go to previous page"
                disabled=move || !state.read().has_previous()
                on:click=move |_| dispatch(state, item_count, ListViewAction::PreviousPage)
            >
                "‹"
            </button>
            <input
                id=page_id
                class="form-input pagination-page"
                type="number"
                min="1"
                aria-label="Current page"
                prop:value=move || state.read().page.to_string()
                on:change:target=move |e| {
                    match e.target().value().trim().parse::<usize>() {
                        Ok(page) => dispatch(state, item_count, ListViewAction::SetPage(page)),
                        // put the current page back into the field
                        Err(_) => state.update(|_| {}),
                    }
                }
            />
            <span class="pagination-pages">"of " {last_page}</span>
            <button
                class="btn btn-plain"
                aria-label="Go to next page"
                disabled=move || !has_next()
                on:click=move |_| dispatch(state, item_count, ListViewAction::NextPage)
            >
                "›"
            </button>
        </div>
    }
}
