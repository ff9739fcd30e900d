//! Previous/next page controls and page-size select.
//!
//! The backend does not report a total count, so "next" stays enabled while
//! the last page came back full.

use leptos::prelude::*;

use crate::actions::SearchActions;
use crate::config::PAGE_SIZE_OPTIONS;

#[component]
pub fn PaginationBar() -> impl IntoView {
    let actions = expect_context::<SearchActions>();
    let search = actions.state();

    let current_page = move || search.get().pagination.current_page;
    let page_size = move || search.get().pagination.page_size;
    let has_next = move || {
        let state = search.get();
        usize::try_from(state.pagination.page_size).is_ok_and(|size| state.records.len() >= size)
    };

    view! {
        <nav class="pagination-bar">
            <button
                class="btn pagination-bar__prev"
                disabled=move || current_page() <= 1 || search.get().pending.search
                on:click=move |_| actions.change_page(current_page().saturating_sub(1).max(1))
            >
                "Previous"
            </button>
            <span class="pagination-bar__page">"Page " {current_page}</span>
            <button
                class="btn pagination-bar__next"
                disabled=move || !has_next() || search.get().pending.search
                on:click=move |_| actions.change_page(current_page() + 1)
            >
                "Next"
            </button>
            <label class="pagination-bar__size">
                "Per page "
                <select on:change=move |ev| {
                    let size = crate::actions::parse_page_value(Some(&event_target_value(&ev)), page_size());
                    actions.change_page_size(size);
                }>
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option value=size.to_string() selected=move || page_size() == size>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        </nav>
    }
}
