//! Search page: search bar, column picker, record list, and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It builds the [`SearchActions`] handle for its
//! subtree, then on mount restores search state from the URL query and loads
//! fields and records from the backend.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::actions::SearchActions;
use crate::components::alert_banner::AlertBanner;
use crate::components::column_picker::ColumnPicker;
use crate::components::pagination_bar::PaginationBar;
use crate::components::record_list::RecordList;
use crate::components::search_bar::SearchBar;
use crate::state::alerts::AlertState;
use crate::state::search::SearchState;
use crate::util::url_params;

#[component]
pub fn SearchPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let alerts = expect_context::<RwSignal<AlertState>>();
    let location = use_location();
    let navigate = StoredValue::new_local(use_navigate());

    let pathname = location.pathname;
    let push_url = Callback::new(move |query: String| {
        let path = pathname.get_untracked();
        let target = if query.is_empty() { path } else { format!("{path}?{query}") };
        navigate.with_value(|nav| nav(&target, NavigateOptions { scroll: false, ..NavigateOptions::default() }));
    });

    let actions = SearchActions::new(search, alerts, location.search.into(), push_url);
    provide_context(actions);

    // Effects only run in the browser, so the initial load happens once after
    // hydration.
    let loaded = RwSignal::new(false);
    let search_query = location.search;
    Effect::new(move || {
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        let params = url_params::parse(&search_query.get_untracked());
        actions.get_initial_records(&params);
    });

    view! {
        <div class="container search-page">
            <AlertBanner/>
            <SearchBar/>
            <Show when=move || search.get().pending.any()>
                <p class="search-page__busy">"Working..."</p>
            </Show>
            <ColumnPicker/>
            <RecordList/>
            <PaginationBar/>
        </div>
    }
}
