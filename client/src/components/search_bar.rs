//! Search input with submit button.

use leptos::prelude::*;

use crate::actions::{SearchActions, SearchOptions};

#[component]
pub fn SearchBar() -> impl IntoView {
    let actions = expect_context::<SearchActions>();
    let search = actions.state();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = search.get_untracked().search_field;
        actions.get_filtered_records(query, SearchOptions::INTERACTIVE);
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                class="search-bar__input"
                type="text"
                placeholder="name:John, age:42"
                prop:value=move || search.get().search_field
                on:input=move |ev| actions.search_field_change(event_target_value(&ev))
            />
            <button
                class="btn btn--primary search-bar__submit"
                type="submit"
                disabled=move || search.get().pending.search
            >
                "Search"
            </button>
        </form>
    }
}
