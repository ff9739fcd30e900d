//! Column visibility checkboxes.
//!
//! Every change is mirrored into the `columns` URL parameter by the action
//! handle, so the current column set survives reloads and shared links.

use leptos::prelude::*;

use crate::actions::SearchActions;

#[component]
pub fn ColumnPicker() -> impl IntoView {
    let actions = expect_context::<SearchActions>();
    let search = actions.state();

    view! {
        <Show when=move || !search.get().columns.is_empty()>
            <fieldset class="column-picker">
                <legend>"Columns"</legend>
                {move || {
                    search
                        .get()
                        .columns
                        .into_iter()
                        .enumerate()
                        .map(|(index, column)| {
                            view! {
                                <label class="column-picker__item">
                                    <input
                                        type="checkbox"
                                        prop:checked=column.is_visible
                                        on:change=move |_| actions.visible_column_toggle(index)
                                    />
                                    {column.name}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button class="btn column-picker__hide-all" on:click=move |_| actions.visible_columns_deselect()>
                    "Hide all"
                </button>
            </fieldset>
        </Show>
    }
}
