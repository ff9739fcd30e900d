//! Record table with selection, ordering, delete, and approve.
//!
//! DESIGN
//! ======
//! Only visible columns are rendered. Rows without a usable `id` are shown
//! but cannot be selected or deleted, since every row action addresses the
//! backend by id.

use leptos::prelude::*;

use crate::actions::SearchActions;
use crate::net::types::{Record, display_value, record_id};
use crate::state::search::SortDirection;

#[component]
pub fn RecordList() -> impl IntoView {
    let actions = expect_context::<SearchActions>();
    let search = actions.state();

    let on_select_all = move |ev: leptos::ev::Event| {
        if event_target_checked(&ev) {
            actions.select_all_record_rows();
        } else {
            actions.deselect_all_record_rows();
        }
    };

    let header = move || {
        let state = search.get();
        state
            .visible_columns()
            .into_iter()
            .map(|(_, column)| {
                let name = column.name.clone();
                let marker = match &state.order_by {
                    Some(order) if order.field_name == name => match order.direction {
                        SortDirection::Asc => " ▲",
                        SortDirection::Desc => " ▼",
                    },
                    _ => "",
                };
                let field = name.clone();
                view! {
                    <th class="record-list__heading" on:click=move |_| actions.toggle_order_by(&field)>
                        {name}
                        {marker}
                    </th>
                }
            })
            .collect::<Vec<_>>()
    };

    let rows = move || {
        let state = search.get();
        let fields: Vec<String> = state.visible_columns().into_iter().map(|(_, c)| c.name.clone()).collect();
        state
            .records
            .iter()
            .map(|record| {
                let id = record_id(record);
                let checked = id.as_ref().is_some_and(|id| state.selected.contains(id));
                view! { <RecordRow record=record.clone() id=id fields=fields.clone() checked=checked/> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="record-list">
            <div class="record-list__actions">
                <span class="record-list__count">
                    {move || format!("{} selected", search.get().selected.len())}
                </span>
                <button
                    class="btn btn--primary record-list__approve"
                    disabled=move || search.get().pending.approve
                    on:click=move |_| actions.approve_selected()
                >
                    "Approve"
                </button>
            </div>
            <Show
                when=move || !search.get().records.is_empty()
                fallback=move || {
                    view! {
                        <p class="record-list__empty">
                            {move || if search.get().pending.search { "Loading records..." } else { "No records" }}
                        </p>
                    }
                }
            >
                <table class="record-list__table">
                    <thead>
                        <tr>
                            <th class="record-list__select">
                                <input
                                    type="checkbox"
                                    prop:checked=move || search.get().all_selected()
                                    on:change=on_select_all
                                />
                            </th>
                            {header}
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
        </section>
    }
}

#[component]
fn RecordRow(record: Record, id: Option<String>, fields: Vec<String>, checked: bool) -> impl IntoView {
    let actions = expect_context::<SearchActions>();
    let cells = fields
        .iter()
        .map(|field| view! { <td>{display_value(record.get(field))}</td> })
        .collect::<Vec<_>>();

    let select_id = id.clone();
    let on_toggle = move |ev: leptos::ev::Event| {
        let Some(id) = select_id.clone() else {
            return;
        };
        if event_target_checked(&ev) {
            actions.select_record_row(id);
        } else {
            actions.deselect_record_row(id);
        }
    };

    let delete_id = id.clone();
    let on_delete = move |_| {
        if let Some(id) = delete_id.clone() {
            actions.delete_record(id);
        }
    };

    let row_class = if checked { "record-list__row record-list__row--selected" } else { "record-list__row" };

    view! {
        <tr class=row_class>
            <td class="record-list__select">
                <input type="checkbox" prop:checked=checked disabled=id.is_none() on:change=on_toggle/>
            </td>
            {cells}
            <td class="record-list__row-actions">
                <button class="btn btn--danger" disabled=id.is_none() on:click=on_delete title="Delete record">
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
