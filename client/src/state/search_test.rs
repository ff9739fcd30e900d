use serde_json::json;

use super::*;

fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn loaded_state() -> SearchState {
    let mut state = SearchState::default();
    state.apply(SearchAction::GetRecordsSuccess(vec![
        record(json!({ "id": 1, "name": "a" })),
        record(json!({ "id": "two", "name": "b" })),
        record(json!({ "name": "no id" })),
    ]));
    state
}

fn column(name: &str, is_visible: bool) -> Column {
    Column { name: name.to_owned(), is_visible }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_first_page_unordered() {
    let state = SearchState::default();
    assert!(state.records.is_empty());
    assert_eq!(state.pagination, Pagination { current_page: 1, page_size: DEFAULT_PAGE_SIZE });
    assert_eq!(state.order_by, None);
    assert!(!state.pending.any());
}

#[test]
fn pagination_serializes_camel_case() {
    let json = serde_json::to_value(Pagination { current_page: 2, page_size: 10 }).unwrap();
    assert_eq!(json, json!({ "currentPage": 2, "pageSize": 10 }));
}

// =============================================================
// Search field, pagination, ordering
// =============================================================

#[test]
fn search_field_change_replaces_text() {
    let mut state = SearchState::default();
    state.apply(SearchAction::SearchFieldChange("name:a".to_owned()));
    assert_eq!(state.search_field, "name:a");
}

#[test]
fn change_pagination_clamps_to_one() {
    let mut state = SearchState::default();
    state.apply(SearchAction::ChangePagination { current_page: 0, page_size: 0 });
    assert_eq!(state.pagination, Pagination { current_page: 1, page_size: 1 });
    state.apply(SearchAction::ChangePagination { current_page: 4, page_size: 50 });
    assert_eq!(state.pagination, Pagination { current_page: 4, page_size: 50 });
}

#[test]
fn change_order_by_replaces_pair() {
    let mut state = SearchState::default();
    state.apply(SearchAction::ChangeOrderBy { field_name: "age".to_owned(), direction: SortDirection::Desc });
    assert_eq!(state.order_by, Some(OrderBy { field_name: "age".to_owned(), direction: SortDirection::Desc }));
}

#[test]
fn order_by_next_flips_same_field_and_resets_new_field() {
    let current = OrderBy { field_name: "age".to_owned(), direction: SortDirection::Asc };
    assert_eq!(OrderBy::next_for(Some(&current), "age").direction, SortDirection::Desc);
    assert_eq!(OrderBy::next_for(Some(&current), "name").direction, SortDirection::Asc);
    assert_eq!(OrderBy::next_for(None, "name").direction, SortDirection::Asc);
}

#[test]
fn sort_direction_parse_is_case_insensitive() {
    assert_eq!(SortDirection::parse("DESC"), Some(SortDirection::Desc));
    assert_eq!(SortDirection::parse(" asc "), Some(SortDirection::Asc));
    assert_eq!(SortDirection::parse("up"), None);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_and_deselect_single_row() {
    let mut state = loaded_state();
    state.apply(SearchAction::SelectRecordRow("1".to_owned()));
    assert!(state.selected.contains("1"));
    state.apply(SearchAction::DeselectRecordRow("1".to_owned()));
    assert!(state.selected.is_empty());
}

#[test]
fn select_all_skips_records_without_id() {
    let mut state = loaded_state();
    state.apply(SearchAction::SelectAllRecordRows);
    assert_eq!(state.selected_ids(), vec!["1".to_owned(), "two".to_owned()]);
    assert!(state.all_selected());

    state.apply(SearchAction::DeselectAllRecordRows);
    assert!(state.selected.is_empty());
    assert!(!state.all_selected());
}

#[test]
fn all_selected_is_false_without_records() {
    assert!(!SearchState::default().all_selected());
}

#[test]
fn new_results_drop_stale_selection() {
    let mut state = loaded_state();
    state.apply(SearchAction::SelectAllRecordRows);
    state.apply(SearchAction::GetRecordsSuccess(vec![record(json!({ "id": "two" }))]));
    assert_eq!(state.selected_ids(), vec!["two".to_owned()]);
    assert_eq!(state.records.len(), 1);
}

// =============================================================
// Columns
// =============================================================

#[test]
fn toggle_flips_one_column_and_ignores_out_of_range() {
    let mut state = SearchState::default();
    state.apply(SearchAction::GetRecordFieldsSuccess(vec![column("id", true), column("name", true)]));
    state.apply(SearchAction::VisibleColumnsToggle(1));
    assert_eq!(state.columns, vec![column("id", true), column("name", false)]);
    state.apply(SearchAction::VisibleColumnsToggle(9));
    assert_eq!(state.columns, vec![column("id", true), column("name", false)]);
}

#[test]
fn deselect_hides_every_column() {
    let mut state = SearchState::default();
    state.apply(SearchAction::GetRecordFieldsSuccess(vec![column("id", true), column("name", true)]));
    state.apply(SearchAction::VisibleColumnsDeselect);
    assert!(state.visible_columns().is_empty());
}

#[test]
fn visible_columns_keep_original_indexes() {
    let mut state = SearchState::default();
    state.apply(SearchAction::GetRecordFieldsSuccess(vec![column("id", false), column("name", true)]));
    let visible = state.visible_columns();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].0, 1);
    assert_eq!(visible[0].1.name, "name");
}

// =============================================================
// Pending markers
// =============================================================

#[test]
fn request_then_success_clears_pending() {
    let mut state = SearchState::default();
    state.apply(SearchAction::GetRecordFieldsRequest);
    state.apply(SearchAction::GetFilteredRecordsRequest);
    assert!(state.pending.fields && state.pending.search);

    state.apply(SearchAction::GetRecordFieldsSuccess(Vec::new()));
    state.apply(SearchAction::GetRecordsSuccess(Vec::new()));
    assert!(!state.pending.any());
}

#[test]
fn request_failed_clears_only_that_request() {
    let mut state = SearchState::default();
    state.apply(SearchAction::DeleteRecordRequest);
    state.apply(SearchAction::ApproveRecordsRequest);
    state.apply(SearchAction::RequestFailed(RequestKind::Delete));
    assert!(!state.pending.delete);
    assert!(state.pending.approve);

    state.apply(SearchAction::RequestFailed(RequestKind::Approve));
    assert_eq!(state.pending, Pending::default());
}

#[test]
fn fields_failure_keeps_search_pending() {
    let mut state = SearchState::default();
    state.apply(SearchAction::GetRecordFieldsRequest);
    state.apply(SearchAction::GetFilteredRecordsRequest);
    state.apply(SearchAction::RequestFailed(RequestKind::Fields));
    assert!(!state.pending.fields);
    assert!(state.pending.search);
}

#[test]
fn delete_success_removes_row_and_selection() {
    let mut state = loaded_state();
    state.apply(SearchAction::SelectRecordRow("1".to_owned()));
    state.apply(SearchAction::DeleteRecordRequest);
    state.apply(SearchAction::DeleteRecordSuccess("1".to_owned()));
    assert_eq!(state.records.len(), 2);
    assert!(state.selected.is_empty());
    assert!(!state.pending.delete);
}

#[test]
fn approve_success_clears_pending_only() {
    let mut state = loaded_state();
    state.apply(SearchAction::SelectAllRecordRows);
    state.apply(SearchAction::ApproveRecordsRequest);
    state.apply(SearchAction::ApproveRecordsSuccess);
    assert!(!state.pending.approve);
    assert_eq!(state.selected.len(), 2);
}
