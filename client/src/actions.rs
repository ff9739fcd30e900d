//! Action creators for the search page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call one [`SearchActions`] method per user intent. Each method
//! issues at most one HTTP request: mark the request pending, call the API,
//! then apply the outcome to [`SearchState`] and push an alert. Some outcomes
//! also rewrite the URL query so the view can be shared as a link.
//!
//! The request planning pieces (`prepare_search`, `url_params_for`, ...) are
//! free functions so the network-free parts can be tested directly.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;

use crate::config::{COLUMN_PARAMETER_NAME, SEARCH_QUERY_PARAMETER_NAME};
use crate::net::error::HttpError;
use crate::net::types::{Record, SearchRequest};
use crate::state::alerts::{AlertState, AlertStatus};
use crate::state::search::{OrderBy, RequestKind, SearchAction, SearchState, SortDirection};
use crate::util::columns::{columns_from_fields, visible_columns_mask};
use crate::util::query::{QueryError, parse_query_object};
use crate::util::url_params::{self, InitialQuery, UrlParams};

/// Side effects to run after a successful search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub show_alert: bool,
    pub update_url: bool,
}

impl SearchOptions {
    /// Explicit user search: report the count and rewrite the URL.
    pub const INTERACTIVE: Self = Self { show_alert: true, update_url: true };
    /// Follow-up refresh after a change the user already got feedback for.
    pub const REFRESH: Self = Self { show_alert: false, update_url: true };
    /// Mount-time load: the URL is already the source of the state.
    pub const INITIAL: Self = Self { show_alert: false, update_url: false };
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::INTERACTIVE
    }
}

pub const RECORD_DELETED_MESSAGE: &str = "Record deleted";
pub const APPROVED_MESSAGE: &str = "Approved successfully";
pub const NOTHING_SELECTED_MESSAGE: &str = "There are no records selected";

/// Build the `POST /search` body for `query` against the current state.
///
/// # Errors
///
/// Returns the [`QueryError`] describing why `query` is not valid search syntax.
pub fn prepare_search(state: &SearchState, query: &str) -> Result<SearchRequest, QueryError> {
    let search = parse_query_object(query)?;
    Ok(SearchRequest::new(search, state.pagination, state.order_by.as_ref()))
}

/// URL parameters that replace the current ones after a search for `query`.
pub fn search_url_base(query: &str) -> UrlParams {
    let mut params = UrlParams::new();
    if !query.is_empty() {
        params.insert(SEARCH_QUERY_PARAMETER_NAME.to_owned(), query.to_owned());
    }
    params
}

/// Merge the view state (columns, pagination, order-by) into `base`.
///
/// The column mask is only written once fields are known, so a URL mask is
/// not clobbered before `GET /fields` answers.
pub fn url_params_for(mut base: UrlParams, state: &SearchState) -> UrlParams {
    if !state.columns.is_empty() {
        base.insert(COLUMN_PARAMETER_NAME.to_owned(), visible_columns_mask(&state.columns).to_string());
    }
    url_params::merge_pagination(&mut base, &state.pagination);
    url_params::merge_order_by(&mut base, state.order_by.as_ref());
    base
}

pub fn found_message(count: usize) -> String {
    format!("Found {count} records")
}

/// Parse a page number or size from text, keeping `current` when the text is
/// missing or not a positive integer.
pub fn parse_page_value(raw: Option<&str>, current: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok()).filter(|v| *v > 0).unwrap_or(current)
}

/// Handle over the search page's stores. `Copy`, so event handlers and async
/// tasks can each hold one.
#[derive(Clone, Copy)]
pub struct SearchActions {
    search: RwSignal<SearchState>,
    alerts: RwSignal<AlertState>,
    location_search: Signal<String>,
    push_url: Callback<String>,
}

impl SearchActions {
    /// `location_search` is the current `?query` string; `push_url` receives
    /// a new query string (without `?`) to navigate to.
    pub fn new(
        search: RwSignal<SearchState>,
        alerts: RwSignal<AlertState>,
        location_search: Signal<String>,
        push_url: Callback<String>,
    ) -> Self {
        Self { search, alerts, location_search, push_url }
    }

    pub fn state(&self) -> RwSignal<SearchState> {
        self.search
    }

    pub fn alerts(&self) -> RwSignal<AlertState> {
        self.alerts
    }

    fn dispatch(&self, action: SearchAction) {
        self.search.update(|s| s.apply(action));
    }

    /// Push an alert and schedule its dismissal.
    pub fn show_alert(&self, message: impl Into<String>, status: AlertStatus) {
        let id = self.alerts.try_update(|a| a.push(message, status));
        #[cfg(feature = "hydrate")]
        if let Some(id) = id {
            let alerts = self.alerts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::config::ALERT_TIMEOUT_MS).await;
                alerts.update(|a| a.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }

    pub fn dismiss_alert(&self, id: u64) {
        self.alerts.update(|a| a.dismiss(id));
    }

    /// Clear the failed request's pending marker and report the error.
    pub(crate) fn fail(&self, kind: RequestKind, err: &HttpError) {
        #[cfg(feature = "hydrate")]
        log::warn!("{kind:?} request failed: {err}");
        self.dispatch(SearchAction::RequestFailed(kind));
        self.show_alert(err.user_message(), AlertStatus::Error);
    }

    // =========================================================================
    // SYNCHRONOUS STATE CHANGES
    // =========================================================================

    pub fn search_field_change(&self, value: String) {
        self.dispatch(SearchAction::SearchFieldChange(value));
    }

    pub fn fill_search_input(&self, query: String) {
        self.search_field_change(query);
    }

    pub fn select_record_row(&self, record_id: String) {
        self.dispatch(SearchAction::SelectRecordRow(record_id));
    }

    pub fn deselect_record_row(&self, record_id: String) {
        self.dispatch(SearchAction::DeselectRecordRow(record_id));
    }

    pub fn select_all_record_rows(&self) {
        self.dispatch(SearchAction::SelectAllRecordRows);
    }

    pub fn deselect_all_record_rows(&self) {
        self.dispatch(SearchAction::DeselectAllRecordRows);
    }

    pub fn change_pagination(&self, current_page: u32, page_size: u32) {
        self.dispatch(SearchAction::ChangePagination { current_page, page_size });
    }

    /// Text variant of [`Self::change_pagination`] for URL and form values.
    pub fn change_pagination_str(&self, current_page: Option<&str>, page_size: Option<&str>) {
        let current = self.search.get_untracked().pagination;
        self.change_pagination(
            parse_page_value(current_page, current.current_page),
            parse_page_value(page_size, current.page_size),
        );
    }

    pub fn change_order_by(&self, field_name: String, direction: SortDirection) {
        self.dispatch(SearchAction::ChangeOrderBy { field_name, direction });
    }

    pub fn visible_column_toggle(&self, index: usize) {
        self.dispatch(SearchAction::VisibleColumnsToggle(index));
        self.update_url_params(None);
    }

    pub fn visible_columns_deselect(&self) {
        self.dispatch(SearchAction::VisibleColumnsDeselect);
        self.update_url_params(None);
    }

    /// Rewrite the URL query from `base` (or the current URL) plus view state.
    pub fn update_url_params(&self, base: Option<UrlParams>) {
        let base = base.unwrap_or_else(|| url_params::parse(&self.location_search.get_untracked()));
        let params = url_params_for(base, &self.search.get_untracked());
        self.push_url.run(url_params::stringify(&params));
    }

    // =========================================================================
    // REQUESTS
    // =========================================================================

    /// Load field names from `GET /fields`; `selected_columns` is the URL
    /// bitmask of visible columns.
    pub fn get_record_fields(&self, selected_columns: Option<u64>) {
        self.dispatch(SearchAction::GetRecordFieldsRequest);
        #[cfg(feature = "hydrate")]
        {
            let this = *self;
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_fields().await {
                    Ok(fields) => this.fields_loaded(fields, selected_columns),
                    Err(e) => this.fail(RequestKind::Fields, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = selected_columns;
    }

    /// Search for `query` with the current pagination and ordering.
    ///
    /// Invalid search syntax is reported as an alert and sends nothing.
    pub fn get_filtered_records(&self, query: String, options: SearchOptions) {
        let request = match prepare_search(&self.search.get_untracked(), &query) {
            Ok(request) => request,
            Err(e) => {
                self.show_alert(e.to_string(), AlertStatus::Error);
                return;
            }
        };
        self.dispatch(SearchAction::GetFilteredRecordsRequest);
        #[cfg(feature = "hydrate")]
        {
            let this = *self;
            leptos::task::spawn_local(async move {
                match crate::net::api::search_records(&request).await {
                    Ok(records) => {
                        log::debug!("search returned {} records", records.len());
                        this.search_succeeded(records, &query, options);
                    }
                    Err(e) => this.fail(RequestKind::Search, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, options);
    }

    /// Re-run the search for the current field text without an alert.
    pub fn refresh(&self) {
        let query = self.search.get_untracked().search_field;
        self.get_filtered_records(query, SearchOptions::REFRESH);
    }

    /// Delete one record, then refresh the list.
    pub fn delete_record(&self, record_id: String) {
        self.dispatch(SearchAction::DeleteRecordRequest);
        #[cfg(feature = "hydrate")]
        {
            let this = *self;
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_record(&record_id).await {
                    Ok(()) => this.delete_succeeded(record_id),
                    Err(e) => this.fail(RequestKind::Delete, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = record_id;
    }

    /// Approve `record_ids`, clear the selection, then refresh the list.
    pub fn approve_records(&self, record_ids: Vec<String>) {
        if record_ids.is_empty() {
            self.show_alert(NOTHING_SELECTED_MESSAGE, AlertStatus::Error);
            return;
        }
        self.dispatch(SearchAction::ApproveRecordsRequest);
        #[cfg(feature = "hydrate")]
        {
            let this = *self;
            leptos::task::spawn_local(async move {
                match crate::net::api::approve_records(&record_ids).await {
                    Ok(()) => this.approve_succeeded(),
                    Err(e) => this.fail(RequestKind::Approve, &e),
                }
            });
        }
    }

    /// Approve whatever is currently selected.
    pub fn approve_selected(&self) {
        self.approve_records(self.search.get_untracked().selected_ids());
    }

    /// Mount-time load: restore state from URL parameters, fetch fields, and
    /// search without an alert or URL rewrite.
    pub fn get_initial_records(&self, params: &UrlParams) {
        let initial = InitialQuery::from_params(params);
        let query = initial.search_query.unwrap_or_default();
        if !query.is_empty() {
            self.fill_search_input(query.clone());
        }
        self.change_pagination_str(initial.current_page.as_deref(), initial.page_size.as_deref());
        if let Some(order) = initial.order_by {
            self.change_order_by(order.field_name, order.direction);
        }
        self.get_record_fields(initial.columns);
        self.get_filtered_records(query, SearchOptions::INITIAL);
    }

    // =========================================================================
    // REQUEST OUTCOMES
    // =========================================================================

    /// `GET /fields` answered: store columns with visibility from `mask`.
    pub(crate) fn fields_loaded(&self, fields: Vec<String>, mask: Option<u64>) {
        self.dispatch(SearchAction::GetRecordFieldsSuccess(columns_from_fields(fields, mask)));
    }

    /// `POST /search` answered for `query`.
    pub(crate) fn search_succeeded(&self, records: Vec<Record>, query: &str, options: SearchOptions) {
        let count = records.len();
        self.dispatch(SearchAction::GetRecordsSuccess(records));
        if options.update_url {
            self.update_url_params(Some(search_url_base(query)));
        }
        if options.show_alert {
            self.show_alert(found_message(count), AlertStatus::Success);
        }
    }

    /// `DELETE /delete/{id}` answered: drop the row and refresh.
    pub(crate) fn delete_succeeded(&self, record_id: String) {
        self.dispatch(SearchAction::DeleteRecordSuccess(record_id));
        self.refresh();
        self.show_alert(RECORD_DELETED_MESSAGE, AlertStatus::Success);
    }

    /// `POST /approve` answered: clear the selection and refresh.
    pub(crate) fn approve_succeeded(&self) {
        self.dispatch(SearchAction::ApproveRecordsSuccess);
        self.show_alert(APPROVED_MESSAGE, AlertStatus::Success);
        self.dispatch(SearchAction::DeselectAllRecordRows);
        self.refresh();
    }

    // =========================================================================
    // VIEW SHORTCUTS
    // =========================================================================

    /// Header click: flip or start ordering by `field`, then refresh.
    pub fn toggle_order_by(&self, field: &str) {
        let next = OrderBy::next_for(self.search.get_untracked().order_by.as_ref(), field);
        self.change_order_by(next.field_name, next.direction);
        self.refresh();
    }

    pub fn change_page(&self, current_page: u32) {
        let page_size = self.search.get_untracked().pagination.page_size;
        self.change_pagination(current_page, page_size);
        self.refresh();
    }

    /// Changing the page size returns to the first page.
    pub fn change_page_size(&self, page_size: u32) {
        self.change_pagination(1, page_size);
        self.refresh();
    }
}
