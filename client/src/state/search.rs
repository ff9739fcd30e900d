//! Search page state and its reducer.
//!
//! DESIGN
//! ======
//! Every transition goes through [`SearchState::apply`], so the view-state
//! rules (selection pruning, pending markers, clamping) live in one place and
//! can be tested without a browser. Async work happens in `actions`; this
//! module never performs I/O.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::net::types::{Record, record_id};

/// Server-side paging window, serialized with the backend's field names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current_page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

/// Sort direction for server-side ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Case-insensitive parse of `asc` / `desc`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// A `(field name, direction)` pair controlling server-side sort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderBy {
    pub field_name: String,
    pub direction: SortDirection,
}

impl OrderBy {
    /// Order for a header click on `field`: the same field flips direction,
    /// a new field starts ascending.
    pub fn next_for(current: Option<&OrderBy>, field: &str) -> Self {
        let direction = match current {
            Some(order) if order.field_name == field => order.direction.flipped(),
            _ => SortDirection::Asc,
        };
        Self { field_name: field.to_owned(), direction }
    }
}

/// One record field as a table column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub is_visible: bool,
}

/// The four backend requests the page issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    Fields,
    Search,
    Delete,
    Approve,
}

/// Requests that can be in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pending {
    pub fields: bool,
    pub search: bool,
    pub delete: bool,
    pub approve: bool,
}

impl Pending {
    pub fn any(self) -> bool {
        self.fields || self.search || self.delete || self.approve
    }

    pub fn clear(&mut self, kind: RequestKind) {
        match kind {
            RequestKind::Fields => self.fields = false,
            RequestKind::Search => self.search = false,
            RequestKind::Delete => self.delete = false,
            RequestKind::Approve => self.approve = false,
        }
    }
}

/// Everything the search page renders.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub records: Vec<Record>,
    pub search_field: String,
    pub pagination: Pagination,
    pub order_by: Option<OrderBy>,
    pub selected: BTreeSet<String>,
    pub columns: Vec<Column>,
    pub pending: Pending,
}

/// State transitions, one per user intent or request outcome.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchAction {
    SearchFieldChange(String),
    SelectRecordRow(String),
    DeselectRecordRow(String),
    SelectAllRecordRows,
    DeselectAllRecordRows,
    ChangePagination { current_page: u32, page_size: u32 },
    ChangeOrderBy { field_name: String, direction: SortDirection },
    VisibleColumnsToggle(usize),
    VisibleColumnsDeselect,
    GetRecordFieldsRequest,
    GetRecordFieldsSuccess(Vec<Column>),
    GetFilteredRecordsRequest,
    GetRecordsSuccess(Vec<Record>),
    DeleteRecordRequest,
    DeleteRecordSuccess(String),
    ApproveRecordsRequest,
    ApproveRecordsSuccess,
    RequestFailed(RequestKind),
}

impl SearchState {
    pub fn apply(&mut self, action: SearchAction) {
        match action {
            SearchAction::SearchFieldChange(value) => self.search_field = value,
            SearchAction::SelectRecordRow(id) => {
                self.selected.insert(id);
            }
            SearchAction::DeselectRecordRow(id) => {
                self.selected.remove(&id);
            }
            SearchAction::SelectAllRecordRows => {
                self.selected = self.records.iter().filter_map(record_id).collect();
            }
            SearchAction::DeselectAllRecordRows => self.selected.clear(),
            SearchAction::ChangePagination { current_page, page_size } => {
                self.pagination = Pagination { current_page: current_page.max(1), page_size: page_size.max(1) };
            }
            SearchAction::ChangeOrderBy { field_name, direction } => {
                self.order_by = Some(OrderBy { field_name, direction });
            }
            SearchAction::VisibleColumnsToggle(index) => {
                if let Some(column) = self.columns.get_mut(index) {
                    column.is_visible = !column.is_visible;
                }
            }
            SearchAction::VisibleColumnsDeselect => {
                for column in &mut self.columns {
                    column.is_visible = false;
                }
            }
            SearchAction::GetRecordFieldsRequest => self.pending.fields = true,
            SearchAction::GetRecordFieldsSuccess(columns) => {
                self.columns = columns;
                self.pending.fields = false;
            }
            SearchAction::GetFilteredRecordsRequest => self.pending.search = true,
            SearchAction::GetRecordsSuccess(records) => {
                let present: BTreeSet<String> = records.iter().filter_map(record_id).collect();
                self.selected.retain(|id| present.contains(id));
                self.records = records;
                self.pending.search = false;
            }
            SearchAction::DeleteRecordRequest => self.pending.delete = true,
            SearchAction::DeleteRecordSuccess(id) => {
                self.records.retain(|r| record_id(r).as_deref() != Some(id.as_str()));
                self.selected.remove(&id);
                self.pending.delete = false;
            }
            SearchAction::ApproveRecordsRequest => self.pending.approve = true,
            SearchAction::ApproveRecordsSuccess => self.pending.approve = false,
            SearchAction::RequestFailed(kind) => self.pending.clear(kind),
        }
    }

    /// Visible columns with their original indexes.
    pub fn visible_columns(&self) -> Vec<(usize, &Column)> {
        self.columns.iter().enumerate().filter(|(_, c)| c.is_visible).collect()
    }

    /// Every selectable record is selected, and there is at least one.
    pub fn all_selected(&self) -> bool {
        let mut ids = self.records.iter().filter_map(record_id).peekable();
        ids.peek().is_some() && ids.all(|id| self.selected.contains(&id))
    }

    /// Selected ids, sorted, for `POST /approve`.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}
