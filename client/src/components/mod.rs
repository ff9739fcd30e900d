//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the search page's pieces. They read state through the
//! [`SearchActions`](crate::actions::SearchActions) handle provided as
//! context and report user intents back through its methods.

pub mod alert_banner;
pub mod column_picker;
pub mod pagination_bar;
pub mod record_list;
pub mod search_bar;
