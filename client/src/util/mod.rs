//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure parsing and formatting helpers live here so actions and components
//! can share them and tests can exercise them without a browser.

pub mod columns;
pub mod query;
pub mod url_params;
