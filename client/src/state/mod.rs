//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`search` for records and view settings,
//! `alerts` for transient banners) so components depend on small models.

pub mod alerts;
pub mod search;
