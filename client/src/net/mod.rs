//! Networking modules for the records REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` normalizes failures into user-facing
//! messages, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
