//! Domain logic for the lead tracker.
//!
//! Pure types and functions shared by the `db` and `api` crates: lead
//! validation and normalization, list-query parsing, credential checking,
//! and the workspace-wide error type. No HTTP, no SQL.

pub mod auth;
pub mod error;
pub mod lead;
pub mod query;
pub mod types;
