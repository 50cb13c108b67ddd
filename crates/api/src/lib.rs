//! Lead tracker API server library.
//!
//! Exposes the building blocks (config, state, error handling, response
//! envelope, routes) so integration tests and the binary entrypoint use
//! the exact same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
