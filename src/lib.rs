#![deny(missing_docs)]

//! Core library for the Tea House HTTP service.

/// HTTP routing, handlers, and request logging.
pub mod api;
/// HTTP client for talking to a running server.
pub mod client;
/// Environment-driven configuration management.
pub mod config;
/// Structured logging and tracing setup.
pub mod logging;
/// In-memory tea record store.
pub mod store;
