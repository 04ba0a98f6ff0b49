//! # Chirpy Backend Library
//!
//! Backend for a small microblogging service: users post short "chirps",
//! which are length-checked and scrubbed of a fixed denylist before they are
//! stored. Visits to the static app are counted for an admin report.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: asynchronous SQLite access
//! - **Tokio**: async runtime
//! - **Serde**: JSON request and response bodies
//!
//! ## Core Components
//!
//! - [`moderation`]: chirp length rules and denylist redaction
//! - [`response`]: JSON response encoding and the request body extractor
//! - [`error`]: error kinds with their HTTP status and message
//! - [`store`]: user and chirp persistence with per-call timeouts
//! - [`routes`]: HTTP handlers and the router
//! - [`metrics`] / [`middleware`]: the app visit counter
//! - [`auth`]: password hashing
//! - [`config`], [`db`], [`state`], [`types`]: configuration, schema, shared state, DTOs

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod moderation;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
