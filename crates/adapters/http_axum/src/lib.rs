//! # scurry-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the squirrel REST API (`/squirrels`, `/squirrels/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Answer every unrouted (method, path) combination with the plain-text
//!   `404 Not Found` fallback — including method mismatches on known paths,
//!   which would otherwise surface as 405
//!
//! ## Dependency rule
//! Depends on `scurry-app` (for the port trait and service) and
//! `scurry-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
