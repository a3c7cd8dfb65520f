//! # scurry-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that the storage adapter must implement
//!   (driven/outbound port): [`ports::SquirrelRepository`]
//! - Provide the use-case layer: [`services::squirrel_service::SquirrelService`]
//!   — create, get, list, update, delete — translating repository results
//!   into domain errors
//!
//! ## Dependency rule
//! Depends on `scurry-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
