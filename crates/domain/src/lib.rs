//! # scurry-domain
//!
//! Pure domain model for the scurry record-management service.
//!
//! ## Responsibilities
//! - Foundational types: the [`SquirrelId`](id::SquirrelId) identifier and
//!   error conventions
//! - Define the **Squirrel** record and the validated attribute pair used
//!   for creating and updating one
//! - Contain all invariant enforcement (non-empty name and size)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod squirrel;
