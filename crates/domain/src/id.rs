//! Typed identifier newtype for squirrel records.
//!
//! Unlike randomly generated identifiers, a [`SquirrelId`] is assigned by
//! the storage layer on insert (auto-incrementing, never reused), so there
//! is no constructor that invents a fresh one.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Squirrel`](crate::squirrel::Squirrel).
///
/// Serialises transparently as the inner integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SquirrelId(i64);

impl SquirrelId {
    /// Wrap a storage-assigned row id.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SquirrelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SquirrelId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
