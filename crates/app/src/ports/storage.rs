//! Storage port — the repository trait for squirrel persistence.

use std::future::Future;

use scurry_domain::error::ScurryError;
use scurry_domain::id::SquirrelId;
use scurry_domain::squirrel::{Squirrel, SquirrelAttributes};

/// Persistence operations for squirrel records.
///
/// Ids are allocated by the implementation on [`create`](Self::create) and
/// are never reused, even after deletion. `update` and `delete` report
/// whether a record with the given id existed; translating a `false` into a
/// not-found error is the service layer's job.
pub trait SquirrelRepository {
    /// Store a new record and return it with its freshly assigned id.
    fn create(
        &self,
        attrs: SquirrelAttributes,
    ) -> impl Future<Output = Result<Squirrel, ScurryError>> + Send;

    /// Fetch one record by id.
    fn get_by_id(
        &self,
        id: SquirrelId,
    ) -> impl Future<Output = Result<Option<Squirrel>, ScurryError>> + Send;

    /// Fetch all records, ascending by id. Re-reads current state on each
    /// call; an empty result is valid.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Squirrel>, ScurryError>> + Send;

    /// Overwrite name and size of an existing record, leaving the id
    /// unchanged. Returns `false` when no record matched.
    fn update(
        &self,
        id: SquirrelId,
        attrs: SquirrelAttributes,
    ) -> impl Future<Output = Result<bool, ScurryError>> + Send;

    /// Remove a record permanently. Returns `false` when no record matched.
    fn delete(&self, id: SquirrelId) -> impl Future<Output = Result<bool, ScurryError>> + Send;
}
