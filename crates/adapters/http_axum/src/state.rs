//! Shared application state for axum handlers.

use std::sync::Arc;

use scurry_app::ports::SquirrelRepository;
use scurry_app::services::squirrel_service::SquirrelService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the underlying type itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<SR> {
    /// Squirrel CRUD service.
    pub squirrel_service: Arc<SquirrelService<SR>>,
}

impl<SR> Clone for AppState<SR> {
    fn clone(&self) -> Self {
        Self {
            squirrel_service: Arc::clone(&self.squirrel_service),
        }
    }
}

impl<SR> AppState<SR>
where
    SR: SquirrelRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(squirrel_service: SquirrelService<SR>) -> Self {
        Self {
            squirrel_service: Arc::new(squirrel_service),
        }
    }
}
