//! Axum router assembly.
//!
//! The route table is enumerated explicitly: the six supported
//! (method, path) pairs dispatch to handlers, and everything else — unknown
//! collections, method mismatches on known paths, extra path segments —
//! falls through to the shared plain-text `404 Not Found` handler. Method
//! routers carry their own fallback so a mismatch yields 404 rather than
//! axum's default 405.

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use scurry_app::ports::SquirrelRepository;

use crate::api::squirrels;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR>(state: AppState<SR>) -> Router
where
    SR: SquirrelRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/squirrels",
            get(squirrels::list::<SR>)
                .post(squirrels::create::<SR>)
                .fallback(not_found),
        )
        .route(
            "/squirrels/{id}",
            get(squirrels::get::<SR>)
                .put(squirrels::update::<SR>)
                .delete(squirrels::delete::<SR>)
                .fallback(not_found),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
