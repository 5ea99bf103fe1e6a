/// HTTP router
use crate::{api, state::AppState};
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// CORS is open to every origin.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        // Users
        .route("/user", post(api::users::create_user))
        .route("/users", get(api::users::list_users))
        .route("/user/:id", get(api::users::get_user))
        // Guides
        .route("/guide/:id", put(api::guides::update_guide))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
