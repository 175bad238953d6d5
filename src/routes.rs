// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{catalog, results, session},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges the catalog and session sub-routers.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (question bank, session store, config).
pub fn create_router(state: AppState) -> Router {
    let origin: HeaderValue = state
        .config
        .frontend_origin
        .parse()
        .expect("FRONTEND_ORIGIN is not a valid origin");

    let cors = CorsLayer::new()
        .allow_origin([origin])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let catalog_routes = Router::new()
        .route("/questions", get(catalog::list_questions))
        .route("/dimensions", get(catalog::list_dimensions));

    let session_routes = Router::new()
        .route("/", post(session::create_session))
        .route(
            "/{id}",
            get(session::get_session).delete(session::delete_session),
        )
        .route("/{id}/answer", post(session::submit_answer))
        .route("/{id}/next", post(session::go_next))
        .route("/{id}/previous", post(session::go_previous))
        .route("/{id}/reset", post(session::reset_session))
        .route("/{id}/results", get(results::get_results));

    Router::new()
        .nest("/api", catalog_routes)
        .nest("/api/sessions", session_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
