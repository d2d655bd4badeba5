// src/routes.rs

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    docs,
    handlers::{auth, content, results},
    state::AppState,
};

/// Builds the CORS layer. With no configured origins everything is allowed.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Assembles the main application router.
///
/// * Public routes: signup, login, sentences, result submission, progress.
/// * Admin routes under `/admin` (no authentication, as in the classroom deployment).
/// * Global middleware: Trace, CORS.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login));

    let content_routes = Router::new().route("/sentences", get(content::list_sentences));

    let result_routes = Router::new()
        .route("/submit-results", post(results::submit_result))
        .route("/user-progress/{student_name}", get(results::get_progress));

    let admin_routes = Router::new()
        .route("/upload-sentence", post(content::upload_sentence))
        .route("/stats", get(results::get_stats))
        .route("/stats/summary", get(results::get_stats_summary));

    Router::new()
        .merge(auth_routes)
        .merge(content_routes)
        .merge(result_routes)
        .nest("/admin", admin_routes)
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
