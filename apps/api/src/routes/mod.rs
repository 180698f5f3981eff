pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::interview::handlers;
use crate::interview::upload::MAX_UPLOAD_BYTES;
use crate::state::AppState;

/// Room for the multipart framing and the preferences field on top of the file.
const MAX_SUBMISSION_BYTES: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let resume_routes = Router::new()
        .route(
            "/submit-resume",
            post(handlers::handle_submit_resume)
                .layer(DefaultBodyLimit::max(MAX_SUBMISSION_BYTES)),
        )
        .route("/latest-resume", post(handlers::handle_latest_resume))
        .route(
            "/interview-questions",
            get(handlers::handle_latest_interview_questions),
        )
        .route(
            "/interview-questions/:resume_id",
            get(handlers::handle_interview_questions),
        )
        .route(
            "/submit-full-interview",
            post(handlers::handle_submit_full_interview),
        )
        .route("/:resume_id", delete(handlers::handle_delete_resume));

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/resume", resume_routes)
        .with_state(state)
}

/// CORS restricted to the configured frontend origins, credentials allowed.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
