//! Composes resource, probe and documentation routes into one router.

use crate::config::Settings;
use crate::doc;
use crate::routes::{common_routes, course_routes, user_routes};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

/// Request bodies larger than this are rejected with 413.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Mount resources under `settings.api_prefix`, probes at the root, and the OpenAPI document and Swagger UI at their configured paths.
pub fn build_app(state: AppState, settings: &Settings) -> Router {
    let api = Router::new()
        .merge(course_routes(state.clone()))
        .merge(user_routes(state.clone()));

    let routed = if settings.api_prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(&settings.api_prefix, api)
    };

    let docs = SwaggerUi::new(settings.docs_url.clone())
        .url(settings.openapi_url.clone(), doc::openapi(&settings.api_prefix));

    routed
        .merge(common_routes(state))
        .merge(docs)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
}
