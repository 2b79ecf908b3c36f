pub mod docs;
pub mod server;
pub mod strings;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// Build the application route table / 构建应用路由表
///
/// The static `/strings/filter-by-natural-language` segment takes priority
/// over the `:value` capture, so the query route is always reachable.
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(docs::root))
        .route("/docs", get(docs::api_docs))
        .route("/api/health", get(server::health_check))
        .route(
            "/strings",
            get(strings::list_strings).post(strings::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(strings::natural_language_filter),
        )
        .route(
            "/strings/:value",
            get(strings::retrieve_string).delete(strings::remove_string),
        )
        .with_state(state)
}
