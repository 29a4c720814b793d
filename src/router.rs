use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{index, search, swimmer};
use crate::service::SwimmerService;

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct RegistryState {
    pub service: Arc<SwimmerService>,
}

impl RegistryState {
    pub fn new(service: SwimmerService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn registry_router(state: RegistryState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route(
            "/swimmer/{id}",
            get(swimmer::get_swimmer)
                .put(swimmer::update_swimmer)
                .delete(swimmer::delete_swimmer),
        )
        .route("/list_swimmers", get(swimmer::list_swimmers))
        .route(
            "/search_swimmer",
            get(search::search_form).post(search::search_submit),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
