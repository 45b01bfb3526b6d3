mod error;
mod handlers;

pub use error::{panic_response, ApiError, ApiJson, ErrorBody};

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::assistant::SuggestionEngine;
use crate::config::ServerConfig;
use crate::drc::DrcEngine;
use crate::service::DesignService;
use crate::store::DesignStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub designs: DesignService,
    pub assistant: Arc<SuggestionEngine>,
}

impl AppState {
    pub fn new(store: DesignStore) -> Self {
        Self {
            designs: DesignService::new(store, Arc::new(DrcEngine::with_default_checks())),
            assistant: Arc::new(SuggestionEngine::with_default_rules()),
        }
    }
}

/// Router with local-development CORS settings.
pub fn create_router(store: DesignStore) -> Router {
    create_router_with_config(AppState::new(store), &ServerConfig::local())
}

pub fn create_router_with_config(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        // Designs
        .route(
            "/designs",
            get(handlers::list_designs).post(handlers::create_design),
        )
        .route(
            "/designs/{id}",
            get(handlers::get_design)
                .put(handlers::update_design)
                .delete(handlers::delete_design),
        )
        .route("/designs/{id}/validate", post(handlers::validate_design))
        // Assistant
        .route("/ml/suggestions", post(handlers::get_suggestions))
        .route("/ml/explain-error", post(handlers::explain_error))
        .route("/ml/next-action", post(handlers::next_action))
        // Health
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(config.cors_layer()),
        )
        .with_state(state)
}
