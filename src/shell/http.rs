use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};

use crate::modules::analytics::use_cases::product_analytics::inbound::http as analytics_http;
use crate::modules::analytics::use_cases::record_page_view::inbound::http as page_view_http;
use crate::modules::products::application::errors::ApplicationError;
use crate::modules::products::use_cases::compose_feed::inbound::http as feed_http;
use crate::modules::products::use_cases::feature_product::inbound::http as feature_http;
use crate::modules::products::use_cases::like_product::inbound::http as like_http;
use crate::modules::products::use_cases::submit_product::inbound::http as submit_http;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/feed", get(feed_http::handle))
        .route("/analytics", get(analytics_http::handle))
        .route("/products", post(submit_http::handle))
        .route("/products/{product_id}/likes", post(like_http::handle))
        .route("/products/{product_id}/feature", post(feature_http::handle))
        .route("/page-views", post(page_view_http::handle))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Status code for a failed product command.
pub fn application_error_status(error: &ApplicationError) -> StatusCode {
    match error {
        error if error.is_not_found() => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_) => StatusCode::CONFLICT,
        ApplicationError::EventStore(EventStoreError::VersionMismatch { .. }) => {
            StatusCode::CONFLICT
        }
        ApplicationError::EventStore(_) | ApplicationError::Outbox(_) => {
            tracing::error!(error = %error, "product command failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
