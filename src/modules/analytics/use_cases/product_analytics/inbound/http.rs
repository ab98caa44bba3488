use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::analytics::use_cases::product_analytics::handler::ProductAnalyticsError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ProductAnalyticsParams {
    pub owner_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ProductAnalyticsParams>,
) -> impl IntoResponse {
    match state
        .analytics_handler
        .handle(&params.owner_id, Utc::now())
        .await
    {
        Ok(portfolio) => Json(portfolio).into_response(),
        Err(error @ ProductAnalyticsError::InvalidArgument(_)) => {
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        Err(ProductAnalyticsError::Store(error)) => {
            tracing::error!(error = %error, "analytics query failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
