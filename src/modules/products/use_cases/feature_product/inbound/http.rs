use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::products::use_cases::feature_product::command::FeatureProduct;
use crate::shell::http::application_error_status;
use crate::shell::state::AppState;

/// Sent once a featured placement has been paid for.
#[derive(Deserialize)]
pub struct FeatureProductBody {
    pub placement_ref: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    body: Result<Json<FeatureProductBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = FeatureProduct {
        product_id,
        placement_ref: body.placement_ref,
        featured_at: Utc::now().timestamp_millis(),
    };

    match state.product_handler.feature(command).await {
        Ok(appended) => match state.projector.project(&appended).await {
            Ok(()) => StatusCode::NO_CONTENT.into_response(),
            Err(error) => {
                tracing::error!(error = %error, "projection failed after feature");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        Err(error) => application_error_status(&error).into_response(),
    }
}
