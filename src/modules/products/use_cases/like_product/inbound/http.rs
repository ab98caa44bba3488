use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::products::use_cases::like_product::command::LikeProduct;
use crate::shell::http::application_error_status;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LikeProductBody {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    body: Result<Json<LikeProductBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = LikeProduct {
        product_id,
        user_id: body.user_id,
        liked_at: Utc::now().timestamp_millis(),
    };

    match state.product_handler.like(command).await {
        Ok(appended) => match state.projector.project(&appended).await {
            Ok(()) => StatusCode::NO_CONTENT.into_response(),
            Err(error) => {
                tracing::error!(error = %error, "projection failed after like");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        },
        Err(error) => application_error_status(&error).into_response(),
    }
}
