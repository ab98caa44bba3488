use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::modules::analytics::use_cases::record_page_view::command::RecordPageView;
use crate::modules::analytics::use_cases::record_page_view::handler::RecordPageViewError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordPageViewBody {
    pub product_id: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub device: Option<String>,
    /// Epoch millis; the server clock when omitted.
    pub occurred_at: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordPageViewBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RecordPageView {
        product_id: body.product_id,
        country: body.country,
        city: body.city,
        device: body.device,
        occurred_at: body
            .occurred_at
            .unwrap_or_else(|| Utc::now().timestamp_millis()),
    };

    match state.record_page_view_handler.handle(command).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(RecordPageViewError::UnknownProduct(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(error @ RecordPageViewError::InvalidTimestamp(_)) => {
            (StatusCode::BAD_REQUEST, error.to_string()).into_response()
        }
        Err(RecordPageViewError::Store(error)) => {
            tracing::error!(error = %error, "page view could not be recorded");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
