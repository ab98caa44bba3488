use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::products::use_cases::submit_product::command::SubmitProduct;
use crate::shell::http::application_error_status;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitProductBody {
    pub owner_id: String,
    pub name: String,
    pub tagline: String,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Serialize)]
pub struct SubmitProductResponse {
    pub product_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitProductBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let product_id = Uuid::now_v7().to_string();
    let command = SubmitProduct {
        product_id: product_id.clone(),
        owner_id: body.owner_id,
        name: body.name,
        tagline: body.tagline,
        logo_url: body.logo_url,
        images: body.images,
        submitted_at: Utc::now().timestamp_millis(),
    };

    let appended = match state.product_handler.submit(command).await {
        Ok(appended) => appended,
        Err(error) => return application_error_status(&error).into_response(),
    };
    if let Err(error) = state.projector.project(&appended).await {
        tracing::error!(%product_id, error = %error, "projection failed after submit");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    (
        StatusCode::CREATED,
        Json(SubmitProductResponse { product_id }),
    )
        .into_response()
}
