use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::products::use_cases::submit_product::command::SubmitProduct;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SubmitProductMutation;

#[Object]
impl SubmitProductMutation {
    async fn submit_product(
        &self,
        context: &Context<'_>,
        owner_id: String,
        name: String,
        tagline: String,
        logo_url: Option<String>,
        #[graphql(default)] images: Vec<String>,
    ) -> GqlResult<ID> {
        let product_id = Uuid::now_v7().to_string();
        let state = context.data_unchecked::<AppState>();

        let command = SubmitProduct {
            product_id: product_id.clone(),
            owner_id,
            name,
            tagline,
            logo_url,
            images,
            submitted_at: Utc::now().timestamp_millis(),
        };

        let appended = state
            .product_handler
            .submit(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        // Inline projection so the feed sees the new product immediately
        state
            .projector
            .project(&appended)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(product_id))
    }
}
