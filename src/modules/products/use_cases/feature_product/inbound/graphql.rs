use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::products::use_cases::feature_product::command::FeatureProduct;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct FeatureProductMutation;

#[Object]
impl FeatureProductMutation {
    async fn feature_product(
        &self,
        context: &Context<'_>,
        product_id: ID,
        placement_ref: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = FeatureProduct {
            product_id: product_id.to_string(),
            placement_ref,
            featured_at: Utc::now().timestamp_millis(),
        };

        let appended = state
            .product_handler
            .feature(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        state
            .projector
            .project(&appended)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(true)
    }
}
