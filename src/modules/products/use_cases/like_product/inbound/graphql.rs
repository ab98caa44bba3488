use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::products::use_cases::like_product::command::LikeProduct;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct LikeProductMutation;

#[Object]
impl LikeProductMutation {
    async fn like_product(
        &self,
        context: &Context<'_>,
        product_id: ID,
        user_id: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = LikeProduct {
            product_id: product_id.to_string(),
            user_id,
            liked_at: Utc::now().timestamp_millis(),
        };

        let appended = state
            .product_handler
            .like(command)
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
