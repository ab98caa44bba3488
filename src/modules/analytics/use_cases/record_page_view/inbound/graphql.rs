use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::analytics::use_cases::record_page_view::command::RecordPageView;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordPageViewMutation;

#[Object]
impl RecordPageViewMutation {
    async fn record_page_view(
        &self,
        context: &Context<'_>,
        product_id: ID,
        country: Option<String>,
        city: Option<String>,
        device: Option<String>,
        occurred_at: Option<i64>,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let command = RecordPageView {
            product_id: product_id.to_string(),
            country,
            city,
            device,
            occurred_at: occurred_at.unwrap_or_else(|| Utc::now().timestamp_millis()),
        };

        state
            .record_page_view_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
