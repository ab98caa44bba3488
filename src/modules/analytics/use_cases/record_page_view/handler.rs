// Page-view ingestion.
//
// Responsibilities
// - Reject views of products that are not listed.
// - Reject timestamps outside the representable range.
// - Normalise blank dimensions to missing before appending.

use crate::modules::analytics::adapters::outbound::view_events::ViewEventRepository;
use crate::modules::analytics::core::view_event::ViewEvent;
use crate::modules::analytics::use_cases::record_page_view::command::RecordPageView;
use crate::modules::products::use_cases::compose_feed::queries_port::ProductQueries;
use crate::shared::core::primitives::{non_blank, utc_from_millis};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordPageViewError {
    #[error("product {0} is not listed")]
    UnknownProduct(String),

    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("view event store unavailable: {0}")]
    Store(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct RecordPageViewHandler {
    products: Arc<dyn ProductQueries>,
    repository: Arc<dyn ViewEventRepository>,
}

impl RecordPageViewHandler {
    pub fn new(products: Arc<dyn ProductQueries>, repository: Arc<dyn ViewEventRepository>) -> Self {
        Self {
            products,
            repository,
        }
    }

    pub async fn handle(&self, command: RecordPageView) -> Result<ViewEvent, RecordPageViewError> {
        if utc_from_millis(command.occurred_at).is_none() {
            return Err(RecordPageViewError::InvalidTimestamp(command.occurred_at));
        }
        if self.products.find_by_id(&command.product_id).await?.is_none() {
            tracing::warn!(product_id = %command.product_id, "page view for unknown product");
            return Err(RecordPageViewError::UnknownProduct(command.product_id));
        }

        let event = ViewEvent {
            item_id: command.product_id,
            created_at: command.occurred_at,
            country: non_blank(command.country),
            city: non_blank(command.city),
            device: non_blank(command.device),
        };
        self.repository.append(event.clone()).await?;
        Ok(event)
    }
}
