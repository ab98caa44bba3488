use crate::modules::analytics::core::snapshot::PortfolioAnalytics;
use crate::modules::analytics::use_cases::product_analytics::aggregate::{
    AggregateError, aggregate_portfolio, window_start,
};
use crate::modules::analytics::use_cases::product_analytics::queries_port::ViewEventQueries;
use crate::modules::products::use_cases::compose_feed::queries_port::ProductQueries;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductAnalyticsError {
    #[error(transparent)]
    InvalidArgument(#[from] AggregateError),

    #[error("analytics store unavailable: {0}")]
    Store(#[from] anyhow::Error),
}

/// Dashboard analytics for everything one owner has listed.
#[derive(Clone)]
pub struct ProductAnalyticsHandler {
    products: Arc<dyn ProductQueries>,
    view_events: Arc<dyn ViewEventQueries>,
}

impl ProductAnalyticsHandler {
    pub fn new(products: Arc<dyn ProductQueries>, view_events: Arc<dyn ViewEventQueries>) -> Self {
        Self {
            products,
            view_events,
        }
    }

    pub async fn handle(
        &self,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<PortfolioAnalytics, ProductAnalyticsError> {
        let item_ids = self.products.list_owned_ids(owner_id).await?;
        let since = window_start(now).timestamp_millis();
        let until = now.timestamp_millis();
        let mut events = if item_ids.is_empty() {
            Vec::new()
        } else {
            self.view_events.list_view_events(&item_ids, since).await?
        };
        // Events stamped after `now` belong to no series day.
        events.retain(|event| event.created_at <= until);

        let portfolio = aggregate_portfolio(&item_ids, &events, now)?;
        tracing::debug!(
            owner_id,
            items = item_ids.len(),
            events = events.len(),
            "aggregated portfolio analytics"
        );
        Ok(portfolio)
    }
}
