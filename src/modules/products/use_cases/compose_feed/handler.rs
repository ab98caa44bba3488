use crate::modules::products::use_cases::compose_feed::feed::{
    ExclusionSet, FeedError, FeedPage, compose_feed,
};
use crate::modules::products::use_cases::compose_feed::queries_port::ProductQueries;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    pub page_size: usize,
    pub featured_interval: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: crate::modules::products::use_cases::compose_feed::feed::DEFAULT_PAGE_SIZE,
            featured_interval:
                crate::modules::products::use_cases::compose_feed::feed::DEFAULT_FEATURED_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub viewer_id: Option<String>,
    pub seen: Vec<String>,
    pub page: u32,
}

#[derive(Debug, Error)]
pub enum FeedQueryError {
    #[error(transparent)]
    InvalidArgument(#[from] FeedError),

    #[error("product store unavailable: {0}")]
    Store(#[from] anyhow::Error),
}

/// Fetches the candidate pool and the viewer's exclusions, then composes one page.
#[derive(Clone)]
pub struct FeedHandler {
    queries: Arc<dyn ProductQueries>,
    settings: FeedSettings,
}

impl FeedHandler {
    pub fn new(queries: Arc<dyn ProductQueries>, settings: FeedSettings) -> Self {
        Self { queries, settings }
    }

    pub async fn handle(&self, request: FeedRequest) -> Result<FeedPage, FeedQueryError> {
        let candidates = self.queries.list_candidates().await?;
        let (owned, liked) = match request.viewer_id.as_deref() {
            Some(viewer_id) => (
                self.queries.list_owned_ids(viewer_id).await?,
                self.queries.list_liked_ids(viewer_id).await?,
            ),
            None => (Vec::new(), Vec::new()),
        };
        let exclusions = ExclusionSet::from_sources(owned, liked, request.seen);

        let page = compose_feed(
            &candidates,
            &exclusions,
            request.page,
            self.settings.page_size,
            self.settings.featured_interval,
        )?;
        tracing::debug!(
            candidates = candidates.len(),
            excluded = exclusions.len(),
            page = request.page,
            items = page.items.len(),
            "composed discovery feed"
        );
        Ok(page)
    }
}
