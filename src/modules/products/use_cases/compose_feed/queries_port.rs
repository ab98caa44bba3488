// Read side of the product catalogue as the discovery feed needs it.
//
// Implementations must return candidates newest first.

use crate::modules::products::use_cases::compose_feed::feed::CandidateItem;
use async_trait::async_trait;

#[async_trait]
pub trait ProductQueries: Send + Sync {
    async fn list_candidates(&self) -> anyhow::Result<Vec<CandidateItem>>;
    async fn list_owned_ids(&self, owner_id: &str) -> anyhow::Result<Vec<String>>;
    async fn list_liked_ids(&self, user_id: &str) -> anyhow::Result<Vec<String>>;
    async fn find_by_id(&self, product_id: &str) -> anyhow::Result<Option<CandidateItem>>;
}
