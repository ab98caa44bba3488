use crate::modules::products::core::projections::ProductRow;
use crate::modules::products::use_cases::compose_feed::feed::CandidateItem;
use async_trait::async_trait;

#[async_trait]
pub trait ProductProjectionRepository: Send + Sync {
    async fn upsert(&self, row: ProductRow) -> anyhow::Result<()>;
    async fn record_like(
        &self,
        product_id: &str,
        user_id: &str,
        liked_at: i64,
        last_event_id: &str,
    ) -> anyhow::Result<()>;
    async fn mark_featured(
        &self,
        product_id: &str,
        featured_at: i64,
        last_event_id: &str,
    ) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}

impl From<ProductRow> for CandidateItem {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.product_id,
            name: row.name,
            tagline: row.tagline,
            logo_url: row.logo_url,
            images: row.images,
            is_featured: row.is_featured,
            owner_id: row.owner_id,
            created_at: row.submitted_at,
        }
    }
}
