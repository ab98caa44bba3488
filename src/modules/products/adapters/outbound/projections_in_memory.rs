// In memory product read model, watermark store and feed queries.
//
// Purpose
// - Serve the discovery feed and run projectors without a database.
//
// Responsibilities
// - Keep one row per product plus the set of (product, user) likes.
// - Track the last processed event per projector.
// - Answer candidate, ownership and like lookups for the feed.

use crate::modules::products::adapters::outbound::projections::{
    ProductProjectionRepository, WatermarkRepository,
};
use crate::modules::products::core::projections::ProductRow;
use crate::modules::products::use_cases::compose_feed::feed::CandidateItem;
use crate::modules::products::use_cases::compose_feed::queries_port::ProductQueries;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, ProductRow>>,
    likes: RwLock<BTreeSet<(String, String)>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn row(&self, product_id: &str) -> Option<ProductRow> {
        self.rows.read().await.get(product_id).cloned()
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: ProductRow) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.rows.write().await.insert(row.product_id.clone(), row);
        Ok(())
    }

    async fn record_like(
        &self,
        product_id: &str,
        user_id: &str,
        liked_at: i64,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        let row = rows
            .get_mut(product_id)
            .ok_or_else(|| anyhow::anyhow!("product {product_id} is not projected"))?;

        let inserted = self
            .likes
            .write()
            .await
            .insert((product_id.to_string(), user_id.to_string()));
        if inserted {
            row.like_count += 1;
            row.updated_at = row.updated_at.max(liked_at);
            row.last_event_id = Some(last_event_id.to_string());
        }
        Ok(())
    }

    async fn mark_featured(
        &self,
        product_id: &str,
        featured_at: i64,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        let row = rows
            .get_mut(product_id)
            .ok_or_else(|| anyhow::anyhow!("product {product_id} is not projected"))?;
        if !row.is_featured {
            row.is_featured = true;
            row.updated_at = row.updated_at.max(featured_at);
            row.last_event_id = Some(last_event_id.to_string());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductQueries for InMemoryProjections {
    async fn list_candidates(&self) -> anyhow::Result<Vec<CandidateItem>> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut rows: Vec<&ProductRow> = guard.values().collect();
        rows.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        Ok(rows.into_iter().cloned().map(CandidateItem::from).collect())
    }

    async fn list_owned_ids(&self, owner_id: &str) -> anyhow::Result<Vec<String>> {
        self.ensure_online()?;
        let mut ids: Vec<String> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| row.owner_id == owner_id)
            .map(|row| row.product_id.clone())
            .collect();
        ids.sort();
        Ok(ids)
    }

    async fn list_liked_ids(&self, user_id: &str) -> anyhow::Result<Vec<String>> {
        self.ensure_online()?;
        Ok(self
            .likes
            .read()
            .await
            .iter()
            .filter(|(_, liker)| liker == user_id)
            .map(|(product_id, _)| product_id.clone())
            .collect())
    }

    async fn find_by_id(&self, product_id: &str) -> anyhow::Result<Option<CandidateItem>> {
        self.ensure_online()?;
        Ok(self.row(product_id).await.map(CandidateItem::from))
    }
}

#[cfg(test)]
mod product_in_memory_projections_tests {
    use super::*;
    use crate::tests::fixtures::candidates::product_row;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repository() -> InMemoryProjections {
        InMemoryProjections::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_candidates_newest_first(repository: InMemoryProjections) {
        repository.upsert(product_row("p-old", "o-1", 1_000)).await.unwrap();
        repository.upsert(product_row("p-new", "o-1", 3_000)).await.unwrap();
        repository.upsert(product_row("p-mid", "o-2", 2_000)).await.unwrap();

        let ids: Vec<String> = repository
            .list_candidates()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec!["p-new", "p-mid", "p-old"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_the_owner_portfolio(repository: InMemoryProjections) {
        repository.upsert(product_row("p-2", "o-1", 1_000)).await.unwrap();
        repository.upsert(product_row("p-1", "o-1", 2_000)).await.unwrap();
        repository.upsert(product_row("p-3", "o-2", 3_000)).await.unwrap();

        assert_eq!(
            repository.list_owned_ids("o-1").await.unwrap(),
            vec!["p-1", "p-2"]
        );
        assert!(repository.list_owned_ids("nobody").await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_like_an_unprojected_product(repository: InMemoryProjections) {
        let result = repository.record_like("ghost", "u-1", 1, "Product-ghost:2").await;
        assert!(result.unwrap_err().to_string().contains("not projected"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_find_a_product_by_id(repository: InMemoryProjections) {
        repository.upsert(product_row("p-1", "o-1", 1_000)).await.unwrap();
        let found = repository.find_by_id("p-1").await.unwrap();
        assert_eq!(found.map(|item| item.owner_id), Some("o-1".to_string()));
        assert_eq!(repository.find_by_id("p-2").await.unwrap(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_queries_while_offline(mut repository: InMemoryProjections) {
        repository.toggle_offline();
        assert!(repository.list_candidates().await.is_err());
        assert!(repository.get("product-feed").await.is_err());
    }
}
