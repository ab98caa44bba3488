// Projector turns appended product events into read model mutations,
// persists them through the projection repository and advances the watermark.
//
// Purpose
// - Keep the feed's read side in step with the event store.
// - Make replays harmless: every mutation is keyed by product and stamped with its event id.

use crate::modules::products::adapters::outbound::projections::{
    ProductProjectionRepository, WatermarkRepository,
};
use crate::modules::products::application::command_handler::AppendedEvents;
use crate::modules::products::core::events::ProductEvent;
use crate::modules::products::core::projections::{Mutation, apply};
use std::sync::Arc;

pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: ProductProjectionRepository + ?Sized,
    TWatermarkRepository: WatermarkRepository + ?Sized,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: ProductProjectionRepository + ?Sized,
    TWatermarkRepository: WatermarkRepository + ?Sized,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &ProductEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::RecordLike {
                    product_id,
                    user_id,
                    liked_at,
                    last_event_id,
                } => {
                    self.repository
                        .record_like(&product_id, &user_id, liked_at, &last_event_id)
                        .await?
                }
                Mutation::MarkFeatured {
                    product_id,
                    featured_at,
                    last_event_id,
                } => {
                    self.repository
                        .mark_featured(&product_id, featured_at, &last_event_id)
                        .await?
                }
            }
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }

    pub async fn project(&self, appended: &AppendedEvents) -> anyhow::Result<()> {
        for (version, event) in &appended.events {
            self.apply_one(&appended.stream_id, *version, event).await?;
        }
        tracing::debug!(
            projector = %self.name,
            stream_id = %appended.stream_id,
            events = appended.events.len(),
            "projected product events"
        );
        Ok(())
    }
}
