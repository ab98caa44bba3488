// Product command handler orchestrates the write flow.
//
// Responsibilities
// - Load past events from the event store and fold them into state.
// - Call the decider with the command.
// - Append new events with optimistic concurrency.
// - Enqueue intents into the domain outbox for publishing.

use crate::modules::products::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::products::application::errors::ApplicationError;
use crate::modules::products::core::decision::Decision;
use crate::modules::products::core::events::ProductEvent;
use crate::modules::products::core::evolve::evolve;
use crate::modules::products::core::state::ProductState;
use crate::modules::products::use_cases::feature_product::command::FeatureProduct;
use crate::modules::products::use_cases::feature_product::decide::decide_feature;
use crate::modules::products::use_cases::like_product::command::LikeProduct;
use crate::modules::products::use_cases::like_product::decide::decide_like;
use crate::modules::products::use_cases::submit_product::command::SubmitProduct;
use crate::modules::products::use_cases::submit_product::decide::decide_submit;
use crate::shared::infrastructure::event_store::{EventStore, stream_id};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub const PRODUCT_AGGREGATE: &str = "Product";

/// Events written by one accepted command, each paired with its stream version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedEvents {
    pub stream_id: String,
    pub events: Vec<(i64, ProductEvent)>,
}

pub struct ProductCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<ProductEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> ProductCommandHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<ProductEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn submit(&self, command: SubmitProduct) -> Result<AppendedEvents, ApplicationError> {
        let stream_id = stream_id(PRODUCT_AGGREGATE, &command.product_id);
        self.handle(&stream_id, |state| decide_submit(state, command))
            .await
    }

    pub async fn like(&self, command: LikeProduct) -> Result<AppendedEvents, ApplicationError> {
        let stream_id = stream_id(PRODUCT_AGGREGATE, &command.product_id);
        self.handle(&stream_id, |state| decide_like(state, command))
            .await
    }

    pub async fn feature(
        &self,
        command: FeatureProduct,
    ) -> Result<AppendedEvents, ApplicationError> {
        let stream_id = stream_id(PRODUCT_AGGREGATE, &command.product_id);
        self.handle(&stream_id, |state| decide_feature(state, command))
            .await
    }

    pub async fn handle<TDecide>(
        &self,
        stream_id: &str,
        decide: TDecide,
    ) -> Result<AppendedEvents, ApplicationError>
    where
        TDecide: FnOnce(&ProductState) -> Decision + Send,
    {
        let stream = self.event_store.load(stream_id).await?;

        let state = stream
            .events
            .iter()
            .cloned()
            .fold(ProductState::None, evolve);

        match decide(&state) {
            Decision::Accepted { events, intents } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                dispatch_intents(
                    &*self.outbox,
                    stream_id,
                    stream.version,
                    &self.topic,
                    intents,
                )
                .await?;
                tracing::info!(stream_id, appended = events.len(), "product command accepted");
                Ok(AppendedEvents {
                    stream_id: stream_id.to_string(),
                    events: events
                        .into_iter()
                        .enumerate()
                        .map(|(index, event)| (stream.version + index as i64 + 1, event))
                        .collect(),
                })
            }
            Decision::Rejected { reason } => {
                tracing::warn!(stream_id, %reason, "product command rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
