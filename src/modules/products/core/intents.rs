use crate::modules::products::core::events::v1::product_featured::ProductFeaturedV1;
use crate::modules::products::core::events::v1::product_submitted::ProductSubmittedV1;

/// Domain intents produced by a decider as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductIntent {
    PublishProductSubmitted { payload: ProductSubmittedV1 },
    PublishProductFeatured { payload: ProductFeaturedV1 },
}
