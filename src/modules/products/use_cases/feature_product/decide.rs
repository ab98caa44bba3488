use crate::modules::products::core::{
    decision::{DecideError, Decision},
    events::{ProductEvent, v1::product_featured::ProductFeaturedV1},
    intents::ProductIntent,
    state::ProductState,
};
use crate::modules::products::use_cases::feature_product::command::FeatureProduct;

pub fn decide_feature(state: &ProductState, command: FeatureProduct) -> Decision {
    match state {
        ProductState::None => Decision::rejected(DecideError::NotFound),
        ProductState::Listed {
            is_featured: true, ..
        } => Decision::rejected(DecideError::AlreadyFeatured),
        ProductState::Listed { .. } => {
            if command.placement_ref.trim().is_empty() {
                return Decision::rejected(DecideError::BlankField("placement_ref"));
            }
            let payload = ProductFeaturedV1 {
                product_id: command.product_id,
                placement_ref: command.placement_ref,
                featured_at: command.featured_at,
            };
            Decision::Accepted {
                events: vec![ProductEvent::ProductFeaturedV1(payload.clone())],
                intents: vec![ProductIntent::PublishProductFeatured { payload }],
            }
        }
    }
}
