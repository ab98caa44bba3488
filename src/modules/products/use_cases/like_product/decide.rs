use crate::modules::products::core::{
    decision::{DecideError, Decision},
    events::{ProductEvent, v1::product_liked::ProductLikedV1},
    state::ProductState,
};
use crate::modules::products::use_cases::like_product::command::LikeProduct;

// Likes are not published to the broker; they only feed the read model.
pub fn decide_like(state: &ProductState, command: LikeProduct) -> Decision {
    match state {
        ProductState::None => Decision::rejected(DecideError::NotFound),
        ProductState::Listed { liked_by, .. } if liked_by.contains(&command.user_id) => {
            Decision::rejected(DecideError::AlreadyLiked)
        }
        ProductState::Listed { .. } => Decision::Accepted {
            events: vec![ProductEvent::ProductLikedV1(ProductLikedV1 {
                product_id: command.product_id,
                user_id: command.user_id,
                liked_at: command.liked_at,
            })],
            intents: vec![],
        },
    }
}
