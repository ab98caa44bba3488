use crate::modules::products::core::{
    decision::{DecideError, Decision},
    events::{ProductEvent, v1::product_submitted::ProductSubmittedV1},
    intents::ProductIntent,
    state::ProductState,
};
use crate::modules::products::use_cases::submit_product::command::SubmitProduct;
use crate::shared::core::primitives::non_blank;

pub fn decide_submit(state: &ProductState, command: SubmitProduct) -> Decision {
    if state.is_listed() {
        return Decision::rejected(DecideError::AlreadyExists);
    }
    let name = command.name.trim();
    if name.is_empty() {
        return Decision::rejected(DecideError::BlankField("name"));
    }
    let tagline = command.tagline.trim();
    if tagline.is_empty() {
        return Decision::rejected(DecideError::BlankField("tagline"));
    }

    let payload = ProductSubmittedV1 {
        product_id: command.product_id,
        owner_id: command.owner_id,
        name: name.to_string(),
        tagline: tagline.to_string(),
        logo_url: non_blank(command.logo_url),
        images: command
            .images
            .into_iter()
            .filter(|url| !url.trim().is_empty())
            .collect(),
        submitted_at: command.submitted_at,
    };
    Decision::Accepted {
        events: vec![ProductEvent::ProductSubmittedV1(payload.clone())],
        intents: vec![ProductIntent::PublishProductSubmitted { payload }],
    }
}
