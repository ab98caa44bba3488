use crate::modules::products::core::events::v1::product_submitted::ProductSubmittedV1;
use crate::tests::fixtures::commands::submit_product::SubmitProductBuilder;

/// Canonical submission event, derived from the default command fixture.
pub fn make_product_submitted_v1_event() -> ProductSubmittedV1 {
    let command = SubmitProductBuilder::new().build();
    ProductSubmittedV1 {
        product_id: command.product_id,
        owner_id: command.owner_id,
        name: command.name,
        tagline: command.tagline,
        logo_url: command.logo_url,
        images: command.images,
        submitted_at: command.submitted_at,
    }
}
