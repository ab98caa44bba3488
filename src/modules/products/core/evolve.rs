use crate::modules::products::core::events::ProductEvent;
use crate::modules::products::core::state::ProductState;
use std::collections::BTreeSet;

pub fn evolve(state: ProductState, event: ProductEvent) -> ProductState {
    match (state, event) {
        (ProductState::None, ProductEvent::ProductSubmittedV1(e)) => ProductState::Listed {
            product_id: e.product_id,
            owner_id: e.owner_id,
            name: e.name,
            tagline: e.tagline,
            logo_url: e.logo_url,
            images: e.images,
            is_featured: false,
            liked_by: BTreeSet::new(),
            submitted_at: e.submitted_at,
            updated_at: e.submitted_at,
        },
        (
            ProductState::Listed {
                product_id,
                owner_id,
                name,
                tagline,
                logo_url,
                images,
                is_featured,
                mut liked_by,
                submitted_at,
                updated_at,
            },
            ProductEvent::ProductLikedV1(e),
        ) => {
            liked_by.insert(e.user_id);
            ProductState::Listed {
                product_id,
                owner_id,
                name,
                tagline,
                logo_url,
                images,
                is_featured,
                liked_by,
                submitted_at,
                updated_at: updated_at.max(e.liked_at),
            }
        }
        (
            ProductState::Listed {
                product_id,
                owner_id,
                name,
                tagline,
                logo_url,
                images,
                liked_by,
                submitted_at,
                ..
            },
            ProductEvent::ProductFeaturedV1(e),
        ) => ProductState::Listed {
            product_id,
            owner_id,
            name,
            tagline,
            logo_url,
            images,
            is_featured: true,
            liked_by,
            submitted_at,
            updated_at: e.featured_at,
        },
        (state, _) => state,
    }
}
