// Translate product events into read model mutations.
//
// Responsibilities
// - Build an upsert for a submission and targeted patches for likes and featuring.
// - Stamp every mutation with last_event_id "stream_id:version" for idempotency.

use crate::modules::products::core::events::ProductEvent;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductRow {
    pub product_id: String,
    pub owner_id: String,
    pub name: String,
    pub tagline: String,
    pub logo_url: Option<String>,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub like_count: u64,
    pub submitted_at: i64,
    pub updated_at: i64,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(ProductRow),
    RecordLike {
        product_id: String,
        user_id: String,
        liked_at: i64,
        last_event_id: String,
    },
    MarkFeatured {
        product_id: String,
        featured_at: i64,
        last_event_id: String,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &ProductEvent) -> Vec<Mutation> {
    let last_event_id = format!("{stream_id}:{version}");
    match event {
        ProductEvent::ProductSubmittedV1(details) => vec![Mutation::Upsert(ProductRow {
            product_id: details.product_id.clone(),
            owner_id: details.owner_id.clone(),
            name: details.name.clone(),
            tagline: details.tagline.clone(),
            logo_url: details.logo_url.clone(),
            images: details.images.clone(),
            is_featured: false,
            like_count: 0,
            submitted_at: details.submitted_at,
            updated_at: details.submitted_at,
            last_event_id: Some(last_event_id),
        })],
        ProductEvent::ProductLikedV1(details) => vec![Mutation::RecordLike {
            product_id: details.product_id.clone(),
            user_id: details.user_id.clone(),
            liked_at: details.liked_at,
            last_event_id,
        }],
        ProductEvent::ProductFeaturedV1(details) => vec![Mutation::MarkFeatured {
            product_id: details.product_id.clone(),
            featured_at: details.featured_at,
            last_event_id,
        }],
    }
}
