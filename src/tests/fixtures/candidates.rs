use crate::modules::products::core::projections::ProductRow;
use crate::modules::products::use_cases::compose_feed::feed::CandidateItem;

fn candidate(id: &str, is_featured: bool) -> CandidateItem {
    CandidateItem {
        id: id.to_string(),
        name: format!("Product {id}"),
        tagline: format!("Tagline of {id}"),
        logo_url: Some(format!("https://cdn.example.com/{id}/logo.png")),
        images: vec![],
        is_featured,
        owner_id: format!("owner-{id}"),
        created_at: 1_700_000_000_000,
    }
}

pub fn normal(id: &str) -> CandidateItem {
    candidate(id, false)
}

pub fn featured(id: &str) -> CandidateItem {
    candidate(id, true)
}

pub fn product_row(product_id: &str, owner_id: &str, submitted_at: i64) -> ProductRow {
    ProductRow {
        product_id: product_id.to_string(),
        owner_id: owner_id.to_string(),
        name: format!("Product {product_id}"),
        tagline: format!("Tagline of {product_id}"),
        logo_url: None,
        images: vec![],
        is_featured: false,
        like_count: 0,
        submitted_at,
        updated_at: submitted_at,
        last_event_id: Some(format!("Product-{product_id}:1")),
    }
}
