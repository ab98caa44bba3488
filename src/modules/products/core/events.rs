// Root event enumeration for products and the versioned payloads behind it.
//
// Versioning
// - Prefer additive changes. A breaking change gets a new version and a new variant.

pub mod v1 {
    pub mod product_featured;
    pub mod product_liked;
    pub mod product_submitted;
}

use v1::product_featured::ProductFeaturedV1;
use v1::product_liked::ProductLikedV1;
use v1::product_submitted::ProductSubmittedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ProductEvent {
    ProductSubmittedV1(ProductSubmittedV1),
    ProductLikedV1(ProductLikedV1),
    ProductFeaturedV1(ProductFeaturedV1),
}
