// Event payload: ProductFeaturedV1.
//
// Emitted once a featured placement has been confirmed by the payment collaborator.
// `placement_ref` is the collaborator's reference for the paid placement.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ProductFeaturedV1 {
    pub product_id: String,
    pub placement_ref: String,
    pub featured_at: i64,
}
