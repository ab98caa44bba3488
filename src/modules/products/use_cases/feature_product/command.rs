#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureProduct {
    pub product_id: String,
    pub placement_ref: String,
    pub featured_at: i64,
}
