// Event payload: ProductSubmittedV1.
//
// Records that a founder listed a product in the directory.
// Timestamps are epoch milliseconds.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ProductSubmittedV1 {
    pub product_id: String,
    pub owner_id: String,
    pub name: String,
    pub tagline: String,
    pub logo_url: Option<String>,
    pub images: Vec<String>,
    pub submitted_at: i64,
}
