#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ProductLikedV1 {
    pub product_id: String,
    pub user_id: String,
    pub liked_at: i64,
}
