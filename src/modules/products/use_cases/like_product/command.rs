#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeProduct {
    pub product_id: String,
    pub user_id: String,
    pub liked_at: i64,
}
