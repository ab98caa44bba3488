#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitProduct {
    pub product_id: String,
    pub owner_id: String,
    pub name: String,
    pub tagline: String,
    pub logo_url: Option<String>,
    pub images: Vec<String>,
    pub submitted_at: i64,
}
