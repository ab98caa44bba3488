#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPageView {
    pub product_id: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub device: Option<String>,
    pub occurred_at: i64,
}
