use serde::{Deserialize, Serialize};

/// One recorded page view of a listed product. Append-only.
///
/// `created_at` is epoch milliseconds (UTC). Dimensions are `None` when the
/// client did not report them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewEvent {
    pub item_id: String,
    pub created_at: i64,
    pub country: Option<String>,
    pub city: Option<String>,
    pub device: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Country,
    City,
    Device,
}

impl ViewEvent {
    pub fn dimension(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Country => self.country.as_deref(),
            Dimension::City => self.city.as_deref(),
            Dimension::Device => self.device.as_deref(),
        }
    }
}
