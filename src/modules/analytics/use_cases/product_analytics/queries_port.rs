use crate::modules::analytics::core::view_event::ViewEvent;
use async_trait::async_trait;

#[async_trait]
pub trait ViewEventQueries: Send + Sync {
    /// View events of `item_ids` recorded at or after `since` (epoch millis).
    async fn list_view_events(&self, item_ids: &[String], since: i64)
    -> anyhow::Result<Vec<ViewEvent>>;
}
