use crate::modules::analytics::core::view_event::ViewEvent;
use async_trait::async_trait;

#[async_trait]
pub trait ViewEventRepository: Send + Sync {
    async fn append(&self, event: ViewEvent) -> anyhow::Result<()>;
}
