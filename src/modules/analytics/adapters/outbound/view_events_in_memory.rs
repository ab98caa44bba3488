// In memory view event log.
//
// Append-only; reads filter by item and lower time bound.

use crate::modules::analytics::adapters::outbound::view_events::ViewEventRepository;
use crate::modules::analytics::core::view_event::ViewEvent;
use crate::modules::analytics::use_cases::product_analytics::queries_port::ViewEventQueries;
use std::collections::HashSet;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryViewEvents {
    events: RwLock<Vec<ViewEvent>>,
    is_offline: bool,
}

impl InMemoryViewEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }
}

#[async_trait::async_trait]
impl ViewEventRepository for InMemoryViewEvents {
    async fn append(&self, event: ViewEvent) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("View event store offline"));
        }
        self.events.write().await.push(event);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ViewEventQueries for InMemoryViewEvents {
    async fn list_view_events(
        &self,
        item_ids: &[String],
        since: i64,
    ) -> anyhow::Result<Vec<ViewEvent>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("View event store offline"));
        }
        let wanted: HashSet<&str> = item_ids.iter().map(String::as_str).collect();
        Ok(self
            .events
            .read()
            .await
            .iter()
            .filter(|event| event.created_at >= since && wanted.contains(event.item_id.as_str()))
            .cloned()
            .collect())
    }
}
