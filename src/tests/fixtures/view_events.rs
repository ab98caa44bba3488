use crate::modules::analytics::core::view_event::ViewEvent;

pub struct ViewEventBuilder {
    inner: ViewEvent,
}

impl ViewEventBuilder {
    pub fn new(item_id: &str, created_at: i64) -> Self {
        Self {
            inner: ViewEvent {
                item_id: item_id.to_string(),
                created_at,
                country: None,
                city: None,
                device: None,
            },
        }
    }

    pub fn country(mut self, v: &str) -> Self {
        self.inner.country = Some(v.to_string());
        self
    }

    pub fn city(mut self, v: &str) -> Self {
        self.inner.city = Some(v.to_string());
        self
    }

    pub fn device(mut self, v: &str) -> Self {
        self.inner.device = Some(v.to_string());
        self
    }

    pub fn build(self) -> ViewEvent {
        self.inner
    }
}
