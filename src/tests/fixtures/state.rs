use crate::modules::analytics::adapters::outbound::view_events_in_memory::InMemoryViewEvents;
use crate::modules::products::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::products::use_cases::compose_feed::handler::FeedSettings;
use crate::modules::products::use_cases::submit_product::command::SubmitProduct;
use crate::shell::state::{AppState, ProductEventStore};
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::in_memory(FeedSettings::default())
}

pub fn make_offline_event_store_state() -> AppState {
    let mut event_store = ProductEventStore::new();
    event_store.toggle_offline();
    AppState::wire(
        Arc::new(event_store),
        Arc::new(InMemoryProjections::new()),
        Arc::new(InMemoryViewEvents::new()),
        FeedSettings::default(),
    )
}

/// Runs the command through the write side and projects it, as the inbound adapters do.
pub async fn submit_and_project(state: &AppState, command: SubmitProduct) {
    let appended = state
        .product_handler
        .submit(command)
        .await
        .expect("submit failed");
    state
        .projector
        .project(&appended)
        .await
        .expect("projection failed");
}
