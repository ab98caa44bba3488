use crate::modules::analytics::adapters::outbound::view_events_in_memory::InMemoryViewEvents;
use crate::modules::analytics::use_cases::product_analytics::handler::ProductAnalyticsHandler;
use crate::modules::analytics::use_cases::record_page_view::handler::RecordPageViewHandler;
use crate::modules::products::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::products::application::command_handler::ProductCommandHandler;
use crate::modules::products::application::projector::Projector;
use crate::modules::products::core::events::ProductEvent;
use crate::modules::products::use_cases::compose_feed::handler::{FeedHandler, FeedSettings};
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

pub const PRODUCTS_TOPIC: &str = "products.v1";
pub const PRODUCT_FEED_PROJECTOR: &str = "product_feed";

pub type ProductEventStore = InMemoryEventStore<ProductEvent>;
pub type ProductHandler = ProductCommandHandler<ProductEventStore, InMemoryDomainOutbox>;
pub type ProductProjector = Projector<InMemoryProjections, InMemoryProjections>;

#[derive(Clone)]
pub struct AppState {
    pub product_handler: Arc<ProductHandler>,
    pub projector: Arc<ProductProjector>,
    pub projections: Arc<InMemoryProjections>,
    pub view_events: Arc<InMemoryViewEvents>,
    pub feed_handler: Arc<FeedHandler>,
    pub record_page_view_handler: Arc<RecordPageViewHandler>,
    pub analytics_handler: Arc<ProductAnalyticsHandler>,
}

impl AppState {
    pub fn in_memory(feed: FeedSettings) -> Self {
        Self::wire(
            Arc::new(ProductEventStore::new()),
            Arc::new(InMemoryProjections::new()),
            Arc::new(InMemoryViewEvents::new()),
            feed,
        )
    }

    pub fn wire(
        event_store: Arc<ProductEventStore>,
        projections: Arc<InMemoryProjections>,
        view_events: Arc<InMemoryViewEvents>,
        feed: FeedSettings,
    ) -> Self {
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let product_handler = Arc::new(ProductCommandHandler::new(
            PRODUCTS_TOPIC,
            event_store,
            outbox,
        ));
        let projector = Arc::new(Projector::new(
            PRODUCT_FEED_PROJECTOR,
            projections.clone(),
            projections.clone(),
        ));

        AppState {
            product_handler,
            projector,
            feed_handler: Arc::new(FeedHandler::new(projections.clone(), feed)),
            record_page_view_handler: Arc::new(RecordPageViewHandler::new(
                projections.clone(),
                view_events.clone(),
            )),
            analytics_handler: Arc::new(ProductAnalyticsHandler::new(
                projections.clone(),
                view_events.clone(),
            )),
            projections,
            view_events,
        }
    }
}
