use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::products::use_cases::compose_feed::feed::{FeedEntry, FeedItemKind, FeedPage};
use crate::modules::products::use_cases::compose_feed::handler::FeedRequest;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlFeedItemKind {
    Normal,
    Featured,
}

impl From<FeedItemKind> for GqlFeedItemKind {
    fn from(kind: FeedItemKind) -> Self {
        match kind {
            FeedItemKind::Normal => Self::Normal,
            FeedItemKind::Featured => Self::Featured,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlFeedItem {
    pub id: ID,
    pub name: String,
    pub tagline: String,
    pub logo_url: Option<String>,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub owner_id: String,
    pub created_at: i64,
    #[graphql(name = "type")]
    pub kind: GqlFeedItemKind,
}

impl From<FeedEntry> for GqlFeedItem {
    fn from(entry: FeedEntry) -> Self {
        Self {
            id: ID(entry.item.id),
            name: entry.item.name,
            tagline: entry.item.tagline,
            logo_url: entry.item.logo_url,
            images: entry.item.images,
            is_featured: entry.item.is_featured,
            owner_id: entry.item.owner_id,
            created_at: entry.item.created_at,
            kind: entry.kind.into(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlFeedPage {
    pub items: Vec<GqlFeedItem>,
    pub next_page: Option<u32>,
    pub has_more: bool,
}

impl From<FeedPage> for GqlFeedPage {
    fn from(page: FeedPage) -> Self {
        Self {
            items: page.items.into_iter().map(GqlFeedItem::from).collect(),
            next_page: page.next_page,
            has_more: page.has_more,
        }
    }
}

#[derive(Default)]
pub struct FeedQuery;

#[Object]
impl FeedQuery {
    async fn feed(
        &self,
        context: &Context<'_>,
        #[graphql(default = 1)] page: u32,
        #[graphql(default)] seen: Vec<String>,
        viewer_id: Option<String>,
    ) -> GqlResult<GqlFeedPage> {
        let state = context.data_unchecked::<AppState>();
        let page = state
            .feed_handler
            .handle(FeedRequest {
                viewer_id,
                seen,
                page,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(page.into())
    }
}
