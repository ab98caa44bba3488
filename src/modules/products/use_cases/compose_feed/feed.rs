// Discovery feed composition.
//
// Purpose
// - Turn a recency-ordered candidate pool into one page of the discovery feed.
//
// Responsibilities
// - Drop candidates the viewer owns, liked or has already seen.
// - Paginate the normal candidates and interleave featured ones at a fixed cadence.
//
// Boundaries
// - Pure. No clock, no input or output. Identical inputs give an identical page.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_FEATURED_INTERVAL: usize = 2;

/// Upper bound on normal candidates considered per composition.
pub const NORMAL_CANDIDATE_CAP: usize = 500;
/// Upper bound on featured candidates considered per composition.
pub const FEATURED_CANDIDATE_CAP: usize = 100;

/// Read-only projection of a listed product as the feed sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateItem {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub logo_url: Option<String>,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub owner_id: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedItemKind {
    Normal,
    Featured,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    #[serde(flatten)]
    pub item: CandidateItem,
    #[serde(rename = "type")]
    pub kind: FeedItemKind,
}

impl FeedEntry {
    fn normal(item: &CandidateItem) -> Self {
        Self {
            item: item.clone(),
            kind: FeedItemKind::Normal,
        }
    }

    fn featured(item: &CandidateItem) -> Self {
        Self {
            item: item.clone(),
            kind: FeedItemKind::Featured,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPage {
    pub items: Vec<FeedEntry>,
    pub next_page: Option<u32>,
    pub has_more: bool,
}

/// Product ids hidden from a viewer: owned, liked and already seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ids: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sources(
        owned: impl IntoIterator<Item = String>,
        liked: impl IntoIterator<Item = String>,
        seen: impl IntoIterator<Item = String>,
    ) -> Self {
        owned.into_iter().chain(liked).chain(seen).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<String> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("page must be at least 1")]
    InvalidPage,

    #[error("page size must be greater than zero")]
    InvalidPageSize,

    #[error("featured interval must be greater than zero")]
    InvalidFeaturedInterval,
}

/// Composes page `page` (1-based) of the discovery feed.
///
/// Normal candidates are paginated by `page_size`; after every
/// `featured_interval`-th normal entry the next unused featured candidate is
/// inserted. Both partitions keep the pool's order.
pub fn compose_feed(
    candidate_pool: &[CandidateItem],
    exclusions: &ExclusionSet,
    page: u32,
    page_size: usize,
    featured_interval: usize,
) -> Result<FeedPage, FeedError> {
    if page == 0 {
        return Err(FeedError::InvalidPage);
    }
    if page_size == 0 {
        return Err(FeedError::InvalidPageSize);
    }
    if featured_interval == 0 {
        return Err(FeedError::InvalidFeaturedInterval);
    }

    let (normal, featured) = partition(candidate_pool, exclusions);

    let offset = (page as usize - 1).saturating_mul(page_size);
    let mut items = Vec::with_capacity(page_size + page_size / featured_interval);
    let mut featured_cursor = featured.iter();
    let mut used_featured: HashSet<&str> = HashSet::new();

    for (position, item) in normal.iter().skip(offset).take(page_size).enumerate() {
        items.push(FeedEntry::normal(item));
        if (position + 1) % featured_interval != 0 {
            continue;
        }
        let next_featured = featured_cursor
            .by_ref()
            .find(|candidate| used_featured.insert(candidate.id.as_str()));
        if let Some(candidate) = next_featured {
            items.push(FeedEntry::featured(candidate));
        }
    }

    let has_more = offset.saturating_add(page_size) < normal.len();
    Ok(FeedPage {
        items,
        next_page: has_more.then(|| page + 1),
        has_more,
    })
}

fn partition<'a>(
    candidate_pool: &'a [CandidateItem],
    exclusions: &ExclusionSet,
) -> (Vec<&'a CandidateItem>, Vec<&'a CandidateItem>) {
    let mut normal = Vec::new();
    let mut featured = Vec::new();
    for item in candidate_pool
        .iter()
        .filter(|item| !exclusions.contains(&item.id))
    {
        if item.is_featured {
            if featured.len() < FEATURED_CANDIDATE_CAP {
                featured.push(item);
            }
        } else if normal.len() < NORMAL_CANDIDATE_CAP {
            normal.push(item);
        }
    }
    (normal, featured)
}
