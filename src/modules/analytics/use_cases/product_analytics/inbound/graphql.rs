use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::Utc;

use crate::modules::analytics::core::snapshot::{
    AnalyticsSnapshot, BreakdownEntry, ItemAnalytics, PortfolioAnalytics,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlDailyPoint {
    pub date: String,
    pub views: u64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlBreakdown {
    pub key: String,
    pub count: u64,
    pub percentage: f64,
}

impl From<BreakdownEntry> for GqlBreakdown {
    fn from(entry: BreakdownEntry) -> Self {
        Self {
            key: entry.key,
            count: entry.count,
            percentage: entry.percentage,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlBucket {
    pub label: String,
    pub views: u64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlTrend {
    #[graphql(name = "current7d")]
    pub current_7d: u64,
    #[graphql(name = "previous7d")]
    pub previous_7d: u64,
    pub percent_change: i64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlAnalyticsSnapshot {
    pub total_views: u64,
    pub daily_series: Vec<GqlDailyPoint>,
    pub country_data: Vec<GqlBreakdown>,
    pub city_data: Vec<GqlBreakdown>,
    pub device_data: Vec<GqlBreakdown>,
    pub hourly_data: Vec<GqlBucket>,
    pub weekday_data: Vec<GqlBucket>,
    pub trend: GqlTrend,
}

impl From<AnalyticsSnapshot> for GqlAnalyticsSnapshot {
    fn from(s: AnalyticsSnapshot) -> Self {
        Self {
            total_views: s.total_views,
            daily_series: s
                .daily_series
                .into_iter()
                .map(|point| GqlDailyPoint {
                    date: point.date.format("%Y-%m-%d").to_string(),
                    views: point.views,
                })
                .collect(),
            country_data: s.country_data.into_iter().map(Into::into).collect(),
            city_data: s.city_data.into_iter().map(Into::into).collect(),
            device_data: s.device_data.into_iter().map(Into::into).collect(),
            hourly_data: s
                .hourly_data
                .into_iter()
                .map(|bucket| GqlBucket {
                    label: format!("{:02}", bucket.hour),
                    views: bucket.views,
                })
                .collect(),
            weekday_data: s
                .weekday_data
                .into_iter()
                .map(|bucket| GqlBucket {
                    label: bucket.day,
                    views: bucket.views,
                })
                .collect(),
            trend: GqlTrend {
                current_7d: s.trend.current_7d,
                previous_7d: s.trend.previous_7d,
                percent_change: s.trend.percent_change,
            },
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlItemAnalytics {
    pub item_id: String,
    pub snapshot: GqlAnalyticsSnapshot,
}

impl From<ItemAnalytics> for GqlItemAnalytics {
    fn from(item: ItemAnalytics) -> Self {
        Self {
            item_id: item.item_id,
            snapshot: item.snapshot.into(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlPortfolioAnalytics {
    pub overall: GqlAnalyticsSnapshot,
    pub per_item: Vec<GqlItemAnalytics>,
}

impl From<PortfolioAnalytics> for GqlPortfolioAnalytics {
    fn from(portfolio: PortfolioAnalytics) -> Self {
        Self {
            overall: portfolio.overall.into(),
            per_item: portfolio.per_item.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ProductAnalyticsQuery;

#[Object]
impl ProductAnalyticsQuery {
    async fn product_analytics(
        &self,
        context: &Context<'_>,
        owner_id: String,
    ) -> GqlResult<GqlPortfolioAnalytics> {
        let state = context.data_unchecked::<AppState>();
        let portfolio = state
            .analytics_handler
            .handle(&owner_id, Utc::now())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(portfolio.into())
    }
}
