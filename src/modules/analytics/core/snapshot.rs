// Output shapes of the analytics aggregation.
//
// Every collection is derived per request. Daily, hourly and weekday series
// are dense; breakdowns only hold observed keys.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Length of the trailing window the daily series covers.
pub const ANALYTICS_WINDOW_DAYS: i64 = 30;
/// Length of each half of the week-over-week comparison.
pub const TREND_WINDOW_DAYS: i64 = 7;
/// Only the busiest cities are reported.
pub const CITY_BREAKDOWN_LIMIT: usize = 10;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeriesPoint {
    pub date: NaiveDate,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub key: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyBucket {
    pub hour: u32,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayBucket {
    pub day: String,
    pub views: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendMetric {
    #[serde(rename = "current7d")]
    pub current_7d: u64,
    #[serde(rename = "previous7d")]
    pub previous_7d: u64,
    pub percent_change: i64,
}

impl TrendMetric {
    /// 100 when growing from nothing, 0 when both halves are empty,
    /// otherwise the relative change rounded to the nearest integer, halves upward.
    pub fn between(current_7d: u64, previous_7d: u64) -> Self {
        let percent_change = match (current_7d, previous_7d) {
            (0, 0) => 0,
            (_, 0) => 100,
            (current, previous) => {
                let change = (current as f64 - previous as f64) / previous as f64 * 100.0;
                (change + 0.5).floor() as i64
            }
        };
        Self {
            current_7d,
            previous_7d,
            percent_change,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub total_views: u64,
    pub daily_series: Vec<DailySeriesPoint>,
    pub country_data: Vec<BreakdownEntry>,
    pub city_data: Vec<BreakdownEntry>,
    pub device_data: Vec<BreakdownEntry>,
    pub hourly_data: Vec<HourlyBucket>,
    pub weekday_data: Vec<WeekdayBucket>,
    pub trend: TrendMetric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAnalytics {
    pub item_id: String,
    pub snapshot: AnalyticsSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalytics {
    pub overall: AnalyticsSnapshot,
    pub per_item: Vec<ItemAnalytics>,
}
