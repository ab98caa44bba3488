// Analytics aggregation over a pre-fetched set of view events.
//
// Purpose
// - Bucket raw page views into the owner dashboard's series, breakdowns and trend.
//
// Responsibilities
// - Zero-filled 30 day series ending on `now`'s UTC date.
// - Country, city and device breakdowns with percentages of the scoped total.
// - Hour-of-day and day-of-week histograms, week-over-week trend.
// - Portfolio mode: one overall snapshot plus one per owned item.
//
// Boundaries
// - Pure. `now` is injected; callers fetch and window the events.
// - All bucketing is UTC.

use crate::modules::analytics::core::snapshot::{
    ANALYTICS_WINDOW_DAYS, AnalyticsSnapshot, BreakdownEntry, CITY_BREAKDOWN_LIMIT,
    DailySeriesPoint, HourlyBucket, ItemAnalytics, PortfolioAnalytics, TREND_WINDOW_DAYS,
    TrendMetric, WEEKDAY_LABELS, WeekdayBucket,
};
use crate::modules::analytics::core::view_event::{Dimension, ViewEvent};
use crate::shared::core::primitives::{days_before, utc_from_millis};
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Timelike, Utc};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("view event of {item_id} has an unrepresentable timestamp {created_at}")]
    InvalidTimestamp { item_id: String, created_at: i64 },
}

struct Stamped<'a> {
    event: &'a ViewEvent,
    at: DateTime<Utc>,
}

pub fn aggregate(
    events: &[ViewEvent],
    now: DateTime<Utc>,
) -> Result<AnalyticsSnapshot, AggregateError> {
    aggregate_where(events, now, |_| true)
}

/// Aggregates the events accepted by `include`.
///
/// Every timestamp is validated first, including those `include` would drop,
/// so one malformed row rejects the whole call.
pub fn aggregate_where<F>(
    events: &[ViewEvent],
    now: DateTime<Utc>,
    include: F,
) -> Result<AnalyticsSnapshot, AggregateError>
where
    F: Fn(&ViewEvent) -> bool,
{
    let stamped = stamp(events)?;
    let scoped: Vec<&Stamped> = stamped.iter().filter(|s| include(s.event)).collect();
    Ok(summarize(&scoped, now))
}

/// Overall snapshot across `item_ids` plus one snapshot per item, in `item_ids` order.
pub fn aggregate_portfolio(
    item_ids: &[String],
    events: &[ViewEvent],
    now: DateTime<Utc>,
) -> Result<PortfolioAnalytics, AggregateError> {
    let stamped = stamp(events)?;
    let owned: HashSet<&str> = item_ids.iter().map(String::as_str).collect();

    let overall: Vec<&Stamped> = stamped
        .iter()
        .filter(|s| owned.contains(s.event.item_id.as_str()))
        .collect();

    let per_item = item_ids
        .iter()
        .map(|item_id| {
            let scoped: Vec<&Stamped> = overall
                .iter()
                .copied()
                .filter(|s| &s.event.item_id == item_id)
                .collect();
            ItemAnalytics {
                item_id: item_id.clone(),
                snapshot: summarize(&scoped, now),
            }
        })
        .collect();

    Ok(PortfolioAnalytics {
        overall: summarize(&overall, now),
        per_item,
    })
}

/// UTC midnight of the oldest day in the daily series ending on `now`'s date.
pub fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .checked_sub_days(Days::new(ANALYTICS_WINDOW_DAYS as u64 - 1))
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
        .and_utc()
}

fn stamp(events: &[ViewEvent]) -> Result<Vec<Stamped<'_>>, AggregateError> {
    events
        .iter()
        .map(|event| {
            utc_from_millis(event.created_at)
                .map(|at| Stamped { event, at })
                .ok_or_else(|| AggregateError::InvalidTimestamp {
                    item_id: event.item_id.clone(),
                    created_at: event.created_at,
                })
        })
        .collect()
}

fn summarize(events: &[&Stamped], now: DateTime<Utc>) -> AnalyticsSnapshot {
    let total = events.len() as u64;
    AnalyticsSnapshot {
        total_views: total,
        daily_series: daily_series(events, now.date_naive()),
        country_data: breakdown(events, Dimension::Country, total, None),
        city_data: breakdown(events, Dimension::City, total, Some(CITY_BREAKDOWN_LIMIT)),
        device_data: breakdown(events, Dimension::Device, total, None),
        hourly_data: hourly(events),
        weekday_data: weekdays(events),
        trend: trend(events, now),
    }
}

fn daily_series(events: &[&Stamped], today: NaiveDate) -> Vec<DailySeriesPoint> {
    let mut views_by_date: HashMap<NaiveDate, u64> = HashMap::new();
    for stamped in events {
        *views_by_date.entry(stamped.at.date_naive()).or_default() += 1;
    }

    (0..ANALYTICS_WINDOW_DAYS as u64)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| DailySeriesPoint {
            date,
            views: views_by_date.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

fn breakdown(
    events: &[&Stamped],
    dimension: Dimension,
    total: u64,
    limit: Option<usize>,
) -> Vec<BreakdownEntry> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for stamped in events {
        if let Some(key) = stamped
            .event
            .dimension(dimension)
            .filter(|key| !key.trim().is_empty())
        {
            *counts.entry(key).or_default() += 1;
        }
    }

    let mut entries: Vec<(&str, u64)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    entries
        .into_iter()
        .map(|(key, count)| BreakdownEntry {
            key: key.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

fn hourly(events: &[&Stamped]) -> Vec<HourlyBucket> {
    let mut buckets = [0u64; 24];
    for stamped in events {
        buckets[stamped.at.hour() as usize] += 1;
    }
    buckets
        .into_iter()
        .enumerate()
        .map(|(hour, views)| HourlyBucket {
            hour: hour as u32,
            views,
        })
        .collect()
}

fn weekdays(events: &[&Stamped]) -> Vec<WeekdayBucket> {
    let mut buckets = [0u64; 7];
    for stamped in events {
        buckets[stamped.at.weekday().num_days_from_sunday() as usize] += 1;
    }
    WEEKDAY_LABELS
        .iter()
        .zip(buckets)
        .map(|(day, views)| WeekdayBucket {
            day: day.to_string(),
            views,
        })
        .collect()
}

fn trend(events: &[&Stamped], now: DateTime<Utc>) -> TrendMetric {
    let current_start = days_before(now, TREND_WINDOW_DAYS);
    let previous_start = days_before(now, TREND_WINDOW_DAYS * 2);

    let mut current = 0;
    let mut previous = 0;
    for stamped in events {
        if stamped.at >= current_start {
            current += 1;
        } else if stamped.at >= previous_start {
            previous += 1;
        }
    }
    TrendMetric::between(current, previous)
}
