use crate::modules::products::use_cases::compose_feed::feed::{
    DEFAULT_FEATURED_INTERVAL, DEFAULT_PAGE_SIZE,
};
use crate::modules::products::use_cases::compose_feed::handler::FeedSettings;
use anyhow::Context;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub feed: FeedSettings,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8080")?;

        let page_size = positive(&lookup, "FEED_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let featured_interval =
            positive(&lookup, "FEED_FEATURED_INTERVAL", DEFAULT_FEATURED_INTERVAL)?;

        Ok(Self {
            bind_addr,
            feed: FeedSettings {
                page_size,
                featured_interval,
            },
        })
    }
}

fn positive<F>(lookup: &F, key: &str, default: usize) -> anyhow::Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("{key} must be a positive integer, got {raw:?}"))?;
    anyhow::ensure!(value > 0, "{key} must be greater than zero");
    Ok(value)
}
