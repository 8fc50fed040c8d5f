//! Client configuration, fixed at build time.
//!
//! Values come from the build environment (`JOBBOARD_API_URL`,
//! `JOBBOARD_PAGE_SIZE`, `JOBBOARD_DEBOUNCE_MS`); anything unset or
//! unparsable falls back to the defaults below.

use std::{str::FromStr, time::Duration};

use anyhow::Context;
use common::search_const::{DEBOUNCE_MILLIS, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use dioxus::logger::tracing;
use search_state::ControllerConfig;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub debounce: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce: Duration::from_millis(DEBOUNCE_MILLIS),
        }
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("JOBBOARD_API_URL"),
            option_env!("JOBBOARD_PAGE_SIZE"),
            option_env!("JOBBOARD_DEBOUNCE_MS"),
        )
    }

    fn from_values(api_url: Option<&str>, page_size: Option<&str>, debounce_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let page_size = read_setting::<u32>("JOBBOARD_PAGE_SIZE", page_size)
            .and_then(|size| match size {
                Some(size) if !(1..=MAX_PAGE_SIZE).contains(&size) => {
                    anyhow::bail!("JOBBOARD_PAGE_SIZE={size} is outside 1..={MAX_PAGE_SIZE}")
                }
                other => Ok(other),
            })
            .unwrap_or_else(|e| {
                tracing::warn!("{e:#}");
                None
            })
            .unwrap_or(defaults.page_size);
        let debounce = read_setting::<u64>("JOBBOARD_DEBOUNCE_MS", debounce_ms)
            .unwrap_or_else(|e| {
                tracing::warn!("{e:#}");
                None
            })
            .map(Duration::from_millis)
            .unwrap_or(defaults.debounce);
        Self {
            api_base_url: api_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            page_size,
            debounce,
        }
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            page_size: self.page_size,
            debounce: self.debounce,
            immediate: true,
        }
    }
}

fn read_setting<T>(name: &str, raw: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.map(|raw| raw.trim().parse::<T>().with_context(|| format!("invalid {name}={raw:?}")))
        .transpose()
}
