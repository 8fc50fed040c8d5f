//! Shared search query models and helpers.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::{
    errors::FilterError,
    query_string::QueryPairs,
    search_const::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Server-recognized sortable fields for one search context.
pub trait SortField: Copy + Eq + Debug + Default + 'static {
    const ALL: &'static [Self];

    fn as_param(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn from_param(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_param() == s)
    }
}

/// Inclusive numeric bounds; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl NumericRange {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn validate(&self, field: &'static str) -> Result<(), FilterError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(FilterError::InvalidRange { field, min, max }),
            _ => Ok(()),
        }
    }
}

/// The closed set of constraints one search context understands.
pub trait FilterSchema: Clone + PartialEq + Debug + Default + 'static {
    type Sort: SortField;
    /// Fields a single value can be toggled on or off in.
    type Field: Copy + Eq + Debug + 'static;

    /// Collapses blank strings and empty selections to "absent".
    fn normalize(&mut self);

    fn validate(&self) -> Result<(), FilterError>;

    /// Adds `value` to the field, or removes it when already selected.
    /// Single-valued fields are cleared by toggling their current value.
    fn toggle(&mut self, field: Self::Field, value: &str);

    fn is_selected(&self, field: Self::Field, value: &str) -> bool;

    fn location(&self) -> Option<&str>;

    fn set_location(&mut self, location: Option<String>);

    /// Writes non-default fields only.
    fn write_pairs(&self, out: &mut QueryPairs);

    fn read_pairs(pairs: &QueryPairs) -> Self;

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub(crate) fn normalize_opt(value: &mut Option<String>) {
    if let Some(v) = value {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            *value = None;
        } else if trimmed.len() != v.len() {
            *value = Some(trimmed.to_string());
        }
    }
}

pub(crate) fn normalize_set(values: &mut std::collections::BTreeSet<String>) {
    let cleaned = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    *values = cleaned;
}

pub(crate) fn toggle_opt(slot: &mut Option<String>, value: &str) {
    if slot.as_deref() == Some(value) {
        *slot = None;
    } else {
        *slot = Some(value.to_string());
    }
}

pub(crate) fn toggle_set(values: &mut std::collections::BTreeSet<String>, value: &str) {
    if !values.remove(value) {
        values.insert(value.to_string());
    }
}

/// Complete search constraints, paging and sort for one search context.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<F: FilterSchema> {
    pub query: String,
    pub filters: F,
    pub page: u32,
    pub page_size: u32,
    pub sort_by: F::Sort,
    pub sort_order: SortDirection,
}

impl<F: FilterSchema> Default for FilterState<F> {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl<F: FilterSchema> FilterState<F> {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            query: String::new(),
            filters: F::default(),
            page: 1,
            page_size,
            sort_by: F::Sort::default(),
            sort_order: SortDirection::default(),
        }
    }

    /// Defaults, keeping this state's page size.
    pub fn reset(&self) -> Self {
        Self::with_page_size(self.page_size)
    }

    pub fn normalize(&mut self) {
        let trimmed = self.query.trim();
        if trimmed.len() != self.query.len() {
            self.query = trimmed.to_string();
        }
        self.filters.normalize();
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.page == 0 {
            return Err(FilterError::InvalidPage(self.page));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(FilterError::InvalidPageSize { got: self.page_size, max: MAX_PAGE_SIZE });
        }
        self.filters.validate()
    }

    /// True when text or any schema field differs from its default.
    /// Paging and sort do not count.
    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty() || !self.filters.is_empty()
    }

    /// Equal in everything except `page`.
    pub fn same_constraints(&self, other: &Self) -> bool {
        self.query == other.query
            && self.filters == other.filters
            && self.page_size == other.page_size
            && self.sort_by == other.sort_by
            && self.sort_order == other.sort_order
    }

    /// Shareable URL form: default-valued fields are omitted.
    pub fn to_url_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if !self.query.is_empty() {
            pairs.push("q", self.query.as_str());
        }
        self.filters.write_pairs(&mut pairs);
        if self.page != 1 {
            pairs.push("page", self.page.to_string());
        }
        if self.sort_by != F::Sort::default() {
            pairs.push("sortBy", self.sort_by.as_param());
        }
        if self.sort_order != SortDirection::default() {
            pairs.push("sortOrder", self.sort_order.as_param());
        }
        pairs
    }

    pub fn to_url_query(&self) -> String {
        self.to_url_pairs().to_query_string()
    }

    /// Reads a shareable URL query; anything missing or malformed takes its default.
    pub fn from_url_query(query: &str, page_size: u32) -> Self {
        let pairs = QueryPairs::parse(query);
        let mut state = Self::with_page_size(page_size);
        state.query = pairs.get_string("q").unwrap_or_default();
        state.filters = F::read_pairs(&pairs);
        state.page = pairs.get_parsed::<u32>("page").filter(|p| *p >= 1).unwrap_or(1);
        if let Some(raw) = pairs.get_string("sortBy") {
            match F::Sort::from_param(&raw) {
                Some(key) => state.sort_by = key,
                None => tracing::warn!("ignoring unknown sortBy={raw:?}"),
            }
        }
        if let Some(raw) = pairs.get_string("sortOrder") {
            match SortDirection::from_param(&raw) {
                Some(direction) => state.sort_order = direction,
                None => tracing::warn!("ignoring unknown sortOrder={raw:?}"),
            }
        }
        state.normalize();
        state
    }

    /// Request parameters for the listing endpoint. Paging and sort are always present.
    pub fn to_request_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if !self.query.is_empty() {
            pairs.push("search", self.query.as_str());
        }
        self.filters.write_pairs(&mut pairs);
        pairs.push("page", self.page.to_string());
        pairs.push("limit", self.page_size.to_string());
        pairs.push("sortBy", self.sort_by.as_param());
        pairs.push("sortOrder", self.sort_order.as_param());
        pairs
    }
}

/// Parses sort parameters against the allow-list of `S`.
pub fn parse_sort<S: SortField>(key: &str, direction: &str) -> Result<(S, SortDirection), FilterError> {
    let key = S::from_param(key).ok_or_else(|| FilterError::UnknownSortKey(key.to_string()))?;
    let direction = SortDirection::from_param(direction)
        .ok_or_else(|| FilterError::UnknownSortDirection(direction.to_string()))?;
    Ok((key, direction))
}
