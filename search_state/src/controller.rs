//! The search-filter controller.
//!
//! Owns one search context's [`FilterState`], the loaded result window, the
//! pagination metadata of the last good response and the selected item.
//! Every response is tagged with the sequence number of the request that
//! produced it; only the most recently dispatched request is ever applied.

use std::time::Duration;

use common::{
    errors::FilterError,
    query_string::QueryPairs,
    search_const::{DEBOUNCE_MILLIS, DEFAULT_PAGE_SIZE},
    search_query::{FilterSchema, FilterState, SortDirection, parse_sort},
    search_result::{PageResponse, PaginationMetadata, ResultItem},
};

use crate::{debounce::Debouncer, listing_api::FetchError, persistence::UrlStateStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub page_size: u32,
    pub debounce: Duration,
    /// Fetch as soon as the controller is mounted.
    pub immediate: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: Duration::from_millis(DEBOUNCE_MILLIS),
            immediate: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// The response becomes the whole result list.
    Replace,
    /// The response is appended to the loaded list.
    Append,
}

/// A request the host must perform and report back through
/// [`SearchController::complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub seq: u64,
    pub mode: FetchMode,
    pub request: QueryPairs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Failed,
    /// A newer request was dispatched; the response was dropped.
    Stale,
    Disposed,
}

/// 1-based positions of the loaded items within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRange {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

#[derive(Debug)]
struct QueuedSearch {
    text: String,
    location: Option<String>,
}

#[derive(Debug)]
pub struct SearchController<F: FilterSchema, I, S> {
    config: ControllerConfig,
    state: FilterState<F>,
    items: Vec<I>,
    pagination: Option<PaginationMetadata>,
    first_loaded_page: u32,
    /// 1-based position of the first loaded item, from the Replace response that started the window.
    window_first: u64,
    error: Option<String>,
    selected: Option<String>,
    in_flight: Option<(u64, FetchMode)>,
    last_seq: u64,
    queued_search: Debouncer<QueuedSearch>,
    store: S,
    disposed: bool,
}

impl<F, I, S> SearchController<F, I, S>
where
    F: FilterSchema,
    I: ResultItem,
    S: UrlStateStore,
{
    /// Seeds the filter state from the store's current query.
    pub fn new(config: ControllerConfig, store: S) -> Self {
        let mut state = FilterState::<F>::from_url_query(&store.load(), config.page_size);
        if let Err(e) = state.validate() {
            tracing::warn!("invalid initial search state ({e}), using defaults");
            state = FilterState::default();
        }
        Self {
            config,
            first_loaded_page: state.page,
            window_first: 1,
            state,
            items: Vec::new(),
            pagination: None,
            error: None,
            selected: None,
            in_flight: None,
            last_seq: 0,
            queued_search: Debouncer::new(config.debounce),
            store,
            disposed: false,
        }
    }

    /// The first fetch for a freshly mounted view, when configured to load immediately.
    pub fn initial_fetch(&mut self) -> Option<FetchTicket> {
        if !self.config.immediate || self.last_seq != 0 {
            return None;
        }
        Some(self.dispatch_current())
    }

    /// Applies `edit` to a copy of the filter state and commits it if anything changed.
    ///
    /// Changing any constraint other than `page` sends the view back to page 1,
    /// even when `edit` also set a page. An edit that changes nothing does not
    /// touch the URL and does not fetch.
    pub fn update_filters(
        &mut self,
        edit: impl FnOnce(&mut FilterState<F>),
    ) -> Result<Option<FetchTicket>, FilterError> {
        let mut next = self.state.clone();
        edit(&mut next);
        next.normalize();
        if !next.same_constraints(&self.state) {
            next.page = 1;
        }
        next.validate()?;
        if next == self.state {
            tracing::trace!("filter update changed nothing");
            return Ok(None);
        }
        self.state = next;
        self.persist();
        Ok(Some(self.dispatch_current()))
    }

    /// Back to defaults, keeping the page size. Always fetches.
    pub fn reset_filters(&mut self) -> FetchTicket {
        self.queued_search.cancel();
        self.state = self.state.reset();
        self.persist();
        self.dispatch_current()
    }

    /// Queues free text (and optionally a location) behind the debounce
    /// delay. Returns when the input becomes due; call
    /// [`poll_search`](Self::poll_search) at or after that time.
    ///
    /// A `None` location keeps the location of a still-pending input, so
    /// typing in one box never discards what was just typed in the other.
    pub fn search(&mut self, text: impl Into<String>, location: Option<String>, now: Duration) -> Duration {
        let location = location.or_else(|| self.queued_search.cancel().and_then(|queued| queued.location));
        self.queued_search.submit(QueuedSearch { text: text.into(), location }, now)
    }

    /// Commits the queued search once its quiet period has passed.
    /// Inputs superseded by a later [`search`](Self::search) never commit.
    pub fn poll_search(&mut self, now: Duration) -> Result<Option<FetchTicket>, FilterError> {
        let Some(queued) = self.queued_search.poll(now) else {
            return Ok(None);
        };
        self.update_filters(move |state| {
            state.query = queued.text;
            if let Some(location) = queued.location {
                state.filters.set_location(Some(location));
            }
        })
    }

    pub fn is_search_pending(&self) -> bool {
        self.queued_search.is_pending()
    }

    pub fn change_sort(&mut self, key: F::Sort, direction: SortDirection) -> Result<Option<FetchTicket>, FilterError> {
        self.update_filters(|state| {
            state.sort_by = key;
            state.sort_order = direction;
        })
    }

    /// Sort from untyped input, checked against the context's allow-list.
    pub fn change_sort_by_name(&mut self, key: &str, direction: &str) -> Result<Option<FetchTicket>, FilterError> {
        let (key, direction) = parse_sort::<F::Sort>(key, direction)?;
        self.change_sort(key, direction)
    }

    pub fn toggle_filter(&mut self, field: F::Field, value: &str) -> Result<Option<FetchTicket>, FilterError> {
        self.update_filters(|state| state.filters.toggle(field, value))
    }

    /// Jumps to page `page`, replacing the loaded list.
    ///
    /// Jumping to the current page still fetches when the list holds
    /// appended pages, so the result is exactly one page.
    pub fn go_to_page(&mut self, page: u32) -> Result<Option<FetchTicket>, FilterError> {
        if page == 0 {
            return Err(FilterError::InvalidPage(page));
        }
        let ticket = self.update_filters(|state| state.page = page)?;
        if ticket.is_none() && self.holds_appended_pages() {
            tracing::debug!(page, "collapsing load-more window back to one page");
            return Ok(Some(self.dispatch_current()));
        }
        Ok(ticket)
    }

    /// Fetches the page after the last loaded one and appends it.
    ///
    /// Does nothing while any fetch is in flight or when the server reported
    /// no next page. The URL keeps pointing at the first page of the window.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        let pagination = self.pagination?;
        if !pagination.has_next_page {
            return None;
        }
        let mut next = self.state.clone();
        next.page = pagination.current_page + 1;
        Some(self.dispatch(FetchMode::Append, next.to_request_pairs()))
    }

    /// Re-runs the current search, e.g. after a failure.
    pub fn refresh(&mut self) -> FetchTicket {
        self.dispatch_current()
    }

    pub fn select_item(&mut self, id: Option<String>) {
        self.selected = id;
    }

    /// Selects the item after the current selection, or the first item when
    /// nothing loaded is selected. Returns false at the end of the list.
    pub fn select_next(&mut self) -> bool {
        let next = match self.selected_index() {
            Some(index) => index + 1,
            None => 0,
        };
        self.select_index(next)
    }

    pub fn select_previous(&mut self) -> bool {
        match self.selected_index() {
            Some(index) if index > 0 => self.select_index(index - 1),
            _ => false,
        }
    }

    /// Records the outcome of the request tagged `seq`.
    pub fn complete(&mut self, seq: u64, outcome: Result<PageResponse<I>, FetchError>) -> Completion {
        if self.disposed {
            tracing::debug!(seq, "search view disposed, dropping response");
            return Completion::Disposed;
        }
        let mode = match self.in_flight {
            Some((current, mode)) if current == seq => mode,
            _ => {
                tracing::debug!(seq, latest = self.last_seq, "dropping stale listing response");
                return Completion::Stale;
            }
        };
        self.in_flight = None;

        match outcome {
            Ok(page) => {
                tracing::debug!(
                    seq,
                    received = page.data.len(),
                    page = page.pagination.current_page,
                    total = page.pagination.total_items,
                    "applying listing response"
                );
                match mode {
                    FetchMode::Replace => {
                        self.window_first = first_position(&page);
                        self.items = page.data;
                        self.first_loaded_page = page.pagination.current_page.max(1);
                    }
                    FetchMode::Append => self.items.extend(page.data),
                }
                self.pagination = Some(page.pagination);
                self.error = None;
                Completion::Applied
            }
            Err(e) => {
                tracing::warn!(seq, "listing fetch failed: {e}");
                self.error = Some(e.user_message());
                Completion::Failed
            }
        }
    }

    /// Stops the controller from accepting further responses.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.queued_search.cancel();
        self.in_flight = None;
    }

    pub fn filters(&self) -> &FilterState<F> {
        &self.state
    }

    pub fn items(&self) -> &[I] {
        &self.items
    }

    pub fn pagination(&self) -> Option<&PaginationMetadata> {
        self.pagination.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn phase(&self) -> FetchPhase {
        if self.in_flight.is_some() {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else {
            FetchPhase::Idle
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected item, if it is part of the loaded list.
    pub fn selected_item(&self) -> Option<&I> {
        self.selected_index().map(|index| &self.items[index])
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    pub fn url_query(&self) -> String {
        self.state.to_url_query()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// First and last loaded page, once a response arrived.
    pub fn loaded_pages(&self) -> Option<(u32, u32)> {
        self.pagination.map(|p| (self.first_loaded_page, p.current_page.max(self.first_loaded_page)))
    }

    /// Positions as the server reported them; the configured page size is
    /// not assumed to be what the server honoured.
    pub fn result_summary(&self) -> Option<ResultRange> {
        let pagination = self.pagination?;
        if self.items.is_empty() || pagination.total_items == 0 {
            return None;
        }
        let first = self.window_first.min(pagination.total_items);
        let last = (first + self.items.len() as u64 - 1).min(pagination.total_items);
        Some(ResultRange { first, last, total: pagination.total_items })
    }

    fn holds_appended_pages(&self) -> bool {
        let appending = matches!(self.in_flight, Some((_, FetchMode::Append)));
        let appended = self.pagination.is_some_and(|p| p.current_page != self.first_loaded_page);
        appending || appended
    }

    fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_deref()?;
        self.items.iter().position(|item| item.item_id() == selected)
    }

    fn select_index(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                self.selected = Some(item.item_id().to_string());
                true
            }
            None => false,
        }
    }

    fn persist(&self) {
        self.store.save(&self.state.to_url_query());
    }

    fn dispatch_current(&mut self) -> FetchTicket {
        let request = self.state.to_request_pairs();
        self.dispatch(FetchMode::Replace, request)
    }

    fn dispatch(&mut self, mode: FetchMode, request: QueryPairs) -> FetchTicket {
        self.last_seq += 1;
        if let Some((superseded, _)) = self.in_flight {
            tracing::debug!(superseded, seq = self.last_seq, "superseding in-flight listing fetch");
        }
        self.in_flight = Some((self.last_seq, mode));
        tracing::debug!(seq = self.last_seq, ?mode, "dispatching listing fetch: {request}");
        FetchTicket { seq: self.last_seq, mode, request }
    }
}

/// 1-based position of a page's first item. A page with a successor is a
/// full page, so its length is the page size; the last page ends at `totalItems`.
fn first_position<I>(page: &PageResponse<I>) -> u64 {
    let len = page.data.len() as u64;
    let meta = page.pagination;
    if meta.has_next_page {
        u64::from(meta.current_page.max(1) - 1) * len + 1
    } else {
        meta.total_items.saturating_sub(len) + 1
    }
}
