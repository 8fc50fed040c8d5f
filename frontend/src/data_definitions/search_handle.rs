//! `use_search`: one search controller per mounted listing page.

use common::{
    errors::FilterError,
    search_query::{FilterSchema, FilterState, SortDirection},
};
use dioxus::{logger::tracing, prelude::*};
use gloo_timers::future::TimeoutFuture;
use search_state::{FetchTicket, ListingApi, SearchController};

use crate::{
    api::listing_api::{ApiSession, RestListingApi},
    config::ClientConfig,
    data_definitions::{browser_clock, browser_url_store::BrowserUrlStore, search_context::SearchContext},
};

pub type PageController<C> =
    SearchController<<C as SearchContext>::Filters, <C as SearchContext>::Item, BrowserUrlStore>;
type SortKey<C> = <<C as SearchContext>::Filters as FilterSchema>::Sort;
type FilterField<C> = <<C as SearchContext>::Filters as FilterSchema>::Field;

/// Reactive access to a page's controller.
///
/// Components read state through `controller` (subscribing to changes) and
/// mutate it only through the methods below, which run any resulting fetch.
pub struct SearchHandle<C: SearchContext> {
    pub controller: Signal<PageController<C>>,
    dispatch: Callback<FetchTicket>,
}

impl<C: SearchContext> Clone for SearchHandle<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: SearchContext> Copy for SearchHandle<C> {}

impl<C: SearchContext> PartialEq for SearchHandle<C> {
    fn eq(&self, other: &Self) -> bool {
        self.controller == other.controller && self.dispatch == other.dispatch
    }
}

fn forward(dispatch: Callback<FetchTicket>, outcome: Result<Option<FetchTicket>, FilterError>) {
    match outcome {
        Ok(Some(ticket)) => dispatch.call(ticket),
        Ok(None) => {}
        Err(e) => tracing::warn!("rejected filter change: {e}"),
    }
}

impl<C: SearchContext> SearchHandle<C> {
    pub fn update(&self, edit: impl FnOnce(&mut FilterState<C::Filters>)) {
        let mut controller = self.controller;
        let outcome = controller.write().update_filters(edit);
        forward(self.dispatch, outcome);
    }

    pub fn toggle(&self, field: FilterField<C>, value: &str) {
        let mut controller = self.controller;
        let outcome = controller.write().toggle_filter(field, value);
        forward(self.dispatch, outcome);
    }

    pub fn change_sort(&self, key: SortKey<C>, direction: SortDirection) {
        let mut controller = self.controller;
        let outcome = controller.write().change_sort(key, direction);
        forward(self.dispatch, outcome);
    }

    pub fn go_to_page(&self, page: u32) {
        let mut controller = self.controller;
        let outcome = controller.write().go_to_page(page);
        forward(self.dispatch, outcome);
    }

    pub fn load_more(&self) {
        let mut controller = self.controller;
        let ticket = controller.write().load_more();
        if let Some(ticket) = ticket {
            self.dispatch.call(ticket);
        }
    }

    pub fn reset(&self) {
        let mut controller = self.controller;
        let ticket = controller.write().reset_filters();
        self.dispatch.call(ticket);
    }

    pub fn refresh(&self) {
        let mut controller = self.controller;
        let ticket = controller.write().refresh();
        self.dispatch.call(ticket);
    }

    pub fn select(&self, id: Option<String>) {
        let mut controller = self.controller;
        controller.write().select_item(id);
    }

    pub fn select_next(&self) -> bool {
        let mut controller = self.controller;
        controller.write().select_next()
    }

    pub fn select_previous(&self) -> bool {
        let mut controller = self.controller;
        controller.write().select_previous()
    }

    /// Debounced free-text (and location) search.
    pub fn search(&self, text: String, location: Option<String>) {
        let mut controller = self.controller;
        let dispatch = self.dispatch;
        let due = controller.write().search(text, location, browser_clock::now());
        spawn(async move {
            let wait = due.saturating_sub(browser_clock::now());
            TimeoutFuture::new(wait.as_millis().min(u32::MAX as u128) as u32 + 1).await;
            let outcome = controller.write().poll_search(browser_clock::now());
            forward(dispatch, outcome);
        });
    }
}

/// Mounts a controller for `C`, seeded from the current URL, and starts the first fetch.
pub fn use_search<C: SearchContext>() -> SearchHandle<C> {
    let config = use_context::<ClientConfig>();
    let session = use_context::<ApiSession>();
    let api = use_hook(|| RestListingApi::new(session, C::ENDPOINT));
    let mut controller = use_signal(|| PageController::<C>::new(config.controller_config(), BrowserUrlStore));

    let dispatch = use_callback(move |ticket: FetchTicket| {
        let api = api.clone();
        spawn(async move {
            let outcome = ListingApi::<C::Item>::fetch_page(&api, &ticket.request).await;
            let completion = controller.write().complete(ticket.seq, outcome);
            tracing::debug!(seq = ticket.seq, ?completion, "{} listing fetch finished", C::TITLE);
        });
    });

    use_hook(move || {
        spawn(async move {
            let ticket = controller.write().initial_fetch();
            if let Some(ticket) = ticket {
                dispatch.call(ticket);
            }
        });
    });

    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.dispose();
        }
    });

    SearchHandle { controller, dispatch }
}
