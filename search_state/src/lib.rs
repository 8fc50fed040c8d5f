//! Search-filter controller shared by every listing page.
//!
//! The controller never performs I/O itself. Operations that need data
//! return a [`controller::FetchTicket`]; the host runs it through a
//! [`listing_api::ListingApi`] and hands the outcome back to
//! [`controller::SearchController::complete`].

pub mod debounce;
pub mod persistence;
pub mod listing_api;
pub mod controller;

pub use controller::{Completion, ControllerConfig, FetchMode, FetchPhase, FetchTicket, ResultRange, SearchController};
pub use listing_api::{FetchError, ListingApi};
pub use persistence::{MemoryUrlStore, UrlStateStore};
