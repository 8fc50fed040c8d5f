pub mod browser_clock;
pub mod browser_url_store;
pub mod search_context;
pub mod search_handle;
