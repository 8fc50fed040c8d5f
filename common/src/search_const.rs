//! Search limits and defaults.

/// Results per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size the listing endpoints accept.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Quiet period before typed search text triggers a fetch.
pub const DEBOUNCE_MILLIS: u64 = 300;
