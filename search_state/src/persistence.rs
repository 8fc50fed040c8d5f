//! Where the shareable query string lives.

use std::{cell::RefCell, rc::Rc};

/// External store for the serialized filter state (the address bar in a browser).
///
/// Read once when a controller is created, written after every committed
/// filter change.
pub trait UrlStateStore {
    fn load(&self) -> String;
    fn save(&self, query: &str);
}

#[derive(Debug, Default)]
struct MemoryHistory {
    current: String,
    writes: Vec<String>,
}

/// In-memory store. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct MemoryUrlStore {
    inner: Rc<RefCell<MemoryHistory>>,
}

impl MemoryUrlStore {
    pub fn new(initial: &str) -> Self {
        let store = Self::default();
        store.inner.borrow_mut().current = initial.to_string();
        store
    }

    pub fn current(&self) -> String {
        self.inner.borrow().current.clone()
    }

    /// Every query written through [`UrlStateStore::save`], oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.inner.borrow().writes.clone()
    }
}

impl UrlStateStore for MemoryUrlStore {
    fn load(&self) -> String {
        self.inner.borrow().current.clone()
    }

    fn save(&self, query: &str) {
        let mut history = self.inner.borrow_mut();
        history.current = query.to_string();
        history.writes.push(query.to_string());
    }
}
