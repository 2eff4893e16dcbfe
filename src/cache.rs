use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use ahash::AHashMap;
use once_cell::sync::OnceCell;
use tracing::trace;

use crate::constants::DEFAULT_CACHE_CAPACITY;

type Slot<T> = Arc<OnceCell<T>>;

struct Slots<T> {
    map: AHashMap<Vec<u8>, Slot<T>>,
    order: VecDeque<Vec<u8>>,
}

/// Bounded first-in-first-out memo keyed by (normalized) sequence. Each key is
/// computed at most once while it stays cached, even under concurrent access;
/// callers racing on the same key block until the first computation finishes.
pub struct Memo<T> {
    capacity: usize,
    slots: Mutex<Slots<T>>,
}

impl<T: Clone> Memo<T> {
    pub fn new(capacity: usize) -> Memo<T> {
        Memo {
            capacity,
            slots: Mutex::new(Slots {
                map: AHashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Returns an owned copy of the cached value, computing it if needed
    pub fn get_or_compute<F>(&self, key: &[u8], compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.slot(key) {
            Some(slot) => slot.get_or_init(compute).clone(),
            None => compute(),
        }
    }

    fn slot(&self, key: &[u8]) -> Option<Slot<T>> {
        if self.capacity == 0 {
            return None;
        }

        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = slots.map.get(key) {
            trace!(length = key.len(), "cache hit");
            return Some(Arc::clone(slot));
        }

        while slots.map.len() >= self.capacity {
            match slots.order.pop_front() {
                Some(oldest) => {
                    slots.map.remove(&oldest);
                }
                None => break,
            }
        }

        let slot: Slot<T> = Arc::new(OnceCell::new());
        slots.map.insert(key.to_owned(), Arc::clone(&slot));
        slots.order.push_back(key.to_owned());

        Some(slot)
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.map.clear();
        slots.order.clear();
    }
}

/// Results of the scanning operations of a single digester, keyed by
/// operation and sequence.
pub struct DigestCache {
    pub(crate) fragments: Memo<Vec<Vec<u8>>>,
    pub(crate) sites: Memo<Vec<usize>>,
    pub(crate) substrates: Memo<bool>,
}

impl DigestCache {
    /// Caches up to `capacity` sequences per operation; 0 disables caching
    pub fn new(capacity: usize) -> DigestCache {
        DigestCache {
            fragments: Memo::new(capacity),
            sites: Memo::new(capacity),
            substrates: Memo::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.fragments.capacity
    }

    pub fn len(&self) -> usize {
        self.fragments.len() + self.sites.len() + self.substrates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.fragments.clear();
        self.sites.clear();
        self.substrates.clear();
    }
}

impl Default for DigestCache {
    fn default() -> Self {
        DigestCache::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl fmt::Debug for DigestCache {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DigestCache")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}
