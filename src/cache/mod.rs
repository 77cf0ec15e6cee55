//! Results of previous computations, keyed by the exact snippet text.

use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;

/// How many results to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Keep everything for the life of the cache.
    Unbounded,
    /// Keep at most this many, discarding the least recently used.
    Bounded(NonZeroUsize),
    /// Keep nothing; every lookup misses.
    Disabled,
}

impl CachePolicy {
    /// `None` is unbounded, zero disables caching.
    pub fn from_capacity(capacity: Option<usize>) -> CachePolicy {
        match capacity {
            None => CachePolicy::Unbounded,
            Some(n) => match NonZeroUsize::new(n) {
                Some(n) => CachePolicy::Bounded(n),
                None => CachePolicy::Disabled,
            },
        }
    }
}

/// Maps raw snippet text, byte for byte, to the display string computed for
/// it. Snippets with identical text share an entry wherever they appear in
/// a document; snippets differing by so much as a space do not.
pub struct ResultCache {
    policy: CachePolicy,
    entries: LruCache<String, String>,
    hits: u64,
    misses: u64,
}

impl ResultCache {
    pub fn new(policy: CachePolicy) -> ResultCache {
        let entries = match policy {
            CachePolicy::Bounded(capacity) => LruCache::new(capacity),
            CachePolicy::Unbounded | CachePolicy::Disabled => LruCache::unbounded(),
        };
        ResultCache {
            policy,
            entries,
            hits: 0,
            misses: 0,
        }
    }

    pub fn unbounded() -> ResultCache {
        ResultCache::new(CachePolicy::Unbounded)
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn get(&mut self, text: &str) -> Option<&str> {
        match self
            .entries
            .get(text)
        {
            Some(outcome) => {
                self.hits += 1;
                Some(outcome.as_str())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store, replacing any previous outcome for the same text.
    pub fn set(&mut self, text: &str, outcome: String) {
        if self.policy == CachePolicy::Disabled {
            return;
        }
        self.entries
            .put(text.to_string(), outcome);
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries
            .contains(text)
    }

    pub fn len(&self) -> usize {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }

    pub fn clear(&mut self) {
        self.entries
            .clear();
    }

    /// Lookups that found an entry, and lookups that didn't.
    pub fn statistics(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        ResultCache::unbounded()
    }
}

impl fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCache")
            .field("policy", &self.policy)
            .field("len", &self.entries.len())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
