use std::sync::Arc;

use tracing::debug;

use crate::ordered::{Comparator, OrderedList, OrderedListError, OrderedListOptions, Presence};

/// Normalizes a raw query into the key the cache stores it under.
///
/// Surrounding whitespace is not part of a term.
#[must_use]
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_owned()
}

/// Errors returned by [`LookupCache::lookup`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError<E> {
    /// The resolver failed; nothing was cached.
    #[error("resolver failed")]
    Resolver(#[source] E),

    /// Storing the results was rejected.
    #[error(transparent)]
    Container(#[from] OrderedListError),
}

/// Ordered results of one lookup, detached from the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResults {
    words: Vec<String>,
}

impl LookupResults {
    /// Results with nothing in them.
    #[must_use]
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// The results in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Consumes the results into a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.words
    }

    /// Number of results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if there are no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the results in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Whether there is anything to show: no results and a single empty
    /// result both mean "show nothing".
    ///
    /// ```rust
    /// use ordlist::cache::LookupResults;
    ///
    /// assert!(!LookupResults::empty().is_displayable());
    /// assert!(!LookupResults::from(vec![String::new()]).is_displayable());
    /// assert!(LookupResults::from(vec!["word".to_string()]).is_displayable());
    /// ```
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        match self.words.as_slice() {
            [] => false,
            [only] => !only.is_empty(),
            _ => true,
        }
    }
}

impl From<Vec<String>> for LookupResults {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl From<&OrderedList<String>> for LookupResults {
    fn from(list: &OrderedList<String>) -> Self {
        Self {
            words: list.to_vec(),
        }
    }
}

impl IntoIterator for LookupResults {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a LookupResults {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// One cached term with its results.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    term: String,
    results: Arc<OrderedList<String>>,
}

impl CacheEntry {
    /// The normalized term.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The sorted results stored for the term.
    #[must_use]
    pub const fn results(&self) -> &Arc<OrderedList<String>> {
        &self.results
    }
}

impl Presence for CacheEntry {
    fn is_present(&self) -> bool {
        !self.term.is_empty()
    }
}

/// Thread-safe memo of term → sorted results.
///
/// Entries are kept in an [`OrderedList`] ordered by term and found with a
/// projection search on the term, so a lookup never builds a probe entry.
#[derive(Debug)]
pub struct LookupCache {
    entries: OrderedList<CacheEntry>,
}

impl LookupCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: OrderedList::with_options(
                Comparator::new(|left: &CacheEntry, right: &CacheEntry| left.term.cmp(&right.term)),
                OrderedListOptions::unique(),
            ),
        }
    }

    /// Number of cached terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every cached term.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// The cached terms in order.
    #[must_use]
    pub fn terms(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.term)
            .collect()
    }

    /// The cached entry for a raw query, if any.
    #[must_use]
    pub fn entry(&self, raw: &str) -> Option<CacheEntry> {
        let term = normalize_term(raw);
        self.find(&term)
    }

    /// Cached results for a raw query, without resolving on a miss.
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<LookupResults> {
        self.entry(raw)
            .map(|entry| LookupResults::from(entry.results.as_ref()))
    }

    /// Returns the results for `raw`, calling `resolver` with the normalized
    /// term only when nothing is cached for it yet.
    ///
    /// The resolver runs without any lock held. If another thread stores the
    /// same term in the meantime, its entry is kept and returned.
    ///
    /// An empty normalized term yields empty results and is never cached.
    ///
    /// # Errors
    ///
    /// - [`LookupError::Resolver`] with the resolver's error; nothing is
    ///   cached.
    /// - [`LookupError::Container`] if the results cannot be stored.
    pub fn lookup<F, R, S, E>(&self, raw: &str, resolver: F) -> Result<LookupResults, LookupError<E>>
    where
        F: FnOnce(&str) -> Result<R, E>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let term = normalize_term(raw);
        if term.is_empty() {
            return Ok(LookupResults::empty());
        }
        if let Some(entry) = self.find(&term) {
            debug!(term = %term, "lookup cache hit");
            return Ok(LookupResults::from(entry.results.as_ref()));
        }

        let candidates = resolver(&term).map_err(LookupError::Resolver)?;
        let results: OrderedList<String> = OrderedList::new();
        results.add_all(candidates.into_iter().map(Into::into))?;
        debug!(term = %term, count = results.len(), "lookup cache miss resolved");

        let entry = CacheEntry {
            term,
            results: Arc::new(results),
        };
        let stored = if self.entries.add(entry.clone())?.is_found() {
            self.find(&entry.term).unwrap_or(entry)
        } else {
            entry
        };
        Ok(LookupResults::from(stored.results.as_ref()))
    }

    fn find(&self, term: &str) -> Option<CacheEntry> {
        self.entries.item_by(|entry| entry.term.as_str().cmp(term))
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self::new()
    }
}
