//! Memoizing lookup cache built on [`OrderedList`](crate::ordered::OrderedList).
//!
//! A [`LookupCache`] remembers, per normalized query term, the sorted and
//! deduplicated results some resolver produced for it. The resolver (a
//! remote service, a dictionary, anything) is supplied by the caller on each
//! lookup and only runs on a miss.
//!
//! # Examples
//!
//! ```rust
//! use ordlist::cache::LookupCache;
//! use std::convert::Infallible;
//!
//! let cache = LookupCache::new();
//!
//! let results = cache
//!     .lookup("  quick ", |term| {
//!         assert_eq!(term, "quick");
//!         Ok::<_, Infallible>(vec!["rapid", "fast", "swift", "fast"])
//!     })
//!     .unwrap();
//! assert_eq!(results.as_slice(), ["fast", "rapid", "swift"]);
//!
//! // Served from the cache: the resolver is not called again.
//! let again = cache
//!     .lookup("quick", |_| -> Result<Vec<String>, Infallible> { unreachable!() })
//!     .unwrap();
//! assert_eq!(again, results);
//! ```

mod lookup;

pub use lookup::{CacheEntry, LookupCache, LookupError, LookupResults, normalize_term};
