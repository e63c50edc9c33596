//! Mutable set collection.
//!
//! This module provides [`Set`], a mutable, unordered collection of unique
//! elements built on a hash-based membership index, together with the
//! [`Canonical`] rendering contract, the heterogeneous [`Value`] element
//! type, and the error types for the two fallible operations.
//!
//! # Overview
//!
//! `Set` stores each element exactly once; two elements are the same member
//! iff they are equal under the element type's `Hash + Eq` contract. All
//! algebraic operations (union, intersection, difference, symmetric
//! difference) produce new, independent sets and leave their operands
//! untouched.
//!
//! - O(1) expected contains / insert / discard
//! - O(1) len and `is_empty`
//! - O(n) algebra operations over the operand sizes
//!
//! # Examples
//!
//! ```rust
//! use setars::collection::Set;
//!
//! let mut primes = Set::from([2, 3, 5, 7]);
//! assert!(primes.contains(&5));
//!
//! primes.insert(11);
//! assert_eq!(primes.len(), 5);
//!
//! let odds = Set::from([3, 5, 7, 9, 11]);
//! let odd_primes = primes.intersection(&odds);
//! assert_eq!(odd_primes.len(), 4);
//! ```
//!
//! # Heterogeneous sets
//!
//! ```rust
//! use setars::collection::{Set, Value};
//!
//! let mut mixed = Set::new();
//! mixed.insert(Value::from("alpha"));
//! mixed.insert(Value::from(42_i64));
//! mixed.insert(Value::from(2.7));
//!
//! assert!(mixed.contains(&Value::from("alpha")));
//! assert_eq!(mixed.sorted(), vec!["2.7", "42", "alpha"]);
//! ```
//!
//! # Concurrency
//!
//! Not safe for concurrent access: no operation takes an internal lock.
//! Wrap the whole set in a `Mutex` or `RwLock` if mutating from multiple
//! threads, so that every operation runs under the same guard.

// =============================================================================
// Membership Index Hasher Alias
// =============================================================================

/// Build-hasher used by the membership index.
///
/// With the `fxhash` feature, this is `rustc_hash::FxBuildHasher`, a fast
/// non-keyed hash. `fxhash` takes precedence when both flags are enabled.
#[cfg(feature = "fxhash")]
pub(crate) type IndexState = rustc_hash::FxBuildHasher;

/// Build-hasher used by the membership index.
///
/// With the `ahash` feature (and without `fxhash`), this is
/// `ahash::RandomState`.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexState = ahash::RandomState;

/// Build-hasher used by the membership index.
///
/// Without a hasher feature flag, this is the standard library's
/// `RandomState`.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexState = std::collections::hash_map::RandomState;

mod element;
mod error;
mod set;

pub use element::Canonical;
pub use element::Value;
pub use error::EmptySetError;
pub use error::NotFoundError;
pub use error::SetError;
pub use set::Set;
pub use set::SetIntoIterator;
pub use set::SetIterator;
