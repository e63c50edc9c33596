//! # setars
//!
//! A mutable hash set library for Rust.
//!
//! ## Overview
//!
//! This library provides a single general-purpose collection primitive:
//! [`Set`], an unordered collection of unique elements backed by a
//! hash-based membership index. It covers:
//!
//! - **Membership & mutation**: `contains`, `insert`, `discard`, `remove`,
//!   `pop`, `clear`
//! - **Set algebra**: `union`, `intersection`, `difference`, and
//!   `symmetric_difference`, always producing new, independent sets
//! - **Relational predicates**: `is_subset`, `is_superset`, `is_disjoint`,
//!   and equality independent of insertion order
//! - **Canonical rendering**: deterministic, byte-lexicographic [`sorted`]
//!   and `Display` output via the [`Canonical`] formatting contract
//! - **Heterogeneous elements**: the [`Value`] tagged union for sets mixing
//!   strings, integers, and floats
//!
//! [`Set`]: collection::Set
//! [`sorted`]: collection::Set::sorted
//! [`Canonical`]: collection::Canonical
//! [`Value`]: collection::Value
//!
//! ## Concurrency
//!
//! `Set` is not internally synchronized. Exclusive access is enforced by the
//! borrow checker for single-threaded use; for shared mutation across
//! threads, wrap the whole value in a `Mutex` or `RwLock` so that every
//! operation runs under the same guard.
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc-hash` for the membership index
//! - `ahash`: use `ahash` for the membership index
//!
//! With neither flag, the index uses the standard library's `RandomState`.
//!
//! ## Example
//!
//! ```rust
//! use setars::prelude::*;
//!
//! let alphabet: Set<&str> = Set::from(["alpha", "beta", "gamma"]);
//! let greek: Set<&str> = Set::from(["gamma", "delta"]);
//!
//! let shared = alphabet.intersection(&greek);
//! assert_eq!(shared.len(), 1);
//! assert!(shared.contains("gamma"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use setars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
}

pub mod collection;

#[cfg(test)]
mod tests {
    use crate::collection::Set;

    #[test]
    fn library_compiles() {
        let set: Set<i32> = Set::from([1, 2, 3]);
        assert_eq!(set.len(), 3);
    }
}
