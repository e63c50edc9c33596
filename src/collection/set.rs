//! Mutable hash set.
//!
//! This module provides [`Set`], a mutable, unordered collection of unique
//! elements that uses a hash map from element to a zero-size presence
//! marker as its membership index.
//!
//! # Overview
//!
//! Every algebraic operation is expressed in terms of three primitives:
//! construction, membership test, and insertion. Binary operations
//! (`union`, `intersection`, `difference`, `symmetric_difference`) always
//! allocate a new set and leave both operands untouched.
//!
//! - O(1) expected contains / insert / discard
//! - O(1) len and `is_empty`
//! - O(n) iteration, in unspecified order
//!
//! # Examples
//!
//! ```rust
//! use setars::collection::Set;
//!
//! let mut set = Set::new();
//! set.insert(7);
//! set.insert(12);
//! set.insert(42);
//!
//! assert!(set.contains(&42));
//! assert!(!set.contains(&13));
//! assert_eq!(set.len(), 3);
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use setars::collection::Set;
//!
//! let set_a: Set<i32> = Set::from([1, 2, 3]);
//! let set_b: Set<i32> = Set::from([2, 3, 4]);
//!
//! let union = set_a.union(&set_b);                       // {1, 2, 3, 4}
//! let intersection = set_a.intersection(&set_b);         // {2, 3}
//! let difference = set_a.difference(&set_b);             // {1}
//! let symmetric = set_a.symmetric_difference(&set_b);    // {1, 4}
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(intersection.len(), 2);
//! assert_eq!(difference.len(), 1);
//! assert_eq!(symmetric.len(), 2);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::IndexState;
use super::element::Canonical;
use super::error::{EmptySetError, NotFoundError};

// =============================================================================
// Set Definition
// =============================================================================

/// A mutable, unordered collection of unique elements.
///
/// `Set` owns a mapping from element to a zero-size presence marker; an
/// element is present exactly once for the lifetime of the set, and two
/// elements are the same member iff they are equal under the element
/// type's `Hash + Eq` contract.
///
/// Iteration order is unspecified and must not be relied upon; use
/// [`Set::sorted`] or the `Display` rendering where deterministic order
/// matters.
///
/// `Set` is not internally synchronized. Shared mutation across threads
/// requires wrapping the whole value in a `Mutex` or `RwLock`, applied
/// uniformly across all operations.
///
/// # Time Complexity
///
/// | Operation              | Complexity (expected) |
/// |------------------------|-----------------------|
/// | `new`                  | O(1)                  |
/// | `contains`             | O(1)                  |
/// | `insert`               | O(1) amortized        |
/// | `discard` / `remove`   | O(1)                  |
/// | `len` / `is_empty`     | O(1)                  |
/// | `union`                | O(n + m)              |
/// | `intersection`         | O(min(n, m))          |
/// | `difference`           | O(n)                  |
/// | `symmetric_difference` | O(n + m)              |
/// | `sorted`               | O(n log n)            |
///
/// # Examples
///
/// ```rust
/// use setars::collection::Set;
///
/// let mut set = Set::singleton(42);
/// assert!(set.contains(&42));
///
/// set.insert(7);
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone)]
pub struct Set<T> {
    index: HashMap<T, (), IndexState>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: HashMap::default(),
        }
    }

    /// Creates a new empty set with space reserved for at least `capacity`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set: Set<i32> = Set::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, IndexState::default()),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set = Set::from([1, 2]);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let empty: Set<i32> = Set::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = Set::from([42]);
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes all elements, making the set empty.
    ///
    /// Idempotent: clearing an already empty set is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let mut set = Set::from([1, 2, 3]);
    /// set.clear();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Returns an iterator over the elements of the set, in unspecified
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// assert_eq!(set.iter().count(), 3);
    /// ```
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.index.keys(),
        }
    }
}

// =============================================================================
// Membership & Mutation
// =============================================================================

impl<T: Hash + Eq> Set<T> {
    /// Creates a set containing a single element.
    ///
    /// # Arguments
    ///
    /// * `element` - The initial member
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::new();
        set.insert(element);
        set
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// `Hash` and `Eq` on the borrowed form must match those for the
    /// element type.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to check for
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set = Set::from(["hello".to_string(), "world".to_string()]);
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(element)
    }

    /// Inserts an element into the set.
    ///
    /// If the element is already present, the set is unchanged.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to insert
    ///
    /// # Returns
    ///
    /// `true` if the element was newly inserted, `false` if it was already
    /// present.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(1));   // New element
    /// assert!(!set.insert(1));  // Already exists
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.index.insert(element, ()).is_none()
    }

    /// Removes an element from the set, if present.
    ///
    /// The non-failing alternative to [`Set::remove`]: prefer `discard`
    /// when absence of the element is expected.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to remove
    ///
    /// # Returns
    ///
    /// `true` if the element was present and removed, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let mut set = Set::from(["gamma", "delta", "eta"]);
    ///
    /// assert!(set.discard(&"eta"));
    /// assert!(!set.discard(&"eta"));  // Already gone
    /// assert!(!set.contains(&"eta"));
    /// ```
    pub fn discard<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.remove(element).is_some()
    }

    /// Removes an element from the set, failing if it is absent.
    ///
    /// Callers use `remove` when absence is a programming error; see
    /// [`Set::discard`] for the non-failing alternative. A failed `remove`
    /// leaves the set unchanged.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to remove
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the element is not a member of the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let mut set = Set::from([2, 4, 8]);
    ///
    /// assert!(set.remove(&4).is_ok());
    /// assert!(set.remove(&4).is_err());
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> Result<(), NotFoundError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        if self.index.remove(element).is_none() {
            return Err(NotFoundError {
                element: element.to_string(),
            });
        }
        Ok(())
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// The empty set is a subset of every set, including itself.
    ///
    /// # Arguments
    ///
    /// * `other` - The potential superset
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let subset = Set::from([7, 2]);
    /// let superset = Set::from([7, 3, 2, 1]);
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }

        for element in self {
            if !other.contains(element) {
                return false;
            }
        }
        true
    }

    /// Returns `true` if every element of `other` is in `self`.
    ///
    /// The dual of [`Set::is_subset`] with the operands swapped: any set is
    /// a superset of the empty set, and the empty set is a superset only of
    /// itself.
    ///
    /// # Arguments
    ///
    /// * `other` - The potential subset
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let superset = Set::from([7, 3, 2, 1]);
    /// let subset = Set::from([7, 2]);
    ///
    /// assert!(superset.is_superset(&subset));
    /// assert!(!subset.is_superset(&superset));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// Symmetric. The empty set is disjoint from every set, including
    /// itself.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set_a = Set::from([1, 2]);
    /// let set_b = Set::from([3, 4]);
    /// let set_c = Set::from([2, 3]);
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Walk the smaller operand
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        for element in smaller {
            if larger.contains(element) {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// Removal of Arbitrary Elements & Algebra
// =============================================================================

impl<T: Clone + Hash + Eq> Set<T> {
    /// Removes and returns one arbitrary element, failing on an empty set.
    ///
    /// Which element is returned is unspecified and must not be relied
    /// upon. A failed `pop` leaves the set unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySetError`] if the set has zero elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let mut set = Set::singleton(42);
    /// assert_eq!(set.pop(), Ok(42));
    /// assert!(set.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptySetError> {
        let element = self.index.keys().next().cloned().ok_or(EmptySetError)?;
        self.index.remove(&element);
        Ok(element)
    }

    /// Returns the union of two sets.
    ///
    /// The union contains every element present in either operand (or
    /// both), each retained once. Both operands are untouched.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to union with
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set_a = Set::from([1, 2]);
    /// let set_b = Set::from([2, 3]);
    ///
    /// let union = set_a.union(&set_b);
    ///
    /// assert_eq!(union.len(), 3);
    /// assert!(union.contains(&1));
    /// assert!(union.contains(&2));
    /// assert!(union.contains(&3));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len().max(other.len()));
        for element in self {
            result.insert(element.clone());
        }
        for element in other {
            result.insert(element.clone());
        }
        result
    }

    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements present in both operands.
    /// Both operands are untouched.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set to intersect with
    ///
    /// # Complexity
    ///
    /// O(min(n, m))
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set_a = Set::from([1, 2, 3]);
    /// let set_b = Set::from([2, 3, 4]);
    ///
    /// let intersection = set_a.intersection(&set_b);
    ///
    /// assert_eq!(intersection.len(), 2);
    /// assert!(intersection.contains(&2));
    /// assert!(intersection.contains(&3));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Walk the smaller operand
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = Self::new();
        for element in smaller {
            if larger.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the difference of two sets.
    ///
    /// The difference contains the elements of `self` that are not in
    /// `other`. Not commutative: `a.difference(&b)` and `b.difference(&a)`
    /// differ in general. Both operands are untouched.
    ///
    /// # Arguments
    ///
    /// * `other` - The set to subtract
    ///
    /// # Complexity
    ///
    /// O(n) where n = `self.len()`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set_a = Set::from([2, 4, 8]);
    /// let set_b = Set::from([3, 6, 8]);
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::from([2, 4]));
    /// assert_eq!(set_b.difference(&set_a), Set::from([3, 6]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = Self::new();
        for element in self {
            if !other.contains(element) {
                result.insert(element.clone());
            }
        }
        result
    }

    /// Returns the symmetric difference of two sets.
    ///
    /// The symmetric difference contains the elements present in exactly
    /// one operand. Commutative. Both operands are untouched.
    ///
    /// # Arguments
    ///
    /// * `other` - The other set
    ///
    /// # Complexity
    ///
    /// O(n + m)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let foo = Set::from([2, 3, 6, 7]);
    /// let bar = Set::from([3, 6, 9, 12]);
    ///
    /// let symmetric = foo.symmetric_difference(&bar);
    /// assert_eq!(symmetric, Set::from([2, 7, 9, 12]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let own_only = self.difference(other);
        let their_only = other.difference(self);
        own_only.union(&their_only)
    }

    /// Returns all elements as a vector, in unspecified order.
    ///
    /// Useful for passing the set's contents to code that requires a
    /// slice. The length equals `len()`. See [`Set::sorted`] where
    /// deterministic order matters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set = Set::from([1, 2, 3]);
    /// let elements = set.to_vec();
    /// assert_eq!(elements.len(), 3);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Ordering & Rendering
// =============================================================================

impl<T: Canonical> Set<T> {
    /// Returns the canonical text of every element, sorted.
    ///
    /// Each element is rendered to its canonical string form (native
    /// strings unmodified, everything else its default textual
    /// representation) and the resulting strings are sorted
    /// byte-lexicographically, not locale-aware and with no type-aware
    /// precedence. This is a display/comparison convenience, not a
    /// type-preserving projection: callers needing numeric ordering over a
    /// homogeneous numeric set should sort [`Set::to_vec`] with a numeric
    /// comparator instead.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let set = Set::from(["delta", "alpha", "epsilon"]);
    /// assert_eq!(set.sorted(), vec!["alpha", "delta", "epsilon"]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Vec<String> {
        let mut rendered: Vec<String> = self
            .index
            .keys()
            .map(|element| element.canonical_text())
            .collect();
        rendered.sort_unstable();
        rendered
    }
}

/// Canonical textual rendering of the whole set.
///
/// Formats as `Set{` + comma-space-joined rendered fragments + `}`, with
/// the fragments sorted byte-lexicographically. Strings carry their double
/// quotes into the comparison, so the output is deterministic regardless
/// of internal iteration order.
///
/// # Examples
///
/// ```rust
/// use setars::collection::{Set, Value};
///
/// let set: Set<Value> = ["beta".into(), 42_i64.into(), "alpha".into(), "delta".into()]
///     .into_iter()
///     .collect();
///
/// assert_eq!(format!("{}", set), "Set{\"alpha\", \"beta\", \"delta\", 42}");
/// ```
impl<T: Canonical> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fragments: Vec<String> = self
            .index
            .keys()
            .map(|element| element.rendered_fragment())
            .collect();
        fragments.sort_unstable();
        write!(formatter, "Set{{{}}}", fragments.join(", "))
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.index.keys()).finish()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        for element in self {
            if !other.contains(element) {
                return false;
            }
        }

        true
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the elements of a [`Set`].
pub struct SetIterator<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.index.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Operator Sugar
// =============================================================================

impl<T: Clone + Hash + Eq> BitOr for &Set<T> {
    type Output = Set<T>;

    /// Alias for [`Set::union`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let union = &Set::from([1, 2]) | &Set::from([2, 3]);
    /// assert_eq!(union, Set::from([1, 2, 3]));
    /// ```
    fn bitor(self, other: Self) -> Set<T> {
        self.union(other)
    }
}

impl<T: Clone + Hash + Eq> BitAnd for &Set<T> {
    type Output = Set<T>;

    /// Alias for [`Set::intersection`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let intersection = &Set::from([1, 2]) & &Set::from([2, 3]);
    /// assert_eq!(intersection, Set::from([2]));
    /// ```
    fn bitand(self, other: Self) -> Set<T> {
        self.intersection(other)
    }
}

impl<T: Clone + Hash + Eq> Sub for &Set<T> {
    type Output = Set<T>;

    /// Alias for [`Set::difference`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let difference = &Set::from([1, 2]) - &Set::from([2, 3]);
    /// assert_eq!(difference, Set::from([1]));
    /// ```
    fn sub(self, other: Self) -> Set<T> {
        self.difference(other)
    }
}

impl<T: Clone + Hash + Eq> BitXor for &Set<T> {
    type Output = Set<T>;

    /// Alias for [`Set::symmetric_difference`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setars::collection::Set;
    ///
    /// let symmetric = &Set::from([1, 2]) ^ &Set::from([2, 3]);
    /// assert_eq!(symmetric, Set::from([1, 3]));
    /// ```
    fn bitxor(self, other: Self) -> Set<T> {
        self.symmetric_difference(other)
    }
}
