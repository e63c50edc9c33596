//! Property-based tests for Set laws.
//!
//! These tests verify that Set satisfies the mathematical properties
//! expected of a set data structure.

use proptest::prelude::*;
use setars::collection::Set;

// =============================================================================
// Insert-Contains Law
// Description: An inserted element is always contained in the set
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        new_element: i32
    ) {
        let mut set: Set<i32> = elements.into_iter().collect();
        set.insert(new_element);

        prop_assert!(set.contains(&new_element));
    }
}

// =============================================================================
// Discard-Contains Law
// Description: A discarded element is never contained afterwards
// =============================================================================

proptest! {
    #[test]
    fn prop_discard_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        element_to_discard: i32
    ) {
        let mut set: Set<i32> = elements.into_iter().collect();
        set.discard(&element_to_discard);

        prop_assert!(!set.contains(&element_to_discard));
    }
}

// =============================================================================
// Remove-Absent Law
// Description: Removing an absent element fails and changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_absent_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        absent: i32
    ) {
        let mut set: Set<i32> = elements.into_iter().collect();
        set.discard(&absent);
        let snapshot = set.clone();

        prop_assert!(set.remove(&absent).is_err());
        prop_assert_eq!(set, snapshot);
    }
}

// =============================================================================
// Pop Law
// Description: Pop returns a prior member and decreases the cardinality
// =============================================================================

proptest! {
    #[test]
    fn prop_pop_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let mut set: Set<i32> = elements.into_iter().collect();
        let snapshot = set.clone();
        let length_before = set.len();

        match set.pop() {
            Ok(popped) => {
                prop_assert!(snapshot.contains(&popped));
                prop_assert!(!set.contains(&popped));
                prop_assert_eq!(set.len(), length_before - 1);
            }
            Err(_) => prop_assert_eq!(length_before, 0),
        }
    }
}

// =============================================================================
// Union Identity Law
// Description: Union with empty set is identity
// =============================================================================

proptest! {
    #[test]
    fn prop_union_identity_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: Set<i32> = elements.into_iter().collect();
        let empty: Set<i32> = Set::new();

        prop_assert_eq!(set.union(&empty), set.clone());
        prop_assert_eq!(empty.union(&set), set);
    }
}

// =============================================================================
// Union Idempotence Law
// Description: A ∪ A = A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_idempotence_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: Set<i32> = elements.into_iter().collect();

        prop_assert_eq!(set.union(&set), set);
    }
}

// =============================================================================
// Union Commutativity Law
// Description: A ∪ B = B ∪ A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        prop_assert_eq!(set_a.union(&set_b), set_b.union(&set_a));
    }
}

// =============================================================================
// Union Associativity Law
// Description: (A ∪ B) ∪ C = A ∪ (B ∪ C)
// =============================================================================

proptest! {
    #[test]
    fn prop_union_associativity_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..20),
        elements_b in prop::collection::vec(any::<i32>(), 0..20),
        elements_c in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();
        let set_c: Set<i32> = elements_c.into_iter().collect();

        let left = set_a.union(&set_b).union(&set_c);
        let right = set_a.union(&set_b.union(&set_c));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Intersection Idempotence Law
// Description: A ∩ A = A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_idempotence_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: Set<i32> = elements.into_iter().collect();

        prop_assert_eq!(set.intersection(&set), set);
    }
}

// =============================================================================
// Intersection Commutativity Law
// Description: A ∩ B = B ∩ A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_commutativity_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        prop_assert_eq!(set_a.intersection(&set_b), set_b.intersection(&set_a));
    }
}

// =============================================================================
// Intersection Associativity Law
// Description: (A ∩ B) ∩ C = A ∩ (B ∩ C)
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_associativity_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..20),
        elements_b in prop::collection::vec(any::<i32>(), 0..20),
        elements_c in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();
        let set_c: Set<i32> = elements_c.into_iter().collect();

        let left = set_a.intersection(&set_b).intersection(&set_c);
        let right = set_a.intersection(&set_b.intersection(&set_c));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Difference-Self Law
// Description: A - A = ∅
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_self_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set: Set<i32> = elements.into_iter().collect();

        prop_assert_eq!(set.difference(&set).len(), 0);
    }
}

// =============================================================================
// Symmetric Difference Commutativity Law
// Description: A ⊕ B = B ⊕ A
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_commutativity_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        prop_assert_eq!(
            set_a.symmetric_difference(&set_b),
            set_b.symmetric_difference(&set_a)
        );
    }
}

// =============================================================================
// Symmetric Difference Definition Law
// Description: A ⊕ B = (A ∪ B) - (A ∩ B)
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_definition_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        let via_definition = set_a.union(&set_b).difference(&set_a.intersection(&set_b));

        prop_assert_eq!(set_a.symmetric_difference(&set_b), via_definition);
    }
}

// =============================================================================
// Cardinality Bounds Law
// Description: |A ∪ B| >= max(|A|, |B|) and |A ∩ B| <= min(|A|, |B|)
// =============================================================================

proptest! {
    #[test]
    fn prop_cardinality_bounds_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        prop_assert!(set_a.union(&set_b).len() >= set_a.len().max(set_b.len()));
        prop_assert!(set_a.intersection(&set_b).len() <= set_a.len().min(set_b.len()));
    }
}

// =============================================================================
// Subset-Superset Duality Law
// Description: A ⊆ B iff B ⊇ A
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_superset_duality_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        prop_assert_eq!(set_a.is_subset(&set_b), set_b.is_superset(&set_a));
    }
}

// =============================================================================
// Difference-Disjointness Law
// Description: A - B is always disjoint from B
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_disjoint_law(
        elements_a in prop::collection::vec(any::<i32>(), 0..30),
        elements_b in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let set_a: Set<i32> = elements_a.into_iter().collect();
        let set_b: Set<i32> = elements_b.into_iter().collect();

        prop_assert!(set_a.difference(&set_b).is_disjoint(&set_b));
    }
}

// =============================================================================
// Clone Independence Law
// Description: A clone equals its source, and mutation does not propagate
// =============================================================================

proptest! {
    #[test]
    fn prop_clone_independence_law(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        extra: i32
    ) {
        let source: Set<i32> = elements.into_iter().collect();
        let snapshot = source.clone();
        let mut clone = source.clone();

        prop_assert_eq!(&clone, &source);

        clone.insert(extra);
        clone.clear();

        prop_assert!(clone.is_empty());
        prop_assert_eq!(source, snapshot);
    }
}

// =============================================================================
// Sorted Determinism Law
// Description: Sorted output is identical for equal sets built differently
// =============================================================================

proptest! {
    #[test]
    fn prop_sorted_determinism_law(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let forward: Set<i32> = elements.clone().into_iter().collect();
        let backward: Set<i32> = elements.into_iter().rev().collect();

        prop_assert_eq!(forward.sorted(), backward.sorted());
        prop_assert_eq!(forward.to_string(), backward.to_string());
    }
}
