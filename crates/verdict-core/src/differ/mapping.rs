//! Mapping differ.
//!
//! A keyed diff: keys whose values agree are dropped from both residues,
//! keys that are missing or disagree are kept on the side(s) they occur.

use crate::differ::model::{CollectionDiff, MapResidue};
use crate::equality::deep_equal;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A key-value collection the differ can walk and probe.
///
/// `Option<M>` is a mapping too: `None` behaves as an empty mapping, which
/// keeps a missing mapping and an empty one indistinguishable.
pub trait Mapping {
    type Key;
    type Value;

    /// Value stored under `key`
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// All entries, in the mapping's own iteration order
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K: Hash + Eq, V, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<M: Mapping> Mapping for Option<M> {
    type Key = M::Key;
    type Value = M::Value;

    fn lookup(&self, key: &M::Key) -> Option<&M::Value> {
        self.as_ref().and_then(|map| map.lookup(key))
    }

    fn entries(&self) -> impl Iterator<Item = (&M::Key, &M::Value)> {
        self.iter().flat_map(|map| map.entries())
    }
}

impl<M: Mapping + ?Sized> Mapping for &M {
    type Key = M::Key;
    type Value = M::Value;

    fn lookup(&self, key: &M::Key) -> Option<&M::Value> {
        (**self).lookup(key)
    }

    fn entries(&self) -> impl Iterator<Item = (&M::Key, &M::Value)> {
        (**self).entries()
    }
}

/// Find the entries of `a` and `b` that are missing from, or disagree with,
/// the other mapping.
///
/// A key absent from `b` lands in `left` only. A key present in both with
/// differing values lands in both residues with each side's value. A key
/// absent from `a` lands in `right` only.
pub fn non_matching_maps<'a, M>(a: &'a M, b: &'a M) -> CollectionDiff<MapResidue<'a, M::Key, M::Value>>
where
    M: Mapping,
    M::Value: PartialEq,
{
    let mut left = MapResidue::new();
    let mut right = MapResidue::new();

    for (key, a_value) in a.entries() {
        match b.lookup(key) {
            None => left.push(key, a_value),
            Some(b_value) if !deep_equal(a_value, b_value) => {
                left.push(key, a_value);
                right.push(key, b_value);
            }
            Some(_) => {}
        }
    }

    // Keys present in both were settled above
    for (key, b_value) in b.entries() {
        if a.lookup(key).is_none() {
            right.push(key, b_value);
        }
    }

    CollectionDiff { left, right }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::model::Residue;

    fn map(entries: &[(&'static str, i32)]) -> HashMap<&'static str, i32> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_identical_maps_match() {
        let a = map(&[("a", 1), ("b", 2)]);
        assert!(non_matching_maps(&a, &a.clone()).is_match());
    }

    #[test]
    fn test_differing_value_lands_in_both_residues() {
        let a = map(&[("a", 1), ("b", 2)]);
        let b = map(&[("a", 1), ("b", 3)]);
        let diff = non_matching_maps(&a, &b);

        assert_eq!(diff.left.len(), 1);
        assert_eq!(diff.left.get(&"b"), Some(&2));
        assert_eq!(diff.right.len(), 1);
        assert_eq!(diff.right.get(&"b"), Some(&3));
    }

    #[test]
    fn test_missing_keys_land_on_their_own_side() {
        let a = map(&[("a", 1), ("only_a", 0)]);
        let b = map(&[("a", 1), ("only_b", 0)]);
        let diff = non_matching_maps(&a, &b);

        assert_eq!(diff.left.get(&"only_a"), Some(&0));
        assert_eq!(diff.left.get(&"only_b"), None);
        assert_eq!(diff.right.get(&"only_b"), Some(&0));
        assert_eq!(diff.right.get(&"only_a"), None);
    }

    #[test]
    fn test_none_behaves_as_empty() {
        let missing: Option<BTreeMap<u8, u8>> = None;
        let empty = Some(BTreeMap::new());
        assert!(non_matching_maps(&missing, &empty).is_match());

        let filled = Some(BTreeMap::from([(1, 1)]));
        let diff = non_matching_maps(&missing, &filled);
        assert!(diff.left.is_empty());
        assert_eq!(diff.right.get(&1), Some(&1));
    }

    #[test]
    fn test_btree_residue_keeps_key_order() {
        let a = BTreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
        let b = BTreeMap::new();
        let diff = non_matching_maps(&a, &b);
        assert_eq!(format!("{:?}", diff.left), "{1: 'a', 2: 'b', 3: 'c'}");
    }
}
