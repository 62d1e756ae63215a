//! Differ output types.
//!
//! Residues borrow from the collections they were computed from and render
//! with `Debug` the same way the original collection shape would.

use std::fmt;

/// The residues of both sides of a collection comparison.
///
/// `left` holds elements of the first collection with no counterpart in the
/// second, `right` the reverse.
#[derive(Clone, PartialEq, Eq)]
pub struct CollectionDiff<R> {
    /// Unmatched elements of the first collection
    pub left: R,
    /// Unmatched elements of the second collection
    pub right: R,
}

impl<R: Residue> CollectionDiff<R> {
    /// True when both residues are empty, i.e. the collections match
    pub fn is_match(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

impl<R: fmt::Debug> fmt::Debug for CollectionDiff<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionDiff")
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

/// A residue that can report emptiness.
pub trait Residue {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unmatched elements of a sequence, in their original order.
#[derive(Clone, PartialEq, Eq)]
pub struct SliceResidue<'a, E> {
    elements: Vec<&'a E>,
}

impl<'a, E> SliceResidue<'a, E> {
    pub(crate) fn new(elements: Vec<&'a E>) -> Self {
        Self { elements }
    }

    /// Iterate over the unmatched elements
    pub fn iter(&self) -> impl Iterator<Item = &'a E> + '_ {
        self.elements.iter().copied()
    }

    /// Clone the unmatched elements into an owned vector
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<E> Residue for SliceResidue<'_, E> {
    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<E: fmt::Debug> fmt::Debug for SliceResidue<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

/// Unmatched entries of a mapping, in the source mapping's iteration order.
#[derive(Clone, PartialEq, Eq)]
pub struct MapResidue<'a, K, V> {
    entries: Vec<(&'a K, &'a V)>,
}

impl<'a, K, V> MapResidue<'a, K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, key: &'a K, value: &'a V) {
        self.entries.push((key, value));
    }

    /// Iterate over the unmatched entries
    pub fn iter(&self) -> impl Iterator<Item = (&'a K, &'a V)> + '_ {
        self.entries.iter().copied()
    }

    /// Value recorded for `key`, if the key is part of the residue
    pub fn get(&self, key: &K) -> Option<&'a V>
    where
        K: PartialEq,
    {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

impl<K, V> Residue for MapResidue<'_, K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapResidue<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().copied()).finish()
    }
}
