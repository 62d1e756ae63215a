//! Sequence differ.
//!
//! Greedy bipartite matching under deep equality. Elements are only known
//! to support `PartialEq`, so there is no sorting or hashing to lean on and
//! the matching is quadratic.

use crate::differ::model::{CollectionDiff, SliceResidue};
use crate::equality::deep_equal;

/// Find the elements of `a` and `b` that have no counterpart in the other.
///
/// Each pass claims at most one counterpart per element, so duplicates are
/// matched by multiplicity. The two passes are independent: the claim
/// markers are reset before `b` is matched against `a`.
pub fn non_matching_slices<'a, E: PartialEq>(
    a: &'a [E],
    b: &'a [E],
) -> CollectionDiff<SliceResidue<'a, E>> {
    let mut claimed = vec![false; b.len()];
    let left = unclaimed(a, b, &mut claimed, |from_a, from_b| {
        deep_equal(from_a, from_b)
    });

    claimed.clear();
    claimed.resize(a.len(), false);
    let right = unclaimed(b, a, &mut claimed, |from_b, from_a| {
        deep_equal(from_a, from_b)
    });

    CollectionDiff {
        left: SliceResidue::new(left),
        right: SliceResidue::new(right),
    }
}

/// Walk `source` in order, claiming the first unclaimed equal element of
/// `pool` for each. Returns the elements of `source` that found none.
fn unclaimed<'a, E, F>(source: &'a [E], pool: &[E], claimed: &mut [bool], eq: F) -> Vec<&'a E>
where
    F: Fn(&E, &E) -> bool,
{
    let mut unmatched = Vec::new();

    for element in source {
        let slot = pool
            .iter()
            .zip(claimed.iter())
            .position(|(candidate, taken)| !taken && eq(element, candidate));

        match slot {
            Some(i) => claimed[i] = true,
            None => unmatched.push(element),
        }
    }

    unmatched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_matches() {
        let diff = non_matching_slices(&[1, 2, 3], &[3, 1, 2]);
        assert!(diff.is_match());
    }

    #[test]
    fn test_duplicates_matched_by_multiplicity() {
        let diff = non_matching_slices(&[1, 2, 3, 4, 5], &[5, 4, 1, 4, 2]);
        assert_eq!(diff.left.to_vec(), vec![3]);
        assert_eq!(diff.right.to_vec(), vec![4]);
    }

    #[test]
    fn test_unequal_lengths_report_leftovers() {
        let diff = non_matching_slices(&["a", "b"], &["b"]);
        assert_eq!(diff.left.to_vec(), vec!["a"]);
        assert!(diff.right.to_vec().is_empty());
    }

    #[test]
    fn test_nan_never_matches() {
        let diff = non_matching_slices(&[1.0, f64::NAN], &[f64::NAN, 1.0]);
        assert_eq!(diff.left.iter().count(), 1);
        assert_eq!(diff.right.iter().count(), 1);
        assert!(diff.left.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [u8; 0] = [];
        assert!(non_matching_slices(&empty, &empty).is_match());
    }
}
