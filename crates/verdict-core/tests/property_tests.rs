mod common;

use common::run_case;
use proptest::prelude::*;
use std::collections::HashMap;
use verdict_core::{equal, maps_match, non_matching_slices, slices_match, within};

proptest! {
    #[test]
    fn prop_equal_is_reflexive(v in prop::collection::vec(any::<i64>(), 0..16)) {
        run_case("reflexive", false, |tb| equal(tb, &v, &v));
    }

    #[test]
    fn prop_equal_is_reflexive_for_non_nan_floats(v in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
        run_case("reflexive float", false, |tb| equal(tb, v, v));
    }

    #[test]
    fn prop_permutation_matches(v in prop::collection::vec(0u8..4, 0..24).prop_flat_map(|v| {
        let original = Just(v.clone());
        (original, Just(v).prop_shuffle())
    })) {
        let (original, shuffled) = v;
        run_case("permutation", false, |tb| slices_match(tb, &original, &shuffled));
    }

    #[test]
    fn prop_length_mismatch_fails(a in prop::collection::vec(any::<u8>(), 0..8), extra in any::<u8>()) {
        let mut b = a.clone();
        b.push(extra);
        run_case("longer input", true, |tb| slices_match(tb, &a, &b));
        run_case("longer expected", true, |tb| slices_match(tb, &b, &a));
    }

    #[test]
    fn prop_residues_are_symmetric(
        a in prop::collection::vec(0u8..6, 0..12),
        b in prop::collection::vec(0u8..6, 0..12),
    ) {
        let forward = non_matching_slices(&a, &b);
        let backward = non_matching_slices(&b, &a);
        prop_assert_eq!(forward.left.to_vec(), backward.right.to_vec());
        prop_assert_eq!(forward.right.to_vec(), backward.left.to_vec());
        // Matched elements are removed in equal numbers from both sides
        prop_assert_eq!(
            a.len() - forward.left.to_vec().len(),
            b.len() - forward.right.to_vec().len()
        );
    }

    #[test]
    fn prop_map_matches_itself(m in prop::collection::hash_map(any::<u16>(), any::<i32>(), 0..16)) {
        let copy: HashMap<u16, i32> = m.clone();
        run_case("map reflexive", false, |tb| maps_match(tb, &m, &copy));
    }

    #[test]
    fn prop_within_inclusive(min in -1000i32..1000, span in 0i32..1000, offset in 0i32..1000) {
        let max = min + span;
        let input = min + offset;
        run_case("within", offset > span, |tb| within(tb, min, max, input));
    }
}
