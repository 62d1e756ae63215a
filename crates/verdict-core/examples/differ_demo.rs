//! Collection Differ Demonstration
//!
//! Shows what the unordered differ reports for slices and maps, and how a
//! test double turns a failing assertion into inspectable output.

use std::collections::BTreeMap;
use verdict_core::{
    logging_facility::{init, Profile},
    non_matching_maps, non_matching_slices, slices_match, StdHandle, TesterHandle,
};

fn main() {
    init(Profile::Development);

    println!("=== Verdict Differ Demo ===\n");

    // ===== Part 1: Slice residues =====
    let expected = [1, 2, 3, 4, 5];
    let input = [5, 4, 1, 4, 2];
    let diff = non_matching_slices(&expected, &input);
    println!("## Slices");
    println!("expected: {:?}", expected);
    println!("input:    {:?}", input);
    println!("unmatched expected: {:?}", diff.left);
    println!("unmatched input:    {:?}\n", diff.right);

    // ===== Part 2: Map residues =====
    let expected = BTreeMap::from([("retries", 3), ("timeout", 30), ("workers", 4)]);
    let input = BTreeMap::from([("retries", 3), ("timeout", 60), ("verbose", 1)]);
    let diff = non_matching_maps(&expected, &input);
    println!("## Maps");
    println!("unmatched expected: {:?}", diff.left);
    println!("unmatched input:    {:?}\n", diff.right);

    // ===== Part 3: Captured diagnostic =====
    let t = StdHandle::new("differ_demo");
    let tb = TesterHandle::new(&t, true);
    slices_match(&tb, &["a", "b", "b"], &["b", "a", "c"]);
    tb.assert_expectation();
    println!("## Diagnostic");
    print!("{}", tb.output());
}
