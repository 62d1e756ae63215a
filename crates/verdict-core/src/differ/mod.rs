//! Unordered collection differ.
//!
//! Computes which elements of two unordered collections have no counterpart
//! in the other under deep equality. Only the leftovers are reported, never
//! the full collections.
//!
//! ## Entry points
//!
//! ```
//! use verdict_core::differ::non_matching_slices;
//!
//! let diff = non_matching_slices(&[1, 2, 3, 4, 5], &[5, 4, 1, 4, 2]);
//! assert_eq!(diff.left.to_vec(), vec![3]);
//! assert_eq!(diff.right.to_vec(), vec![4]);
//! ```
//!
//! ## Guarantees
//!
//! - **Bag semantics**: an element present in both collections consumes
//!   exactly one counterpart, so duplicates are matched by multiplicity.
//! - **Equality only**: elements need `PartialEq` and nothing else. There is
//!   no hashing or sorting of elements.
//! - **No mutation**: residues borrow from the inputs.

pub mod mapping;
pub mod model;
pub mod sequence;

pub use mapping::{non_matching_maps, Mapping};
pub use model::{CollectionDiff, MapResidue, Residue, SliceResidue};
pub use sequence::non_matching_slices;
