//! Three-way quicksort.
//!
//! Every call returns a new, ordered `Vec`; the input slice is only read.
//! Each level scans the whole sequence once, splitting it into elements
//! less than, equal to and greater than the pivot, then sorts the outer two
//! groups the same way. Pending groups live on an explicit work stack rather
//! than the call stack, so the O(n²) worst case costs time but never depth.
//! Elements equal to a pivot keep their input order, but the sort
//! as a whole is not guaranteed to be stable.
//!
//! The comparison must be a total preorder over the input; inconsistent
//! comparators give an unspecified permutation of the input.
//!
//! [`quick_sort`], [`quick_sort_by`] and [`quick_sort_by_key`] use the first
//! element as pivot, giving O(n log n) on average and O(n²) on already sorted
//! input. [`Sorter`] lets callers choose another [`Pivot`].

mod config;
mod quick;

pub use config::{Pivot, SortConfig};
pub use quick::{Sorter, quick_sort, quick_sort_by, quick_sort_by_key};
