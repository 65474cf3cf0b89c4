//! Grain-adaptive fork/join parallel sorting.
//!
//! Three interchangeable engines over a mutable slice and a three-way
//! comparator: a stable merge sort ([`stable::merge`]), a quicksort
//! ([`unstable::quick`]) and a bitonic-network/quicksort hybrid
//! ([`unstable::bitonic`]). Each engine recursively splits its range, spawns
//! the two halves as rayon tasks while the range is larger than a grain
//! derived from the top-level length, and degrades to sequential execution
//! below it. [`sort`] and [`sort_by`] dispatch to the merge engine, with a
//! sequential fast path for inputs too small to amortize task overhead.
//!
//! All engines sort in place and share one race-avoidance mechanism: sibling
//! tasks only ever see disjoint subslices, so no locks or atomics appear
//! anywhere in the crate.

use std::cmp::Ordering;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Copy + Send,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Copy + Send,
                F: Fn(&T, &T) -> std::cmp::Ordering + Sync,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod parallel;
mod smallsort;
pub mod stable;
pub mod unstable;

/// Below this length no engine is worth spawning tasks for and the dispatcher
/// (and the bitonic entry point) hand the whole input to a library sort.
pub(crate) const MIN_PARALLEL_LEN: usize = 32;

sort_impl!("grain_default_stable");

/// Sorts `v` with the default engine.
///
/// Equivalent to [`sort_by`] with `T::cmp`.
pub fn sort<T: Ord + Copy + Send>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts `v` with the default engine: the parallel merge sort, or a
/// sequential library sort for inputs shorter than 32 elements.
///
/// Merge sort is the default because of its predictable O(n log n) worst case
/// and branch-free parallel decomposition. Both paths are stable, so the
/// dispatcher is stable at every length.
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Copy + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    if v.len() < MIN_PARALLEL_LEN {
        v.sort_by(|a, b| compare(a, b));
        return;
    }

    stable::merge::sort_by(v, compare);
}
