//! Fork/join top-down merge sort.
//!
//! The only stable engine in the crate and the dispatcher default. Recursion
//! walks aligned subslices of the array and of one auxiliary buffer allocated
//! per top-level call; a range larger than the grain spawns its two halves as
//! rayon tasks, a range at or below it runs sequentially down to an insertion
//! sort base case.

use std::cmp::Ordering;

use crate::smallsort::insertion_sort;

sort_impl!("grain_merge_stable");

// Inputs above the split length get the coarser grain, everything else the
// finer one, both derived once from the top-level length.
const GRAIN_SPLIT_LEN: usize = 128;
const GRAIN_SHIFT_COARSE: u32 = 6;
const GRAIN_SHIFT_FINE: u32 = 3;

/// Largest subrange handed to the insertion sort instead of recursing on.
const MAX_INSERTION_LEN: usize = 32;

/// Sorts `v` in parallel. Stable.
pub fn sort<T: Ord + Copy + Send>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts `v` in parallel with the comparator `compare`. Stable: elements for
/// which `compare` returns `Equal` keep their relative order.
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Copy + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let n = v.len();
    if n < 2 {
        return;
    }

    let grain = if n > GRAIN_SPLIT_LEN {
        n >> GRAIN_SHIFT_COARSE
    } else {
        n >> GRAIN_SHIFT_FINE
    };

    // The auxiliary buffer every merge step copies through. Allocated once
    // here, freed on return; recursion splits it at the same offsets as `v`,
    // so concurrent subtasks always touch disjoint parts of it.
    let mut buf = v.to_vec();
    merge_sort(v, &mut buf, grain, &compare);
}

fn merge_sort<T, F>(v: &mut [T], buf: &mut [T], grain: usize, compare: &F)
where
    T: Copy + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let n = v.len();
    if n < 2 {
        return;
    }

    if n > grain {
        let mid = (n + 1) / 2;
        let (v_left, v_right) = v.split_at_mut(mid);
        let (buf_left, buf_right) = buf.split_at_mut(mid);

        rayon::join(
            || merge_sort(v_left, buf_left, grain, compare),
            || merge_sort(v_right, buf_right, grain, compare),
        );

        merge(v, buf, mid, compare);
    } else if n <= MAX_INSERTION_LEN {
        insertion_sort(v, compare);
    } else {
        let mid = (n + 1) / 2;
        {
            let (v_left, v_right) = v.split_at_mut(mid);
            let (buf_left, buf_right) = buf.split_at_mut(mid);

            merge_sort(v_left, buf_left, grain, compare);
            merge_sort(v_right, buf_right, grain, compare);
        }

        merge(v, buf, mid, compare);
    }
}

/// Merges the sorted halves `v[..mid]` and `v[mid..]` through `buf`.
///
/// Both halves are first copied into `buf` at their own offsets, then merged
/// back into `v`. The left head is taken unless it compares strictly greater
/// than the right head, which is what makes the engine stable.
fn merge<T, F>(v: &mut [T], buf: &mut [T], mid: usize, compare: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    buf.copy_from_slice(v);
    let (left, right) = buf.split_at(mid);

    let mut i = 0;
    let mut j = 0;
    for slot in v.iter_mut() {
        let take_left = j == right.len()
            || (i < left.len() && compare(&left[i], &right[j]) != Ordering::Greater);

        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
