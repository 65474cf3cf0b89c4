//! Fork/join quicksort with median-of-three pivoting and Hoare partitioning.

use std::cmp::Ordering;

sort_impl!("grain_quick_unstable");

const GRAIN_SHIFT: u32 = 3;

/// Sorts `v` in parallel. Not stable.
pub fn sort<T: Ord + Copy + Send>(v: &mut [T]) {
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts `v` in parallel with the comparator `compare`. Not stable: equal
/// elements may be reordered across partition boundaries.
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Copy + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let n = v.len();
    if n < 2 {
        return;
    }

    quick_sort(v, n >> GRAIN_SHIFT, &compare);
}

fn quick_sort<T, F>(v: &mut [T], grain: usize, compare: &F)
where
    T: Copy + Send,
    F: Fn(&T, &T) -> Ordering + Sync,
{
    let n = v.len();
    let last = n - 1;
    let mid = last / 2;

    // Median-of-three: after these exchanges v[0] <= v[mid] <= v[last] under
    // the comparator order.
    if compare(&v[mid], &v[0]) == Ordering::Less {
        v.swap(0, mid);
    }
    if compare(&v[last], &v[mid]) == Ordering::Less {
        v.swap(mid, last);
        if compare(&v[mid], &v[0]) == Ordering::Less {
            v.swap(0, mid);
        }
    }

    // The pivot must be a copy: partitioning swaps slots in place and would
    // otherwise move the pivot out from under the scan.
    let pivot = v[mid];

    // Hoare partition. Signed cursors, the low one may exit at `n` and the
    // high one at -1.
    let mut i = 0isize;
    let mut j = last as isize;
    while i <= j {
        while compare(&v[i as usize], &pivot) == Ordering::Less {
            i += 1;
        }
        while compare(&v[j as usize], &pivot) == Ordering::Greater {
            j -= 1;
        }

        if i <= j {
            if i < j {
                v.swap(i as usize, j as usize);
            }
            i += 1;
            j -= 1;
        }
    }

    // v[j+1..i] is already in place; the subranges [0, j] and [i, last]
    // remain. They are disjoint, so they can run side by side with no merge
    // step afterwards.
    let left_len = (j + 1) as usize;
    let (head, right) = v.split_at_mut(i as usize);
    let left = &mut head[..left_len];

    if last > grain {
        rayon::join(
            || {
                if left.len() > 1 {
                    quick_sort(left, grain, compare);
                }
            },
            || {
                if right.len() > 1 {
                    quick_sort(right, grain, compare);
                }
            },
        );
    } else {
        if left.len() > 1 {
            quick_sort(left, grain, compare);
        }
        if right.len() > 1 {
            quick_sort(right, grain, compare);
        }
    }
}
