//! Sequential base-case sort shared by the parallel engines.

use std::cmp::Ordering;

/// Stable insertion sort, used by the merge engine once a subrange is small
/// enough that recursing further costs more than it saves.
///
/// Shifts an element right only when it compares strictly greater than the
/// key, so equal elements keep their relative order.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], compare: &F)
where
    T: Copy,
    F: Fn(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let key = v[i];

        let mut j = i;
        while j > 0 && compare(&v[j - 1], &key) == Ordering::Greater {
            v[j] = v[j - 1];
            j -= 1;
        }
        v[j] = key;
    }
}

#[cfg(test)]
mod tests {
    use super::insertion_sort;

    #[test]
    fn sorts_and_keeps_ties_in_order() {
        // Sort on the first tuple element only, the second one records the
        // input position of each duplicate.
        let mut v = [(5, 0), (3, 1), (3, 2), (1, 3), (4, 4), (3, 5)];
        insertion_sort(&mut v, &|a: &(i32, usize), b: &(i32, usize)| a.0.cmp(&b.0));
        assert_eq!(v, [(1, 3), (3, 1), (3, 2), (3, 5), (4, 4), (5, 0)]);
    }

    #[test]
    fn trivial_inputs() {
        let mut empty: [i32; 0] = [];
        insertion_sort(&mut empty, &|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(empty, []);

        let mut one = [7];
        insertion_sort(&mut one, &|a: &i32, b: &i32| a.cmp(b));
        assert_eq!(one, [7]);
    }
}
