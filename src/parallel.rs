//! Range-parallel iteration used by the bitonic merge pass.

use rayon::prelude::*;

/// Runs `worker` over same-offset chunk pairs of two equal-length slices.
///
/// Both slices are cut into chunks of `grain` elements (the final pair may be
/// shorter) and `worker` is invoked once per pair with no ordering guarantee
/// between invocations. Returns only once every invocation has completed,
/// which is the barrier the bitonic merge relies on before recursing.
///
/// The two slices are disjoint by construction (`split_at_mut` in the caller),
/// so chunk pairs never share an element.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn for_each_zipped<T, F>(left: &mut [T], right: &mut [T], grain: usize, worker: F)
where
    T: Send,
    F: Fn(&mut [T], &mut [T]) + Sync,
{
    assert_eq!(left.len(), right.len());

    let chunk_len = grain.max(1);
    left.par_chunks_mut(chunk_len)
        .zip(right.par_chunks_mut(chunk_len))
        .for_each(|(left_chunk, right_chunk)| worker(left_chunk, right_chunk));
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::for_each_zipped;

    #[test]
    fn visits_every_offset_exactly_once() {
        let mut left: Vec<usize> = (0..1000).collect();
        let mut right: Vec<usize> = (1000..2000).collect();

        let calls = AtomicUsize::new(0);
        for_each_zipped(&mut left, &mut right, 64, |l, r| {
            calls.fetch_add(1, Ordering::Relaxed);
            for (a, b) in l.iter_mut().zip(r.iter_mut()) {
                std::mem::swap(a, b);
            }
        });

        // 1000 / 64 rounds up to 16 chunk pairs.
        assert_eq!(calls.load(Ordering::Relaxed), 16);
        assert!(left.iter().copied().eq(1000..2000));
        assert!(right.iter().copied().eq(0..1000));
    }

    #[test]
    fn zero_grain_is_clamped() {
        let mut left = [1u32, 2];
        let mut right = [3u32, 4];
        for_each_zipped(&mut left, &mut right, 0, |l, r| {
            l[0] += r[0];
        });
        assert_eq!(left, [4, 6]);
    }

    #[test]
    fn empty_ranges_are_a_noop() {
        let mut left: [u8; 0] = [];
        let mut right: [u8; 0] = [];
        for_each_zipped(&mut left, &mut right, 8, |_, _| panic!("no chunks expected"));
    }
}
