use std::cmp::Ordering;

/// Implementation under test.
///
/// The comparator is shared across worker threads by the parallel engines,
/// hence `Fn + Sync` rather than `FnMut`; elements must be plain copyable
/// records since the engines copy them through pivots and merge buffers.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Copy + Send;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Copy + Send,
        F: Fn(&T, &T) -> Ordering + Sync;
}

pub mod patterns;
