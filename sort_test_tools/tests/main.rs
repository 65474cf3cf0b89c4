use sort_test_tools::{instantiate_sort_tests, Sort};

// Run the suite against the stdlib sort, as a check of the suite itself.
struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Copy + Send,
    {
        arr.sort();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Copy + Send,
        F: Fn(&T, &T) -> std::cmp::Ordering + Sync,
    {
        arr.sort_by(|a, b| compare(a, b));
    }
}

instantiate_sort_tests!(SortImpl);
