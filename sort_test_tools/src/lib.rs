/// Uniform interface over one sort implementation, used by the shared test suite, the benchmarks
/// and the fuzz targets.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;

    fn sort_by_key<T, K, F>(arr: &mut [T], key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K;
}

pub mod patterns;
