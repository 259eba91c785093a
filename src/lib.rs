//! Adaptive and heap based in-place sorts, parameterized over comparison and key projection.
//!
//! - [`dary_heap`]: d-ary heap primitives and heap sort, generic over the branching factor.
//! - [`drop_merge`]: drop-merge sort, near linear on mostly sorted inputs.
//! - [`mel`]: encroaching lists merge sort, adaptive to inputs made of few monotonic runs.
//!
//! The `stable` and `unstable` modules register every implementation, plus a few baselines, with
//! the shared test and benchmark tooling.

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
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }

            #[inline]
            fn sort_by_key<T, K, F>(arr: &mut [T], key: F)
            where
                K: Ord,
                F: FnMut(&T) -> K,
            {
                sort_by_key(arr, key);
            }
        }
    };
}

pub mod compare;
pub mod dary_heap;
pub mod drop_merge;
pub mod finish;
pub mod mel;

pub mod stable;
pub mod unstable;

pub use sort_test_tools::Sort;
