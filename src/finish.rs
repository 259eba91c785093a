//! Sorts used to finish off partial work, injected as a strategy type parameter.
//!
//! Drop-merge sort only classifies elements, the deferred ones still need a general purpose
//! comparison sort. Which one is used is decided by the caller through [`FinishSort`], so tests can
//! plug in something trivially correct and benchmarks can compare options.

use crate::compare::is_less_to_ordering;
use crate::dary_heap;

pub trait FinishSort {
    fn name() -> &'static str;

    /// Sorts `v` in ascending order according to `is_less`, stability is not required.
    ///
    /// Must leave `v` as a permutation of its input if `is_less` panics.
    fn finish_sort<T, F>(v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool;
}

/// The standard library unstable sort. Default choice, *O*(*n* \* log(*n*)) worst-case.
pub struct UnstableFinish;

impl FinishSort for UnstableFinish {
    fn name() -> &'static str {
        "unstable"
    }

    #[inline]
    fn finish_sort<T, F>(v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        v.sort_unstable_by(|a, b| is_less_to_ordering(a, b, is_less));
    }
}

/// Heap sort from this crate with branching factor `D`.
pub struct HeapFinish<const D: usize>;

impl<const D: usize> FinishSort for HeapFinish<D> {
    fn name() -> &'static str {
        "heap"
    }

    #[inline]
    fn finish_sort<T, F>(v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        dary_heap::heapsort::<D, T, F>(v, is_less);
    }
}

/// Quadratic insertion sort built only from adjacent swaps. Meant for tests, where being obviously
/// correct matters more than speed.
pub struct InsertionFinish;

impl FinishSort for InsertionFinish {
    fn name() -> &'static str {
        "insertion"
    }

    fn finish_sort<T, F>(v: &mut [T], is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        for i in 1..v.len() {
            let mut j = i;
            while j > 0 && is_less(&v[j], &v[j - 1]) {
                v.swap(j, j - 1);
                j -= 1;
            }
        }
    }
}
