//! Heap sort registrations, one module per branching factor.

macro_rules! dary_heapsort_impl {
    ($($d:literal),*) => {
        $(
            paste::paste! {
                pub mod [<d $d>] {
                    use std::cmp::Ordering;

                    use crate::dary_heap;

                    sort_impl!(concat!("rust_dary_heapsort_d", stringify!($d), "_unstable"));

                    #[inline]
                    pub fn sort<T>(v: &mut [T])
                    where
                        T: Ord,
                    {
                        dary_heap::sort::<$d, T>(v);
                    }

                    #[inline]
                    pub fn sort_by<T, F>(v: &mut [T], compare: F)
                    where
                        F: FnMut(&T, &T) -> Ordering,
                    {
                        dary_heap::sort_by::<$d, T, F>(v, compare);
                    }

                    #[inline]
                    pub fn sort_by_key<T, K, F>(v: &mut [T], key: F)
                    where
                        K: Ord,
                        F: FnMut(&T) -> K,
                    {
                        dary_heap::sort_by_key::<$d, T, K, F>(v, key);
                    }
                }
            }
        )*
    };
}

dary_heapsort_impl!(2, 3, 4);
