use std::cmp::Ordering;

use crate::drop_merge;

sort_impl!("rust_drop_merge_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    drop_merge::sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    drop_merge::sort_by(v, compare);
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    drop_merge::sort_by_key(v, key);
}
