use std::cmp::Ordering;

use crate::mel;

sort_impl!("rust_mel_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    mel::sort(v);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    mel::sort_by(v, compare);
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    mel::sort_by_key(v, key);
}
