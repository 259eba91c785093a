//! Adaptors from the public comparison forms to the `is_less` predicate used internally.
//!
//! Every algorithm in this crate is written against `F: FnMut(&T, &T) -> bool`, a strict weak
//! ordering where `is_less(a, b)` means `a` must be placed before `b`. The helpers here build that
//! predicate from `Ord`, from a three-way comparison, from a key function or from an arbitrary
//! comparison over projected keys.

use core::cmp::Ordering;

#[inline(always)]
pub fn ord_is_less<T>() -> impl FnMut(&T, &T) -> bool
where
    T: Ord,
{
    |a: &T, b: &T| a.lt(b)
}

#[inline(always)]
pub fn cmp_is_less<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| compare(a, b) == Ordering::Less
}

/// The key is recomputed for every comparison, it should be cheap to produce.
#[inline(always)]
pub fn key_is_less<T, K, F>(mut projection: F) -> impl FnMut(&T, &T) -> bool
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    move |a: &T, b: &T| projection(a).lt(&projection(b))
}

/// Composes `compare` with `projection`. `compare` has to be a strict "less than" over keys.
#[inline(always)]
pub fn projected_is_less<T, K, C, P>(mut compare: C, mut projection: P) -> impl FnMut(&T, &T) -> bool
where
    C: FnMut(&K, &K) -> bool,
    P: FnMut(&T) -> K,
{
    move |a: &T, b: &T| compare(&projection(a), &projection(b))
}

/// Three-way view of `is_less`, for routines that want an [`Ordering`].
///
/// Costs a second comparison whenever `a` is not less than `b`.
#[inline]
pub fn is_less_to_ordering<T, F>(a: &T, b: &T, is_less: &mut F) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(a, b) {
        Ordering::Less
    } else if is_less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns `true` if no element in `v` is less than its predecessor.
pub fn is_sorted_by<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).all(|w| !is_less(&w[1], &w[0]))
}
