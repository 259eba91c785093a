//! D-ary max-heap operations and heap sort.
//!
//! The heap lives in a slice, the node at index `i` has the children `i * D + 1 ..= i * D + D`,
//! as far as they exist. Every operation is generic over the branching factor `D`, a value below
//! 2 is rejected when the function is instantiated.
//!
//! All element movement is done with [`slice::swap`], so a panicking comparison can never leave a
//! duplicated or missing element behind, only an unspecified order.

use core::cmp::{self, Ordering};

use crate::compare::{cmp_is_less, key_is_less, ord_is_less, projected_is_less};

struct Arity<const D: usize>;

impl<const D: usize> Arity<D> {
    const VALID: () = assert!(D >= 2, "a d-ary heap needs a branching factor of at least 2");
}

/// Sorts the slice with a `D`-ary heap sort, without preserving the order of equal elements.
///
/// This sort is unstable, in-place (i.e., does not allocate), and *O*(*n* \* log<sub>D</sub>(*n*))
/// worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// adaptive_sorts::dary_heap::sort::<3, _>(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<const D: usize, T>(v: &mut [T])
where
    T: Ord,
{
    heapsort::<D, T, _>(v, &mut ord_is_less());
}

/// Sorts the slice with a comparator function, without preserving the order of equal elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// exactly the elements it held before.
#[inline]
pub fn sort_by<const D: usize, T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heapsort::<D, T, _>(v, &mut cmp_is_less(compare));
}

/// Sorts the slice with a key extraction function, without preserving the order of equal
/// elements.
#[inline]
pub fn sort_by_key<const D: usize, T, K, F>(v: &mut [T], projection: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heapsort::<D, T, _>(v, &mut key_is_less(projection));
}

/// Sorts the slice by `compare` applied to the keys produced by `projection`.
///
/// `compare` is a strict "less than" over keys.
#[inline]
pub fn sort_by_projection<const D: usize, T, K, C, P>(v: &mut [T], compare: C, projection: P)
where
    C: FnMut(&K, &K) -> bool,
    P: FnMut(&T) -> K,
{
    heapsort::<D, T, _>(v, &mut projected_is_less(compare, projection));
}

/// Builds a heap out of `v` and pops it empty, leaving `v` in ascending order.
pub fn heapsort<const D: usize, T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    make_heap::<D, T, F>(v, is_less);
    sort_heap::<D, T, F>(v, is_less);
}

// --- Primitives ---

#[inline(always)]
pub fn parent<const D: usize>(pos: usize) -> usize {
    let () = Arity::<D>::VALID;
    debug_assert!(pos != 0);

    (pos - 1) / D
}

/// Saturates instead of overflowing, a saturated index is always past the end of the heap.
#[inline(always)]
pub fn first_child<const D: usize>(pos: usize) -> usize {
    let () = Arity::<D>::VALID;

    pos.saturating_mul(D).saturating_add(1)
}

#[inline(always)]
pub fn not_leaf<const D: usize>(len: usize, pos: usize) -> bool {
    first_child::<D>(pos) < len
}

/// Returns the index of the greatest child of `pos`. If several children compare equal the
/// leftmost one wins.
///
/// `pos` must not be a leaf.
pub fn top_child<const D: usize, T, F>(v: &[T], pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let first = first_child::<D>(pos);
    debug_assert!(first < v.len());

    let last = cmp::min(first.saturating_add(D), v.len());

    let mut top = first;
    for child in (first + 1)..last {
        if is_less(&v[top], &v[child]) {
            top = child;
        }
    }

    top
}

/// Moves `v[pos]` down until no child is greater than it. Equal children are swapped with too.
pub fn sift_down<const D: usize, T, F>(v: &mut [T], mut pos: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while not_leaf::<D>(v.len(), pos) {
        let top = top_child::<D, T, F>(v, pos, is_less);
        if is_less(&v[top], &v[pos]) {
            return;
        }

        v.swap(top, pos);
        pos = top;
    }
}

/// Moves `v[pos]` up until its parent is not less than it.
pub fn sift_up<const D: usize, T, F>(v: &mut [T], mut pos: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while pos != 0 {
        let parent = parent::<D>(pos);
        if !is_less(&v[parent], &v[pos]) {
            return;
        }

        v.swap(parent, pos);
        pos = parent;
    }
}

/// Adds the last element of `v` to the heap formed by `v[..v.len() - 1]`.
pub fn push_heap<const D: usize, T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if let Some(last) = v.len().checked_sub(1) {
        sift_up::<D, T, F>(v, last, is_less);
    }
}

/// Moves the greatest element of the heap `v` to the end, and restores the heap property for
/// `v[..v.len() - 1]`.
pub fn pop_heap<const D: usize, T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let Some(last) = v.len().checked_sub(1) else {
        return;
    };

    v.swap(0, last);
    if last == 0 {
        return;
    }

    sift_down::<D, T, F>(&mut v[..last], 0, is_less);
}

/// Turns `v` into a heap.
///
/// The heap is grown one element at a time by pushing every prefix, which is
/// *O*(*n* \* log<sub>D</sub>(*n*)). A bottom-up build would be *O*(*n*), but changes the number and
/// sequence of comparisons and the resulting layout of equal elements, which callers and tests
/// observe. Keep it this way unless all of them are revisited.
pub fn make_heap<const D: usize, T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return;
    }

    for end in 1..len {
        push_heap::<D, T, F>(&mut v[..end], is_less);
    }
    // The loop above stops one short, the last element still has to go in.
    push_heap::<D, T, F>(v, is_less);
}

/// Turns the heap `v` into an ascending sequence by popping until one element is left.
pub fn sort_heap<const D: usize, T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for end in (1..=v.len()).rev() {
        pop_heap::<D, T, F>(&mut v[..end], is_less);
    }
}

/// Returns the length of the longest prefix of `v` that is a heap.
pub fn is_heap_until<const D: usize, T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    for pos in 1..v.len() {
        if is_less(&v[parent::<D>(pos)], &v[pos]) {
            return pos;
        }
    }

    v.len()
}

pub fn is_heap<const D: usize, T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    is_heap_until::<D, T, F>(v, is_less) == v.len()
}
