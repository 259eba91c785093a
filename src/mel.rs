//! Mel-sort, a merge sort over encroaching lists.
//!
//! Every element is appended to the front or the back of one of a growing set of double ended
//! lists, chosen by binary search so that each list stays non-decreasing. An input made of `k`
//! ascending or descending runs ends up in roughly `k` lists, which are then merged pairwise.
//!
//! Described in "Encroaching lists as a measure of presortedness" by Steven S. Skiena.

use core::cmp::Ordering;
use core::mem;
use core::ptr;

use std::collections::VecDeque;

use crate::compare::{cmp_is_less, key_is_less, ord_is_less, projected_is_less};

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// *O*(*n* \* log(*k*)) comparisons to distribute the elements into *k* encroaching lists, plus
/// *O*(*n* \* log(*k*)) to merge them. Allocates storage for all elements.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 3, 1, 2, 3];
///
/// adaptive_sorts::mel::sort(&mut v);
/// assert!(v == [1, 2, 3, 3, 4, 5]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    mel_sort(v, &mut ord_is_less());
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// exactly the elements it held before.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    mel_sort(v, &mut cmp_is_less(compare));
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], projection: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    mel_sort(v, &mut key_is_less(projection));
}

/// Sorts the slice by `compare` applied to the keys produced by `projection`.
///
/// `compare` is a strict "less than" over keys.
#[inline]
pub fn sort_by_projection<T, K, C, P>(v: &mut [T], compare: C, projection: P)
where
    C: FnMut(&K, &K) -> bool,
    P: FnMut(&T) -> K,
{
    mel_sort(v, &mut projected_is_less(compare, projection));
}

/// Returns how many encroaching lists the classification phase builds for `v`, without modifying
/// it.
pub fn encroaching_list_count<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut lists: Vec<VecDeque<usize>> = Vec::new();

    for (i, elem) in v.iter().enumerate() {
        let (idx, value_is_smaller) = find_list(&lists, elem, |j| &v[*j], is_less);

        if let Some(list) = lists.get_mut(idx) {
            if value_is_smaller {
                list.push_front(i);
            } else {
                list.push_back(i);
            }
        } else {
            lists.push(VecDeque::from([i]));
        }
    }

    lists.len()
}

/// Sorts `v` with mel-sort.
///
/// If `is_less` panics, every element is still present in `v` exactly once, in unspecified order.
#[inline(never)]
pub fn mel_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 || len < 2 {
        return;
    }

    let v_base = v.as_mut_ptr();

    let mut lists = EncroachingLists {
        v_base,
        filled: 0,
        lists: Vec::new(),
        scratch: VecDeque::new(),
    };

    for i in 0..len {
        // SAFETY: `v[i..]` has not been touched yet, and `lists` takes ownership of `v[i]` only
        // after all comparisons involving it are done.
        unsafe {
            let elem_ptr = v_base.add(i);
            let (idx, value_is_smaller) = find_list(&lists.lists, &*elem_ptr, |x| x, is_less);
            lists.insert(idx, value_is_smaller, elem_ptr);
        }
    }

    while lists.lists.len() > 2 {
        let count = lists.lists.len();
        if count % 2 != 0 {
            lists.merge_lists(count - 2, count - 1, is_less);
            lists.lists.pop();
        }

        let half = lists.lists.len() / 2;
        for i in 0..half {
            lists.merge_lists(i, i + half, is_less);
        }
        lists.lists.truncate(half);
    }

    // SAFETY: All elements of `v` are owned by `lists` now.
    unsafe {
        lists.write_back(is_less);
    }
}

/// Binary search for a list that `elem` can be added to. Returns the index of the list, or
/// `lists.len()` if there is none, and whether `elem` goes to the front.
///
/// The returned index, if in range, is always the last probed list that was suitable. So the
/// result is usable even if the suitable lists are not contiguous.
fn find_list<'a, L, T, F>(
    lists: &'a [VecDeque<L>],
    elem: &T,
    resolve: impl Fn(&'a L) -> &'a T,
    is_less: &mut F,
) -> (usize, bool)
where
    T: 'a,
    F: FnMut(&T, &T) -> bool,
{
    let mut base = 0;
    let mut size = lists.len();
    let mut value_is_smaller = true;

    while size > 0 {
        let probe = &lists[base + size / 2];

        // Lists are never empty.
        if !is_less(resolve(&probe[0]), elem) {
            size /= 2;
            value_is_smaller = true;
        } else if !is_less(elem, resolve(&probe[probe.len() - 1])) {
            size /= 2;
            value_is_smaller = false;
        } else {
            base += size / 2 + 1;
            size -= size / 2 + 1;
        }
    }

    (base, value_is_smaller)
}

// Owns every element that was moved out of `v`. `v[filled..]` is a gap exactly as large as the
// number of elements held in `lists` and `scratch`. When dropped, moves them all into the gap.
// That only happens if `is_less` panicked, otherwise everything was written back by then.
struct EncroachingLists<T> {
    v_base: *mut T,
    filled: usize,
    lists: Vec<VecDeque<T>>,
    scratch: VecDeque<T>,
}

impl<T> EncroachingLists<T> {
    /// Moves the value at `src` into list `idx`, or into a new list if `idx` is out of range.
    unsafe fn insert(&mut self, idx: usize, value_is_smaller: bool, src: *const T) {
        // Allocate first, if this panics nothing has been moved yet.
        if let Some(list) = self.lists.get_mut(idx) {
            list.reserve(1);

            let value = ptr::read(src);
            if value_is_smaller {
                list.push_front(value);
            } else {
                list.push_back(value);
            }
        } else {
            self.lists.reserve(1);
            let mut list = VecDeque::with_capacity(1);

            list.push_back(ptr::read(src));
            self.lists.push(list);
        }
    }

    /// Merges list `from` into list `into`, leaving `from` empty. Prefers `into` for equal
    /// elements.
    fn merge_lists<F>(&mut self, into: usize, from: usize, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(into < from);

        let (head, tail) = self.lists.split_at_mut(from);
        let left = &mut head[into];
        let right = &mut tail[0];

        let out = &mut self.scratch;
        debug_assert!(out.is_empty());
        out.reserve(left.len() + right.len());

        while let (Some(l), Some(r)) = (left.front(), right.front()) {
            let src = if is_less(r, l) { &mut *right } else { &mut *left };
            if let Some(value) = src.pop_front() {
                out.push_back(value);
            }
        }
        out.append(left);
        out.append(right);

        mem::swap(left, out);
    }

    /// Moves the remaining one or two lists into `v`, merging them if there are two.
    unsafe fn write_back<F>(&mut self, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug_assert!(self.lists.len() <= 2);

        if let [left, right] = &mut self.lists[..] {
            while let (Some(l), Some(r)) = (left.front(), right.front()) {
                let src = if is_less(r, l) { &mut *right } else { &mut *left };
                if let Some(value) = src.pop_front() {
                    ptr::write(self.v_base.add(self.filled), value);
                    self.filled += 1;
                }
            }
        }

        for list in &mut self.lists {
            for value in list.drain(..) {
                ptr::write(self.v_base.add(self.filled), value);
                self.filled += 1;
            }
        }
    }
}

impl<T> Drop for EncroachingLists<T> {
    fn drop(&mut self) {
        let mut dst = self.filled;

        for list in self.lists.iter_mut().chain(Some(&mut self.scratch)) {
            for value in list.drain(..) {
                // SAFETY: See the type level comment.
                unsafe {
                    ptr::write(self.v_base.add(dst), value);
                }
                dst += 1;
            }
        }
    }
}
