//! Drop-merge sort, an adaptive sort for inputs that are already mostly in order.
//!
//! A single forward pass keeps every element that continues the non-decreasing sequence written
//! so far and moves everything else into a side buffer. Only the side buffer is then sorted with a
//! general purpose sort, and finally merged back into the kept sequence from the back. For inputs
//! with few out of place elements this is close to a single linear scan.
//!
//! Based on the algorithm by Emil Ernerfeldt: <https://github.com/emilk/drop-merge-sort>.

use core::cmp::Ordering;
use core::mem;
use core::ptr;

use crate::compare::{cmp_is_less, key_is_less, ord_is_less, projected_is_less};
use crate::finish::{FinishSort, UnstableFinish};

/// After this many consecutive drops, the kept elements right before them are assumed to be the
/// outliers instead, and the drops are undone.
pub const RECENCY: usize = 8;

/// Try to fix a single out of place element by replacing the last kept one, before dropping.
pub const DOUBLE_COMPARISON: bool = true;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// *O*(*n*) for inputs where a constant number of elements is out of place, never worse than
/// *O*(*n* \* log(*n*)). Allocates a buffer for the out of place elements.
///
/// # Examples
///
/// ```
/// let mut v = [1, 2, 3, 10, 4, 5, 6];
///
/// adaptive_sorts::drop_merge::sort(&mut v);
/// assert!(v == [1, 2, 3, 4, 5, 6, 10]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with_finish::<UnstableFinish, T, _>(v, &mut ord_is_less());
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
    sort_with_finish::<UnstableFinish, T, _>(v, &mut cmp_is_less(compare));
}

/// Sorts the slice with a key extraction function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], projection: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_with_finish::<UnstableFinish, T, _>(v, &mut key_is_less(projection));
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
    sort_with_finish::<UnstableFinish, T, _>(v, &mut projected_is_less(compare, projection));
}

/// Whether undoing a drop has to move the value back from the dropped buffer, or if the bits left
/// behind in the slice can be reused as they are.
///
/// Reading a value out of a slot leaves its bits in place. If nothing was written to the slot
/// since, and the type has no drop glue that could observe a duplicate, forgetting the buffered
/// copy is enough.
#[inline(always)]
pub const fn needs_restore<T>() -> bool {
    mem::needs_drop::<T>()
}

/// Sorts `v` with drop-merge sort, using `S` to sort the dropped elements.
///
/// Returns how many elements were dropped, i.e. handed to `S` and merged back.
///
/// If `is_less` panics, every element is still present in `v` exactly once, in unspecified order.
#[inline(never)]
pub fn sort_with_finish<S, T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    S: FinishSort,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 || len < 2 {
        return 0;
    }

    let v_base = v.as_mut_ptr();

    // From here on `v` is only accessed through `v_base`. The gap in `v` is always tracked by
    // `gap`, so that every element is put back if `is_less` panics.
    let mut gap = DroppedGap {
        v_base,
        write: 0,
        dropped: Vec::new(),
    };

    let mut read = 0;
    let mut num_dropped_in_row = 0;

    // SAFETY: `read` and `gap.write` stay in bounds, `gap.write <= read` and
    // `v[gap.write..read]` is exactly the gap with `read - gap.write == gap.dropped.len()`. Only
    // initialized slots outside the gap are passed to `is_less`.
    unsafe {
        while read < len {
            let write = gap.write;
            let read_ptr = v_base.add(read);

            if write != 0 && is_less(&*read_ptr, &*v_base.add(write - 1)) {
                if DOUBLE_COMPARISON
                    && num_dropped_in_row == 0
                    && write >= 2
                    && !is_less(&*read_ptr, &*v_base.add(write - 2))
                {
                    // The previously kept element is the odd one out, swap it for this one.
                    gap.push_dropped(v_base.add(write - 1));
                    ptr::copy_nonoverlapping(read_ptr, v_base.add(write - 1), 1);
                    read += 1;
                    continue;
                }

                if num_dropped_in_row < RECENCY {
                    gap.push_dropped(read_ptr);
                    read += 1;
                    num_dropped_in_row += 1;
                } else {
                    // Too many drops in a row, the kept tail is more likely to be wrong. Put the
                    // recent drops back, and drop the last kept element instead.
                    read -= num_dropped_in_row;
                    gap.undo_drops(read, num_dropped_in_row);

                    gap.push_dropped(v_base.add(write - 1));
                    gap.write -= 1;

                    num_dropped_in_row = 0;
                }
            } else {
                if read != write {
                    ptr::copy_nonoverlapping(read_ptr, v_base.add(write), 1);
                }
                read += 1;
                gap.write += 1;
                num_dropped_in_row = 0;
            }
        }
    }

    let num_dropped = gap.dropped.len();

    S::finish_sort(&mut gap.dropped, is_less);

    // Merge the sorted dropped elements back, from the largest down. `back` is one past the end
    // of the gap, which shifts left as kept elements are moved behind it.
    let mut back = len;

    // SAFETY: `back - gap.write == gap.dropped.len()` holds at the start of every iteration, so
    // while an element is left in `dropped`, `back - 1` is a slot in the gap.
    unsafe {
        while let Some(last_idx) = gap.dropped.len().checked_sub(1) {
            let last_dropped = gap.dropped.as_ptr().add(last_idx);

            while gap.write != 0 && is_less(&*last_dropped, &*v_base.add(gap.write - 1)) {
                ptr::copy_nonoverlapping(v_base.add(gap.write - 1), v_base.add(back - 1), 1);
                back -= 1;
                gap.write -= 1;
            }

            ptr::copy_nonoverlapping(last_dropped, v_base.add(back - 1), 1);
            back -= 1;
            gap.dropped.set_len(last_idx);
        }
    }

    debug_assert_eq!(back, gap.write);

    num_dropped
}

// `v[write..write + dropped.len()]` is a gap, the elements that belong there are in `dropped`. When
// dropped, moves them back into the gap. That only happens if `is_less` panicked, otherwise
// `dropped` is empty by then.
struct DroppedGap<T> {
    v_base: *mut T,
    write: usize,
    dropped: Vec<T>,
}

impl<T> DroppedGap<T> {
    /// Moves the value at `src` to the end of `dropped`. The caller must treat `src` as part of the
    /// gap from now on.
    #[inline(always)]
    unsafe fn push_dropped(&mut self, src: *const T) {
        // Reserve first, if this panics nothing has been moved yet.
        self.dropped.reserve(1);

        let len = self.dropped.len();
        ptr::copy_nonoverlapping(src, self.dropped.as_mut_ptr().add(len), 1);
        self.dropped.set_len(len + 1);
    }

    /// Takes back the last `count` dropped elements, which were moved out of `v[start..]` in order
    /// and with no write to those slots since.
    #[inline(always)]
    unsafe fn undo_drops(&mut self, start: usize, count: usize) {
        debug_assert!(count <= self.dropped.len());

        let remaining = self.dropped.len() - count;

        if needs_restore::<T>() {
            ptr::copy_nonoverlapping(
                self.dropped.as_ptr().add(remaining),
                self.v_base.add(start),
                count,
            );
        }

        self.dropped.set_len(remaining);
    }
}

impl<T> Drop for DroppedGap<T> {
    fn drop(&mut self) {
        // SAFETY: See the type level comment.
        unsafe {
            ptr::copy_nonoverlapping(
                self.dropped.as_ptr(),
                self.v_base.add(self.write),
                self.dropped.len(),
            );
            self.dropped.set_len(0);
        }
    }
}
