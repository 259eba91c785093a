use std::cell::Cell;

use adaptive_sorts::compare::ord_is_less;
use adaptive_sorts::drop_merge::{self, needs_restore, sort_with_finish, RECENCY};
use adaptive_sorts::finish::{FinishSort, HeapFinish, InsertionFinish, UnstableFinish};

use sort_test_tools::patterns;

sort_test_tools::instantiate_sort_tests!(adaptive_sorts::unstable::rust_drop_merge::SortImpl);

fn run<S: FinishSort, T: Ord>(v: &mut [T]) -> usize {
    sort_with_finish::<S, T, _>(v, &mut ord_is_less())
}

#[test]
fn single_outlier_scenario() {
    let mut v = [1, 2, 3, 10, 4, 5, 6];

    assert_eq!(run::<UnstableFinish, _>(&mut v), 1);
    assert_eq!(v, [1, 2, 3, 4, 5, 6, 10]);
}

#[test]
fn public_entry_points() {
    let mut v = [1, 2, 3, 10, 4, 5, 6];
    drop_merge::sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5, 6, 10]);

    let mut v = [1, 2, 3, 10, 4, 5, 6];
    drop_merge::sort_by(&mut v, |a, b| b.cmp(a));
    assert_eq!(v, [10, 6, 5, 4, 3, 2, 1]);

    let mut v = ["ccc", "a", "bb", "dddd"];
    drop_merge::sort_by_key(&mut v, |s| s.len());
    assert_eq!(v, ["a", "bb", "ccc", "dddd"]);

    let mut v = [(3, 'x'), (1, 'y'), (2, 'z')];
    drop_merge::sort_by_projection(&mut v, |a: &char, b: &char| a < b, |x: &(i32, char)| x.1);
    assert_eq!(v, [(3, 'x'), (1, 'y'), (2, 'z')]);
    drop_merge::sort_by_projection(&mut v, |a: &i32, b: &i32| a > b, |x: &(i32, char)| x.0);
    assert_eq!(v, [(3, 'x'), (2, 'z'), (1, 'y')]);
}

#[test]
fn one_misplaced_drops_a_bounded_number() {
    // Every move of one element in short inputs. Moving an element to the very front drops the
    // elements it jumped over, until there are enough of them to undo.
    for len in [2, 3, 5, 10, 33] {
        for from in 0..len {
            for to in 0..len {
                let mut v: Vec<i32> = (0..len as i32).collect();
                let val = v.remove(from);
                v.insert(to, val);

                let dropped = run::<UnstableFinish, _>(&mut v);

                assert!(dropped <= RECENCY, "len: {len} from: {from} to: {to} dropped: {dropped}");
                assert_eq!(v, (0..len as i32).collect::<Vec<_>>());
            }
        }
    }

    for len in [100, 1_000, 10_000] {
        let mut v = patterns::one_misplaced(len);

        let dropped = run::<UnstableFinish, _>(&mut v);

        assert!(dropped <= RECENCY, "len: {len} dropped: {dropped}");
        assert_eq!(v, patterns::ascending(len));
    }
}

#[test]
fn ascending_is_a_single_scan() {
    for len in [0, 1, 2, 17, 1_000] {
        let mut v = patterns::ascending(len);
        let mut comps = 0;

        let dropped = sort_with_finish::<UnstableFinish, _, _>(&mut v, &mut |a: &i32, b: &i32| {
            comps += 1;
            a < b
        });

        assert_eq!(dropped, 0);
        assert_eq!(comps, len.saturating_sub(1));
        assert_eq!(v, patterns::ascending(len));
    }
}

#[test]
fn descending_is_sorted() {
    for len in [2, 3, 8, 9, 10, 100, 2_048] {
        let mut v = patterns::descending(len);
        run::<UnstableFinish, _>(&mut v);
        assert_eq!(v, patterns::ascending(len));
    }
}

#[test]
fn too_many_drops_are_undone() {
    // The first element is larger than everything after it. After RECENCY drops in a row it is
    // dropped instead of the elements that follow.
    let mut v: Vec<i32> = std::iter::once(100).chain(0..50).collect();
    assert_eq!(run::<UnstableFinish, _>(&mut v), 1);
    assert_eq!(v, (0..50).chain(std::iter::once(100)).collect::<Vec<_>>());

    // Same with a type that has drop glue, the undone drops are moved back.
    let mut v: Vec<String> = std::iter::once(100)
        .chain(0..50)
        .map(|val| format!("{val:03}"))
        .collect();
    assert_eq!(run::<UnstableFinish, _>(&mut v), 1);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(v.last().map(String::as_str), Some("100"));
}

#[test]
fn short_drop_runs_are_kept_dropped() {
    // Fewer than RECENCY smaller elements after the outlier, no undo happens.
    let outliers = RECENCY - 1;
    let mut v: Vec<i32> = vec![10, 20, 1000];
    v.extend(21..(21 + outliers as i32));
    v.extend(2000..2010);

    // 21.. are all less than 1000 but not less than 20, the first one takes the fast path and
    // replaces 1000.
    assert_eq!(run::<UnstableFinish, _>(&mut v), 1);
    assert!(v.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn restore_flag() {
    assert!(!needs_restore::<u32>());
    assert!(!needs_restore::<(i32, char)>());
    assert!(!needs_restore::<Cell<u64>>());
    assert!(needs_restore::<String>());
    assert!(needs_restore::<Vec<i32>>());
}

fn finish_strategies_agree_for<T: Ord + Clone + std::fmt::Debug>(input: Vec<T>) {
    let mut expected = input.clone();
    expected.sort();

    let mut a = input.clone();
    let mut b = input.clone();
    let mut c = input.clone();
    let mut d = input;

    let dropped_a = run::<UnstableFinish, _>(&mut a);
    let dropped_b = run::<HeapFinish<2>, _>(&mut b);
    let dropped_c = run::<HeapFinish<4>, _>(&mut c);
    let dropped_d = run::<InsertionFinish, _>(&mut d);

    assert_eq!(a, expected);
    assert_eq!(b, expected);
    assert_eq!(c, expected);
    assert_eq!(d, expected);

    // The pass itself does not depend on the strategy.
    assert_eq!(dropped_a, dropped_b);
    assert_eq!(dropped_a, dropped_c);
    assert_eq!(dropped_a, dropped_d);
}

#[test]
fn finish_strategies_agree() {
    for len in [0, 1, 2, 9, 50, 500] {
        finish_strategies_agree_for(patterns::random(len));
        finish_strategies_agree_for(patterns::random_uniform(len, 0..5));
        finish_strategies_agree_for(patterns::ascending_with_noise(len, 10.0));
        finish_strategies_agree_for(patterns::saw_mixed(len, 4));
        finish_strategies_agree_for(
            patterns::random(len)
                .into_iter()
                .map(|val| val.to_string())
                .collect(),
        );
    }
}

#[test]
fn finish_names() {
    assert_eq!(UnstableFinish::name(), "unstable");
    assert_eq!(<HeapFinish<2>>::name(), "heap");
    assert_eq!(InsertionFinish::name(), "insertion");
}
