//! Differential tests: every structure is driven alongside a brute-force
//! `Vec` model through generated operation sequences and must agree with it
//! on every read.

use proptest::prelude::*;
use proptest::sample::Index;
use rangefold::{
    algebra::{
        add::I64AddAction,
        min::I64MinMonoid,
        sum::I64SumMonoid,
    },
    DualSegmentTree, FenwickTree, LazySegmentTree, SegmentTree, SparseTable,
};

/// Resolves two free-floating indices into range endpoints over `[0, len]`.
/// Deliberately allows degenerate and reversed ranges; the structures treat
/// those as no-ops and so do the models.
fn endpoints(a: &Index, b: &Index, len: usize) -> (usize, usize) {
    (a.index(len + 1), b.index(len + 1))
}

fn model_sum(model: &[i64], start: usize, end: usize) -> i64 {
    if start >= end {
        0
    } else {
        model[start..end].iter().sum()
    }
}

fn model_min(model: &[i64], start: usize, end: usize) -> i64 {
    if start >= end {
        i64::MAX
    } else {
        model[start..end].iter().copied().min().unwrap()
    }
}

proptest! {
    #[test]
    fn lazy_sum_matches_model(
        init in prop::collection::vec(-1_000i64..1_000, 1..40),
        ops in prop::collection::vec(
            (0u8..3, any::<Index>(), any::<Index>(), -1_000i64..1_000),
            1..48,
        ),
    ) {
        let len = init.len();
        let mut model = init.clone();
        let mut tree: LazySegmentTree<I64SumMonoid, I64AddAction> =
            LazySegmentTree::from_slice(&init).unwrap();
        for (kind, a, b, delta) in &ops {
            let (start, end) = endpoints(a, b, len);
            match *kind {
                0 => {
                    tree.apply(start..end, *delta).unwrap();
                    if start < end {
                        for value in &mut model[start..end] {
                            *value += delta;
                        }
                    }
                }
                1 => {
                    prop_assert_eq!(tree.fold(start..end).unwrap(), model_sum(&model, start, end));
                }
                _ => {
                    let index = a.index(len);
                    prop_assert_eq!(tree.get(index).unwrap(), model[index]);
                }
            }
        }
        prop_assert_eq!(tree.fold(0..len).unwrap(), model_sum(&model, 0, len));
    }

    #[test]
    fn lazy_min_matches_model(
        init in prop::collection::vec(-1_000i64..1_000, 1..40),
        ops in prop::collection::vec(
            (0u8..3, any::<Index>(), any::<Index>(), -1_000i64..1_000),
            1..48,
        ),
    ) {
        let len = init.len();
        let mut model = init.clone();
        let mut tree: LazySegmentTree<I64MinMonoid, I64AddAction> =
            LazySegmentTree::from_slice(&init).unwrap();
        for (kind, a, b, delta) in &ops {
            let (start, end) = endpoints(a, b, len);
            match *kind {
                0 => {
                    tree.apply(start..end, *delta).unwrap();
                    if start < end {
                        for value in &mut model[start..end] {
                            *value += delta;
                        }
                    }
                }
                1 => {
                    prop_assert_eq!(tree.fold(start..end).unwrap(), model_min(&model, start, end));
                }
                _ => {
                    let index = a.index(len);
                    prop_assert_eq!(tree.get(index).unwrap(), model[index]);
                }
            }
        }
        prop_assert_eq!(tree.fold(0..len).unwrap(), model_min(&model, 0, len));
    }

    #[test]
    fn segment_tree_matches_model(
        init in prop::collection::vec(-1_000i64..1_000, 1..40),
        ops in prop::collection::vec(
            (0u8..4, any::<Index>(), any::<Index>(), -1_000i64..1_000),
            1..48,
        ),
    ) {
        let len = init.len();
        let mut model = init.clone();
        let mut tree: SegmentTree<I64SumMonoid> = SegmentTree::from_slice(&init).unwrap();
        for (kind, a, b, value) in &ops {
            match *kind {
                0 => {
                    let index = a.index(len);
                    tree.update(index, |v| v + value).unwrap();
                    model[index] += value;
                }
                1 => {
                    let index = a.index(len);
                    tree.set(index, *value).unwrap();
                    model[index] = *value;
                }
                2 => {
                    let (start, end) = endpoints(a, b, len);
                    prop_assert_eq!(tree.fold(start..end).unwrap(), model_sum(&model, start, end));
                }
                _ => {
                    let index = a.index(len);
                    prop_assert_eq!(tree.get(index).unwrap(), model[index]);
                }
            }
        }
        prop_assert_eq!(tree.fold(0..len).unwrap(), model_sum(&model, 0, len));
    }

    #[test]
    fn dual_tree_matches_model(
        init in prop::collection::vec(-1_000i64..1_000, 1..40),
        ops in prop::collection::vec(
            (0u8..2, any::<Index>(), any::<Index>(), -1_000i64..1_000),
            1..48,
        ),
    ) {
        let len = init.len();
        let mut model = init.clone();
        let mut tree: DualSegmentTree<I64SumMonoid, I64AddAction> =
            DualSegmentTree::from_slice(&init).unwrap();
        for (kind, a, b, delta) in &ops {
            match *kind {
                0 => {
                    let (start, end) = endpoints(a, b, len);
                    tree.apply(start..end, *delta).unwrap();
                    if start < end {
                        for value in &mut model[start..end] {
                            *value += delta;
                        }
                    }
                }
                _ => {
                    let index = a.index(len);
                    prop_assert_eq!(tree.get(index).unwrap(), model[index]);
                }
            }
        }
        for index in 0..len {
            prop_assert_eq!(tree.get(index).unwrap(), model[index]);
        }
    }

    #[test]
    fn fenwick_matches_model(
        init in prop::collection::vec(-1_000i64..1_000, 1..40),
        ops in prop::collection::vec(
            (0u8..4, any::<Index>(), any::<Index>(), -1_000i64..1_000),
            1..48,
        ),
    ) {
        let len = init.len();
        let mut model = init.clone();
        let mut tree: FenwickTree<I64SumMonoid> = FenwickTree::from_slice(&init).unwrap();
        for (kind, a, b, value) in &ops {
            match *kind {
                0 => {
                    let index = a.index(len);
                    tree.affect(index, *value).unwrap();
                    model[index] += value;
                }
                1 => {
                    // exercises the inverse path: replace, not compose
                    let index = a.index(len);
                    tree.update(index, |_| *value).unwrap();
                    model[index] = *value;
                }
                2 => {
                    let (start, end) = endpoints(a, b, len);
                    prop_assert_eq!(tree.fold(start..end).unwrap(), model_sum(&model, start, end));
                }
                _ => {
                    let end = a.index(len + 1);
                    prop_assert_eq!(tree.prefix_fold(end).unwrap(), model_sum(&model, 0, end));
                }
            }
        }
        prop_assert_eq!(tree.prefix_fold(len).unwrap(), model_sum(&model, 0, len));
    }

    #[test]
    fn sparse_table_matches_model(
        init in prop::collection::vec(-1_000i64..1_000, 1..64),
        queries in prop::collection::vec((any::<Index>(), any::<Index>()), 1..32),
    ) {
        let len = init.len();
        let table: SparseTable<I64MinMonoid> = SparseTable::from_slice(&init).unwrap();
        for (a, b) in &queries {
            let (start, end) = endpoints(a, b, len);
            let expected = model_min(&init, start, end);
            prop_assert_eq!(table.fold(start..end).unwrap(), expected);
            // reads are observationally pure
            prop_assert_eq!(table.fold(start..end).unwrap(), expected);
        }
    }
}
