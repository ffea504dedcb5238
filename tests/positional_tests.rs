//! Skip / Take / TakeRange / TakeLast tests

use proptest::prelude::*;
use zeroq::prelude::*;
use zeroq_operators::{Skip, Take};

fn clamp(n: isize) -> usize {
    n.max(0) as usize
}

/// Reference slice for a range, straight from the window formula.
fn reference(data: &[i32], range: QueryRange) -> Vec<i32> {
    let (skip, take) = range.window(data.len());
    data[skip..skip + take].to_vec()
}

fn index_strategy() -> impl Strategy<Value = Index> {
    prop_oneof![
        (0usize..15).prop_map(Index::Start),
        (0usize..15).prop_map(Index::End),
    ]
}

proptest! {
    #[test]
    fn prop_skip_take_matches_iterator(
        data in proptest::collection::vec(any::<i32>(), 0..40),
        skip in -5isize..50,
        take in -5isize..50,
    ) {
        let expected: Vec<i32> = data.iter().copied().skip(clamp(skip)).take(clamp(take)).collect();
        prop_assert_eq!(from_slice(&data).skip(skip).take(take).to_vec(), expected.clone());
        prop_assert_eq!(from_iter(data.clone()).skip(skip).take(take).into_vec(), expected);
    }

    #[test]
    fn prop_fused_chain_matches_unfused(
        data in proptest::collection::vec(any::<i32>(), 0..40),
        a in -5isize..30,
        b in -5isize..30,
        c in -5isize..30,
    ) {
        // Explicit constructors never fuse.
        let unfused = Take::new(Skip::new(Skip::new(from_slice(&data), a), b), c).to_vec();
        let fused = from_slice(&data).skip(a).skip(b).take(c).to_vec();
        prop_assert_eq!(fused, unfused);

        let unfused = Skip::new(Take::new(from_slice(&data), a), b).to_vec();
        let fused = from_slice(&data).take(a).skip(b).to_vec();
        prop_assert_eq!(fused, unfused);

        let unfused = Skip::new(Take::new(Take::new(from_iter(data.clone()), a), b), c).into_vec();
        let fused = from_iter(data.clone()).take(a).take(b).skip(c).into_vec();
        prop_assert_eq!(fused, unfused);
    }

    #[test]
    fn prop_negative_counts_clamp_to_zero(
        data in proptest::collection::vec(any::<i32>(), 0..20),
        n in -100isize..=0,
    ) {
        prop_assert_eq!(from_slice(&data).skip(n).to_vec(), data.clone());
        prop_assert_eq!(from_slice(&data).take(n).count(), 0);
    }

    #[test]
    fn prop_take_range_matches_window(
        data in proptest::collection::vec(any::<i32>(), 0..30),
        start in index_strategy(),
        end in index_strategy(),
    ) {
        let range = QueryRange::new(start, end);
        let expected = reference(&data, range);
        prop_assert_eq!(from_slice(&data).take_range(range).to_vec(), expected.clone());
        // Without a count the streaming modes have to reach the same answer.
        prop_assert_eq!(from_iter(data.clone()).take_range(range).into_vec(), expected);
    }

    #[test]
    fn prop_take_last_matches_tail(
        data in proptest::collection::vec(any::<i32>(), 0..40),
        n in -3isize..50,
    ) {
        let keep = clamp(n).min(data.len());
        let expected = data[data.len() - keep..].to_vec();
        prop_assert_eq!(from_slice(&data).take_last(n).to_vec(), expected.clone());
        prop_assert_eq!(from_iter(data.clone()).take_last(n).into_vec(), expected);
    }

    #[test]
    fn prop_skip_last_matches_head(
        data in proptest::collection::vec(any::<i32>(), 0..40),
        n in -3isize..50,
    ) {
        let keep = data.len().saturating_sub(clamp(n));
        let expected = data[..keep].to_vec();
        prop_assert_eq!(from_slice(&data).skip_last(n).to_vec(), expected.clone());
        prop_assert_eq!(from_iter(data.clone()).skip_last(n).into_vec(), expected);
    }
}

#[test]
fn test_take_range_from_both_ends() {
    let data: Vec<i32> = (0..10).collect();
    let middle = from_slice(&data)
        .take_range(Index::Start(2)..Index::End(2))
        .to_vec();
    assert_eq!(middle, vec![2, 3, 4, 5, 6, 7]);

    let tail = from_slice(&data)
        .take_range(Index::End(3)..Index::End(0))
        .to_vec();
    assert_eq!(tail, vec![7, 8, 9]);
}

#[test]
fn test_take_range_without_count() {
    let middle = from_iter(0..10)
        .take_range(Index::Start(2)..Index::End(2))
        .into_vec();
    assert_eq!(middle, vec![2, 3, 4, 5, 6, 7]);

    let tail = from_iter(0..10)
        .take_range(Index::End(3)..Index::End(0))
        .into_vec();
    assert_eq!(tail, vec![7, 8, 9]);

    let mixed = from_iter(0..10)
        .take_range(Index::End(6)..Index::Start(7))
        .into_vec();
    assert_eq!(mixed, vec![4, 5, 6]);

    let plain = from_iter(0..10).take_range(3usize..5).into_vec();
    assert_eq!(plain, vec![3, 4]);
}

#[test]
fn test_take_range_out_of_bounds_truncates() {
    let data = [1, 2, 3];
    assert_eq!(from_slice(&data).take_range(1usize..100).to_vec(), vec![2, 3]);
    assert_eq!(from_slice(&data).take_range(Index::End(100)..Index::End(0)).to_vec(), vec![1, 2, 3]);
    assert!(from_slice(&data).take_range(2usize..1).to_vec().is_empty());
    assert!(from_iter(data).take_range(Index::End(0)..Index::End(0)).into_vec().is_empty());
}

#[test]
fn test_take_range_count_after_replay() {
    let mut e = from_iter(0..10).take_range(Index::End(4)..Index::End(1));
    assert_eq!(e.try_get_non_enumerated_count(), None);
    assert_eq!(e.try_get_next(), Some(6));
    assert_eq!(e.try_get_non_enumerated_count(), Some(2));
    let mut dst = Vec::new();
    assert!(e.try_copy_to(&mut dst, Index::Start(0), 5));
    assert_eq!(dst, vec![7, 8]);
}

#[test]
fn test_take_last_from_one_shot_source() {
    let pool = ArrayPool::new();
    let last = from_iter(1..=7).take_last_in(3, pool.clone()).into_vec();
    assert_eq!(last, vec![5, 6, 7]);
    let stats = pool.stats();
    assert!(stats.rentals >= 1);
    assert!(stats.is_balanced());
}

#[test]
fn test_take_last_known_count_passes_through() {
    let data: Vec<i32> = (1..=7).collect();
    let mut e = from_slice(&data).take_last(3);
    assert_eq!(e.try_get_span(), Some(&[5, 6, 7][..]));
    assert_eq!(e.try_get_next(), Some(5));
    assert_eq!(e.try_get_span(), Some(&[6, 7][..]));
}

#[test]
fn test_take_last_longer_than_source() {
    assert_eq!(from_iter(1..=3).take_last(10).into_vec(), vec![1, 2, 3]);
    assert!(from_iter(1..=3).take_last(0).into_vec().is_empty());
}

#[test]
fn test_fused_skip_take_span() {
    let data: Vec<i32> = (0..10).collect();
    let e = from_slice(&data).skip(2).take(3);
    assert_eq!(e.try_get_span(), Some(&[2, 3, 4][..]));
    assert_eq!(e.try_get_non_enumerated_count(), Some(3));
}
