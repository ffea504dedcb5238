//! Enumerator protocol tests: every fast path agrees with plain pulling.

use std::fmt::Debug;

use zeroq::prelude::*;

/// Build the same chain repeatedly and check that span, count, copy-to and
/// the indexers all agree with what pulling produces.
fn assert_protocol<E, F>(make: F)
where
    F: Fn() -> E,
    E: ValueEnumerator,
    E::Item: Clone + PartialEq + Debug,
{
    let pulled: Vec<E::Item> = make().into_iterator().collect();

    assert_eq!(make().to_vec(), pulled, "to_vec");
    assert_eq!(make().into_vec(), pulled, "into_vec");
    assert_eq!(make().count(), pulled.len(), "count");
    assert_eq!(make().last_or_none(), pulled.last().cloned(), "last");

    let e = make();
    if let Some(n) = e.try_get_non_enumerated_count() {
        assert_eq!(n, pulled.len(), "non-enumerated count");
    }
    if let Some(span) = e.try_get_span() {
        assert_eq!(span, &pulled[..], "span");
    }

    let mut e = make();
    if let Some(n) = e.try_get_non_enumerated_count() {
        for offset in 0..=n {
            let mut dst = Vec::new();
            if e.try_copy_to(&mut dst, Index::Start(offset), n) {
                assert_eq!(dst, pulled[offset..].to_vec(), "copy from {offset}");
            } else {
                assert!(dst.is_empty(), "failed copy must not write");
            }
        }
    }

    for (i, expected) in pulled.iter().enumerate() {
        assert_eq!(make().element_at_or_none(i).as_ref(), Some(expected));
        let from_end = Index::End(pulled.len() - i);
        assert_eq!(make().element_at_or_none(from_end).as_ref(), Some(expected));
    }
    assert_eq!(make().element_at_or_none(pulled.len()), None);
}

#[test]
fn test_sources_agree_with_pulling() {
    let data: Vec<i32> = (1..=9).collect();
    assert_protocol(|| from_slice(&data));
    assert_protocol(|| from_vec(data.clone()));
    assert_protocol(|| from_iter(data.clone()));
    assert_protocol(|| from_exact_iter(data.clone()));
    assert_protocol(|| range(10i64, 7).expect("range"));
    assert_protocol(|| sequence(1u32, 20, 3).expect("sequence"));
    assert_protocol(|| repeat('x', 4));
    assert_protocol(empty::<u8>);
}

#[test]
fn test_positional_operators_agree_with_pulling() {
    let data: Vec<i32> = (1..=12).collect();
    assert_protocol(|| from_slice(&data).skip(3));
    assert_protocol(|| from_slice(&data).take(5));
    assert_protocol(|| from_slice(&data).skip(2).take(6));
    assert_protocol(|| from_slice(&data).take(8).skip(3));
    assert_protocol(|| from_slice(&data).take_last(4));
    assert_protocol(|| from_slice(&data).skip_last(4));
    assert_protocol(|| from_slice(&data).take_range(Index::Start(2)..Index::End(3)));
    assert_protocol(|| from_slice(&data).take_range(Index::End(5)..Index::End(1)));

    assert_protocol(|| from_iter(data.clone()).skip(3).take(4));
    assert_protocol(|| from_iter(data.clone()).take_last(4));
    assert_protocol(|| from_iter(data.clone()).skip_last(4));
    assert_protocol(|| from_iter(data.clone()).take_range(Index::Start(2)..Index::End(3)));
    assert_protocol(|| from_iter(data.clone()).take_range(Index::End(5)..Index::Start(10)));
}

#[test]
fn test_other_operators_agree_with_pulling() {
    let data: Vec<i32> = (1..=10).collect();
    assert_protocol(|| from_slice(&data).map(|x| x * 2));
    assert_protocol(|| from_slice(&data).filter(|x| x % 3 != 0));
    assert_protocol(|| from_slice(&data).filter(|x| x % 2 == 0).map(|x| x + 100));
    assert_protocol(|| from_slice(&data[..4]).concat(from_vec(data[4..].to_vec())));
    assert_protocol(|| from_slice(&data).chunk(3).expect("chunk"));
    assert_protocol(|| from_slice(&[3, 1, 3, 2, 1]).distinct());
    assert_protocol(|| from_slice(&data).group_by(|x| x % 3));
}

#[test]
fn test_copy_to_offsets() {
    let data = [1, 2, 3, 4, 5];

    let mut dst = Vec::new();
    assert!(from_slice(&data).try_copy_to(&mut dst, Index::Start(2), 10));
    assert_eq!(dst, vec![3, 4, 5]);

    let mut dst = vec![0];
    assert!(!from_slice(&data).try_copy_to(&mut dst, Index::Start(6), 1));
    assert_eq!(dst, vec![0]);

    // Offset equal to the length: only an empty copy is serviceable.
    let mut dst = Vec::new();
    assert!(from_slice(&data).try_copy_to(&mut dst, Index::Start(5), 0));
    assert!(!from_slice(&data).try_copy_to(&mut dst, Index::Start(5), 1));
    assert!(dst.is_empty());

    let mut dst = Vec::new();
    assert!(from_slice(&data).try_copy_to(&mut dst, Index::End(2), 1));
    assert_eq!(dst, vec![4]);

    let mut dst = Vec::new();
    assert!(from_slice(&data).skip(1).take(3).try_copy_to(&mut dst, Index::End(1), 1));
    assert_eq!(dst, vec![4]);
}

#[test]
fn test_copy_to_does_not_advance() {
    let data = [1, 2, 3, 4];
    let mut e = from_slice(&data).skip(1);
    let mut dst = Vec::new();
    assert!(e.try_copy_to(&mut dst, Index::Start(0), 2));
    assert_eq!(dst, vec![2, 3]);
    assert_eq!(e.try_get_next(), Some(2));
}

#[test]
fn test_empty_copy_after_skipping_past_the_end() {
    let data = [1, 2, 3];

    let mut dst = Vec::new();
    assert!(empty::<i32>().try_copy_to(&mut dst, Index::Start(0), 0));
    assert!(from_slice(&data).skip(10).try_copy_to(&mut dst, Index::Start(0), 0));
    assert!(from_slice(&data).skip(10).take(2).try_copy_to(&mut dst, Index::End(0), 0));
    assert!(dst.is_empty());

    assert!(!from_slice(&data).skip(10).try_copy_to(&mut dst, Index::Start(0), 1));
    assert!(!from_slice(&data).skip(3).take(2).try_copy_to(&mut dst, Index::Start(0), 1));
    assert!(dst.is_empty());
}

#[test]
fn test_concat_copy_spans_both_sides() {
    let mut e = from_slice(&[1, 2]).concat(from_vec(vec![3, 4, 5]));
    let mut dst = Vec::new();
    assert!(e.try_copy_to(&mut dst, Index::Start(1), 3));
    assert_eq!(dst, vec![2, 3, 4]);
}

#[test]
fn test_unknown_count_declines_fast_paths() {
    let mut e = from_iter(vec![1, 2, 3]).take(2);
    assert_eq!(e.try_get_non_enumerated_count(), None);
    assert!(e.try_get_span().is_none());
    let mut dst = Vec::new();
    assert!(!e.try_copy_to(&mut dst, Index::Start(0), 2));
    assert!(dst.is_empty());
}

#[test]
fn test_exhausted_enumerator_stays_exhausted() {
    let mut e = from_iter(vec![1]).skip(0).take(5);
    assert_eq!(e.try_get_next(), Some(1));
    assert_eq!(e.try_get_next(), None);
    assert_eq!(e.try_get_next(), None);
}

#[test]
fn test_value_iter_size_hint() {
    let data = [1, 2, 3, 4, 5];
    let it = from_slice(&data).skip(1).into_iterator();
    assert_eq!(it.size_hint(), (4, Some(4)));
    let it = from_iter(data).into_iterator();
    assert_eq!(it.size_hint(), (0, None));
}
