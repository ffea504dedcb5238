//! Lookup, group_by, distinct and union tests

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use zeroq::prelude::*;

#[test]
fn test_lookup_preserves_first_seen_order() {
    let pairs = [("b", 1), ("a", 2), ("b", 3), ("c", 4), ("a", 5)];
    let lookup = from_slice(&pairs).to_lookup_with(|p| p.0, |p| p.1);

    let keys: Vec<&str> = lookup.iter().map(|g| *g.key()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
    assert_eq!(lookup.values(&"b"), &[1, 3]);
    assert_eq!(lookup.values(&"a"), &[2, 5]);
    assert_eq!(lookup.values(&"c"), &[4]);
    assert!(lookup.values(&"z").is_empty());
    assert_eq!(lookup.len(), 3);
}

#[test]
fn test_lookup_resize_matches_reference_map() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let keys: Vec<u32> = (0..2_000).map(|_| rng.gen_range(0..500)).collect();

    let mut lookup = Lookup::new();
    let mut reference: HashMap<u32, Vec<usize>> = HashMap::new();
    let mut first_seen = Vec::new();
    for (i, &k) in keys.iter().enumerate() {
        lookup.add(k, i);
        reference
            .entry(k)
            .or_insert_with(|| {
                first_seen.push(k);
                Vec::new()
            })
            .push(i);
    }

    assert_eq!(lookup.len(), reference.len());
    assert!(lookup.bucket_count().is_power_of_two());
    assert!(lookup.len() * 100 <= lookup.bucket_count() * 72);
    for (k, values) in &reference {
        assert_eq!(lookup.values(k), values.as_slice(), "key {k}");
    }
    let order: Vec<u32> = lookup.iter().map(|g| *g.key()).collect();
    assert_eq!(order, first_seen);
}

#[test]
fn test_lookup_null_keys_group_together() {
    let data = [Some(1), None, Some(2), None, Some(1)];
    let lookup = from_slice(&data).to_lookup_by(
        |v| *v,
        |v| v,
        OptionComparer::new(DefaultComparer),
    );
    assert_eq!(lookup.len(), 3);
    assert_eq!(lookup.values(&None), &[None, None]);
    assert_eq!(lookup.values(&Some(1)), &[Some(1), Some(1)]);
    let keys: Vec<Option<i32>> = lookup.iter().map(|g| *g.key()).collect();
    assert_eq!(keys, vec![Some(1), None, Some(2)]);
}

#[test]
fn test_lookup_with_projection_comparer() {
    let words = ["Apple", "avocado", "Banana", "APRICOT", "blueberry"];
    let lookup = from_slice(&words).to_lookup_by(
        |w| w.to_string(),
        |w| w,
        ProjectionComparer::new(|k: &String| k.to_lowercase().chars().next()),
    );
    let keys: Vec<&str> = lookup.iter().map(|g| g.key().as_str()).collect();
    assert_eq!(keys, vec!["Apple", "Banana"]);
    assert_eq!(
        lookup.values(&"a".to_string()),
        &["Apple", "avocado", "APRICOT"]
    );
}

#[test]
fn test_into_groupings_keeps_order() {
    let lookup = from_iter(0..10).to_lookup(|x| x % 3);
    let groups: Vec<(i32, Vec<i32>)> = lookup
        .into_groupings()
        .into_iter()
        .map(|g| g.into_parts())
        .collect();
    assert_eq!(
        groups,
        vec![(0, vec![0, 3, 6, 9]), (1, vec![1, 4, 7]), (2, vec![2, 5, 8])]
    );
}

#[test]
fn test_group_by_is_lazy_and_ordered() {
    let data = [5, 1, 5, 2, 1, 5];
    let mut pulled = 0;
    let mut groups = from_iter(data.into_iter().inspect(|_| pulled += 1)).group_by(|v| *v);
    assert_eq!(groups.try_get_non_enumerated_count(), None);

    let first = groups.try_get_next().expect("first group");
    assert_eq!(first.key(), &5);
    assert_eq!(first.elements(), &[5, 5, 5]);
    assert_eq!(groups.try_get_non_enumerated_count(), Some(2));

    let rest: Vec<(i32, usize)> = groups
        .into_iterator()
        .map(|g| (*g.key(), g.len()))
        .collect();
    assert_eq!(rest, vec![(1, 2), (2, 1)]);
    assert_eq!(pulled, 6);
}

#[test]
fn test_group_by_with_element_selector() {
    let people = [("ann", 31), ("bob", 25), ("cat", 31)];
    let by_age = from_slice(&people)
        .group_by_with(|p| p.1, |p| p.0, DefaultComparer)
        .into_vec();
    assert_eq!(by_age.len(), 2);
    assert_eq!(by_age[0].key(), &31);
    assert_eq!(by_age[0].elements(), &["ann", "cat"]);
    assert_eq!(by_age[1].elements(), &["bob"]);
}

#[test]
fn test_grouping_as_source() {
    let lookup = from_iter(0..6).to_lookup(|x| x % 2);
    let odd = lookup
        .into_groupings()
        .into_iter()
        .nth(1)
        .expect("odd group");
    assert_eq!(odd.into_enumerator().skip(1).to_vec(), vec![3, 5]);
}

#[test]
fn test_distinct_keeps_first_occurrence() {
    let data = [3, 1, 3, 2, 1, 4, 4];
    assert_eq!(from_slice(&data).distinct().to_vec(), vec![3, 1, 2, 4]);
}

#[test]
fn test_distinct_by_comparer() {
    let data = ["a", "B", "A", "b", "c"];
    let comparer = ProjectionComparer::new(|s: &&str| s.to_lowercase());
    assert_eq!(
        from_slice(&data).distinct_by(comparer).to_vec(),
        vec!["a", "B", "c"]
    );
}

#[test]
fn test_distinct_across_resizes() {
    let data: Vec<u32> = (0..1_000).map(|i| i % 300).collect();
    let out = from_slice(&data).distinct().to_vec();
    assert_eq!(out, (0..300).collect::<Vec<_>>());
}

#[test]
fn test_union_is_ordered_set_concatenation() {
    let left = [1, 2, 2, 5];
    let right = vec![2, 3, 1, 4, 3];
    let out = from_slice(&left).union(from_vec(right)).to_vec();
    assert_eq!(out, vec![1, 2, 5, 3, 4]);
}
