use std::vec;

use zeroq_core::comparer::KeyComparer;
use zeroq_core::index::copy_window;
use zeroq_core::{Index, ValueEnumerator};

use crate::grouping::{Grouping, Lookup};

enum State<K, V> {
    Pending,
    Ready(vec::IntoIter<Grouping<K, V>>),
    Done,
}

/// Lazy grouping: the whole upstream is read into a `Lookup` on the first
/// pull, then groupings are yielded in first-seen key order.
pub struct GroupBy<E, K, V, KF, EF, C> {
    source: E,
    key: KF,
    element: EF,
    comparer: Option<C>,
    state: State<K, V>,
}

impl<E, K, V, KF, EF, C> GroupBy<E, K, V, KF, EF, C>
where
    E: ValueEnumerator,
    KF: FnMut(&E::Item) -> K,
    EF: FnMut(E::Item) -> V,
    C: KeyComparer<K>,
{
    pub fn new(source: E, key: KF, element: EF, comparer: C) -> Self {
        Self {
            source,
            key,
            element,
            comparer: Some(comparer),
            state: State::Pending,
        }
    }

    fn build(&mut self) {
        let Some(comparer) = self.comparer.take() else {
            self.state = State::Done;
            return;
        };
        let mut lookup = Lookup::with_comparer(comparer);
        while let Some(item) = self.source.try_get_next() {
            let k = (self.key)(&item);
            lookup.add(k, (self.element)(item));
        }
        trace_op!(groups = lookup.len(), "group_by: built");
        self.state = State::Ready(lookup.into_groupings().into_iter());
    }
}

impl<E, K, V, KF, EF, C> ValueEnumerator for GroupBy<E, K, V, KF, EF, C>
where
    E: ValueEnumerator,
    KF: FnMut(&E::Item) -> K,
    EF: FnMut(E::Item) -> V,
    C: KeyComparer<K>,
{
    type Item = Grouping<K, V>;

    fn try_get_next(&mut self) -> Option<Grouping<K, V>> {
        if matches!(self.state, State::Pending) {
            self.build();
        }
        let next = match &mut self.state {
            State::Ready(groups) => groups.next(),
            _ => None,
        };
        if next.is_none() {
            self.state = State::Done;
        }
        next
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        match &self.state {
            State::Pending => None,
            State::Ready(groups) => Some(groups.len()),
            State::Done => Some(0),
        }
    }

    fn try_get_span(&self) -> Option<&[Grouping<K, V>]> {
        match &self.state {
            State::Ready(groups) => Some(groups.as_slice()),
            State::Done => Some(&[]),
            State::Pending => None,
        }
    }

    fn try_copy_to(&mut self, destination: &mut Vec<Grouping<K, V>>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        let Some(span) = self.try_get_span() else {
            return false;
        };
        let Some((start, n)) = copy_window(span.len(), offset, count) else {
            return false;
        };
        destination.extend_from_slice(&span[start..start + n]);
        true
    }

    fn dispose(&mut self) {
        self.state = State::Done;
        self.source.dispose();
    }
}
