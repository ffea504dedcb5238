use zeroq_core::index::copy_window;
use zeroq_core::{Index, ValueEnumerator};

/// `first` followed by `second`.
pub struct Concat<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A, B> Concat<A, B>
where
    A: ValueEnumerator,
    B: ValueEnumerator<Item = A::Item>,
{
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            first_done: false,
        }
    }

    fn first_count(&self) -> Option<usize> {
        if self.first_done {
            Some(0)
        } else {
            self.first.try_get_non_enumerated_count()
        }
    }
}

impl<A, B> ValueEnumerator for Concat<A, B>
where
    A: ValueEnumerator,
    B: ValueEnumerator<Item = A::Item>,
{
    type Item = A::Item;

    fn try_get_next(&mut self) -> Option<A::Item> {
        if !self.first_done {
            if let Some(v) = self.first.try_get_next() {
                return Some(v);
            }
            self.first_done = true;
        }
        self.second.try_get_next()
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        let a = self.first_count()?;
        let b = self.second.try_get_non_enumerated_count()?;
        a.checked_add(b)
    }

    /// A span exists only while one side is empty.
    fn try_get_span(&self) -> Option<&[A::Item]> {
        if self.first_count() == Some(0) {
            return self.second.try_get_span();
        }
        if self.second.try_get_non_enumerated_count() == Some(0) {
            return self.first.try_get_span();
        }
        None
    }

    fn try_copy_to(&mut self, destination: &mut Vec<A::Item>, offset: Index, count: usize) -> bool
    where
        Self::Item: Clone,
    {
        let (Some(a), Some(b)) = (self.first_count(), self.second.try_get_non_enumerated_count())
        else {
            return false;
        };
        let Some(total) = a.checked_add(b) else {
            return false;
        };
        let Some((start, n)) = copy_window(total, offset, count) else {
            return false;
        };
        if start >= a {
            return self
                .second
                .try_copy_to(destination, Index::Start(start - a), n);
        }
        let mark = destination.len();
        let from_first = n.min(a - start);
        if !self
            .first
            .try_copy_to(destination, Index::Start(start), from_first)
        {
            return false;
        }
        if n > from_first && !self.second.try_copy_to(destination, Index::Start(0), n - from_first) {
            destination.truncate(mark);
            return false;
        }
        true
    }

    fn dispose(&mut self) {
        self.first_done = true;
        self.first.dispose();
        self.second.dispose();
    }
}
