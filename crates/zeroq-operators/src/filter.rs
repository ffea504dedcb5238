//! Predicate filtering, and the fused filter-then-map stage.
//!
//! A predicate can drop any element, so neither stage knows its count, has a
//! span, or can copy.

use zeroq_core::ValueEnumerator;

pub struct Filter<E, P> {
    source: E,
    predicate: P,
}

impl<E, P> Filter<E, P>
where
    E: ValueEnumerator,
    P: FnMut(&E::Item) -> bool,
{
    pub fn new(source: E, predicate: P) -> Self {
        Self { source, predicate }
    }

    /// `filter(p).map(f)` fuses into one stage.
    pub fn map<U, F>(self, selector: F) -> FilterMap<E, P, F>
    where
        F: FnMut(E::Item) -> U,
    {
        FilterMap {
            source: self.source,
            predicate: self.predicate,
            selector,
        }
    }
}

impl<E, P> ValueEnumerator for Filter<E, P>
where
    E: ValueEnumerator,
    P: FnMut(&E::Item) -> bool,
{
    type Item = E::Item;

    fn try_get_next(&mut self) -> Option<E::Item> {
        loop {
            let v = self.source.try_get_next()?;
            if (self.predicate)(&v) {
                return Some(v);
            }
        }
    }

    fn dispose(&mut self) {
        self.source.dispose();
    }
}

pub struct FilterMap<E, P, F> {
    source: E,
    predicate: P,
    selector: F,
}

impl<E, P, F, U> ValueEnumerator for FilterMap<E, P, F>
where
    E: ValueEnumerator,
    P: FnMut(&E::Item) -> bool,
    F: FnMut(E::Item) -> U,
{
    type Item = U;

    fn try_get_next(&mut self) -> Option<U> {
        loop {
            let v = self.source.try_get_next()?;
            if (self.predicate)(&v) {
                return Some((self.selector)(v));
            }
        }
    }

    fn dispose(&mut self) {
        self.source.dispose();
    }
}
