//! Element projection.

use zeroq_core::ValueEnumerator;

/// Applies a selector to every element. The count passes through unchanged;
/// there is no span because projected values do not exist in memory.
pub struct Map<E, F> {
    source: E,
    selector: F,
}

impl<E, F> Map<E, F> {
    pub fn new(source: E, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<E, F, U> ValueEnumerator for Map<E, F>
where
    E: ValueEnumerator,
    F: FnMut(E::Item) -> U,
{
    type Item = U;

    fn try_get_next(&mut self) -> Option<U> {
        let v = self.source.try_get_next()?;
        Some((self.selector)(v))
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        self.source.try_get_non_enumerated_count()
    }

    fn dispose(&mut self) {
        self.source.dispose();
    }
}
