use zeroq_core::config::QueryConfig;
use zeroq_core::{Error, Result, ValueEnumerator};

/// Splits the upstream into consecutive `Vec`s of `size` elements; the last
/// chunk may be shorter.
pub struct Chunk<E> {
    source: E,
    size: usize,
    finished: bool,
}

impl<E: ValueEnumerator> Chunk<E> {
    pub fn new(source: E, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_argument("size", "chunk size must be > 0"));
        }
        Ok(Self {
            source,
            size,
            finished: false,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<E: ValueEnumerator> ValueEnumerator for Chunk<E> {
    type Item = Vec<E::Item>;

    fn try_get_next(&mut self) -> Option<Vec<E::Item>> {
        if self.finished {
            return None;
        }
        let capacity = match self.source.try_get_non_enumerated_count() {
            Some(c) => c.min(self.size),
            None => self.size.min(QueryConfig::global().segment_initial_capacity),
        };
        let mut chunk = Vec::with_capacity(capacity);
        while chunk.len() < self.size {
            match self.source.try_get_next() {
                Some(v) => chunk.push(v),
                None => {
                    self.finished = true;
                    break;
                }
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn try_get_non_enumerated_count(&self) -> Option<usize> {
        if self.finished {
            return Some(0);
        }
        self.source
            .try_get_non_enumerated_count()
            .map(|c| c.div_ceil(self.size))
    }

    fn dispose(&mut self) {
        self.finished = true;
        self.source.dispose();
    }
}
