//! A conceptually infinite sequence whose elements are generated on first access and
//! memoized.
//!
//! Generation is strictly forward: asking for element `i` materializes every element
//! before it that has not been produced yet. The cache is therefore always a complete
//! prefix of the sequence.

use crate::cache::MaterializedCache;
use crate::generator::Generator;

#[derive(Debug, Clone)]
pub struct LazySeq<T, G> {
    cache: MaterializedCache<T>,
    generator: G,
    max_len: usize,
    exhausted: bool,
}

impl<T, G: Generator<T>> LazySeq<T, G> {
    /// Length cap meaning "no cap".
    pub const UNBOUNDED: usize = usize::MAX;

    pub fn new(generator: G) -> Self {
        Self::with_max_len(generator, Self::UNBOUNDED)
    }

    /// Creates a sequence that never materializes more than `max_len` elements.
    pub fn with_max_len(generator: G, max_len: usize) -> Self {
        Self {
            cache: MaterializedCache::new(),
            generator,
            max_len,
            exhausted: false,
        }
    }

    /// Returns element `index`, generating any missing elements up to it.
    ///
    /// Returns `None` if the length cap is reached or the generator runs dry before
    /// `index` is materialized.
    pub fn get(&mut self, index: usize) -> Option<&T> {
        if !self.cache.has(index) {
            self.materialize_through(index);
        }

        self.cache.get(index)
    }

    fn materialize_through(&mut self, index: usize) {
        while !self.exhausted
            && self.cache.materialized_count() <= index
            && self.cache.materialized_count() < self.max_len
        {
            match self.generator.generate() {
                Some(next) => self.cache.append(next),
                None => self.exhausted = true,
            }
        }
    }

    /// Number of elements generated so far.
    pub fn materialized_count(&self) -> usize {
        self.cache.materialized_count()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns `true` once the generator has signaled that it has no more elements.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{FunctionGenerator, SequenceGenerator, TapeGenerator};

    #[test]
    fn test_get_materializes_prefix() {
        let mut seq = LazySeq::new(TapeGenerator::new(vec![1, 2, 3], 0));
        assert_eq!(seq.materialized_count(), 0);

        assert_eq!(seq.get(1), Some(&2));
        assert_eq!(seq.materialized_count(), 2);

        // Cache hit does not generate.
        assert_eq!(seq.get(0), Some(&1));
        assert_eq!(seq.materialized_count(), 2);

        assert_eq!(seq.get(9), Some(&0));
        assert_eq!(seq.materialized_count(), 10);
    }

    #[test]
    fn test_max_len_caps_generation() {
        let mut seq = LazySeq::with_max_len(SequenceGenerator::new(vec!['a'], '_'), 4);
        assert_eq!(seq.max_len(), 4);

        assert_eq!(seq.get(3), Some(&'_'));
        assert_eq!(seq.get(4), None);
        assert_eq!(seq.get(100), None);
        assert_eq!(seq.materialized_count(), 4);
    }

    #[test]
    fn test_exhausted_generator() {
        let mut remaining = vec![30, 20, 10];
        let mut seq = LazySeq::new(FunctionGenerator::new(move || remaining.pop()));

        assert_eq!(seq.get(5), None);
        assert!(seq.is_exhausted());
        assert_eq!(seq.materialized_count(), 3);
        assert_eq!(seq.get(0), Some(&10));
        assert_eq!(seq.get(2), Some(&30));
    }

    #[test]
    fn test_clone_evolves_independently() {
        let mut original = LazySeq::new(TapeGenerator::new(vec!['x', 'y'], ' '));
        original.get(0);

        let mut copy = original.clone();
        assert_eq!(copy.materialized_count(), 1);

        assert_eq!(copy.get(5), Some(&' '));
        assert_eq!(copy.materialized_count(), 6);
        assert_eq!(original.materialized_count(), 1);
        assert_eq!(original.get(1), Some(&'y'));
    }
}
