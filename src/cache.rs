//! Append-only positional store backing a lazy sequence.

/// Elements materialized so far, contiguous from index 0.
///
/// Entries are never modified once appended, which is what keeps the owning sequence
/// prefix-complete.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedCache<T> {
    items: Vec<T>,
}

impl<T> Default for MaterializedCache<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> MaterializedCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, index: usize) -> bool {
        index < self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn materialized_count(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
