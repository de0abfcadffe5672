//! Element generators feeding a [`LazySeq`](crate::lazy::LazySeq).
//!
//! A generator is asked for the next element of a sequence, one at a time and strictly in
//! order. Returning `None` signals that the sequence is exhausted; the tape generators never
//! do, since a tape is infinite.

/// A stateful source of the next element of a sequence.
pub trait Generator<T> {
    /// Produces the next element, or `None` once the sequence is exhausted.
    fn generate(&mut self) -> Option<T>;
}

/// Yields the same value forever.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantGenerator<T> {
    value: T,
}

impl<T: Clone> ConstantGenerator<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Generator<T> for ConstantGenerator<T> {
    fn generate(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

/// Replays a finite input, then yields a default value forever.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceGenerator<T> {
    data: Vec<T>,
    cursor: usize,
    default: T,
}

impl<T: Clone> SequenceGenerator<T> {
    pub fn new(data: Vec<T>, default: T) -> Self {
        Self {
            data,
            cursor: 0,
            default,
        }
    }

    /// Index of the next input element to replay.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` while the next element still comes from the input.
    pub fn in_data_range(&self) -> bool {
        self.cursor < self.data.len()
    }
}

impl<T: Clone> Generator<T> for SequenceGenerator<T> {
    fn generate(&mut self) -> Option<T> {
        match self.data.get(self.cursor) {
            Some(value) => {
                self.cursor += 1;
                Some(value.clone())
            }
            None => Some(self.default.clone()),
        }
    }
}

/// Initial tape contents followed by blank filler, optionally preceded by leading blanks.
///
/// Delegates to a [`SequenceGenerator`] while it is inside the input, then switches once and
/// for all to a [`ConstantGenerator`] of the blank symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct TapeGenerator<T> {
    sequence: SequenceGenerator<T>,
    constant: ConstantGenerator<T>,
    leading: usize,
    using_sequence: bool,
}

impl<T: Clone> TapeGenerator<T> {
    pub fn new(initial_data: Vec<T>, blank: T) -> Self {
        Self::with_offset(initial_data, blank, 0)
    }

    /// Yields `offset` blanks before the initial data. The blanks are produced on demand,
    /// never stored.
    pub fn with_offset(initial_data: Vec<T>, blank: T, offset: usize) -> Self {
        Self {
            sequence: SequenceGenerator::new(initial_data, blank.clone()),
            constant: ConstantGenerator::new(blank),
            leading: offset,
            using_sequence: true,
        }
    }

    /// Returns `true` while the next element still comes from the initial data.
    pub fn in_initial_data_range(&self) -> bool {
        self.leading == 0 && self.using_sequence && self.sequence.in_data_range()
    }

    /// Number of leading blanks still to be yielded before the initial data.
    pub fn leading_blanks(&self) -> usize {
        self.leading
    }

    pub fn initial_data_len(&self) -> usize {
        self.sequence.data_len()
    }
}

impl<T: Clone> Generator<T> for TapeGenerator<T> {
    fn generate(&mut self) -> Option<T> {
        if self.leading > 0 {
            self.leading -= 1;
            return self.constant.generate();
        }
        if self.in_initial_data_range() {
            return self.sequence.generate();
        }

        self.using_sequence = false;
        self.constant.generate()
    }
}

/// Wraps a closure. The first `None` it returns latches the generator as exhausted, and the
/// closure is never called again.
#[derive(Debug, Clone)]
pub struct FunctionGenerator<F> {
    func: F,
    exhausted: bool,
}

impl<F> FunctionGenerator<F> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<T, F> Generator<T> for FunctionGenerator<F>
where
    F: FnMut() -> Option<T>,
{
    fn generate(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }

        let next = (self.func)();
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }
}
