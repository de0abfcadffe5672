//! This module defines the `Tape`, an infinite, integer-indexed tape built on a lazy
//! sequence of the initial input followed by blank filler.
//!
//! The lazy sequence is append-only, so writes never touch it. Every write goes into a
//! sparse overlay keyed by position, and the overlay is consulted first on every read.
//! Negative positions are never generated; they read as blank unless written.

use crate::generator::TapeGenerator;
use crate::lazy::LazySeq;
use crate::types::{Symbol, TuringMachineError};
use std::cell::RefCell;
use std::collections::HashMap;

type Cells<S> = LazySeq<S, TapeGenerator<S>>;

#[derive(Debug, Clone)]
pub struct Tape<S> {
    cells: RefCell<Cells<S>>,
    overlay: HashMap<i64, S>,
    blank: S,
    max_len: usize,
}

impl<S: Symbol> Tape<S> {
    /// Creates a tape holding `initial_data` from position 0, blank everywhere else.
    pub fn new(blank: S, initial_data: Vec<S>) -> Self {
        Self::with_limit(blank, initial_data, Cells::<S>::UNBOUNDED)
    }

    /// Creates a tape that materializes at most `max_len` cells. Positions at or beyond the
    /// cap read as blank unless written.
    pub fn with_limit(blank: S, initial_data: Vec<S>, max_len: usize) -> Self {
        Self {
            cells: RefCell::new(Self::cells(&blank, initial_data, 0, max_len)),
            overlay: HashMap::new(),
            blank,
            max_len,
        }
    }

    fn cells(blank: &S, initial_data: Vec<S>, offset: usize, max_len: usize) -> Cells<S> {
        LazySeq::with_max_len(
            TapeGenerator::with_offset(initial_data, blank.clone(), offset),
            max_len,
        )
    }

    /// Returns the symbol at `position`.
    ///
    /// Reading a non-negative position that has not been generated yet materializes every
    /// cell up to it.
    pub fn symbol_at(&self, position: i64) -> S {
        if let Some(symbol) = self.overlay.get(&position) {
            return symbol.clone();
        }

        let Ok(index) = usize::try_from(position) else {
            return self.blank.clone();
        };

        self.cells
            .borrow_mut()
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.blank.clone())
    }

    /// Records `symbol` at `position`. Later reads of `position` return it.
    pub fn set_symbol_at(&mut self, position: i64, symbol: S) {
        self.overlay.insert(position, symbol);
    }

    /// Returns `length` consecutive symbols starting at `start`.
    pub fn segment(&self, start: i64, length: usize) -> Result<Vec<S>, TuringMachineError> {
        let out_of_range = || TuringMachineError::SegmentOutOfRange { start, length };

        if length > 0 {
            let last = i64::try_from(length - 1).map_err(|_| out_of_range())?;
            start.checked_add(last).ok_or_else(out_of_range)?;
        }

        Ok((0..length)
            .map(|offset| self.symbol_at(start + offset as i64))
            .collect())
    }

    /// Discards all writes and rebuilds the tape from `initial_data`.
    pub fn reset(&mut self, initial_data: Vec<S>) {
        self.reset_at(initial_data, 0);
    }

    /// Discards all writes and rebuilds the tape with `initial_data` starting at `offset`.
    pub fn reset_at(&mut self, initial_data: Vec<S>, offset: usize) {
        self.overlay.clear();
        self.cells = RefCell::new(Self::cells(&self.blank, initial_data, offset, self.max_len));
    }

    pub fn blank(&self) -> &S {
        &self.blank
    }

    /// Number of cells the underlying sequence has generated so far.
    pub fn materialized_count(&self) -> usize {
        self.cells.borrow().materialized_count()
    }

    /// Number of positions that have been written.
    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }

    pub fn has_modifications(&self) -> bool {
        !self.overlay.is_empty()
    }

    /// All written positions and their symbols.
    pub fn modifications(&self) -> &HashMap<i64, S> {
        &self.overlay
    }

    /// Discards all writes, keeping the generated cells.
    pub fn clear_modifications(&mut self) {
        self.overlay.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tape(input: &str) -> Tape<char> {
        Tape::new('_', input.chars().collect())
    }

    #[test]
    fn test_reads_input_then_blank() {
        let tape = tape("abc");

        assert_eq!(tape.symbol_at(0), 'a');
        assert_eq!(tape.symbol_at(2), 'c');
        assert_eq!(tape.symbol_at(3), '_');
        assert_eq!(tape.symbol_at(100), '_');
        assert_eq!(tape.symbol_at(-1), '_');
        assert_eq!(tape.symbol_at(-50), '_');
    }

    #[test]
    fn test_reset_at_offset_pads_with_blanks() {
        let mut tape = tape("abc");
        tape.set_symbol_at(0, 'z');
        tape.reset_at(vec!['q', 'r'], 3);

        assert!(!tape.has_modifications());
        assert_eq!(tape.materialized_count(), 0);
        assert_eq!(tape.segment(0, 6).unwrap(), vec!['_', '_', '_', 'q', 'r', '_']);
    }

    #[test]
    fn test_negative_reads_do_not_materialize() {
        let tape = tape("abc");
        tape.symbol_at(-1000);
        assert_eq!(tape.materialized_count(), 0);
    }

    #[test]
    fn test_distant_read_materializes_intervening_cells() {
        let tape = tape("abc");

        tape.symbol_at(10_000);
        assert_eq!(tape.materialized_count(), 10_001);

        tape.symbol_at(5);
        assert_eq!(tape.materialized_count(), 10_001);
    }

    #[test]
    fn test_write_after_write() {
        let mut tape = tape("abc");

        for position in [-7, -1, 0, 1, 2, 3, 500] {
            tape.set_symbol_at(position, 'x');
            tape.set_symbol_at(position, 'y');
            assert_eq!(tape.symbol_at(position), 'y');
        }

        assert_eq!(tape.overlay_len(), 7);
    }

    #[test]
    fn test_write_does_not_materialize() {
        let mut tape = tape("abc");
        tape.set_symbol_at(1_000_000, 'z');

        assert_eq!(tape.symbol_at(1_000_000), 'z');
        assert_eq!(tape.materialized_count(), 0);
        assert!(tape.has_modifications());
        assert_eq!(tape.modifications().get(&1_000_000), Some(&'z'));
    }

    #[test]
    fn test_segment_matches_symbol_at() {
        let mut tape = tape("abc");
        tape.set_symbol_at(-1, 'L');
        tape.set_symbol_at(1, 'M');

        let segment = tape.segment(-3, 8).unwrap();
        assert_eq!(segment, vec!['_', '_', 'L', 'a', 'M', 'c', '_', '_']);
        for (k, symbol) in segment.iter().enumerate() {
            assert_eq!(*symbol, tape.symbol_at(-3 + k as i64));
        }

        assert!(tape.segment(4, 0).unwrap().is_empty());
    }

    #[test]
    fn test_segment_out_of_range() {
        let tape = tape("");
        assert_eq!(
            tape.segment(i64::MAX, 2),
            Err(TuringMachineError::SegmentOutOfRange {
                start: i64::MAX,
                length: 2
            })
        );
        assert!(tape.segment(i64::MIN, 3).is_ok());
    }

    #[test]
    fn test_limit_reads_blank_beyond_cap() {
        let mut tape = Tape::with_limit(0, vec![1, 2, 3], 2);

        assert_eq!(tape.symbol_at(1), 2);
        assert_eq!(tape.symbol_at(2), 0);
        assert_eq!(tape.materialized_count(), 2);

        tape.set_symbol_at(5, 9);
        assert_eq!(tape.symbol_at(5), 9);
    }

    #[test]
    fn test_reset() {
        let mut tape = tape("abc");
        tape.set_symbol_at(0, 'x');
        tape.symbol_at(10);

        tape.reset("zz".chars().collect());
        assert_eq!(tape.overlay_len(), 0);
        assert_eq!(tape.materialized_count(), 0);
        assert_eq!(tape.symbol_at(0), 'z');
        assert_eq!(tape.symbol_at(2), '_');

        tape.reset(Vec::new());
        assert_eq!(tape.symbol_at(0), '_');
    }

    #[test]
    fn test_clear_modifications_keeps_cells() {
        let mut tape = tape("abc");
        tape.symbol_at(2);
        tape.set_symbol_at(1, 'q');

        tape.clear_modifications();
        assert!(!tape.has_modifications());
        assert_eq!(tape.symbol_at(1), 'b');
        assert_eq!(tape.materialized_count(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = tape("abc");
        let mut copy = original.clone();

        copy.set_symbol_at(0, 'x');
        copy.symbol_at(20);
        original.set_symbol_at(1, 'y');

        assert_eq!(original.symbol_at(0), 'a');
        assert_eq!(original.materialized_count(), 1);
        assert_eq!(copy.symbol_at(1), 'b');
    }
}
