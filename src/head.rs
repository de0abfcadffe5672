//! Head position and movement bookkeeping.

use crate::types::{Direction, TuringMachineError};
use serde::{Deserialize, Serialize};

/// Movement counters and the range of positions the head has visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadStats {
    pub total_moves: usize,
    pub left_moves: usize,
    pub right_moves: usize,
    pub stay_moves: usize,
    pub min_position: i64,
    pub max_position: i64,
}

impl HeadStats {
    fn at(position: i64) -> Self {
        Self {
            total_moves: 0,
            left_moves: 0,
            right_moves: 0,
            stay_moves: 0,
            min_position: position,
            max_position: position,
        }
    }

    /// Width of the visited range, `max - min + 1`.
    pub fn tape_usage(&self) -> u64 {
        self.max_position.abs_diff(self.min_position) + 1
    }
}

/// The read/write head of a machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    position: i64,
    initial_position: i64,
    stats: HeadStats,
}

impl Head {
    pub fn new(initial_position: i64) -> Self {
        Self {
            position: initial_position,
            initial_position,
            stats: HeadStats::at(initial_position),
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn initial_position(&self) -> i64 {
        self.initial_position
    }

    pub fn stats(&self) -> &HeadStats {
        &self.stats
    }

    /// Signed distance from the initial position.
    pub fn offset_from_initial(&self) -> i128 {
        i128::from(self.position) - i128::from(self.initial_position)
    }

    /// The position the head would reach by moving in `direction`.
    pub fn target(&self, direction: Direction) -> Result<i64, TuringMachineError> {
        self.position
            .checked_add(direction.offset())
            .ok_or(TuringMachineError::HeadOverflow {
                position: self.position,
                direction,
            })
    }

    /// Moves one cell in `direction`. On overflow the head is left where it was.
    pub fn advance(&mut self, direction: Direction) -> Result<(), TuringMachineError> {
        self.position = self.target(direction)?;

        self.stats.total_moves += 1;
        match direction {
            Direction::Left => self.stats.left_moves += 1,
            Direction::Right => self.stats.right_moves += 1,
            Direction::Stay => self.stats.stay_moves += 1,
        }
        self.stats.min_position = self.stats.min_position.min(self.position);
        self.stats.max_position = self.stats.max_position.max(self.position);

        Ok(())
    }

    /// Returns to the initial position and clears the counters.
    pub fn reset(&mut self) {
        *self = Self::new(self.initial_position);
    }
}
