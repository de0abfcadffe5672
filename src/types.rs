//! This module defines the core data structures and types shared by the tape, the transition
//! table and the execution engine: head directions, transition rules, step and halt outcomes,
//! the machine status, error types and the generic bounds placed on symbols and states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// The blank symbol used by the built-in programs and the CLI.
pub const DEFAULT_BLANK_SYMBOL: char = ' ';
/// The default step budget for a machine.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Bounds required of a tape symbol.
///
/// Symbols are opaque values: the engine only clones, compares and hashes them.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}

/// Bounds required of a machine state.
pub trait State: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> State for T {}

/// Represents the possible directions a Turing Machine head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Keep the head in the same position.
    Stay,
    /// Move the head one position to the right.
    Right,
}

impl Direction {
    /// Head displacement for this direction: -1, 0 or +1.
    pub const fn offset(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Stay => 0,
            Direction::Right => 1,
        }
    }
}

/// A single transition rule: `(from_state, read_symbol) -> (to_state, write_symbol, direction)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRule<St, Sy> {
    /// The state the rule applies in.
    pub from_state: St,
    /// The symbol that must be under the head.
    pub read_symbol: Sy,
    /// The state the machine transitions to.
    pub to_state: St,
    /// The symbol written at the head position.
    pub write_symbol: Sy,
    /// The direction the head moves after writing.
    pub direction: Direction,
}

impl<St, Sy> TransitionRule<St, Sy> {
    pub fn new(
        from_state: St,
        read_symbol: Sy,
        to_state: St,
        write_symbol: Sy,
        direction: Direction,
    ) -> Self {
        Self {
            from_state,
            read_symbol,
            to_state,
            write_symbol,
            direction,
        }
    }
}

/// Represents the outcome of a single execution step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A rule was applied and the machine may continue.
    Continue,
    /// No step was taken; the machine has halted.
    Halt(Halt),
}

impl Step {
    /// Returns `true` if a rule was applied.
    pub fn is_continue(&self) -> bool {
        matches!(self, Step::Continue)
    }
}

/// Why a machine stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum Halt {
    /// The current state is a final state.
    Accepted,
    /// No rule exists for the current state and the symbol under the head.
    Rejected,
    /// The step budget was exhausted.
    Timeout,
    /// The machine failed internally and could not take the next step.
    Error(TuringMachineError),
}

impl Halt {
    /// Returns `true` if the machine halted in a final state.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Halt::Accepted)
    }

    /// Returns the fieldless kind of this outcome.
    pub fn kind(&self) -> HaltKind {
        match self {
            Halt::Accepted => HaltKind::Accepted,
            Halt::Rejected => HaltKind::Rejected,
            Halt::Timeout => HaltKind::Timeout,
            Halt::Error(_) => HaltKind::Error,
        }
    }
}

/// The kind of a [`Halt`], without error details. Used in serialized reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltKind {
    /// See [`Halt::Accepted`].
    Accepted,
    /// See [`Halt::Rejected`].
    Rejected,
    /// See [`Halt::Timeout`].
    Timeout,
    /// See [`Halt::Error`].
    Error,
}

/// Lifecycle of the machine itself, as opposed to the simulated automaton's states.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Status {
    /// Constructed or reset; no steps taken yet.
    #[default]
    Ready,
    /// At least one step has been applied and the machine has not halted.
    Running,
    /// The last step attempt halted the machine.
    Halted(Halt),
}

/// Represents various errors that can occur during Turing Machine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// Moving the head would leave the representable position range.
    #[error("Head cannot move {direction:?} from position {position}")]
    HeadOverflow { position: i64, direction: Direction },
    /// A tape segment extends past the representable position range.
    #[error("Tape segment of length {length} starting at {start} is out of range")]
    SegmentOutOfRange { start: i64, length: usize },
    /// Input placed at an offset does not fit in the representable position range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No built-in program with the given name or index.
    #[error("Program '{0}' not found")]
    ProgramNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        let left_json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(left_json, "\"Left\"");

        let stay: Direction = serde_json::from_str("\"Stay\"").unwrap();
        assert_eq!(stay, Direction::Stay);
    }

    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::Left.offset(), -1);
        assert_eq!(Direction::Stay.offset(), 0);
        assert_eq!(Direction::Right.offset(), 1);
    }

    #[test]
    fn test_transition_rule_creation() {
        let rule = TransitionRule::new("q0", 'a', "q1", 'X', Direction::Right);

        assert_eq!(rule.from_state, "q0");
        assert_eq!(rule.read_symbol, 'a');
        assert_eq!(rule.to_state, "q1");
        assert_eq!(rule.write_symbol, 'X');
        assert_eq!(rule.direction, Direction::Right);
    }

    #[test]
    fn test_halt_kind() {
        assert!(Halt::Accepted.is_accepted());
        assert!(!Halt::Timeout.is_accepted());
        assert_eq!(Halt::Rejected.kind(), HaltKind::Rejected);

        let error = Halt::Error(TuringMachineError::HeadOverflow {
            position: i64::MIN,
            direction: Direction::Left,
        });
        assert_eq!(error.kind(), HaltKind::Error);
        assert!(!Step::Halt(error).is_continue());
        assert!(Step::Continue.is_continue());
    }

    #[test]
    fn test_error_display() {
        let error = TuringMachineError::ProgramNotFound("Busy Beaver".to_string());

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("not found"));
        assert!(error_msg.contains("Busy Beaver"));

        let error = TuringMachineError::SegmentOutOfRange {
            start: i64::MAX,
            length: 2,
        };
        assert!(error.to_string().contains("out of range"));
    }
}
