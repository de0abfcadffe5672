//! This module defines the `TuringMachine` struct, which simulates a single-tape Turing
//! Machine over a lazy infinite tape. It owns the tape, the transition table and the
//! configuration (current state, head, step counter), and drives single-step and
//! run-to-halt execution.

use crate::head::Head;
use crate::stats::{ExecutionStats, Report};
use crate::tape::Tape;
use crate::transition::TransitionTable;
use crate::types::{
    Direction, Halt, State, Status, Step, Symbol, TransitionRule, TuringMachineError,
    DEFAULT_MAX_STEPS,
};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Construction-time settings for a [`TuringMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Step budget; a run halts with [`Halt::Timeout`] once it is used up.
    pub max_steps: usize,
    /// Head position at construction and after every reset.
    pub initial_head_position: i64,
    /// Maximum number of tape cells to materialize. `None` means unbounded.
    pub tape_limit: Option<usize>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            initial_head_position: 0,
            tape_limit: None,
        }
    }
}

/// Represents a single-tape Turing Machine.
///
/// Cloning a machine produces a fully independent copy: rules, final states, tape contents
/// and counters are all duplicated.
#[derive(Debug, Clone)]
pub struct TuringMachine<St, Sy> {
    initial_state: St,
    state: St,
    final_states: HashSet<St>,
    transitions: TransitionTable<St, Sy>,
    tape: Tape<Sy>,
    head: Head,
    stats: ExecutionStats,
    status: Status,
}

impl<St: State, Sy: Symbol> TuringMachine<St, Sy> {
    /// Creates a machine with an all-blank tape and the default configuration.
    pub fn new(blank: Sy, initial_state: St) -> Self {
        Self::with_config(blank, initial_state, MachineConfig::default())
    }

    /// Creates a machine with an all-blank tape.
    pub fn with_config(blank: Sy, initial_state: St, config: MachineConfig) -> Self {
        let tape = match config.tape_limit {
            Some(limit) => Tape::with_limit(blank, Vec::new(), limit),
            None => Tape::new(blank, Vec::new()),
        };

        Self {
            state: initial_state.clone(),
            initial_state,
            final_states: HashSet::new(),
            transitions: TransitionTable::new(),
            tape,
            head: Head::new(config.initial_head_position),
            stats: ExecutionStats::new(config.max_steps),
            status: Status::Ready,
        }
    }

    /// Adds the rule `(from, read) -> (to, write, direction)`, replacing any existing rule
    /// for `(from, read)`.
    pub fn add_rule(&mut self, from: St, read: Sy, to: St, write: Sy, direction: Direction) {
        self.add_transition(TransitionRule::new(from, read, to, write, direction));
    }

    /// Adds `rule`, returning the rule it replaced, if any.
    pub fn add_transition(
        &mut self,
        rule: TransitionRule<St, Sy>,
    ) -> Option<TransitionRule<St, Sy>> {
        self.transitions.add_rule(rule)
    }

    pub fn add_final_state(&mut self, state: St) {
        self.final_states.insert(state);
    }

    pub fn remove_final_state(&mut self, state: &St) -> bool {
        self.final_states.remove(state)
    }

    pub fn clear_final_states(&mut self) {
        self.final_states.clear();
    }

    /// Loads `input` onto the tape from position 0 and resets the configuration.
    pub fn set_input(&mut self, input: &[Sy]) {
        self.reset_with_input(input);
    }

    /// Loads `input` onto the tape starting at `start` and resets the configuration.
    ///
    /// Cells before a non-negative `start` are blank. Cells of the input that land on
    /// negative positions are recorded as tape writes, since the generated part of the tape
    /// begins at 0.
    pub fn set_input_at(&mut self, input: &[Sy], start: i64) -> Result<(), TuringMachineError> {
        let len = i64::try_from(input.len())
            .map_err(|_| TuringMachineError::InvalidInput("input is too long".to_string()))?;
        start.checked_add(len).ok_or_else(|| {
            TuringMachineError::InvalidInput(format!(
                "{} symbols do not fit on the tape from position {}",
                input.len(),
                start
            ))
        })?;

        match usize::try_from(start) {
            Ok(offset) => self.restart(input, offset),
            Err(_) => {
                // Only the first `-start` symbols sit left of the origin.
                let split = usize::try_from(start.unsigned_abs())
                    .map_or(input.len(), |n| n.min(input.len()));
                self.restart(&input[split..], 0);
                for (k, symbol) in input[..split].iter().enumerate() {
                    self.tape.set_symbol_at(start + k as i64, symbol.clone());
                }
            }
        }

        Ok(())
    }

    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.stats.set_max_steps(max_steps);
    }

    /// Executes a single step.
    ///
    /// # Returns
    ///
    /// * `Step::Continue` if a rule was applied.
    /// * `Step::Halt(Halt::Accepted)` if the machine is in a final state.
    /// * `Step::Halt(Halt::Timeout)` if the step budget is used up.
    /// * `Step::Halt(Halt::Rejected)` if no rule matches the current state and symbol.
    /// * `Step::Halt(Halt::Error(_))` if the head cannot move.
    ///
    /// When no rule is applied, the state, head and tape are left unchanged.
    pub fn step(&mut self) -> Step {
        let step = self.apply_next_rule();

        self.status = match &step {
            Step::Continue => Status::Running,
            Step::Halt(halt) => Status::Halted(halt.clone()),
        };

        step
    }

    fn apply_next_rule(&mut self) -> Step {
        if self.is_in_final_state() {
            return Step::Halt(Halt::Accepted);
        }
        if self.stats.step_limit_exceeded() {
            return Step::Halt(Halt::Timeout);
        }

        let position = self.head.position();
        let symbol = self.tape.symbol_at(position);

        let rule = match self.transitions.find_rule(&self.state, &symbol) {
            Some(rule) => rule.clone(),
            None => return Step::Halt(Halt::Rejected),
        };

        if let Err(error) = self.head.advance(rule.direction) {
            return Step::Halt(Halt::Error(error));
        }

        self.tape.set_symbol_at(position, rule.write_symbol);
        self.state = rule.to_state;
        self.stats.record_step();

        trace!(
            step = self.stats.step_count(),
            position,
            head = self.head.position(),
            state = ?self.state,
            "applied transition"
        );

        Step::Continue
    }

    /// Runs the machine until it halts and returns why it halted.
    ///
    /// The wall-clock time of the run is recorded in [`statistics`](Self::statistics).
    pub fn run(&mut self) -> Halt {
        self.stats.start();

        let halt = loop {
            if let Step::Halt(halt) = self.step() {
                break halt;
            }
        };

        self.stats.finish();

        match &halt {
            Halt::Error(error) => warn!(
                %error,
                steps = self.stats.step_count(),
                "machine stopped on an internal error"
            ),
            _ => debug!(
                outcome = ?halt.kind(),
                steps = self.stats.step_count(),
                elapsed = ?self.stats.elapsed(),
                "machine halted"
            ),
        }

        halt
    }

    /// Resets the machine to its initial configuration with an all-blank tape.
    pub fn reset(&mut self) {
        self.reset_with_input(&[]);
    }

    /// Resets the machine to its initial configuration with `input` on the tape from
    /// position 0.
    pub fn reset_with_input(&mut self, input: &[Sy]) {
        self.restart(input, 0);
    }

    fn restart(&mut self, input: &[Sy], offset: usize) {
        self.state = self.initial_state.clone();
        self.head.reset();
        self.stats.reset();
        self.status = Status::Ready;
        self.tape.reset_at(input.to_vec(), offset);

        debug!(input_len = input.len(), offset, "machine reset");
    }

    /// Returns the current state of the Turing Machine.
    pub fn state(&self) -> &St {
        &self.state
    }

    pub fn initial_state(&self) -> &St {
        &self.initial_state
    }

    pub fn head_position(&self) -> i64 {
        self.head.position()
    }

    /// Returns the total number of steps executed since the last reset.
    pub fn step_count(&self) -> usize {
        self.stats.step_count()
    }

    pub fn max_steps(&self) -> usize {
        self.stats.max_steps()
    }

    pub fn is_in_final_state(&self) -> bool {
        self.final_states.contains(&self.state)
    }

    pub fn is_final_state(&self, state: &St) -> bool {
        self.final_states.contains(state)
    }

    pub fn final_states(&self) -> impl Iterator<Item = &St> {
        self.final_states.iter()
    }

    pub fn final_state_count(&self) -> usize {
        self.final_states.len()
    }

    pub fn rule_count(&self) -> usize {
        self.transitions.len()
    }

    /// Returns the symbol under the head.
    pub fn read_symbol(&self) -> Sy {
        self.tape.symbol_at(self.head.position())
    }

    pub fn symbol_at(&self, position: i64) -> Sy {
        self.tape.symbol_at(position)
    }

    pub fn tape_segment(&self, start: i64, length: usize) -> Result<Vec<Sy>, TuringMachineError> {
        self.tape.segment(start, length)
    }

    /// Returns the blank symbol used by this Turing Machine.
    pub fn blank(&self) -> &Sy {
        self.tape.blank()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The outcome of the last step attempt, if it halted the machine.
    pub fn last_halt(&self) -> Option<&Halt> {
        match &self.status {
            Status::Halted(halt) => Some(halt),
            _ => None,
        }
    }

    pub fn tape(&self) -> &Tape<Sy> {
        &self.tape
    }

    pub fn transitions(&self) -> &TransitionTable<St, Sy> {
        &self.transitions
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn statistics(&self) -> &ExecutionStats {
        &self.stats
    }

    pub fn report(&self) -> Report {
        Report {
            steps: self.stats.step_count(),
            max_steps: self.stats.max_steps(),
            elapsed_micros: u64::try_from(self.stats.elapsed().as_micros()).unwrap_or(u64::MAX),
            halt: self.last_halt().map(Halt::kind),
            in_final_state: self.is_in_final_state(),
            head_position: self.head.position(),
            head: *self.head.stats(),
            rule_count: self.transitions.len(),
            materialized_cells: self.tape.materialized_count(),
            written_cells: self.tape.overlay_len(),
        }
    }
}
