//! A catalog of built-in demonstration machines over `char` symbols and `String` states.

use crate::machine::TuringMachine;
use crate::types::{Direction, TuringMachineError, DEFAULT_BLANK_SYMBOL};
use std::collections::HashMap;

use Direction::{Left, Right, Stay};

/// A machine over `char` symbols with `String` states, as used by the catalog.
pub type CharMachine = TuringMachine<String, char>;

type Rules = &'static [(&'static str, char, &'static str, char, Direction)];

/// A built-in program: metadata plus the rule set used to build its machine.
#[derive(Debug, Clone, Copy)]
pub struct ProgramInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub blank: char,
    pub initial_state: &'static str,
    pub final_states: &'static [&'static str],
    pub default_input: &'static str,
    rules: Rules,
}

impl ProgramInfo {
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Builds a fresh machine for this program with `input` on the tape.
    pub fn build(&self, input: &str) -> CharMachine {
        let mut machine = TuringMachine::new(self.blank, self.initial_state.to_string());

        for &(from, read, to, write, direction) in self.rules {
            machine.add_rule(from.to_string(), read, to.to_string(), write, direction);
        }
        for state in self.final_states {
            machine.add_final_state(state.to_string());
        }

        machine.set_input(&input.chars().collect::<Vec<_>>());
        machine
    }

    /// Builds a fresh machine for this program with its default input.
    pub fn build_default(&self) -> CharMachine {
        self.build(self.default_input)
    }
}

static PROGRAMS: [ProgramInfo; 5] = [
    ProgramInfo {
        name: "Binary Inverter",
        description: "Flips every bit of a binary string, then accepts on the first blank.",
        blank: DEFAULT_BLANK_SYMBOL,
        initial_state: "START",
        final_states: &["FINAL"],
        default_input: "1011001",
        rules: &[
            ("START", '0', "START", '1', Right),
            ("START", '1', "START", '0', Right),
            ("START", ' ', "FINAL", ' ', Stay),
        ],
    },
    ProgramInfo {
        name: "Palindrome Checker",
        description: "Accepts strings over {a, b} that read the same in both directions \
                      by crossing off matching symbols from each end.",
        blank: DEFAULT_BLANK_SYMBOL,
        initial_state: "START",
        final_states: &["ACCEPT"],
        default_input: "abba",
        rules: &[
            ("START", 'a', "FIND_END_A", 'X', Right),
            ("START", 'b', "FIND_END_B", 'X', Right),
            ("START", 'X', "START", 'X', Right),
            ("START", ' ', "ACCEPT", ' ', Stay),
            ("FIND_END_A", 'a', "FIND_END_A", 'a', Right),
            ("FIND_END_A", 'b', "FIND_END_A", 'b', Right),
            ("FIND_END_A", 'X', "FIND_END_A", 'X', Right),
            ("FIND_END_A", ' ', "BACK_A", ' ', Left),
            ("BACK_A", 'a', "RETURN", 'X', Left),
            ("BACK_A", 'b', "REJECT", 'b', Stay),
            ("BACK_A", 'X', "BACK_A", 'X', Left),
            ("BACK_A", ' ', "ACCEPT", ' ', Stay),
            ("FIND_END_B", 'a', "FIND_END_B", 'a', Right),
            ("FIND_END_B", 'b', "FIND_END_B", 'b', Right),
            ("FIND_END_B", 'X', "FIND_END_B", 'X', Right),
            ("FIND_END_B", ' ', "BACK_B", ' ', Left),
            ("BACK_B", 'b', "RETURN", 'X', Left),
            ("BACK_B", 'a', "REJECT", 'a', Stay),
            ("BACK_B", 'X', "BACK_B", 'X', Left),
            ("BACK_B", ' ', "ACCEPT", ' ', Stay),
            ("RETURN", 'a', "RETURN", 'a', Left),
            ("RETURN", 'b', "RETURN", 'b', Left),
            ("RETURN", 'X', "RETURN", 'X', Left),
            ("RETURN", ' ', "START", ' ', Right),
        ],
    },
    ProgramInfo {
        name: "Unary Addition",
        description: "Adds two unary numbers separated by '+', e.g. 111+11 becomes 11111.",
        blank: DEFAULT_BLANK_SYMBOL,
        initial_state: "START",
        final_states: &["FINAL"],
        default_input: "111+11",
        rules: &[
            ("START", '1', "START", '1', Right),
            ("START", '+', "FIND_END", '1', Right),
            ("FIND_END", '1', "FIND_END", '1', Right),
            ("FIND_END", ' ', "DELETE_ONE", ' ', Left),
            ("DELETE_ONE", '1', "FINAL", ' ', Stay),
        ],
    },
    ProgramInfo {
        name: "Symbol Rewriter",
        description: "Rewrites a leading A as X and the following run of B as Y, \
                      then marks the end with Z.",
        blank: DEFAULT_BLANK_SYMBOL,
        initial_state: "INIT",
        final_states: &["FINISH"],
        default_input: "ABB",
        rules: &[
            ("INIT", 'A', "PROCESS", 'X', Right),
            ("PROCESS", 'B', "PROCESS", 'Y', Right),
            ("PROCESS", ' ', "FINISH", 'Z', Stay),
        ],
    },
    ProgramInfo {
        name: "Marker Round Trip",
        description: "Encodes A, B, C as 1, 2, 3 walking right, then walks back past the \
                      origin and marks the cell left of it.",
        blank: '-',
        initial_state: "MODIFY",
        final_states: &["FINAL"],
        default_input: "ABCAB",
        rules: &[
            ("MODIFY", 'A', "MODIFY", '1', Right),
            ("MODIFY", 'B', "MODIFY", '2', Right),
            ("MODIFY", 'C', "MODIFY", '3', Right),
            ("MODIFY", '-', "JUMP_BACK", '*', Left),
            ("JUMP_BACK", '1', "JUMP_BACK", '1', Left),
            ("JUMP_BACK", '2', "JUMP_BACK", '2', Left),
            ("JUMP_BACK", '3', "JUMP_BACK", '3', Left),
            ("JUMP_BACK", '-', "FINAL", '!', Stay),
        ],
    },
];

lazy_static::lazy_static! {
    static ref PROGRAM_INDEX: HashMap<String, usize> = PROGRAMS
        .iter()
        .enumerate()
        .map(|(index, program)| (program.name.to_lowercase(), index))
        .collect();
}

pub struct ProgramManager;

impl ProgramManager {
    /// Get the number of available programs
    pub fn get_program_count() -> usize {
        PROGRAMS.len()
    }

    /// Get a program by its index
    pub fn get_program_by_index(index: usize) -> Result<&'static ProgramInfo, TuringMachineError> {
        PROGRAMS
            .get(index)
            .ok_or_else(|| TuringMachineError::ProgramNotFound(format!("#{}", index)))
    }

    /// Get a program by its name, ignoring case
    pub fn get_program_by_name(name: &str) -> Result<&'static ProgramInfo, TuringMachineError> {
        PROGRAM_INDEX
            .get(&name.to_lowercase())
            .map(|&index| &PROGRAMS[index])
            .ok_or_else(|| TuringMachineError::ProgramNotFound(name.to_string()))
    }

    /// List all program names
    pub fn list_program_names() -> Vec<&'static str> {
        PROGRAMS.iter().map(|program| program.name).collect()
    }

    /// Search for programs by name
    pub fn search_programs(query: &str) -> Vec<usize> {
        let query = query.to_lowercase();

        PROGRAMS
            .iter()
            .enumerate()
            .filter(|(_, program)| program.name.to_lowercase().contains(&query))
            .map(|(index, _)| index)
            .collect()
    }
}
