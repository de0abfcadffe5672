//! This crate provides a single-tape Turing Machine simulator built on a lazy, memoizing
//! infinite tape. It includes the generators and cache behind the lazy sequence, the tape
//! and transition table, the execution engine, and a catalog of demonstration programs.

pub mod cache;
pub mod generator;
pub mod head;
pub mod lazy;
pub mod machine;
pub mod programs;
pub mod stats;
pub mod tape;
pub mod transition;
pub mod types;

/// Re-exports the generator trait and its implementations.
pub use generator::{
    ConstantGenerator, FunctionGenerator, Generator, SequenceGenerator, TapeGenerator,
};
/// Re-exports the `LazySeq` struct from the lazy module.
pub use lazy::LazySeq;
/// Re-exports the `TuringMachine` struct and its configuration from the machine module.
pub use machine::{MachineConfig, TuringMachine};
/// Re-exports `ProgramInfo`, `ProgramManager` and `CharMachine` from the programs module.
pub use programs::{CharMachine, ProgramInfo, ProgramManager};
/// Re-exports the statistics types.
pub use stats::{ExecutionStats, Report};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the `TransitionTable` struct from the transition module.
pub use transition::TransitionTable;
/// Re-exports various types related to machine definition and execution from the types module.
pub use types::{
    Direction, Halt, HaltKind, State, Status, Step, Symbol, TransitionRule, TuringMachineError,
    DEFAULT_BLANK_SYMBOL, DEFAULT_MAX_STEPS,
};
