//! Execution statistics collected by the engine, and a serializable snapshot of them.

use crate::head::HeadStats;
use crate::types::HaltKind;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Step counter, step budget and wall-clock timing of the last run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionStats {
    step_count: usize,
    max_steps: usize,
    started: Option<Instant>,
    finished: Option<Instant>,
}

impl ExecutionStats {
    pub fn new(max_steps: usize) -> Self {
        Self {
            step_count: 0,
            max_steps,
            started: None,
            finished: None,
        }
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    pub(crate) fn set_max_steps(&mut self, max_steps: usize) {
        self.max_steps = max_steps;
    }

    pub(crate) fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn step_limit_exceeded(&self) -> bool {
        self.step_count >= self.max_steps
    }

    pub(crate) fn start(&mut self) {
        self.started = Some(Instant::now());
        self.finished = None;
    }

    pub(crate) fn finish(&mut self) {
        self.finished = Some(Instant::now());
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Wall-clock time of the last run. Measured up to now while a run is in progress, and
    /// zero if no run has started.
    pub fn elapsed(&self) -> Duration {
        match (self.started, self.finished) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Mean time per step of the last run, in microseconds.
    pub fn average_time_per_step(&self) -> f64 {
        if self.step_count == 0 {
            return 0.0;
        }

        self.elapsed().as_secs_f64() * 1_000_000.0 / self.step_count as f64
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.max_steps);
    }
}

/// A point-in-time summary of a machine, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub steps: usize,
    pub max_steps: usize,
    pub elapsed_micros: u64,
    pub halt: Option<HaltKind>,
    pub in_final_state: bool,
    pub head_position: i64,
    pub head: HeadStats,
    pub rule_count: usize,
    pub materialized_cells: usize,
    pub written_cells: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_limit() {
        let mut stats = ExecutionStats::new(2);
        assert!(!stats.step_limit_exceeded());

        stats.record_step();
        stats.record_step();
        assert_eq!(stats.step_count(), 2);
        assert!(stats.step_limit_exceeded());

        stats.set_max_steps(10);
        assert!(!stats.step_limit_exceeded());
    }

    #[test]
    fn test_timing() {
        let mut stats = ExecutionStats::new(10);
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert_eq!(stats.average_time_per_step(), 0.0);

        stats.start();
        assert!(stats.is_started());
        assert!(!stats.is_finished());
        stats.record_step();
        stats.finish();

        let elapsed = stats.elapsed();
        assert_eq!(stats.elapsed(), elapsed);
        assert!(stats.average_time_per_step() >= 0.0);
    }

    #[test]
    fn test_reset_keeps_budget() {
        let mut stats = ExecutionStats::new(7);
        stats.start();
        stats.record_step();

        stats.reset();
        assert_eq!(stats.step_count(), 0);
        assert_eq!(stats.max_steps(), 7);
        assert!(!stats.is_started());
    }
}
