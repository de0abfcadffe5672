//! The transition table: at most one rule per `(state, symbol)` pair.

use crate::types::{State, Symbol, TransitionRule};
use std::collections::HashMap;

/// Maps `(from_state, read_symbol)` to the unique rule for that pair.
///
/// Adding a rule for a pair that already has one replaces it.
#[derive(Debug, Clone)]
pub struct TransitionTable<St, Sy> {
    rules: HashMap<(St, Sy), TransitionRule<St, Sy>>,
}

impl<St, Sy> Default for TransitionTable<St, Sy> {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }
}

impl<St: State, Sy: Symbol> TransitionTable<St, Sy> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `rule`, returning the rule it replaced, if any.
    pub fn add_rule(&mut self, rule: TransitionRule<St, Sy>) -> Option<TransitionRule<St, Sy>> {
        let key = (rule.from_state.clone(), rule.read_symbol.clone());
        self.rules.insert(key, rule)
    }

    pub fn find_rule(&self, state: &St, symbol: &Sy) -> Option<&TransitionRule<St, Sy>> {
        self.rules.get(&(state.clone(), symbol.clone()))
    }

    pub fn has_rule(&self, state: &St, symbol: &Sy) -> bool {
        self.find_rule(state, symbol).is_some()
    }

    pub fn remove_rule(&mut self, state: &St, symbol: &Sy) -> Option<TransitionRule<St, Sy>> {
        self.rules.remove(&(state.clone(), symbol.clone()))
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over all rules in no particular order.
    pub fn rules(&self) -> impl Iterator<Item = &TransitionRule<St, Sy>> {
        self.rules.values()
    }
}
