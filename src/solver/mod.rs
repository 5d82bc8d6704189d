mod assignment;
mod backtrack;
mod conflict;
mod decision;
mod formula;
mod simplifier;
mod trail;
mod unit_propagator;

use log::info;

use crate::instance::{Clause, Variable};

use assignment::Assignment;
use formula::Formula;
use simplifier::compact_view;
use trail::Trail;

/// The outcome of a solve: a satisfying assignment, or a proof the formula
/// admits none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Satisfiable(Vec<(Variable, bool)>),
    Unsatisfiable,
}

impl Solution {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Solution::Satisfiable(_))
    }
}

/// Owns the active formula for the lifetime of a single solve. Variables are
/// the dense DIMACS integers directly, with no name-to-id indirection layer.
pub struct Solver {
    variable_count: u32,
    formula: Formula,
}

impl Solver {
    pub fn new(variable_count: u32, clauses: Vec<Clause>) -> Solver {
        Solver {
            variable_count,
            formula: Formula::new(clauses),
        }
    }

    /// Runs the search to completion. Consumes the solver since a formula
    /// accumulates learned clauses and an exhausted assignment store across
    /// the run; there is nothing left worth reusing afterwards.
    pub fn solve(mut self) -> Solution {
        let mut assignment = Assignment::new(self.variable_count);
        let mut trail = Trail::new();

        loop {
            unit_propagator::propagate(&self.formula, &mut assignment, &mut trail);

            let has_conflict = compact_view(&self.formula, &assignment)
                .iter()
                .any(|sub_clause| sub_clause.is_empty());

            if !has_conflict {
                if decision::decide(&mut assignment, &mut trail, self.variable_count) {
                    continue;
                }
                info!("formula is satisfiable");
                return Solution::Satisfiable(assignment.assignment_pairs());
            }

            let conflicting_clause = conflict::find_conflict(&self.formula, &assignment)
                .unwrap_or_else(|| panic!("compact view reported a conflict the unreduced formula does not have"));
            let learned = conflict::analyze(&self.formula, &assignment, &trail, conflicting_clause);
            if learned.is_empty() {
                info!("formula is unsatisfiable");
                return Solution::Unsatisfiable;
            }
            self.formula.learn(learned.clone());
            if !backtrack::backtrack(&learned, &mut assignment, &mut trail) {
                info!("formula is unsatisfiable");
                return Solution::Unsatisfiable;
            }
        }
    }
}
