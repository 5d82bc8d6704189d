use crate::instance::Literal;

use super::assignment::{Assignment, Eval};
use super::formula::Formula;

/// The compact view: each clause is reduced to its unresolved literals;
/// clauses satisfied by some True literal are dropped entirely.
///
/// - The result is empty iff every clause in `formula` is satisfied (a model).
/// - The result contains an empty sub-clause iff some clause is falsified (a
///   conflict).
///
/// Operates on a copy; `formula` is never mutated.
pub(crate) fn compact_view(formula: &Formula, assignment: &Assignment) -> Vec<Vec<Literal>> {
    let mut view = Vec::with_capacity(formula.len());
    for (_, clause) in formula.iter() {
        if let Some(unresolved) = reduce_clause(clause.literals(), assignment) {
            view.push(unresolved);
        }
    }
    view
}

/// The trace view. Same reduction as `compact_view`, except a satisfied
/// clause is replaced by an empty placeholder rather than dropped, so the
/// returned vector's indices line up 1:1 with the active formula's.
pub(crate) fn trace_view(formula: &Formula, assignment: &Assignment) -> Vec<Vec<Literal>> {
    formula
        .iter()
        .map(|(_, clause)| reduce_clause(clause.literals(), assignment).unwrap_or_default())
        .collect()
}

/// `None` means the clause is satisfied; `Some(unresolved)` carries whatever
/// literals remain unassigned (empty iff falsified).
fn reduce_clause(literals: &[Literal], assignment: &Assignment) -> Option<Vec<Literal>> {
    let mut unresolved = Vec::new();
    for &lit in literals {
        match assignment.eval(lit) {
            Eval::True => return None,
            Eval::Unassigned => unresolved.push(lit),
            Eval::False => {}
        }
    }
    Some(unresolved)
}
