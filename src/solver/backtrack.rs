use log::debug;

use crate::instance::Literal;

use super::assignment::{Assignment, Eval};
use super::trail::Trail;

/// Pops the trail until the learned clause `d` is unit under the remaining
/// assignment, i.e. exactly one of its literals is unassigned and every
/// other is false. Returns `false` if the trail empties first, which the
/// driver treats as unsat.
pub(crate) fn backtrack(d: &[Literal], assignment: &mut Assignment, trail: &mut Trail) -> bool {
    while !is_unit_under(d, assignment) {
        let var = match trail.pop() {
            Some(var) => var,
            None => return false,
        };
        debug!("backtracking: unassigning {:?}", var);
        assignment.unset(var);
    }
    true
}

fn is_unit_under(d: &[Literal], assignment: &Assignment) -> bool {
    let mut unassigned = 0;
    for &lit in d {
        match assignment.eval(lit) {
            Eval::True => return false,
            Eval::Unassigned => unassigned += 1,
            Eval::False => {}
        }
    }
    unassigned == 1
}
