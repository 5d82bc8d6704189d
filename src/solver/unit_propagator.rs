use log::trace;

use super::assignment::{Assignment, Reason};
use super::formula::Formula;
use super::simplifier::trace_view;
use super::trail::Trail;

/// Repeatedly finds a clause with exactly one unresolved literal and forces
/// it true, tagging the implication with the clause that caused it. Rebuilds
/// the trace view after every single assignment rather than incrementally
/// maintaining clause state — see the crate's design notes on copying views
/// vs. in-place marking.
///
/// Idempotent: a fixpoint has been reached when no unit clause remains, so a
/// second call observes no unit clauses and does nothing.
pub(crate) fn propagate(formula: &Formula, assignment: &mut Assignment, trail: &mut Trail) {
    loop {
        let view = trace_view(formula, assignment);
        let unit = view
            .iter()
            .enumerate()
            .find(|(_, literals)| literals.len() == 1);

        let (clause_index, literals) = match unit {
            Some(found) => found,
            None => return,
        };
        let lit = literals[0];
        trace!(
            "propagating {:?} forced by clause {}",
            lit,
            clause_index
        );
        assignment.set(lit.var(), lit.polarity(), Reason::Implied(clause_index));
        trail.push(lit.var());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::instance::{Clause, Literal, Variable};

    fn lit(id: u32, polarity: bool) -> Literal {
        Literal::new(Variable::new(id), polarity)
    }

    #[test]
    fn propagates_a_chain_of_unit_clauses() {
        // x1, !x1 | x2, !x2 | x3
        let formula = Formula::new(vec![
            Clause::new(vec![lit(1, true)]),
            Clause::new(vec![lit(1, false), lit(2, true)]),
            Clause::new(vec![lit(2, false), lit(3, true)]),
        ]);
        let mut assignment = Assignment::new(3);
        let mut trail = Trail::new();

        propagate(&formula, &mut assignment, &mut trail);

        assert_eq!(assignment.value(Variable::new(1)), Some(true));
        assert_eq!(assignment.value(Variable::new(2)), Some(true));
        assert_eq!(assignment.value(Variable::new(3)), Some(true));
        assert_eq!(trail.len(), 3);
    }

    #[test]
    fn is_idempotent() {
        let formula = Formula::new(vec![Clause::new(vec![lit(1, true)])]);
        let mut assignment = Assignment::new(1);
        let mut trail = Trail::new();

        propagate(&formula, &mut assignment, &mut trail);
        let after_first = assignment.clone();
        propagate(&formula, &mut assignment, &mut trail);

        assert_eq!(assignment.value(Variable::new(1)), after_first.value(Variable::new(1)));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn stops_without_reporting_a_conflict() {
        // Propagation alone does not report failure; the driver discovers it
        // by inspecting the compact view afterwards.
        let formula = Formula::new(vec![
            Clause::new(vec![lit(1, true)]),
            Clause::new(vec![lit(1, false)]),
        ]);
        let mut assignment = Assignment::new(1);
        let mut trail = Trail::new();
        propagate(&formula, &mut assignment, &mut trail);
        assert_eq!(trail.len(), 1);
    }
}
