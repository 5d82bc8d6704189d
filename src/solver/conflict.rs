use crate::instance::{Clause, Literal, Variable};

use super::assignment::{Assignment, Eval, Reason};
use super::formula::Formula;
use super::trail::Trail;

/// The lowest-indexed clause that is falsified outright under `assignment`.
/// Deliberately searches the unreduced formula rather than a view, since the
/// seed of the learned clause must be the clause's original literals.
pub(crate) fn find_conflict(formula: &Formula, assignment: &Assignment) -> Option<usize> {
    formula
        .iter()
        .find(|(_, clause)| is_falsified(clause, assignment))
        .map(|(index, _)| index)
}

fn is_falsified(clause: &Clause, assignment: &Assignment) -> bool {
    clause
        .literals()
        .iter()
        .all(|&lit| assignment.eval(lit) == Eval::False)
}

/// `resolve(a, b, pivot)`: the union of `a` and `b` with both complementary
/// occurrences of `pivot` removed. Panics if `a` and `b` do not each carry
/// exactly one polarity of `pivot` — that would mean a reason clause was
/// unsound, which a well-formed trail should never produce.
pub(crate) fn resolve(a: &[Literal], b: &[Literal], pivot: Variable) -> Vec<Literal> {
    let a_pos = a.contains(&Literal::new(pivot, true));
    let a_neg = a.contains(&Literal::new(pivot, false));
    let b_pos = b.contains(&Literal::new(pivot, true));
    let b_neg = b.contains(&Literal::new(pivot, false));

    let valid = (a_pos && b_neg && !a_neg && !b_pos) || (a_neg && b_pos && !a_pos && !b_neg);
    assert!(
        valid,
        "resolve: {:?} on {:?} requires complementary occurrences in exactly one clause each",
        pivot, (a, b)
    );

    let mut merged: Vec<Literal> = a
        .iter()
        .chain(b.iter())
        .copied()
        .filter(|lit| lit.var() != pivot)
        .collect();
    merged.sort();
    merged.dedup();
    merged
}

/// Walks the trail backwards from a detected conflict, resolving in reason
/// clauses for every implied literal that occurs in the growing clause `d`,
/// until `d` contains no literal implied later than the decision it will
/// backtrack past. Returns the learned clause.
pub(crate) fn analyze(
    formula: &Formula,
    assignment: &Assignment,
    trail: &Trail,
    conflicting_clause: usize,
) -> Vec<Literal> {
    let mut d: Vec<Literal> = formula.clause(conflicting_clause).literals().to_vec();

    for var in trail.iter_rev() {
        let reason = assignment
            .reason(var)
            .unwrap_or_else(|| panic!("{:?} on the trail has no reason", var));
        let clause_index = match reason {
            Reason::Decision => continue,
            Reason::Implied(index) => index,
        };
        if !d.iter().any(|lit| lit.var() == var) {
            continue;
        }
        let r = formula.clause(clause_index).literals();
        d = resolve(r, &d, var);
    }

    d.sort();
    d.dedup();
    d
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::instance::Clause;

    fn lit(id: u32, polarity: bool) -> Literal {
        Literal::new(Variable::new(id), polarity)
    }

    #[test]
    fn finds_lowest_indexed_falsified_clause() {
        let formula = Formula::new(vec![
            Clause::new(vec![lit(1, true)]),
            Clause::new(vec![lit(1, false)]),
        ]);
        let mut assignment = Assignment::new(1);
        assignment.set(Variable::new(1), true, Reason::Decision);
        assert_eq!(find_conflict(&formula, &assignment), Some(1));
    }

    #[test]
    fn no_conflict_when_nothing_is_falsified() {
        let formula = Formula::new(vec![Clause::new(vec![lit(1, true)])]);
        let assignment = Assignment::new(1);
        assert_eq!(find_conflict(&formula, &assignment), None);
    }

    #[test]
    fn resolve_cancels_the_pivot() {
        let a = vec![lit(1, true), lit(2, true)];
        let b = vec![lit(1, false), lit(3, true)];
        let resolvent = resolve(&a, &b, Variable::new(1));
        assert_eq!(resolvent, vec![lit(2, true), lit(3, true)]);
    }

    #[test]
    #[should_panic(expected = "requires complementary occurrences")]
    fn resolve_panics_without_a_complementary_pair() {
        let a = vec![lit(1, true), lit(2, true)];
        let b = vec![lit(3, true)];
        resolve(&a, &b, Variable::new(1));
    }

    #[test]
    fn analyze_learns_the_resolvent_of_the_implication_chain() {
        // x1 (decision); x1 -> x2 via clause 1 (!x1 | x2); clause 2 (!x2) conflicts.
        let formula = Formula::new(vec![
            Clause::new(vec![lit(1, true)]),
            Clause::new(vec![lit(1, false), lit(2, true)]),
            Clause::new(vec![lit(2, false)]),
        ]);
        let mut assignment = Assignment::new(2);
        let mut trail = Trail::new();
        assignment.set(Variable::new(1), true, Reason::Decision);
        trail.push(Variable::new(1));
        assignment.set(Variable::new(2), true, Reason::Implied(1));
        trail.push(Variable::new(2));

        let learned = analyze(&formula, &assignment, &trail, 2);
        // Resolving clause 2 (!x2) with clause 1 (!x1 | x2) over x2 yields (!x1).
        assert_eq!(learned, vec![lit(1, false)]);
    }
}
