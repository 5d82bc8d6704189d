use core::fmt;

use super::Literal;

/// A disjunction of literals, stored sorted by variable and deduplicated so that
/// resolution (see `solver::conflict`) can merge two clauses in a single pass.
///
/// Clause identity in the active formula is the index it occupies there, not
/// anything carried on the `Clause` itself — see `solver::Formula`.
#[derive(Clone, Eq, PartialEq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Builds a clause, sorting and deduplicating its literals. The caller is
    /// trusted to have already rejected a variable occurring with both
    /// polarities (a malformed clause, checked at the DIMACS boundary) or
    /// guaranteed it cannot happen (resolution, which always removes the pivot's
    /// two complementary occurrences) — this is only a debug-mode safety net.
    pub(crate) fn new(lits: Vec<Literal>) -> Clause {
        let mut literals = lits;
        literals.sort_by_key(|l| l.var());
        debug_assert!(
            literals
                .windows(2)
                .all(|w| w[0].var() != w[1].var() || w[0] == w[1]),
            "variable appears with both polarities in the same clause: {:?}",
            literals
        );
        literals.dedup();
        Clause { literals }
    }

    pub(crate) fn len(&self) -> usize {
        self.literals.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    #[allow(dead_code)]
    pub(crate) fn is_unit(&self) -> bool {
        self.len() == 1
    }

    pub(crate) fn literals(&self) -> &[Literal] {
        &self.literals
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        write!(f, "[")?;
        for &lit in &self.literals {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{:?}", lit)?;
        }
        write!(f, "]")?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::instance::Variable;

    fn lit(id: u32, polarity: bool) -> Literal {
        Literal::new(Variable::new(id), polarity)
    }

    #[test]
    fn sorts_and_dedupes_literals() {
        let clause = Clause::new(vec![lit(2, true), lit(1, true), lit(2, true)]);
        assert_eq!(clause.len(), 2);
        assert_eq!(clause.literals()[0].var(), Variable::new(1));
        assert_eq!(clause.literals()[1].var(), Variable::new(2));
    }

    #[test]
    fn empty_clause_is_well_formed() {
        let clause = Clause::new(vec![]);
        assert!(clause.is_empty());
        assert!(!clause.is_unit());
    }

    #[test]
    fn unit_clause_reports_unit() {
        let clause = Clause::new(vec![lit(1, false)]);
        assert!(clause.is_unit());
    }
}
