use crate::instance::{Literal, Variable};

/// Why a variable holds the value it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reason {
    /// A heuristic guess, free to be flipped by backtracking.
    Decision,
    /// Forced by unit propagation on the formula clause at this index.
    Implied(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VarState {
    value: bool,
    reason: Reason,
}

/// The result of evaluating a literal under a partial assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Eval {
    True,
    False,
    Unassigned,
}

/// A fixed-capacity array indexed by variable id, giving O(1) lookup without
/// hashing. Kept strictly separate from `Trail`, which records assignment
/// *order* — this type only records assignment *state*.
#[derive(Debug, Clone)]
pub(crate) struct Assignment {
    states: Vec<Option<VarState>>,
}

impl Assignment {
    pub(crate) fn new(variable_count: u32) -> Assignment {
        Assignment {
            states: vec![None; variable_count as usize],
        }
    }

    pub(crate) fn value(&self, var: Variable) -> Option<bool> {
        self.states[var.index()].map(|s| s.value)
    }

    pub(crate) fn reason(&self, var: Variable) -> Option<Reason> {
        self.states[var.index()].map(|s| s.reason)
    }

    pub(crate) fn is_assigned(&self, var: Variable) -> bool {
        self.states[var.index()].is_some()
    }

    pub(crate) fn set(&mut self, var: Variable, value: bool, reason: Reason) {
        debug_assert!(
            !self.is_assigned(var),
            "{:?} is already assigned",
            var
        );
        self.states[var.index()] = Some(VarState { value, reason });
    }

    pub(crate) fn unset(&mut self, var: Variable) {
        debug_assert!(self.is_assigned(var), "{:?} was never assigned", var);
        self.states[var.index()] = None;
    }

    /// Evaluates a literal under this assignment. No side effects.
    pub(crate) fn eval(&self, lit: Literal) -> Eval {
        match self.value(lit.var()) {
            None => Eval::Unassigned,
            Some(value) if value == lit.polarity() => Eval::True,
            Some(_) => Eval::False,
        }
    }

    /// Ascending-variable assignment pairs, for output formatting and for the
    /// "totality on SAT" property: every variable in `[1, N]` must appear.
    pub(crate) fn assignment_pairs(&self) -> Vec<(Variable, bool)> {
        self.states
            .iter()
            .enumerate()
            .map(|(ix, state)| {
                let var = Variable::new(ix as u32 + 1);
                let value = state.unwrap_or_else(|| panic!("{:?} was never assigned", var)).value;
                (var, value)
            })
            .collect()
    }
}
