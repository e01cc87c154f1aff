use crate::sat::literal::{Literal, Variable};
use core::ops::Index;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Copy, Default, Hash, PartialOrd, Ord)]
pub enum VarState {
    #[default]
    Unassigned,
    Assigned(bool),
}

impl VarState {
    pub const fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

/// A partial or complete mapping from variables to booleans.
///
/// Slot 0 is never used so variables index the vector directly. The default
/// value is the empty mapping, which is what an unsatisfiable result carries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Assignment(Vec<VarState>);

impl Index<Variable> for Assignment {
    type Output = VarState;

    fn index(&self, index: Variable) -> &Self::Output {
        &self.0[index]
    }
}

impl Assignment {
    /// An assignment over `n` variables with nothing assigned yet.
    pub fn new(n: usize) -> Self {
        Self(vec![VarState::Unassigned; n + 1])
    }

    pub fn num_vars(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn set(&mut self, var: Variable, b: bool) {
        self.0[var] = VarState::Assigned(b);
    }

    pub fn unassign(&mut self, var: Variable) {
        self.0[var] = VarState::Unassigned;
    }

    pub fn var_value(&self, i: Variable) -> Option<bool> {
        match self.0.get(i) {
            Some(VarState::Assigned(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn literal_value(&self, l: Literal) -> Option<bool> {
        self.var_value(l.variable()).map(|b| l.evaluate(b))
    }

    /// Number of variables with a value.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|s| s.is_assigned()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every variable of the mapping's range has a value.
    pub fn is_complete(&self) -> bool {
        self.0.iter().skip(1).all(VarState::is_assigned)
    }

    /// Assigned `(variable, value)` pairs in ascending variable order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, s)| match s {
                VarState::Assigned(b) => Some((i, *b)),
                VarState::Unassigned => None,
            })
    }
}

impl FromIterator<(Variable, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Variable, bool)>>(iter: T) -> Self {
        let pairs: Vec<_> = iter.into_iter().collect();
        let n = pairs.iter().map(|&(v, _)| v).max().unwrap_or(0);
        let mut assignment = Self::new(n);
        for (var, value) in pairs {
            assignment.set(var, value);
        }
        assignment
    }
}

/// Renders as `{1: True, 2: False}`; the empty mapping renders as `{}`.
impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (n, (var, value)) in self.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{var}: {}", if value { "True" } else { "False" })?;
        }
        f.write_str("}")
    }
}
