use crate::sat::assignment::Assignment;
use crate::sat::literal::Literal;
use smallvec::SmallVec;

/// A disjunction of literals, kept in input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Clause {
    pub literals: SmallVec<[Literal; 8]>,
}

impl Clause {
    /// Builds a clause from DIMACS literals, dropping any zero.
    pub fn new(literals: &[i32]) -> Self {
        Self {
            literals: literals.iter().copied().filter_map(Literal::from_i32).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// Largest variable index mentioned, 0 for the empty clause.
    pub fn max_variable(&self) -> usize {
        self.iter().map(|l| l.variable()).max().unwrap_or(0)
    }

    /// A clause is violated when every literal's variable has a value and no
    /// literal evaluates to true. The empty clause is always violated.
    pub fn is_violated(&self, assignment: &Assignment) -> bool {
        self.iter()
            .all(|&lit| assignment.literal_value(lit) == Some(false))
    }

    /// At least one literal is already true.
    pub fn is_satisfied(&self, assignment: &Assignment) -> bool {
        self.iter()
            .any(|&lit| assignment.literal_value(lit) == Some(true))
    }

    pub fn to_i32s(&self) -> Vec<i32> {
        self.iter().map(|l| l.to_i32()).collect()
    }
}

impl From<Vec<i32>> for Clause {
    fn from(literals: Vec<i32>) -> Self {
        Self::new(&literals)
    }
}

impl From<&[i32]> for Clause {
    fn from(literals: &[i32]) -> Self {
        Self::new(literals)
    }
}
