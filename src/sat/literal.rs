#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
use std::fmt::Display;

/// 1-based variable index.
pub type Variable = usize;

/// A signed reference to a variable.
///
/// `polarity == true` means the literal requires the variable to be true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Literal {
    var: u32,
    polarity: bool,
}

impl Literal {
    #[must_use]
    pub const fn new(var: u32, polarity: bool) -> Self {
        Self { var, polarity }
    }

    /// Builds a literal from its DIMACS form. Zero is not a literal.
    #[must_use]
    pub fn from_i32(value: i32) -> Option<Self> {
        (value != 0).then(|| Self::new(value.unsigned_abs(), value.is_positive()))
    }

    #[must_use]
    pub const fn variable(self) -> Variable {
        self.var as Variable
    }

    /// Truth value of this literal when its variable is set to `value`.
    #[must_use]
    pub const fn evaluate(self, value: bool) -> bool {
        value == self.polarity
    }

    #[must_use]
    pub fn to_i32(self) -> i32 {
        let var = i32::try_from(self.var).unwrap_or(i32::MAX);
        if self.polarity { var } else { -var }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i32() {
        let lit = Literal::from_i32(-4).unwrap();
        assert_eq!(lit.variable(), 4);
        assert_eq!(lit.to_i32(), -4);
        assert!(Literal::from_i32(0).is_none());
    }

    #[test]
    fn test_evaluate() {
        let pos = Literal::from_i32(2).unwrap();
        let neg = Literal::from_i32(-2).unwrap();
        assert!(pos.evaluate(true));
        assert!(!pos.evaluate(false));
        assert!(neg.evaluate(false));
        assert!(!neg.evaluate(true));
    }
}
