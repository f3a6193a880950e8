use crate::syntax_tree::fol::Formula;

pub trait Apply {
    /// Apply an operation `f` in post-order to each node of a tree
    fn apply(self, f: &mut impl FnMut(Self) -> Self) -> Self
    where
        Self: Sized;
}

impl Apply for Formula {
    fn apply(self, f: &mut impl FnMut(Self) -> Self) -> Self {
        let inner = match self {
            x @ Formula::AtomicFormula(_) => x,

            Formula::UnaryFormula {
                connective,
                formula,
            } => Formula::UnaryFormula {
                connective,
                formula: formula.apply(f).into(),
            },

            Formula::BinaryFormula {
                connective,
                lhs,
                rhs,
            } => Formula::BinaryFormula {
                connective,
                lhs: lhs.apply(f).into(),
                rhs: rhs.apply(f).into(),
            },

            Formula::QuantifiedFormula {
                quantifier,
                variable,
                formula,
            } => Formula::QuantifiedFormula {
                quantifier,
                variable,
                formula: formula.apply(f).into(),
            },
        };
        f(inner)
    }
}
