use crate::{
    convenience::unbox::{fol::UnboxedFormula, Unbox as _},
    syntax_tree::fol::{AtomicFormula, Comparison, Formula, Relation, Term, UnaryConnective},
};

/// Restrict the comparators of a formula in negation normal form to `=`,
/// `<`, and `>`.
///
/// Negations directly over atoms are consumed by the rewrite; all other
/// nodes are traversed structurally.
pub fn simplify_comparisons(formula: Formula) -> Formula {
    match formula.unbox() {
        x @ UnboxedFormula::AtomicFormula(AtomicFormula::Truth | AtomicFormula::Falsity) => {
            x.rebox()
        }

        UnboxedFormula::AtomicFormula(AtomicFormula::Comparison(comparison)) => {
            simplify_comparison(comparison)
        }

        UnboxedFormula::UnaryFormula {
            connective: UnaryConnective::Negation,
            formula: Formula::AtomicFormula(AtomicFormula::Comparison(comparison)),
        } => simplify_negated_comparison(comparison),

        UnboxedFormula::UnaryFormula {
            connective: connective @ UnaryConnective::Negation,
            formula,
        } => Formula::UnaryFormula {
            connective,
            formula: simplify_comparisons(formula).into(),
        },

        UnboxedFormula::BinaryFormula {
            connective,
            lhs,
            rhs,
        } => Formula::BinaryFormula {
            connective,
            lhs: simplify_comparisons(lhs).into(),
            rhs: simplify_comparisons(rhs).into(),
        },

        UnboxedFormula::QuantifiedFormula {
            quantifier,
            variable,
            formula,
        } => simplify_comparisons(formula).quantify(quantifier, variable),
    }
}

fn atom(lhs: Term, relation: Relation, rhs: Term) -> Formula {
    Formula::AtomicFormula(AtomicFormula::Comparison(Comparison { lhs, relation, rhs }))
}

fn simplify_comparison(comparison: Comparison) -> Formula {
    let Comparison { lhs, relation, rhs } = comparison;
    match relation {
        Relation::Equal | Relation::Less | Relation::Greater => atom(lhs, relation, rhs),

        // a <= b  ~>  a < b | a = b
        Relation::LessEqual => atom(lhs.clone(), Relation::Less, rhs.clone())
            .or(atom(lhs, Relation::Equal, rhs)),

        // a >= b  ~>  a > b | a = b
        Relation::GreaterEqual => atom(lhs.clone(), Relation::Greater, rhs.clone())
            .or(atom(lhs, Relation::Equal, rhs)),

        // a != b  ~>  a < b | b < a
        Relation::NotEqual => atom(lhs.clone(), Relation::Less, rhs.clone())
            .or(atom(rhs, Relation::Less, lhs)),
    }
}

fn simplify_negated_comparison(comparison: Comparison) -> Formula {
    let Comparison { lhs, relation, rhs } = comparison;
    match relation {
        // ~(a = b)  ~>  a != b
        Relation::Equal => simplify_comparison(Comparison {
            lhs,
            relation: Relation::NotEqual,
            rhs,
        }),

        // ~(a < b)  ~>  a >= b
        Relation::Less => simplify_comparison(Comparison {
            lhs,
            relation: Relation::GreaterEqual,
            rhs,
        }),

        // ~(a <= b)  ~>  a > b
        Relation::LessEqual => atom(lhs, Relation::Greater, rhs),

        // ~(a > b)  ~>  a <= b
        Relation::Greater => simplify_comparison(Comparison {
            lhs,
            relation: Relation::LessEqual,
            rhs,
        }),

        // ~(a >= b)  ~>  a < b
        Relation::GreaterEqual => atom(lhs, Relation::Less, rhs),

        // ~(a != b)  ~>  a = b
        Relation::NotEqual => atom(lhs, Relation::Equal, rhs),
    }
}
