use crate::{
    convenience::unbox::{fol::UnboxedFormula, Unbox as _},
    normalizing::simplify::simplify,
    syntax_tree::fol::{AtomicFormula, BinaryConnective, Formula, Quantifier, UnaryConnective},
};

/// Convert a formula into negation normal form: no implications or
/// equivalences, negations only directly over atoms.
pub fn nnf(formula: Formula) -> Formula {
    nnf_formula(simplify(formula))
}

fn nnf_formula(formula: Formula) -> Formula {
    match formula.unbox() {
        x @ UnboxedFormula::AtomicFormula(_) => x.rebox(),

        UnboxedFormula::UnaryFormula {
            connective: UnaryConnective::Negation,
            formula,
        } => nnf_negated(formula),

        UnboxedFormula::BinaryFormula {
            connective: connective @ (BinaryConnective::Conjunction | BinaryConnective::Disjunction),
            lhs,
            rhs,
        } => Formula::BinaryFormula {
            connective,
            lhs: nnf_formula(lhs).into(),
            rhs: nnf_formula(rhs).into(),
        },

        // F => G  ~>  ~F | G
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Implication,
            lhs,
            rhs,
        } => nnf_negated(lhs).or(nnf_formula(rhs)),

        // F <=> G  ~>  (F | ~G) & (~F | G)
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Equivalence,
            lhs,
            rhs,
        } => nnf_formula(lhs.clone())
            .or(nnf_negated(rhs.clone()))
            .and(nnf_negated(lhs).or(nnf_formula(rhs))),

        UnboxedFormula::QuantifiedFormula {
            quantifier,
            variable,
            formula,
        } => nnf_formula(formula).quantify(quantifier, variable),
    }
}

/// The negation normal form of the negation of `formula`.
fn nnf_negated(formula: Formula) -> Formula {
    match formula.unbox() {
        x @ UnboxedFormula::AtomicFormula(AtomicFormula::Comparison(_)) => x.rebox().negate(),

        UnboxedFormula::AtomicFormula(AtomicFormula::Truth | AtomicFormula::Falsity) => {
            unreachable!("logical constants have already been folded away")
        }

        UnboxedFormula::UnaryFormula {
            connective: UnaryConnective::Negation,
            formula,
        } => nnf_formula(formula),

        // ~(F & G)  ~>  ~F | ~G
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Conjunction,
            lhs,
            rhs,
        } => nnf_negated(lhs).or(nnf_negated(rhs)),

        // ~(F | G)  ~>  ~F & ~G
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Disjunction,
            lhs,
            rhs,
        } => nnf_negated(lhs).and(nnf_negated(rhs)),

        // ~(F => G)  ~>  F & ~G
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Implication,
            lhs,
            rhs,
        } => nnf_formula(lhs).and(nnf_negated(rhs)),

        // ~(F <=> G)  ~>  (F | G) & (~F | ~G)
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Equivalence,
            lhs,
            rhs,
        } => nnf_formula(lhs.clone())
            .or(nnf_formula(rhs.clone()))
            .and(nnf_negated(lhs).or(nnf_negated(rhs))),

        // ~!x.F  ~>  ?x.~F
        UnboxedFormula::QuantifiedFormula {
            quantifier: Quantifier::Forall,
            variable,
            formula,
        } => nnf_negated(formula).quantify(Quantifier::Exists, variable),

        // ~?x.F  ~>  !x.~F
        UnboxedFormula::QuantifiedFormula {
            quantifier: Quantifier::Exists,
            variable,
            formula,
        } => nnf_negated(formula).quantify(Quantifier::Forall, variable),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::nnf,
        crate::syntax_tree::fol::{AtomicFormula, BinaryConnective, Formula, UnaryConnective},
    };

    fn is_nnf(formula: &Formula) -> bool {
        match formula {
            Formula::AtomicFormula(_) => true,
            Formula::UnaryFormula {
                connective: UnaryConnective::Negation,
                formula,
            } => matches!(
                formula.as_ref(),
                Formula::AtomicFormula(AtomicFormula::Comparison(_))
            ),
            Formula::BinaryFormula {
                connective: BinaryConnective::Conjunction | BinaryConnective::Disjunction,
                lhs,
                rhs,
            } => is_nnf(lhs) && is_nnf(rhs),
            Formula::BinaryFormula { .. } => false,
            Formula::QuantifiedFormula { formula, .. } => is_nnf(formula),
        }
    }

    #[test]
    fn nnf_formulas() {
        for (src, target) in [
            ("x < y", "x<y"),
            ("~x < y", "~x<y"),
            ("~~x < y", "x<y"),
            ("~(x < y & y < z)", "~x<y | ~y<z"),
            ("~(x < y | y < z)", "~x<y & ~y<z"),
            ("x < y => y < z", "~x<y | y<z"),
            ("~(x < y => y < z)", "x<y & ~y<z"),
            ("x < y <=> y < z", "(x<y | ~y<z) & (~x<y | y<z)"),
            ("~(x < y <=> y < z)", "(x<y | y<z) & (~x<y | ~y<z)"),
            ("~!x.x < y", "?x.~x<y"),
            ("~?x.x < y", "!x.~x<y"),
            ("~!x.?y.x < y", "?x.!y.~x<y"),
            ("~(T => x < y)", "~x<y"),
            ("~(x < y & F)", "T"),
        ] {
            assert_eq!(
                nnf(src.parse().unwrap()),
                target.parse().unwrap(),
                "normalizing `{src}`"
            )
        }
    }

    #[test]
    fn nnf_shape() {
        for src in [
            "~((x < y => y < z) <=> ~(a = b | ~c = d))",
            "~!x.?y.(x < y <=> ~(x = y))",
            "~(x < y <=> (y < z <=> z < x))",
        ] {
            let formula = nnf(src.parse().unwrap());
            assert!(is_nnf(&formula), "nnf of `{src}` is `{formula}`");
        }
    }
}
