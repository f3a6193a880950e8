use crate::{
    arithmetic::Rational,
    syntax_tree::fol::{
        AtomicFormula, BinaryConnective, BinaryOperator, Comparison, Formula, Relation, Term,
        UnaryConnective, UnaryOperator,
    },
};

/// Evaluate a quantifier-free, variable-free formula.
pub fn evaluate(formula: &Formula) -> bool {
    match formula {
        Formula::AtomicFormula(AtomicFormula::Truth) => true,
        Formula::AtomicFormula(AtomicFormula::Falsity) => false,
        Formula::AtomicFormula(AtomicFormula::Comparison(comparison)) => {
            evaluate_comparison(comparison)
        }
        Formula::UnaryFormula {
            connective: UnaryConnective::Negation,
            formula,
        } => !evaluate(formula),
        Formula::BinaryFormula {
            connective,
            lhs,
            rhs,
        } => match connective {
            BinaryConnective::Conjunction => evaluate(lhs) && evaluate(rhs),
            BinaryConnective::Disjunction => evaluate(lhs) || evaluate(rhs),
            BinaryConnective::Implication => {
                if evaluate(lhs) {
                    evaluate(rhs)
                } else {
                    true
                }
            }
            BinaryConnective::Equivalence => evaluate(lhs) == evaluate(rhs),
        },
        x @ Formula::QuantifiedFormula { .. } => {
            unreachable!("`{x}` is not quantifier-free")
        }
    }
}

fn evaluate_comparison(comparison: &Comparison) -> bool {
    let lhs = evaluate_term(&comparison.lhs);
    let rhs = evaluate_term(&comparison.rhs);
    match comparison.relation {
        Relation::Equal => lhs == rhs,
        Relation::NotEqual => lhs != rhs,
        Relation::Less => lhs < rhs,
        Relation::LessEqual => lhs <= rhs,
        Relation::Greater => lhs > rhs,
        Relation::GreaterEqual => lhs >= rhs,
    }
}

fn evaluate_term(term: &Term) -> Rational {
    match term {
        Term::Constant(constant) => *constant,
        Term::UnaryOperation {
            op: UnaryOperator::Negative,
            arg,
        } => -evaluate_term(arg),
        Term::BinaryOperation {
            op: BinaryOperator::Add,
            lhs,
            rhs,
        } => evaluate_term(lhs) + evaluate_term(rhs),
        Term::BinaryOperation {
            op: BinaryOperator::Subtract,
            lhs,
            rhs,
        } => evaluate_term(lhs) - evaluate_term(rhs),
        x => unreachable!("`{x}` is not a closed linear term"),
    }
}

#[cfg(test)]
mod tests {
    use {super::evaluate, crate::syntax_tree::fol::Formula};

    #[test]
    fn evaluate_ground_formulas() {
        for (src, target) in [
            ("T", true),
            ("F", false),
            ("1 < 2", true),
            ("0 < 0", false),
            ("1 = 1", true),
            ("1 != 1", false),
            ("2 >= 2", true),
            ("2 <= 1", false),
            ("-3 < 1", true),
            ("1 + 2 = 3", true),
            ("5 - 2 - 1 = 2", true),
            ("~0 < 1", false),
            ("0 < 1 & 1 < 0", false),
            ("0 < 1 | 1 < 0", true),
            ("0 < 1 => 1 < 0", false),
            ("1 < 0 => 0 < 1", true),
            ("0 < 1 <=> 2 < 3", true),
            ("0 < 1 <=> 3 < 2", false),
            ("~(T | F)", false),
        ] {
            let formula: Formula = src.parse().unwrap();
            assert_eq!(evaluate(&formula), target, "evaluating `{src}`");
        }
    }
}
