use crate::{
    convenience::unbox::{fol::UnboxedFormula, Unbox as _},
    normalizing::nnf::nnf,
    syntax_tree::fol::{fresh_variable, BinaryConnective, Formula, Quantifier},
};

/// Convert a formula into prenex normal form: a block of quantifiers
/// followed by a quantifier-free matrix.
pub fn pnf(formula: Formula) -> Formula {
    pnf_formula(nnf(formula))
}

fn pnf_formula(formula: Formula) -> Formula {
    match formula.unbox() {
        // after nnf, negations sit directly over atoms
        x @ (UnboxedFormula::AtomicFormula(_) | UnboxedFormula::UnaryFormula { .. }) => x.rebox(),

        UnboxedFormula::BinaryFormula {
            connective: connective @ (BinaryConnective::Conjunction | BinaryConnective::Disjunction),
            lhs,
            rhs,
        } => pull_quantifiers(Formula::BinaryFormula {
            connective,
            lhs: pnf_formula(lhs).into(),
            rhs: pnf_formula(rhs).into(),
        }),

        UnboxedFormula::QuantifiedFormula {
            quantifier,
            variable,
            formula,
        } => {
            // an equally-named quantifier within the subformula would
            // capture this binding once the prefixes are joined
            let quantified = formula.quantified_variables();
            if quantified.contains(&variable) {
                let fresh = fresh_variable(&variable, &quantified);
                pnf_formula(formula.rename_variable(&variable, &fresh))
                    .quantify(quantifier, fresh)
            } else {
                pnf_formula(formula).quantify(quantifier, variable)
            }
        }

        UnboxedFormula::BinaryFormula { .. } => {
            unreachable!("implications and equivalences have already been expanded")
        }
    }
}

/// Hoist the quantifiers of two prenex operands above their connective.
fn pull_quantifiers(formula: Formula) -> Formula {
    match formula.unbox() {
        UnboxedFormula::BinaryFormula {
            connective: connective @ (BinaryConnective::Conjunction | BinaryConnective::Disjunction),
            lhs,
            rhs,
        } => match (lhs.unbox(), rhs.unbox()) {
            // !x.F & !x.G  ~>  !x.(F & G)
            (
                UnboxedFormula::QuantifiedFormula {
                    quantifier: Quantifier::Forall,
                    variable: left,
                    formula: lhs,
                },
                UnboxedFormula::QuantifiedFormula {
                    quantifier: Quantifier::Forall,
                    variable: right,
                    formula: rhs,
                },
            ) if connective == BinaryConnective::Conjunction && left == right => {
                pull_quantifiers(lhs.and(rhs)).quantify(Quantifier::Forall, left)
            }

            // ?x.F | ?x.G  ~>  ?x.(F | G)
            (
                UnboxedFormula::QuantifiedFormula {
                    quantifier: Quantifier::Exists,
                    variable: left,
                    formula: lhs,
                },
                UnboxedFormula::QuantifiedFormula {
                    quantifier: Quantifier::Exists,
                    variable: right,
                    formula: rhs,
                },
            ) if connective == BinaryConnective::Disjunction && left == right => {
                pull_quantifiers(lhs.or(rhs)).quantify(Quantifier::Exists, left)
            }

            (
                UnboxedFormula::QuantifiedFormula {
                    quantifier,
                    variable,
                    formula,
                },
                rhs,
            ) => hoist_quantifier(connective, quantifier, variable, formula, rhs.rebox(), true),

            (
                lhs,
                UnboxedFormula::QuantifiedFormula {
                    quantifier,
                    variable,
                    formula,
                },
            ) => hoist_quantifier(connective, quantifier, variable, formula, lhs.rebox(), false),

            (lhs, rhs) => Formula::BinaryFormula {
                connective,
                lhs: pull_quantifiers(lhs.rebox()).into(),
                rhs: pull_quantifiers(rhs.rebox()).into(),
            },
        },
        x => x.rebox(),
    }
}

fn hoist_quantifier(
    connective: BinaryConnective,
    quantifier: Quantifier,
    variable: String,
    formula: Formula,
    other: Formula,
    quantifier_on_left: bool,
) -> Formula {
    let free = other.free_variables();

    let (variable, formula) = if free.contains(&variable) {
        let fresh = fresh_variable(&variable, &free);
        let formula = formula.rename_variable(&variable, &fresh);
        (fresh, formula)
    } else {
        (variable, formula)
    };

    let (lhs, rhs) = if quantifier_on_left {
        (formula, other)
    } else {
        (other, formula)
    };

    pull_quantifiers(Formula::BinaryFormula {
        connective,
        lhs: lhs.into(),
        rhs: rhs.into(),
    })
    .quantify(quantifier, variable)
}
