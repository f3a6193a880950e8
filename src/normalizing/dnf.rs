use crate::{
    convenience::unbox::{fol::UnboxedFormula, Unbox as _},
    normalizing::pnf::pnf,
    syntax_tree::fol::{BinaryConnective, Formula},
};

/// Convert a formula into prenex disjunctive normal form: the quantifier
/// prefix is left intact, conjunctions are distributed over disjunctions
/// within the matrix.
pub fn dnf(formula: Formula) -> Formula {
    dnf_formula(pnf(formula))
}

fn dnf_formula(formula: Formula) -> Formula {
    match formula.unbox() {
        x @ (UnboxedFormula::AtomicFormula(_) | UnboxedFormula::UnaryFormula { .. }) => x.rebox(),

        UnboxedFormula::QuantifiedFormula {
            quantifier,
            variable,
            formula,
        } => dnf_formula(formula).quantify(quantifier, variable),

        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Disjunction,
            lhs,
            rhs,
        } => dnf_formula(lhs).or(dnf_formula(rhs)),

        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Conjunction,
            lhs,
            rhs,
        } => {
            let lhs = dnf_formula(lhs);
            let rhs = dnf_formula(rhs);

            // F & (G | H)  ~>  F & G | F & H
            match (lhs.unbox(), rhs.unbox()) {
                (
                    UnboxedFormula::BinaryFormula {
                        connective: BinaryConnective::Disjunction,
                        lhs: a,
                        rhs: b,
                    },
                    rhs,
                ) => {
                    let rhs = rhs.rebox();
                    dnf_formula(a.and(rhs.clone())).or(dnf_formula(b.and(rhs)))
                }
                (
                    lhs,
                    UnboxedFormula::BinaryFormula {
                        connective: BinaryConnective::Disjunction,
                        lhs: a,
                        rhs: b,
                    },
                ) => {
                    let lhs = lhs.rebox();
                    dnf_formula(lhs.clone().and(a)).or(dnf_formula(lhs.and(b)))
                }
                (lhs, rhs) => lhs.rebox().and(rhs.rebox()),
            }
        }

        UnboxedFormula::BinaryFormula { .. } => {
            unreachable!("implications and equivalences have already been expanded")
        }
    }
}
