use crate::{
    convenience::{
        apply::Apply as _,
        unbox::{fol::UnboxedFormula, Unbox as _},
    },
    syntax_tree::fol::{AtomicFormula, BinaryConnective, Formula, UnaryConnective},
};

/// Fold logical constants bottom-up: subformulas are reduced before the
/// enclosing connective, and every rule of the portfolio is applied to each
/// node in turn.
pub fn simplify(formula: Formula) -> Formula {
    formula.apply(&mut |formula| {
        CONSTANT_FOLDING
            .iter()
            .fold(formula, |formula, operation| operation(formula))
    })
}

// simplify_negations must come last: the implication and equivalence rules
// may emit a negation whose operand is itself a constant
pub const CONSTANT_FOLDING: &[fn(Formula) -> Formula] = &[
    simplify_conjunctions,
    simplify_disjunctions,
    simplify_implications,
    simplify_equivalences,
    simplify_quantifications,
    simplify_negations,
];

fn truth(formula: &Formula) -> bool {
    matches!(formula, Formula::AtomicFormula(AtomicFormula::Truth))
}

fn falsity(formula: &Formula) -> bool {
    matches!(formula, Formula::AtomicFormula(AtomicFormula::Falsity))
}

pub fn simplify_negations(formula: Formula) -> Formula {
    // ~T => F
    // ~F => T
    match formula.unbox() {
        UnboxedFormula::UnaryFormula {
            connective: UnaryConnective::Negation,
            formula,
        } => {
            if truth(&formula) {
                Formula::falsity()
            } else if falsity(&formula) {
                Formula::truth()
            } else {
                formula.negate()
            }
        }
        x => x.rebox(),
    }
}

pub fn simplify_conjunctions(formula: Formula) -> Formula {
    // F & G  => F  if G = T
    // F & G  => G  if F = T
    // F & G  => F  if F = F
    // F & G  => G  if G = F
    match formula.unbox() {
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Conjunction,
            lhs,
            rhs,
        } => {
            if falsity(&lhs) || falsity(&rhs) {
                Formula::falsity()
            } else if truth(&lhs) {
                rhs
            } else if truth(&rhs) {
                lhs
            } else {
                lhs.and(rhs)
            }
        }
        x => x.rebox(),
    }
}

pub fn simplify_disjunctions(formula: Formula) -> Formula {
    // F | G  => T  if F = T or G = T
    // F | G  => G  if F = F
    // F | G  => F  if G = F
    match formula.unbox() {
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Disjunction,
            lhs,
            rhs,
        } => {
            if truth(&lhs) || truth(&rhs) {
                Formula::truth()
            } else if falsity(&lhs) {
                rhs
            } else if falsity(&rhs) {
                lhs
            } else {
                lhs.or(rhs)
            }
        }
        x => x.rebox(),
    }
}

pub fn simplify_implications(formula: Formula) -> Formula {
    // F => G  =>  T   if F = F or G = T
    // F => G  =>  G   if F = T
    // F => G  =>  ~F  if G = F
    match formula.unbox() {
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Implication,
            lhs,
            rhs,
        } => {
            if falsity(&lhs) || truth(&rhs) {
                Formula::truth()
            } else if truth(&lhs) {
                rhs
            } else if falsity(&rhs) {
                lhs.negate()
            } else {
                Formula::BinaryFormula {
                    connective: BinaryConnective::Implication,
                    lhs: lhs.into(),
                    rhs: rhs.into(),
                }
            }
        }
        x => x.rebox(),
    }
}

pub fn simplify_equivalences(formula: Formula) -> Formula {
    // F <=> G  =>  G   if F = T
    // F <=> G  =>  F   if G = T
    // F <=> G  =>  ~G  if F = F
    // F <=> G  =>  ~F  if G = F
    match formula.unbox() {
        UnboxedFormula::BinaryFormula {
            connective: BinaryConnective::Equivalence,
            lhs,
            rhs,
        } => {
            if truth(&lhs) {
                rhs
            } else if truth(&rhs) {
                lhs
            } else if falsity(&lhs) {
                rhs.negate()
            } else if falsity(&rhs) {
                lhs.negate()
            } else {
                Formula::BinaryFormula {
                    connective: BinaryConnective::Equivalence,
                    lhs: lhs.into(),
                    rhs: rhs.into(),
                }
            }
        }
        x => x.rebox(),
    }
}

pub fn simplify_quantifications(formula: Formula) -> Formula {
    // Qx.F => F  if F = T or F = F
    match formula.unbox() {
        UnboxedFormula::QuantifiedFormula {
            quantifier,
            variable,
            formula,
        } => {
            if truth(&formula) || falsity(&formula) {
                formula
            } else {
                formula.quantify(quantifier, variable)
            }
        }
        x => x.rebox(),
    }
}
