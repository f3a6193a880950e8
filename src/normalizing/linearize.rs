use {
    crate::{
        arithmetic::Rational,
        syntax_tree::fol::{
            AtomicFormula, BinaryOperator, Comparison, Formula, Term, UnaryOperator,
        },
    },
    thiserror::Error,
};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LinearizeError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("nonlinear product of `{0}` and `{1}`")]
    NonlinearProduct(Term, Term),
    #[error("division by the non-constant term `{0}`")]
    NonconstantDivisor(Term),
}

/// Reduce every term of the formula to a linear combination of variables
/// and constants: multiplications and divisions are folded into constants
/// or `Product` nodes, constant factors are distributed over sums.
pub fn linearize(formula: Formula) -> Result<Formula, LinearizeError> {
    Ok(match formula {
        x @ Formula::AtomicFormula(AtomicFormula::Truth | AtomicFormula::Falsity) => x,
        Formula::AtomicFormula(AtomicFormula::Comparison(Comparison { lhs, relation, rhs })) => {
            Formula::AtomicFormula(AtomicFormula::Comparison(Comparison {
                lhs: linearize_term(lhs)?,
                relation,
                rhs: linearize_term(rhs)?,
            }))
        }
        Formula::UnaryFormula {
            connective,
            formula,
        } => Formula::UnaryFormula {
            connective,
            formula: linearize(*formula)?.into(),
        },
        Formula::BinaryFormula {
            connective,
            lhs,
            rhs,
        } => Formula::BinaryFormula {
            connective,
            lhs: linearize(*lhs)?.into(),
            rhs: linearize(*rhs)?.into(),
        },
        Formula::QuantifiedFormula {
            quantifier,
            variable,
            formula,
        } => Formula::QuantifiedFormula {
            quantifier,
            variable,
            formula: linearize(*formula)?.into(),
        },
    })
}

pub fn linearize_term(term: Term) -> Result<Term, LinearizeError> {
    Ok(match term {
        x @ (Term::Constant(_) | Term::Variable(_) | Term::Product { .. }) => x,
        Term::UnaryOperation {
            op: UnaryOperator::Negative,
            arg,
        } => negate(linearize_term(*arg)?),
        Term::BinaryOperation {
            op: op @ (BinaryOperator::Add | BinaryOperator::Subtract),
            lhs,
            rhs,
        } => {
            let lhs = linearize_term(*lhs)?;
            let rhs = linearize_term(*rhs)?;
            match (op, lhs, rhs) {
                (BinaryOperator::Add, Term::Constant(lhs), Term::Constant(rhs)) => {
                    Term::Constant(lhs + rhs)
                }
                (BinaryOperator::Subtract, Term::Constant(lhs), Term::Constant(rhs)) => {
                    Term::Constant(lhs - rhs)
                }
                (op, lhs, rhs) => Term::BinaryOperation {
                    op,
                    lhs: lhs.into(),
                    rhs: rhs.into(),
                },
            }
        }
        Term::BinaryOperation {
            op: BinaryOperator::Multiply,
            lhs,
            rhs,
        } => {
            let lhs = linearize_term(*lhs)?;
            let rhs = linearize_term(*rhs)?;
            match (lhs, rhs) {
                (Term::Constant(factor), term) | (term, Term::Constant(factor)) => {
                    scale(factor, term)
                }
                (lhs, rhs) => return Err(LinearizeError::NonlinearProduct(lhs, rhs)),
            }
        }
        Term::BinaryOperation {
            op: BinaryOperator::Divide,
            lhs,
            rhs,
        } => {
            let lhs = linearize_term(*lhs)?;
            match linearize_term(*rhs)? {
                Term::Constant(divisor) => {
                    if divisor.is_zero() {
                        return Err(LinearizeError::DivisionByZero);
                    }
                    scale(Rational::ONE / divisor, lhs)
                }
                rhs => return Err(LinearizeError::NonconstantDivisor(rhs)),
            }
        }
    })
}

fn negate(term: Term) -> Term {
    match term {
        Term::Constant(constant) => Term::Constant(-constant),
        Term::Variable(variable) => Term::product(-Rational::ONE, variable),
        Term::Product {
            coefficient,
            variable,
        } => Term::product(-coefficient, variable),
        Term::BinaryOperation {
            op: BinaryOperator::Add,
            lhs,
            rhs,
        } => Term::BinaryOperation {
            op: BinaryOperator::Add,
            lhs: negate(*lhs).into(),
            rhs: negate(*rhs).into(),
        },
        Term::BinaryOperation {
            op: BinaryOperator::Subtract,
            lhs,
            rhs,
        } => Term::BinaryOperation {
            op: BinaryOperator::Subtract,
            lhs: rhs,
            rhs: lhs,
        },
        _ => unreachable!("the term has already been linearized"),
    }
}

fn scale(factor: Rational, term: Term) -> Term {
    match term {
        Term::Constant(constant) => Term::Constant(factor * constant),
        Term::Variable(variable) => Term::product(factor, variable),
        Term::Product {
            coefficient,
            variable,
        } => Term::product(factor * coefficient, variable),
        Term::BinaryOperation {
            op: op @ (BinaryOperator::Add | BinaryOperator::Subtract),
            lhs,
            rhs,
        } => Term::BinaryOperation {
            op,
            lhs: scale(factor, *lhs).into(),
            rhs: scale(factor, *rhs).into(),
        },
        _ => unreachable!("the term has already been linearized"),
    }
}
