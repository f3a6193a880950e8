use {
    crate::{
        arithmetic::Rational,
        parsing::fol::{
            AtomicFormulaParser, BinaryOperatorParser, ComparisonParser, FormulaParser,
            QuantifierParser, RelationParser, TermParser, UnaryOperatorParser,
        },
        syntax_tree::impl_node,
    },
    std::collections::BTreeSet,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnaryOperator {
    Negative,
}

impl_node!(UnaryOperator, UnaryOperatorParser);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl_node!(BinaryOperator, BinaryOperatorParser);

/// A term of linear arithmetic.
///
/// `Multiply` and `Divide` nodes may only occur in freshly parsed terms;
/// linearization reduces them to `Product`, the restricted
/// coefficient-times-variable form every later stage works with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Term {
    Constant(Rational),
    Variable(String),
    Product {
        coefficient: Rational,
        variable: String,
    },
    UnaryOperation {
        op: UnaryOperator,
        arg: Box<Term>,
    },
    BinaryOperation {
        op: BinaryOperator,
        lhs: Box<Term>,
        rhs: Box<Term>,
    },
}

impl_node!(Term, TermParser);

impl Term {
    /// The canonical coefficient-variable product: a coefficient of one
    /// yields the bare variable.
    pub fn product(coefficient: Rational, variable: String) -> Term {
        if coefficient == Rational::ONE {
            Term::Variable(variable)
        } else {
            Term::Product {
                coefficient,
                variable,
            }
        }
    }

    pub fn variables(&self) -> BTreeSet<String> {
        match self {
            Term::Constant(_) => BTreeSet::new(),
            Term::Variable(variable)
            | Term::Product {
                variable,
                ..
            } => BTreeSet::from([variable.clone()]),
            Term::UnaryOperation { arg, .. } => arg.variables(),
            Term::BinaryOperation { lhs, rhs, .. } => {
                let mut variables = lhs.variables();
                variables.append(&mut rhs.variables());
                variables
            }
        }
    }

    pub fn rename_variable(self, from: &str, to: &str) -> Term {
        match self {
            x @ Term::Constant(_) => x,
            Term::Variable(variable) => {
                if variable == from {
                    Term::Variable(to.into())
                } else {
                    Term::Variable(variable)
                }
            }
            Term::Product {
                coefficient,
                variable,
            } => Term::Product {
                coefficient,
                variable: if variable == from {
                    to.into()
                } else {
                    variable
                },
            },
            Term::UnaryOperation { op, arg } => Term::UnaryOperation {
                op,
                arg: arg.rename_variable(from, to).into(),
            },
            Term::BinaryOperation { op, lhs, rhs } => Term::BinaryOperation {
                op,
                lhs: lhs.rename_variable(from, to).into(),
                rhs: rhs.rename_variable(from, to).into(),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl_node!(Relation, RelationParser);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comparison {
    pub lhs: Term,
    pub relation: Relation,
    pub rhs: Term,
}

impl_node!(Comparison, ComparisonParser);

impl Comparison {
    pub fn variables(&self) -> BTreeSet<String> {
        let mut variables = self.lhs.variables();
        variables.append(&mut self.rhs.variables());
        variables
    }

    pub fn rename_variable(self, from: &str, to: &str) -> Comparison {
        Comparison {
            lhs: self.lhs.rename_variable(from, to),
            relation: self.relation,
            rhs: self.rhs.rename_variable(from, to),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AtomicFormula {
    Truth,
    Falsity,
    Comparison(Comparison),
}

impl_node!(AtomicFormula, AtomicFormulaParser);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnaryConnective {
    Negation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryConnective {
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Quantifier {
    Forall,
    Exists,
}

impl_node!(Quantifier, QuantifierParser);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Formula {
    AtomicFormula(AtomicFormula),
    UnaryFormula {
        connective: UnaryConnective,
        formula: Box<Formula>,
    },
    BinaryFormula {
        connective: BinaryConnective,
        lhs: Box<Formula>,
        rhs: Box<Formula>,
    },
    QuantifiedFormula {
        quantifier: Quantifier,
        variable: String,
        formula: Box<Formula>,
    },
}

impl_node!(Formula, FormulaParser);

impl Formula {
    pub fn truth() -> Formula {
        Formula::AtomicFormula(AtomicFormula::Truth)
    }

    pub fn falsity() -> Formula {
        Formula::AtomicFormula(AtomicFormula::Falsity)
    }

    pub fn negate(self) -> Formula {
        Formula::UnaryFormula {
            connective: UnaryConnective::Negation,
            formula: self.into(),
        }
    }

    pub fn and(self, rhs: Formula) -> Formula {
        Formula::BinaryFormula {
            connective: BinaryConnective::Conjunction,
            lhs: self.into(),
            rhs: rhs.into(),
        }
    }

    pub fn or(self, rhs: Formula) -> Formula {
        Formula::BinaryFormula {
            connective: BinaryConnective::Disjunction,
            lhs: self.into(),
            rhs: rhs.into(),
        }
    }

    pub fn quantify(self, quantifier: Quantifier, variable: String) -> Formula {
        Formula::QuantifiedFormula {
            quantifier,
            variable,
            formula: self.into(),
        }
    }

    /// Turn a list of formulas into a left-leaning conjunction tree.
    pub fn conjoin(formulas: impl IntoIterator<Item = Formula>) -> Formula {
        formulas
            .into_iter()
            .reduce(Formula::and)
            .unwrap_or_else(Formula::truth)
    }

    /// Turn a list of formulas into a left-leaning disjunction tree.
    pub fn disjoin(formulas: impl IntoIterator<Item = Formula>) -> Formula {
        formulas
            .into_iter()
            .reduce(Formula::or)
            .unwrap_or_else(Formula::falsity)
    }

    pub fn free_variables(&self) -> BTreeSet<String> {
        match self {
            Formula::AtomicFormula(AtomicFormula::Truth | AtomicFormula::Falsity) => {
                BTreeSet::new()
            }
            Formula::AtomicFormula(AtomicFormula::Comparison(comparison)) => {
                comparison.variables()
            }
            Formula::UnaryFormula { formula, .. } => formula.free_variables(),
            Formula::BinaryFormula { lhs, rhs, .. } => {
                let mut variables = lhs.free_variables();
                variables.append(&mut rhs.free_variables());
                variables
            }
            Formula::QuantifiedFormula {
                variable, formula, ..
            } => {
                let mut variables = formula.free_variables();
                variables.remove(variable);
                variables
            }
        }
    }

    /// All variable symbols bound by some quantifier within the formula.
    pub fn quantified_variables(&self) -> BTreeSet<String> {
        match self {
            Formula::AtomicFormula(_) => BTreeSet::new(),
            Formula::UnaryFormula { formula, .. } => formula.quantified_variables(),
            Formula::BinaryFormula { lhs, rhs, .. } => {
                let mut variables = lhs.quantified_variables();
                variables.append(&mut rhs.quantified_variables());
                variables
            }
            Formula::QuantifiedFormula {
                variable, formula, ..
            } => {
                let mut variables = formula.quantified_variables();
                variables.insert(variable.clone());
                variables
            }
        }
    }

    /// Rename free occurrences of `from` to `to`, avoiding capture.
    ///
    /// A quantifier binding `to` is renamed to a fresh symbol before the
    /// substitution descends below it.
    pub fn rename_variable(self, from: &str, to: &str) -> Formula {
        match self {
            x @ Formula::AtomicFormula(AtomicFormula::Truth | AtomicFormula::Falsity) => x,
            Formula::AtomicFormula(AtomicFormula::Comparison(comparison)) => {
                Formula::AtomicFormula(AtomicFormula::Comparison(
                    comparison.rename_variable(from, to),
                ))
            }
            Formula::UnaryFormula {
                connective,
                formula,
            } => Formula::UnaryFormula {
                connective,
                formula: formula.rename_variable(from, to).into(),
            },
            Formula::BinaryFormula {
                connective,
                lhs,
                rhs,
            } => Formula::BinaryFormula {
                connective,
                lhs: lhs.rename_variable(from, to).into(),
                rhs: rhs.rename_variable(from, to).into(),
            },
            Formula::QuantifiedFormula {
                quantifier,
                variable,
                formula,
            } => {
                if variable == from {
                    Formula::QuantifiedFormula {
                        quantifier,
                        variable,
                        formula,
                    }
                } else if variable == to {
                    let fresh = fresh_variable(&variable, &BTreeSet::from([to.to_string()]));
                    let formula = formula.rename_variable(&variable, &fresh);
                    Formula::QuantifiedFormula {
                        quantifier,
                        variable: fresh,
                        formula: formula.rename_variable(from, to).into(),
                    }
                } else {
                    Formula::QuantifiedFormula {
                        quantifier,
                        variable,
                        formula: formula.rename_variable(from, to).into(),
                    }
                }
            }
        }
    }
}

/// Choose a variant of `base` that does not occur in `taken`: `base` itself
/// if available, else `base` with the smallest non-negative decimal suffix.
pub fn fresh_variable(base: &str, taken: &BTreeSet<String>) -> String {
    let mut candidate = base.to_string();
    let mut counter = 0;
    while taken.contains(&candidate) {
        candidate = format!("{base}{counter}");
        counter += 1;
    }
    candidate
}
