use {
    crate::{
        arithmetic::Rational,
        constraints::{Constraint, ConstraintConjunction, Relation as ConstraintRelation},
        syntax_tree::fol::{
            AtomicFormula, BinaryConnective, BinaryOperator, Comparison, Formula, Relation, Term,
        },
    },
    indexmap::IndexSet,
};

/// A bijection between variable symbols and dense column indices.
///
/// Symbols are assigned columns in insertion order; removing a symbol frees
/// its column. The quantifier-elimination driver adds and removes symbols in
/// a stack discipline, so a freed column is never pulled out from under a
/// live one.
#[derive(Clone, Debug, Default)]
pub struct VariableMapping {
    symbols: IndexSet<String>,
}

impl VariableMapping {
    pub fn new() -> VariableMapping {
        VariableMapping::default()
    }

    pub fn add(&mut self, symbol: &str) {
        self.symbols.insert(symbol.to_string());
    }

    pub fn remove(&mut self, symbol: &str) {
        self.symbols.shift_remove(symbol);
    }

    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    pub fn index(&self, symbol: &str) -> Option<usize> {
        self.symbols.get_index_of(symbol)
    }

    pub fn symbol(&self, index: usize) -> Option<&str> {
        self.symbols.get_index(index).map(String::as_str)
    }
}

/// Translate a quantifier-free formula in disjunctive normal form over
/// `=`/`<`/`>` atoms into the list of its constraint conjunctions.
pub fn formula_to_conjunctions(
    formula: &Formula,
    mapping: &VariableMapping,
) -> Vec<ConstraintConjunction> {
    match formula {
        Formula::BinaryFormula {
            connective: BinaryConnective::Disjunction,
            lhs,
            rhs,
        } => {
            let mut conjunctions = formula_to_conjunctions(lhs, mapping);
            conjunctions.append(&mut formula_to_conjunctions(rhs, mapping));
            conjunctions
        }
        x => {
            let conjunction = ConstraintConjunction::new(conjunction_to_constraints(x, mapping))
                .expect("constraints built over one mapping share their arity");
            vec![conjunction]
        }
    }
}

fn conjunction_to_constraints(formula: &Formula, mapping: &VariableMapping) -> Vec<Constraint> {
    match formula {
        Formula::AtomicFormula(AtomicFormula::Comparison(comparison)) => {
            vec![comparison_to_constraint(comparison, mapping)]
        }
        Formula::BinaryFormula {
            connective: BinaryConnective::Conjunction,
            lhs,
            rhs,
        } => {
            let mut constraints = conjunction_to_constraints(lhs, mapping);
            constraints.append(&mut conjunction_to_constraints(rhs, mapping));
            constraints
        }
        x => unreachable!("`{x}` cannot occur within a normalized conjunction"),
    }
}

fn comparison_to_constraint(comparison: &Comparison, mapping: &VariableMapping) -> Constraint {
    let relation = match comparison.relation {
        Relation::Equal => ConstraintRelation::Equal,
        Relation::Less => ConstraintRelation::Less,
        Relation::Greater => ConstraintRelation::Greater,
        x => unreachable!("the comparator `{x}` has not been eliminated"),
    };

    let mut lhs = vec![Rational::ZERO; mapping.size()];
    let mut rhs = Rational::ZERO;
    collect_coefficients(&comparison.lhs, &mut lhs, &mut rhs, mapping, false);
    collect_coefficients(&comparison.rhs, &mut lhs, &mut rhs, mapping, true);

    Constraint::new(lhs, relation, rhs)
}

/// Accumulate the coefficients of a linear term into a constraint row.
///
/// Variables contribute to the left-hand side and constants to the
/// right-hand side, with signs arranged so that the row reads
/// `lhs · x rel rhs`; `flip_sign` is set while walking the right operand of
/// the comparison and flipped again under the right operand of a
/// subtraction.
fn collect_coefficients(
    term: &Term,
    lhs: &mut [Rational],
    rhs: &mut Rational,
    mapping: &VariableMapping,
    flip_sign: bool,
) {
    match term {
        Term::Constant(constant) => {
            *rhs = if flip_sign {
                *rhs + *constant
            } else {
                *rhs - *constant
            };
        }
        Term::Variable(variable) => {
            let column = mapping
                .index(variable)
                .expect("every variable is bound by the enclosing prefix");
            lhs[column] = if flip_sign {
                lhs[column] - Rational::ONE
            } else {
                lhs[column] + Rational::ONE
            };
        }
        Term::Product {
            coefficient,
            variable,
        } => {
            let column = mapping
                .index(variable)
                .expect("every variable is bound by the enclosing prefix");
            lhs[column] = if flip_sign {
                lhs[column] - *coefficient
            } else {
                lhs[column] + *coefficient
            };
        }
        Term::BinaryOperation {
            op: BinaryOperator::Add,
            lhs: left,
            rhs: right,
        } => {
            collect_coefficients(left, lhs, rhs, mapping, flip_sign);
            collect_coefficients(right, lhs, rhs, mapping, flip_sign);
        }
        Term::BinaryOperation {
            op: BinaryOperator::Subtract,
            lhs: left,
            rhs: right,
        } => {
            collect_coefficients(left, lhs, rhs, mapping, flip_sign);
            collect_coefficients(right, lhs, rhs, mapping, !flip_sign);
        }
        x => unreachable!("`{x}` cannot occur within a linearized term"),
    }
}

/// Translate a list of constraint conjunctions back into a formula: a
/// disjunction of conjunctions of atoms. An empty list denotes falsity, an
/// empty conjunction truth.
pub fn conjunctions_to_formula(
    conjunctions: &[ConstraintConjunction],
    mapping: &VariableMapping,
) -> Formula {
    Formula::disjoin(
        conjunctions
            .iter()
            .map(|conjunction| conjunction_to_formula(conjunction, mapping)),
    )
}

fn conjunction_to_formula(
    conjunction: &ConstraintConjunction,
    mapping: &VariableMapping,
) -> Formula {
    Formula::conjoin(
        conjunction
            .constraints()
            .iter()
            .map(|constraint| constraint_to_formula(constraint, mapping)),
    )
}

fn constraint_to_formula(constraint: &Constraint, mapping: &VariableMapping) -> Formula {
    let mut lhs = Term::Constant(Rational::ZERO);
    for (column, &coefficient) in constraint.lhs.iter().enumerate() {
        let variable = mapping
            .symbol(column)
            .expect("every column is bound by the enclosing prefix")
            .to_string();

        if coefficient.is_positive() {
            lhs = Term::BinaryOperation {
                op: BinaryOperator::Add,
                lhs: lhs.into(),
                rhs: Term::product(coefficient, variable).into(),
            };
        } else if coefficient.is_negative() {
            lhs = Term::BinaryOperation {
                op: BinaryOperator::Subtract,
                lhs: lhs.into(),
                rhs: Term::product(-coefficient, variable).into(),
            };
        }
    }

    let relation = match constraint.relation {
        ConstraintRelation::Equal => Relation::Equal,
        ConstraintRelation::Less => Relation::Less,
        ConstraintRelation::Greater => Relation::Greater,
    };

    Formula::AtomicFormula(AtomicFormula::Comparison(Comparison {
        lhs,
        relation,
        rhs: Term::Constant(constraint.rhs),
    }))
}
