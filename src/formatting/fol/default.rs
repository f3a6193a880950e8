use {
    crate::{
        arithmetic::Rational,
        syntax_tree::{
            fol::{
                AtomicFormula, BinaryConnective, BinaryOperator, Comparison, Formula, Quantifier,
                Relation, Term, UnaryConnective, UnaryOperator,
            },
            Node,
        },
    },
    std::fmt::{self, Display, Formatter},
};

pub struct Format<'a, N: Node>(pub &'a N);

impl Display for Format<'_, UnaryOperator> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            UnaryOperator::Negative => write!(f, "-"),
        }
    }
}

impl Display for Format<'_, BinaryOperator> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
        }
    }
}

fn term_precedence(term: &Term) -> usize {
    match term {
        Term::Constant(_) | Term::Variable(_) => 2,
        Term::Product { .. } | Term::UnaryOperation { .. } => 1,
        Term::BinaryOperation {
            op: BinaryOperator::Multiply | BinaryOperator::Divide,
            ..
        } => 1,
        Term::BinaryOperation {
            op: BinaryOperator::Add | BinaryOperator::Subtract,
            ..
        } => 0,
    }
}

impl Display for Format<'_, Term> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parent = term_precedence(self.0);

        let wrap = |f: &mut Formatter<'_>, term: &Term, minimal: usize| -> fmt::Result {
            if term_precedence(term) < minimal {
                write!(f, "({})", Format(term))
            } else {
                write!(f, "{}", Format(term))
            }
        };

        match self.0 {
            Term::Constant(constant) => write!(f, "{constant}"),
            Term::Variable(variable) => write!(f, "{variable}"),
            Term::Product {
                coefficient,
                variable,
            } => {
                if *coefficient == Rational::ONE {
                    write!(f, "{variable}")
                } else if *coefficient == -Rational::ONE {
                    write!(f, "-{variable}")
                } else {
                    write!(f, "{coefficient}*{variable}")
                }
            }
            Term::UnaryOperation { op, arg } => {
                write!(f, "{}", Format(op))?;
                wrap(f, arg, parent)
            }
            Term::BinaryOperation { op, lhs, rhs } => {
                wrap(f, lhs, parent)?;
                write!(f, "{}", Format(op))?;
                // the right operand also needs parentheses on a precedence
                // tie, e.g. x-(y+z)
                wrap(f, rhs, parent + 1)
            }
        }
    }
}

impl Display for Format<'_, Relation> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Relation::Equal => write!(f, "="),
            Relation::NotEqual => write!(f, "!="),
            Relation::Less => write!(f, "<"),
            Relation::LessEqual => write!(f, "<="),
            Relation::Greater => write!(f, ">"),
            Relation::GreaterEqual => write!(f, ">="),
        }
    }
}

impl Display for Format<'_, Comparison> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            Format(&self.0.lhs),
            Format(&self.0.relation),
            Format(&self.0.rhs)
        )
    }
}

impl Display for Format<'_, AtomicFormula> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            AtomicFormula::Truth => write!(f, "T"),
            AtomicFormula::Falsity => write!(f, "F"),
            AtomicFormula::Comparison(comparison) => write!(f, "{}", Format(comparison)),
        }
    }
}

impl Display for Format<'_, Quantifier> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Quantifier::Forall => write!(f, "!"),
            Quantifier::Exists => write!(f, "?"),
        }
    }
}

fn formula_precedence(formula: &Formula) -> usize {
    match formula {
        Formula::QuantifiedFormula { .. } => 0,
        Formula::BinaryFormula {
            connective: BinaryConnective::Equivalence,
            ..
        } => 1,
        Formula::BinaryFormula {
            connective: BinaryConnective::Implication,
            ..
        } => 2,
        Formula::BinaryFormula {
            connective: BinaryConnective::Disjunction,
            ..
        } => 3,
        Formula::BinaryFormula {
            connective: BinaryConnective::Conjunction,
            ..
        } => 4,
        Formula::UnaryFormula {
            connective: UnaryConnective::Negation,
            ..
        } => 5,
        Formula::AtomicFormula(_) => 6,
    }
}

impl Display for Format<'_, Formula> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parent = formula_precedence(self.0);

        let wrap = |f: &mut Formatter<'_>, formula: &Formula, minimal: usize| -> fmt::Result {
            if formula_precedence(formula) < minimal {
                write!(f, "({})", Format(formula))
            } else {
                write!(f, "{}", Format(formula))
            }
        };

        match self.0 {
            Formula::AtomicFormula(atomic) => write!(f, "{}", Format(atomic)),
            Formula::UnaryFormula {
                connective: UnaryConnective::Negation,
                formula,
            } => {
                write!(f, "~")?;
                wrap(f, formula, parent)
            }
            Formula::BinaryFormula {
                connective,
                lhs,
                rhs,
            } => {
                let (operator, left_minimal, right_minimal) = match connective {
                    BinaryConnective::Conjunction => (" & ", parent, parent),
                    BinaryConnective::Disjunction => (" | ", parent, parent),
                    // right-associative connectives need parentheses around
                    // an equal-precedence left operand, e.g. (a => b) => c
                    BinaryConnective::Implication => (" => ", parent + 1, parent),
                    BinaryConnective::Equivalence => (" <=> ", parent + 1, parent),
                };
                wrap(f, lhs, left_minimal)?;
                write!(f, "{operator}")?;
                wrap(f, rhs, right_minimal)
            }
            Formula::QuantifiedFormula {
                quantifier,
                variable,
                formula,
            } => {
                write!(f, "{}{variable}.", Format(quantifier))?;
                wrap(f, formula, parent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::syntax_tree::fol::{Formula, Term};

    #[test]
    fn format_terms() {
        for (src, target) in [
            ("2*x", "2*x"),
            ("x + y - z", "x+y-z"),
            ("x - (y + z)", "x-(y+z)"),
            ("(x + y) - z", "x+y-z"),
            ("2 * (3 - x)", "2*(3-x)"),
            ("-x", "-x"),
            ("-(x + 1)", "-(x+1)"),
            ("x / 2", "x/2"),
        ] {
            let term: Term = src.parse().unwrap();
            assert_eq!(term.to_string(), target, "formatting `{src}`");
        }
    }

    #[test]
    fn format_formulas() {
        for (src, target) in [
            ("x < y", "x<y"),
            ("T & F", "T & F"),
            ("x < y & y < z => x < z", "x<y & y<z => x<z"),
            ("(x < y | y < z) & x = z", "(x<y | y<z) & x=z"),
            ("~x = y", "~x=y"),
            ("~(x = y & T)", "~(x=y & T)"),
            ("!x.?y.x < y", "!x.?y.x<y"),
            ("!x.x < y & y < z", "!x.x<y & y<z"),
            ("(!x.x < y) & y < z", "(!x.x<y) & y<z"),
            ("(a = b => b = c) => a = c", "(a=b => b=c) => a=c"),
            ("a = b => b = c => a = c", "a=b => b=c => a=c"),
            ("a = a <=> b = b", "a=a <=> b=b"),
        ] {
            let formula: Formula = src.parse().unwrap();
            assert_eq!(formula.to_string(), target, "formatting `{src}`");
        }
    }
}
