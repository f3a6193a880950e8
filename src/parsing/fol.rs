use crate::{
    arithmetic::Rational,
    parsing::PestParser,
    syntax_tree::fol::{
        AtomicFormula, BinaryConnective, BinaryOperator, Comparison, Formula, Quantifier,
        Relation, Term, UnaryConnective, UnaryOperator,
    },
};

pub use internal::Rule;

mod internal {
    use pest::pratt_parser::PrattParser;

    #[derive(pest_derive::Parser)]
    #[grammar = "parsing/fol/grammar.pest"]
    pub struct Parser;

    lazy_static::lazy_static! {
        pub static ref TERM_PRATT_PARSER: PrattParser<Rule> = {
            use pest::pratt_parser::{Assoc::*, Op};
            use Rule::*;

            PrattParser::new()
                .op(Op::infix(add, Left) | Op::infix(subtract, Left))
                .op(Op::infix(multiply, Left) | Op::infix(divide, Left))
                .op(Op::prefix(negative))
        };
    }
}

pub struct UnaryOperatorParser;

impl PestParser for UnaryOperatorParser {
    type Node = UnaryOperator;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::unary_operator;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::negative => UnaryOperator::Negative,
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct BinaryOperatorParser;

impl PestParser for BinaryOperatorParser {
    type Node = BinaryOperator;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::binary_operator;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::add => BinaryOperator::Add,
            internal::Rule::subtract => BinaryOperator::Subtract,
            internal::Rule::multiply => BinaryOperator::Multiply,
            internal::Rule::divide => BinaryOperator::Divide,
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct TermParser;

impl PestParser for TermParser {
    type Node = Term;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::term;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        if pair.as_rule() != internal::Rule::term {
            Self::report_unexpected_pair(pair)
        }

        internal::TERM_PRATT_PARSER
            .map_primary(|primary| match primary.as_rule() {
                internal::Rule::term => TermParser::translate_pair(primary),
                internal::Rule::numeral => Term::Constant(Rational::from(
                    primary.as_str().parse::<i64>().unwrap(),
                )),
                internal::Rule::variable => Term::Variable(primary.as_str().into()),
                _ => Self::report_unexpected_pair(primary),
            })
            .map_prefix(|op, arg| Term::UnaryOperation {
                op: UnaryOperatorParser::translate_pair(op),
                arg: Box::new(arg),
            })
            .map_infix(|lhs, op, rhs| Term::BinaryOperation {
                op: BinaryOperatorParser::translate_pair(op),
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            })
            .parse(pair.into_inner())
    }
}

pub struct RelationParser;

impl PestParser for RelationParser {
    type Node = Relation;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::relation;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::relation => Self::translate_pairs(pair.into_inner()),
            internal::Rule::equal => Relation::Equal,
            internal::Rule::not_equal => Relation::NotEqual,
            internal::Rule::less => Relation::Less,
            internal::Rule::less_equal => Relation::LessEqual,
            internal::Rule::greater => Relation::Greater,
            internal::Rule::greater_equal => Relation::GreaterEqual,
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct ComparisonParser;

impl PestParser for ComparisonParser {
    type Node = Comparison;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::comparison;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        if pair.as_rule() != internal::Rule::comparison {
            Self::report_unexpected_pair(pair)
        }

        let mut pairs = pair.into_inner();

        let lhs = TermParser::translate_pair(
            pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
        );
        let relation = RelationParser::translate_pair(
            pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
        );
        let rhs = TermParser::translate_pair(
            pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
        );

        Comparison { lhs, relation, rhs }
    }
}

pub struct AtomicFormulaParser;

impl PestParser for AtomicFormulaParser {
    type Node = AtomicFormula;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::atomic_formula;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::atomic_formula => Self::translate_pairs(pair.into_inner()),
            internal::Rule::truth => AtomicFormula::Truth,
            internal::Rule::falsity => AtomicFormula::Falsity,
            internal::Rule::comparison => {
                AtomicFormula::Comparison(ComparisonParser::translate_pair(pair))
            }
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct QuantifierParser;

impl PestParser for QuantifierParser {
    type Node = Quantifier;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::quantifier;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::quantifier => Self::translate_pairs(pair.into_inner()),
            internal::Rule::forall => Quantifier::Forall,
            internal::Rule::exists => Quantifier::Exists,
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

pub struct FormulaParser;

impl FormulaParser {
    fn translate_left_associative(
        pairs: pest::iterators::Pairs<'_, internal::Rule>,
        connective: BinaryConnective,
    ) -> Formula {
        pairs
            .map(Self::translate_pair)
            .reduce(|lhs, rhs| Formula::BinaryFormula {
                connective,
                lhs: lhs.into(),
                rhs: rhs.into(),
            })
            .unwrap_or_else(|| Self::report_missing_pair())
    }

    fn translate_right_associative(
        pairs: pest::iterators::Pairs<'_, internal::Rule>,
        connective: BinaryConnective,
    ) -> Formula {
        pairs
            .map(Self::translate_pair)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .reduce(|rhs, lhs| Formula::BinaryFormula {
                connective,
                lhs: lhs.into(),
                rhs: rhs.into(),
            })
            .unwrap_or_else(|| Self::report_missing_pair())
    }
}

impl PestParser for FormulaParser {
    type Node = Formula;

    type InternalParser = internal::Parser;
    type Rule = internal::Rule;
    const RULE: internal::Rule = internal::Rule::formula;

    fn translate_pair(pair: pest::iterators::Pair<'_, Self::Rule>) -> Self::Node {
        match pair.as_rule() {
            internal::Rule::formula => Self::translate_pairs(pair.into_inner()),
            internal::Rule::equivalence => Self::translate_right_associative(
                pair.into_inner(),
                BinaryConnective::Equivalence,
            ),
            internal::Rule::implication => Self::translate_right_associative(
                pair.into_inner(),
                BinaryConnective::Implication,
            ),
            internal::Rule::disjunction => Self::translate_left_associative(
                pair.into_inner(),
                BinaryConnective::Disjunction,
            ),
            internal::Rule::conjunction => Self::translate_left_associative(
                pair.into_inner(),
                BinaryConnective::Conjunction,
            ),
            internal::Rule::negation => Formula::UnaryFormula {
                connective: UnaryConnective::Negation,
                formula: Self::translate_pairs(pair.into_inner()).into(),
            },
            internal::Rule::quantification => {
                let mut pairs = pair.into_inner();

                let quantifier = QuantifierParser::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );
                let variable = pairs
                    .next()
                    .unwrap_or_else(|| Self::report_missing_pair())
                    .as_str()
                    .to_string();
                let formula = Self::translate_pair(
                    pairs.next().unwrap_or_else(|| Self::report_missing_pair()),
                );

                Formula::QuantifiedFormula {
                    quantifier,
                    variable,
                    formula: formula.into(),
                }
            }
            internal::Rule::atomic_formula
            | internal::Rule::truth
            | internal::Rule::falsity
            | internal::Rule::comparison => {
                Formula::AtomicFormula(AtomicFormulaParser::translate_pair(pair))
            }
            _ => Self::report_unexpected_pair(pair),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::syntax_tree::fol::{
        AtomicFormula, BinaryConnective, BinaryOperator, Comparison, Formula, Quantifier,
        Relation, Term,
    };

    fn atom(lhs: Term, relation: Relation, rhs: Term) -> Formula {
        Formula::AtomicFormula(AtomicFormula::Comparison(Comparison { lhs, relation, rhs }))
    }

    fn constant(n: i64) -> Term {
        Term::Constant(n.into())
    }

    fn variable(name: &str) -> Term {
        Term::Variable(name.into())
    }

    #[test]
    fn parse_atoms() {
        assert_eq!(
            "x < y".parse::<Formula>().unwrap(),
            atom(variable("x"), Relation::Less, variable("y"))
        );
        assert_eq!(
            "x != 3".parse::<Formula>().unwrap(),
            atom(variable("x"), Relation::NotEqual, constant(3))
        );
        assert_eq!("T".parse::<Formula>().unwrap(), Formula::truth());
        assert_eq!("F".parse::<Formula>().unwrap(), Formula::falsity());
    }

    #[test]
    fn parse_terms() {
        assert_eq!(
            "2*x + 1 = y".parse::<Formula>().unwrap(),
            atom(
                Term::BinaryOperation {
                    op: BinaryOperator::Add,
                    lhs: Term::BinaryOperation {
                        op: BinaryOperator::Multiply,
                        lhs: constant(2).into(),
                        rhs: variable("x").into(),
                    }
                    .into(),
                    rhs: constant(1).into(),
                },
                Relation::Equal,
                variable("y")
            )
        );
    }

    #[test]
    fn parse_connective_precedence() {
        assert_eq!(
            "a < b & b < c => a < c".parse::<Formula>().unwrap(),
            Formula::BinaryFormula {
                connective: BinaryConnective::Implication,
                lhs: atom(variable("a"), Relation::Less, variable("b"))
                    .and(atom(variable("b"), Relation::Less, variable("c")))
                    .into(),
                rhs: atom(variable("a"), Relation::Less, variable("c")).into(),
            }
        );
    }

    #[test]
    fn parse_implication_right_associative() {
        assert_eq!(
            "a = b => b = c => a = c".parse::<Formula>().unwrap(),
            Formula::BinaryFormula {
                connective: BinaryConnective::Implication,
                lhs: atom(variable("a"), Relation::Equal, variable("b")).into(),
                rhs: Formula::BinaryFormula {
                    connective: BinaryConnective::Implication,
                    lhs: atom(variable("b"), Relation::Equal, variable("c")).into(),
                    rhs: atom(variable("a"), Relation::Equal, variable("c")).into(),
                }
                .into(),
            }
        );
    }

    #[test]
    fn parse_quantifier_scope() {
        // a quantifier captures the rest of the formula
        assert_eq!(
            "!x.x < y & y < z".parse::<Formula>().unwrap(),
            atom(variable("x"), Relation::Less, variable("y"))
                .and(atom(variable("y"), Relation::Less, variable("z")))
                .quantify(Quantifier::Forall, "x".into())
        );
        assert_eq!(
            "(!x.x < y) & y < z".parse::<Formula>().unwrap(),
            atom(variable("x"), Relation::Less, variable("y"))
                .quantify(Quantifier::Forall, "x".into())
                .and(atom(variable("y"), Relation::Less, variable("z")))
        );
    }

    #[test]
    fn parse_negation() {
        assert_eq!(
            "~x = y & ~~T".parse::<Formula>().unwrap(),
            atom(variable("x"), Relation::Equal, variable("y"))
                .negate()
                .and(Formula::truth().negate().negate())
        );
    }

    #[test]
    fn reject_invalid() {
        for input in [
            "",
            "x <",
            "x < y |",
            "3",
            "x + y",
            "!.x < y",
            "!3.x < y",
            "x << y",
            "(x < y",
            "x < y extra)",
        ] {
            assert!(
                input.parse::<Formula>().is_err(),
                "assertion failed: `{input}` parses"
            );
        }
    }
}
