pub mod fol;

use {
    pest::{
        error::{Error, ErrorVariant},
        iterators::{Pair, Pairs},
        Parser, Position, RuleType,
    },
    std::any::type_name,
};

pub trait PestParser {
    type Node;

    type InternalParser: Parser<Self::Rule>;
    type Rule: RuleType;
    const RULE: Self::Rule;

    fn translate_pair(pair: Pair<'_, Self::Rule>) -> Self::Node;

    fn translate_pairs(mut pairs: Pairs<'_, Self::Rule>) -> Self::Node {
        let pair = pairs.next().unwrap_or_else(|| Self::report_missing_pair());
        if let Some(pair) = pairs.next() {
            Self::report_unexpected_pair(pair)
        }
        Self::translate_pair(pair)
    }

    fn parse(input: &str) -> Result<Self::Node, Error<Self::Rule>> {
        let pairs = Self::InternalParser::parse(Self::RULE, input)?;

        if pairs.as_str() != input {
            return Err(Error::new_from_pos(
                ErrorVariant::CustomError {
                    message: String::from("expected EOI"),
                },
                Position::new(input, pairs.as_str().len())
                    .expect("the end of a parse is a valid position"),
            ));
        }

        Ok(Self::translate_pairs(pairs))
    }

    fn report_missing_pair() -> ! {
        panic!("in {}: no pair found", type_name::<Self::Node>())
    }

    fn report_unexpected_pair(pair: Pair<'_, Self::Rule>) -> ! {
        panic!(
            "in {}: unexpected pair found: {pair}",
            type_name::<Self::Node>()
        )
    }
}
