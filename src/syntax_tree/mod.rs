pub mod fol;

use std::fmt::{Debug, Display};

pub trait Node: Clone + Debug + Display + Eq + PartialEq {}

macro_rules! impl_node {
    ($node: path, $parser: path) => {
        impl crate::syntax_tree::Node for $node {}

        impl std::fmt::Display for $node {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&crate::formatting::fol::default::Format(self), f)
            }
        }

        impl std::str::FromStr for $node {
            type Err = pest::error::Error<<$parser as crate::parsing::PestParser>::Rule>;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$parser as crate::parsing::PestParser>::parse(s)
            }
        }
    };
}

pub(crate) use impl_node;
