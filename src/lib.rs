pub mod arithmetic;
pub mod command_line;
pub mod constraints;
pub mod convenience;
pub mod eliminating;
pub mod evaluating;
pub mod formatting;
pub mod normalizing;
pub mod parsing;
pub mod proving;
pub mod syntax_tree;
pub mod translating;
