//! The extraction-and-cleaning pipeline stages.
//!
//! Control flow for one document: decoded text feeds both the comment
//! extractor and [`clean_body`]; the cleaned text goes through
//! [`parse_body`]; [`assemble`] merges the parsed rows with the
//! extracted comments into the final table.

mod assemble;
mod clean;
mod parse;

pub use assemble::assemble;
pub use clean::clean_body;
pub use parse::parse_body;
