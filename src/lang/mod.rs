/*!
# Rust Language Module

This Rust module validates the box geometry of BoxScript source,
tokenizes it into atoms, and rebuilds the nested tree of boxes and lines.

*/

#[macro_use]
mod error;
mod block;
mod grid;
mod lex;
mod line;
mod parse;

pub mod ast;
pub mod glyph;
pub mod token;

pub use ast::{Block, Node, Script};
pub use block::build;
pub use error::Error;
pub use error::ErrorCode;
pub use grid::{validate, Grid};
pub use lex::lex;
pub use line::{Line, ParsedLine, Statement};
pub use parse::{parse, postfix};
pub use token::Atom;

/// Validate, tokenize and build a program.
pub fn script(source: &str) -> Result<Script, Error> {
    validate(source)?;
    build(&lex(source))
}

/// Row of the source text, counted from zero.
pub type LineNumber = Option<usize>;
pub type Column = std::ops::Range<usize>;

#[cfg(test)]
mod tests;
