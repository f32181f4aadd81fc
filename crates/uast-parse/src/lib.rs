//! Recursive-descent parser for Go source files.
//!
//! Produces the positioned native tree of `uast_syntax::ast`. Parsing stops
//! at the first syntax error, which is returned as a diagnostic.

use uast_errors::Diagnostic;
use uast_syntax::ast;

mod grammar;
mod parser;
#[cfg(test)]
mod tests;

pub fn parse(text: &str) -> Result<ast::File, Diagnostic> {
    let mut parser = parser::Parser::new(text);
    grammar::items::file(&mut parser)
}
