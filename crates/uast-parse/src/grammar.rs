use uast_syntax::SyntaxKind::*;
use uast_syntax::ast::{BasicLit, Expr, Ident, LitKind};

use crate::parser::{ParseResult, Parser};

mod exprs;
pub(crate) mod items;
mod stmts;
mod types;

pub(crate) fn ident(p: &mut Parser<'_>) -> ParseResult<Ident> {
    if !p.at(NAME) {
        return Err(p.error_expected("identifier"));
    }
    let token = p.advance();
    Ok(Ident { pos: token.range.start(), name: p.text(token.range).to_owned() })
}

pub(crate) fn ident_list(p: &mut Parser<'_>) -> ParseResult<Vec<Ident>> {
    let mut list = vec![ident(p)?];
    while p.eat(COMMA) {
        list.push(ident(p)?);
    }
    Ok(list)
}

/// Raw strings keep no `\r`, the way Go's scanner stores them.
pub(crate) fn basic_lit(p: &mut Parser<'_>) -> ParseResult<BasicLit> {
    let kind = match p.peek_kind() {
        INT_NUMBER => LitKind::Int,
        FLOAT_NUMBER => LitKind::Float,
        IMAGINARY_NUMBER => LitKind::Imag,
        CHAR => LitKind::Char,
        STRING => LitKind::String,
        _ => return Err(p.error_expected("literal")),
    };
    let token = p.advance();
    let text = p.text(token.range);
    let value = if text.starts_with('`') { text.replace('\r', "") } else { text.to_owned() };
    Ok(BasicLit { pos: token.range.start(), kind, value })
}

pub(crate) fn expr_list(p: &mut Parser<'_>) -> ParseResult<Vec<Expr>> {
    let mut list = vec![exprs::expr(p)?];
    while p.eat(COMMA) {
        list.push(exprs::expr(p)?);
    }
    Ok(list)
}
