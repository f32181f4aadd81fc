use text_size::TextRange;
use uast_errors::Diagnostic;
use uast_syntax::SyntaxKind::*;
use uast_syntax::ast::{
    ArrayType, ChanDir, ChanType, Ellipsis, Expr, Field, FieldList, FuncType, Ident,
    InterfaceType, MapType, ParenExpr, SelectorExpr, StarExpr, StructType,
};

use super::{basic_lit, exprs, ident, ident_list};
use crate::parser::{ParseResult, Parser};

pub(crate) fn ty(p: &mut Parser<'_>) -> ParseResult<Expr> {
    try_ty(p)?.ok_or_else(|| p.error_expected("type"))
}

pub(crate) fn try_ty(p: &mut Parser<'_>) -> ParseResult<Option<Expr>> {
    let ty = match p.peek_kind() {
        NAME => type_name(p)?,
        LEFT_BRACKET => array_or_slice_type(p)?,
        STRUCT_KW => struct_type(p)?,
        STAR => {
            let star = p.advance().range.start();
            Expr::Star(Box::new(StarExpr { star, x: ty(p)? }))
        }
        FUNC_KW => {
            let func = p.advance().range.start();
            let (params, results) = signature(p)?;
            Expr::FuncType(Box::new(FuncType { func: Some(func), params, results }))
        }
        INTERFACE_KW => interface_type(p)?,
        MAP_KW => map_type(p)?,
        CHAN_KW | ARROW => chan_type(p)?,
        LEFT_PAREN => {
            let lparen = p.advance().range.start();
            let x = ty(p)?;
            let rparen = p.expect(RIGHT_PAREN)?;
            Expr::Paren(Box::new(ParenExpr { lparen, x, rparen }))
        }
        _ => return Ok(None),
    };
    Ok(Some(ty))
}

/// `T` or the qualified `pkg.T`.
pub(crate) fn type_name(p: &mut Parser<'_>) -> ParseResult<Expr> {
    let name = ident(p)?;
    if p.at(DOT) && p.nth_kind(1) == NAME {
        p.advance();
        let sel = ident(p)?;
        return Ok(Expr::Selector(Box::new(SelectorExpr { x: Expr::Ident(name), sel })));
    }
    Ok(Expr::Ident(name))
}

fn array_or_slice_type(p: &mut Parser<'_>) -> ParseResult<Expr> {
    let lbrack = p.expect(LEFT_BRACKET)?;
    let len = match p.peek_kind() {
        RIGHT_BRACKET => None,
        ELLIPSIS => {
            let pos = p.advance().range.start();
            Some(Expr::Ellipsis(Box::new(Ellipsis { pos, elt: None })))
        }
        _ => {
            p.expr_level += 1;
            let len = exprs::expr(p);
            p.expr_level -= 1;
            Some(len?)
        }
    };
    p.expect(RIGHT_BRACKET)?;
    let elt = ty(p)?;
    Ok(Expr::ArrayType(Box::new(ArrayType { lbrack, len, elt })))
}

fn map_type(p: &mut Parser<'_>) -> ParseResult<Expr> {
    let map_pos = p.expect(MAP_KW)?;
    p.expect(LEFT_BRACKET)?;
    let key = ty(p)?;
    p.expect(RIGHT_BRACKET)?;
    let value = ty(p)?;
    Ok(Expr::MapType(Box::new(MapType { map_pos, key, value })))
}

pub(crate) fn chan_type(p: &mut Parser<'_>) -> ParseResult<Expr> {
    let (begin, arrow, dir) = if p.at(ARROW) {
        let arrow = p.advance().range.start();
        p.expect(CHAN_KW)?;
        (arrow, Some(arrow), ChanDir::Recv)
    } else {
        let begin = p.expect(CHAN_KW)?;
        match p.at(ARROW).then(|| p.advance().range.start()) {
            Some(arrow) => (begin, Some(arrow), ChanDir::Send),
            None => (begin, None, ChanDir::Both),
        }
    };
    let value = ty(p)?;
    Ok(Expr::ChanType(Box::new(ChanType { begin, arrow, dir, value })))
}

fn struct_type(p: &mut Parser<'_>) -> ParseResult<Expr> {
    let struct_pos = p.expect(STRUCT_KW)?;
    let opening = p.expect(LEFT_BRACE)?;
    let mut list = Vec::new();
    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        list.push(field_decl(p)?);
        p.expect_semicolon()?;
    }
    let closing = p.expect(RIGHT_BRACE)?;

    let fields = FieldList { opening: Some(opening), list, closing: Some(closing) };
    Ok(Expr::StructType(Box::new(StructType { struct_pos, fields })))
}

fn field_decl(p: &mut Parser<'_>) -> ParseResult<Field> {
    let (names, ty) = match p.peek_kind() {
        STAR => {
            let star = p.advance().range.start();
            let x = type_name(p)?;
            (Vec::new(), Expr::Star(Box::new(StarExpr { star, x })))
        }
        NAME if matches!(p.nth_kind(1), DOT | STRING | SEMICOLON | RIGHT_BRACE) => {
            (Vec::new(), type_name(p)?)
        }
        NAME => {
            let names = ident_list(p)?;
            (names, ty(p)?)
        }
        _ => return Err(p.error_expected("field name or embedded type")),
    };
    let tag = if p.at(STRING) { Some(basic_lit(p)?) } else { None };
    Ok(Field { names, ty, tag })
}

fn interface_type(p: &mut Parser<'_>) -> ParseResult<Expr> {
    let interface_pos = p.expect(INTERFACE_KW)?;
    let opening = p.expect(LEFT_BRACE)?;
    let mut list = Vec::new();
    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        list.push(method_spec(p)?);
        p.expect_semicolon()?;
    }
    let closing = p.expect(RIGHT_BRACE)?;

    let methods = FieldList { opening: Some(opening), list, closing: Some(closing) };
    Ok(Expr::InterfaceType(Box::new(InterfaceType { interface_pos, methods })))
}

fn method_spec(p: &mut Parser<'_>) -> ParseResult<Field> {
    if p.at(NAME) && p.nth_kind(1) == LEFT_PAREN {
        let name = ident(p)?;
        let (params, results) = signature(p)?;
        let ty = Expr::FuncType(Box::new(FuncType { func: None, params, results }));
        return Ok(Field { names: vec![name], ty, tag: None });
    }
    if !p.at(NAME) {
        return Err(p.error_expected("method or embedded interface"));
    }
    Ok(Field { names: Vec::new(), ty: type_name(p)?, tag: None })
}

pub(crate) fn signature(p: &mut Parser<'_>) -> ParseResult<(FieldList, Option<FieldList>)> {
    let params = parameters(p)?;
    let results = if p.at(LEFT_PAREN) {
        Some(parameters(p)?)
    } else {
        try_ty(p)?.map(|ty| FieldList {
            opening: None,
            list: vec![Field { names: Vec::new(), ty, tag: None }],
            closing: None,
        })
    };
    Ok((params, results))
}

/// A parenthesized parameter list.
///
/// Entries are read as types first. If a type follows the first run of
/// entries, that run was a list of names and every later group is
/// `names Type`; otherwise all entries are anonymous parameter types.
pub(crate) fn parameters(p: &mut Parser<'_>) -> ParseResult<FieldList> {
    let opening = p.expect(LEFT_PAREN)?;
    let mut list = Vec::new();

    if !p.at(RIGHT_PAREN) {
        let mut entries = Vec::new();
        loop {
            entries.push(var_type(p)?);
            if !p.eat(COMMA) || p.at(RIGHT_PAREN) {
                break;
            }
        }

        match try_var_type(p)? {
            Some(ty) => {
                let names = entries
                    .into_iter()
                    .map(|entry| match entry {
                        Expr::Ident(name) => Ok(name),
                        other => Err(Diagnostic::error(
                            "mixed named and unnamed parameters",
                            TextRange::new(other.start(), other.end()),
                        )),
                    })
                    .collect::<ParseResult<Vec<Ident>>>()?;
                list.push(Field { names, ty, tag: None });

                while p.eat(COMMA) && !p.at(RIGHT_PAREN) {
                    let names = ident_list(p)?;
                    let ty = var_type(p)?;
                    list.push(Field { names, ty, tag: None });
                }
            }
            None => {
                list.extend(entries.into_iter().map(|ty| Field { names: Vec::new(), ty, tag: None }));
            }
        }
    }

    let closing = p.expect(RIGHT_PAREN)?;
    Ok(FieldList { opening: Some(opening), list, closing: Some(closing) })
}

fn var_type(p: &mut Parser<'_>) -> ParseResult<Expr> {
    try_var_type(p)?.ok_or_else(|| p.error_expected("type"))
}

/// A parameter type, which may be variadic.
fn try_var_type(p: &mut Parser<'_>) -> ParseResult<Option<Expr>> {
    if p.at(ELLIPSIS) {
        let pos = p.advance().range.start();
        let elt = ty(p)?;
        return Ok(Some(Expr::Ellipsis(Box::new(Ellipsis { pos, elt: Some(elt) }))));
    }
    try_ty(p)
}
