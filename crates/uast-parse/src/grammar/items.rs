use uast_syntax::SyntaxKind::*;
use uast_syntax::ast::{
    BasicLit, Decl, DeclKeyword, File, FuncDecl, FuncType, GenDecl, Ident, ImportSpec, LitKind,
    Spec, TypeSpec, ValueSpec,
};

use super::{basic_lit, expr_list, ident, ident_list, types};
use crate::parser::{ParseResult, Parser};

pub(crate) fn file(p: &mut Parser<'_>) -> ParseResult<File> {
    let package = p.expect(PACKAGE_KW)?;
    let name = ident(p)?;
    p.expect_semicolon()?;

    let mut decls = Vec::new();
    while !p.at(EOF) {
        decls.push(decl(p)?);
        p.expect_semicolon()?;
    }

    Ok(File { package, name, decls, comments: p.comment_groups(), size: p.len() })
}

fn decl(p: &mut Parser<'_>) -> ParseResult<Decl> {
    match p.peek_kind() {
        FUNC_KW => func_decl(p).map(Decl::Func),
        IMPORT_KW | CONST_KW | TYPE_KW | VAR_KW => gen_decl(p).map(Decl::Gen),
        _ => Err(p.error_expected("declaration")),
    }
}

pub(crate) fn gen_decl(p: &mut Parser<'_>) -> ParseResult<GenDecl> {
    let keyword = match p.peek_kind() {
        IMPORT_KW => DeclKeyword::Import,
        CONST_KW => DeclKeyword::Const,
        TYPE_KW => DeclKeyword::Type,
        VAR_KW => DeclKeyword::Var,
        _ => return Err(p.error_expected("declaration")),
    };
    let tok_pos = p.advance().range.start();

    if !p.at(LEFT_PAREN) {
        let spec = spec(p, keyword)?;
        return Ok(GenDecl { tok_pos, keyword, lparen: None, specs: vec![spec], rparen: None });
    }

    let lparen = p.expect(LEFT_PAREN)?;
    let mut specs = Vec::new();
    while !p.at(RIGHT_PAREN) && !p.at(EOF) {
        specs.push(spec(p, keyword)?);
        p.expect_semicolon()?;
    }
    let rparen = p.expect(RIGHT_PAREN)?;

    Ok(GenDecl { tok_pos, keyword, lparen: Some(lparen), specs, rparen: Some(rparen) })
}

fn spec(p: &mut Parser<'_>, keyword: DeclKeyword) -> ParseResult<Spec> {
    match keyword {
        DeclKeyword::Import => import_spec(p).map(Spec::Import),
        DeclKeyword::Const | DeclKeyword::Var => value_spec(p, keyword).map(Spec::Value),
        DeclKeyword::Type => type_spec(p).map(Spec::Type),
    }
}

fn import_spec(p: &mut Parser<'_>) -> ParseResult<ImportSpec> {
    let name = match p.peek_kind() {
        NAME => Some(ident(p)?),
        DOT => {
            let token = p.advance();
            Some(Ident { pos: token.range.start(), name: ".".to_owned() })
        }
        _ => None,
    };

    if !p.at(STRING) {
        return Err(p.error_expected("import path"));
    }
    let path: BasicLit = basic_lit(p)?;
    debug_assert_eq!(path.kind, LitKind::String);

    Ok(ImportSpec { name, path })
}

fn value_spec(p: &mut Parser<'_>, keyword: DeclKeyword) -> ParseResult<ValueSpec> {
    let names = ident_list(p)?;
    let ty = types::try_ty(p)?;
    let values = if p.eat(EQ) { expr_list(p)? } else { Vec::new() };

    if keyword == DeclKeyword::Var && ty.is_none() && values.is_empty() {
        return Err(p.error_expected("type"));
    }
    if keyword == DeclKeyword::Const && ty.is_some() && values.is_empty() {
        return Err(p.error_expected("'='"));
    }

    Ok(ValueSpec { names, ty, values })
}

fn type_spec(p: &mut Parser<'_>) -> ParseResult<TypeSpec> {
    let name = ident(p)?;
    let assign = p.at(EQ).then(|| p.advance().range.start());
    let ty = types::ty(p)?;
    Ok(TypeSpec { name, assign, ty })
}

fn func_decl(p: &mut Parser<'_>) -> ParseResult<FuncDecl> {
    let func = p.expect(FUNC_KW)?;
    let recv = if p.at(LEFT_PAREN) { Some(types::parameters(p)?) } else { None };
    let name = ident(p)?;
    if p.at(LEFT_BRACKET) {
        return Err(p.error("type parameters are not supported"));
    }

    let (params, results) = types::signature(p)?;
    let ty = FuncType { func: None, params, results };
    let body = if p.at(LEFT_BRACE) { Some(super::stmts::block(p)?) } else { None };

    Ok(FuncDecl { func, recv, name, ty, body })
}
