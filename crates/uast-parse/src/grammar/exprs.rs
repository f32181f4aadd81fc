use uast_syntax::SyntaxKind::{self, *};
use uast_syntax::SyntaxSet;
use uast_syntax::ast::{
    BinaryExpr, BinaryOp, CallExpr, CompositeLit, Expr, FuncLit, FuncType, IndexExpr,
    KeyValueExpr, ParenExpr, Pos, SelectorExpr, SliceExpr, StarExpr, TypeAssertExpr, UnaryExpr,
    UnaryOp,
};

use super::{basic_lit, ident, stmts, types};
use crate::parser::{ParseResult, Parser};

pub(crate) const EXPR_FIRST: SyntaxSet = SyntaxSet::new([
    NAME,
    INT_NUMBER,
    FLOAT_NUMBER,
    IMAGINARY_NUMBER,
    CHAR,
    STRING,
    FUNC_KW,
    LEFT_PAREN,
    LEFT_BRACKET,
    STRUCT_KW,
    MAP_KW,
    CHAN_KW,
    INTERFACE_KW,
    PLUS,
    MINUS,
    STAR,
    AMP,
    CARET,
    ARROW,
    BANG,
]);

pub(crate) fn expr(p: &mut Parser<'_>) -> ParseResult<Expr> {
    binary_expr(p, 1)
}

fn binary_op(kind: SyntaxKind) -> Option<BinaryOp> {
    let op = match kind {
        PIPE_PIPE => BinaryOp::LogicalOr,
        AMP_AMP => BinaryOp::LogicalAnd,
        EQ_EQ => BinaryOp::Eq,
        NEQ => BinaryOp::Neq,
        LT => BinaryOp::Lt,
        LTEQ => BinaryOp::Lte,
        GT => BinaryOp::Gt,
        GTEQ => BinaryOp::Gte,
        PLUS => BinaryOp::Add,
        MINUS => BinaryOp::Sub,
        PIPE => BinaryOp::Or,
        CARET => BinaryOp::Xor,
        STAR => BinaryOp::Mul,
        SLASH => BinaryOp::Div,
        PERCENT => BinaryOp::Rem,
        SHL => BinaryOp::Shl,
        SHR => BinaryOp::Shr,
        AMP => BinaryOp::And,
        AMP_CARET => BinaryOp::AndNot,
        _ => return None,
    };
    Some(op)
}

fn binary_expr(p: &mut Parser<'_>, min_precedence: u8) -> ParseResult<Expr> {
    let mut x = unary_expr(p)?;

    while let Some(op) = binary_op(p.peek_kind()) {
        if op.precedence() < min_precedence {
            break;
        }
        let op_pos = p.advance().range.start();
        let y = binary_expr(p, op.precedence() + 1)?;
        x = Expr::Binary(Box::new(BinaryExpr { x, op_pos, op, y }));
    }

    Ok(x)
}

fn unary_expr(p: &mut Parser<'_>) -> ParseResult<Expr> {
    let op = match p.peek_kind() {
        PLUS => UnaryOp::Plus,
        MINUS => UnaryOp::Minus,
        BANG => UnaryOp::Not,
        CARET => UnaryOp::Xor,
        AMP => UnaryOp::And,
        // `<-chan T` is a type and is left to the operand.
        ARROW if p.nth_kind(1) != CHAN_KW => UnaryOp::Arrow,
        STAR => {
            let star = p.advance().range.start();
            let x = unary_expr(p)?;
            return Ok(Expr::Star(Box::new(StarExpr { star, x })));
        }
        _ => return primary_expr(p),
    };

    let op_pos = p.advance().range.start();
    let x = unary_expr(p)?;
    Ok(Expr::Unary(Box::new(UnaryExpr { op_pos, op, x })))
}

fn primary_expr(p: &mut Parser<'_>) -> ParseResult<Expr> {
    let mut x = operand(p)?;

    loop {
        x = match p.peek_kind() {
            DOT => {
                p.advance();
                match p.peek_kind() {
                    NAME => Expr::Selector(Box::new(SelectorExpr { x, sel: ident(p)? })),
                    LEFT_PAREN => type_assert(p, x)?,
                    _ => return Err(p.error_expected("selector or type assertion")),
                }
            }
            LEFT_BRACKET => index_or_slice(p, x)?,
            LEFT_PAREN => call(p, x)?,
            LEFT_BRACE if is_literal_type(&x, p.expr_level) => composite_lit(p, Some(x))?,
            _ => return Ok(x),
        };
    }
}

/// Whether a `{` after `x` opens a composite literal. Inside control
/// clause headers only unambiguous literal types qualify.
fn is_literal_type(x: &Expr, expr_level: i32) -> bool {
    match x.unparen() {
        Expr::Ident(_) | Expr::Index(_) => expr_level >= 0,
        Expr::Selector(selector) => expr_level >= 0 && matches!(selector.x, Expr::Ident(_)),
        Expr::ArrayType(_) | Expr::StructType(_) | Expr::MapType(_) => true,
        _ => false,
    }
}

fn operand(p: &mut Parser<'_>) -> ParseResult<Expr> {
    match p.peek_kind() {
        NAME => Ok(Expr::Ident(ident(p)?)),
        kind if kind.is_literal() => Ok(Expr::BasicLit(basic_lit(p)?)),
        LEFT_PAREN => {
            let lparen = p.advance().range.start();
            p.expr_level += 1;
            let x = expr(p);
            p.expr_level -= 1;
            let x = x?;
            let rparen = p.expect(RIGHT_PAREN)?;
            Ok(Expr::Paren(Box::new(ParenExpr { lparen, x, rparen })))
        }
        FUNC_KW => func_type_or_lit(p),
        LEFT_BRACKET | STRUCT_KW | MAP_KW | CHAN_KW | INTERFACE_KW | ARROW => types::ty(p),
        _ => Err(p.error_expected("expression")),
    }
}

fn func_type_or_lit(p: &mut Parser<'_>) -> ParseResult<Expr> {
    let func = p.expect(FUNC_KW)?;
    let (params, results) = types::signature(p)?;
    let ty = FuncType { func: Some(func), params, results };
    if !p.at(LEFT_BRACE) {
        return Ok(Expr::FuncType(Box::new(ty)));
    }

    p.expr_level += 1;
    let body = stmts::block(p);
    p.expr_level -= 1;
    Ok(Expr::FuncLit(Box::new(FuncLit { ty, body: body? })))
}

fn type_assert(p: &mut Parser<'_>, x: Expr) -> ParseResult<Expr> {
    let lparen = p.expect(LEFT_PAREN)?;
    let ty = if p.eat(TYPE_KW) { None } else { Some(types::ty(p)?) };
    let rparen = p.expect(RIGHT_PAREN)?;
    Ok(Expr::TypeAssert(Box::new(TypeAssertExpr { x, lparen, ty, rparen })))
}

fn index_or_slice(p: &mut Parser<'_>, x: Expr) -> ParseResult<Expr> {
    let lbrack = p.expect(LEFT_BRACKET)?;
    p.expr_level += 1;
    let indices = slice_indices(p);
    p.expr_level -= 1;
    let (low, high, max, colons) = indices?;
    let rbrack = p.expect(RIGHT_BRACKET)?;

    if colons > 0 {
        let slice3 = colons == 2;
        return Ok(Expr::Slice(Box::new(SliceExpr { x, lbrack, low, high, max, slice3, rbrack })));
    }
    let Some(index) = low else {
        return Err(p.error_expected("operand"));
    };
    Ok(Expr::Index(Box::new(IndexExpr { x, lbrack, index, rbrack })))
}

type SliceIndices = (Option<Expr>, Option<Expr>, Option<Expr>, usize);

fn slice_indices(p: &mut Parser<'_>) -> ParseResult<SliceIndices> {
    let mut indices: [Option<Expr>; 3] = [None, None, None];
    let mut colons = 0;

    if !p.at(COLON) {
        indices[0] = Some(expr(p)?);
    }
    while colons < 2 && p.eat(COLON) {
        colons += 1;
        if !p.at(COLON) && !p.at(RIGHT_BRACKET) {
            indices[colons] = Some(expr(p)?);
        }
    }

    if colons == 2 && (indices[1].is_none() || indices[2].is_none()) {
        return Err(p.error("middle and final index required in 3-index slice"));
    }

    let [low, high, max] = indices;
    Ok((low, high, max, colons))
}

fn call(p: &mut Parser<'_>, fun: Expr) -> ParseResult<Expr> {
    let lparen = p.expect(LEFT_PAREN)?;
    p.expr_level += 1;
    let args = call_args(p);
    p.expr_level -= 1;
    let (args, ellipsis) = args?;
    let rparen = p.expect(RIGHT_PAREN)?;
    Ok(Expr::Call(Box::new(CallExpr { fun, lparen, args, ellipsis, rparen })))
}

fn call_args(p: &mut Parser<'_>) -> ParseResult<(Vec<Expr>, Option<Pos>)> {
    let mut args = Vec::new();
    let mut ellipsis = None;

    while !p.at(RIGHT_PAREN) && !p.at(EOF) {
        args.push(expr(p)?);
        if p.at(ELLIPSIS) {
            ellipsis = Some(p.advance().range.start());
        }
        if !p.eat(COMMA) {
            break;
        }
    }

    Ok((args, ellipsis))
}

fn composite_lit(p: &mut Parser<'_>, ty: Option<Expr>) -> ParseResult<Expr> {
    let lbrace = p.expect(LEFT_BRACE)?;
    p.expr_level += 1;
    let elts = elements(p);
    p.expr_level -= 1;
    let elts = elts?;
    let rbrace = p.expect(RIGHT_BRACE)?;
    Ok(Expr::CompositeLit(Box::new(CompositeLit { ty, lbrace, elts, rbrace })))
}

fn elements(p: &mut Parser<'_>) -> ParseResult<Vec<Expr>> {
    let mut elts = Vec::new();
    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        let key = element_value(p)?;
        let elt = if p.at(COLON) {
            let colon = p.advance().range.start();
            let value = element_value(p)?;
            Expr::KeyValue(Box::new(KeyValueExpr { key, colon, value }))
        } else {
            key
        };
        elts.push(elt);

        if !p.eat(COMMA) {
            break;
        }
    }
    Ok(elts)
}

/// Elements of nested composite literals may leave out their type.
fn element_value(p: &mut Parser<'_>) -> ParseResult<Expr> {
    if p.at(LEFT_BRACE) { composite_lit(p, None) } else { expr(p) }
}
