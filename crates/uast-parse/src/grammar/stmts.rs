use text_size::TextRange;
use uast_errors::Diagnostic;
use uast_syntax::SyntaxKind::*;
use uast_syntax::SyntaxSet;
use uast_syntax::ast::{
    AssignOp, AssignStmt, BlockStmt, BranchKind, BranchStmt, CaseBlock, CaseClause, CommClause,
    DeferStmt, EmptyStmt, Expr, ForStmt, GoStmt, IfStmt, IncDecOp, IncDecStmt, LabeledStmt, Pos,
    RangeStmt, ReturnStmt, SelectStmt, SendStmt, Stmt, SwitchStmt, TypeSwitchStmt,
};

use super::exprs::{self, EXPR_FIRST};
use super::{expr_list, ident, items};
use crate::parser::{ParseResult, Parser};

const STMT_LIST_END: SyntaxSet = SyntaxSet::new([RIGHT_BRACE, CASE_KW, DEFAULT_KW, EOF]);

pub(crate) fn block(p: &mut Parser<'_>) -> ParseResult<BlockStmt> {
    let lbrace = p.expect(LEFT_BRACE)?;
    let list = stmt_list(p)?;
    let rbrace = p.expect(RIGHT_BRACE)?;
    Ok(BlockStmt { lbrace, list, rbrace })
}

fn stmt_list(p: &mut Parser<'_>) -> ParseResult<Vec<Stmt>> {
    let mut list = Vec::new();
    while !STMT_LIST_END.contains(p.peek_kind()) {
        list.push(stmt(p)?);
    }
    Ok(list)
}

/// Parses one statement together with its terminating semicolon. Labeled
/// and empty statements have no terminator of their own.
fn stmt(p: &mut Parser<'_>) -> ParseResult<Stmt> {
    let stmt = match p.peek_kind() {
        CONST_KW | TYPE_KW | VAR_KW => Stmt::Decl(items::gen_decl(p)?),
        GO_KW => {
            let go = p.advance().range.start();
            Stmt::Go(Box::new(GoStmt { go, call: call_expr(p, "go")? }))
        }
        DEFER_KW => {
            let defer = p.advance().range.start();
            Stmt::Defer(Box::new(DeferStmt { defer, call: call_expr(p, "defer")? }))
        }
        RETURN_KW => {
            let return_pos = p.advance().range.start();
            let results = if p.at(SEMICOLON) || p.at(RIGHT_BRACE) { Vec::new() } else { expr_list(p)? };
            Stmt::Return(ReturnStmt { return_pos, results })
        }
        BREAK_KW | CONTINUE_KW | GOTO_KW | FALLTHROUGH_KW => Stmt::Branch(branch_stmt(p)?),
        LEFT_BRACE => Stmt::Block(block(p)?),
        IF_KW => return if_stmt(p).map(|stmt| Stmt::If(Box::new(stmt))),
        SWITCH_KW => return switch_stmt(p),
        SELECT_KW => Stmt::Select(Box::new(select_stmt(p)?)),
        FOR_KW => for_stmt(p)?,
        SEMICOLON => {
            let range = p.advance().range;
            return Ok(Stmt::Empty(EmptyStmt { semicolon: range.start(), implicit: range.is_empty() }));
        }
        RIGHT_BRACE => {
            return Ok(Stmt::Empty(EmptyStmt { semicolon: p.peek_range().start(), implicit: true }));
        }
        kind if EXPR_FIRST.contains(kind) => {
            let stmt = simple_stmt(p, Mode::LabelOk)?.into_stmt(p)?;
            if matches!(stmt, Stmt::Labeled(_)) {
                return Ok(stmt);
            }
            stmt
        }
        _ => return Err(p.error_expected("statement")),
    };

    p.expect_semicolon()?;
    Ok(stmt)
}

fn call_expr(p: &mut Parser<'_>, keyword: &str) -> ParseResult<Expr> {
    let call = exprs::expr(p)?;
    if !matches!(call.unparen(), Expr::Call(_)) {
        return Err(Diagnostic::error(
            format!("function must be invoked in {keyword} statement"),
            TextRange::new(call.start(), call.end()),
        ));
    }
    Ok(call)
}

fn branch_stmt(p: &mut Parser<'_>) -> ParseResult<BranchStmt> {
    let kind = match p.peek_kind() {
        BREAK_KW => BranchKind::Break,
        CONTINUE_KW => BranchKind::Continue,
        GOTO_KW => BranchKind::Goto,
        _ => BranchKind::Fallthrough,
    };
    let tok_pos = p.advance().range.start();
    let label = if kind != BranchKind::Fallthrough && p.at(NAME) { Some(ident(p)?) } else { None };
    Ok(BranchStmt { tok_pos, kind, label })
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Basic,
    LabelOk,
    RangeOk,
}

/// A simple statement, or the `k, v := range x` header of a `for` loop.
enum Simple {
    Stmt(Stmt),
    Range { lhs: Vec<Expr>, tok: Option<(Pos, AssignOp)>, x: Expr },
}

impl Simple {
    fn into_stmt(self, p: &Parser<'_>) -> ParseResult<Stmt> {
        match self {
            Self::Stmt(stmt) => Ok(stmt),
            Self::Range { .. } => Err(p.error("unexpected range clause")),
        }
    }
}

fn assign_op(p: &Parser<'_>) -> Option<AssignOp> {
    let op = match p.peek_kind() {
        COLON_EQ => AssignOp::Define,
        EQ => AssignOp::Assign,
        PLUS_EQ => AssignOp::Add,
        MINUS_EQ => AssignOp::Sub,
        STAR_EQ => AssignOp::Mul,
        SLASH_EQ => AssignOp::Div,
        PERCENT_EQ => AssignOp::Rem,
        AMP_EQ => AssignOp::And,
        PIPE_EQ => AssignOp::Or,
        CARET_EQ => AssignOp::Xor,
        SHL_EQ => AssignOp::Shl,
        SHR_EQ => AssignOp::Shr,
        AMP_CARET_EQ => AssignOp::AndNot,
        _ => return None,
    };
    Some(op)
}

fn simple_stmt(p: &mut Parser<'_>, mode: Mode) -> ParseResult<Simple> {
    if mode == Mode::RangeOk && p.eat(RANGE_KW) {
        let x = exprs::expr(p)?;
        return Ok(Simple::Range { lhs: Vec::new(), tok: None, x });
    }

    let lhs = expr_list(p)?;

    if let Some(op) = assign_op(p) {
        let tok_pos = p.advance().range.start();
        if mode == Mode::RangeOk
            && matches!(op, AssignOp::Define | AssignOp::Assign)
            && p.eat(RANGE_KW)
        {
            let x = exprs::expr(p)?;
            return Ok(Simple::Range { lhs, tok: Some((tok_pos, op)), x });
        }
        let rhs = expr_list(p)?;
        return Ok(Simple::Stmt(Stmt::Assign(Box::new(AssignStmt { lhs, tok_pos, op, rhs }))));
    }

    let mut lhs = lhs.into_iter();
    let (Some(x), None) = (lhs.next(), lhs.next()) else {
        return Err(p.error_expected("':=' or '='"));
    };

    let stmt = match (p.peek_kind(), x) {
        (COLON, Expr::Ident(label)) if mode == Mode::LabelOk => {
            let colon = p.advance().range.start();
            let labeled = stmt(p)?;
            Stmt::Labeled(Box::new(LabeledStmt { label, colon, stmt: labeled }))
        }
        (ARROW, chan) => {
            let arrow = p.advance().range.start();
            let value = exprs::expr(p)?;
            Stmt::Send(Box::new(SendStmt { chan, arrow, value }))
        }
        (PLUS_PLUS | MINUS_MINUS, x) => {
            let op = if p.at(PLUS_PLUS) { IncDecOp::Inc } else { IncDecOp::Dec };
            let tok_pos = p.advance().range.start();
            Stmt::IncDec(Box::new(IncDecStmt { x, tok_pos, op }))
        }
        (_, x) => Stmt::Expr(x),
    };
    Ok(Simple::Stmt(stmt))
}

/// Runs `f` with composite literals of named types disabled, as needed in
/// the header of a control clause.
fn header<T>(p: &mut Parser<'_>, f: impl FnOnce(&mut Parser<'_>) -> ParseResult<T>) -> ParseResult<T> {
    let outer = p.expr_level;
    p.expr_level = -1;
    let result = f(p);
    p.expr_level = outer;
    result
}

fn if_stmt(p: &mut Parser<'_>) -> ParseResult<IfStmt> {
    let if_pos = p.expect(IF_KW)?;
    if p.at(LEFT_BRACE) {
        return Err(p.error("missing condition in if statement"));
    }

    let (init, cond) = header(p, |p| {
        let mut init = None;
        if !p.at(SEMICOLON) {
            init = Some(simple_stmt(p, Mode::Basic)?.into_stmt(p)?);
        }
        let cond = if p.eat(SEMICOLON) {
            if p.at(LEFT_BRACE) {
                return Err(p.error("missing condition in if statement"));
            }
            simple_stmt(p, Mode::Basic)?.into_stmt(p)?
        } else {
            init.take().ok_or_else(|| p.error("missing condition in if statement"))?
        };
        match cond {
            Stmt::Expr(cond) => Ok((init, cond)),
            _ => Err(p.error_expected("boolean expression")),
        }
    })?;

    let body = block(p)?;
    let else_branch = if p.eat(ELSE_KW) {
        match p.peek_kind() {
            IF_KW => Some(Stmt::If(Box::new(if_stmt(p)?))),
            LEFT_BRACE => {
                let block = block(p)?;
                p.expect_semicolon()?;
                Some(Stmt::Block(block))
            }
            _ => return Err(p.error("else must be followed by if or statement block")),
        }
    } else {
        p.expect_semicolon()?;
        None
    };

    Ok(IfStmt { if_pos, init, cond, body, else_branch })
}

fn is_type_switch_guard(stmt: Option<&Stmt>) -> bool {
    let is_guard = |x: &Expr| matches!(x, Expr::TypeAssert(assert) if assert.ty.is_none());
    match stmt {
        Some(Stmt::Expr(x)) => is_guard(x),
        Some(Stmt::Assign(assign)) => {
            assign.op == AssignOp::Define
                && assign.lhs.len() == 1
                && matches!(assign.rhs.as_slice(), [x] if is_guard(x))
        }
        _ => false,
    }
}

fn switch_stmt(p: &mut Parser<'_>) -> ParseResult<Stmt> {
    let switch = p.expect(SWITCH_KW)?;

    let (init, s2) = if p.at(LEFT_BRACE) {
        (None, None)
    } else {
        header(p, |p| {
            let mut s2 = None;
            if !p.at(SEMICOLON) {
                s2 = Some(simple_stmt(p, Mode::Basic)?.into_stmt(p)?);
            }
            let mut init = None;
            if p.eat(SEMICOLON) {
                init = s2.take();
                if !p.at(LEFT_BRACE) {
                    s2 = Some(simple_stmt(p, Mode::Basic)?.into_stmt(p)?);
                }
            }
            Ok((init, s2))
        })?
    };

    let type_switch = is_type_switch_guard(s2.as_ref());
    let body = case_block(p)?;
    p.expect_semicolon()?;

    if type_switch {
        let Some(assign) = s2 else {
            return Err(p.error_expected("type switch guard"));
        };
        return Ok(Stmt::TypeSwitch(Box::new(TypeSwitchStmt { switch, init, assign, body })));
    }

    let tag = match s2 {
        None => None,
        Some(Stmt::Expr(tag)) => Some(tag),
        Some(other) => {
            return Err(Diagnostic::error(
                "switch expression must be an expression",
                TextRange::new(other.start(), other.end()),
            ));
        }
    };
    Ok(Stmt::Switch(Box::new(SwitchStmt { switch, init, tag, body })))
}

fn case_block(p: &mut Parser<'_>) -> ParseResult<CaseBlock> {
    let lbrace = p.expect(LEFT_BRACE)?;
    let mut clauses = Vec::new();
    while p.at(CASE_KW) || p.at(DEFAULT_KW) {
        let is_case = p.at(CASE_KW);
        let case = p.advance().range.start();
        let list = if is_case { expr_list(p)? } else { Vec::new() };
        let colon = p.expect(COLON)?;
        let body = stmt_list(p)?;
        clauses.push(CaseClause { case, list, colon, body });
    }
    let rbrace = p.expect(RIGHT_BRACE)?;
    Ok(CaseBlock { lbrace, clauses, rbrace })
}

fn select_stmt(p: &mut Parser<'_>) -> ParseResult<SelectStmt> {
    let select = p.expect(SELECT_KW)?;
    let lbrace = p.expect(LEFT_BRACE)?;
    let mut clauses = Vec::new();
    while p.at(CASE_KW) || p.at(DEFAULT_KW) {
        let is_case = p.at(CASE_KW);
        let case = p.advance().range.start();
        let comm = if is_case { Some(simple_stmt(p, Mode::Basic)?.into_stmt(p)?) } else { None };
        let colon = p.expect(COLON)?;
        let body = stmt_list(p)?;
        clauses.push(CommClause { case, comm, colon, body });
    }
    let rbrace = p.expect(RIGHT_BRACE)?;
    Ok(SelectStmt { select, lbrace, clauses, rbrace })
}

fn for_stmt(p: &mut Parser<'_>) -> ParseResult<Stmt> {
    let for_pos = p.expect(FOR_KW)?;

    let (init, s2, post) = if p.at(LEFT_BRACE) {
        (None, None, None)
    } else {
        header(p, |p| {
            let mut s2 = None;
            if !p.at(SEMICOLON) {
                s2 = Some(simple_stmt(p, Mode::RangeOk)?);
            }
            if matches!(s2, Some(Simple::Range { .. })) || !p.at(SEMICOLON) {
                return Ok((None, s2, None));
            }

            p.advance();
            let init = s2.take().map(|s| s.into_stmt(p)).transpose()?;
            if !p.at(SEMICOLON) {
                s2 = Some(simple_stmt(p, Mode::Basic)?);
            }
            p.expect(SEMICOLON)?;
            let post = if p.at(LEFT_BRACE) {
                None
            } else {
                Some(simple_stmt(p, Mode::Basic)?.into_stmt(p)?)
            };
            Ok((init, s2, post))
        })?
    };

    let body = block(p)?;

    if let Some(Simple::Range { lhs, tok, x }) = s2 {
        let mut lhs = lhs.into_iter();
        let (key, value) = (lhs.next(), lhs.next());
        if let Some(extra) = lhs.next() {
            return Err(Diagnostic::error(
                "range clause permits at most two iteration variables",
                TextRange::new(extra.start(), extra.end()),
            ));
        }
        return Ok(Stmt::Range(Box::new(RangeStmt { for_pos, key, value, tok, x, body })));
    }

    let cond = match s2.map(|s| s.into_stmt(p)).transpose()? {
        None => None,
        Some(Stmt::Expr(cond)) => Some(cond),
        Some(_) => return Err(p.error_expected("boolean or range expression")),
    };
    Ok(Stmt::For(Box::new(ForStmt { for_pos, init, cond, post, body })))
}
