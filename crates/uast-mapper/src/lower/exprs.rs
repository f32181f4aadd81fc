use uast_syntax::ast::{self, BasicLit, CallExpr, Expr};
use uast_tree::{Kind, Node};

use super::{label, nested, with};
use crate::kinds;
use crate::mapper::{Mapped, Mapper};

impl Mapper<'_> {
    /// Maps an expression in value position. `kinds` holds what the parent
    /// contributes, including `EXPRESSION` at the root of an expression.
    pub(super) fn expr(&mut self, expr: &Expr, kinds: Vec<Kind>, field: &str) -> Mapped {
        let mut children = Vec::new();
        let (kinds, native) = match expr {
            Expr::Ident(ident) => return self.ident(ident, kinds, field),
            Expr::BasicLit(lit) => return self.basic_lit(lit, kinds, field),
            Expr::FuncLit(lit) => return self.func_lit(lit, kinds, field),
            Expr::Call(call) => return self.call(call, kinds, field),
            Expr::Ellipsis(_)
            | Expr::ArrayType(_)
            | Expr::StructType(_)
            | Expr::FuncType(_)
            | Expr::InterfaceType(_)
            | Expr::MapType(_)
            | Expr::ChanType(_) => return self.ty(expr, kinds, field),

            Expr::CompositeLit(lit) => {
                if let Some(ty) = &lit.ty {
                    let ty = self.ty(ty, vec![Kind::TYPE], "Type")?;
                    self.append(&mut children, ty)?;
                }
                let lbrace = self.expected_token(Vec::new(), lit.lbrace, "{", "Lbrace")?;
                self.append(&mut children, lbrace)?;

                let elt_kinds = nested(&kinds, &[]);
                let elts = self.list(&lit.elts, Vec::new(), "Elts([]Expr)", |mapper, elt, field| {
                    mapper.expr(elt, elt_kinds.clone(), field)
                })?;
                self.append(&mut children, elts)?;

                let rbrace = self.expected_token(Vec::new(), lit.rbrace, "}", "Rbrace")?;
                self.append(&mut children, rbrace)?;
                (kinds, "CompositeLit")
            }
            Expr::Paren(paren) => {
                let lparen =
                    self.expected_token(vec![Kind::LEFT_PARENTHESIS], paren.lparen, "(", "Lparen")?;
                self.append(&mut children, lparen)?;
                let x = self.expr(&paren.x, nested(&kinds, &[]), "X")?;
                self.append(&mut children, x)?;
                let rparen =
                    self.expected_token(vec![Kind::RIGHT_PARENTHESIS], paren.rparen, ")", "Rparen")?;
                self.append(&mut children, rparen)?;
                (with(kinds, &[Kind::PARENTHESIZED_EXPRESSION]), "ParenExpr")
            }
            Expr::Selector(selector) => {
                let x = self.expr(&selector.x, Vec::new(), "X")?;
                self.append(&mut children, x)?;
                let sel = self.ident(&selector.sel, Vec::new(), "Sel")?;
                self.append(&mut children, sel)?;
                (with(kinds, &[Kind::MEMBER_SELECT]), "SelectorExpr")
            }
            Expr::Index(index) => {
                let x = self.expr(&index.x, nested(&kinds, &[Kind::ARRAY_OBJECT_EXPRESSION]), "X")?;
                self.append(&mut children, x)?;
                let lbrack = self.expected_token(Vec::new(), index.lbrack, "[", "Lbrack")?;
                self.append(&mut children, lbrack)?;
                let key =
                    self.expr(&index.index, nested(&kinds, &[Kind::ARRAY_KEY_EXPRESSION]), "Index")?;
                self.append(&mut children, key)?;
                let rbrack = self.expected_token(Vec::new(), index.rbrack, "]", "Rbrack")?;
                self.append(&mut children, rbrack)?;
                (with(kinds, &[Kind::ARRAY_ACCESS_EXPRESSION]), "IndexExpr")
            }
            Expr::Slice(slice) => {
                let x = self.expr(&slice.x, nested(&kinds, &[]), "X")?;
                self.append(&mut children, x)?;
                let lbrack = self.expected_token(Vec::new(), slice.lbrack, "[", "Lbrack")?;
                self.append(&mut children, lbrack)?;
                for (part, field) in [(&slice.low, "Low"), (&slice.high, "High"), (&slice.max, "Max")] {
                    if let Some(part) = part {
                        let part = self.expr(part, nested(&kinds, &[]), field)?;
                        self.append(&mut children, part)?;
                    }
                }
                let rbrack = self.expected_token(Vec::new(), slice.rbrack, "]", "Rbrack")?;
                self.append(&mut children, rbrack)?;
                (kinds, "SliceExpr")
            }
            Expr::TypeAssert(assert) => {
                let x = self.expr(&assert.x, nested(&kinds, &[]), "X")?;
                self.append(&mut children, x)?;
                let lparen = self.expected_token(Vec::new(), assert.lparen, "(", "Lparen")?;
                self.append(&mut children, lparen)?;
                if let Some(ty) = &assert.ty {
                    let ty = self.ty(ty, vec![Kind::TYPE], "Type")?;
                    self.append(&mut children, ty)?;
                }
                let rparen = self.expected_token(Vec::new(), assert.rparen, ")", "Rparen")?;
                self.append(&mut children, rparen)?;
                (kinds, "TypeAssertExpr")
            }
            Expr::Star(star) => {
                let op = self.expected_token(vec![Kind::OPERATOR], star.star, "*", "Star")?;
                self.append(&mut children, op)?;
                let x = self.expr(&star.x, nested(&kinds, &[Kind::OPERAND]), "X")?;
                self.append(&mut children, x)?;
                (with(kinds, &kinds::POINTER), "StarExpr")
            }
            Expr::Unary(unary) => {
                let op = self.expected_token(vec![Kind::OPERATOR], unary.op_pos, unary.op.text(), "Op")?;
                self.append(&mut children, op)?;
                let x = self.expr(&unary.x, nested(&kinds, &[Kind::OPERAND]), "X")?;
                self.append(&mut children, x)?;
                (with(kinds, &kinds::unary(unary.op)), "UnaryExpr")
            }
            Expr::Binary(binary) => {
                let x = self.expr(&binary.x, nested(&kinds, &[Kind::LEFT_OPERAND]), "X")?;
                self.append(&mut children, x)?;
                let op =
                    self.expected_token(vec![Kind::OPERATOR], binary.op_pos, binary.op.text(), "Op")?;
                self.append(&mut children, op)?;
                let y = self.expr(&binary.y, nested(&kinds, &[Kind::RIGHT_OPERAND]), "Y")?;
                self.append(&mut children, y)?;
                (with(kinds, &kinds::binary(binary.op)), "BinaryExpr")
            }
            Expr::KeyValue(kv) => {
                let key = self.expr(&kv.key, nested(&kinds, &[]), "Key")?;
                self.append(&mut children, key)?;
                let colon = self.expected_token(Vec::new(), kv.colon, ":", "Colon")?;
                self.append(&mut children, colon)?;
                let value = self.expr(&kv.value, nested(&kinds, &[]), "Value")?;
                self.append(&mut children, value)?;
                (kinds, "KeyValueExpr")
            }
        };
        Ok(Node::composite(kinds, label(field, native), children))
    }

    pub(super) fn basic_lit(&mut self, lit: &BasicLit, kinds: Vec<Kind>, field: &str) -> Mapped {
        let kinds = with(kinds, &kinds::literal(lit));
        self.expected_token(kinds, lit.pos, &lit.value, &label(field, "BasicLit"))
    }

    fn call(&mut self, call: &CallExpr, kinds: Vec<Kind>, field: &str) -> Mapped {
        let mut children = Vec::new();
        let fun = self.expr(&call.fun, Vec::new(), "Fun")?;
        self.append(&mut children, fun)?;

        let lparen = self.expected_token(vec![Kind::LEFT_PARENTHESIS], call.lparen, "(", "Lparen")?;
        self.append(&mut children, lparen)?;

        let args = self.list(&call.args, vec![Kind::ARGUMENTS], "Args([]Expr)", |mapper, arg, field| {
            mapper.expr(arg, vec![Kind::ARGUMENT, Kind::EXPRESSION], field)
        })?;
        self.append(&mut children, args)?;

        if let Some(ellipsis) = call.ellipsis {
            let ellipsis = self.expected_token(Vec::new(), ellipsis, "...", "Ellipsis")?;
            self.append(&mut children, ellipsis)?;
        }

        let rparen = self.expected_token(vec![Kind::RIGHT_PARENTHESIS], call.rparen, ")", "Rparen")?;
        self.append(&mut children, rparen)?;

        Ok(Node::composite(with(kinds, &[Kind::CALL]), label(field, "CallExpr"), children))
    }
}

/// `panic(...)` as a statement.
pub(super) fn is_panic(expr: &Expr) -> bool {
    match expr {
        Expr::Call(call) => matches!(&call.fun, Expr::Ident(ast::Ident { name, .. }) if name == "panic"),
        _ => false,
    }
}
