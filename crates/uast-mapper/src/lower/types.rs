use uast_syntax::ast::{ChanDir, Expr};
use uast_tree::{Kind, Node};

use super::decls::Fields;
use super::{label, with};
use crate::mapper::{Mapped, Mapper};

impl Mapper<'_> {
    /// Maps an expression in type position. Nested types get `TYPE`, and an
    /// array length is the only value inside a type.
    pub(super) fn ty(&mut self, ty: &Expr, kinds: Vec<Kind>, field: &str) -> Mapped {
        let mut children = Vec::new();
        let (kinds, native) = match ty {
            Expr::Ident(ident) => return self.ident(ident, kinds, field),
            Expr::Selector(selector) => {
                let x = self.expr(&selector.x, Vec::new(), "X")?;
                self.append(&mut children, x)?;
                let sel = self.ident(&selector.sel, Vec::new(), "Sel")?;
                self.append(&mut children, sel)?;
                (with(kinds, &[Kind::MEMBER_SELECT]), "SelectorExpr")
            }
            Expr::Paren(paren) => {
                let lparen = self.expected_token(Vec::new(), paren.lparen, "(", "Lparen")?;
                self.append(&mut children, lparen)?;
                let x = self.ty(&paren.x, vec![Kind::TYPE], "X")?;
                self.append(&mut children, x)?;
                let rparen = self.expected_token(Vec::new(), paren.rparen, ")", "Rparen")?;
                self.append(&mut children, rparen)?;
                (kinds, "ParenExpr")
            }
            Expr::Star(star) => {
                let op = self.expected_token(Vec::new(), star.star, "*", "Star")?;
                self.append(&mut children, op)?;
                let x = self.ty(&star.x, vec![Kind::TYPE], "X")?;
                self.append(&mut children, x)?;
                (kinds, "StarExpr")
            }
            Expr::Ellipsis(ellipsis) => {
                let Some(elt) = &ellipsis.elt else {
                    return self.expected_token(kinds, ellipsis.pos, "...", &label(field, "Ellipsis"));
                };
                let token = self.expected_token(Vec::new(), ellipsis.pos, "...", "Ellipsis")?;
                self.append(&mut children, token)?;
                let elt = self.ty(elt, vec![Kind::TYPE], "Elt")?;
                self.append(&mut children, elt)?;
                (kinds, "Ellipsis")
            }
            Expr::ArrayType(array) => {
                let lbrack = self.expected_token(Vec::new(), array.lbrack, "[", "Lbrack")?;
                self.append(&mut children, lbrack)?;
                if let Some(len) = &array.len {
                    let len = self.expr(len, Vec::new(), "Len")?;
                    self.append(&mut children, len)?;
                }
                let elt = self.ty(&array.elt, vec![Kind::TYPE], "Elt")?;
                self.append(&mut children, elt)?;
                (kinds, "ArrayType")
            }
            Expr::StructType(ty) => {
                let keyword = self.keyword(Vec::new(), ty.struct_pos, "struct", "Struct")?;
                self.append(&mut children, keyword)?;
                let fields = self.field_list(&ty.fields, Vec::new(), "Fields", Fields::Struct)?;
                self.append(&mut children, fields)?;
                (kinds, "StructType")
            }
            Expr::FuncType(ty) => {
                if let Some(func) = ty.func {
                    let keyword = self.keyword(Vec::new(), func, "func", "Func")?;
                    self.append(&mut children, keyword)?;
                }
                self.append_signature(&mut children, ty)?;
                (kinds, "FuncType")
            }
            Expr::InterfaceType(ty) => {
                let keyword = self.keyword(Vec::new(), ty.interface_pos, "interface", "Interface")?;
                self.append(&mut children, keyword)?;
                let methods = self.field_list(&ty.methods, Vec::new(), "Methods", Fields::Interface)?;
                self.append(&mut children, methods)?;
                (kinds, "InterfaceType")
            }
            Expr::MapType(ty) => {
                let keyword = self.keyword(Vec::new(), ty.map_pos, "map", "Map")?;
                self.append(&mut children, keyword)?;
                let key = self.ty(&ty.key, vec![Kind::TYPE], "Key")?;
                self.append(&mut children, key)?;
                let value = self.ty(&ty.value, vec![Kind::TYPE], "Value")?;
                self.append(&mut children, value)?;
                (kinds, "MapType")
            }
            Expr::ChanType(ty) => {
                let begin = match ty.dir {
                    ChanDir::Recv => self.expected_token(Vec::new(), ty.begin, "<-", "Begin")?,
                    ChanDir::Both | ChanDir::Send => {
                        self.keyword(Vec::new(), ty.begin, "chan", "Begin")?
                    }
                };
                self.append(&mut children, begin)?;
                if let (ChanDir::Send, Some(arrow)) = (ty.dir, ty.arrow) {
                    let arrow = self.expected_token(Vec::new(), arrow, "<-", "Arrow")?;
                    self.append(&mut children, arrow)?;
                }
                let value = self.ty(&ty.value, vec![Kind::TYPE], "Value")?;
                self.append(&mut children, value)?;
                (kinds, "ChanType")
            }
            _ => return self.expr(ty, kinds, field),
        };
        Ok(Node::composite(kinds, label(field, native), children))
    }
}
