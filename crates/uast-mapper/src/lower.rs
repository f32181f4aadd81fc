//! Translation of the native tree into generic nodes, one rule per construct.
//!
//! Every rule receives the kinds its parent contributes, appends its own,
//! and labels the node `{field}({NativeType})`. List elements use `[i]` as
//! their field.

mod decls;
mod exprs;
mod stmts;
mod types;

use text_size::TextSize;
use uast_syntax::ast;
use uast_tree::{Kind, Node};

use crate::error::MapError;
use crate::mapper::{Mapped, Mapper};

const BOM: char = '\u{feff}';

pub(crate) fn label(field: &str, native: &str) -> String {
    format!("{field}({native})")
}

/// Kinds for a sub-expression of a node tagged `parent`: `role`, then
/// `EXPRESSION` when the parent is itself an expression.
fn nested(parent: &[Kind], role: &[Kind]) -> Vec<Kind> {
    let mut kinds = role.to_vec();
    if parent.contains(&Kind::EXPRESSION) {
        kinds.push(Kind::EXPRESSION);
    }
    kinds
}

fn with(mut kinds: Vec<Kind>, own: &[Kind]) -> Vec<Kind> {
    kinds.extend_from_slice(own);
    kinds
}

impl Mapper<'_> {
    pub(crate) fn file(&mut self, file: &ast::File) -> Mapped {
        let mut children = Vec::new();
        let package = self.package(file)?;
        self.append(&mut children, package)?;

        let decls = self.list(&file.decls, vec![Kind::DECL_LIST], "Decls([]Decl)", Self::decl)?;
        self.append(&mut children, decls)?;

        let end = self.positions().len();
        let eof = self.token(vec![Kind::EOF], end, end, "")?;
        self.append(&mut children, eof)?;

        Ok(Node::composite(vec![Kind::COMPILATION_UNIT], "(File)", children))
    }

    /// The package clause, preceded by every comment of the file header. A
    /// leading byte order mark belongs to no node.
    fn package(&mut self, file: &ast::File) -> Mapped {
        let mut children = Vec::new();
        if let Some(keyword) = self.keyword(Vec::new(), file.package, "package", "")? {
            let start = if self.text().starts_with(BOM) { TextSize::of(BOM) } else { TextSize::new(0) };
            self.fill_gap(&mut children, start, keyword.span().start())?;
            self.append(&mut children, Some(keyword))?;
        }
        let name = self.ident(&file.name, Vec::new(), "Name")?;
        self.append(&mut children, name)?;
        Ok(Node::composite(vec![Kind::PACKAGE], "File.Package", children))
    }

    pub(crate) fn ident(&mut self, ident: &ast::Ident, kinds: Vec<Kind>, field: &str) -> Mapped {
        let kinds = with(kinds, &crate::kinds::ident(&ident.name));
        self.expected_token(kinds, ident.pos, &ident.name, &label(field, "Ident"))
    }

    /// A wrapper node holding one child per item, or `None` for no items.
    fn list<T>(
        &mut self,
        items: &[T],
        kinds: Vec<Kind>,
        label: &str,
        map: impl FnMut(&mut Self, &T, &str) -> Mapped,
    ) -> Mapped {
        let mut children = Vec::new();
        self.each(&mut children, items, map)?;
        Ok(Node::composite(kinds, label, children))
    }

    /// Appends one child per item directly to `children`.
    fn each<T>(
        &mut self,
        children: &mut Vec<Node>,
        items: &[T],
        mut map: impl FnMut(&mut Self, &T, &str) -> Mapped,
    ) -> Result<(), MapError> {
        for (index, item) in items.iter().enumerate() {
            let child = map(self, item, &format!("[{index}]"))?;
            self.append(children, child)?;
        }
        Ok(())
    }
}
