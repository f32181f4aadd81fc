use uast_syntax::ast::{self, Decl, DeclKeyword, Field, FieldList, FuncDecl, FuncType, GenDecl, Spec};
use uast_tree::{Kind, Node};

use super::{label, with};
use crate::error::MapError;
use crate::kinds;
use crate::mapper::{Mapped, Mapper};

/// What the fields of a [`FieldList`] declare.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum Fields {
    Params,
    Results,
    Struct,
    Interface,
}

impl Fields {
    fn brackets(self) -> (&'static str, &'static str) {
        match self {
            Self::Params | Self::Results => ("(", ")"),
            Self::Struct | Self::Interface => ("{", "}"),
        }
    }
}

impl Mapper<'_> {
    pub(super) fn decl(&mut self, decl: &Decl, field: &str) -> Mapped {
        match decl {
            Decl::Gen(decl) => self.gen_decl(decl, field),
            Decl::Func(decl) => self.func_decl(decl, field),
        }
    }

    pub(super) fn gen_decl(&mut self, decl: &GenDecl, field: &str) -> Mapped {
        let mut children = Vec::new();
        let keyword = self.keyword(Vec::new(), decl.tok_pos, decl.keyword.text(), "Tok")?;
        self.append(&mut children, keyword)?;
        if let Some(lparen) = decl.lparen {
            let lparen = self.expected_token(Vec::new(), lparen, "(", "Lparen")?;
            self.append(&mut children, lparen)?;
        }

        let specs = self.list(&decl.specs, Vec::new(), "Specs([]Spec)", |mapper, spec, field| {
            mapper.spec(spec, decl.keyword, field)
        })?;
        self.append(&mut children, specs)?;

        if let Some(rparen) = decl.rparen {
            let rparen = self.expected_token(Vec::new(), rparen, ")", "Rparen")?;
            self.append(&mut children, rparen)?;
        }
        Ok(Node::composite(kinds::gen_decl(decl.keyword), label(field, "GenDecl"), children))
    }

    fn spec(&mut self, spec: &Spec, keyword: DeclKeyword, field: &str) -> Mapped {
        let mut children = Vec::new();
        match spec {
            Spec::Import(spec) => {
                if let Some(name) = &spec.name {
                    let name = self.ident(name, Vec::new(), "Name")?;
                    self.append(&mut children, name)?;
                }
                let path = self.basic_lit(&spec.path, Vec::new(), "Path")?;
                self.append(&mut children, path)?;
                Ok(Node::composite(vec![Kind::IMPORT_ENTRY], label(field, "ImportSpec"), children))
            }
            Spec::Value(spec) => {
                let name_kinds =
                    if keyword == DeclKeyword::Var { vec![Kind::VARIABLE_NAME] } else { Vec::new() };
                let names = self.list(&spec.names, Vec::new(), "Names([]*Ident)", |mapper, name, field| {
                    mapper.ident(name, name_kinds.clone(), field)
                })?;
                self.append(&mut children, names)?;

                if let Some(ty) = &spec.ty {
                    let ty = self.ty(ty, vec![Kind::TYPE], "Type")?;
                    self.append(&mut children, ty)?;
                }

                let values = self.list(&spec.values, Vec::new(), "Values([]Expr)", |mapper, value, field| {
                    mapper.expr(value, vec![Kind::EXPRESSION], field)
                })?;
                self.append(&mut children, values)?;
                Ok(Node::composite(kinds::value_spec(keyword), label(field, "ValueSpec"), children))
            }
            Spec::Type(spec) => {
                let name = self.ident(&spec.name, Vec::new(), "Name")?;
                self.append(&mut children, name)?;
                if let Some(assign) = spec.assign {
                    let assign = self.expected_token(Vec::new(), assign, "=", "Assign")?;
                    self.append(&mut children, assign)?;
                }
                let ty = self.ty(&spec.ty, vec![Kind::TYPE], "Type")?;
                self.append(&mut children, ty)?;
                Ok(Node::composite(kinds::type_spec(&spec.ty), label(field, "TypeSpec"), children))
            }
        }
    }

    fn func_decl(&mut self, decl: &FuncDecl, field: &str) -> Mapped {
        let mut children = Vec::new();
        let func = self.keyword(Vec::new(), decl.func, "func", "Type.Func")?;
        self.append(&mut children, func)?;

        if let Some(recv) = &decl.recv {
            let recv = self.field_list(recv, vec![Kind::PARAMETER_LIST], "Recv", Fields::Params)?;
            self.append(&mut children, recv)?;
        }

        let name = self.ident(&decl.name, vec![Kind::FUNCTION_NAME], "Name")?;
        self.append(&mut children, name)?;

        let ty = self.signature(&decl.ty, Vec::new(), "Type")?;
        self.append(&mut children, ty)?;

        if let Some(body) = &decl.body {
            let body = self.block(body, vec![Kind::BLOCK], "Body")?;
            self.append(&mut children, body)?;
        }
        Ok(Node::composite(vec![Kind::FUNCTION], label(field, "FuncDecl"), children))
    }

    /// Function literals have the shape of a declaration without receiver and
    /// name.
    pub(super) fn func_lit(&mut self, lit: &ast::FuncLit, kinds: Vec<Kind>, field: &str) -> Mapped {
        let mut children = Vec::new();
        if let Some(func) = lit.ty.func {
            let func = self.keyword(Vec::new(), func, "func", "Type.Func")?;
            self.append(&mut children, func)?;
        }
        let ty = self.signature(&lit.ty, Vec::new(), "Type")?;
        self.append(&mut children, ty)?;

        let body = self.block(&lit.body, vec![Kind::BLOCK], "Body")?;
        self.append(&mut children, body)?;

        let kinds = with(kinds, &[Kind::FUNCTION_LITERAL]);
        Ok(Node::composite(kinds, label(field, "FuncLit"), children))
    }

    /// Parameters and results of a function type, without its `func` keyword.
    pub(super) fn signature(&mut self, ty: &FuncType, kinds: Vec<Kind>, field: &str) -> Mapped {
        let mut children = Vec::new();
        self.append_signature(&mut children, ty)?;
        Ok(Node::composite(kinds, label(field, "FuncType"), children))
    }

    pub(super) fn append_signature(
        &mut self,
        children: &mut Vec<Node>,
        ty: &FuncType,
    ) -> Result<(), MapError> {
        let params = self.field_list(&ty.params, vec![Kind::PARAMETER_LIST], "Params", Fields::Params)?;
        self.append(children, params)?;

        if let Some(results) = &ty.results {
            let results =
                self.field_list(results, vec![Kind::RESULT_LIST], "Results", Fields::Results)?;
            self.append(children, results)?;
        }
        Ok(())
    }

    pub(super) fn field_list(
        &mut self,
        list: &FieldList,
        kinds: Vec<Kind>,
        field: &str,
        fields: Fields,
    ) -> Mapped {
        let (opening, closing) = fields.brackets();
        let mut children = Vec::new();
        if let Some(pos) = list.opening {
            let opening = self.expected_token(Vec::new(), pos, opening, "Opening")?;
            self.append(&mut children, opening)?;
        }
        self.each(&mut children, &list.list, |mapper, item, field| mapper.field(item, fields, field))?;
        if let Some(pos) = list.closing {
            let closing = self.expected_token(Vec::new(), pos, closing, "Closing")?;
            self.append(&mut children, closing)?;
        }
        Ok(Node::composite(kinds, label(field, "FieldList"), children))
    }

    fn field(&mut self, item: &Field, fields: Fields, field: &str) -> Mapped {
        let (kinds, name_kinds) = match fields {
            Fields::Params => (vec![Kind::PARAMETER], Vec::new()),
            Fields::Results if item.names.is_empty() => (Vec::new(), Vec::new()),
            Fields::Results => (vec![Kind::VARIABLE_DECLARATION], vec![Kind::RESULT]),
            Fields::Struct | Fields::Interface => (Vec::new(), Vec::new()),
        };

        let mut children = Vec::new();
        let names = self.list(&item.names, Vec::new(), "Names([]*Ident)", |mapper, name, field| {
            mapper.ident(name, name_kinds.clone(), field)
        })?;
        self.append(&mut children, names)?;

        let ty = self.ty(&item.ty, vec![Kind::TYPE], "Type")?;
        self.append(&mut children, ty)?;

        if let Some(tag) = &item.tag {
            let tag = self.basic_lit(tag, Vec::new(), "Tag")?;
            self.append(&mut children, tag)?;
        }
        Ok(Node::composite(kinds, label(field, "Field"), children))
    }
}
