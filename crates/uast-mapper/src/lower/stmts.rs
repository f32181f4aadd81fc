use uast_syntax::ast::{
    AssignStmt, BlockStmt, CaseBlock, CaseClause, CommClause, ForStmt, IfStmt, RangeStmt, SelectStmt,
    Stmt, SwitchStmt, TypeSwitchStmt,
};
use uast_tree::{Kind, Node};

use super::exprs::is_panic;
use super::{label, with};
use crate::error::MapError;
use crate::kinds;
use crate::mapper::{Mapped, Mapper};

impl Mapper<'_> {
    /// `{`, the statements, `}`.
    pub(super) fn block(&mut self, block: &BlockStmt, kinds: Vec<Kind>, field: &str) -> Mapped {
        let mut children = Vec::new();
        let lbrace = self.expected_token(Vec::new(), block.lbrace, "{", "Lbrace")?;
        self.append(&mut children, lbrace)?;
        self.each(&mut children, &block.list, |mapper, stmt, field| {
            mapper.stmt(stmt, Vec::new(), field)
        })?;
        let rbrace = self.expected_token(Vec::new(), block.rbrace, "}", "Rbrace")?;
        self.append(&mut children, rbrace)?;
        Ok(Node::composite(kinds, label(field, "BlockStmt"), children))
    }

    /// Maps a statement. `kinds` holds what the parent contributes; the
    /// statement's own kinds follow, then `STATEMENT`.
    pub(super) fn stmt(&mut self, stmt: &Stmt, kinds: Vec<Kind>, field: &str) -> Mapped {
        let mut children = Vec::new();
        let (own, native): (Vec<Kind>, _) = match stmt {
            Stmt::Empty(empty) if empty.implicit => return Ok(None),
            Stmt::Empty(empty) => {
                let kinds = with(kinds, &[Kind::EMPTY_STATEMENT]);
                return self.expected_token(kinds, empty.semicolon, ";", &label(field, "EmptyStmt"));
            }
            Stmt::Block(block) => {
                let kinds = with(kinds, &[Kind::BLOCK, Kind::STATEMENT]);
                return self.block(block, kinds, field);
            }
            Stmt::Labeled(labeled) => {
                let label_node = self.ident(&labeled.label, Vec::new(), "Label")?;
                self.append(&mut children, label_node)?;
                let colon = self.expected_token(Vec::new(), labeled.colon, ":", "Colon")?;
                self.append(&mut children, colon)?;
                let inner = self.stmt(&labeled.stmt, Vec::new(), "Stmt")?;
                self.append(&mut children, inner)?;
                let kinds = with(kinds, &[Kind::LABEL]);
                return Ok(Node::composite(kinds, label(field, "LabeledStmt"), children));
            }
            Stmt::Decl(decl) => {
                let decl = self.gen_decl(decl, "Decl")?;
                self.append(&mut children, decl)?;
                (Vec::new(), "DeclStmt")
            }
            Stmt::Expr(expr) => {
                let x = self.expr(expr, vec![Kind::EXPRESSION], "X")?;
                self.append(&mut children, x)?;
                let own = if is_panic(expr) { vec![Kind::THROW] } else { Vec::new() };
                let kinds = with(with(kinds, &[Kind::STATEMENT]), &own);
                return Ok(Node::composite(kinds, label(field, "ExprStmt"), children));
            }
            Stmt::Send(send) => {
                let chan = self.expr(&send.chan, vec![Kind::EXPRESSION], "Chan")?;
                self.append(&mut children, chan)?;
                let arrow = self.expected_token(Vec::new(), send.arrow, "<-", "Arrow")?;
                self.append(&mut children, arrow)?;
                let value = self.expr(&send.value, vec![Kind::EXPRESSION], "Value")?;
                self.append(&mut children, value)?;
                (Vec::new(), "SendStmt")
            }
            Stmt::IncDec(inc_dec) => {
                let x = self.expr(&inc_dec.x, vec![Kind::OPERAND], "X")?;
                self.append(&mut children, x)?;
                let tok =
                    self.expected_token(vec![Kind::OPERATOR], inc_dec.tok_pos, inc_dec.op.text(), "Tok")?;
                self.append(&mut children, tok)?;
                (kinds::inc_dec(inc_dec.op).to_vec(), "IncDecStmt")
            }
            Stmt::Assign(assign) => {
                self.assign(&mut children, assign)?;
                (kinds::assign(assign.op), "AssignStmt")
            }
            Stmt::Go(go) => {
                let keyword = self.keyword(Vec::new(), go.go, "go", "Go")?;
                self.append(&mut children, keyword)?;
                let call = self.expr(&go.call, vec![Kind::EXPRESSION], "Call")?;
                self.append(&mut children, call)?;
                (Vec::new(), "GoStmt")
            }
            Stmt::Defer(defer) => {
                let keyword = self.keyword(Vec::new(), defer.defer, "defer", "Defer")?;
                self.append(&mut children, keyword)?;
                let call = self.expr(&defer.call, vec![Kind::EXPRESSION], "Call")?;
                self.append(&mut children, call)?;
                (Vec::new(), "DeferStmt")
            }
            Stmt::Return(ret) => {
                let keyword = self.keyword(Vec::new(), ret.return_pos, "return", "Return")?;
                self.append(&mut children, keyword)?;
                self.each(&mut children, &ret.results, |mapper, result, field| {
                    mapper.expr(result, vec![Kind::EXPRESSION], field)
                })?;
                (vec![Kind::RETURN], "ReturnStmt")
            }
            Stmt::Branch(branch) => {
                let keyword = self.keyword(Vec::new(), branch.tok_pos, branch.kind.text(), "Tok")?;
                self.append(&mut children, keyword)?;
                if let Some(name) = &branch.label {
                    let name = self.ident(name, vec![Kind::BRANCH_LABEL], "Label")?;
                    self.append(&mut children, name)?;
                }
                (vec![kinds::branch(branch.kind)], "BranchStmt")
            }
            Stmt::If(if_stmt) => {
                self.if_stmt(&mut children, if_stmt)?;
                (vec![Kind::IF], "IfStmt")
            }
            Stmt::Switch(switch) => {
                self.switch(&mut children, switch)?;
                (vec![Kind::SWITCH], "SwitchStmt")
            }
            Stmt::TypeSwitch(switch) => {
                self.type_switch(&mut children, switch)?;
                (vec![Kind::SWITCH], "TypeSwitchStmt")
            }
            Stmt::Select(select) => {
                self.select(&mut children, select)?;
                (Vec::new(), "SelectStmt")
            }
            Stmt::For(for_stmt) => {
                self.for_stmt(&mut children, for_stmt)?;
                (vec![Kind::LOOP, Kind::FOR], "ForStmt")
            }
            Stmt::Range(range) => {
                self.range(&mut children, range)?;
                (vec![Kind::LOOP, Kind::FOREACH], "RangeStmt")
            }
        };
        let kinds = with(with(kinds, &own), &[Kind::STATEMENT]);
        Ok(Node::composite(kinds, label(field, native), children))
    }

    fn assign(&mut self, children: &mut Vec<Node>, assign: &AssignStmt) -> Result<(), MapError> {
        let lhs = self.list(&assign.lhs, vec![Kind::ASSIGNMENT_TARGET_LIST], "Lhs([]Expr)", |mapper, target, field| {
            mapper.expr(target, vec![Kind::ASSIGNMENT_TARGET], field)
        })?;
        self.append(children, lhs)?;

        let tok =
            self.expected_token(vec![Kind::ASSIGNMENT_OPERATOR], assign.tok_pos, assign.op.text(), "Tok")?;
        self.append(children, tok)?;

        let rhs = self.list(&assign.rhs, vec![Kind::ASSIGNMENT_VALUE_LIST], "Rhs([]Expr)", |mapper, value, field| {
            mapper.expr(value, vec![Kind::ASSIGNMENT_VALUE, Kind::EXPRESSION], field)
        })?;
        self.append(children, rhs)
    }

    fn if_stmt(&mut self, children: &mut Vec<Node>, if_stmt: &IfStmt) -> Result<(), MapError> {
        let keyword = self.keyword(vec![Kind::IF_KEYWORD], if_stmt.if_pos, "if", "If")?;
        self.append(children, keyword)?;

        let mut condition = Vec::new();
        if let Some(init) = &if_stmt.init {
            let init = self.stmt(init, Vec::new(), "Init")?;
            self.append(&mut condition, init)?;
        }
        let cond = self.expr(&if_stmt.cond, vec![Kind::EXPRESSION], "Cond")?;
        self.append(&mut condition, cond)?;
        self.append(children, Node::composite(vec![Kind::CONDITION], "InitAndCond", condition))?;

        let body = self.block(&if_stmt.body, vec![Kind::THEN, Kind::BLOCK], "Body")?;
        self.append(children, body)?;

        let else_branch = match &if_stmt.else_branch {
            Some(Stmt::Block(block)) => self.block(block, vec![Kind::ELSE, Kind::BLOCK], "Else")?,
            Some(stmt) => self.stmt(stmt, vec![Kind::ELSE], "Else")?,
            None => None,
        };
        self.append(children, else_branch)
    }

    fn switch(&mut self, children: &mut Vec<Node>, switch: &SwitchStmt) -> Result<(), MapError> {
        let keyword = self.keyword(Vec::new(), switch.switch, "switch", "Switch")?;
        self.append(children, keyword)?;
        if let Some(init) = &switch.init {
            let init = self.stmt(init, Vec::new(), "Init")?;
            self.append(children, init)?;
        }
        if let Some(tag) = &switch.tag {
            let tag = self.expr(tag, vec![Kind::EXPRESSION], "Tag")?;
            self.append(children, tag)?;
        }
        self.case_block(children, &switch.body, false)
    }

    fn type_switch(
        &mut self,
        children: &mut Vec<Node>,
        switch: &TypeSwitchStmt,
    ) -> Result<(), MapError> {
        let keyword = self.keyword(Vec::new(), switch.switch, "switch", "Switch")?;
        self.append(children, keyword)?;
        if let Some(init) = &switch.init {
            let init = self.stmt(init, Vec::new(), "Init")?;
            self.append(children, init)?;
        }
        let assign = self.stmt(&switch.assign, Vec::new(), "Assign")?;
        self.append(children, assign)?;
        self.case_block(children, &switch.body, true)
    }

    /// The braces and clauses of a switch, appended to the switch itself.
    fn case_block(
        &mut self,
        children: &mut Vec<Node>,
        body: &CaseBlock,
        is_type_switch: bool,
    ) -> Result<(), MapError> {
        let lbrace = self.expected_token(Vec::new(), body.lbrace, "{", "Lbrace")?;
        self.append(children, lbrace)?;
        self.each(children, &body.clauses, |mapper, clause, field| {
            mapper.case_clause(clause, is_type_switch, field)
        })?;
        let rbrace = self.expected_token(Vec::new(), body.rbrace, "}", "Rbrace")?;
        self.append(children, rbrace)
    }

    fn case_clause(&mut self, clause: &CaseClause, is_type_switch: bool, field: &str) -> Mapped {
        let mut children = Vec::new();
        let (keyword, kinds) = if clause.is_default() {
            ("default", vec![Kind::CASE, Kind::DEFAULT_CASE])
        } else {
            ("case", vec![Kind::CASE])
        };
        let keyword = self.keyword(Vec::new(), clause.case, keyword, "Case")?;
        self.append(&mut children, keyword)?;

        self.each(&mut children, &clause.list, |mapper, value, field| {
            if is_type_switch {
                mapper.ty(value, vec![Kind::CONDITION, Kind::TYPE], field)
            } else {
                mapper.expr(value, vec![Kind::CONDITION, Kind::EXPRESSION], field)
            }
        })?;

        let colon = self.expected_token(Vec::new(), clause.colon, ":", "Colon")?;
        self.append(&mut children, colon)?;
        self.each(&mut children, &clause.body, |mapper, stmt, field| {
            mapper.stmt(stmt, Vec::new(), field)
        })?;
        Ok(Node::composite(kinds, label(field, "CaseClause"), children))
    }

    fn select(&mut self, children: &mut Vec<Node>, select: &SelectStmt) -> Result<(), MapError> {
        let keyword = self.keyword(Vec::new(), select.select, "select", "Select")?;
        self.append(children, keyword)?;
        let lbrace = self.expected_token(Vec::new(), select.lbrace, "{", "Lbrace")?;
        self.append(children, lbrace)?;
        self.each(children, &select.clauses, Self::comm_clause)?;
        let rbrace = self.expected_token(Vec::new(), select.rbrace, "}", "Rbrace")?;
        self.append(children, rbrace)
    }

    fn comm_clause(&mut self, clause: &CommClause, field: &str) -> Mapped {
        let mut children = Vec::new();
        let keyword = if clause.comm.is_some() { "case" } else { "default" };
        let keyword = self.keyword(Vec::new(), clause.case, keyword, "Case")?;
        self.append(&mut children, keyword)?;
        if let Some(comm) = &clause.comm {
            let comm = self.stmt(comm, Vec::new(), "Comm")?;
            self.append(&mut children, comm)?;
        }
        let colon = self.expected_token(Vec::new(), clause.colon, ":", "Colon")?;
        self.append(&mut children, colon)?;
        self.each(&mut children, &clause.body, |mapper, stmt, field| {
            mapper.stmt(stmt, Vec::new(), field)
        })?;
        Ok(Node::composite(Vec::new(), label(field, "CommClause"), children))
    }

    fn for_stmt(&mut self, children: &mut Vec<Node>, for_stmt: &ForStmt) -> Result<(), MapError> {
        let keyword = self.keyword(vec![Kind::FOR_KEYWORD], for_stmt.for_pos, "for", "For")?;
        self.append(children, keyword)?;
        if let Some(init) = &for_stmt.init {
            let init = self.stmt(init, vec![Kind::FOR_INIT], "Init")?;
            self.append(children, init)?;
        }
        if let Some(cond) = &for_stmt.cond {
            let cond = self.expr(cond, vec![Kind::CONDITION, Kind::EXPRESSION], "Cond")?;
            self.append(children, cond)?;
        }
        if let Some(post) = &for_stmt.post {
            let post = self.stmt(post, vec![Kind::FOR_UPDATE], "Post")?;
            self.append(children, post)?;
        }
        let body = self.block(&for_stmt.body, vec![Kind::BODY, Kind::BLOCK], "Body")?;
        self.append(children, body)
    }

    fn range(&mut self, children: &mut Vec<Node>, range: &RangeStmt) -> Result<(), MapError> {
        let keyword = self.keyword(vec![Kind::FOR_KEYWORD], range.for_pos, "for", "For")?;
        self.append(children, keyword)?;
        for (part, field) in [(&range.key, "Key"), (&range.value, "Value")] {
            if let Some(part) = part {
                let part = self.expr(part, Vec::new(), field)?;
                self.append(children, part)?;
            }
        }
        if let Some((pos, op)) = range.tok {
            let tok = self.expected_token(vec![Kind::ASSIGNMENT_OPERATOR], pos, op.text(), "Tok")?;
            self.append(children, tok)?;
        }
        let x = self.expr(&range.x, vec![Kind::EXPRESSION], "X")?;
        self.append(children, x)?;
        let body = self.block(&range.body, vec![Kind::BODY, Kind::BLOCK], "Body")?;
        self.append(children, body)
    }
}
