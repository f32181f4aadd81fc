use expect_test::{Expect, expect};
use text_size::TextSize;
use uast_syntax::ast::{
    ChanDir, Decl, Expr, Field, FieldList, FuncType, GenDecl, Spec, Stmt, TypeSwitchStmt,
};

use crate::parse;

fn sexpr(head: &str, parts: impl IntoIterator<Item = String>) -> String {
    let mut out = format!("({head}");
    for part in parts {
        out.push(' ');
        out.push_str(&part);
    }
    out.push(')');
    out
}

fn opt(expr: Option<&Expr>) -> String {
    expr.map_or_else(|| "_".to_owned(), print_expr)
}

fn field(field: &Field) -> String {
    let names = field.names.iter().map(|name| name.name.clone());
    let tag = field.tag.iter().map(|tag| tag.value.clone());
    let parts: Vec<_> = names.chain([print_expr(&field.ty)]).chain(tag).collect();
    format!("[{}]", parts.join(" "))
}

fn fields(list: &FieldList) -> impl Iterator<Item = String> + '_ {
    list.list.iter().map(field)
}

fn func_type(ty: &FuncType) -> String {
    let mut parts: Vec<_> = fields(&ty.params).collect();
    if let Some(results) = &ty.results {
        parts.push("->".to_owned());
        parts.extend(fields(results));
    }
    sexpr("func", parts)
}

fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Ident(ident) => ident.name.clone(),
        Expr::BasicLit(lit) => lit.value.clone(),
        Expr::Ellipsis(ellipsis) => match &ellipsis.elt {
            Some(elt) => sexpr("...", [print_expr(elt)]),
            None => "...".to_owned(),
        },
        Expr::FuncLit(lit) => sexpr("func-lit", [func_type(&lit.ty), block(&lit.body.list)]),
        Expr::CompositeLit(lit) => {
            sexpr("lit", [opt(lit.ty.as_ref())].into_iter().chain(lit.elts.iter().map(print_expr)))
        }
        Expr::Paren(paren) => sexpr("paren", [print_expr(&paren.x)]),
        Expr::Selector(selector) => sexpr(".", [print_expr(&selector.x), selector.sel.name.clone()]),
        Expr::Index(index) => sexpr("index", [print_expr(&index.x), print_expr(&index.index)]),
        Expr::Slice(slice) => {
            let mut parts = vec![print_expr(&slice.x), opt(slice.low.as_ref()), opt(slice.high.as_ref())];
            if slice.slice3 {
                parts.push(opt(slice.max.as_ref()));
            }
            sexpr("slice", parts)
        }
        Expr::TypeAssert(assert) => {
            let ty = assert.ty.as_ref().map_or_else(|| "type".to_owned(), print_expr);
            sexpr("assert", [print_expr(&assert.x), ty])
        }
        Expr::Call(call) => {
            let args = call.args.iter().map(print_expr);
            let ellipsis = call.ellipsis.map(|_| "...".to_owned());
            sexpr("call", [print_expr(&call.fun)].into_iter().chain(args).chain(ellipsis))
        }
        Expr::Star(star) => sexpr("*", [print_expr(&star.x)]),
        Expr::Unary(unary) => sexpr(unary.op.text(), [print_expr(&unary.x)]),
        Expr::Binary(binary) => {
            sexpr(binary.op.text(), [print_expr(&binary.x), print_expr(&binary.y)])
        }
        Expr::KeyValue(kv) => sexpr(":", [print_expr(&kv.key), print_expr(&kv.value)]),
        Expr::ArrayType(array) => {
            let head = format!("[{}]", array.len.as_ref().map(print_expr).unwrap_or_default());
            sexpr(&head, [print_expr(&array.elt)])
        }
        Expr::StructType(ty) => sexpr("struct", fields(&ty.fields)),
        Expr::FuncType(ty) => func_type(ty),
        Expr::InterfaceType(ty) => sexpr("interface", fields(&ty.methods)),
        Expr::MapType(ty) => sexpr("map", [print_expr(&ty.key), print_expr(&ty.value)]),
        Expr::ChanType(ty) => {
            let head = match ty.dir {
                ChanDir::Both => "chan",
                ChanDir::Send => "chan<-",
                ChanDir::Recv => "<-chan",
            };
            sexpr(head, [print_expr(&ty.value)])
        }
    }
}

fn list(exprs: &[Expr]) -> String {
    format!("[{}]", exprs.iter().map(print_expr).collect::<Vec<_>>().join(" "))
}

fn block(stmts: &[Stmt]) -> String {
    format!("{{{}}}", stmts.iter().map(print_stmt).collect::<Vec<_>>().join("; "))
}

fn clause(is_default: bool, head: Vec<String>, body: &[Stmt]) -> String {
    let keyword = if is_default { "default" } else { "case" };
    let parts = head.into_iter().chain([":".to_owned()]).chain(body.iter().map(print_stmt));
    sexpr(keyword, parts)
}

fn print_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Decl(decl) => gen_decl(decl).join("; "),
        Stmt::Empty(empty) => (if empty.implicit { "empty" } else { ";" }).to_owned(),
        Stmt::Labeled(labeled) => {
            sexpr("label", [labeled.label.name.clone(), print_stmt(&labeled.stmt)])
        }
        Stmt::Expr(expr) => print_expr(expr),
        Stmt::Send(send) => sexpr("<-", [print_expr(&send.chan), print_expr(&send.value)]),
        Stmt::IncDec(inc_dec) => sexpr(inc_dec.op.text(), [print_expr(&inc_dec.x)]),
        Stmt::Assign(assign) => sexpr(assign.op.text(), [list(&assign.lhs), list(&assign.rhs)]),
        Stmt::Go(go) => sexpr("go", [print_expr(&go.call)]),
        Stmt::Defer(defer) => sexpr("defer", [print_expr(&defer.call)]),
        Stmt::Return(ret) => sexpr("return", ret.results.iter().map(print_expr)),
        Stmt::Branch(branch) => {
            sexpr(branch.kind.text(), branch.label.iter().map(|label| label.name.clone()))
        }
        Stmt::Block(stmts) => block(&stmts.list),
        Stmt::If(if_stmt) => {
            let mut parts = Vec::new();
            if let Some(init) = &if_stmt.init {
                parts.extend([print_stmt(init), ";".to_owned()]);
            }
            parts.extend([print_expr(&if_stmt.cond), block(&if_stmt.body.list)]);
            if let Some(else_branch) = &if_stmt.else_branch {
                parts.extend(["else".to_owned(), print_stmt(else_branch)]);
            }
            sexpr("if", parts)
        }
        Stmt::Switch(switch) => {
            let mut parts = Vec::new();
            if let Some(init) = &switch.init {
                parts.extend([print_stmt(init), ";".to_owned()]);
            }
            parts.extend(switch.tag.as_ref().map(print_expr));
            parts.extend(switch.body.clauses.iter().map(|c| {
                clause(c.is_default(), c.list.iter().map(print_expr).collect(), &c.body)
            }));
            sexpr("switch", parts)
        }
        Stmt::TypeSwitch(switch) => {
            let TypeSwitchStmt { init, assign, body, .. } = &**switch;
            let mut parts = Vec::new();
            if let Some(init) = init {
                parts.extend([print_stmt(init), ";".to_owned()]);
            }
            parts.push(print_stmt(assign));
            parts.extend(body.clauses.iter().map(|c| {
                clause(c.is_default(), c.list.iter().map(print_expr).collect(), &c.body)
            }));
            sexpr("type-switch", parts)
        }
        Stmt::Select(select) => sexpr(
            "select",
            select.clauses.iter().map(|c| {
                clause(c.comm.is_none(), c.comm.iter().map(print_stmt).collect(), &c.body)
            }),
        ),
        Stmt::For(for_stmt) => {
            let init = for_stmt.init.as_ref().map_or_else(|| "_".to_owned(), print_stmt);
            let post = for_stmt.post.as_ref().map_or_else(|| "_".to_owned(), print_stmt);
            let cond = opt(for_stmt.cond.as_ref());
            sexpr("for", [init, cond, post, block(&for_stmt.body.list)])
        }
        Stmt::Range(range) => {
            let tok = range.tok.map_or_else(|| "_".to_owned(), |(_, op)| op.text().to_owned());
            sexpr(
                "range",
                [
                    opt(range.key.as_ref()),
                    opt(range.value.as_ref()),
                    tok,
                    print_expr(&range.x),
                    block(&range.body.list),
                ],
            )
        }
    }
}

fn gen_decl(decl: &GenDecl) -> Vec<String> {
    let keyword = decl.keyword.text();
    decl.specs
        .iter()
        .map(|spec| match spec {
            Spec::Import(spec) => {
                let name = spec.name.iter().map(|name| name.name.clone());
                sexpr(keyword, name.chain([spec.path.value.clone()]))
            }
            Spec::Value(spec) => {
                let mut parts: Vec<_> = spec.names.iter().map(|name| name.name.clone()).collect();
                parts.extend(spec.ty.as_ref().map(print_expr));
                if !spec.values.is_empty() {
                    parts.push("=".to_owned());
                    parts.extend(spec.values.iter().map(print_expr));
                }
                sexpr(keyword, parts)
            }
            Spec::Type(spec) => {
                let mut parts = vec![spec.name.name.clone()];
                if spec.assign.is_some() {
                    parts.push("=".to_owned());
                }
                parts.push(print_expr(&spec.ty));
                sexpr(keyword, parts)
            }
        })
        .collect()
}

fn print_decls(text: &str) -> String {
    let file = parse(text).unwrap_or_else(|error| panic!("{error}"));
    let mut lines = Vec::new();
    for decl in &file.decls {
        match decl {
            Decl::Gen(decl) => lines.extend(gen_decl(decl)),
            Decl::Func(func) => {
                let mut parts = Vec::new();
                if let Some(recv) = &func.recv {
                    parts.push(format!("({})", fields(recv).collect::<Vec<_>>().join(" ")));
                }
                parts.push(func.name.name.clone());
                parts.push(func_type(&func.ty));
                parts.extend(func.body.as_ref().map(|body| block(&body.list)));
                lines.push(sexpr("func", parts));
            }
        }
    }
    lines.join("\n")
}

fn check_expr(text: &str, expect: Expect) {
    let actual = print_decls(&format!("package p\nvar _ = {text}\n"));
    let actual = actual.strip_prefix("(var _ = ").and_then(|rest| rest.strip_suffix(')'));
    expect.assert_eq(actual.unwrap_or_default());
}

fn check_stmts(body: &str, expect: Expect) {
    let file = parse(&format!("package p\nfunc f() {{\n{body}\n}}\n"))
        .unwrap_or_else(|error| panic!("{error}"));
    let Decl::Func(func) = &file.decls[0] else { panic!("expected a function") };
    let stmts = &func.body.as_ref().expect("function body").list;
    expect.assert_eq(&stmts.iter().map(print_stmt).collect::<Vec<_>>().join("\n"));
}

fn check_error(text: &str, expect: Expect) {
    let error = parse(text).expect_err("parse should fail");
    expect.assert_eq(error.message());
}

#[test]
fn binary_precedence() {
    check_expr("a + b*c == d || !e", expect![[r#"(|| (== (+ a (* b c)) d) (! e))"#]]);
    check_expr("a - b - c", expect![[r#"(- (- a b) c)"#]]);
    check_expr("a &^ b << 2", expect![[r#"(<< (&^ a b) 2)"#]]);
}

#[test]
fn primary_suffixes() {
    check_expr("-x.y(1, z...)[2]", expect![[r#"(- (index (call (. x y) 1 z ...) 2))"#]]);
    check_expr("s[1:]", expect![[r#"(slice s 1 _)"#]]);
    check_expr("s[:2:3]", expect![[r#"(slice s _ 2 3)"#]]);
    check_expr("x.(T)", expect![[r#"(assert x T)"#]]);
    check_expr("<-ch", expect![[r#"(<- ch)"#]]);
    check_expr("*p", expect![[r#"(* p)"#]]);
}

#[test]
fn composite_literals() {
    check_expr("[]int{1, 2}", expect![[r#"(lit ([] int) 1 2)"#]]);
    check_expr(r#"map[string][]int{"a": {1}}"#, expect![[r#"(lit (map string ([] int)) (: "a" (lit _ 1)))"#]]);
    check_expr("[...]T{}", expect![[r#"(lit ([...] T))"#]]);
    check_expr("pkg.T{X: 1}", expect![[r#"(lit (. pkg T) (: X 1))"#]]);
}

#[test]
fn func_literal_and_types() {
    check_expr(
        "func(a, b int) error { return nil }",
        expect![[r#"(func-lit (func [a b int] -> [error]) {(return nil)})"#]],
    );
    check_expr("make(chan<- int, 1)", expect![[r#"(call make (chan<- int) 1)"#]]);
    check_expr("(<-chan int)(nil)", expect![[r#"(call (paren (<-chan int)) nil)"#]]);
}

#[test]
fn simple_statements() {
    check_stmts(
        "x := 1\nx += 2\nx++\nch <- x\nL:\n\tfor {\n\t\tbreak L\n\t}",
        expect![[r#"
            (:= [x] [1])
            (+= [x] [2])
            (++ x)
            (<- ch x)
            (label L (for _ _ _ {(break L)}))"#]],
    );
}

#[test]
fn if_else_chain() {
    check_stmts(
        "if v, ok := m[k]; ok {\n} else if x {\n} else {\n\treturn\n}",
        expect![[r#"(if (:= [v ok] [(index m k)]) ; ok {} else (if x {} else {(return)}))"#]],
    );
}

#[test]
fn composite_literal_in_control_header() {
    check_stmts("if x == (T{}) {\n}", expect![[r#"(if (== x (paren (lit T))) {})"#]]);
    check_stmts(
        "for _, s := range []string{\"a\"} {\n}",
        expect![[r#"(range _ s := (lit ([] string) "a") {})"#]],
    );
}

#[test]
fn switches() {
    check_stmts(
        "switch x := f(); x {\ncase 1, 2:\n\tg()\ndefault:\n}",
        expect![[r#"(switch (:= [x] [(call f)]) ; x (case 1 2 : (call g)) (default :))"#]],
    );
    check_stmts(
        "switch v := x.(type) {\ncase nil, *T:\n}",
        expect![[r#"(type-switch (:= [v] [(assert x type)]) (case nil (* T) :))"#]],
    );
}

#[test]
fn select_clauses() {
    check_stmts(
        "select {\ncase v := <-ch:\n\tuse(v)\ncase out <- 1:\ndefault:\n}",
        expect![[r#"(select (case (:= [v] [(<- ch)]) : (call use v)) (case (<- out 1) :) (default :))"#]],
    );
}

#[test]
fn for_loops() {
    check_stmts(
        "for i := 0; i < n; i++ {\n}\nfor k, v := range m {\n}\nfor range ch {\n}",
        expect![[r#"
            (for (:= [i] [0]) (< i n) (++ i) {})
            (range k v := m {})
            (range _ _ _ ch {})"#]],
    );
}

#[test]
fn go_defer_and_local_decls() {
    check_stmts(
        "var x, y int\ndefer f()\ngo func() {}()",
        expect![[r#"
            (var x y int)
            (defer (call f))
            (go (call (func-lit (func) {})))"#]],
    );
}

#[test]
fn declarations() {
    let text = r#"package main

import (
	"fmt"
	f "os"
)

const A, B = 1, 2

type (
	P struct {
		x, y int `json:"x"`
		*Q
	}
	I interface {
		M(a int) (n int, err error)
		io.Reader
	}
	Alias = int
)

func (p *P) Method(args ...string) {}
"#;
    expect![[r#"
        (import "fmt")
        (import f "os")
        (const A B = 1 2)
        (type P (struct [x y int `json:"x"`] [(* Q)]))
        (type I (interface [M (func [a int] -> [n int] [err error])] [(. io Reader)]))
        (type Alias = int)
        (func ([p (* P)]) Method (func [args (... string)]) {})"#]]
    .assert_eq(&print_decls(text));
}

#[test]
fn positions_are_byte_offsets() {
    let file = parse("package main\n\nfunc main() {}\n").unwrap();
    assert_eq!(file.package, TextSize::new(0));
    assert_eq!(file.name.pos, TextSize::new(8));
    let Decl::Func(func) = &file.decls[0] else { panic!("expected a function") };
    assert_eq!(func.func, TextSize::new(14));
    assert_eq!(func.name.pos, TextSize::new(19));
    assert_eq!(func.ty.params.opening, Some(TextSize::new(23)));
    assert_eq!(func.body.as_ref().map(|body| body.rbrace), Some(TextSize::new(27)));
    assert_eq!(file.size, TextSize::new(29));
}

#[test]
fn raw_strings_lose_carriage_returns() {
    let file = parse("package p\r\nvar s = `a\r\nb`\r\n").unwrap();
    let Decl::Gen(decl) = &file.decls[0] else { panic!("expected a declaration") };
    let Spec::Value(spec) = &decl.specs[0] else { panic!("expected a value spec") };
    let Expr::BasicLit(lit) = &spec.values[0] else { panic!("expected a literal") };

    assert_eq!(lit.pos, TextSize::new(19));
    assert_eq!(lit.value, "`a\nb`");
    assert_eq!(lit.end(), TextSize::new(24));
}

#[test]
fn comments_are_grouped_by_blank_lines() {
    let file = parse("package p\n\n// a\n// b\n\n// c\nvar x = 1 /* d */\n").unwrap();
    let groups: Vec<Vec<&str>> = file
        .comments
        .iter()
        .map(|group| group.list.iter().map(|comment| comment.text.as_str()).collect())
        .collect();

    assert_eq!(groups, vec![vec!["// a", "// b"], vec!["// c"], vec!["/* d */"]]);
}

#[test]
fn block_comment_text_drops_carriage_returns() {
    let file = parse("/* a\r\nb */\r\npackage p\r\n").unwrap();
    let comment = file.comments().next().unwrap();

    assert_eq!(comment.slash, TextSize::new(0));
    assert_eq!(comment.text, "/* a\nb */");
}

#[test]
fn leading_byte_order_mark_is_skipped() {
    let file = parse("\u{feff}package p\n").unwrap();

    assert_eq!(file.package, TextSize::new(3));
    assert_eq!(file.name.pos, TextSize::new(11));
    assert_eq!(file.size, TextSize::new(13));
}

#[test]
fn syntax_errors() {
    check_error("package", expect![[r#"expected identifier, found end of file"#]]);
    check_error("package p\nx := 1\n", expect![[r#"expected declaration, found 'x'"#]]);
    check_error(
        "package p\nfunc f() {\n\tx :=\n}\n",
        expect![[r#"expected expression, found '}'"#]],
    );
    check_error(
        "package p\nfunc f[T any]() {}\n",
        expect![[r#"type parameters are not supported"#]],
    );
    check_error(
        "package p\nfunc f() {\n\tgo x\n}\n",
        expect![[r#"function must be invoked in go statement"#]],
    );
    check_error(
        "package p\nfunc f() {\n\tif {\n\t}\n}\n",
        expect![[r#"missing condition in if statement"#]],
    );
}
