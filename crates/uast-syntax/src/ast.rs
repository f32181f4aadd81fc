//! The positioned native tree of a Go source file.
//!
//! Nodes record byte offsets only for the tokens Go's own syntax tree
//! records: keywords, operators, the brackets that delimit a construct, and
//! the start of identifiers and literals. Commas, the `.` of a selector, the
//! `=` of a value spec, the `]` of an array type, slice colons and the
//! `range`, `else`, `chan` (after `<-`) and `type` (in `.(type)`) keywords
//! have no position of their own.
//!
//! Literal and comment values are stored as text, and their length gives
//! their end. Raw strings and comments have every `\r` removed from their
//! text, so in a file with CRLF line endings their stored length is shorter
//! than their source span.

use text_size::TextSize;

pub type Pos = TextSize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub package: Pos,
    pub name: Ident,
    pub decls: Vec<Decl>,
    pub comments: Vec<CommentGroup>,
    /// Length of the text the tree was parsed from.
    pub size: TextSize,
}

impl File {
    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter().flat_map(|group| &group.list)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub slash: Pos,
    pub text: String,
}

impl Comment {
    pub fn end(&self) -> Pos {
        self.slash + TextSize::of(self.text.as_str())
    }
}

/// Comments with no token or empty line between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    pub list: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub pos: Pos,
    pub name: String,
}

impl Ident {
    pub fn end(&self) -> Pos {
        self.pos + TextSize::of(self.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicLit {
    pub pos: Pos,
    pub kind: LitKind,
    pub value: String,
}

impl BasicLit {
    pub fn end(&self) -> Pos {
        self.pos + TextSize::of(self.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: Expr,
    pub tag: Option<BasicLit>,
}

impl Field {
    pub fn start(&self) -> Pos {
        self.names.first().map_or_else(|| self.ty.start(), |name| name.pos)
    }

    pub fn end(&self) -> Pos {
        self.tag.as_ref().map_or_else(|| self.ty.end(), BasicLit::end)
    }
}

/// Parameters, results, struct fields or interface methods.
///
/// `opening` and `closing` are absent for a single unparenthesized result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList {
    pub opening: Option<Pos>,
    pub list: Vec<Field>,
    pub closing: Option<Pos>,
}

impl FieldList {
    pub fn start(&self) -> Option<Pos> {
        self.opening.or_else(|| self.list.first().map(Field::start))
    }

    pub fn end(&self) -> Option<Pos> {
        self.closing
            .map(|closing| closing + TextSize::new(1))
            .or_else(|| self.list.last().map(Field::end))
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    LogicalOr,
    LogicalAnd,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    Add,
    Sub,
    Or,
    Xor,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
    And,
    AndNot,
}

impl BinaryOp {
    pub const fn text(self) -> &'static str {
        match self {
            Self::LogicalOr => "||",
            Self::LogicalAnd => "&&",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::And => "&",
            Self::AndNot => "&^",
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            Self::LogicalOr => 1,
            Self::LogicalAnd => 2,
            Self::Eq | Self::Neq | Self::Lt | Self::Lte | Self::Gt | Self::Gte => 3,
            Self::Add | Self::Sub | Self::Or | Self::Xor => 4,
            Self::Mul | Self::Div | Self::Rem | Self::Shl | Self::Shr | Self::And | Self::AndNot => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    Xor,
    And,
    Arrow,
}

impl UnaryOp {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "!",
            Self::Xor => "^",
            Self::And => "&",
            Self::Arrow => "<-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Define,
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    AndNot,
}

impl AssignOp {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Define => ":=",
            Self::Assign => "=",
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
            Self::Rem => "%=",
            Self::And => "&=",
            Self::Or => "|=",
            Self::Xor => "^=",
            Self::Shl => "<<=",
            Self::Shr => ">>=",
            Self::AndNot => "&^=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecOp {
    Inc,
    Dec,
}

impl IncDecOp {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Inc => "++",
            Self::Dec => "--",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Break,
    Continue,
    Goto,
    Fallthrough,
}

impl BranchKind {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Break => "break",
            Self::Continue => "continue",
            Self::Goto => "goto",
            Self::Fallthrough => "fallthrough",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Ident(Ident),
    BasicLit(BasicLit),
    Ellipsis(Box<Ellipsis>),
    FuncLit(Box<FuncLit>),
    CompositeLit(Box<CompositeLit>),
    Paren(Box<ParenExpr>),
    Selector(Box<SelectorExpr>),
    Index(Box<IndexExpr>),
    Slice(Box<SliceExpr>),
    TypeAssert(Box<TypeAssertExpr>),
    Call(Box<CallExpr>),
    Star(Box<StarExpr>),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
    KeyValue(Box<KeyValueExpr>),
    ArrayType(Box<ArrayType>),
    StructType(Box<StructType>),
    FuncType(Box<FuncType>),
    InterfaceType(Box<InterfaceType>),
    MapType(Box<MapType>),
    ChanType(Box<ChanType>),
}

/// `...` in a variadic parameter or in an array length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ellipsis {
    pub pos: Pos,
    pub elt: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncLit {
    pub ty: FuncType,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeLit {
    pub ty: Option<Expr>,
    pub lbrace: Pos,
    pub elts: Vec<Expr>,
    pub rbrace: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenExpr {
    pub lparen: Pos,
    pub x: Expr,
    pub rparen: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorExpr {
    pub x: Expr,
    pub sel: Ident,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexExpr {
    pub x: Expr,
    pub lbrack: Pos,
    pub index: Expr,
    pub rbrack: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceExpr {
    pub x: Expr,
    pub lbrack: Pos,
    pub low: Option<Expr>,
    pub high: Option<Expr>,
    pub max: Option<Expr>,
    pub slice3: bool,
    pub rbrack: Pos,
}

/// `x.(T)`, or `x.(type)` in a type switch when `ty` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAssertExpr {
    pub x: Expr,
    pub lparen: Pos,
    pub ty: Option<Expr>,
    pub rparen: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    pub fun: Expr,
    pub lparen: Pos,
    pub args: Vec<Expr>,
    pub ellipsis: Option<Pos>,
    pub rparen: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarExpr {
    pub star: Pos,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpr {
    pub op_pos: Pos,
    pub op: UnaryOp,
    pub x: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub x: Expr,
    pub op_pos: Pos,
    pub op: BinaryOp,
    pub y: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValueExpr {
    pub key: Expr,
    pub colon: Pos,
    pub value: Expr,
}

/// `[N]T`, `[...]T`, or the slice type `[]T` when `len` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayType {
    pub lbrack: Pos,
    pub len: Option<Expr>,
    pub elt: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    pub struct_pos: Pos,
    pub fields: FieldList,
}

/// `func` is absent for interface methods and function declarations, whose
/// keyword belongs to the enclosing node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncType {
    pub func: Option<Pos>,
    pub params: FieldList,
    pub results: Option<FieldList>,
}

impl FuncType {
    pub fn end(&self) -> Pos {
        self.results
            .as_ref()
            .and_then(FieldList::end)
            .or_else(|| self.params.end())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub interface_pos: Pos,
    pub methods: FieldList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapType {
    pub map_pos: Pos,
    pub key: Expr,
    pub value: Expr,
}

/// `begin` is the `chan` keyword, or the `<-` of a receive-only channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChanType {
    pub begin: Pos,
    pub arrow: Option<Pos>,
    pub dir: ChanDir,
    pub value: Expr,
}

impl Expr {
    pub fn start(&self) -> Pos {
        match self {
            Self::Ident(ident) => ident.pos,
            Self::BasicLit(lit) => lit.pos,
            Self::Ellipsis(ellipsis) => ellipsis.pos,
            Self::FuncLit(lit) => lit.ty.func.unwrap_or(lit.body.lbrace),
            Self::CompositeLit(lit) => lit.ty.as_ref().map_or(lit.lbrace, Self::start),
            Self::Paren(paren) => paren.lparen,
            Self::Selector(selector) => selector.x.start(),
            Self::Index(index) => index.x.start(),
            Self::Slice(slice) => slice.x.start(),
            Self::TypeAssert(assert) => assert.x.start(),
            Self::Call(call) => call.fun.start(),
            Self::Star(star) => star.star,
            Self::Unary(unary) => unary.op_pos,
            Self::Binary(binary) => binary.x.start(),
            Self::KeyValue(kv) => kv.key.start(),
            Self::ArrayType(array) => array.lbrack,
            Self::StructType(ty) => ty.struct_pos,
            Self::FuncType(ty) => ty.func.or_else(|| ty.params.start()).unwrap_or_default(),
            Self::InterfaceType(ty) => ty.interface_pos,
            Self::MapType(ty) => ty.map_pos,
            Self::ChanType(ty) => ty.begin,
        }
    }

    pub fn end(&self) -> Pos {
        let one = TextSize::new(1);
        match self {
            Self::Ident(ident) => ident.end(),
            Self::BasicLit(lit) => lit.end(),
            Self::Ellipsis(ellipsis) => {
                ellipsis.elt.as_ref().map_or(ellipsis.pos + TextSize::new(3), Self::end)
            }
            Self::FuncLit(lit) => lit.body.end(),
            Self::CompositeLit(lit) => lit.rbrace + one,
            Self::Paren(paren) => paren.rparen + one,
            Self::Selector(selector) => selector.sel.end(),
            Self::Index(index) => index.rbrack + one,
            Self::Slice(slice) => slice.rbrack + one,
            Self::TypeAssert(assert) => assert.rparen + one,
            Self::Call(call) => call.rparen + one,
            Self::Star(star) => star.x.end(),
            Self::Unary(unary) => unary.x.end(),
            Self::Binary(binary) => binary.y.end(),
            Self::KeyValue(kv) => kv.value.end(),
            Self::ArrayType(array) => array.elt.end(),
            Self::StructType(ty) => ty.fields.end().unwrap_or(ty.struct_pos),
            Self::FuncType(ty) => ty.end(),
            Self::InterfaceType(ty) => ty.methods.end().unwrap_or(ty.interface_pos),
            Self::MapType(ty) => ty.value.end(),
            Self::ChanType(ty) => ty.value.end(),
        }
    }

    /// Strips any number of enclosing parentheses.
    pub fn unparen(&self) -> &Self {
        match self {
            Self::Paren(paren) => paren.x.unparen(),
            _ => self,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Decl(GenDecl),
    Empty(EmptyStmt),
    Labeled(Box<LabeledStmt>),
    Expr(Expr),
    Send(Box<SendStmt>),
    IncDec(Box<IncDecStmt>),
    Assign(Box<AssignStmt>),
    Go(Box<GoStmt>),
    Defer(Box<DeferStmt>),
    Return(ReturnStmt),
    Branch(BranchStmt),
    Block(BlockStmt),
    If(Box<IfStmt>),
    Switch(Box<SwitchStmt>),
    TypeSwitch(Box<TypeSwitchStmt>),
    Select(Box<SelectStmt>),
    For(Box<ForStmt>),
    Range(Box<RangeStmt>),
}

/// An explicit `;`, or an implicit empty statement before a `}` or a
/// newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStmt {
    pub semicolon: Pos,
    pub implicit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledStmt {
    pub label: Ident,
    pub colon: Pos,
    pub stmt: Stmt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendStmt {
    pub chan: Expr,
    pub arrow: Pos,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncDecStmt {
    pub x: Expr,
    pub tok_pos: Pos,
    pub op: IncDecOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub tok_pos: Pos,
    pub op: AssignOp,
    pub rhs: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoStmt {
    pub go: Pos,
    pub call: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferStmt {
    pub defer: Pos,
    pub call: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub return_pos: Pos,
    pub results: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchStmt {
    pub tok_pos: Pos,
    pub kind: BranchKind,
    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStmt {
    pub lbrace: Pos,
    pub list: Vec<Stmt>,
    pub rbrace: Pos,
}

impl BlockStmt {
    pub fn end(&self) -> Pos {
        self.rbrace + TextSize::new(1)
    }
}

/// `else_branch` is either an `If` or a `Block`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub if_pos: Pos,
    pub init: Option<Stmt>,
    pub cond: Expr,
    pub body: BlockStmt,
    pub else_branch: Option<Stmt>,
}

/// A `case` clause, or the `default` clause when `list` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseClause {
    pub case: Pos,
    pub list: Vec<Expr>,
    pub colon: Pos,
    pub body: Vec<Stmt>,
}

impl CaseClause {
    pub fn is_default(&self) -> bool {
        self.list.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseBlock {
    pub lbrace: Pos,
    pub clauses: Vec<CaseClause>,
    pub rbrace: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchStmt {
    pub switch: Pos,
    pub init: Option<Stmt>,
    pub tag: Option<Expr>,
    pub body: CaseBlock,
}

/// `assign` is `x := y.(type)` or `y.(type)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSwitchStmt {
    pub switch: Pos,
    pub init: Option<Stmt>,
    pub assign: Stmt,
    pub body: CaseBlock,
}

/// A select clause; the `default` clause has no `comm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommClause {
    pub case: Pos,
    pub comm: Option<Stmt>,
    pub colon: Pos,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStmt {
    pub select: Pos,
    pub lbrace: Pos,
    pub clauses: Vec<CommClause>,
    pub rbrace: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForStmt {
    pub for_pos: Pos,
    pub init: Option<Stmt>,
    pub cond: Option<Expr>,
    pub post: Option<Stmt>,
    pub body: BlockStmt,
}

/// `tok` is the `:=` or `=` after the key and value, when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeStmt {
    pub for_pos: Pos,
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    pub tok: Option<(Pos, AssignOp)>,
    pub x: Expr,
    pub body: BlockStmt,
}

impl Stmt {
    pub fn start(&self) -> Pos {
        match self {
            Self::Decl(decl) => decl.tok_pos,
            Self::Empty(empty) => empty.semicolon,
            Self::Labeled(labeled) => labeled.label.pos,
            Self::Expr(expr) => expr.start(),
            Self::Send(send) => send.chan.start(),
            Self::IncDec(inc_dec) => inc_dec.x.start(),
            Self::Assign(assign) => assign.lhs.first().map_or(assign.tok_pos, Expr::start),
            Self::Go(go) => go.go,
            Self::Defer(defer) => defer.defer,
            Self::Return(ret) => ret.return_pos,
            Self::Branch(branch) => branch.tok_pos,
            Self::Block(block) => block.lbrace,
            Self::If(if_stmt) => if_stmt.if_pos,
            Self::Switch(switch) => switch.switch,
            Self::TypeSwitch(switch) => switch.switch,
            Self::Select(select) => select.select,
            Self::For(for_stmt) => for_stmt.for_pos,
            Self::Range(range) => range.for_pos,
        }
    }

    pub fn end(&self) -> Pos {
        let one = TextSize::new(1);
        match self {
            Self::Decl(decl) => decl.end(),
            Self::Empty(empty) if empty.implicit => empty.semicolon,
            Self::Empty(empty) => empty.semicolon + one,
            Self::Labeled(labeled) => labeled.stmt.end().max(labeled.colon + one),
            Self::Expr(expr) => expr.end(),
            Self::Send(send) => send.value.end(),
            Self::IncDec(inc_dec) => inc_dec.tok_pos + TextSize::new(2),
            Self::Assign(assign) => assign.rhs.last().map_or(assign.tok_pos, Expr::end),
            Self::Go(go) => go.call.end(),
            Self::Defer(defer) => defer.call.end(),
            Self::Return(ret) => ret
                .results
                .last()
                .map_or(ret.return_pos + TextSize::of("return"), Expr::end),
            Self::Branch(branch) => branch.label.as_ref().map_or_else(
                || branch.tok_pos + TextSize::of(branch.kind.text()),
                Ident::end,
            ),
            Self::Block(block) => block.end(),
            Self::If(if_stmt) => {
                if_stmt.else_branch.as_ref().map_or_else(|| if_stmt.body.end(), Self::end)
            }
            Self::Switch(switch) => switch.body.rbrace + one,
            Self::TypeSwitch(switch) => switch.body.rbrace + one,
            Self::Select(select) => select.rbrace + one,
            Self::For(for_stmt) => for_stmt.body.end(),
            Self::Range(range) => range.body.end(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKeyword {
    Import,
    Const,
    Type,
    Var,
}

impl DeclKeyword {
    pub const fn text(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Const => "const",
            Self::Type => "type",
            Self::Var => "var",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Gen(GenDecl),
    Func(FuncDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenDecl {
    pub tok_pos: Pos,
    pub keyword: DeclKeyword,
    pub lparen: Option<Pos>,
    pub specs: Vec<Spec>,
    pub rparen: Option<Pos>,
}

impl GenDecl {
    pub fn end(&self) -> Pos {
        match (self.rparen, self.specs.last()) {
            (Some(rparen), _) => rparen + TextSize::new(1),
            (None, Some(spec)) => spec.end(),
            (None, None) => self.tok_pos + TextSize::of(self.keyword.text()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

impl Spec {
    pub fn end(&self) -> Pos {
        match self {
            Self::Import(spec) => spec.path.end(),
            Self::Value(spec) => spec
                .values
                .last()
                .or(spec.ty.as_ref())
                .map_or_else(|| spec.names.last().map(Ident::end).unwrap_or_default(), Expr::end),
            Self::Type(spec) => spec.ty.end(),
        }
    }
}

/// `name` is the local name, `.` or `_` when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub name: Option<Ident>,
    pub path: BasicLit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
}

/// `assign` is the `=` of an alias declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub name: Ident,
    pub assign: Option<Pos>,
    pub ty: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub func: Pos,
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub ty: FuncType,
    pub body: Option<BlockStmt>,
}
