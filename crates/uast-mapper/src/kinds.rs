//! Semantic tags for native operators, literals and declarations.

use uast_syntax::ast::{AssignOp, BasicLit, BinaryOp, BranchKind, DeclKeyword, Expr, IncDecOp, LitKind, UnaryOp};
use uast_tree::Kind;

pub(crate) fn binary(op: BinaryOp) -> [Kind; 2] {
    let kind = match op {
        BinaryOp::LogicalAnd => Kind::LOGICAL_AND,
        BinaryOp::LogicalOr => Kind::LOGICAL_OR,
        BinaryOp::Eq => Kind::EQUAL,
        BinaryOp::Neq => Kind::NOT_EQUAL,
        BinaryOp::Lt => Kind::LESS_THAN,
        BinaryOp::Lte => Kind::LESS_OR_EQUAL,
        BinaryOp::Gt => Kind::GREATER_THAN,
        BinaryOp::Gte => Kind::GREATER_OR_EQUAL,
        BinaryOp::Add => Kind::ADD,
        BinaryOp::Sub => Kind::SUBTRACT,
        BinaryOp::Mul => Kind::MULTIPLY,
        BinaryOp::Div => Kind::DIVIDE,
        BinaryOp::Rem => Kind::REMAINDER,
        BinaryOp::And => Kind::BITWISE_AND,
        BinaryOp::AndNot => Kind::BITWISE_AND_NOT,
        BinaryOp::Or => Kind::BITWISE_OR,
        BinaryOp::Xor => Kind::BITWISE_XOR,
        BinaryOp::Shl => Kind::LEFT_SHIFT,
        BinaryOp::Shr => Kind::RIGHT_SHIFT,
    };
    [Kind::BINARY_EXPRESSION, kind]
}

pub(crate) fn assign(op: AssignOp) -> Vec<Kind> {
    let compound = match op {
        AssignOp::Define => return vec![Kind::ASSIGNMENT, Kind::VARIABLE_DECLARATION],
        AssignOp::Assign => return vec![Kind::ASSIGNMENT],
        AssignOp::Add => Kind::PLUS_ASSIGNMENT,
        AssignOp::Sub => Kind::MINUS_ASSIGNMENT,
        AssignOp::Mul => Kind::MULTIPLY_ASSIGNMENT,
        AssignOp::Div => Kind::DIVIDE_ASSIGNMENT,
        AssignOp::Rem => Kind::REMAINDER_ASSIGNMENT,
        AssignOp::And => Kind::AND_ASSIGNMENT,
        AssignOp::Or => Kind::OR_ASSIGNMENT,
        AssignOp::Xor => Kind::XOR_ASSIGNMENT,
        AssignOp::Shl => Kind::LEFT_SHIFT_ASSIGNMENT,
        AssignOp::Shr => Kind::RIGHT_SHIFT_ASSIGNMENT,
        AssignOp::AndNot => Kind::AND_NOT_ASSIGNMENT,
    };
    vec![Kind::ASSIGNMENT, Kind::COMPOUND_ASSIGNMENT, compound]
}

pub(crate) fn unary(op: UnaryOp) -> [Kind; 2] {
    let kind = match op {
        UnaryOp::Plus => Kind::UNARY_PLUS,
        UnaryOp::Minus => Kind::UNARY_MINUS,
        UnaryOp::Xor => Kind::BITWISE_COMPLEMENT,
        UnaryOp::Not => Kind::LOGICAL_COMPLEMENT,
        UnaryOp::And => Kind::REFERENCE,
        UnaryOp::Arrow => Kind::CHANNEL_DIRECTION,
    };
    [Kind::UNARY_EXPRESSION, kind]
}

/// Dereference `*x` outside of a type.
pub(crate) const POINTER: [Kind; 2] = [Kind::UNARY_EXPRESSION, Kind::POINTER];

pub(crate) fn inc_dec(op: IncDecOp) -> [Kind; 2] {
    let kind = match op {
        IncDecOp::Inc => Kind::POSTFIX_INCREMENT,
        IncDecOp::Dec => Kind::POSTFIX_DECREMENT,
    };
    [Kind::UNARY_EXPRESSION, kind]
}

pub(crate) fn literal(lit: &BasicLit) -> Vec<Kind> {
    match lit.kind {
        LitKind::String => vec![Kind::LITERAL, Kind::STRING_LITERAL],
        LitKind::Char => vec![Kind::LITERAL, Kind::CHAR_LITERAL],
        LitKind::Float => vec![Kind::LITERAL, Kind::FLOAT_LITERAL],
        LitKind::Imag => vec![Kind::LITERAL],
        LitKind::Int => vec![Kind::LITERAL, Kind::INT_LITERAL, int_base(&lit.value)],
    }
}

fn int_base(value: &str) -> Kind {
    let bytes = value.as_bytes();
    match bytes {
        [b'0', b'x' | b'X', ..] => Kind::HEX_LITERAL,
        [b'0', b'o' | b'O', ..] => Kind::OCTAL_LITERAL,
        [b'0', b'0'..=b'9' | b'_', ..] => Kind::OCTAL_LITERAL,
        _ => Kind::DECIMAL_LITERAL,
    }
}

pub(crate) fn ident(name: &str) -> Vec<Kind> {
    match name {
        "true" | "false" => vec![Kind::LITERAL, Kind::BOOLEAN_LITERAL],
        "nil" => vec![Kind::LITERAL, Kind::NULL_LITERAL],
        _ => vec![Kind::IDENTIFIER],
    }
}

pub(crate) fn branch(kind: BranchKind) -> Kind {
    match kind {
        BranchKind::Break => Kind::BREAK,
        BranchKind::Continue => Kind::CONTINUE,
        BranchKind::Fallthrough => Kind::FALLTHROUGH,
        BranchKind::Goto => Kind::GOTO,
    }
}

pub(crate) fn gen_decl(keyword: DeclKeyword) -> Vec<Kind> {
    match keyword {
        DeclKeyword::Import => vec![Kind::IMPORT],
        DeclKeyword::Const | DeclKeyword::Type | DeclKeyword::Var => Vec::new(),
    }
}

pub(crate) fn value_spec(keyword: DeclKeyword) -> Vec<Kind> {
    match keyword {
        DeclKeyword::Const => vec![Kind::CONSTANT_DECLARATION],
        DeclKeyword::Var => vec![Kind::VARIABLE_DECLARATION],
        DeclKeyword::Import | DeclKeyword::Type => Vec::new(),
    }
}

/// Named struct and interface types are classes, unless they are empty.
pub(crate) fn type_spec(ty: &Expr) -> Vec<Kind> {
    let is_class = match ty {
        Expr::StructType(ty) => !ty.fields.is_empty(),
        Expr::InterfaceType(ty) => !ty.methods.is_empty(),
        _ => false,
    };
    if is_class { vec![Kind::CLASS] } else { Vec::new() }
}

#[cfg(test)]
mod tests {
    use uast_syntax::ast::{AssignOp, BasicLit, BinaryOp, LitKind, UnaryOp};
    use uast_tree::Kind;

    use super::{assign, binary, ident, literal, unary};

    fn int(value: &str) -> Kind {
        let lit = BasicLit { pos: 0.into(), kind: LitKind::Int, value: value.to_owned() };
        literal(&lit)[2]
    }

    #[test]
    fn integer_bases() {
        assert_eq!(int("0"), Kind::DECIMAL_LITERAL);
        assert_eq!(int("42"), Kind::DECIMAL_LITERAL);
        assert_eq!(int("0x1F"), Kind::HEX_LITERAL);
        assert_eq!(int("0X1f"), Kind::HEX_LITERAL);
        assert_eq!(int("0755"), Kind::OCTAL_LITERAL);
        assert_eq!(int("0o755"), Kind::OCTAL_LITERAL);
        assert_eq!(int("0b1010"), Kind::DECIMAL_LITERAL);
    }

    #[test]
    fn literal_kinds() {
        let lit = |kind, value: &str| BasicLit { pos: 0.into(), kind, value: value.to_owned() };
        assert_eq!(literal(&lit(LitKind::String, "\"s\"")), [Kind::LITERAL, Kind::STRING_LITERAL]);
        assert_eq!(literal(&lit(LitKind::Char, "'c'")), [Kind::LITERAL, Kind::CHAR_LITERAL]);
        assert_eq!(literal(&lit(LitKind::Float, "1.5")), [Kind::LITERAL, Kind::FLOAT_LITERAL]);
        assert_eq!(literal(&lit(LitKind::Imag, "2i")), [Kind::LITERAL]);
    }

    #[test]
    fn identifiers() {
        assert_eq!(ident("true"), [Kind::LITERAL, Kind::BOOLEAN_LITERAL]);
        assert_eq!(ident("nil"), [Kind::LITERAL, Kind::NULL_LITERAL]);
        assert_eq!(ident("nilable"), [Kind::IDENTIFIER]);
    }

    #[test]
    fn operators() {
        assert_eq!(binary(BinaryOp::AndNot), [Kind::BINARY_EXPRESSION, Kind::BITWISE_AND_NOT]);
        assert_eq!(unary(UnaryOp::Arrow), [Kind::UNARY_EXPRESSION, Kind::CHANNEL_DIRECTION]);
        assert_eq!(assign(AssignOp::Define), [Kind::ASSIGNMENT, Kind::VARIABLE_DECLARATION]);
        assert_eq!(
            assign(AssignOp::Shl),
            [Kind::ASSIGNMENT, Kind::COMPOUND_ASSIGNMENT, Kind::LEFT_SHIFT_ASSIGNMENT]
        );
    }
}
