use serde::Serialize;

macro_rules! kinds {
    ($($name:ident),* $(,)?) => {
        /// Semantic tag of a generic tree node.
        #[allow(non_camel_case_types)]
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize)]
        pub enum Kind {
            $($name,)*
        }

        impl Kind {
            /// The whole vocabulary, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$name,)*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }
        }
    };
}

kinds! {
    COMPILATION_UNIT,
    COMMENT,
    STRUCTURED_COMMENT,
    PACKAGE,
    EOF,
    FUNCTION,
    FUNCTION_LITERAL,
    FUNCTION_NAME,
    CONSTANT_DECLARATION,
    VARIABLE_DECLARATION,
    VARIABLE_NAME,
    IMPORT,
    IMPORT_ENTRY,
    GOTO,
    BRANCH_LABEL,
    BLOCK,
    ARGUMENTS,
    ARGUMENT,
    CALL,
    IF,
    IF_KEYWORD,
    ELSE_KEYWORD,
    ELSE,
    CONDITION,
    CLASS,
    STATEMENT,
    EMPTY_STATEMENT,
    ASSIGNMENT,
    COMPOUND_ASSIGNMENT,
    ASSIGNMENT_TARGET_LIST,
    ASSIGNMENT_TARGET,
    ASSIGNMENT_OPERATOR,
    ASSIGNMENT_VALUE_LIST,
    ASSIGNMENT_VALUE,
    IDENTIFIER,
    TYPE,
    KEYWORD,
    MEMBER_SELECT,
    LITERAL,
    FLOAT_LITERAL,
    INT_LITERAL,
    DECIMAL_LITERAL,
    HEX_LITERAL,
    OCTAL_LITERAL,
    STRING_LITERAL,
    CHAR_LITERAL,
    BOOLEAN_LITERAL,
    NULL_LITERAL,
    EXPRESSION,
    PARAMETER_LIST,
    PARAMETER,
    RESULT_LIST,
    RESULT,
    RETURN,
    BINARY_EXPRESSION,
    LEFT_OPERAND,
    RIGHT_OPERAND,
    PARENTHESIZED_EXPRESSION,
    LEFT_PARENTHESIS,
    RIGHT_PARENTHESIS,
    SWITCH,
    CASE,
    LABEL,
    DEFAULT_CASE,
    LOOP,
    FOR,
    FOR_KEYWORD,
    FOR_INIT,
    FOR_UPDATE,
    BODY,
    FOREACH,
    BREAK,
    CONTINUE,
    FALLTHROUGH,
    OPERATOR,
    ADD,
    SUBTRACT,
    MULTIPLY,
    DIVIDE,
    REMAINDER,
    BITWISE_AND,
    BITWISE_AND_NOT,
    BITWISE_OR,
    BITWISE_XOR,
    LEFT_SHIFT,
    RIGHT_SHIFT,
    EQUAL,
    LOGICAL_AND,
    LOGICAL_OR,
    NOT_EQUAL,
    LESS_THAN,
    LESS_OR_EQUAL,
    GREATER_THAN,
    GREATER_OR_EQUAL,
    THEN,
    THROW,
    UNSUPPORTED,
    PLUS_ASSIGNMENT,
    MINUS_ASSIGNMENT,
    OR_ASSIGNMENT,
    XOR_ASSIGNMENT,
    DIVIDE_ASSIGNMENT,
    MULTIPLY_ASSIGNMENT,
    REMAINDER_ASSIGNMENT,
    RIGHT_SHIFT_ASSIGNMENT,
    LEFT_SHIFT_ASSIGNMENT,
    AND_ASSIGNMENT,
    AND_NOT_ASSIGNMENT,
    UNARY_EXPRESSION,
    OPERAND,
    UNARY_MINUS,
    UNARY_PLUS,
    LOGICAL_COMPLEMENT,
    BITWISE_COMPLEMENT,
    POINTER,
    REFERENCE,
    CHANNEL_DIRECTION,
    POSTFIX_INCREMENT,
    POSTFIX_DECREMENT,
    ARRAY_ACCESS_EXPRESSION,
    ARRAY_OBJECT_EXPRESSION,
    ARRAY_KEY_EXPRESSION,
    DECL_LIST,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
