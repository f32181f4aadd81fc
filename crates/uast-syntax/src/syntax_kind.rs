#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    COMMA,
    DOT,
    ELLIPSIS,
    SEMICOLON,
    COLON,

    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    AMP,
    PIPE,
    CARET,
    SHL,
    SHR,
    AMP_CARET,
    PLUS_EQ,
    MINUS_EQ,
    STAR_EQ,
    SLASH_EQ,
    PERCENT_EQ,
    AMP_EQ,
    PIPE_EQ,
    CARET_EQ,
    SHL_EQ,
    SHR_EQ,
    AMP_CARET_EQ,
    AMP_AMP,
    PIPE_PIPE,
    ARROW,
    PLUS_PLUS,
    MINUS_MINUS,
    EQ_EQ,
    LT,
    GT,
    EQ,
    BANG,
    NEQ,
    LTEQ,
    GTEQ,
    COLON_EQ,

    BREAK_KW,
    CASE_KW,
    CHAN_KW,
    CONST_KW,
    CONTINUE_KW,
    DEFAULT_KW,
    DEFER_KW,
    ELSE_KW,
    FALLTHROUGH_KW,
    FOR_KW,
    FUNC_KW,
    GO_KW,
    GOTO_KW,
    IF_KW,
    IMPORT_KW,
    INTERFACE_KW,
    MAP_KW,
    PACKAGE_KW,
    RANGE_KW,
    RETURN_KW,
    SELECT_KW,
    STRUCT_KW,
    SWITCH_KW,
    TYPE_KW,
    VAR_KW,

    NAME,
    INT_NUMBER,
    FLOAT_NUMBER,
    IMAGINARY_NUMBER,
    CHAR,
    STRING,

    WHITESPACE,
    NEWLINE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    UNKNOWN,
    EOF,
}

impl SyntaxKind {
    pub fn from_keyword(ident: &str) -> Option<Self> {
        let kind = match ident {
            "break" => Self::BREAK_KW,
            "case" => Self::CASE_KW,
            "chan" => Self::CHAN_KW,
            "const" => Self::CONST_KW,
            "continue" => Self::CONTINUE_KW,
            "default" => Self::DEFAULT_KW,
            "defer" => Self::DEFER_KW,
            "else" => Self::ELSE_KW,
            "fallthrough" => Self::FALLTHROUGH_KW,
            "for" => Self::FOR_KW,
            "func" => Self::FUNC_KW,
            "go" => Self::GO_KW,
            "goto" => Self::GOTO_KW,
            "if" => Self::IF_KW,
            "import" => Self::IMPORT_KW,
            "interface" => Self::INTERFACE_KW,
            "map" => Self::MAP_KW,
            "package" => Self::PACKAGE_KW,
            "range" => Self::RANGE_KW,
            "return" => Self::RETURN_KW,
            "select" => Self::SELECT_KW,
            "struct" => Self::STRUCT_KW,
            "switch" => Self::SWITCH_KW,
            "type" => Self::TYPE_KW,
            "var" => Self::VAR_KW,
            _ => return None,
        };
        Some(kind)
    }

    pub const fn is_keyword(self) -> bool {
        self as u8 >= Self::BREAK_KW as u8 && self as u8 <= Self::VAR_KW as u8
    }

    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::INT_NUMBER | Self::FLOAT_NUMBER | Self::IMAGINARY_NUMBER | Self::CHAR | Self::STRING
        )
    }

    /// Whether a newline right after a token of this kind ends the statement.
    pub const fn ends_statement(self) -> bool {
        self.is_literal()
            || matches!(
                self,
                Self::NAME
                    | Self::BREAK_KW
                    | Self::CONTINUE_KW
                    | Self::FALLTHROUGH_KW
                    | Self::RETURN_KW
                    | Self::PLUS_PLUS
                    | Self::MINUS_MINUS
                    | Self::RIGHT_PAREN
                    | Self::RIGHT_BRACKET
                    | Self::RIGHT_BRACE
            )
    }

    /// The fixed spelling of punctuation, operators and keywords.
    pub const fn text(self) -> Option<&'static str> {
        let text = match self {
            Self::LEFT_PAREN => "(",
            Self::RIGHT_PAREN => ")",
            Self::LEFT_BRACKET => "[",
            Self::RIGHT_BRACKET => "]",
            Self::LEFT_BRACE => "{",
            Self::RIGHT_BRACE => "}",
            Self::COMMA => ",",
            Self::DOT => ".",
            Self::ELLIPSIS => "...",
            Self::SEMICOLON => ";",
            Self::COLON => ":",
            Self::PLUS => "+",
            Self::MINUS => "-",
            Self::STAR => "*",
            Self::SLASH => "/",
            Self::PERCENT => "%",
            Self::AMP => "&",
            Self::PIPE => "|",
            Self::CARET => "^",
            Self::SHL => "<<",
            Self::SHR => ">>",
            Self::AMP_CARET => "&^",
            Self::PLUS_EQ => "+=",
            Self::MINUS_EQ => "-=",
            Self::STAR_EQ => "*=",
            Self::SLASH_EQ => "/=",
            Self::PERCENT_EQ => "%=",
            Self::AMP_EQ => "&=",
            Self::PIPE_EQ => "|=",
            Self::CARET_EQ => "^=",
            Self::SHL_EQ => "<<=",
            Self::SHR_EQ => ">>=",
            Self::AMP_CARET_EQ => "&^=",
            Self::AMP_AMP => "&&",
            Self::PIPE_PIPE => "||",
            Self::ARROW => "<-",
            Self::PLUS_PLUS => "++",
            Self::MINUS_MINUS => "--",
            Self::EQ_EQ => "==",
            Self::LT => "<",
            Self::GT => ">",
            Self::EQ => "=",
            Self::BANG => "!",
            Self::NEQ => "!=",
            Self::LTEQ => "<=",
            Self::GTEQ => ">=",
            Self::COLON_EQ => ":=",
            Self::BREAK_KW => "break",
            Self::CASE_KW => "case",
            Self::CHAN_KW => "chan",
            Self::CONST_KW => "const",
            Self::CONTINUE_KW => "continue",
            Self::DEFAULT_KW => "default",
            Self::DEFER_KW => "defer",
            Self::ELSE_KW => "else",
            Self::FALLTHROUGH_KW => "fallthrough",
            Self::FOR_KW => "for",
            Self::FUNC_KW => "func",
            Self::GO_KW => "go",
            Self::GOTO_KW => "goto",
            Self::IF_KW => "if",
            Self::IMPORT_KW => "import",
            Self::INTERFACE_KW => "interface",
            Self::MAP_KW => "map",
            Self::PACKAGE_KW => "package",
            Self::RANGE_KW => "range",
            Self::RETURN_KW => "return",
            Self::SELECT_KW => "select",
            Self::STRUCT_KW => "struct",
            Self::SWITCH_KW => "switch",
            Self::TYPE_KW => "type",
            Self::VAR_KW => "var",
            _ => return None,
        };
        Some(text)
    }
}
