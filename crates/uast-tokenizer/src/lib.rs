mod cursor;
mod lexed;

use cursor::{Cursor, EOF_CHAR};
pub use lexed::{Lexed, lex};
pub use uast_syntax::SyntaxKind;
use uast_syntax::SyntaxKind::*;
use text_size::{TextRange, TextSize};

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

/// Splits Go source text into tokens, trivia included.
///
/// The tokens cover the text without gaps. Malformed literals and stray
/// characters come out as `UNKNOWN`.
pub struct Tokenizer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: Cursor::new(text) }
    }

    fn offset(&self) -> TextSize {
        TextSize::of(self.text) - self.cursor.remaining()
    }

    fn range(&self) -> TextRange {
        let end = self.offset();
        TextRange::new(end - self.cursor.pos_within_token(), end)
    }

    fn text(&self) -> &'a str {
        &self.text[self.range()]
    }

    pub fn next_token(&mut self) -> Token {
        let kind = self.syntax_kind();
        let range = self.range();
        self.cursor.reset_pos_within_token();
        Token { kind, range }
    }

    fn syntax_kind(&mut self) -> SyntaxKind {
        if self.cursor.is_eof() {
            return EOF;
        }

        match self.cursor.advance() {
            // A byte order mark is skipped at the start of the file only.
            BOM if self.offset() == TextSize::of(BOM) => WHITESPACE,
            '\n' => NEWLINE,
            ' ' | '\t' | '\r' => {
                self.cursor.advance_while(|c| matches!(c, ' ' | '\t' | '\r'));
                WHITESPACE
            }
            '/' if self.cursor.eat('/') => {
                self.cursor.advance_while(|c| c != '\n');
                LINE_COMMENT
            }
            '/' if self.cursor.eat('*') => self.block_comment(),
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ',' => COMMA,
            ';' => SEMICOLON,
            '.' if self.cursor.peek().is_ascii_digit() => self.number('.'),
            '.' if self.cursor.peek() == '.' && self.cursor.second() == '.' => {
                self.cursor.advance();
                self.cursor.advance();
                ELLIPSIS
            }
            '.' => DOT,
            ':' => self.with_eq(COLON, COLON_EQ),
            '+' if self.cursor.eat('+') => PLUS_PLUS,
            '+' => self.with_eq(PLUS, PLUS_EQ),
            '-' if self.cursor.eat('-') => MINUS_MINUS,
            '-' => self.with_eq(MINUS, MINUS_EQ),
            '*' => self.with_eq(STAR, STAR_EQ),
            '/' => self.with_eq(SLASH, SLASH_EQ),
            '%' => self.with_eq(PERCENT, PERCENT_EQ),
            '&' if self.cursor.eat('&') => AMP_AMP,
            '&' if self.cursor.eat('^') => self.with_eq(AMP_CARET, AMP_CARET_EQ),
            '&' => self.with_eq(AMP, AMP_EQ),
            '|' if self.cursor.eat('|') => PIPE_PIPE,
            '|' => self.with_eq(PIPE, PIPE_EQ),
            '^' => self.with_eq(CARET, CARET_EQ),
            '<' if self.cursor.eat('<') => self.with_eq(SHL, SHL_EQ),
            '<' if self.cursor.eat('-') => ARROW,
            '<' => self.with_eq(LT, LTEQ),
            '>' if self.cursor.eat('>') => self.with_eq(SHR, SHR_EQ),
            '>' => self.with_eq(GT, GTEQ),
            '=' => self.with_eq(EQ, EQ_EQ),
            '!' => self.with_eq(BANG, NEQ),
            '"' => self.interpreted_string(),
            '`' => self.raw_string(),
            '\'' => self.rune(),
            first_char @ '0'..='9' => self.number(first_char),
            first_char if first_char == '_' || first_char.is_alphabetic() => {
                self.cursor.advance_while(|c| c == '_' || c.is_alphanumeric());
                SyntaxKind::from_keyword(self.text()).unwrap_or(NAME)
            }
            _ => UNKNOWN,
        }
    }

    fn with_eq(&mut self, plain: SyntaxKind, with_eq: SyntaxKind) -> SyntaxKind {
        if self.cursor.eat('=') { with_eq } else { plain }
    }

    fn block_comment(&mut self) -> SyntaxKind {
        while !self.cursor.is_eof() {
            if self.cursor.advance() == '*' && self.cursor.eat('/') {
                return BLOCK_COMMENT;
            }
        }
        UNKNOWN
    }

    fn interpreted_string(&mut self) -> SyntaxKind {
        loop {
            match self.cursor.peek() {
                '"' => {
                    self.cursor.advance();
                    return STRING;
                }
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.peek() != '\n' {
                        self.cursor.advance();
                    }
                }
                '\n' => return UNKNOWN,
                EOF_CHAR if self.cursor.is_eof() => return UNKNOWN,
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    fn raw_string(&mut self) -> SyntaxKind {
        self.cursor.advance_while(|c| c != '`');
        if self.cursor.eat('`') { STRING } else { UNKNOWN }
    }

    fn rune(&mut self) -> SyntaxKind {
        loop {
            match self.cursor.peek() {
                '\'' => {
                    self.cursor.advance();
                    return CHAR;
                }
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.peek() != '\n' {
                        self.cursor.advance();
                    }
                }
                '\n' => return UNKNOWN,
                EOF_CHAR if self.cursor.is_eof() => return UNKNOWN,
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    fn number(&mut self, first_char: char) -> SyntaxKind {
        let mut kind = INT_NUMBER;
        let mut hex = false;

        if first_char == '.' {
            self.digits(false);
            kind = FLOAT_NUMBER;
        } else {
            if first_char == '0' {
                match self.cursor.peek() {
                    'x' | 'X' => {
                        self.cursor.advance();
                        hex = true;
                    }
                    'b' | 'B' | 'o' | 'O' => {
                        self.cursor.advance();
                    }
                    _ => {}
                }
            }
            self.digits(hex);

            if self.cursor.eat('.') {
                self.digits(hex);
                kind = FLOAT_NUMBER;
            }
        }

        if self.exponent(hex) {
            kind = FLOAT_NUMBER;
        }
        if self.cursor.eat('i') {
            kind = IMAGINARY_NUMBER;
        }

        kind
    }

    fn digits(&mut self, hex: bool) {
        self.cursor.advance_while(|c| c == '_' || c.is_ascii_digit() || hex && c.is_ascii_hexdigit());
    }

    fn exponent(&mut self, hex: bool) -> bool {
        let markers = if hex { ['p', 'P'] } else { ['e', 'E'] };
        if !markers.contains(&self.cursor.peek()) {
            return false;
        }

        self.cursor.advance();
        if !self.cursor.eat('+') {
            self.cursor.eat('-');
        }
        self.digits(false);
        true
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != EOF).then_some(token)
    }
}
