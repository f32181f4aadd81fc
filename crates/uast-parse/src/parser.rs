use text_size::{TextRange, TextSize};
use uast_errors::Diagnostic;
use uast_syntax::SyntaxKind::{self, *};
use uast_syntax::ast::{Comment, CommentGroup, Pos};
use uast_tokenizer::{Lexed, Token};

pub(crate) type ParseResult<T> = Result<T, Diagnostic>;

pub(crate) struct Parser<'a> {
    text: &'a str,
    lexed: Lexed,
    pos: usize,
    /// Below zero while parsing an `if`, `for` or `switch` header, where a
    /// `{` after a type name opens the body instead of a composite literal.
    pub(crate) expr_level: i32,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, lexed: uast_tokenizer::lex(text), pos: 0, expr_level: 0 }
    }

    fn token(&self, n: usize) -> Token {
        let tokens = self.lexed.tokens();
        // The stream always ends with EOF.
        tokens.get(self.pos + n).or(tokens.last()).copied().unwrap_or(Token {
            kind: EOF,
            range: TextRange::empty(TextSize::of(self.text)),
        })
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.token(0).kind
    }

    pub(crate) fn nth_kind(&self, n: usize) -> SyntaxKind {
        self.token(n).kind
    }

    pub(crate) fn peek_range(&self) -> TextRange {
        self.token(0).range
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn advance(&mut self) -> Token {
        let token = self.token(0);
        if token.kind != EOF {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of `kind` and returns its start.
    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> ParseResult<Pos> {
        if self.at(kind) {
            Ok(self.advance().range.start())
        } else {
            let what = kind.text().map_or_else(|| format!("{kind:?}"), |text| format!("'{text}'"));
            Err(self.error_expected(&what))
        }
    }

    /// A statement or declaration ends with `;`, which may be left out
    /// before a closing `)` or `}`.
    pub(crate) fn expect_semicolon(&mut self) -> ParseResult<()> {
        match self.peek_kind() {
            SEMICOLON => {
                self.advance();
                Ok(())
            }
            RIGHT_PAREN | RIGHT_BRACE | EOF => Ok(()),
            _ => Err(self.error_expected("';' or newline")),
        }
    }

    pub(crate) fn text(&self, range: TextRange) -> &'a str {
        &self.text[range]
    }

    pub(crate) fn error(&self, message: impl Into<String>) -> Diagnostic {
        Diagnostic::error(message, self.peek_range())
    }

    pub(crate) fn error_expected(&self, what: &str) -> Diagnostic {
        let found = match self.token(0) {
            Token { kind: EOF, .. } => "end of file".to_owned(),
            Token { kind: SEMICOLON, range } if range.is_empty() => "newline".to_owned(),
            Token { range, .. } => format!("'{}'", self.text(range)),
        };
        self.error(format!("expected {what}, found {found}"))
    }

    pub(crate) fn len(&self) -> TextSize {
        TextSize::of(self.text)
    }

    /// Groups comments that are separated by whitespace holding at most one
    /// line break.
    pub(crate) fn comment_groups(&self) -> Vec<CommentGroup> {
        let mut groups: Vec<CommentGroup> = Vec::new();
        let mut previous_end = None;

        for &range in self.lexed.comments() {
            let comment = Comment {
                slash: range.start(),
                text: self.text(range).replace('\r', ""),
            };

            let adjacent = previous_end.is_some_and(|end| {
                let between = self.text(TextRange::new(end, range.start()));
                between.trim().is_empty() && between.matches('\n').count() <= 1
            });
            previous_end = Some(range.end());

            match groups.last_mut() {
                Some(group) if adjacent => group.list.push(comment),
                _ => groups.push(CommentGroup { list: vec![comment] }),
            }
        }

        groups
    }
}
