use text_size::{TextRange, TextSize};
use uast_syntax::SyntaxKind::{self, *};

use crate::{Token, Tokenizer};

/// The significant tokens of a file plus its comments.
///
/// Go's automatic semicolons are part of `tokens`: a line break (or a block
/// comment spanning lines, or the end of the file) right after a token that
/// can end a statement produces an empty `SEMICOLON` token at the break.
/// The stream always ends with `EOF`.
#[derive(Debug, Default)]
pub struct Lexed {
    tokens: Vec<Token>,
    comments: Vec<TextRange>,
}

impl Lexed {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Comment ranges in source order.
    pub fn comments(&self) -> &[TextRange] {
        &self.comments
    }

    fn push(&mut self, kind: SyntaxKind, range: TextRange) {
        self.tokens.push(Token { kind, range });
    }

    fn push_implicit_semicolon(&mut self, at: TextSize) {
        self.push(SEMICOLON, TextRange::empty(at));
    }
}

pub fn lex(text: &str) -> Lexed {
    let mut lexed = Lexed::default();
    let mut tokenizer = Tokenizer::new(text);
    let mut insert_semicolon = false;

    loop {
        let Token { kind, range } = tokenizer.next_token();
        match kind {
            WHITESPACE => {}
            NEWLINE => {
                if insert_semicolon {
                    lexed.push_implicit_semicolon(range.start());
                    insert_semicolon = false;
                }
            }
            LINE_COMMENT => lexed.comments.push(range),
            BLOCK_COMMENT => {
                if insert_semicolon && text[range].contains('\n') {
                    lexed.push_implicit_semicolon(range.start());
                    insert_semicolon = false;
                }
                lexed.comments.push(range);
            }
            EOF => {
                if insert_semicolon {
                    lexed.push_implicit_semicolon(range.start());
                }
                lexed.push(EOF, range);
                return lexed;
            }
            _ => {
                lexed.push(kind, range);
                insert_semicolon = kind.ends_statement();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(text: &str) -> String {
        lex(text)
            .tokens()
            .iter()
            .map(|token| match token.kind {
                SEMICOLON if token.range.is_empty() => "⏎".to_owned(),
                EOF => "EOF".to_owned(),
                _ => text[token.range].to_owned(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn semicolons_after_statement_ends() {
        assert_eq!(shape("package main\n"), "package main ⏎ EOF");
        assert_eq!(shape("x++\nreturn\n}"), "x ++ ⏎ return ⏎ } ⏎ EOF");
        assert_eq!(shape("f(\n a,\n)\n"), "f ( a , ) ⏎ EOF");
    }

    #[test]
    fn no_semicolon_after_operators_and_openers() {
        assert_eq!(shape("a +\nb"), "a + b ⏎ EOF");
        assert_eq!(shape("if x {\n}"), "if x { } ⏎ EOF");
    }

    #[test]
    fn explicit_semicolons_are_kept() {
        assert_eq!(shape("a(); b()"), "a ( ) ; b ( ) ⏎ EOF");
    }

    #[test]
    fn comments_are_collected_apart() {
        let text = "x /* a\nb */ y // tail";
        let lexed = lex(text);
        let comments: Vec<_> = lexed.comments().iter().map(|range| &text[*range]).collect();

        assert_eq!(comments, vec!["/* a\nb */", "// tail"]);
        assert_eq!(shape(text), "x ⏎ y ⏎ EOF");
    }

    #[test]
    fn single_line_block_comment_does_not_end_a_statement() {
        assert_eq!(shape("x /* a */ + y"), "x + y ⏎ EOF");
    }
}
