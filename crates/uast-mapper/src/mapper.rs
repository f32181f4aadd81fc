//! Per-file state of a mapping run and the span reconciler.
//!
//! Every node is added to its parent through [`Mapper::append`], which fills
//! the bytes between the previous sibling and the new node with the comments
//! lying there and with synthesized tokens for whatever punctuation the
//! native tree does not position.

use std::ops::Range;

use camino::Utf8Path;
use text_size::{TextRange, TextSize};
use uast_inputs::{PositionIndex, SourceFile};
use uast_syntax::ast;
use uast_tree::{Kind, Node, Token};

use crate::comments::CommentTable;
use crate::error::{Location, MapError};
use crate::synth::{self, MissingToken};
use crate::Strictness;

pub(crate) type Mapped = Result<Option<Node>, MapError>;

pub(crate) struct Mapper<'a> {
    path: &'a Utf8Path,
    text: &'a str,
    positions: PositionIndex<'a>,
    has_carriage_return: bool,
    strictness: Strictness,
    pub(crate) comments: CommentTable,
}

impl<'a> Mapper<'a> {
    pub(crate) fn new(file: &'a SourceFile, strictness: Strictness) -> Self {
        Self {
            path: file.path(),
            text: file.text(),
            positions: file.position_index(),
            has_carriage_return: file.text().contains('\r'),
            strictness,
            comments: CommentTable::default(),
        }
    }

    pub(crate) fn text(&self) -> &'a str {
        self.text
    }

    pub(crate) fn positions(&self) -> &PositionIndex<'a> {
        &self.positions
    }

    /// Turns every comment of the file into a leaf, once, before the tree is
    /// assembled.
    pub(crate) fn load_comments(&mut self, file: &ast::File) -> Result<(), MapError> {
        let mut comments = Vec::new();
        for comment in file.comments() {
            let kinds = if comment.text.as_bytes().get(1) == Some(&b'/') {
                vec![Kind::COMMENT]
            } else {
                vec![Kind::COMMENT, Kind::STRUCTURED_COMMENT]
            };
            comments.extend(self.expected_token(kinds, comment.slash, &comment.text, "")?);
        }
        self.comments = CommentTable::new(comments);
        Ok(())
    }

    /// Fails in strict mode, and for violations relaxed mode cannot work
    /// around. Otherwise logs the violation and lets the caller drop the
    /// offending token.
    pub(crate) fn tolerate(&self, error: MapError) -> Result<(), MapError> {
        if self.strictness == Strictness::Strict || !error.is_tolerable() {
            return Err(error);
        }
        tracing::warn!(target: "uast_mapper", error = %error, "tolerated invalid token");
        Ok(())
    }

    pub(crate) fn location(&self, offset: TextSize, end: TextSize) -> Location {
        Location {
            offset,
            end,
            path: self.path.to_owned(),
            position: self.positions.line_column(offset),
        }
    }

    /// A leaf covering `offset..end`, whose value is that slice of the text.
    pub(crate) fn token(
        &self,
        kinds: Vec<Kind>,
        offset: TextSize,
        end: TextSize,
        label: &str,
    ) -> Mapped {
        if end < offset || end > self.positions.len() {
            return Err(MapError::InvalidSpan { location: self.location(offset, end) });
        }
        if offset == end && kinds != [Kind::EOF] {
            self.tolerate(MapError::EmptyToken { location: self.location(offset, end) })?;
            return Ok(None);
        }

        let range = TextRange::new(offset, end);
        let (Some(position), Some(value)) =
            (self.positions.line_column(offset), self.text.get(Range::<usize>::from(range)))
        else {
            self.tolerate(MapError::InvalidPosition { location: self.location(offset, end) })?;
            return Ok(None);
        };

        let token = Token { value: value.to_owned(), line: position.line, column: position.column };
        Ok(Some(Node::leaf(kinds, label, token, range)))
    }

    /// A leaf starting at `pos` whose text must be `expected`.
    pub(crate) fn expected_token(
        &self,
        kinds: Vec<Kind>,
        pos: TextSize,
        expected: &str,
        label: &str,
    ) -> Mapped {
        let (end, expected) = self.token_end(pos, expected);
        let Some(node) = self.token(kinds, pos, end, label)? else {
            return Ok(None);
        };

        let found = node.token.as_ref().map_or("", |token| token.value.as_str());
        if found != expected {
            self.tolerate(MapError::TokenMismatch {
                found: found.to_owned(),
                expected: expected.to_owned(),
                location: self.location(pos, end),
            })?;
            return Ok(None);
        }
        Ok(Some(node))
    }

    /// A keyword leaf, tagged `KEYWORD` after `kinds`.
    pub(crate) fn keyword(
        &self,
        mut kinds: Vec<Kind>,
        pos: TextSize,
        keyword: &str,
        label: &str,
    ) -> Mapped {
        kinds.push(Kind::KEYWORD);
        self.expected_token(kinds, pos, keyword, label)
    }

    /// Where a token with value `expected` ends. Raw strings and comments lose
    /// their `\r` bytes in the native tree, so in a text containing `\r` the
    /// end is found by consuming `expected.len()` bytes that are not `\r`. When
    /// that moves the end, the source slice becomes the expected value.
    fn token_end<'s>(&'s self, offset: TextSize, expected: &'s str) -> (TextSize, &'s str) {
        let end = offset + TextSize::of(expected);
        if !self.has_carriage_return {
            return (end, expected);
        }

        let bytes = self.text.as_bytes();
        let mut remaining = expected.len();
        let mut at = usize::from(offset);
        while remaining > 0 && at < bytes.len() {
            if bytes[at] != b'\r' {
                remaining -= 1;
            }
            at += 1;
        }

        let computed = TextSize::new(at as u32);
        match self.text.get(usize::from(offset)..at) {
            Some(source) if computed != end => (computed, source),
            _ => (end, expected),
        }
    }

    /// Appends `child` after interleaving the comments and missing tokens found
    /// between the last child and it. The first child gets nothing before it:
    /// an ancestor fills that gap.
    pub(crate) fn append(
        &mut self,
        children: &mut Vec<Node>,
        child: Option<Node>,
    ) -> Result<(), MapError> {
        let Some(child) = child else {
            return Ok(());
        };
        if let Some(last) = children.last() {
            let end = last.span().end();
            self.fill_gap(children, end, child.span().start())?;
        }
        self.push_checked(children, child)
    }

    fn push_checked(&self, children: &mut Vec<Node>, child: Node) -> Result<(), MapError> {
        if let Some(last) = children.last() {
            if last.span().end() > child.span().start() {
                let location = self.location(last.span().end(), child.span().start());
                return Err(MapError::Overlap { location });
            }
        }
        children.push(child);
        Ok(())
    }

    pub(crate) fn fill_gap(
        &mut self,
        children: &mut Vec<Node>,
        mut offset: TextSize,
        end: TextSize,
    ) -> Result<(), MapError> {
        self.comments.rewind(offset);
        while let Some(comment) = self.comments.next_within(offset, end) {
            self.synthesize(children, offset, comment.span().start())?;
            offset = comment.span().end();
            self.push_checked(children, comment)?;
        }
        self.synthesize(children, offset, end)
    }

    fn synthesize(
        &mut self,
        children: &mut Vec<Node>,
        offset: TextSize,
        end: TextSize,
    ) -> Result<(), MapError> {
        for missing in synth::missing_tokens(self.text, offset, end) {
            let token = match missing {
                MissingToken::Known { range, text } => {
                    tracing::trace!(
                        target: "uast_mapper::synth",
                        token = text,
                        offset = u32::from(range.start()),
                        "synthesized missing token"
                    );
                    self.token(synth::kinds(text), range.start(), range.end(), "")?
                }
                MissingToken::Unknown { range } => {
                    let text = self.text.get(Range::<usize>::from(range)).unwrap_or_default();
                    self.tolerate(MapError::MissingToken {
                        text: text.to_owned(),
                        location: self.location(range.start(), range.end()),
                    })?;
                    self.token(Vec::new(), range.start(), range.end(), "")?
                }
            };
            if let Some(token) = token {
                self.push_checked(children, token)?;
            }
        }
        Ok(())
    }
}
