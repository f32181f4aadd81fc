//! Reconciles a positioned Go syntax tree with its source text into a generic
//! tree that accounts for every byte of the file.

mod comments;
mod error;
mod kinds;
mod lower;
mod mapper;
mod synth;

use text_size::TextSize;
use uast_inputs::SourceFile;
use uast_syntax::ast;
use uast_tree::{Comment, Document, Kind, Node, Range, TokenEntry, TokenType};

pub use error::{Location, MapError};

use mapper::Mapper;

/// How violations of the tree invariants are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// The first violation aborts the file.
    #[default]
    Strict,
    /// Unrecognized gaps become opaque tokens and mismatched tokens are
    /// dropped. Broken ordering and out-of-bounds spans still abort.
    Relaxed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub strictness: Strictness,
}

/// The generic tree of one file together with its side tables.
#[derive(Debug, Clone)]
pub struct Uast {
    pub tree: Node,
    pub comments: Vec<Comment>,
    pub tokens: Vec<TokenEntry>,
}

impl Uast {
    pub fn document(&self) -> Document<'_> {
        Document::new(&self.tree, &self.comments, &self.tokens)
    }
}

#[tracing::instrument(skip_all, fields(path = %file.path(), len = file.len()))]
pub fn map_file(file: &SourceFile, ast: &ast::File, config: Config) -> Result<Uast, MapError> {
    let expected = usize::from(ast.size);
    if expected != file.len() {
        return Err(MapError::FileSize {
            expected,
            found: file.len(),
            path: file.path().to_owned(),
        });
    }

    let mut mapper = Mapper::new(file, config.strictness);
    mapper.load_comments(ast)?;
    let Some(tree) = mapper.file(ast)? else {
        let end = TextSize::of(file.text());
        return Err(MapError::InvalidSpan { location: mapper.location(TextSize::new(0), end) });
    };

    let comments = mapper
        .comments
        .as_slice()
        .iter()
        .map(|node| {
            let range = range(&mapper, node)?;
            let text = node.token.as_ref().map(|token| token.value.clone()).unwrap_or_default();
            Ok(Comment::new(text, range))
        })
        .collect::<Result<Vec<_>, MapError>>()?;

    let tokens = tree
        .leaves()
        .filter(|leaf| !leaf.has_kind(Kind::COMMENT) && !leaf.has_kind(Kind::EOF))
        .map(|leaf| {
            Ok(TokenEntry {
                text: leaf.token.as_ref().map(|token| token.value.clone()).unwrap_or_default(),
                range: range(&mapper, leaf)?,
                ty: TokenType::of(leaf),
            })
        })
        .collect::<Result<Vec<_>, MapError>>()?;

    tracing::debug!(
        nodes = tree.descendants().count(),
        comments = comments.len(),
        tokens = tokens.len(),
        "mapped file"
    );
    Ok(Uast { tree, comments, tokens })
}

/// Line and column range of a leaf.
fn range(mapper: &Mapper<'_>, leaf: &Node) -> Result<Range, MapError> {
    let span = leaf.span();
    let invalid = || MapError::InvalidPosition { location: mapper.location(span.start(), span.end()) };
    let start = mapper.positions().line_column(span.start()).ok_or_else(invalid)?;
    let end = mapper.positions().line_column(span.end()).ok_or_else(invalid)?;
    Ok(Range {
        start_line: start.line,
        start_column: start.column,
        end_line: end.line,
        end_column: end.column,
    })
}
