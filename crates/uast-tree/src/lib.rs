//! The generic tree: uniformly typed nodes that cover every byte of a file.

mod dump;
mod kind;

use std::fmt;

use serde::{Serialize, Serializer};
use text_size::TextRange;

pub use kind::Kind;

/// Payload of a leaf: its exact source text and where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<Kind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
    #[serde(rename = "nativeNode")]
    pub native_node: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    #[serde(skip)]
    span: TextRange,
}

impl Node {
    pub fn leaf(
        kinds: Vec<Kind>,
        native_node: impl Into<String>,
        token: Token,
        span: TextRange,
    ) -> Self {
        Self { kinds, token: Some(token), native_node: native_node.into(), children: Vec::new(), span }
    }

    /// A node spanning from its first to its last child, or `None` without
    /// children.
    pub fn composite(
        kinds: Vec<Kind>,
        native_node: impl Into<String>,
        children: Vec<Node>,
    ) -> Option<Self> {
        let start = children.first()?.span.start();
        let end = children.last()?.span.end();
        Some(Self {
            kinds,
            token: None,
            native_node: native_node.into(),
            children,
            span: TextRange::new(start, end.max(start)),
        })
    }

    /// Byte range covered by the node.
    pub fn span(&self) -> TextRange {
        self.span
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn has_kind(&self, kind: Kind) -> bool {
        self.kinds.contains(&kind)
    }

    /// The node itself and everything below it, in pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub fn leaves(&self) -> impl Iterator<Item = &Self> {
        self.descendants().filter(|node| node.is_leaf())
    }

    /// The first child whose label is `name`, or whose label starts with
    /// `name(`.
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| {
            let label = child.native_node.as_str();
            label == name || label.split_once('(').is_some_and(|(field, _)| field == name)
        })
    }

    /// Follows a `/`-separated path of [`Node::child`] names, such as
    /// `Decls/[0](FuncDecl)/Body`.
    pub fn query(&self, path: &str) -> Option<&Self> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('/').try_fold(self, |node, name| node.child(name))
    }

    /// Indented text rendering, one node per line.
    pub fn dump(&self) -> String {
        dump::dump(self)
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// 1-based start and end positions, serialized as `"line:column:line:column"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.start_line, self.start_column, self.end_line, self.end_column)
    }
}

impl Serialize for Range {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub text: String,
    pub content_text: String,
    pub range: Range,
    pub content_range: Range,
}

impl Comment {
    /// Strips the delimiters of `text`, which spans `range`.
    pub fn new(text: impl Into<String>, range: Range) -> Self {
        let text = text.into();
        let mut content_range = Range { start_column: range.start_column + 2, ..range };

        let content_text = if let Some(line) = text.strip_prefix("//") {
            line.to_owned()
        } else {
            content_range.end_column = range.end_column.saturating_sub(2);
            let inner = text.strip_prefix("/*").unwrap_or(&text);
            inner.strip_suffix("*/").unwrap_or(inner).to_owned()
        };

        Self { text, content_text, range, content_range }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(non_camel_case_types)]
pub enum TokenType {
    KEYWORD,
    STRING_LITERAL,
    OTHER,
}

impl TokenType {
    pub fn of(node: &Node) -> Self {
        if node.has_kind(Kind::KEYWORD) {
            Self::KEYWORD
        } else if node.has_kind(Kind::STRING_LITERAL) {
            Self::STRING_LITERAL
        } else {
            Self::OTHER
        }
    }
}

/// One entry of the flat token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenEntry {
    pub text: String,
    pub range: Range,
    #[serde(rename = "type")]
    pub ty: TokenType,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TreeMetaData<'a> {
    pub comments: &'a [Comment],
    pub tokens: &'a [TokenEntry],
}

/// The full output for one file: the side tables and the tree.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Document<'a> {
    #[serde(rename = "treeMetaData")]
    pub tree_meta_data: TreeMetaData<'a>,
    pub tree: &'a Node,
}

impl<'a> Document<'a> {
    pub fn new(tree: &'a Node, comments: &'a [Comment], tokens: &'a [TokenEntry]) -> Self {
        Self { tree_meta_data: TreeMetaData { comments, tokens }, tree }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
