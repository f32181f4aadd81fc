//! Go token kinds and the positioned native syntax tree.

/// The native syntax tree, positioned by byte offsets.
pub mod ast;
mod syntax_kind;
mod syntax_set;

/// Token kinds produced by the tokenizer.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
