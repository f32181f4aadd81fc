use line_index::{LineCol, LineIndex};
use text_size::TextSize;

/// A 1-based line and a 1-based column counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineColumn {
    pub line: u32,
    pub column: u32,
}

impl LineColumn {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Answers "which line and column is byte offset N on" for one text.
///
/// Only `\n` starts a new line. A text ending with a line terminator has a
/// trailing empty line, and the end-of-file offset is reported on it.
#[derive(Debug)]
pub struct PositionIndex<'a> {
    text: &'a str,
    lines: LineIndex,
}

impl<'a> PositionIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, lines: LineIndex::new(text) }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn len(&self) -> TextSize {
        TextSize::of(self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `None` when `offset` is past the end of the text or inside a
    /// multi-byte character.
    pub fn line_column(&self, offset: TextSize) -> Option<LineColumn> {
        let at = usize::from(offset);
        if at > self.text.len() || !self.text.is_char_boundary(at) {
            return None;
        }

        let LineCol { line, col } = self.lines.line_col(offset);
        let line_start = at - col as usize;
        let column = self.text[line_start..at].chars().count() as u32 + 1;

        if at == self.text.len() && col != 0 && self.text.ends_with(['\n', '\r']) {
            return Some(LineColumn::new(line + 2, 1));
        }

        Some(LineColumn::new(line + 1, column))
    }

    /// The inverse of [`PositionIndex::line_column`].
    pub fn offset(&self, position: LineColumn) -> Option<TextSize> {
        let end = self.len();
        if self.line_column(end) == Some(position) {
            return Some(end);
        }

        let line = position.line.checked_sub(1)?;
        let column = position.column.checked_sub(1)? as usize;
        let line_start = self.lines.offset(LineCol { line, col: 0 })?;
        let rest = self.text.get(usize::from(line_start)..)?;

        let mut chars = 0;
        for (index, ch) in rest.char_indices() {
            if chars == column {
                return Some(line_start + TextSize::new(index as u32));
            }
            if ch == '\n' {
                return None;
            }
            chars += 1;
        }

        (chars == column).then_some(end)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use text_size::TextSize;

    use super::{LineColumn, PositionIndex};

    fn position(text: &str, offset: u32) -> Option<(u32, u32)> {
        PositionIndex::new(text)
            .line_column(TextSize::new(offset))
            .map(|LineColumn { line, column }| (line, column))
    }

    #[test]
    fn first_line() {
        assert_eq!(position("package main", 0), Some((1, 1)));
        assert_eq!(position("package main", 8), Some((1, 9)));
    }

    #[test]
    fn columns_count_chars() {
        let text = "x := \"héllo\" // ü\n";
        assert_eq!(position(text, 14), Some((1, 14)));
        assert_eq!(position(text, 16), Some((1, 16)));
    }

    #[test]
    fn later_lines() {
        let text = "package main\nfunc main() {}\n";
        assert_eq!(position(text, 13), Some((2, 1)));
        assert_eq!(position(text, 18), Some((2, 6)));
    }

    #[test]
    fn carriage_return_is_not_a_line_break() {
        assert_eq!(position("a\rb", 2), Some((1, 3)));
        assert_eq!(position("a\r\nb", 3), Some((2, 1)));
    }

    #[test]
    fn end_of_file_after_newline_opens_a_line() {
        assert_eq!(position("a\n", 2), Some((2, 1)));
        assert_eq!(position("a\r\n", 3), Some((2, 1)));
        assert_eq!(position("a\r", 2), Some((2, 1)));
    }

    #[test]
    fn end_of_file_without_newline() {
        assert_eq!(position("// end", 6), Some((1, 7)));
        assert_eq!(position("", 0), Some((1, 1)));
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(position("abc", 4), None);
        assert_eq!(position("é", 1), None);
    }

    #[test]
    fn offset_inverse() {
        let index = PositionIndex::new("ab\ncd\r");
        assert_eq!(index.offset(LineColumn::new(1, 1)), Some(TextSize::new(0)));
        assert_eq!(index.offset(LineColumn::new(2, 2)), Some(TextSize::new(4)));
        assert_eq!(index.offset(LineColumn::new(3, 1)), Some(TextSize::new(6)));
        assert_eq!(index.offset(LineColumn::new(1, 9)), None);
        assert_eq!(index.offset(LineColumn::new(0, 1)), None);
    }

    proptest! {
        #[test]
        fn round_trips(text in "[a-zé\n\r\t ]{0,64}") {
            let index = PositionIndex::new(&text);
            for (at, _) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
                let offset = TextSize::new(at as u32);
                let position = index.line_column(offset);
                prop_assert!(position.is_some());
                prop_assert_eq!(position, index.line_column(offset));
                prop_assert_eq!(position.and_then(|position| index.offset(position)), Some(offset));
            }
        }
    }
}
