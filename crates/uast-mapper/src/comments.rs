use text_size::TextSize;
use uast_tree::Node;

/// All comment leaves of a file in source order, with a cursor that only
/// moves back as far as a gap being filled needs.
#[derive(Debug, Default)]
pub(crate) struct CommentTable {
    comments: Vec<Node>,
    cursor: usize,
}

impl CommentTable {
    pub(crate) fn new(comments: Vec<Node>) -> Self {
        Self { comments, cursor: 0 }
    }

    pub(crate) fn as_slice(&self) -> &[Node] {
        &self.comments
    }

    /// Moves the cursor back over every comment starting at or after
    /// `offset`. Mapping a child advances the cursor past the comments inside
    /// it, and the parent's next gap may begin before them.
    pub(crate) fn rewind(&mut self, offset: TextSize) {
        while self.cursor > 0 && self.comments[self.cursor - 1].span().start() >= offset {
            self.cursor -= 1;
        }
    }

    /// The next comment that lies entirely inside `offset..end`. Stops at a
    /// comment that starts inside the range but ends after it.
    pub(crate) fn next_within(&mut self, offset: TextSize, end: TextSize) -> Option<Node> {
        while let Some(comment) = self.comments.get(self.cursor) {
            let span = comment.span();
            if span.start() >= offset {
                if span.end() > end {
                    return None;
                }
                self.cursor += 1;
                return Some(comment.clone());
            }
            self.cursor += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use text_size::{TextRange, TextSize};
    use uast_tree::{Kind, Node, Token};

    use super::CommentTable;

    fn comment(start: u32, end: u32) -> Node {
        let token = Token { value: "//".to_owned(), line: 1, column: start + 1 };
        Node::leaf(vec![Kind::COMMENT], "", token, TextRange::new(start.into(), end.into()))
    }

    fn starts(table: &mut CommentTable, offset: u32, end: u32) -> Vec<u32> {
        let (offset, end) = (TextSize::new(offset), TextSize::new(end));
        table.rewind(offset);
        std::iter::from_fn(|| table.next_within(offset, end))
            .map(|node| node.span().start().into())
            .collect()
    }

    #[test]
    fn takes_comments_inside_the_gap() {
        let mut table = CommentTable::new(vec![comment(2, 5), comment(10, 14), comment(20, 22)]);
        assert_eq!(starts(&mut table, 0, 15), [2, 10]);
        assert_eq!(starts(&mut table, 15, 30), [20]);
        assert!(starts(&mut table, 30, 40).is_empty());
    }

    #[test]
    fn leaves_a_comment_crossing_the_end() {
        let mut table = CommentTable::new(vec![comment(2, 5), comment(8, 12)]);
        assert_eq!(starts(&mut table, 0, 10), [2]);
        assert_eq!(starts(&mut table, 6, 12), [8]);
    }

    #[test]
    fn rewinds_for_an_enclosing_gap() {
        let mut table = CommentTable::new(vec![comment(2, 5), comment(10, 14), comment(20, 22)]);
        // A nested node consumed the later comments first.
        assert_eq!(starts(&mut table, 18, 25), [20]);
        assert_eq!(starts(&mut table, 8, 16), [10]);
        assert_eq!(starts(&mut table, 0, 6), [2]);
    }

    #[test]
    fn empty_table() {
        let mut table = CommentTable::default();
        assert!(starts(&mut table, 0, 100).is_empty());
        assert!(table.as_slice().is_empty());
    }
}
