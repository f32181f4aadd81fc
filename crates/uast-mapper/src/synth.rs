//! Recognition of the punctuation and keywords the native tree leaves out.

use text_size::{TextRange, TextSize};
use uast_tree::Kind;

/// A token found in a gap between two positioned nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MissingToken {
    Known { range: TextRange, text: &'static str },
    /// Everything from the first unrecognized byte to the end of the gap.
    Unknown { range: TextRange },
}

/// The only token a gap may hold that starts with `lead`.
fn expected(lead: u8) -> Option<&'static str> {
    let text = match lead {
        b',' => ",",
        b';' => ";",
        b'.' => ".",
        b'[' => "[",
        b']' => "]",
        b'=' => "=",
        b':' => ":",
        b't' => "type",
        b'r' => "range",
        b'e' => "else",
        b'c' => "chan",
        b'<' => "<-",
        _ => return None,
    };
    Some(text)
}

pub(crate) fn kinds(text: &str) -> Vec<Kind> {
    match text {
        "else" => vec![Kind::ELSE_KEYWORD],
        _ => Vec::new(),
    }
}

/// Bytes up to and including the space are whitespace. UTF-8 continuation
/// bytes are all at least `0x80`.
fn is_space(byte: u8) -> bool {
    byte <= b' '
}

/// Splits `text[offset..end]` into missing tokens, skipping whitespace.
pub(crate) fn missing_tokens(text: &str, offset: TextSize, end: TextSize) -> Vec<MissingToken> {
    let bytes = text.as_bytes();
    let mut start = usize::from(offset);
    let mut end = usize::from(end).min(bytes.len());

    while start < end && is_space(bytes[start]) {
        start += 1;
    }
    while end > start && is_space(bytes[end - 1]) {
        end -= 1;
    }

    let mut tokens = Vec::new();
    while start < end {
        let known = expected(bytes[start])
            .filter(|token| bytes[start..end].starts_with(token.as_bytes()));

        let Some(token) = known else {
            tokens.push(MissingToken::Unknown { range: range(start, end) });
            break;
        };
        tokens.push(MissingToken::Known { range: range(start, start + token.len()), text: token });

        start += token.len();
        while start < end && is_space(bytes[start]) {
            start += 1;
        }
    }
    tokens
}

fn range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use text_size::{TextRange, TextSize};

    use super::{MissingToken, missing_tokens};

    fn tokens(text: &str) -> Vec<String> {
        missing_tokens(text, TextSize::new(0), TextSize::of(text))
            .into_iter()
            .map(|token| match token {
                MissingToken::Known { range, .. } => text[range].to_owned(),
                MissingToken::Unknown { range } => format!("?{}", &text[range]),
            })
            .collect()
    }

    #[test]
    fn punctuation() {
        assert_eq!(tokens(" , "), [","]);
        assert_eq!(tokens(";\n\t."), [";", "."]);
        assert_eq!(tokens("] = ["), ["]", "=", "["]);
        assert_eq!(tokens(":"), [":"]);
    }

    #[test]
    fn keywords() {
        assert_eq!(tokens(" else "), ["else"]);
        assert_eq!(tokens(", range"), [",", "range"]);
        assert_eq!(tokens(".(type"), [".", "?(type"]);
        assert_eq!(tokens("<-chan"), ["<-", "chan"]);
    }

    #[test]
    fn whitespace_only() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \r\n\t ").is_empty());
    }

    #[test]
    fn unknown_remainder() {
        assert_eq!(tokens(", foo bar "), [",", "?foo bar"]);
        assert_eq!(tokens("elsewhere"), ["else", "?where"]);
        assert_eq!(tokens("ty"), ["?ty"]);
        assert_eq!(tokens("+"), ["?+"]);
    }

    #[test]
    fn sub_range() {
        let text = "a , b";
        let found = missing_tokens(text, TextSize::new(1), TextSize::new(4));
        assert_eq!(
            found,
            [MissingToken::Known { range: TextRange::new(2.into(), 3.into()), text: "," }]
        );
    }

    proptest! {
        #[test]
        fn deterministic_and_in_bounds(text in "[ ,;.\\[\\]=:typerangelsch<\\-x\n]{0,32}") {
            let end = TextSize::of(text.as_str());
            let first = missing_tokens(&text, TextSize::new(0), end);
            prop_assert_eq!(&first, &missing_tokens(&text, TextSize::new(0), end));

            let mut previous = TextSize::new(0);
            for token in first {
                let range = match token {
                    MissingToken::Known { range, text: expected } => {
                        prop_assert_eq!(&text[range], expected);
                        range
                    }
                    MissingToken::Unknown { range } => range,
                };
                prop_assert!(previous <= range.start());
                prop_assert!(range.end() <= end);
                previous = range.end();
            }
        }
    }
}
