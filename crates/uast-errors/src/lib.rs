use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::TextRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn error(message: impl Into<String>, range: TextRange) -> Self {
        Self { message: message.into(), range }
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let range = clamp(self.range, text);
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.range, self.message)
    }
}

/// Keeps the annotation inside `text` so that an out-of-bounds range coming
/// from a broken tree can still be rendered.
fn clamp(range: TextRange, text: &str) -> TextRange {
    let len = text_size::TextSize::of(text);
    let start = range.start().min(len);
    let end = range.end().clamp(start, len);
    TextRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use text_size::{TextRange, TextSize};

    use super::{Diagnostic, Renderer};

    #[test]
    fn renders_origin_and_message() {
        let text = "package main\nfunc (\n";
        let diagnostic =
            Diagnostic::error("expected ')'", TextRange::at(TextSize::new(19), TextSize::new(1)));
        let rendered =
            diagnostic.render(&Renderer::plain(), "main.go", text).to_string();

        assert!(rendered.contains("error: expected ')'"));
        assert!(rendered.contains("main.go"));
    }

    #[test]
    fn out_of_bounds_range_is_clamped() {
        let diagnostic =
            Diagnostic::error("broken", TextRange::new(TextSize::new(40), TextSize::new(50)));
        let rendered = diagnostic.render(&Renderer::plain(), "main.go", "x").to_string();

        assert!(rendered.contains("broken"));
    }
}
