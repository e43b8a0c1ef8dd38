//! Human-facing diagnostics shared by the lexer, the parser and the binary.

use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::{TextRange, TextSize};

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
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(self.range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_render_points_at_range() {
        let text = "func main ( ) { x = ; }\n";
        let diagnostic = Diagnostic::error(
            "no rule of `Expr` matches `x =`",
            TextRange::new(16.into(), 19.into()),
        );

        let rendered = diagnostic.render(&Renderer::plain(), "main.ph", text).to_string();

        assert!(rendered.starts_with("error: no rule of `Expr` matches `x =`"), "{rendered}");
        assert!(rendered.contains("main.ph:1:17"), "{rendered}");
        assert!(rendered.contains("^^^ here"), "{rendered}");
    }

    #[test]
    fn accessors() {
        let range = TextRange::empty(TextSize::new(3));
        let diagnostic = Diagnostic::error(String::from("oops"), range);

        assert_eq!(diagnostic.message(), "oops");
        assert_eq!(diagnostic.range(), range);
    }
}
