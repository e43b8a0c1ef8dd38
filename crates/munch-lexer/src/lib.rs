//! Maximal-munch lexing driven by an ordered list of matchers.

mod char_set;
mod cursor;
mod matcher;

use std::fmt;

pub use char_set::CharSet;
pub use cursor::Cursor;
pub use matcher::Matcher;
pub use text_size::{TextRange, TextSize};

/// Anything usable as a token or node kind, usually a fieldless enum.
pub trait Kind: Copy + Eq + fmt::Debug {}

impl<T: Copy + Eq + fmt::Debug> Kind for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src, K> {
    pub kind: K,
    pub text: &'src str,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("no matcher accepts the input at byte offset {offset}")]
    Stalled { offset: usize },
}

/// Splits text into tokens by trying matchers in registration order.
///
/// The first matcher that succeeds wins, so longer symbols have to be
/// registered before their prefixes. Registering [`Matcher::Unknown`] last
/// makes tokenizing infallible.
#[derive(Debug, Clone)]
pub struct Lexer<K> {
    matchers: Vec<Matcher<K>>,
    ignored: Option<K>,
}

impl<K> Default for Lexer<K> {
    fn default() -> Self {
        Self { matchers: Vec::new(), ignored: None }
    }
}

impl<K: Kind> Lexer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matcher(mut self, matcher: Matcher<K>) -> Self {
        self.matchers.push(matcher);
        self
    }

    pub fn matchers(mut self, matchers: impl IntoIterator<Item = Matcher<K>>) -> Self {
        self.matchers.extend(matchers);
        self
    }

    /// Tokens of `kind` are matched as usual but left out of the output.
    pub fn ignore(mut self, kind: K) -> Self {
        self.ignored = Some(kind);
        self
    }

    pub fn tokenize<'src>(&self, text: &'src str) -> Result<Vec<Token<'src, K>>, LexError> {
        let mut cursor = Cursor::new(text);
        let mut tokens = Vec::new();

        while !cursor.is_eof() {
            let token = self
                .matchers
                .iter()
                .find_map(|matcher| matcher.apply(&mut cursor))
                .ok_or_else(|| LexError::Stalled { offset: cursor.offset().into() })?;

            if Some(token.kind) != self.ignored {
                tokens.push(token);
            }
        }

        tracing::debug!(tokens = tokens.len(), bytes = text.len(), "tokenized source");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests;
