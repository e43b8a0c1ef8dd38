use std::borrow::Cow;

use crate::{CharSet, Cursor, Kind, Token};

/// One way of recognizing a token at the cursor.
///
/// A matcher either produces a non-empty token and leaves the cursor behind it,
/// or produces nothing and leaves the cursor where it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher<K> {
    /// An exact word that must not run on into a character of `exclude`.
    Keyword { kind: K, word: Cow<'static, str>, exclude: CharSet },
    /// An exact word with no boundary check.
    Symbol { kind: K, word: Cow<'static, str> },
    /// The longest run of characters from `set`.
    Run { kind: K, set: CharSet },
    /// Text between two `quote` characters.
    ///
    /// A quote preceded by a backslash does not close the text, so `"\\"` is
    /// still open after its last quote. Unterminated text closes at end of input.
    Quoted { kind: K, quote: char },
    /// Any single character.
    Unknown { kind: K },
}

impl<K: Kind> Matcher<K> {
    pub fn keyword(kind: K, word: impl Into<Cow<'static, str>>, exclude: CharSet) -> Self {
        Self::Keyword { kind, word: word.into(), exclude }
    }

    pub fn symbol(kind: K, word: impl Into<Cow<'static, str>>) -> Self {
        Self::Symbol { kind, word: word.into() }
    }

    pub fn run(kind: K, set: CharSet) -> Self {
        Self::Run { kind, set }
    }

    pub fn quoted(kind: K, quote: char) -> Self {
        Self::Quoted { kind, quote }
    }

    pub fn unknown(kind: K) -> Self {
        Self::Unknown { kind }
    }

    pub fn kind(&self) -> K {
        match self {
            Self::Keyword { kind, .. }
            | Self::Symbol { kind, .. }
            | Self::Run { kind, .. }
            | Self::Quoted { kind, .. }
            | Self::Unknown { kind } => *kind,
        }
    }

    pub fn apply<'src>(&self, cursor: &mut Cursor<'src>) -> Option<Token<'src, K>> {
        if cursor.is_eof() {
            return None;
        }

        let mut ahead = cursor.clone();
        let matched = match self {
            Self::Keyword { word, exclude, .. } => {
                ahead.eat(word) && !ahead.peek_is(|c| exclude.contains(c))
            }
            Self::Symbol { word, .. } => ahead.eat(word),
            Self::Run { set, .. } => {
                ahead.advance_while(|c| set.contains(c));
                true
            }
            Self::Quoted { quote, .. } => {
                if ahead.peek() == *quote {
                    ahead.advance();
                    while !ahead.is_eof() {
                        let escaped = ahead.previous() == '\\';
                        if ahead.advance() == *quote && !escaped {
                            break;
                        }
                    }
                    true
                } else {
                    false
                }
            }
            Self::Unknown { .. } => {
                ahead.advance();
                true
            }
        };

        if !matched || ahead.offset() == cursor.offset() {
            return None;
        }

        *cursor = ahead;
        Some(cursor.token(self.kind()))
    }
}
