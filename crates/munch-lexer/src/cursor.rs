use std::str::Chars;

use text_size::{TextLen, TextRange, TextSize};

use crate::Token;

pub(crate) const EOF_CHAR: char = '\0';

/// A position in the source text that matchers advance as they consume characters.
///
/// Everything consumed since the last emitted token belongs to the next token.
#[derive(Clone)]
pub struct Cursor<'src> {
    text: &'src str,
    chars: Chars<'src>,
    token_start: TextSize,
    previous: char,
}

impl<'src> Cursor<'src> {
    pub fn new(text: &'src str) -> Self {
        Self { text, chars: text.chars(), token_start: TextSize::new(0), previous: EOF_CHAR }
    }

    pub fn offset(&self) -> TextSize {
        self.text.text_len() - self.chars.as_str().text_len()
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'src str {
        self.chars.as_str()
    }

    pub fn previous(&self) -> char {
        self.previous
    }

    pub fn pos_within_token(&self) -> TextSize {
        self.offset() - self.token_start
    }

    pub fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    pub fn peek_is(&self, f: impl Fn(char) -> bool) -> bool {
        !self.is_eof() && f(self.peek())
    }

    pub fn advance(&mut self) -> char {
        self.previous = self.chars.next().unwrap_or(EOF_CHAR);
        self.previous
    }

    pub fn advance_while(&mut self, f: impl Fn(char) -> bool + Copy) {
        while self.peek_is(f) {
            self.advance();
        }
    }

    /// Consumes `word` if the remainder starts with it.
    pub fn eat(&mut self, word: &str) -> bool {
        if !self.rest().starts_with(word) {
            return false;
        }

        for _ in word.chars() {
            self.advance();
        }
        true
    }

    /// Cuts everything consumed since the previous token into a token of `kind`.
    pub fn token<K>(&mut self, kind: K) -> Token<'src, K> {
        let range = TextRange::at(self.token_start, self.pos_within_token());
        self.token_start = range.end();
        Token { kind, text: &self.text[range], range }
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("token_start", &self.token_start)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_offset_and_previous() {
        let mut cursor = Cursor::new("aé!");
        assert_eq!(cursor.peek(), 'a');
        assert_eq!(cursor.advance(), 'a');
        assert_eq!(cursor.advance(), 'é');
        assert_eq!(cursor.previous(), 'é');
        assert_eq!(cursor.offset(), TextSize::new(3));
        assert_eq!(cursor.rest(), "!");
        assert!(!cursor.is_eof());
        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), EOF_CHAR);
    }

    #[test]
    fn eat_only_consumes_on_match() {
        let mut cursor = Cursor::new("::x");
        assert!(!cursor.eat(":x"));
        assert_eq!(cursor.offset(), TextSize::new(0));
        assert!(cursor.eat("::"));
        assert_eq!(cursor.rest(), "x");
        assert_eq!(cursor.previous(), ':');
    }

    #[test]
    fn token_cuts_consumed_text() {
        let mut cursor = Cursor::new("ab cd");
        cursor.advance_while(|c| c.is_ascii_alphabetic());
        assert_eq!(cursor.pos_within_token(), TextSize::new(2));

        let token = cursor.token(());
        assert_eq!(token.text, "ab");
        assert_eq!(token.range, TextRange::new(0.into(), 2.into()));
        assert_eq!(cursor.pos_within_token(), TextSize::new(0));

        cursor.advance();
        cursor.advance_while(|c| c.is_ascii_alphabetic());
        let token = cursor.token(());
        assert_eq!(token.text, " cd");
        assert_eq!(token.range, TextRange::new(2.into(), 5.into()));
    }
}
