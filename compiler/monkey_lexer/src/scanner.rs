//! Hand-written scanner producing one [`Token`] per call.
//!
//! The scanner drives a [`Cursor`] over the source and resolves identifier
//! runs against a [`KeywordTable`]. It never fails: a character that no class
//! accepts becomes a [`TokenKind::Illegal`] token and scanning continues.
//!
//! # Design
//!
//! Whitespace is skipped at the top of every call. Main dispatch then looks
//! at the current byte:
//! - single-character symbols consume exactly one byte
//! - letters and digits consume a maximal run of their own class; letters
//!   never absorb digits and digits never absorb letters
//! - EOF returns without moving, so repeated calls keep returning EOF
//! - anything else is illegal and consumes one character

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords::{KeywordTable, KEYWORDS};
use crate::{LexError, Token, TokenKind};

/// Single-pass scanner over a borrowed source string.
///
/// Produces tokens one at a time through [`next_token`](Self::next_token),
/// or as an iterator that stops before EOF.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    keywords: &'src KeywordTable,
}

impl<'src> Scanner<'src> {
    /// Create a scanner using the default keyword table.
    pub fn new(input: &'src str) -> Self {
        Self::with_keywords(input, &KEYWORDS)
    }

    /// Create a scanner that resolves reserved words against `keywords`.
    pub fn with_keywords(input: &'src str, keywords: &'src KeywordTable) -> Self {
        Self {
            cursor: Cursor::new(input),
            keywords,
        }
    }

    /// Byte offset of the cursor.
    ///
    /// After EOF has been produced this is the input length and stays there.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] with an empty literal when the input is
    /// exhausted. Subsequent calls after EOF continue to return EOF.
    pub fn next_token(&mut self) -> Token<'src> {
        self.cursor.eat_whitespace();
        let start = self.cursor.position();
        let token = match self.cursor.current() {
            b'=' => self.single(start, TokenKind::Assign),
            b';' => self.single(start, TokenKind::Semicolon),
            b'(' => self.single(start, TokenKind::LParen),
            b')' => self.single(start, TokenKind::RParen),
            b',' => self.single(start, TokenKind::Comma),
            b'+' => self.single(start, TokenKind::Plus),
            b'{' => self.single(start, TokenKind::LBrace),
            b'}' => self.single(start, TokenKind::RBrace),
            0 if self.cursor.is_eof() => Token::eof(),
            b if is_letter(b) => self.identifier(start),
            b if is_digit(b) => self.number(start),
            _ => self.illegal(start),
        };
        trace!(kind = %token.kind, literal = token.literal, "token");
        token
    }

    // ─── Symbols ─────────────────────────────────────────────────────

    #[inline]
    fn single(&mut self, start: usize, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        Token::new(kind, self.cursor.slice_from(start))
    }

    // ─── Runs ────────────────────────────────────────────────────────

    fn identifier(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(is_letter);
        let literal = self.cursor.slice_from(start);
        Token::new(self.keywords.lookup_ident(literal), literal)
    }

    fn number(&mut self, start: usize) -> Token<'src> {
        self.cursor.eat_while(is_digit);
        Token::new(TokenKind::Int, self.cursor.slice_from(start))
    }

    // ─── Error tokens ────────────────────────────────────────────────

    /// One illegal character. ASCII bytes (including interior NUL) are a
    /// single byte; a non-ASCII leading byte takes its whole UTF-8 sequence
    /// so the literal stays valid text.
    fn illegal(&mut self, start: usize) -> Token<'src> {
        self.cursor.advance_char();
        Token::new(TokenKind::Illegal, self.cursor.slice_from(start))
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

/// `a-z`, `A-Z` and `_`. Digits are deliberately excluded.
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Tokenize a source string and collect every token except the final EOF.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<_> = Scanner::new(source).collect();
    debug!(count = tokens.len(), "tokenized");
    tokens
}

/// Tokenize a source string, failing on the first illegal character.
///
/// The scanner itself always continues past illegal characters; this is the
/// convenience for consumers that treat any of them as fatal.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn tokenize_strict(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        match tok.kind {
            TokenKind::Eof => break,
            TokenKind::Illegal => {
                let offset = scanner.position() - tok.literal.len();
                debug!(offset, literal = tok.literal, "illegal character");
                return Err(LexError::IllegalCharacter {
                    literal: tok.literal.to_owned(),
                    offset,
                });
            }
            _ => tokens.push(tok),
        }
    }
    debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}
