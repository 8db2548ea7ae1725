//! Token kinds and the `(kind, literal)` token pair.
//!
//! [`TokenKind`] is a closed set. Its `Display` output is the name the
//! downstream parser matches on: symbol kinds print as their lexeme
//! (`=`, `+`, ...), every other kind prints as an upper-case name
//! (`IDENT`, `LET`, ...).

use std::fmt;

/// Kind of a lexical token.
///
/// Discriminants are grouped by category, leaving room to grow each range:
/// - Control and literals: 0-15
/// - Operators: 32-47
/// - Delimiters: 48-63
/// - Keywords: 64-95
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character no other class accepts.
    Illegal = 0,
    /// End of input. Its literal is always empty.
    Eof = 1,
    /// Identifier that is not a reserved word.
    Ident = 2,
    /// Unsigned decimal integer literal (`[0-9]+`).
    Int = 3,

    /// `=`
    Assign = 32,
    /// `+`
    Plus = 33,

    /// `,`
    Comma = 48,
    /// `;`
    Semicolon = 49,
    /// `(`
    LParen = 50,
    /// `)`
    RParen = 51,
    /// `{`
    LBrace = 52,
    /// `}`
    RBrace = 53,

    /// `fn`
    Function = 64,
    /// `let`
    Let = 65,
}

impl TokenKind {
    /// Fixed source text for kinds that always have the same lexeme.
    ///
    /// Returns `None` for kinds whose text depends on the input
    /// (identifiers, integers, illegal characters, keywords, EOF).
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Assign => Some("="),
            Self::Plus => Some("+"),
            Self::Comma => Some(","),
            Self::Semicolon => Some(";"),
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::LBrace => Some("{"),
            Self::RBrace => Some("}"),
            Self::Illegal | Self::Eof | Self::Ident | Self::Int | Self::Function | Self::Let => {
                None
            }
        }
    }

    /// Returns `true` for reserved-word kinds.
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::Function | Self::Let)
    }

    /// Name used in token dumps and by the parser.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit: a kind plus the exact source text that produced it.
///
/// The literal borrows the scanned input, so tokens are `Copy` and cost no
/// allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub literal: &'src str,
}

impl<'src> Token<'src> {
    pub const fn new(kind: TokenKind, literal: &'src str) -> Self {
        Self { kind, literal }
    }

    /// The end-of-input token.
    pub const fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: "",
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}
