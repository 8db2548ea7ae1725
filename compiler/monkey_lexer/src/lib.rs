//! Lexer for the Monkey language.
//!
//! Turns source text into a flat stream of [`Token`]s for the parser.
//! The model is single-byte ASCII: letters are `a-z`, `A-Z` and `_`,
//! integers are `[0-9]+`, and eight one-character symbols are recognized.
//! Everything else is an [`TokenKind::Illegal`] token.
//!
//! ```
//! use monkey_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let five = 5;");
//! assert_eq!(scanner.next_token().kind, TokenKind::Let);
//! assert_eq!(scanner.next_token().literal, "five");
//! ```

mod cursor;
mod error;
mod keywords;
mod scanner;
mod token;

pub use cursor::{is_whitespace, utf8_char_width, Cursor};
pub use error::LexError;
pub use keywords::{lookup_ident, KeywordTable, KEYWORDS};
pub use scanner::{is_digit, is_letter, tokenize, tokenize_strict, Scanner};
pub use token::{Token, TokenKind};
