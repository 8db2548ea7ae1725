//! Reserved-word resolution.
//!
//! Identifier runs are resolved against a [`KeywordTable`] after the scanner
//! has accumulated them. The table is an immutable `const` mapping from
//! exact text to a keyword [`TokenKind`]; a run with no entry is an
//! [`TokenKind::Ident`].
//!
//! The default table is [`KEYWORDS`]. A scanner can be handed any other
//! table through [`Scanner::with_keywords`](crate::Scanner::with_keywords),
//! which is how an embedding spells its reserved words differently without
//! touching the scanner.

use crate::TokenKind;

/// Default reserved words.
pub static KEYWORDS: KeywordTable =
    KeywordTable::new(&[("fn", TokenKind::Function), ("let", TokenKind::Let)]);

/// Immutable mapping from reserved-word text to keyword kind.
///
/// Matching is exact and case-sensitive: `Let` is an identifier.
#[derive(Clone, Copy, Debug)]
pub struct KeywordTable {
    entries: &'static [(&'static str, TokenKind)],
    /// Shortest and longest entry, for rejecting most identifiers before
    /// any string comparison.
    min_len: usize,
    max_len: usize,
}

impl KeywordTable {
    /// Build a table from `(text, kind)` entries.
    pub const fn new(entries: &'static [(&'static str, TokenKind)]) -> Self {
        let mut min_len = usize::MAX;
        let mut max_len = 0;
        let mut i = 0;
        while i < entries.len() {
            let len = entries[i].0.len();
            if len < min_len {
                min_len = len;
            }
            if len > max_len {
                max_len = len;
            }
            i += 1;
        }
        Self {
            entries,
            min_len,
            max_len,
        }
    }

    /// Look up a reserved word.
    ///
    /// Returns `None` when `text` is an ordinary identifier.
    #[inline]
    pub fn lookup(&self, text: &str) -> Option<TokenKind> {
        let len = text.len();
        if len < self.min_len || len > self.max_len {
            return None;
        }
        self.entries
            .iter()
            .find(|(word, _)| *word == text)
            .map(|&(_, kind)| kind)
    }

    /// Resolve an identifier run to its token kind.
    #[inline]
    pub fn lookup_ident(&self, text: &str) -> TokenKind {
        self.lookup(text).unwrap_or(TokenKind::Ident)
    }

    /// The `(text, kind)` entries of this table.
    pub fn entries(&self) -> &'static [(&'static str, TokenKind)] {
        self.entries
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        KEYWORDS
    }
}

/// Resolve an identifier against the default table.
pub fn lookup_ident(text: &str) -> TokenKind {
    KEYWORDS.lookup_ident(text)
}
