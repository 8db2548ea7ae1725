//! Errors surfaced by the strict tokenization helper.

/// A lexical failure.
///
/// The scanner itself never fails; this is only produced by
/// [`tokenize_strict`](crate::tokenize_strict).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("illegal character {literal:?} at byte {offset}")]
    IllegalCharacter { literal: String, offset: usize },
}
