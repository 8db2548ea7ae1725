//! Forward-only byte cursor with one byte of lookahead.
//!
//! The cursor tracks two indices into the input: `position`, the byte under
//! examination, and `read_position`, the next byte to read. The byte at
//! `position` is cached in `ch`. Past the end of the input `ch` holds the
//! sentinel `0x00`.
//!
//! # Interior Null Bytes
//!
//! The sentinel is in-band, so a NUL inside the source also reads as `0x00`.
//! EOF is therefore decided by comparing `position` against the input
//! length, never by the byte value alone: a NUL at `position < len` is an
//! ordinary (illegal) byte.

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
pub fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so a scanner can snapshot it cheaply.
///
/// # Invariant
///
/// After construction and after every [`advance`](Self::advance):
/// - `read_position == position + 1`
/// - `position <= input.len()`
/// - `ch == input[position]` when `position < input.len()`, else `ch == 0`
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    input: &'src str,
    /// Index of the byte under examination.
    position: usize,
    /// Index of the next byte to read.
    read_position: usize,
    /// Byte at `position`, or `0` past the end.
    ch: u8,
}

impl<'src> Cursor<'src> {
    /// Create a cursor primed on the first byte of `input`.
    ///
    /// For empty input the cursor starts at EOF.
    pub fn new(input: &'src str) -> Self {
        let mut cursor = Self {
            input,
            position: 0,
            read_position: 0,
            ch: 0,
        };
        cursor.advance();
        cursor
    }

    /// Byte under examination. `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.ch
    }

    /// Byte at `read_position` without consuming it. `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    /// Move one byte forward.
    ///
    /// Once the cursor sits at EOF it stays there: further calls leave
    /// `position` at `input.len()`.
    #[inline]
    pub fn advance(&mut self) {
        if self.read_position > self.input.len() {
            return;
        }
        self.ch = self.byte_at(self.read_position);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Move past one full UTF-8 character, using `ch` as the leading byte.
    #[inline]
    pub fn advance_char(&mut self) {
        for _ in 0..utf8_char_width(self.ch) {
            self.advance();
        }
    }

    /// Returns `true` once every byte of the input has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Index of the byte under examination.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the next byte to read.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Length of the input in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.input.len()
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Stops at EOF regardless of what `pred(0)` returns.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.ch) {
            self.advance();
        }
    }

    /// Advance past spaces, tabs, newlines and carriage returns.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Source text from `start` up to (not including) the current position.
    ///
    /// # Contract
    ///
    /// `start` must be a character boundary at or before `position`. The
    /// scanner guarantees this by only recording starts at token boundaries
    /// and only stepping over whole characters.
    pub fn slice_from(&self, start: usize) -> &'src str {
        debug_assert!(
            start <= self.position,
            "slice start {start} exceeds position {}",
            self.position
        );
        self.input.get(start..self.position).unwrap_or_default()
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.input.as_bytes().get(index).copied().unwrap_or(0)
    }
}

/// Whitespace separates tokens and carries no token identity.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
