//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the token dispatch loop, the
//! character advance primitives, and the pause/resume protocol.

use crate::cursor::FragmentCursor;
use crate::error::{LexError, LexResult};
use crate::fragment::FragmentKind;
use crate::lexer::long_bracket::SepScan;
use crate::token::Token;

/// Sentinel returned by the advance primitives at end of stream.
///
/// Fragment content never contains U+0000 (the source encoding contract),
/// so the sentinel cannot be confused with real input.
pub(crate) const EOS_CHAR: char = '\0';

/// Returns the first character of `s`, or the end-of-stream sentinel if
/// `s` is empty.
fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or(EOS_CHAR)
}

/// Lexer for script text embedded in a fragmented template document.
///
/// The lexer walks a [`FragmentCursor`] one logical character at a time and
/// assembles tokens. Every character it advances past is appended to a
/// caller-supplied output accumulator, except the single character that
/// triggers each token's return, which stays pending so short lookahead
/// never needs backtracking.
///
/// The accumulator is passed explicitly to each call rather than stored, so
/// the caller can read it at any pause point and multiple lexer instances
/// never interfere.
pub struct Lexer {
    /// Cursor over the fragment sequence. Exclusively owned.
    pub(crate) cursor: FragmentCursor,

    /// The character at the read point, or [`EOS_CHAR`] past the end.
    pub(crate) current: char,

    /// Byte offset of `current` within the current fragment.
    pub(crate) pos: usize,

    /// Whether `Eos` has been produced. Terminal.
    finished: bool,
}

impl Lexer {
    /// Creates a lexer over the given fragment cursor.
    ///
    /// The read position is established immediately, skipping any leading
    /// zero-length fragments.
    pub fn new(cursor: FragmentCursor) -> Self {
        let mut lexer = Self {
            cursor,
            current: EOS_CHAR,
            pos: 0,
            finished: false,
        };
        lexer.resync();
        lexer
    }

    /// Returns the next token, appending consumed characters to `out`.
    ///
    /// Whitespace and comments are consumed silently (their characters
    /// still reach `out`). Once `Eos` has been returned, every further call
    /// returns `Eos` again without error.
    pub fn next_token(&mut self, out: &mut String) -> LexResult<Token> {
        if self.finished {
            return Ok(Token::Eos);
        }
        let token = self.tokenize(out)?;
        if token == Token::Eos {
            self.finished = true;
        }
        Ok(token)
    }

    /// Returns the next token in a context that guarantees more input
    /// exists.
    ///
    /// Unlike [`next_token`](Self::next_token), calling this after `Eos`
    /// has already been produced is a contract violation and fails with
    /// [`LexError::CalledAfterEnd`].
    pub fn expect_next_token(&mut self, out: &mut String) -> LexResult<Token> {
        if self.finished {
            return Err(LexError::CalledAfterEnd);
        }
        self.next_token(out)
    }

    /// Pauses the lexer at the current read point.
    ///
    /// Splits the current fragment at the in-fragment offset so that the
    /// unconsumed remainder becomes the current fragment at offset zero,
    /// ready to be handled by the outer protocol through
    /// [`cursor_mut`](Self::cursor_mut). Characters already consumed are in
    /// the accumulator; the pending read-point character is not, since the
    /// lexer has not consumed it.
    pub fn flush(&mut self) {
        if self.pos != 0 {
            self.cursor.split(self.pos);
            self.pos = 0;
        }
    }

    /// Re-synchronizes the read position from the cursor's authoritative
    /// state after the caller has independently advanced it.
    ///
    /// Skips zero-length fragments first. If the caller consumed the last
    /// fragment, the lexer lands in the end-of-stream state and
    /// [`next_token`](Self::next_token) returns `Eos`.
    ///
    /// A `flush` followed immediately by `resync` with no cursor mutation
    /// in between is a no-op on subsequent token output.
    pub fn resync(&mut self) {
        while !self.cursor.is_done() && self.cursor.current().is_empty() {
            self.cursor.advance();
        }
        self.pos = 0;
        self.current = if self.cursor.is_done() {
            EOS_CHAR
        } else {
            first_char(&self.cursor.current().content)
        };
    }

    /// Returns the fragment cursor.
    pub fn cursor(&self) -> &FragmentCursor {
        &self.cursor
    }

    /// Returns the fragment cursor for external advancing during a pause.
    ///
    /// After mutating the cursor, call [`resync`](Self::resync) before
    /// requesting further tokens.
    pub fn cursor_mut(&mut self) -> &mut FragmentCursor {
        &mut self.cursor
    }

    /// Returns true if `Eos` has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Consumes the current character, appending it to `out`, and returns
    /// the new current character.
    ///
    /// Crossing a fragment boundary skips to the next non-empty fragment.
    /// At end of stream this is a no-op returning [`EOS_CHAR`].
    pub(crate) fn next_char(&mut self, out: &mut String) -> char {
        if self.current == EOS_CHAR {
            return EOS_CHAR;
        }
        out.push(self.current);
        self.pos += self.current.len_utf8();
        if self.pos >= self.cursor.current().content.len() {
            return self.skip_fragment(out);
        }
        self.current = first_char(&self.cursor.current().content[self.pos..]);
        self.current
    }

    /// Appends the unconsumed remainder of the current fragment to `out`
    /// and advances to the next non-empty fragment.
    ///
    /// Returns the new current character, or [`EOS_CHAR`] if the sequence
    /// is exhausted.
    pub(crate) fn skip_fragment(&mut self, out: &mut String) -> char {
        let content = &self.cursor.current().content;
        if self.pos < content.len() {
            out.push_str(&content[self.pos..]);
        }
        self.pos = 0;
        self.current = if self.cursor.advance() {
            first_char(&self.cursor.current().content)
        } else {
            EOS_CHAR
        };
        self.current
    }

    /// Returns the character `offset` positions ahead of the read point
    /// without consuming anything. `peek_char(0)` is the current character.
    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        if self.current == EOS_CHAR {
            None
        } else {
            self.cursor.peek_from(self.pos, offset)
        }
    }

    /// Dispatches on the current character, looping until a token is
    /// produced.
    fn tokenize(&mut self, out: &mut String) -> LexResult<Token> {
        loop {
            match self.current {
                '\n' | '\r' | ' ' | '\t' | '\x0B' | '\x0C' => {
                    self.next_char(out);
                },
                '-' => {
                    if let Some(token) = self.lex_minus(out)? {
                        return Ok(token);
                    }
                },
                '[' => match self.skip_separator(out) {
                    SepScan::Valid(level) => {
                        self.read_long_bracket(level, out)?;
                        return Ok(Token::String);
                    },
                    SepScan::Invalid(0) => return Ok(Token::Char('[')),
                    SepScan::Invalid(_) => return Err(LexError::InvalidLongBracketDelimiter),
                },
                '=' => return Ok(self.lex_equals(out)),
                '<' => return Ok(self.lex_less(out)),
                '>' => return Ok(self.lex_greater(out)),
                '~' => return Ok(self.lex_tilde(out)),
                ':' => return Ok(self.lex_colon(out)),
                '"' | '\'' => {
                    self.read_string(out)?;
                    return Ok(Token::String);
                },
                '.' => return Ok(self.lex_dot(out)),
                c if c.is_ascii_digit() => return Ok(self.read_numeral(out)),
                EOS_CHAR => return Ok(Token::Eos),
                c => {
                    if self.cursor.current().kind == FragmentKind::Text {
                        return Ok(self.read_identifier(out));
                    }
                    // Opaque fragment: one character, one token.
                    self.next_char(out);
                    return Ok(Token::Char(c));
                },
            }
        }
    }
}
