//! Numeric literal lexing.
//!
//! After an optional `0x`/`0X` prefix, the scan greedily consumes digits,
//! signs, dots, and the applicable exponent letter (`p` for hexadecimal,
//! `e` for decimal, case-insensitive). The greediness deliberately overlaps
//! with sign and dot usage elsewhere in the grammar: `1+2` scans as a
//! single numeral. This matches the original implementation and is an
//! accepted simplification, not a bug to tighten. Locale-aware decimal
//! separators are not supported.

use crate::token::Token;
use crate::Lexer;

/// Returns true if `c` can continue a numeral with the given exponent
/// letter.
fn is_numeral_char(c: char, exponent: char) -> bool {
    c.is_ascii_digit() || c == '+' || c == '-' || c == '.' || c.to_ascii_lowercase() == exponent
}

impl Lexer {
    /// Consumes a numeral starting at the current digit or dot.
    pub(crate) fn read_numeral(&mut self, out: &mut String) -> Token {
        let hex = self.current == '0' && matches!(self.peek_char(1), Some('x' | 'X'));
        if hex {
            self.next_char(out);
            self.next_char(out);
        }
        let exponent = if hex { 'p' } else { 'e' };
        while is_numeral_char(self.next_char(out), exponent) {}
        Token::Number
    }
}
