//! Long-bracket literal lexing.
//!
//! Lua's `[=*[ ... ]=*]` delimited form covers both long strings and long
//! comments. The count of `=` characters between the brackets is the
//! separator level; opener and closer must agree on it.

use crate::error::{LexError, LexResult};
use crate::lexer::core::EOS_CHAR;
use crate::Lexer;

/// Result of scanning a `[`/`]` separator run.
pub(crate) enum SepScan {
    /// A matching bracket pair with the given `=` count. The whole
    /// delimiter has been consumed.
    Valid(usize),

    /// No matching bracket after the given `=` count. Only the initial
    /// bracket character has been consumed; the `=` run was peeked, not
    /// consumed.
    Invalid(usize),
}

impl Lexer {
    /// Scans a long-bracket separator starting at the current `[` or `]`.
    pub(crate) fn skip_separator(&mut self, out: &mut String) -> SepScan {
        let bracket = self.current;
        self.next_char(out);

        let mut count = 0;
        while self.peek_char(count) == Some('=') {
            count += 1;
        }

        if self.peek_char(count) == Some(bracket) {
            for _ in 0..=count {
                self.next_char(out);
            }
            SepScan::Valid(count)
        } else {
            SepScan::Invalid(count)
        }
    }

    /// Consumes long-bracket content through the closer at `level`.
    ///
    /// The opener has already been consumed. A `]` run at a different level
    /// is ordinary content and does not close the literal.
    pub(crate) fn read_long_bracket(&mut self, level: usize, out: &mut String) -> LexResult<()> {
        loop {
            match self.current {
                EOS_CHAR => return Err(LexError::UnterminatedLongLiteral),
                ']' => {
                    if matches!(self.skip_separator(out), SepScan::Valid(l) if l == level) {
                        return Ok(());
                    }
                },
                _ => {
                    self.next_char(out);
                },
            }
        }
    }
}
