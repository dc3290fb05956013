//! Comment lexing.
//!
//! `--` begins a comment. If a valid long-bracket opener follows, the
//! comment runs through the matching closer; otherwise it runs to end of
//! line or end of stream. Comments produce no tokens, but their characters
//! still reach the output accumulator so the caller can re-emit them
//! byte-for-byte.

use crate::error::LexResult;
use crate::lexer::core::EOS_CHAR;
use crate::lexer::long_bracket::SepScan;
use crate::token::Token;
use crate::Lexer;

impl Lexer {
    /// Lexes from a `-`: either the minus token or a comment.
    ///
    /// Returns `None` when a comment was consumed and dispatch should
    /// continue looking for a token.
    pub(crate) fn lex_minus(&mut self, out: &mut String) -> LexResult<Option<Token>> {
        if self.next_char(out) != '-' {
            return Ok(Some(Token::Char('-')));
        }
        if self.next_char(out) == '[' {
            if let SepScan::Valid(level) = self.skip_separator(out) {
                self.read_long_bracket(level, out)?;
                return Ok(None);
            }
            // Not a long bracket: the `[` belongs to the short comment.
        }
        while !matches!(self.current, '\r' | '\n' | EOS_CHAR) {
            self.next_char(out);
        }
        Ok(None)
    }
}
