//! Short string literal lexing.

use crate::error::{LexError, LexResult};
use crate::lexer::core::EOS_CHAR;
use crate::Lexer;

impl Lexer {
    /// Consumes a short string literal delimited by `"` or `'`.
    ///
    /// A backslash immediately followed by the matching quote is an escaped
    /// quote: both characters are consumed as literal content. Any other
    /// character, including a lone backslash, is ordinary content. The
    /// string runs until an unescaped matching quote.
    pub(crate) fn read_string(&mut self, out: &mut String) -> LexResult<()> {
        let quote = self.current;
        self.next_char(out);
        loop {
            match self.current {
                EOS_CHAR => return Err(LexError::UnterminatedString),
                c if c == quote => break,
                '\\' if self.peek_char(1) == Some(quote) => {
                    self.next_char(out);
                    self.next_char(out);
                },
                _ => {
                    self.next_char(out);
                },
            }
        }
        self.next_char(out);
        Ok(())
    }
}
