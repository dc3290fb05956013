//! Identifier and keyword lexing.
//!
//! An identifier is a run of consecutive Text-kind fragments, concatenated
//! verbatim. The lexer does not filter identifier characters itself: the
//! upstream fragmenter has already grouped identifier-eligible runs into
//! Text fragments, and anything else arrives in opaque fragments that end
//! the run.

use crate::fragment::FragmentKind;
use crate::token::{keyword_from_ident, Token};
use crate::Lexer;

impl Lexer {
    /// Reads an identifier or keyword starting at the current character.
    pub(crate) fn read_identifier(&mut self, out: &mut String) -> Token {
        // Start at a fragment boundary so whole fragment contents can be
        // appended directly.
        self.flush();

        let mut spelling = String::new();
        while !self.cursor.is_done() && self.cursor.current().kind == FragmentKind::Text {
            spelling.push_str(&self.cursor.current().content);
            self.skip_fragment(out);
        }

        keyword_from_ident(&spelling).unwrap_or(Token::Name)
    }
}
