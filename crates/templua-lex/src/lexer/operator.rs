//! Operator and punctuation lexing.
//!
//! Each of `=`, `<`, `>`, `~`, and `:` is a one- or two-character operator
//! resolved by a single character of lookahead. `.` additionally
//! disambiguates concat, ellipsis, and leading-dot numerals.

use crate::token::Token;
use crate::Lexer;

impl Lexer {
    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self, out: &mut String) -> Token {
        if self.next_char(out) != '=' {
            return Token::Char('=');
        }
        self.next_char(out);
        Token::Eq
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self, out: &mut String) -> Token {
        if self.next_char(out) != '=' {
            return Token::Char('<');
        }
        self.next_char(out);
        Token::Le
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self, out: &mut String) -> Token {
        if self.next_char(out) != '=' {
            return Token::Char('>');
        }
        self.next_char(out);
        Token::Ge
    }

    /// Lexes `~` or `~=`.
    pub(crate) fn lex_tilde(&mut self, out: &mut String) -> Token {
        if self.next_char(out) != '=' {
            return Token::Char('~');
        }
        self.next_char(out);
        Token::Ne
    }

    /// Lexes `:` or `::`.
    pub(crate) fn lex_colon(&mut self, out: &mut String) -> Token {
        if self.next_char(out) != ':' {
            return Token::Char(':');
        }
        self.next_char(out);
        Token::DoubleColon
    }

    /// Lexes `.`, `..`, `...`, or a leading-dot numeral.
    pub(crate) fn lex_dot(&mut self, out: &mut String) -> Token {
        match self.peek_char(1) {
            Some('.') => {
                self.next_char(out);
                self.next_char(out);
                if self.current != '.' {
                    return Token::Concat;
                }
                self.next_char(out);
                Token::Dots
            },
            Some(c) if c.is_ascii_digit() => self.read_numeral(out),
            _ => {
                self.next_char(out);
                Token::Char('.')
            },
        }
    }
}
