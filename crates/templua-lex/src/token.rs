//! Token type definitions.
//!
//! Tokens carry no payload text. The spelling of a `Name`, `Number`, or
//! `String` token is recovered by the caller from the output accumulator,
//! which receives a verbatim copy of every character the lexer advances
//! past. That keeps the token type `Copy` and makes accurate accumulator
//! bookkeeping a hard invariant of the lexer rather than an optimization.

/// A lexical token of the embedded scripting language.
///
/// Single-character punctuation is represented by the explicit
/// [`Char`](Token::Char) variant rather than by overlapping token numbering
/// with raw character codes. The synthetic placeholder character
/// ([`PLACEHOLDER_CHAR`](crate::PLACEHOLDER_CHAR)) lexes as an ordinary
/// `Char` token and is usable anywhere the grammar accepts a name-class
/// atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// `do` keyword.
    Do,
    /// `else` keyword.
    Else,
    /// `elseif` keyword.
    Elseif,
    /// `end` keyword.
    End,
    /// `false` keyword.
    False,
    /// `for` keyword.
    For,
    /// `function` keyword.
    Function,
    /// `goto` keyword.
    Goto,
    /// `if` keyword.
    If,
    /// `in` keyword.
    In,
    /// `local` keyword.
    Local,
    /// `nil` keyword.
    Nil,
    /// `not` keyword.
    Not,
    /// `or` keyword.
    Or,
    /// `repeat` keyword.
    Repeat,
    /// `return` keyword.
    Return,
    /// `then` keyword.
    Then,
    /// `true` keyword.
    True,
    /// `until` keyword.
    Until,
    /// `while` keyword.
    While,

    /// `..` concatenation operator.
    Concat,
    /// `...` vararg ellipsis.
    Dots,
    /// `==` equality operator.
    Eq,
    /// `~=` inequality operator.
    Ne,
    /// `<=` less-or-equal operator.
    Le,
    /// `>=` greater-or-equal operator.
    Ge,
    /// `::` label delimiter.
    DoubleColon,

    /// Numeric literal.
    Number,
    /// Identifier.
    Name,
    /// String literal (short or long form).
    String,

    /// Any single-character punctuation, including the placeholder atom.
    Char(char),

    /// End of the fragment stream. Terminal: emitted forever once reached.
    Eos,
}

/// Looks up the keyword token for an identifier spelling.
///
/// Returns `None` if the spelling is not one of the 20 reserved words.
/// Note that `and` and `break` are not reserved here: the original
/// implementation never mapped them in its keyword table, so they lex as
/// `Name`, and downstream consumers rely on that.
///
/// # Example
///
/// ```
/// use templua_lex::{keyword_from_ident, Token};
///
/// assert_eq!(keyword_from_ident("for"), Some(Token::For));
/// assert_eq!(keyword_from_ident("and"), None);
/// assert_eq!(keyword_from_ident("foo"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    let token = match ident {
        "do" => Token::Do,
        "else" => Token::Else,
        "elseif" => Token::Elseif,
        "end" => Token::End,
        "false" => Token::False,
        "for" => Token::For,
        "function" => Token::Function,
        "goto" => Token::Goto,
        "if" => Token::If,
        "in" => Token::In,
        "local" => Token::Local,
        "nil" => Token::Nil,
        "not" => Token::Not,
        "or" => Token::Or,
        "repeat" => Token::Repeat,
        "return" => Token::Return,
        "then" => Token::Then,
        "true" => Token::True,
        "until" => Token::Until,
        "while" => Token::While,
        _ => return None,
    };
    Some(token)
}
