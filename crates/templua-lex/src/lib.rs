//! templua-lex - Lexical Analyzer for Template-Embedded Lua
//!
//! This crate lexes a Lua-like scripting language that is embedded inside a
//! larger template document. The document has already been split upstream
//! into a sequence of fragments: runs of literal text, and opaque
//! placeholder fragments injected by the outer templating layer. The lexer
//! produces a correct stream of Lua lexical tokens from this fragmented,
//! two-tier input.
//!
//! # Overview
//!
//! Three concerns set this lexer apart from an ordinary one:
//!
//! - Every placeholder fragment is treated as one atomic pseudo-character
//!   ([`PLACEHOLDER_CHAR`]) usable anywhere a Lua character could appear,
//!   so an interpolation marker becomes a usable atom inside Lua
//!   expression grammar.
//! - Lookahead and token assembly work transparently across fragment
//!   boundaries: `"fo"` + `"r"` lexes as the `for` keyword.
//! - A pause/flush/resume protocol lets an external consumer intermix
//!   non-Lua processing without losing lexer position or double-copying
//!   already-consumed source text into the echoed output buffer.
//!
//! Tokens carry no payload. The caller recovers literal spellings from the
//! output accumulator, which receives a verbatim, gap-free copy of every
//! character the lexer advances past.
//!
//! # Example Usage
//!
//! ```
//! use templua_lex::{Fragment, FragmentCursor, Lexer, Token, PLACEHOLDER_CHAR};
//!
//! let fragments = vec![
//!     Fragment::text("return"),
//!     Fragment::placeholder(),
//! ];
//! let mut out = String::new();
//! let mut lexer = Lexer::new(FragmentCursor::new(fragments));
//!
//! assert_eq!(lexer.next_token(&mut out), Ok(Token::Return));
//! assert_eq!(lexer.next_token(&mut out), Ok(Token::Char(PLACEHOLDER_CHAR)));
//! assert_eq!(lexer.next_token(&mut out), Ok(Token::Eos));
//! assert_eq!(out, format!("return{PLACEHOLDER_CHAR}"));
//! ```
//!
//! # Pause/Resume Protocol
//!
//! When the caller wants to handle a placeholder fragment itself instead
//! of taking it as an atom, it calls [`Lexer::flush`] to commit the
//! consumed part of the current fragment, advances the cursor through
//! [`Lexer::cursor_mut`], and calls [`Lexer::resync`] to re-derive the
//! lexer position from the cursor's authoritative state.
//!
//! # Module Structure
//!
//! - [`fragment`] - Fragment and placeholder types
//! - [`cursor`] - Fragment cursor (peek, advance, split)
//! - [`lexer`] - Main lexer implementation
//! - [`token`] - Token type definitions
//! - [`error`] - Lexical error types
//!
//! # Failure Behavior
//!
//! Malformed long-bracket delimiters, unterminated strings, and
//! unterminated long literals are unrecoverable lex errors: the lexer does
//! not resynchronize, and the caller aborts the surrounding compilation
//! unit.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod fragment;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::FragmentCursor;
pub use error::{LexError, LexResult};
pub use fragment::{Fragment, FragmentKind, PLACEHOLDER_CHAR};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token};
