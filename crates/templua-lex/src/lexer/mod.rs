//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch, and pause/resume protocol
//! - `identifier` - Identifier and keyword lexing across fragments
//! - `number` - Numeric literal lexing
//! - `string` - Short string literal lexing
//! - `long_bracket` - Long-bracket strings and separator matching
//! - `comment` - Short and long comment skipping
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod long_bracket;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
