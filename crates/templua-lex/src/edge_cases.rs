//! Edge case tests for templua-lex

#[cfg(test)]
mod tests {
    use crate::{Fragment, FragmentCursor, FragmentKind, LexError, Lexer, Token, PLACEHOLDER_CHAR};

    fn lex_fragments(fragments: Vec<Fragment>) -> Result<(Vec<Token>, String), LexError> {
        let mut out = String::new();
        let mut lexer = Lexer::new(FragmentCursor::new(fragments));
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token(&mut out)?;
            if token == Token::Eos {
                break;
            }
            tokens.push(token);
        }
        Ok((tokens, out))
    }

    fn lex_text(source: &str) -> Result<(Vec<Token>, String), LexError> {
        lex_fragments(vec![Fragment::text(source)])
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_no_fragments() {
        let (tokens, out) = lex_fragments(vec![]).unwrap();
        assert!(tokens.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_edge_only_empty_fragments() {
        let (tokens, out) = lex_fragments(vec![
            Fragment::text(""),
            Fragment::text(""),
            Fragment::new("", FragmentKind::Placeholder),
        ])
        .unwrap();
        assert!(tokens.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        let (tokens, out) = lex_text(" \t\r\n \x0B\x0C ").unwrap();
        assert!(tokens.is_empty());
        assert_eq!(out, " \t\r\n \x0B\x0C ");
    }

    #[test]
    fn test_edge_single_char_name() {
        let (tokens, _) = lex_text("x").unwrap();
        assert_eq!(tokens, vec![Token::Name]);
    }

    #[test]
    fn test_edge_long_identifier_across_many_fragments() {
        let fragments: Vec<Fragment> = (0..500).map(|_| Fragment::text("ab")).collect();
        let (tokens, out) = lex_fragments(fragments).unwrap();
        assert_eq!(tokens, vec![Token::Name]);
        assert_eq!(out.len(), 1000);
    }

    #[test]
    fn test_edge_placeholder_only() {
        let (tokens, out) = lex_fragments(vec![Fragment::placeholder()]).unwrap();
        assert_eq!(tokens, vec![Token::Char(PLACEHOLDER_CHAR)]);
        assert_eq!(out, PLACEHOLDER_CHAR.to_string());
    }

    #[test]
    fn test_edge_adjacent_placeholders() {
        let (tokens, _) = lex_fragments(vec![
            Fragment::placeholder(),
            Fragment::placeholder(),
            Fragment::placeholder(),
        ])
        .unwrap();
        assert_eq!(tokens, vec![Token::Char(PLACEHOLDER_CHAR); 3]);
    }

    #[test]
    fn test_edge_operator_adjacent_to_placeholder() {
        // No whitespace between the `..` and the opaque atoms.
        let (tokens, _) = lex_fragments(vec![
            Fragment::placeholder(),
            Fragment::new("..", FragmentKind::Placeholder),
            Fragment::placeholder(),
        ])
        .unwrap();
        assert_eq!(tokens, vec![
            Token::Char(PLACEHOLDER_CHAR),
            Token::Concat,
            Token::Char(PLACEHOLDER_CHAR),
        ]);
    }

    #[test]
    fn test_edge_multi_char_opaque_fragment() {
        // Opaque content is consumed one character per token, not one
        // fragment per token.
        let (tokens, _) =
            lex_fragments(vec![Fragment::new("()", FragmentKind::Placeholder)]).unwrap();
        assert_eq!(tokens, vec![Token::Char('('), Token::Char(')')]);
    }

    #[test]
    fn test_edge_every_token_split_at_every_boundary() {
        // `~=` split across fragments still pairs up.
        for source in ["~=", "<=", ">=", "==", "::", "..", "..."] {
            let whole = lex_text(source).unwrap().0;
            for at in 1..source.len() {
                let split = lex_fragments(vec![
                    Fragment::text(&source[..at]),
                    Fragment::text(&source[at..]),
                ])
                .unwrap()
                .0;
                assert_eq!(split, whole, "split of {source:?} at {at}");
            }
        }
    }

    #[test]
    fn test_edge_short_comment_at_eos() {
        let (tokens, out) = lex_text("--no newline").unwrap();
        assert!(tokens.is_empty());
        assert_eq!(out, "--no newline");
    }

    #[test]
    fn test_edge_long_comment_wrong_level_content() {
        let (tokens, out) = lex_text("--[=[ a ]] b ]=]").unwrap();
        assert!(tokens.is_empty());
        assert_eq!(out, "--[=[ a ]] b ]=]");
    }

    #[test]
    fn test_edge_empty_short_string() {
        let (tokens, out) = lex_text("\"\"").unwrap();
        assert_eq!(tokens, vec![Token::String]);
        assert_eq!(out, "\"\"");
    }

    #[test]
    fn test_edge_empty_long_string() {
        let (tokens, _) = lex_text("[[]]").unwrap();
        assert_eq!(tokens, vec![Token::String]);
    }

    #[test]
    fn test_edge_dot_before_digit_is_numeral() {
        let (tokens, out) = lex_text(".5 ").unwrap();
        assert_eq!(tokens, vec![Token::Number]);
        assert_eq!(out, ".5 ");
    }

    #[test]
    fn test_edge_lone_dot_is_punctuation() {
        let (tokens, _) = lex_text(". ").unwrap();
        assert_eq!(tokens, vec![Token::Char('.')]);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_short_string() {
        assert_eq!(lex_text("'open"), Err(LexError::UnterminatedString));
        assert_eq!(lex_text("\"open\\\""), Err(LexError::UnterminatedString));
    }

    #[test]
    fn test_err_unterminated_long_string() {
        assert_eq!(lex_text("[[open"), Err(LexError::UnterminatedLongLiteral));
    }

    #[test]
    fn test_err_unterminated_long_comment() {
        assert_eq!(lex_text("--[[open"), Err(LexError::UnterminatedLongLiteral));
    }

    #[test]
    fn test_err_invalid_long_bracket_delimiter() {
        assert_eq!(lex_text("[=x"), Err(LexError::InvalidLongBracketDelimiter));
        assert_eq!(lex_text("[==="), Err(LexError::InvalidLongBracketDelimiter));
    }

    #[test]
    fn test_err_expect_next_token_after_end() {
        let mut out = String::new();
        let mut lexer = Lexer::new(FragmentCursor::new(vec![Fragment::text("x")]));
        while lexer.next_token(&mut out).unwrap() != Token::Eos {}
        assert_eq!(
            lexer.expect_next_token(&mut out),
            Err(LexError::CalledAfterEnd)
        );
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_identifier_fragmentation_is_invisible() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,40}",
                    splits in prop::collection::vec(any::<prop::sample::Index>(), 0..4))| {
            let mut cuts: Vec<usize> = splits.iter().map(|i| i.index(input.len() + 1)).collect();
            cuts.push(0);
            cuts.push(input.len());
            cuts.sort_unstable();
            cuts.dedup();

            let fragments: Vec<Fragment> = cuts
                .windows(2)
                .map(|w| Fragment::text(&input[w[0]..w[1]]))
                .collect();
            let (tokens, out) = lex_fragments(fragments).unwrap();

            let expected = crate::keyword_from_ident(&input).unwrap_or(Token::Name);
            prop_assert_eq!(tokens, vec![expected]);
            prop_assert_eq!(out, input);
        });
    }

    #[test]
    fn test_property_refragmentation_preserves_tokens() {
        use proptest::prelude::*;

        // ASCII-only pieces, so every byte index is a valid split point.
        let piece = prop_oneof![
            "[0-9]{1,6}",
            "0x[0-9]{1,4}",
            "[0-9]{1,3}\\.[0-9]{1,3}",
            "\"[a-z ]{0,8}\"",
            "'[a-z ]{0,8}'",
            Just("[[long\nstring]]".to_string()),
            Just("[==[x]==]".to_string()),
            Just("--[[ comment ]]".to_string()),
            Just("--line comment\n".to_string()),
            prop::sample::select(vec![
                "..", "...", "==", "~=", "<=", ">=", "::", "=", "<", ">", ":", "[", ".",
            ])
            .prop_map(str::to_string),
        ];

        proptest!(|(pieces in prop::collection::vec(piece, 1..8),
                    splits in prop::collection::vec(any::<prop::sample::Index>(), 0..6))| {
            let source = pieces.join(" ");

            let (whole_tokens, whole_out) = lex_text(&source).unwrap();
            prop_assert_eq!(&whole_out, &source);

            let mut cuts: Vec<usize> = splits.iter().map(|i| i.index(source.len() + 1)).collect();
            cuts.push(0);
            cuts.push(source.len());
            cuts.sort_unstable();
            cuts.dedup();

            let fragments: Vec<Fragment> = cuts
                .windows(2)
                .map(|w| Fragment::text(&source[w[0]..w[1]]))
                .collect();
            let (split_tokens, split_out) = lex_fragments(fragments).unwrap();

            prop_assert_eq!(split_tokens, whole_tokens);
            prop_assert_eq!(split_out, source);
        });
    }

    #[test]
    fn test_property_whitespace_amount_is_ignored() {
        use proptest::prelude::*;

        proptest!(|(spaces in 1..100usize)| {
            // Padding arrives in opaque fragments: Text fragments hold
            // identifier-eligible runs only.
            let pad = " ".repeat(spaces);
            let (tokens, out) = lex_fragments(vec![
                Fragment::new(pad.clone(), FragmentKind::Placeholder),
                Fragment::text("while"),
                Fragment::new(pad.clone(), FragmentKind::Placeholder),
            ])
            .unwrap();
            prop_assert_eq!(tokens, vec![Token::While]);
            prop_assert_eq!(out, format!("{pad}while{pad}"));
        });
    }
}
