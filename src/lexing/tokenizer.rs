//! Implementation of the glob tokenizer
//!
//! This module provides convenience functions for tokenizing pattern text.
//! The actual scanning is handled entirely by logos.

use crate::lexing::tokens::Token;
use logos::Logos;
use std::ops::Range;

/// Tokenize a string and collect all tokens
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a string and collect tokens with their byte spans
///
/// Every byte of `source` ends up in exactly one token. Logos cannot actually
/// fail on `&str` input since the word class is the complement of the
/// operators, but should it ever report an error the offending slice is kept
/// as a word rather than dropped.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or_else(|()| Token::Word(lexer.slice().to_owned()));
        tokens.push((token, lexer.span()));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Token {
        Token::Word(text.to_string())
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![]);
    }

    #[test]
    fn test_plain_word() {
        let tokens = tokenize("plainword");
        assert_eq!(tokens, vec![word("plainword")]);
    }

    #[test]
    fn test_simple_group() {
        let tokens = tokenize("a{b,c}d");
        assert_eq!(
            tokens,
            vec![
                word("a"),
                Token::OpenGroup,
                word("b"),
                Token::Comma,
                word("c"),
                Token::CloseGroup,
                word("d"),
            ]
        );
    }

    #[test]
    fn test_adjacent_operators() {
        let tokens = tokenize("{,}}");
        assert_eq!(
            tokens,
            vec![
                Token::OpenGroup,
                Token::Comma,
                Token::CloseGroup,
                Token::CloseGroup
            ]
        );
    }

    #[test]
    fn test_unbalanced_input_still_tokenizes() {
        // the tokenizer knows nothing about nesting
        let tokens = tokenize("a}b");
        assert_eq!(tokens, vec![word("a"), Token::CloseGroup, word("b")]);
    }

    #[test]
    fn test_spans_cover_input() {
        let source = "src/{lib,bin/{a,b}}.rs";
        let tokens = tokenize_with_spans(source);

        let mut cursor = 0;
        for (token, span) in &tokens {
            assert_eq!(span.start, cursor, "gap before {:?}", token);
            assert_eq!(&source[span.clone()], token.as_str());
            cursor = span.end;
        }
        assert_eq!(cursor, source.len());
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let tokens = tokenize_with_spans("ä{ö}");
        assert_eq!(tokens[0], (word("ä"), 0..2));
        assert_eq!(tokens[1], (Token::OpenGroup, 2..3));
        assert_eq!(tokens[2], (word("ö"), 3..5));
        assert_eq!(tokens[3], (Token::CloseGroup, 5..6));
    }
}
