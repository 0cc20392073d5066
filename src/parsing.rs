//! Parser
//!
//! Turns the token stream from [`crate::lexing`] into a [`Pattern`] tree using
//! chumsky combinators (see [`grammar`]). The parser must consume every token;
//! anything left over is a [`GlobSyntaxError`], never a silent truncation.

pub mod error;
pub mod grammar;

use chumsky::{Parser, Stream};
use std::ops::Range;

use crate::ast::Pattern;
use crate::lexing::{lex, Token};

pub use error::GlobSyntaxError;

/// Parse pattern text into a tree
pub fn parse(text: &str) -> Result<Pattern, GlobSyntaxError> {
    parse_tokens(lex(text), text)
}

/// Parse an already tokenized pattern
///
/// `source` is the text the tokens were scanned from; it is only used for
/// error reporting and the end-of-input span.
pub fn parse_tokens(
    tokens_with_spans: Vec<(Token, Range<usize>)>,
    source: &str,
) -> Result<Pattern, GlobSyntaxError> {
    let token_count = tokens_with_spans.len();
    let eoi = source.len()..source.len();
    let stream = Stream::from_iter(eoi, tokens_with_spans.into_iter());

    match grammar::pattern().parse(stream) {
        Ok(root) => {
            log::debug!(
                "parsed {:?} ({} tokens) into {} tree of depth {}",
                source,
                token_count,
                root.node_type(),
                root.depth()
            );
            Ok(Pattern::new(root))
        }
        Err(errors) => {
            let error = GlobSyntaxError::from_parser_errors(source, errors);
            log::debug!("rejected {:?}: {}", source, error.reason());
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::GlobExpr;

    #[test]
    fn test_parse_empty() {
        let pattern = parse("").unwrap();
        assert_eq!(pattern.root(), &GlobExpr::empty());
    }

    #[test]
    fn test_from_str() {
        let pattern: Pattern = "a{b,c}d".parse().unwrap();
        assert_eq!(pattern, parse("a{b,c}d").unwrap());
    }

    #[test]
    fn test_error_carries_text() {
        let err = parse("a{b,c").unwrap_err();
        assert_eq!(err.text(), "a{b,c");
        assert!(err.to_string().contains("a{b,c"));
    }

    #[test]
    fn test_unclosed_group_is_rejected_after_prefix() {
        let err = parse("a{b,c").unwrap_err();
        assert!(err.span().start > 0);
        assert!(err.span().end <= 5);
    }

    #[test]
    fn test_stray_close_points_at_brace() {
        let err = parse("a}b").unwrap_err();
        assert_eq!(err.span(), 1..2);
        assert_eq!(err.found(), Some(&Token::CloseGroup));
    }

    #[test]
    fn test_parse_tokens_matches_parse() {
        let source = "x{y,z}";
        let pattern = parse_tokens(lex(source), source).unwrap();
        assert_eq!(pattern, parse(source).unwrap());
    }
}
