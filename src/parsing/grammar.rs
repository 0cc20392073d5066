//! Parser combinators for the glob grammar
//!
//! ```text
//! pattern := expr END
//! expr    := segment* word?
//! segment := word? '{' expr (',' expr)* '}'
//! ```
//!
//! `a{b}c{d}e` reads as the segments `a{b}` and `c{d}` with tail `e`, and
//! becomes the group `a{b}` whose suffix is the group `c{d}e`.
//!
//! `expr` always succeeds (a missing word is the empty literal), which is what
//! makes empty alternatives like `{,b}` and the trailing suffix after `}` work
//! without extra optional rules.

use chumsky::prelude::*;

use crate::ast::{GlobExpr, GlobGroup, Literal};
use crate::lexing::Token;

/// Type alias for parser error
pub type ParserError = Simple<Token>;

/// Match a word token and take its text
pub fn word() -> impl Parser<Token, Literal, Error = ParserError> + Clone {
    select! { Token::Word(text) => Literal::from(text) }.labelled("word")
}

/// An optional word, defaulting to the empty literal
fn word_or_empty() -> impl Parser<Token, Literal, Error = ParserError> + Clone {
    word().or_not().map(Option::unwrap_or_default)
}

/// Parse an expression: a group, or a (possibly empty) literal
///
/// Sequential groups are read as a flat run of `word? '{' ... '}'` segments
/// and folded right to left into the suffix chain, so only brace nesting
/// recurses.
pub fn expr() -> impl Parser<Token, GlobExpr, Error = ParserError> + Clone {
    recursive(|expr| {
        let expr: Recursive<Token, GlobExpr, ParserError> = expr;
        let alternatives = expr
            .separated_by(just(Token::Comma))
            .at_least(1)
            .delimited_by(just(Token::OpenGroup), just(Token::CloseGroup));

        let segment = word_or_empty().then(alternatives).labelled("group");

        segment
            .repeated()
            .then(word_or_empty())
            .try_map(|(segments, tail), span| {
                segments
                    .into_iter()
                    .rev()
                    .try_fold(GlobExpr::Literal(tail), |suffix, (prefix, children)| {
                        GlobGroup::new(prefix, children, suffix).map(GlobExpr::from)
                    })
                    .ok_or_else(|| Simple::custom(span, "group has no alternatives"))
            })
    })
}

/// Parse a complete pattern; leftover tokens are an error
pub fn pattern() -> impl Parser<Token, GlobExpr, Error = ParserError> + Clone {
    expr().then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::tokenize;

    fn parse_text(source: &str) -> Result<GlobExpr, Vec<ParserError>> {
        pattern().parse(tokenize(source))
    }

    fn lit(text: &str) -> GlobExpr {
        GlobExpr::literal(text)
    }

    fn group(prefix: &str, children: Vec<GlobExpr>, suffix: GlobExpr) -> GlobExpr {
        GlobGroup::new(Literal::from(prefix), children, suffix)
            .unwrap()
            .into_expr()
    }

    #[test]
    fn test_word() {
        let result = word().parse(vec![Token::Word("abc".to_string())]);
        assert_eq!(result.unwrap(), Literal::from("abc"));
    }

    #[test]
    fn test_word_rejects_operator() {
        assert!(word().parse(vec![Token::Comma]).is_err());
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_text("").unwrap(), lit(""));
    }

    #[test]
    fn test_plain_literal() {
        assert_eq!(parse_text("plainword").unwrap(), lit("plainword"));
    }

    #[test]
    fn test_simple_group() {
        assert_eq!(
            parse_text("a{b,c}d").unwrap(),
            group("a", vec![lit("b"), lit("c")], lit("d"))
        );
    }

    #[test]
    fn test_missing_prefix_and_suffix() {
        assert_eq!(
            parse_text("{x}").unwrap(),
            group("", vec![lit("x")], lit(""))
        );
    }

    #[test]
    fn test_empty_braces_have_one_empty_child() {
        assert_eq!(parse_text("a{}b").unwrap(), group("a", vec![lit("")], lit("b")));
    }

    #[test]
    fn test_empty_alternatives() {
        assert_eq!(
            parse_text("a{,b,}c").unwrap(),
            group("a", vec![lit(""), lit("b"), lit("")], lit("c"))
        );
    }

    #[test]
    fn test_nested_group() {
        let inner = group("c", vec![lit("d"), lit("e")], lit(""));
        assert_eq!(
            parse_text("a{b,c{d,e}}f").unwrap(),
            group("a", vec![lit("b"), inner], lit("f"))
        );
    }

    #[test]
    fn test_sequential_groups_nest_in_suffix() {
        let second = group("d", vec![lit("e"), lit("f")], lit("g"));
        assert_eq!(
            parse_text("a{b,c}d{e,f}g").unwrap(),
            group("a", vec![lit("b"), lit("c")], second)
        );
    }

    #[test]
    fn test_long_chain_of_groups() {
        let source = "{a}".repeat(20_000);
        let expr = parse_text(&source).unwrap();
        let (groups, tail) = expr.segments();
        assert_eq!(groups.len(), 20_000);
        assert!(tail.is_empty());
        assert!(groups.iter().all(|group| group.prefix().is_empty()));
    }

    #[test]
    fn test_rejects_unclosed_group() {
        assert!(parse_text("a{b,c").is_err());
    }

    #[test]
    fn test_rejects_stray_close() {
        assert!(parse_text("a}b").is_err());
    }

    #[test]
    fn test_rejects_top_level_comma() {
        assert!(parse_text("a,b").is_err());
    }

    #[test]
    fn test_rejects_trailing_close_after_group() {
        assert!(parse_text("{a}}").is_err());
    }
}
