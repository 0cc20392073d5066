//! Syntax errors reported by the parser

use chumsky::error::SimpleReason;
use std::ops::Range;

use crate::lexing::Token;
use crate::parsing::grammar::ParserError;

/// Pattern text that does not conform to the glob grammar
///
/// Covers unbalanced braces, a `,` or `}` outside any group and trailing
/// tokens. Only the first failure found by the parser is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse glob {text:?}: {reason}")]
pub struct GlobSyntaxError {
    text: String,
    span: Range<usize>,
    found: Option<Token>,
    expected: Vec<Option<Token>>,
    reason: String,
}

impl GlobSyntaxError {
    pub(crate) fn from_parser_errors(text: &str, errors: Vec<ParserError>) -> Self {
        let eoi = text.len()..text.len();
        let Some(first) = errors.into_iter().next() else {
            return GlobSyntaxError {
                text: text.to_owned(),
                span: eoi,
                found: None,
                expected: Vec::new(),
                reason: "invalid pattern".to_owned(),
            };
        };

        let mut expected: Vec<Option<Token>> = first.expected().cloned().collect();
        expected.sort_by_key(expected_rank);
        expected.dedup();

        let found = first.found().cloned();
        let span = first.span();
        let reason = match first.reason() {
            SimpleReason::Custom(message) => format!("{} at byte {}", message, span.start),
            _ => describe_unexpected(&found, &expected, span.start),
        };

        GlobSyntaxError {
            text: text.to_owned(),
            span,
            found,
            expected,
            reason,
        }
    }

    /// The complete pattern text that failed to parse
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range of the offending token (empty at end of input)
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The token the parser choked on, `None` for end of input
    pub fn found(&self) -> Option<&Token> {
        self.found.as_ref()
    }

    /// Tokens that would have been accepted instead, `None` meaning end of input
    pub fn expected(&self) -> &[Option<Token>] {
        &self.expected
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Render the pattern with a caret line under the offending span
    pub fn diagnostic(&self) -> String {
        let start = self.span.start.min(self.text.len());
        let end = self.span.end.clamp(start, self.text.len());
        let column = self.text.get(..start).map_or(0, |s| s.chars().count());
        let width = self
            .text
            .get(start..end)
            .map_or(0, |s| s.chars().count())
            .max(1);

        format!(
            "  {}\n  {}{}",
            self.text,
            " ".repeat(column),
            "^".repeat(width)
        )
    }
}

fn expected_rank(token: &Option<Token>) -> u8 {
    match token {
        Some(Token::OpenGroup) => 0,
        Some(Token::Comma) => 1,
        Some(Token::CloseGroup) => 2,
        Some(Token::Word(_)) => 3,
        None => 4,
    }
}

fn describe_token(token: &Option<Token>) -> String {
    match token {
        None => "end of input".to_owned(),
        Some(Token::Word(text)) => format!("word {:?}", text),
        Some(op) => format!("`{}`", op),
    }
}

fn describe_unexpected(found: &Option<Token>, expected: &[Option<Token>], offset: usize) -> String {
    let mut reason = format!("unexpected {} at byte {}", describe_token(found), offset);
    if !expected.is_empty() {
        let alternatives: Vec<String> = expected.iter().map(describe_token).collect();
        reason.push_str(", expected ");
        reason.push_str(&alternatives.join(" or "));
    }
    reason
}
