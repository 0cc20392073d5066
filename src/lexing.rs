//! Lexer
//!
//! Scans raw pattern text into a flat token sequence. This is the leaf of the
//! pipeline: it knows nothing about nesting or balance, so it never fails.
//! Unbalanced braces are reported later by the parser.
//!
//! Tokens:
//!     `{`, `}` and `,` are operators. Everything else is grouped into maximal
//!     word runs, so `foo bar*.txt` is a single word. There is no escaping.

pub mod tokenizer;
pub mod tokens;

pub use tokenizer::{tokenize, tokenize_with_spans};
pub use tokens::Token;

/// Main lexer entry point used by the parser
///
/// Returns tokens paired with their byte ranges in `source`.
pub fn lex(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    let tokens = tokenize_with_spans(source);
    log::trace!("lexed {} tokens from {:?}: {:?}", tokens.len(), source, tokens);
    tokens
}
