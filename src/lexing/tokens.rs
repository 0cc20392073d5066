//! Token definitions for glob patterns
//!
//! The pattern language has exactly two token kinds: the structural operators
//! `{`, `}` and `,`, and opaque words (maximal runs of anything else).
//! Tokenization is handled entirely by the logos derive.
use logos::Logos;
use std::fmt;

/// All possible tokens in a glob pattern
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
pub enum Token {
    // Group operators
    #[token("{")]
    OpenGroup,
    #[token("}")]
    CloseGroup,
    #[token(",")]
    Comma,

    // Literal text (catch-all for non-operator characters)
    #[regex(r"[^{},]+", |lex| lex.slice().to_owned())]
    Word(String),
}

impl Token {
    /// Check if this token is one of the structural operators
    pub fn is_op(&self) -> bool {
        matches!(self, Token::OpenGroup | Token::CloseGroup | Token::Comma)
    }

    /// Check if this token is a literal word
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    /// The source text this token was scanned from
    pub fn as_str(&self) -> &str {
        match self {
            Token::OpenGroup => "{",
            Token::CloseGroup => "}",
            Token::Comma => ",",
            Token::Word(text) => text,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
