//! Literal text fragments

use serde::Serialize;
use std::fmt;

/// An immutable text fragment with no further structure
///
/// Literals are the leaves of every pattern tree. The empty literal stands in
/// for a missing prefix, suffix or alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Literal(Box<str>);

impl Literal {
    pub fn new(text: impl Into<Box<str>>) -> Self {
        Literal(text.into())
    }

    /// The empty literal
    pub fn empty() -> Self {
        Literal::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Literal::new(text)
    }
}

impl From<String> for Literal {
    fn from(text: String) -> Self {
        Literal::new(text)
    }
}

impl AsRef<str> for Literal {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
