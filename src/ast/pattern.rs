//! Root of a parsed pattern

use super::GlobExpr;
use crate::expansion::Expand;
use crate::parsing::{self, GlobSyntaxError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A parsed glob pattern
///
/// The root is either a bare literal (no braces in the input) or a group.
/// Patterns are immutable; two patterns are equal when their trees are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Pattern {
    root: GlobExpr,
}

impl Pattern {
    pub fn new(root: GlobExpr) -> Self {
        Pattern { root }
    }

    /// Parse pattern text, see [`parsing::parse`]
    pub fn parse(text: &str) -> Result<Self, GlobSyntaxError> {
        parsing::parse(text)
    }

    pub fn root(&self) -> &GlobExpr {
        &self.root
    }

    pub fn into_root(self) -> GlobExpr {
        self.root
    }

    /// Lazily iterate over every expansion, in reading order
    pub fn expand(&self) -> Expand<'_> {
        self.root.expand()
    }

    /// Collect every expansion, in reading order
    pub fn expansions(&self) -> Vec<String> {
        self.root.expansions()
    }

    pub fn expansion_count(&self) -> Option<usize> {
        self.root.expansion_count()
    }
}

impl From<GlobExpr> for Pattern {
    fn from(root: GlobExpr) -> Self {
        Pattern::new(root)
    }
}

impl FromStr for Pattern {
    type Err = GlobSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsing::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
