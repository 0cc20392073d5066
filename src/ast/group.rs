//! Braced alternation groups

use super::{GlobExpr, Literal};
use crate::expansion::{expand_group, Expand};
use serde::Serialize;
use std::fmt;

/// A braced alternation attached to its surrounding text
///
/// `prefix{child1,child2}suffix` becomes a group whose suffix may itself be
/// another group, so `a{b,c}d{e,f}` nests to the right rather than forming a
/// flat list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GlobGroup {
    prefix: Literal,
    children: Vec<GlobExpr>,
    suffix: GlobExpr,
}

impl GlobGroup {
    /// Build a group, or `None` when there are no alternatives
    pub fn new(prefix: Literal, children: Vec<GlobExpr>, suffix: GlobExpr) -> Option<Self> {
        if children.is_empty() {
            return None;
        }
        Some(GlobGroup {
            prefix,
            children,
            suffix,
        })
    }

    pub fn prefix(&self) -> &Literal {
        &self.prefix
    }

    /// The comma-separated alternatives, in source order (never empty)
    pub fn children(&self) -> &[GlobExpr] {
        &self.children
    }

    pub fn suffix(&self) -> &GlobExpr {
        &self.suffix
    }

    pub fn into_expr(self) -> GlobExpr {
        GlobExpr::Group(Box::new(self))
    }

    /// Lazily expand this group
    pub fn expand(&self) -> Expand<'_> {
        Expand::new_group(self)
    }

    /// Expand this group into a vector of strings
    pub fn expansions(&self) -> Vec<String> {
        expand_group(self)
    }
}

impl GlobGroup {
    /// Write `prefix{child,...}` without the suffix
    pub(crate) fn fmt_braces(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.prefix)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", child)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for GlobGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_braces(f)?;
        self.suffix.fmt(f)
    }
}

// Unlink suffix chains one group at a time so dropping `{a}{a}...{a}` does
// not recurse once per group.
impl Drop for GlobGroup {
    fn drop(&mut self) {
        let mut next = std::mem::take(&mut self.suffix);
        while let GlobExpr::Group(mut group) = next {
            next = std::mem::take(&mut group.suffix);
        }
    }
}
