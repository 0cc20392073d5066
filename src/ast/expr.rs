//! The pattern expression sum type

use super::{GlobGroup, Literal};
use crate::expansion::{expand_expr, expansion_count, Expand};
use serde::Serialize;
use std::fmt;

/// Any node of a pattern tree
///
/// Every leaf is a literal and every internal node is a group. Consumers
/// match on both variants exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum GlobExpr {
    Literal(Literal),
    Group(Box<GlobGroup>),
}

impl GlobExpr {
    pub fn literal(text: impl Into<Literal>) -> Self {
        GlobExpr::Literal(text.into())
    }

    /// The empty literal expression
    pub fn empty() -> Self {
        GlobExpr::Literal(Literal::empty())
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            GlobExpr::Literal(literal) => Some(literal),
            GlobExpr::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&GlobGroup> {
        match self {
            GlobExpr::Literal(_) => None,
            GlobExpr::Group(group) => Some(group),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, GlobExpr::Literal(_))
    }

    /// Name of the node type, used by the tree formatters
    pub fn node_type(&self) -> &'static str {
        match self {
            GlobExpr::Literal(_) => "Literal",
            GlobExpr::Group(_) => "Group",
        }
    }

    /// Split off the run of sequential groups ending in a literal
    ///
    /// `a{b}c{d}e` yields the groups `a{b}` and `c{d}` followed by `e`. Walking
    /// the suffix chain this way keeps long runs of groups off the call stack.
    pub fn segments(&self) -> (Vec<&GlobGroup>, &Literal) {
        let mut groups = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                GlobExpr::Literal(literal) => return (groups, literal),
                GlobExpr::Group(group) => {
                    groups.push(&**group);
                    cursor = group.suffix();
                }
            }
        }
    }

    /// Maximum brace nesting below this node
    ///
    /// Suffix chains (`a{b}c{d}`) do not add depth, only groups inside
    /// alternatives do.
    pub fn depth(&self) -> usize {
        let (groups, _) = self.segments();
        groups
            .into_iter()
            .map(|group| {
                let nested = group
                    .children()
                    .iter()
                    .map(GlobExpr::depth)
                    .max()
                    .unwrap_or(0);
                nested + 1
            })
            .max()
            .unwrap_or(0)
    }

    pub fn expand(&self) -> Expand<'_> {
        Expand::new(self)
    }

    pub fn expansions(&self) -> Vec<String> {
        expand_expr(self)
    }

    /// Number of strings this expression expands to, `None` on overflow
    pub fn expansion_count(&self) -> Option<usize> {
        expansion_count(self)
    }
}

impl Default for GlobExpr {
    fn default() -> Self {
        GlobExpr::empty()
    }
}

impl From<Literal> for GlobExpr {
    fn from(literal: Literal) -> Self {
        GlobExpr::Literal(literal)
    }
}

impl From<GlobGroup> for GlobExpr {
    fn from(group: GlobGroup) -> Self {
        group.into_expr()
    }
}

impl fmt::Display for GlobExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (groups, tail) = self.segments();
        for group in groups {
            group.fmt_braces(f)?;
        }
        tail.fmt(f)
    }
}
