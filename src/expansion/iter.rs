//! Lazy expansion iterator

use itertools::Itertools;
use std::fmt;
use std::iter::{Fuse, FusedIterator};

use super::{expand_expr, expansion_count, group_expansion_count, join};
use crate::ast::{GlobExpr, GlobGroup};

type Expansions<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Iterates over the expansions of a pattern without building the full list
///
/// Yields exactly the sequence [`super::expand_expr`] returns. Alternatives
/// are expanded on demand; each group's suffix is expanded once when the
/// group is reached and replayed for every alternative.
pub struct Expand<'a> {
    inner: Fuse<Expansions<'a>>,
    remaining: Option<usize>,
}

impl<'a> Expand<'a> {
    pub(crate) fn new(expr: &'a GlobExpr) -> Self {
        Expand {
            inner: expr_expansions(expr).fuse(),
            remaining: expansion_count(expr),
        }
    }

    pub(crate) fn new_group(group: &'a GlobGroup) -> Self {
        Expand {
            inner: group_expansions(group).fuse(),
            remaining: group_expansion_count(group),
        }
    }
}

fn expr_expansions(expr: &GlobExpr) -> Expansions<'_> {
    match expr {
        GlobExpr::Literal(literal) => Box::new(std::iter::once(literal.as_str().to_owned())),
        GlobExpr::Group(group) => group_expansions(group),
    }
}

fn group_expansions(group: &GlobGroup) -> Expansions<'_> {
    let prefix = group.prefix().as_str();
    let suffixes = expand_expr(group.suffix());
    Box::new(
        group
            .children()
            .iter()
            .flat_map(expr_expansions)
            .cartesian_product(suffixes)
            .map(move |(child, suffix)| join(prefix, &child, &suffix)),
    )
}

impl Iterator for Expand<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (0, None),
        }
    }
}

impl FusedIterator for Expand<'_> {}

impl fmt::Debug for Expand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expand")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
