//! Expansion
//!
//! Walks a pattern tree and enumerates every literal string it denotes.
//!
//! For a group `prefix{c1,...,cn}suffix` the suffix is expanded once, then for
//! each child in order, for each of its expansions in order, for each suffix
//! expansion in order, `prefix + child + suffix` is produced. The output order
//! is therefore the left-to-right, depth-first reading order of the pattern,
//! and the count is `sum(|ci|) * |suffix|`.
//!
//! [`expand_expr`] builds the whole list eagerly. [`Expand`] produces the same
//! sequence lazily, one alternative at a time.

mod iter;

pub use iter::Expand;

use crate::ast::{GlobExpr, GlobGroup};

/// Expand an expression into every string it denotes, in reading order
///
/// A chain of sequential groups is expanded right to left in a loop, so only
/// brace nesting recurses.
pub fn expand_expr(expr: &GlobExpr) -> Vec<String> {
    let (groups, tail) = expr.segments();
    let mut expansions = vec![tail.as_str().to_owned()];
    for group in groups.into_iter().rev() {
        expansions = expand_alternatives(group, &expansions);
    }
    expansions
}

/// Expand a single group, see [`expand_expr`]
pub fn expand_group(group: &GlobGroup) -> Vec<String> {
    expand_alternatives(group, &expand_expr(group.suffix()))
}

fn expand_alternatives(group: &GlobGroup, suffixes: &[String]) -> Vec<String> {
    let prefix = group.prefix().as_str();
    log::trace!(
        "expanding group {:?} with {} alternatives and {} suffixes",
        prefix,
        group.children().len(),
        suffixes.len()
    );

    let mut expansions = Vec::new();
    for child in group.children() {
        for child_expansion in expand_expr(child) {
            for suffix in suffixes {
                expansions.push(join(prefix, &child_expansion, suffix));
            }
        }
    }
    expansions
}

/// Number of strings an expression expands to
///
/// Follows the cardinality law `sum(count(child)) * count(suffix)`. Returns
/// `None` if the count does not fit in a `usize`.
pub fn expansion_count(expr: &GlobExpr) -> Option<usize> {
    let (groups, _) = expr.segments();
    groups
        .into_iter()
        .try_fold(1usize, |total, group| total.checked_mul(alternative_count(group)?))
}

pub(crate) fn group_expansion_count(group: &GlobGroup) -> Option<usize> {
    alternative_count(group)?.checked_mul(expansion_count(group.suffix())?)
}

fn alternative_count(group: &GlobGroup) -> Option<usize> {
    group
        .children()
        .iter()
        .try_fold(0usize, |total, child| total.checked_add(expansion_count(child)?))
}

pub(crate) fn join(prefix: &str, child: &str, suffix: &str) -> String {
    let mut buffer = String::with_capacity(prefix.len() + child.len() + suffix.len());
    buffer.push_str(prefix);
    buffer.push_str(child);
    buffer.push_str(suffix);
    buffer
}
