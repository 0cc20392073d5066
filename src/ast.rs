//! Pattern tree
//!
//! A pattern is a tree of two node kinds: [`Literal`] leaves and [`GlobGroup`]
//! internal nodes, joined by the closed sum [`GlobExpr`]. Trees are built once,
//! bottom-up, by the parser and never mutated afterwards. Each node owns its
//! children; there are no shared or back references.
//!
//! Rendering any node with `Display` produces pattern text of the form
//! `prefix{child1,child2,...}suffix` that parses back to an equal tree.

pub mod expr;
pub mod group;
pub mod literal;
pub mod pattern;

pub use expr::GlobExpr;
pub use group::GlobGroup;
pub use literal::Literal;
pub use pattern::Pattern;
