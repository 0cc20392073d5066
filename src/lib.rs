//! # globgroups
//!
//! Expands brace-grouped glob patterns such as `foo{bar,baz}.txt` into the
//! literal strings they denote. Groups nest arbitrarily: `a{b,c{d,e}}f`
//! expands to `abf`, `acdf`, `acef`.
//!
//! The pipeline is text → tokens ([`lexing`]) → tree ([`parsing`], [`ast`]) →
//! strings ([`expansion`]). Only `{`, `}` and `,` are special; there are no
//! wildcards and no escapes, and nothing here touches the filesystem.
//!
//! ```text
//! let pattern: Pattern = "src/{lib,main}.rs".parse()?;
//! assert_eq!(pattern.expansions(), ["src/lib.rs", "src/main.rs"]);
//! ```

pub mod ast;
pub mod expansion;
pub mod formats;
pub mod lexing;
pub mod parsing;

pub use ast::{GlobExpr, GlobGroup, Literal, Pattern};
pub use expansion::{expand_expr, Expand};
pub use parsing::{parse, GlobSyntaxError};

/// Parse `text` and return all of its expansions
pub fn expand(text: &str) -> Result<Vec<String>, GlobSyntaxError> {
    Ok(parse(text)?.expansions())
}
