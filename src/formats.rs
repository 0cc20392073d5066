//! Output formats for pattern trees
//!
//! Used by the diagnostic mode of the command line tool to show how a pattern
//! was parsed before its expansions are printed.

pub mod treeviz;

pub use treeviz::to_treeviz_str;

use crate::ast::Pattern;
use std::fmt;
use std::str::FromStr;

/// Errors while serializing a tree
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("failed to serialize tree as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize tree as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Requested format name is not known
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tree format '{0}' (available: {formats})", formats = TreeFormat::NAMES.join(", "))]
pub struct UnknownFormat(pub String);

/// Available renderings of a parsed pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeFormat {
    #[default]
    Treeviz,
    Json,
    Yaml,
    Debug,
}

impl TreeFormat {
    pub const NAMES: [&'static str; 4] = ["treeviz", "json", "yaml", "debug"];

    pub fn name(self) -> &'static str {
        match self {
            TreeFormat::Treeviz => "treeviz",
            TreeFormat::Json => "json",
            TreeFormat::Yaml => "yaml",
            TreeFormat::Debug => "debug",
        }
    }

    /// Render the tree; the result always ends with a newline
    pub fn render(self, pattern: &Pattern) -> Result<String, FormatError> {
        let mut rendered = match self {
            TreeFormat::Treeviz => to_treeviz_str(pattern),
            TreeFormat::Json => to_json(pattern)?,
            TreeFormat::Yaml => serde_yaml::to_string(pattern)?,
            TreeFormat::Debug => format!("{:#?}", pattern),
        };
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }
}

impl FromStr for TreeFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "treeviz" => Ok(TreeFormat::Treeviz),
            "json" => Ok(TreeFormat::Json),
            "yaml" => Ok(TreeFormat::Yaml),
            "debug" => Ok(TreeFormat::Debug),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for TreeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pretty-printed JSON of the pattern tree
pub fn to_json(pattern: &Pattern) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(pattern)
}
