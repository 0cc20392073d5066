//! Treeviz formatter for pattern trees

use crate::ast::{GlobExpr, Pattern};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn display_label(expr: &GlobExpr) -> String {
    match expr {
        GlobExpr::Literal(literal) => format!("Literal: {:?}", truncate(literal.as_str(), 30)),
        GlobExpr::Group(group) => {
            format!("Group: prefix {:?}", truncate(group.prefix().as_str(), 30))
        }
    }
}

/// Render a pattern as an indented tree, one node per line
///
/// A group lists its alternatives in order followed by its suffix.
pub fn to_treeviz_str(pattern: &Pattern) -> String {
    let root = pattern.root();
    let mut result = display_label(root);
    result.push('\n');
    append_children(&mut result, root, "");
    result
}

fn append_children(result: &mut String, expr: &GlobExpr, prefix: &str) {
    let GlobExpr::Group(group) = expr else {
        return;
    };

    let entries: Vec<(&str, &GlobExpr)> = group
        .children()
        .iter()
        .map(|child| ("", child))
        .chain(std::iter::once(("suffix ", group.suffix())))
        .collect();

    for (i, (role, child)) in entries.iter().enumerate() {
        let is_last = i == entries.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };

        result.push_str(&format!(
            "{}{} {}{}\n",
            prefix,
            connector,
            role,
            display_label(child)
        ));

        let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        append_children(result, child, &new_prefix);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;

    #[test]
    fn test_literal_is_single_line() {
        let pattern = parse("plain").unwrap();
        assert_eq!(to_treeviz_str(&pattern), "Literal: \"plain\"\n");
    }

    #[test]
    fn test_simple_group() {
        let pattern = parse("a{b,c}d").unwrap();
        insta::assert_snapshot!(to_treeviz_str(&pattern), @r###"
        Group: prefix "a"
        ├─ Literal: "b"
        ├─ Literal: "c"
        └─ suffix Literal: "d"
        "###);
    }

    #[test]
    fn test_nested_group() {
        let pattern = parse("a{b,c{d,e}}f").unwrap();
        insta::assert_snapshot!(to_treeviz_str(&pattern), @r###"
        Group: prefix "a"
        ├─ Literal: "b"
        ├─ Group: prefix "c"
        │ ├─ Literal: "d"
        │ ├─ Literal: "e"
        │ └─ suffix Literal: ""
        └─ suffix Literal: "f"
        "###);
    }

    #[test]
    fn test_chained_groups_hang_off_suffix() {
        let pattern = parse("{x,y}{1,2}").unwrap();
        insta::assert_snapshot!(to_treeviz_str(&pattern), @r###"
        Group: prefix ""
        ├─ Literal: "x"
        ├─ Literal: "y"
        └─ suffix Group: prefix ""
          ├─ Literal: "1"
          ├─ Literal: "2"
          └─ suffix Literal: ""
        "###);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
