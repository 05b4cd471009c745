//! Re-indentation of multi-line text for embedding in generated code.

/// Prefix every line except the first with `indent`.
///
/// Blank and whitespace-only lines are left as they are, so the result never
/// carries indentation-only lines that were not already there. The first line
/// is expected to follow an indent already written by the caller.
///
/// Not idempotent: each call adds another level, so call it exactly once per
/// embedding.
pub fn reindent(text: &str, indent: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_untouched() {
        assert_eq!(reindent("  first\nsecond", "    "), "  first\n    second");
    }

    #[test]
    fn blank_lines_stay_blank() {
        assert_eq!(reindent("a\n\nb\n   \nc", "    "), "a\n\n    b\n   \n    c");
    }

    #[test]
    fn empty_text() {
        assert_eq!(reindent("", "    "), "");
    }

    #[test]
    fn single_line() {
        assert_eq!(reindent("only", "    "), "only");
    }

    #[test]
    fn trailing_newline_is_dropped() {
        assert_eq!(reindent("a\nb\n", "  "), "a\n  b");
    }

    #[test]
    fn indent_accumulates() {
        let once = reindent("a\nb", "  ");
        assert_eq!(reindent(&once, "  "), "a\n    b");
    }
}
