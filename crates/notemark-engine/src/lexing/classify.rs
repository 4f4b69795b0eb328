//! Per-line classification: one line in, at most one [`Bundle`] out.

use std::sync::OnceLock;

use regex::Regex;

use super::LexerState;
use super::bundle::Bundle;
use crate::inline::tokenize;

const FENCE: &str = "```";

fn heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,6}) (\S.*)$").expect("invalid heading pattern"))
}

fn horizontal_rule_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\*{3,}|-{3,}|_{3,})[ \t]*$").expect("invalid rule pattern"))
}

fn ordered_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([\t ]*)\d{1,3}\. (\S.*)$").expect("invalid ordered item pattern")
    })
}

fn unordered_item_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([\t ]*)[-*+] (\S.*)$").expect("invalid unordered item pattern")
    })
}

/// Classifies one line, updating the fence toggle in `state`.
///
/// Returns `None` for the line that closes a code fence: the fence bundle
/// is emitted only by the opening line. While the fence is open every line
/// is wrapped verbatim as [`Bundle::CodeLine`], so heading/list/rule
/// patterns never fire inside a code block. A code line that itself starts
/// with three backticks closes the block; the original exhibits the same
/// limitation and it is kept here.
pub(super) fn classify_line(line: &str, state: &mut LexerState) -> Option<Bundle> {
    if state.in_code_block {
        if line.starts_with(FENCE) {
            state.in_code_block = false;
            return None;
        }
        return Some(Bundle::CodeLine {
            text: line.to_string(),
        });
    }

    if let Some(caps) = heading_re().captures(line) {
        return Some(Bundle::Heading {
            level: caps[1].len() as u8,
            tokens: tokenize(caps[2].trim_end()),
        });
    }

    if line.trim().is_empty() {
        return Some(Bundle::NewLine);
    }

    if horizontal_rule_re().is_match(line) {
        return Some(Bundle::HorizontalRule);
    }

    if let Some(caps) = ordered_item_re().captures(line) {
        return Some(Bundle::ListItemOrdered {
            indent: indent_units(&caps[1]),
            tokens: tokenize(caps[2].trim_end()),
        });
    }

    if let Some(caps) = unordered_item_re().captures(line) {
        return Some(Bundle::ListItemUnordered {
            indent: indent_units(&caps[1]),
            tokens: tokenize(caps[2].trim_end()),
        });
    }

    if let Some(tag) = line.strip_prefix(FENCE) {
        state.in_code_block = true;
        return Some(Bundle::CodeFence {
            language: tag.trim().to_string(),
        });
    }

    Some(Bundle::Paragraph {
        tokens: tokenize(line.trim()),
    })
}

/// Counts logical indentation units in a whitespace prefix.
///
/// A tab or a run of four spaces is one unit; 1-3 leftover spaces do not
/// increment. A tab resets a partial space run.
pub(super) fn indent_units(prefix: &str) -> usize {
    let mut units = 0;
    let mut space_run = 0;
    for c in prefix.chars() {
        match c {
            '\t' => {
                units += 1;
                space_run = 0;
            }
            ' ' => {
                space_run += 1;
                if space_run == 4 {
                    units += 1;
                    space_run = 0;
                }
            }
            _ => {}
        }
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::Token;
    use pretty_assertions::assert_eq;

    fn classify(line: &str) -> Option<Bundle> {
        let mut state = LexerState::new();
        classify_line(line, &mut state)
    }

    #[test]
    fn heading_levels() {
        let bundle = classify("### Title");
        assert_eq!(
            bundle,
            Some(Bundle::Heading {
                level: 3,
                tokens: vec![Token::Text("Title".to_string())],
            })
        );
    }

    #[test]
    fn seven_hashes_fall_through_to_paragraph() {
        let bundle = classify("####### Title");
        assert!(matches!(bundle, Some(Bundle::Paragraph { .. })));
    }

    #[test]
    fn heading_requires_space_and_content() {
        assert!(matches!(classify("#Title"), Some(Bundle::Paragraph { .. })));
        assert!(matches!(classify("# "), Some(Bundle::Paragraph { .. })));
    }

    #[test]
    fn blank_line() {
        assert_eq!(classify(""), Some(Bundle::NewLine));
        assert_eq!(classify("   \t"), Some(Bundle::NewLine));
    }

    #[test]
    fn horizontal_rules() {
        assert_eq!(classify("---"), Some(Bundle::HorizontalRule));
        assert_eq!(classify("*****"), Some(Bundle::HorizontalRule));
        assert_eq!(classify("___ "), Some(Bundle::HorizontalRule));
        assert!(matches!(classify("--"), Some(Bundle::Paragraph { .. })));
        assert!(matches!(classify("-*-"), Some(Bundle::Paragraph { .. })));
    }

    #[test]
    fn ordered_items() {
        assert_eq!(
            classify("12. twelfth"),
            Some(Bundle::ListItemOrdered {
                indent: 0,
                tokens: vec![Token::Text("twelfth".to_string())],
            })
        );
        // Four digits exceed the marker pattern.
        assert!(matches!(
            classify("1000. nope"),
            Some(Bundle::Paragraph { .. })
        ));
    }

    #[test]
    fn unordered_items_accept_three_markers() {
        for line in ["- a", "* a", "+ a"] {
            assert_eq!(
                classify(line),
                Some(Bundle::ListItemUnordered {
                    indent: 0,
                    tokens: vec![Token::Text("a".to_string())],
                }),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn marker_without_space_is_paragraph() {
        assert!(matches!(classify("-a"), Some(Bundle::Paragraph { .. })));
        assert!(matches!(classify("*a*"), Some(Bundle::Paragraph { .. })));
    }

    #[test]
    fn indent_units_count_tabs_and_space_groups() {
        assert_eq!(indent_units(""), 0);
        assert_eq!(indent_units("\t"), 1);
        assert_eq!(indent_units("\t\t"), 2);
        assert_eq!(indent_units("    "), 1);
        assert_eq!(indent_units("       "), 1); // 7 spaces: one unit + 3 left over
        assert_eq!(indent_units("        "), 2);
        assert_eq!(indent_units("   "), 0);
        assert_eq!(indent_units("  \t"), 1); // tab resets the partial run
    }

    #[test]
    fn fence_open_carries_language() {
        assert_eq!(
            classify("```js"),
            Some(Bundle::CodeFence {
                language: "js".to_string(),
            })
        );
        assert_eq!(
            classify("```"),
            Some(Bundle::CodeFence {
                language: String::new(),
            })
        );
    }
}
