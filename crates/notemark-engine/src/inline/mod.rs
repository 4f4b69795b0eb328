//! Inline tokenizer: one line of content in, an ordered token sequence out.
//!
//! The input is a line that has already been trimmed and stripped of its
//! line-kind prefix (the `#` run of a heading, the `- ` of a list item).
//! At each scan position the rules in [`inline_rules`] are tried in
//! priority order; the first whose pattern matches at the position wins,
//! emits its token and advances the scan by the matched length. When no
//! rule matches, the fallback consumes a plain-text run up to the next
//! position where any rule could match, so the scan always advances and
//! every character lands in exactly one token.

mod token;

pub use token::Token;

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// One priority-ordered inline rule.
///
/// `anchored` decides whether the rule matches at the current scan
/// position. `scan` is the same pattern without the anchor; the text
/// fallback uses it to find the next position any rule could match, which
/// makes every rule's pattern double as an exclusion term for plain text.
struct InlineRule {
    anchored: Regex,
    scan: Regex,
    build: fn(&Captures) -> Token,
}

impl InlineRule {
    fn new(core: &str, build: fn(&Captures) -> Token) -> Self {
        Self {
            anchored: Regex::new(&format!("^(?:{core})")).expect("invalid inline pattern"),
            scan: Regex::new(core).expect("invalid inline pattern"),
            build,
        }
    }
}

const BOLD: &str = r"\*\*(\S(?:.*?\S)?)\*\*";
const CODE_SPAN: &str = "`([^`]+)`";
const ITALIC: &str = r"\*([^\s*](?:[^*]*[^\s*])?)\*";
const STRIKE: &str = r"~~(\S(?:.*?\S)?)~~";
const LINK_NAMED: &str = r"\[([^\]]*)\]\(([^)]*)\)";
const LINK_BARE: &str = r"https?://[\w/:%#$&?()~.=+-]+";
// The closed set of hyphenated digit groupings recognized as phone
// numbers: 2-4-4, 3-3-4, 4-2-4 and 5-1-4 fixed lines, 0[5789]0 mobile,
// 0120 toll-free.
const LINK_PHONE: &str = r"0\d-\d{4}-\d{4}|0\d{2}-\d{3}-\d{4}|0\d{3}-\d{2}-\d{4}|0\d{4}-\d-\d{4}|0[5789]0-\d{4}-\d{4}|0120-\d{3}-\d{3}";
const SPACE_FULL: &str = "\u{3000}";
const SPACE_HALF: &str = " ";
const TAB: &str = r"\t|[ ]{4}";

/// The inline rules in match priority order.
///
/// Order is significant: bold outranks italic so `**` is never consumed as
/// an empty-bodied italic, and both space ornaments outrank the
/// tab-or-4-spaces rule.
fn inline_rules() -> &'static [InlineRule] {
    static RULES: OnceLock<Vec<InlineRule>> = OnceLock::new();
    RULES
        .get_or_init(|| {
            vec![
                InlineRule::new(BOLD, |caps| Token::Bold(caps[1].to_string())),
                InlineRule::new(CODE_SPAN, |caps| Token::Code(caps[1].to_string())),
                InlineRule::new(ITALIC, |caps| Token::Italic(caps[1].to_string())),
                InlineRule::new(STRIKE, |caps| Token::Strike(caps[1].to_string())),
                InlineRule::new(LINK_NAMED, |caps| Token::LinkNamed {
                    name: caps[1].to_string(),
                    link: caps[2].to_string(),
                }),
                InlineRule::new(LINK_BARE, |caps| Token::LinkBare {
                    link: caps[0].to_string(),
                }),
                InlineRule::new(LINK_PHONE, |caps| Token::LinkPhone {
                    link: caps[0].to_string(),
                }),
                InlineRule::new(SPACE_FULL, |_| Token::SpaceFull),
                InlineRule::new(SPACE_HALF, |_| Token::SpaceHalf),
                InlineRule::new(TAB, |_| Token::Tab),
            ]
        })
        .as_slice()
}

/// Tokenizes one line of trimmed, prefix-stripped content.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        if let Some((token, consumed)) = match_at_start(rest) {
            tokens.push(token);
            rest = &rest[consumed..];
            continue;
        }
        let run = text_run_len(rest);
        tokens.push(Token::Text(rest[..run].to_string()));
        rest = &rest[run..];
    }

    tokens
}

/// Tries each rule's anchored pattern at the start of `rest`.
fn match_at_start(rest: &str) -> Option<(Token, usize)> {
    for rule in inline_rules() {
        if let Some(caps) = rule.anchored.captures(rest)
            && let Some(whole) = caps.get(0)
        {
            return Some(((rule.build)(&caps), whole.end()));
        }
    }
    None
}

/// Length of the plain-text run starting at `rest`.
///
/// Scans past the first character (no rule matched there) and stops at the
/// earliest position where any rule's pattern matches, or at end of line.
fn text_run_len(rest: &str) -> usize {
    let first = rest.chars().next().map_or(0, char::len_utf8);
    let tail = &rest[first..];
    let mut stop = rest.len();
    for rule in inline_rules() {
        if let Some(found) = rule.scan.find(tail) {
            stop = stop.min(first + found.start());
        }
    }
    stop
}
